/// A sentence with precomputed char → byte offsets.
///
/// Offsets are char indices; `offsets` has `char_count + 1` entries so that
/// any half-open char range maps to a byte range without rescanning.
#[derive(Debug, Clone)]
pub struct Sentence<'a> {
    text: &'a str,
    offsets: Vec<usize>,
}

impl<'a> Sentence<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        offsets.push(text.len());
        Self { text, offsets }
    }

    pub fn char_count(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Chars `start..end` (half-open) of the sentence.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        let text: &'a str = self.text;
        &text[self.offsets[start]..self.offsets[end]]
    }

    /// Chars `start..=end` of the sentence.
    pub fn word(&self, start: usize, end: usize) -> &'a str {
        self.slice(start, end + 1)
    }
}
