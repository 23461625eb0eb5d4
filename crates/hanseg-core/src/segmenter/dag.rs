use tracing::{debug, debug_span};

use crate::dict::FrequencyTable;

use super::sentence::Sentence;

/// Candidate word boundaries for one sentence.
///
/// `ends[i]` lists, in ascending order, every inclusive end offset `j` such
/// that chars `i..=j` form a dictionary word. A start with no dictionary word
/// gets the single fallback end `i`, so no list is ever empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateGraph {
    ends: Vec<Vec<usize>>,
}

impl CandidateGraph {
    /// End offsets for `start`.
    pub fn ends(&self, start: usize) -> &[usize] {
        &self.ends[start]
    }

    /// Number of start offsets (the sentence's char count).
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// Iterate over `(start, ends)` pairs in start order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.ends.iter().enumerate().map(|(i, e)| (i, e.as_slice()))
    }
}

/// Build the candidate graph of `sentence` against `table`.
///
/// Each start offset extends a fragment one char at a time while the fragment
/// is still a key of the table (word or prefix placeholder), so the scan per
/// start is bounded by the longest dictionary word starting there.
pub fn build_dag(table: &FrequencyTable, sentence: &Sentence<'_>) -> CandidateGraph {
    let char_count = sentence.char_count();
    let _span = debug_span!("build_dag", char_count).entered();
    let mut ends: Vec<Vec<usize>> = Vec::with_capacity(char_count);
    let mut edge_count = 0usize;

    for start in 0..char_count {
        let mut list = Vec::new();
        for end in start..char_count {
            match table.freq(sentence.word(start, end)) {
                None => break,
                Some(0) => {}
                Some(_) => list.push(end),
            }
        }
        if list.is_empty() {
            list.push(start);
        }
        edge_count += list.len();
        ends.push(list);
    }

    debug!(edge_count);
    CandidateGraph { ends }
}
