use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug_span, info};

use super::{DictError, EMBEDDED_DICT, EMBEDDED_DICT_LABEL};

/// Word → frequency table with synthesized zero-weight prefixes.
///
/// `total` only accumulates frequencies read from the dictionary; placeholder
/// prefixes contribute nothing to it.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    weights: HashMap<String, u64>,
    total: u64,
}

/// Summary counts for a loaded table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    /// Number of keys, placeholders included.
    pub keys: usize,
    /// Number of keys with frequency >= 1.
    pub words: usize,
    pub total: u64,
}

impl FrequencyTable {
    /// Load a dictionary from any line-oriented reader.
    ///
    /// `path` is only used to label errors. Blank lines are skipped; any other
    /// line must be `word<SP>freq[<SP>ignored...]`. The first malformed line
    /// aborts the load.
    pub fn from_reader(reader: impl BufRead, path: &str) -> Result<Self, DictError> {
        let _span = debug_span!("load_dictionary", path).entered();
        let mut table = Self::default();
        let mut line_count = 0usize;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = idx + 1;
            line_count = line_number;

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some((word, freq)) = parse_line(line) else {
                return Err(DictError::Format {
                    path: path.to_string(),
                    line_number,
                    raw_line: line.to_string(),
                });
            };
            if table.insert(word, freq).is_none() {
                return Err(DictError::TotalOverflow {
                    path: path.to_string(),
                    line_number,
                    raw_line: line.to_string(),
                });
            }
        }

        let stats = table.stats();
        info!(
            path,
            line_count,
            keys = stats.keys,
            word_count = stats.words,
            total = stats.total,
            "dictionary loaded"
        );
        Ok(table)
    }

    /// Load a dictionary held in memory.
    pub fn load_str(content: &str, path: &str) -> Result<Self, DictError> {
        Self::from_reader(content.as_bytes(), path)
    }

    /// Open and load a dictionary file.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), &path.display().to_string())
    }

    /// Load the bundled default dictionary.
    pub fn embedded() -> Self {
        Self::load_str(EMBEDDED_DICT, EMBEDDED_DICT_LABEL)
            .expect("embedded dictionary is validated by build.rs")
    }

    /// Record one dictionary entry and close its prefixes.
    ///
    /// A later entry for the same word replaces the earlier frequency, but
    /// both are counted in `total`, matching line-by-line accumulation.
    /// Returns `None`, leaving the table untouched, if `total` would overflow.
    fn insert(&mut self, word: &str, freq: u64) -> Option<()> {
        self.total = self.total.checked_add(freq)?;
        self.weights.insert(word.to_string(), freq);

        for (idx, _) in word.char_indices().skip(1) {
            let prefix = &word[..idx];
            if !self.weights.contains_key(prefix) {
                self.weights.insert(prefix.to_string(), 0);
            }
        }
        Some(())
    }

    /// Frequency of `word`; `Some(0)` for a prefix placeholder.
    pub fn freq(&self, word: &str) -> Option<u64> {
        self.weights.get(word).copied()
    }

    /// Whether `word` is a key (real word or prefix placeholder).
    pub fn contains(&self, word: &str) -> bool {
        self.weights.contains_key(word)
    }

    /// Whether `word` was listed in the dictionary with frequency >= 1.
    pub fn is_word(&self, word: &str) -> bool {
        self.freq(word).is_some_and(|f| f > 0)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of keys, placeholders included.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate over all `(key, frequency)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.weights.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            keys: self.weights.len(),
            words: self.weights.values().filter(|&&f| f > 0).count(),
            total: self.total,
        }
    }
}

/// Split a trimmed, non-empty line into `(word, freq)`.
///
/// Fields are separated by exactly one space, so `"w  5"` has an empty second
/// field and is rejected.
fn parse_line(line: &str) -> Option<(&str, u64)> {
    let mut fields = line.split(' ');
    let word = fields.next()?;
    let freq = fields.next()?.parse::<u64>().ok()?;
    Some((word, freq))
}
