use std::path::Path;

use crate::dict::{DictError, FrequencyTable};
use crate::segmenter::{self, Explanation, Tokens};
use crate::settings::Settings;

/// A loaded dictionary ready to segment text.
///
/// Immutable once built, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Segmenter {
    table: FrequencyTable,
}

impl Segmenter {
    pub fn new(table: FrequencyTable) -> Self {
        Self { table }
    }

    /// Load a segmenter from a dictionary file.
    pub fn from_path(path: &Path) -> Result<Self, DictError> {
        Ok(Self::new(FrequencyTable::open(path)?))
    }

    /// Segmenter over the bundled dictionary.
    pub fn embedded() -> Self {
        Self::new(FrequencyTable::embedded())
    }

    /// Segmenter over the dictionary named by `settings`, falling back to the
    /// bundled one when no path is configured.
    pub fn from_settings(settings: &Settings) -> Result<Self, DictError> {
        match settings.dictionary.path() {
            Some(path) => Self::from_path(path),
            None => Ok(Self::embedded()),
        }
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    /// Segment `sentence` lazily. See [`segmenter::cut`].
    pub fn cut<'a>(&self, sentence: &'a str) -> Tokens<'a> {
        segmenter::cut(&self.table, sentence)
    }

    pub fn cut_to_vec<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        self.cut(sentence).collect()
    }

    pub fn explain(&self, sentence: &str) -> Explanation {
        segmenter::explain(&self.table, sentence)
    }
}

impl From<FrequencyTable> for Segmenter {
    fn from(table: FrequencyTable) -> Self {
        Self::new(table)
    }
}
