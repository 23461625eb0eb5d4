//! Word-frequency dictionary storage.
//!
//! `FrequencyTable` maps every dictionary word to its observed frequency and
//! additionally stores each strict prefix of every word with frequency 0, so a
//! single hash lookup answers both "is this a word" and "can a word still
//! start with this".

mod freq_table;

pub use freq_table::{FrequencyTable, TableStats};

use std::io;

/// Bundled default dictionary, validated by `build.rs`.
pub const EMBEDDED_DICT: &str = include_str!("default_dict.txt");

/// Source label used in errors raised while loading [`EMBEDDED_DICT`].
pub const EMBEDDED_DICT_LABEL: &str = "<embedded>";

/// Error raised while loading a dictionary source.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid dictionary entry in {path} at line {line_number}: {raw_line}")]
    Format {
        path: String,
        line_number: usize,
        raw_line: String,
    },

    #[error("frequency total overflows in {path} at line {line_number}: {raw_line}")]
    TotalOverflow {
        path: String,
        line_number: usize,
        raw_line: String,
    },
}
