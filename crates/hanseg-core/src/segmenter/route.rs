use tracing::{debug, debug_span};

use crate::dict::FrequencyTable;

use super::dag::CandidateGraph;
use super::sentence::Sentence;

/// Best continuation from one offset: cumulative log-probability of the best
/// path to the end of the sentence, and the inclusive end of its first word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteEntry {
    pub score: f64,
    pub end: usize,
}

impl RouteEntry {
    /// Entry for offset `N`. Its `end` is never followed.
    const SENTINEL: RouteEntry = RouteEntry { score: 0.0, end: 0 };

    /// Whether `self` beats `other`: higher score, or equal score and a
    /// larger end offset (the longer word).
    fn beats(&self, other: &RouteEntry) -> bool {
        if self.score != other.score {
            self.score > other.score
        } else {
            self.end > other.end
        }
    }
}

/// Dynamic-programming table over offsets `0..=N`.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    entries: Vec<RouteEntry>,
}

impl Route {
    pub fn get(&self, offset: usize) -> RouteEntry {
        self.entries[offset]
    }

    /// Inclusive end of the first word on the best path from `offset`.
    pub fn end(&self, offset: usize) -> usize {
        self.entries[offset].end
    }

    /// Score of the best segmentation of the whole sentence.
    pub fn best_score(&self) -> f64 {
        self.entries[0].score
    }

    /// Number of entries, sentinel included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Word boundaries of the best path as half-open char ranges.
    pub fn spans(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let last = self.entries.len() - 1;
        let mut x = 0;
        std::iter::from_fn(move || {
            if x >= last {
                return None;
            }
            let y = self.entries[x].end + 1;
            let span = (x, y);
            x = y;
            Some(span)
        })
    }
}

/// Log-probability weight of a candidate word.
///
/// Words missing from the table and prefix placeholders both count as
/// frequency 1.
fn log_freq(table: &FrequencyTable, word: &str) -> f64 {
    let freq = table.freq(word).filter(|&f| f > 0).unwrap_or(1);
    (freq as f64).ln()
}

/// Compute the best route through `dag`, resolving offsets from the end of
/// the sentence backwards.
pub fn calc_route(table: &FrequencyTable, sentence: &Sentence<'_>, dag: &CandidateGraph) -> Route {
    let char_count = sentence.char_count();
    let _span = debug_span!("calc_route", char_count).entered();
    let log_total = (table.total().max(1) as f64).ln();

    let mut entries = vec![RouteEntry::SENTINEL; char_count + 1];
    for start in (0..char_count).rev() {
        let mut best: Option<RouteEntry> = None;
        for &end in dag.ends(start) {
            let candidate = RouteEntry {
                score: log_freq(table, sentence.word(start, end)) - log_total
                    + entries[end + 1].score,
                end,
            };
            if best.map_or(true, |b| candidate.beats(&b)) {
                best = Some(candidate);
            }
        }
        if let Some(best) = best {
            entries[start] = best;
        }
    }

    debug!(best_score = entries[0].score);
    Route { entries }
}
