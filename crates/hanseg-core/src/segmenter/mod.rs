//! Maximum-probability segmentation.
//!
//! Builds a candidate graph of dictionary words over the sentence, resolves
//! the highest log-probability route backwards from the end, then walks the
//! route forward to emit tokens.

mod dag;
mod emit;
pub mod explain;
mod route;
mod sentence;

#[cfg(test)]
mod tests;

use crate::dict::FrequencyTable;

pub use dag::{build_dag, CandidateGraph};
pub use emit::Tokens;
pub use explain::{explain, Explanation};
pub use route::{calc_route, Route, RouteEntry};
pub use sentence::Sentence;

/// Segment `sentence` into tokens using `table`.
///
/// The graph and route are computed up front; tokens are produced lazily and
/// borrow from `sentence`. An empty sentence yields no tokens.
pub fn cut<'a>(table: &FrequencyTable, sentence: &'a str) -> Tokens<'a> {
    let sentence = Sentence::new(sentence);
    let dag = build_dag(table, &sentence);
    let route = calc_route(table, &sentence, &dag);
    Tokens::new(sentence, route)
}
