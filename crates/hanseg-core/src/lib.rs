//! Dictionary-driven Chinese word segmentation.
//!
//! A [`dict::FrequencyTable`] is loaded once from a `word freq` dictionary;
//! [`segmenter::cut`] then picks the maximum-probability segmentation of each
//! sentence. [`Segmenter`] bundles a table with the segmentation entry points.

pub mod dict;
mod engine;
pub mod segmenter;
pub mod settings;
pub mod unicode;

pub use engine::Segmenter;
