//! Chinese word segmentation with a process-wide default segmenter.
//!
//! The engine itself lives in `hanseg_core`; this crate re-exports it and adds
//! the lazily built default instance:
//!
//! - `default_segmenter()` builds the bundled-dictionary segmenter on first
//!   call; concurrent first callers block until it is ready
//! - `init_default(segmenter)` installs a different one before first use
//! - `cut(sentence)` segments with the default instance

mod trace_init;

use std::sync::OnceLock;

use tracing::info;

pub use hanseg_core::dict::{DictError, FrequencyTable};
pub use hanseg_core::segmenter::{Explanation, Tokens};
pub use hanseg_core::{dict, segmenter, settings, unicode, Segmenter};
pub use trace_init::init_tracing;

static DEFAULT: OnceLock<Segmenter> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("default segmenter already initialized")]
    AlreadyInitialized,
    #[error(transparent)]
    Dict(#[from] DictError),
}

/// Install `segmenter` as the default. Fails once the default exists.
pub fn init_default(segmenter: Segmenter) -> Result<(), InitError> {
    DEFAULT
        .set(segmenter)
        .map_err(|_| InitError::AlreadyInitialized)
}

/// Install the segmenter described by the global settings as the default.
///
/// The dictionary is loaded before the default is checked, so a load error is
/// reported even when the default already exists.
pub fn init_default_from_settings() -> Result<(), InitError> {
    let segmenter = Segmenter::from_settings(settings::settings())?;
    init_default(segmenter)
}

/// Get or build the default segmenter.
pub fn default_segmenter() -> &'static Segmenter {
    DEFAULT.get_or_init(|| {
        let segmenter = Segmenter::embedded();
        info!(
            total = segmenter.table().total(),
            "default segmenter built from bundled dictionary"
        );
        segmenter
    })
}

/// Segment `sentence` with the default segmenter.
pub fn cut(sentence: &str) -> Tokens<'_> {
    default_segmenter().cut(sentence)
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_default_cut() {
        let tokens: Vec<&str> = cut("我来到北京清华大学").collect();
        assert_eq!(tokens, vec!["我", "来到", "北京", "清华大学"]);
    }

    #[test]
    fn test_default_is_built_once() {
        let first = default_segmenter() as *const Segmenter;
        let handles: Vec<_> = (0..4)
            .map(|_| thread::spawn(|| default_segmenter() as *const Segmenter as usize))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), first as usize);
        }
    }

    #[test]
    fn test_init_after_first_use_fails() {
        default_segmenter();
        let err = init_default(Segmenter::new(FrequencyTable::default())).unwrap_err();
        assert!(matches!(err, InitError::AlreadyInitialized));
        assert!(matches!(
            init_default_from_settings(),
            Err(InitError::AlreadyInitialized)
        ));
    }
}
