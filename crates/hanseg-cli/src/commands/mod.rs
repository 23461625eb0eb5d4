//! `segtool` subcommand implementations.
//!
//! Each command prints its result to stdout and exits the process with
//! status 1 on error.

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod cut_ops;
pub mod dict_ops;

use std::path::Path;

use hanseg::Segmenter;

/// Resolve the segmenter for a command and install it as the default.
///
/// `--dict` wins over `[dictionary] path` in the settings; with neither, the
/// bundled dictionary is used.
pub fn load_segmenter(dict_file: Option<&str>) -> &'static Segmenter {
    match dict_file {
        Some(path) => {
            let segmenter = die!(
                Segmenter::from_path(Path::new(path)),
                "Error opening dictionary: {}"
            );
            die!(hanseg::init_default(segmenter), "Error: {}");
        }
        None => die!(hanseg::init_default_from_settings(), "Error opening dictionary: {}"),
    }
    hanseg::default_segmenter()
}
