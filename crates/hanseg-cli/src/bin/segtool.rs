use std::io;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hanseg_cli::commands::{config_ops, cut_ops, dict_ops};

#[derive(Parser)]
#[command(name = "segtool", about = "Chinese word segmentation tool")]
struct Cli {
    /// Custom settings TOML
    #[arg(long, global = true)]
    config: Option<String>,
    /// Log segmentation internals to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Segment text (arguments, or stdin lines when none are given)
    Cut {
        /// Dictionary file (default: settings, then bundled)
        #[arg(long)]
        dict: Option<String>,
        /// Token separator (default: settings cli.delimiter)
        #[arg(short, long)]
        delimiter: Option<String>,
        /// Sentences to segment
        text: Vec<String>,
    },
    /// Show dictionary statistics
    Info {
        /// Dictionary file
        #[arg(long)]
        dict: Option<String>,
    },
    /// Look up a word's frequency
    Lookup {
        /// Dictionary file
        #[arg(long)]
        dict: Option<String>,
        /// Word to look up
        word: String,
    },
    /// Show the candidate graph and best route for a sentence
    Explain {
        /// Dictionary file
        #[arg(long)]
        dict: Option<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
        /// Sentence to explain
        text: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("hanseg=debug,hanseg_core=debug,segtool=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(file) = cli.config.as_deref() {
        config_ops::load_config(file);
    }

    match cli.command {
        Command::Cut {
            dict,
            delimiter,
            text,
        } => cut_ops::cut_cmd(dict.as_deref(), &text, delimiter.as_deref()),
        Command::Info { dict } => dict_ops::info(dict.as_deref()),
        Command::Lookup { dict, word } => dict_ops::lookup(dict.as_deref(), &word),
        Command::Explain { dict, json, text } => {
            cut_ops::explain_cmd(dict.as_deref(), &text, json)
        }
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
