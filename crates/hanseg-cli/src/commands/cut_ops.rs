use std::io::{self, BufRead, Write};

use tracing::debug;

use hanseg::settings::settings;

use super::load_segmenter;

/// Segment each of `texts`, or every stdin line when `texts` is empty.
pub fn cut_cmd(dict_file: Option<&str>, texts: &[String], delimiter: Option<&str>) {
    let segmenter = load_segmenter(dict_file);
    let delimiter = delimiter.unwrap_or(settings().cli.delimiter.as_str());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut write_line = |line: &str| {
        let tokens: Vec<&str> = segmenter.cut(line).collect();
        debug!(token_count = tokens.len(), "segmented");
        die!(
            writeln!(out, "{}", tokens.join(delimiter)),
            "Error writing output: {}"
        );
    };

    if texts.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = die!(line, "Error reading stdin: {}");
            write_line(&line);
        }
    } else {
        for text in texts {
            write_line(text);
        }
    }
}

pub fn explain_cmd(dict_file: Option<&str>, text: &str, json: bool) {
    let segmenter = load_segmenter(dict_file);
    let explanation = segmenter.explain(text);
    if json {
        let rendered = die!(
            serde_json::to_string_pretty(&explanation),
            "Error serializing explanation: {}"
        );
        println!("{rendered}");
    } else {
        print!("{}", explanation.render());
    }
}
