use serde::Serialize;

use crate::dict::FrequencyTable;

use super::dag::{build_dag, CandidateGraph};
use super::emit::Tokens;
use super::route::{calc_route, Route};
use super::sentence::Sentence;

/// Full diagnostic result for a single sentence.
#[derive(Debug, Serialize)]
pub struct Explanation {
    pub sentence: String,
    pub char_count: usize,
    pub total: u64,
    pub graph: Vec<ExplainStart>,
    pub route: Vec<ExplainStep>,
    pub best_score: f64,
    pub tokens: Vec<String>,
}

/// Candidate words starting at one offset.
#[derive(Debug, Serialize)]
pub struct ExplainStart {
    pub start: usize,
    pub candidates: Vec<ExplainCandidate>,
}

#[derive(Debug, Serialize)]
pub struct ExplainCandidate {
    pub end: usize,
    pub word: String,
    /// `None` when the word is only reachable through the fallback edge.
    pub freq: Option<u64>,
}

/// One word on the chosen path.
#[derive(Debug, Serialize)]
pub struct ExplainStep {
    pub start: usize,
    pub end: usize,
    pub word: String,
    /// Best cumulative log-probability from `start` to the end of the sentence.
    pub score: f64,
}

fn explain_graph(
    table: &FrequencyTable,
    sentence: &Sentence<'_>,
    dag: &CandidateGraph,
) -> Vec<ExplainStart> {
    dag.iter()
        .map(|(start, ends)| ExplainStart {
            start,
            candidates: ends
                .iter()
                .map(|&end| {
                    let word = sentence.word(start, end);
                    ExplainCandidate {
                        end,
                        word: word.to_string(),
                        freq: table.freq(word).filter(|&f| f > 0),
                    }
                })
                .collect(),
        })
        .collect()
}

fn explain_route(sentence: &Sentence<'_>, route: &Route) -> Vec<ExplainStep> {
    route
        .spans()
        .map(|(start, end)| ExplainStep {
            start,
            end: end - 1,
            word: sentence.slice(start, end).to_string(),
            score: route.get(start).score,
        })
        .collect()
}

/// Run the full pipeline on `text` and capture every intermediate stage.
pub fn explain(table: &FrequencyTable, text: &str) -> Explanation {
    let sentence = Sentence::new(text);
    let dag = build_dag(table, &sentence);
    let route = calc_route(table, &sentence, &dag);

    let graph = explain_graph(table, &sentence, &dag);
    let steps = explain_route(&sentence, &route);
    let best_score = route.best_score();
    let tokens = Tokens::new(sentence.clone(), route)
        .map(str::to_string)
        .collect();

    Explanation {
        sentence: text.to_string(),
        char_count: sentence.char_count(),
        total: table.total(),
        graph,
        route: steps,
        best_score,
        tokens,
    }
}

impl Explanation {
    /// Human-readable multi-line rendering.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "sentence: {} ({} chars, total={})\n",
            self.sentence, self.char_count, self.total
        ));
        out.push_str("graph:\n");
        for start in &self.graph {
            let cands: Vec<String> = start
                .candidates
                .iter()
                .map(|c| match c.freq {
                    Some(f) => format!("{}({})", c.word, f),
                    None => format!("{}(?)", c.word),
                })
                .collect();
            out.push_str(&format!("  {:>3}: {}\n", start.start, cands.join(" ")));
        }
        out.push_str("route:\n");
        for step in &self.route {
            out.push_str(&format!(
                "  {:>3}..={:<3} {:<8} {:.4}\n",
                step.start, step.end, step.word, step.score
            ));
        }
        out.push_str(&format!("tokens: {}\n", self.tokens.join(" / ")));
        out
    }
}
