//! Property-based tests for segmentation invariants.
//!
//! Sentences and dictionaries are drawn from one small alphabet, so generated
//! input exercises dictionary words, prefix placeholders, unknown characters
//! and ASCII runs together.

use proptest::prelude::*;

use super::{cut_vec, table};
use crate::dict::FrequencyTable;
use crate::segmenter::{build_dag, calc_route, Sentence};
use crate::unicode::is_mergeable_fragment;

const DICT: &str = "\
中国 100
中 50
国 50
中国人 20
人 80
人民 40
北京 30
2024 10
年 5
ab 3
";

fn law_table() -> FrequencyTable {
    table(DICT)
}

fn arb_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        '中', '国', '人', '民', '北', '京', '年', '好', '2', '0', '4', 'a', 'b', 'Z', '-', ' ',
    ])
}

fn arb_sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_char(), 0..24).prop_map(|cs| cs.into_iter().collect())
}

fn arb_word() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_char().prop_filter("no separator", |c| *c != ' '), 1..5)
        .prop_map(|cs| cs.into_iter().collect())
}

fn arb_freq() -> impl Strategy<Value = u64> {
    prop_oneof![1 => Just(0u64), 4 => 1u64..1000]
}

/// Dictionary text with random words and frequencies, zeros included.
/// Some entries also list their own leading half as a separate word.
fn arb_dict() -> impl Strategy<Value = String> {
    prop::collection::vec((arb_word(), arb_freq(), any::<bool>(), arb_freq()), 0..12).prop_map(
        |entries| {
            let mut content = String::new();
            for (word, freq, with_prefix, prefix_freq) in entries {
                let chars: Vec<char> = word.chars().collect();
                if with_prefix && chars.len() > 1 {
                    let prefix: String = chars[..(chars.len() + 1) / 2].iter().collect();
                    content.push_str(&format!("{prefix} {prefix_freq}\n"));
                }
                content.push_str(&format!("{word} {freq}\n"));
            }
            content
        },
    )
}

proptest! {
    #[test]
    fn concatenation_reproduces_input(s in arb_sentence()) {
        let t = law_table();
        let tokens = cut_vec(&t, &s);
        prop_assert_eq!(tokens.concat(), s);
    }

    #[test]
    fn concatenation_holds_for_any_dictionary(dict in arb_dict(), s in arb_sentence()) {
        let t = table(&dict);
        let tokens = cut_vec(&t, &s);
        prop_assert_eq!(tokens.concat(), s);
    }

    #[test]
    fn no_empty_tokens(s in arb_sentence()) {
        let t = law_table();
        for token in cut_vec(&t, &s) {
            prop_assert!(!token.is_empty());
        }
    }

    #[test]
    fn every_offset_has_a_candidate(s in arb_sentence()) {
        let t = law_table();
        let sentence = Sentence::new(&s);
        let dag = build_dag(&t, &sentence);
        prop_assert_eq!(dag.len(), sentence.char_count());
        for (start, ends) in dag.iter() {
            prop_assert!(!ends.is_empty());
            prop_assert!(ends.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(ends[0] >= start);
        }
    }

    #[test]
    fn every_offset_has_a_candidate_for_any_dictionary(
        dict in arb_dict(),
        s in arb_sentence(),
    ) {
        let t = table(&dict);
        let sentence = Sentence::new(&s);
        let dag = build_dag(&t, &sentence);
        prop_assert_eq!(dag.len(), sentence.char_count());
        for (start, ends) in dag.iter() {
            prop_assert!(!ends.is_empty());
            prop_assert!(ends.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(ends[0] >= start);
            prop_assert!(ends.iter().all(|&e| e < sentence.char_count()));
        }
    }

    #[test]
    fn prefix_closure_for_any_dictionary(dict in arb_dict()) {
        let t = table(&dict);
        let mut total = 0u64;
        for line in dict.lines() {
            let (word, freq) = line.split_once(' ').unwrap();
            total += freq.parse::<u64>().unwrap();
            for (idx, _) in word.char_indices().skip(1) {
                prop_assert!(t.contains(&word[..idx]));
            }
        }
        prop_assert_eq!(t.total(), total);
    }

    #[test]
    fn adjacent_tokens_are_never_both_mergeable(s in arb_sentence()) {
        // Consecutive single ASCII alnum words are always fused, so two
        // neighbouring output tokens can't both be lone ASCII alnum chars.
        let t = law_table();
        let tokens = cut_vec(&t, &s);
        for pair in tokens.windows(2) {
            prop_assert!(!(is_mergeable_fragment(pair[0]) && is_mergeable_fragment(pair[1])));
        }
    }

    #[test]
    fn merged_runs_match_route(s in arb_sentence()) {
        // Token count equals route word count minus the words absorbed
        // into a preceding mergeable run.
        let t = law_table();
        let sentence = Sentence::new(&s);
        let dag = build_dag(&t, &sentence);
        let route = calc_route(&t, &sentence, &dag);
        let words: Vec<&str> = route.spans().map(|(x, y)| sentence.slice(x, y)).collect();
        let absorbed = words
            .windows(2)
            .filter(|w| is_mergeable_fragment(w[0]) && is_mergeable_fragment(w[1]))
            .count();
        prop_assert_eq!(cut_vec(&t, &s).len(), words.len() - absorbed);
    }

    #[test]
    fn unknown_non_ascii_chars_stay_single(s in prop::collection::vec(
        prop::sample::select(vec!['你', '好', '吗', '。']), 0..16)
    ) {
        let t = law_table();
        let text: String = s.iter().collect();
        let tokens = cut_vec(&t, &text);
        prop_assert_eq!(tokens.len(), s.len());
        for (token, ch) in tokens.iter().zip(&s) {
            prop_assert_eq!(*token, ch.to_string());
        }
    }

    #[test]
    fn ascii_alnum_run_is_one_token(run in "[a-zA-Z0-9]{1,12}") {
        // An empty table makes every char a fallback word
        let t = FrequencyTable::default();
        let text = format!("中{run}国");
        let tokens = cut_vec(&t, &text);
        prop_assert_eq!(tokens, vec!["中", run.as_str(), "国"]);
    }
}
