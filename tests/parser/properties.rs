//! Property tests for parse results
//!
//! Documents are generated from known words in the supported formats, so
//! the expected words and their order are known up front.

use std::collections::HashSet;

use proptest::prelude::*;
use wordscene_parser::{parse_vocabulary, word_list};

/// A word that cannot be mistaken for a header row.
///
/// Words like `Wordsworth` are real but read as noise once `word_list` puts
/// them on their own line, see `header_like_words_do_not_survive_word_list`.
fn arb_word() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-z]{1,7}(-[a-z]{2,4})?"
        .prop_filter("header prefix", |w| {
            !w.starts_with("Word") && !w.starts_with("Meaning")
        })
}

fn arb_meaning() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["拍打", "无处不在的", "护林员", "能力", "放弃"])
}

fn arb_pos() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["n.", "v.", "adj.", "adv"])
}

/// One line of a generated document and the words it contributes.
fn arb_line() -> impl Strategy<Value = (String, Vec<String>)> {
    prop_oneof![
        // bare word
        arb_word().prop_map(|w| (w.clone(), vec![w])),
        // numbered
        (1u32..500, arb_word(), arb_meaning())
            .prop_map(|(n, w, m)| (format!("{n}. {w} {m}"), vec![w])),
        // annotated
        (arb_word(), arb_pos(), arb_meaning())
            .prop_map(|(w, p, m)| (format!("{w} ({p}) {m}"), vec![w])),
        // inline list
        (
            prop::collection::vec(arb_word(), 2..6),
            prop::sample::select(vec![", ", "；", "\t", ";", "，"])
        )
            .prop_map(|(ws, sep)| (ws.join(sep), ws)),
    ]
}

fn arb_document() -> impl Strategy<Value = (String, Vec<String>)> {
    prop::collection::vec(arb_line(), 0..12).prop_map(|lines| {
        let text = lines
            .iter()
            .map(|(line, _)| line.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let words = lines.into_iter().flat_map(|(_, words)| words).collect();
        (text, words)
    })
}

fn first_seen(words: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .iter()
        .filter(|w| seen.insert(w.to_ascii_lowercase()))
        .cloned()
        .collect()
}

proptest! {
    #[test]
    fn no_case_insensitive_duplicates(input in "\\PC{0,300}") {
        let entries = parse_vocabulary(&input);
        let mut seen = HashSet::new();
        for entry in &entries {
            prop_assert!(seen.insert(entry.key()), "duplicate {:?}", entry.word);
        }
    }

    #[test]
    fn words_in_first_seen_order((text, words) in arb_document()) {
        let parsed: Vec<String> = parse_vocabulary(&text).into_iter().map(|e| e.word).collect();
        prop_assert_eq!(parsed, first_seen(&words));
    }

    #[test]
    fn reparsing_word_list_keeps_words((text, _) in arb_document()) {
        let entries = parse_vocabulary(&text);
        let reparsed = parse_vocabulary(&word_list(&entries));
        let before: HashSet<String> = entries.iter().map(|e| e.key()).collect();
        let after: HashSet<String> = reparsed.iter().map(|e| e.key()).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn crlf_matches_lf((text, _) in arb_document()) {
        prop_assert_eq!(parse_vocabulary(&text.replace('\n', "\r\n")), parse_vocabulary(&text));
    }
}
