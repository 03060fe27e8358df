//! Integration tests for submission batching

use wordscene_foundation::VocabularyEntry;
use wordscene_session::{
    BATCH_LIMIT, MemoryHistoryStore, Session, SessionConfig, continuation_name, split_batch,
};

/// A text with `count` distinct words, one per line.
fn word_text(count: usize) -> String {
    (0..count)
        .map(|i| {
            // Encode the index in letters so each word is a valid token.
            let digits: String = i
                .to_string()
                .chars()
                .map(|d| char::from(b'a' + (d as u8 - b'0')))
                .collect();
            format!("wd{digits}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn default_limit_is_two_hundred() {
    assert_eq!(BATCH_LIMIT, 200);
}

#[test]
fn split_keeps_order_across_parts() {
    let entries: Vec<_> = ["flap", "ranger", "counsellor"]
        .iter()
        .map(|w| VocabularyEntry::new(*w))
        .collect();
    let batch = split_batch(entries, 2);
    assert_eq!(batch.submitted.len(), 2);
    assert_eq!(batch.remaining, vec![VocabularyEntry::new("counsellor")]);
    assert!(batch.has_remaining());
    assert_eq!(batch.total(), 3);
}

#[test]
fn large_list_is_split_at_limit() {
    let mut session = Session::new(MemoryHistoryStore::new(), SessionConfig::default());
    let submission = session.prepare("Unit 1", &word_text(250)).unwrap();
    assert_eq!(submission.request.words.len(), 200);
    assert_eq!(submission.remaining.len(), 50);
    assert_eq!(submission.total_words(), 250);
    assert_eq!(submission.request.words[0].word, "wda");
    assert_eq!(submission.remaining[0].word, "wdcaa");
    assert!(submission.status_message().contains("first 200"));
}

#[test]
fn exactly_at_limit_has_no_remainder() {
    let mut session = Session::new(
        MemoryHistoryStore::new(),
        SessionConfig::default().with_batch_limit(5),
    );
    let submission = session.prepare("small", &word_text(5)).unwrap();
    assert!(submission.remaining.is_empty());
    assert_eq!(submission.status_message(), "generating scenes for 5 words");
}

#[test]
fn continuation_names_are_suffixed() {
    assert_eq!(continuation_name("Unit 1"), "Unit 1（续）");
}
