//! Integration tests for the supported list formats
//!
//! Each test feeds text shaped like a real source (dictionary exports,
//! word-book screenshots run through OCR, typed lists) through the parser.

use wordscene_foundation::VocabularyEntry;
use wordscene_parser::{LineClass, VocabularyLineParser, parse_vocabulary, word_list};

fn entry(word: &str, pos: &str, meaning: &str) -> VocabularyEntry {
    VocabularyEntry::new(word)
        .with_part_of_speech(pos)
        .with_meaning(meaning)
}

fn words(entries: &[VocabularyEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.word.as_str()).collect()
}

// =============================================================================
// Documented Examples
// =============================================================================

#[test]
fn comma_separated_words() {
    let entries = parse_vocabulary("flap, ranger, counsellor, ultimate");
    assert_eq!(
        entries,
        vec![
            entry("flap", "", ""),
            entry("ranger", "", ""),
            entry("counsellor", "", ""),
            entry("ultimate", "", ""),
        ]
    );
}

#[test]
fn word_with_parenthesized_pos() {
    assert_eq!(
        parse_vocabulary("ubiquitous (adj.) 无处不在的"),
        vec![entry("ubiquitous", "adj.", "无处不在的")]
    );
}

#[test]
fn numbered_entries_in_order() {
    assert_eq!(
        parse_vocabulary("1. ubiquitous 无处不在的\n2. flap 拍打"),
        vec![
            entry("ubiquitous", "", "无处不在的"),
            entry("flap", "", "拍打"),
        ]
    );
}

#[test]
fn header_and_progress_lines_skipped() {
    assert_eq!(words(&parse_vocabulary("共 20 词\n3/20\nflap")), vec!["flap"]);
}

#[test]
fn single_letters_rejected() {
    assert_eq!(words(&parse_vocabulary("a\nI\nok")), vec!["ok"]);
}

#[test]
fn blank_input_is_empty() {
    assert!(parse_vocabulary("").is_empty());
    assert!(parse_vocabulary("   \n  ").is_empty());
}

// =============================================================================
// Mixed Documents
// =============================================================================

#[test]
fn word_book_page() {
    let text = "Word List\n\
                共 5 词\n\
                1. abandon 放弃\n\
                2. ability 能力\n\
                flap, ranger；counsellor\n\
                ubiquitous (adj.) 无处不在的\n\
                meticulous: adj. 一丝不苟的\n\
                3/20\n\
                abandon 放弃，抛弃";

    let report = VocabularyLineParser::parse_with_report(text);
    assert_eq!(
        words(&report.entries),
        vec![
            "abandon",
            "ability",
            "flap",
            "ranger",
            "counsellor",
            "ubiquitous",
            "meticulous"
        ]
    );
    assert_eq!(report.entries[0].meaning, "放弃");
    assert_eq!(report.entries[6], entry("meticulous", "adj.", "一丝不苟的"));
    assert_eq!(report.lines, 9);
    assert_eq!(report.noise, 3);
    assert_eq!(report.duplicates, 1);
    assert_eq!(report.unrecognized, 0);
}

#[test]
fn windows_line_endings() {
    assert_eq!(
        words(&parse_vocabulary("flap\r\nranger\r\n\r\nultimate")),
        vec!["flap", "ranger", "ultimate"]
    );
}

#[test]
fn tab_separated_export() {
    // A two-column export reads as word + meaning, not as a list.
    assert_eq!(parse_vocabulary("flap\t拍打"), vec![entry("flap", "", "拍打")]);
    assert_eq!(words(&parse_vocabulary("flap\tranger")), vec!["flap", "ranger"]);
}

#[test]
fn meaning_with_chinese_comma_is_not_a_list() {
    assert_eq!(
        parse_vocabulary("abandon 放弃，抛弃"),
        vec![entry("abandon", "", "放弃，抛弃")]
    );
}

#[test]
fn english_meaning_with_commas_is_not_a_list() {
    assert_eq!(
        parse_vocabulary("abandon: v. to give up, to leave"),
        vec![entry("abandon", "v.", "to give up, to leave")]
    );
    assert_eq!(
        parse_vocabulary("flap: to move up and down, flutter"),
        vec![entry("flap", "", "to move up and down, flutter")]
    );
    assert_eq!(
        parse_vocabulary("ubiquitous (adj.) present everywhere, found in all places"),
        vec![entry("ubiquitous", "adj.", "present everywhere, found in all places")]
    );
    assert_eq!(
        VocabularyLineParser::classify_line("flap: to move up and down, flutter").label(),
        "annotated"
    );
}

#[test]
fn colon_part_of_speech_needs_a_dot() {
    assert_eq!(parse_vocabulary("flap: v 拍打"), vec![entry("flap", "", "v 拍打")]);
}

#[test]
fn list_segments_with_notes() {
    assert_eq!(
        parse_vocabulary("counsellor (顾问), flap (v.)；ranger 护林员"),
        vec![
            entry("counsellor", "", "顾问"),
            entry("flap", "v.", ""),
            entry("ranger", "", "护林员"),
        ]
    );
}

#[test]
fn full_width_punctuation() {
    assert_eq!(
        parse_vocabulary("ubiquitous（adj.）无处不在的\nflap：v.拍打"),
        vec![
            entry("ubiquitous", "adj.", "无处不在的"),
            entry("flap", "v.", "拍打"),
        ]
    );
}

#[test]
fn hyphens_and_apostrophes_are_part_of_words() {
    assert_eq!(
        words(&parse_vocabulary("well-known, o'clock; up-to-date")),
        vec!["well-known", "o'clock", "up-to-date"]
    );
}

#[test]
fn noise_prefix_is_case_sensitive() {
    assert_eq!(words(&parse_vocabulary("word\nmeaning")), vec!["word", "meaning"]);
    assert!(parse_vocabulary("Wordy\nMeaningful").is_empty());
}

#[test]
fn unrecognizable_lines_are_skipped() {
    let report = VocabularyLineParser::parse_with_report("……\n12345\n你好\nflap");
    assert_eq!(words(&report.entries), vec!["flap"]);
    assert_eq!(report.unrecognized, 3);
}

#[test]
fn case_insensitive_dedup_keeps_first_spelling() {
    let entries = parse_vocabulary("Ranger 护林员\nranger, RANGER, flap");
    assert_eq!(words(&entries), vec!["Ranger", "flap"]);
    assert_eq!(entries[0].meaning, "护林员");
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn classify_each_rule() {
    assert_eq!(VocabularyLineParser::classify_line("扫描结果"), LineClass::Noise);
    assert_eq!(
        VocabularyLineParser::classify_line("7 flap"),
        LineClass::Numbered(entry("flap", "", ""))
    );
    assert_eq!(
        VocabularyLineParser::classify_line("flap: 拍打"),
        LineClass::Annotated(entry("flap", "", "拍打"))
    );
    assert_eq!(
        VocabularyLineParser::classify_line("flap; ranger"),
        LineClass::List(vec![entry("flap", "", ""), entry("ranger", "", "")])
    );
    assert_eq!(VocabularyLineParser::classify_line("- -"), LineClass::Unrecognized);
}

#[test]
fn wire_shape() {
    let json = serde_json::to_value(parse_vocabulary("flap (v.) 拍打")).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{"word": "flap", "pos": "v.", "meaning": "拍打"}])
    );
}

#[test]
fn word_list_reparses_to_same_words() {
    let entries = parse_vocabulary("1. abandon 放弃\nflap, ranger\nubiquitous (adj.) 无处不在的");
    let reparsed = parse_vocabulary(&word_list(&entries));
    assert_eq!(words(&reparsed), words(&entries));
}

#[test]
fn header_like_words_do_not_survive_word_list() {
    let entries = parse_vocabulary("flap, Wordsworth");
    assert_eq!(words(&entries), vec!["flap", "Wordsworth"]);
    let report = VocabularyLineParser::parse_with_report(&word_list(&entries));
    assert_eq!(words(&report.entries), vec!["flap"]);
    assert_eq!(report.noise, 1);
}
