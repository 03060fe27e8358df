//! Text to request to recorded history, including continuation calls.

use wordscene::parser::word_list;
use wordscene::session::{
    FileHistoryStore, GenerateResponse, HistoryStore, MemoryHistoryStore, Session, SessionConfig,
};

fn config() -> SessionConfig {
    SessionConfig::default().with_batch_limit(3)
}

const TEXT: &str = "Word List\n\
                    1. abandon 放弃\n\
                    2. ability 能力\n\
                    flap, ranger；counsellor\n\
                    ubiquitous (adj.) 无处不在的";

#[test]
fn oversized_list_is_generated_in_two_calls() {
    let mut session = Session::new(MemoryHistoryStore::new(), config()).with_seed(3);

    let first = session.prepare("Unit 1", TEXT).unwrap();
    assert_eq!(
        word_list(&first.request.words),
        "abandon\nability\nflap"
    );
    assert_eq!(first.remaining.len(), 3);

    let record = session.record(&first, GenerateResponse::default()).unwrap();
    assert_eq!(record.name, "Unit 1");
    assert_eq!(record.word_count, 3);

    let pending = session.pending().unwrap();
    assert_eq!(pending.original_name, "Unit 1");
    assert_eq!(word_list(&pending.words), "ranger\ncounsellor\nubiquitous");

    let second = session.prepare_continuation().unwrap();
    assert_eq!(second.request.name, "Unit 1（续）");
    assert_eq!(second.origin, "Unit 1");
    assert!(second.remaining.is_empty());

    session.record(&second, GenerateResponse::default()).unwrap();
    assert!(session.pending().is_none());

    let names: Vec<_> = session.history().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Unit 1（续）", "Unit 1"]);
}

#[test]
fn backend_remainder_comes_before_local_remainder() {
    let mut session = Session::new(MemoryHistoryStore::new(), config());
    let first = session.prepare("Unit 2", TEXT).unwrap();

    let response = GenerateResponse::from_json(
        r#"{
            "message": "generated 2 scenes",
            "scenes": [{"id": 1}, {"id": 2}],
            "word_count": 2,
            "remaining_words": [{"word": "flap", "pos": null, "meaning": ""}]
        }"#,
    )
    .unwrap();

    let record = session.record(&first, response).unwrap();
    assert_eq!(record.word_count, 2);
    assert_eq!(record.scenes.len(), 2);

    let pending = session.pending().unwrap();
    assert_eq!(
        word_list(&pending.words),
        "flap\nranger\ncounsellor\nubiquitous"
    );
    assert_eq!(pending.words[0].part_of_speech, "");
}

#[test]
fn unnamed_list_gets_generated_name() {
    let mut session = Session::new(MemoryHistoryStore::new(), SessionConfig::default()).with_seed(9);
    let submission = session.prepare("   ", "flap").unwrap();
    assert!(!submission.request.name.trim().is_empty());
    assert_eq!(submission.origin, submission.request.name);
}

#[test]
fn request_body_matches_wire_shape() {
    let mut session = Session::new(MemoryHistoryStore::new(), SessionConfig::default());
    let submission = session.prepare("Unit 3", "flap (v.) 拍打").unwrap();
    let body: serde_json::Value =
        serde_json::from_str(&submission.request.to_json().unwrap()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "name": "Unit 3",
            "words": [{"word": "flap", "pos": "v.", "meaning": "拍打"}]
        })
    );
}

#[test]
fn pending_words_survive_restart() {
    let path = std::env::temp_dir().join(format!(
        "wordscene_it_flow_{}.msgpack",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let store = FileHistoryStore::open(&path, 10).unwrap();
        let mut session = Session::new(store, config());
        let first = session.prepare("Unit 4", TEXT).unwrap();
        session.record(&first, GenerateResponse::default()).unwrap();
    }

    let store = FileHistoryStore::open(&path, 10).unwrap();
    assert_eq!(store.len(), 1);
    let mut session = Session::new(store, config());
    let next = session.prepare_continuation().unwrap();
    assert_eq!(next.request.name, "Unit 4（续）");
    session.record(&next, GenerateResponse::default()).unwrap();

    let removed = session.remove_history(1).unwrap();
    assert_eq!(removed.name, "Unit 4");
    assert_eq!(session.into_store().len(), 1);

    let _ = std::fs::remove_file(&path);
}
