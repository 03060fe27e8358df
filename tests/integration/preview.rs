//! Live preview driven through the runtime crate.

use wordscene::foundation::Result;
use wordscene::runtime::{LineEditor, Outcome, Preview, ReadResult, RuntimeConfig};

struct NoInput;

impl LineEditor for NoInput {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(ReadResult::Eof)
    }

    fn add_history(&mut self, _line: &str) {}
}

#[test]
fn typing_a_list_line_by_line() {
    let config = RuntimeConfig::default().with_batch_limit(2);
    let mut preview = Preview::with_editor(NoInput, &config).without_banner();

    for line in ["共 3 词", "flap 拍打", "ranger, counsellor"] {
        preview.handle(line).unwrap();
    }

    let Outcome::Continue(Some(body)) = preview.handle(":json Unit 5").unwrap() else {
        panic!("expected a request body");
    };
    let json_end = body.rfind('}').unwrap() + 1;
    let request: serde_json::Value = serde_json::from_str(&body[..json_end]).unwrap();
    assert_eq!(request["name"], "Unit 5");
    assert_eq!(request["words"].as_array().unwrap().len(), 2);
    assert!(body[json_end..].contains("3 in total"));

    let Outcome::Continue(Some(words)) = preview.handle(":words").unwrap() else {
        panic!("expected a word list");
    };
    assert_eq!(words, "flap\nranger\ncounsellor");
}
