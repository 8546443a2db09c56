// Browser-side tests for the wasm-bindgen surface. Run with
// `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use lingo_quest::bindings::{language_name_js, load_quiz, Quiz};
use lingo_quest::{FetchSource, LoadError, VocabularySource};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn builtin_quiz_hands_out_questions() {
    let mut quiz = Quiz::builtin(Some(42)).unwrap();
    let q = quiz.next_question("medium", "fr").unwrap();
    assert!(!q.is_null());
    let q: lingo_quest::Question = serde_wasm_bindgen::from_value(q).unwrap();
    assert_eq!(q.options.len(), 3);
}

#[wasm_bindgen_test]
fn exhausted_quiz_returns_null_until_reset() {
    let mut quiz = Quiz::from_json(r#"[{ "id": "a", "english": "cat", "translations": { "fr": "chat" } }]"#, Some(1)).unwrap();
    quiz.record_answer("a");
    assert!(quiz.next_question("easy", "fr").unwrap().is_null());
    quiz.reset_answered_questions_tracker();
    assert!(!quiz.next_question("easy", "fr").unwrap().is_null());
}

#[wasm_bindgen_test]
fn bad_json_is_a_js_error() {
    let err = Quiz::from_json("[]", None).err().unwrap();
    assert_eq!(err, JsValue::from_str("vocabulary is empty"));
}

#[wasm_bindgen_test]
fn language_names() {
    assert_eq!(language_name_js("de"), "German");
    assert_eq!(language_name_js("pt"), "pt");
}

#[wasm_bindgen_test]
async fn fetch_of_missing_file_reports_http_status() {
    let src = FetchSource::new("no-such-vocabulary-file.json");
    match src.fetch().await {
        Err(LoadError::HttpStatus { status }) => assert_eq!(status, 404),
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[wasm_bindgen_test]
async fn load_quiz_of_missing_file_is_a_js_error() {
    let Err(err) = load_quiz("no-such-vocabulary-file.json".into(), Some(3)).await else {
        panic!("loading a missing file should fail");
    };
    assert_eq!(err.as_string().as_deref(), Some("vocabulary fetch returned HTTP 404"));
}
