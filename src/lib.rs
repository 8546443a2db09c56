//! LingoQuest core crate.
//!
//! The vocabulary question engine behind the LingoQuest quiz: it loads a list
//! of translatable entries and hands out a non-repeating sequence of
//! multiple-choice questions in English, French, or German. Rendering, profile
//! persistence, and menus stay on the JS side; `bindings` is the surface they
//! call.
//!
//! ```
//! use lingo_quest::QuizEngine;
//!
//! let mut quiz = QuizEngine::seeded(42);
//! quiz.load_json(lingo_quest::BUILTIN_VOCABULARY).unwrap();
//! while let Some(q) = quiz.get_next_question("medium", "fr") {
//!     assert_eq!(q.options.len(), 3);
//!     quiz.record_answer(&q.id);
//! }
//! ```

use wasm_bindgen::prelude::*;

pub mod bindings;
pub mod config;
pub mod engine;
pub mod error;
pub mod language;
pub mod notice;
pub mod pool;
pub mod question;
pub mod score;
pub mod source;
pub mod vocabulary;

pub use config::EngineConfig;
pub use engine::QuizEngine;
pub use error::{ConfigError, LoadError};
pub use language::{Language, language_name};
pub use notice::Notice;
pub use pool::{PoolState, SessionPool};
pub use question::{Question, QuestionFormatter};
pub use score::{AnswerOutcome, Scoreboard};
pub use source::{BUILTIN_VOCABULARY, FetchSource, StaticSource, VocabularySource};
pub use vocabulary::{Difficulty, VocabularyEntry, VocabularyStore};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("LingoQuest engine initialised");
}
