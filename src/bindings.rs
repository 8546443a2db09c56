//! JS-facing wrapper around [`QuizEngine`]. wasm-bindgen types cannot be
//! generic, so this pins the engine to its default ChaCha RNG.

use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::engine::QuizEngine;
use crate::language::language_name;
use crate::question::Question;
use crate::source::{BUILTIN_VOCABULARY, FetchSource};

fn engine_for(seed: Option<u32>) -> QuizEngine {
    match seed {
        Some(seed) => QuizEngine::seeded(u64::from(seed)),
        None => QuizEngine::new(),
    }
}

#[wasm_bindgen]
pub struct Quiz {
    engine: QuizEngine,
}

/// Fetch `url` and start a quiz over it.
#[wasm_bindgen(js_name = loadQuiz)]
pub async fn load_quiz(url: String, seed: Option<u32>) -> Result<Quiz, JsValue> {
    let mut engine = engine_for(seed);
    engine.load_vocabulary(&FetchSource::new(url)).await?;
    Ok(Quiz { engine })
}

#[wasm_bindgen(js_name = languageName)]
pub fn language_name_js(code: &str) -> String {
    language_name(code).to_string()
}

#[wasm_bindgen]
impl Quiz {
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(text: &str, seed: Option<u32>) -> Result<Quiz, JsValue> {
        let mut engine = engine_for(seed);
        engine.load_json(text)?;
        Ok(Quiz { engine })
    }

    pub fn builtin(seed: Option<u32>) -> Result<Quiz, JsValue> {
        Self::from_json(BUILTIN_VOCABULARY, seed)
    }

    /// Replace the vocabulary, keeping the answered set.
    #[wasm_bindgen(js_name = reloadJson)]
    pub fn reload_json(&mut self, text: &str) -> Result<usize, JsValue> {
        Ok(self.engine.load_json(text)?)
    }

    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config: EngineConfig = serde_wasm_bindgen::from_value(config)?;
        self.engine.set_config(config)?;
        Ok(())
    }

    /// Question object, or `null` when the session is complete.
    #[wasm_bindgen(js_name = nextQuestion)]
    pub fn next_question(&mut self, difficulty: &str, lang: &str) -> Result<JsValue, JsValue> {
        match self.engine.get_next_question(difficulty, lang) {
            Some(q) => Ok(serde_wasm_bindgen::to_value(&q)?),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(js_name = recordAnswer)]
    pub fn record_answer(&mut self, id: &str) {
        self.engine.record_answer(id);
    }

    #[wasm_bindgen(js_name = submitAnswer)]
    pub fn submit_answer(&mut self, question: JsValue, selection: &str) -> Result<JsValue, JsValue> {
        let question: Question = serde_wasm_bindgen::from_value(question)?;
        let outcome = self.engine.submit_answer(&question, selection);
        Ok(serde_wasm_bindgen::to_value(&outcome)?)
    }

    #[wasm_bindgen(js_name = resetSession)]
    pub fn reset_session(&mut self) {
        self.engine.reset_session();
    }

    #[wasm_bindgen(js_name = resetAnsweredQuestionsTracker)]
    pub fn reset_answered_questions_tracker(&mut self) {
        self.engine.reset_answered_questions_tracker();
    }

    pub fn remaining(&self) -> usize {
        self.engine.remaining()
    }

    pub fn scoreboard(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(self.engine.scoreboard())?)
    }

    #[wasm_bindgen(js_name = takeNotices)]
    pub fn take_notices(&mut self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.engine.take_notices())?)
    }
}
