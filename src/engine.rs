//! The quiz engine: one instance per play session.
//!
//! Holds the loaded vocabulary, the session pool and answered set, the
//! running scoreboard, and the random source every shuffle draws from. Pass
//! a seeded RNG (see [`QuizEngine::seeded`]) to get reproducible sequences.

use std::collections::VecDeque;

use log::{debug, error, info, warn};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::EngineConfig;
use crate::error::{ConfigError, LoadError};
use crate::language::Language;
use crate::notice::Notice;
use crate::pool::{PoolState, SessionPool};
use crate::question::{Question, QuestionFormatter};
use crate::score::{AnswerOutcome, Scoreboard};
use crate::source::VocabularySource;
use crate::vocabulary::{Difficulty, VocabularyEntry, VocabularyStore};

pub struct QuizEngine<R = ChaCha8Rng> {
    config: EngineConfig,
    store: Option<VocabularyStore>, // None until the first successful load
    pool: SessionPool,
    scoreboard: Scoreboard,
    notices: VecDeque<Notice>,
    rng: R,
}

/// Notices kept for [`QuizEngine::take_notices`]; older ones are dropped.
pub const MAX_NOTICES: usize = 64;

impl QuizEngine<ChaCha8Rng> {
    /// Engine seeded from OS / browser entropy.
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for QuizEngine<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

fn push_notice(notices: &mut VecDeque<Notice>, notice: Notice) {
    warn!("{notice}");
    if notices.len() == MAX_NOTICES {
        notices.pop_front();
    }
    notices.push_back(notice);
}

impl<R: RngCore> QuizEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            config: EngineConfig::default(),
            store: None,
            pool: SessionPool::new(),
            scoreboard: Scoreboard::default(),
            notices: VecDeque::new(),
            rng,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Takes effect from the next question on.
    pub fn set_config(&mut self, config: EngineConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    // --- Vocabulary -------------------------------------------------------

    /// Fetch and install a vocabulary, then rebuild the pool around the
    /// current answered set. On error the previous vocabulary stays loaded.
    pub async fn load_vocabulary<S: VocabularySource>(&mut self, source: &S) -> Result<usize, LoadError> {
        let text = source.fetch().await.inspect_err(|e| {
            error!("vocabulary fetch failed: {e}");
        })?;
        self.load_json(&text)
    }

    pub fn load_json(&mut self, text: &str) -> Result<usize, LoadError> {
        let store = VocabularyStore::from_json(text).inspect_err(|e| {
            error!("vocabulary rejected: {e}");
        })?;
        Ok(self.install(store))
    }

    pub fn load_entries(&mut self, entries: Vec<VocabularyEntry>) -> Result<usize, LoadError> {
        let store = VocabularyStore::from_entries(entries)?;
        Ok(self.install(store))
    }

    fn install(&mut self, store: VocabularyStore) -> usize {
        let count = store.len();
        info!("loaded {count} vocabulary entries");
        self.pool.reset(store.all(), &mut self.rng);
        self.store = Some(store);
        count
    }

    /// Full vocabulary; empty before the first load.
    pub fn all(&self) -> &[VocabularyEntry] {
        self.store.as_ref().map(VocabularyStore::all).unwrap_or(&[])
    }

    pub fn entry(&self, id: &str) -> Option<&VocabularyEntry> {
        self.store.as_ref()?.get(id)
    }

    // --- Session pool -----------------------------------------------------

    /// Reshuffle the entries not yet answered. Does not clear the answered set.
    pub fn reset_session(&mut self) {
        let Some(store) = self.store.as_ref() else {
            warn!("reset_session called before any vocabulary was loaded");
            return;
        };
        self.pool.reset(store.all(), &mut self.rng);
        debug!(
            "session reset: {} of {} entries eligible",
            self.pool.len(),
            store.len()
        );
    }

    /// Raw cursor step, without eligibility checks or formatting.
    pub fn advance(&mut self) -> Option<&VocabularyEntry> {
        let store = self.store.as_ref()?;
        let id = self.pool.advance()?;
        store.get(id)
    }

    pub fn clear_answered(&mut self) {
        self.pool.clear_answered();
        debug!("answered set cleared");
    }

    pub fn state(&self) -> PoolState {
        self.pool.state()
    }

    pub fn remaining(&self) -> usize {
        self.pool.remaining()
    }

    pub fn answered_count(&self) -> usize {
        self.pool.answered_count()
    }

    // --- Questions --------------------------------------------------------

    /// Next question for `difficulty` / `target_lang`, or `None` once the
    /// session has nothing left to ask.
    pub fn get_next_question(&mut self, difficulty: &str, target_lang: &str) -> Option<Question> {
        let Self {
            config,
            store,
            pool,
            notices,
            rng,
            ..
        } = self;

        let lang = Language::from_code(target_lang).unwrap_or_else(|| {
            push_notice(
                notices,
                Notice::InvalidLanguage { requested: target_lang.to_string() },
            );
            Language::En
        });
        let tier = Difficulty::parse(difficulty);
        if tier.is_none() {
            push_notice(
                notices,
                Notice::UnknownDifficulty { requested: difficulty.to_string() },
            );
        }

        let Some(store) = store.as_ref() else {
            error!("get_next_question called before any vocabulary was loaded");
            return None;
        };
        let option_count = config.option_count(tier);
        let formatter = QuestionFormatter::new(store.all(), &config.placeholder);

        // Each pass consumes one pool position, so the scan ends with the pool.
        // Entries tagged for another tier are passed over without being consumed.
        loop {
            let next = if config.match_entry_difficulty {
                pool.advance_where(|id| store.get(id).is_some_and(|e| e.fits_difficulty(tier)))
            } else {
                pool.advance()
            };
            let Some(id) = next.map(str::to_string) else {
                info!("session complete: no eligible entries left");
                return None;
            };
            if pool.is_answered(&id) {
                debug!("skipping '{id}': already answered");
                continue;
            }
            let Some(entry) = store.get(&id) else {
                continue;
            };
            match formatter.format(entry, lang, option_count, &mut *rng) {
                Some(built) => {
                    if built.placeholders > 0 {
                        push_notice(
                            notices,
                            Notice::PaddedOptions {
                                id: id.clone(),
                                placeholders: built.placeholders,
                            },
                        );
                    }
                    debug!("question '{id}' ready with {} options", built.question.options.len());
                    return Some(built.question);
                }
                None => push_notice(
                    notices,
                    Notice::MissingTranslation {
                        id,
                        language: lang.code().to_string(),
                    },
                ),
            }
        }
    }

    // --- Answers ----------------------------------------------------------

    /// Exclude `id` from the rest of the session, whatever the answer was.
    pub fn record_answer(&mut self, id: &str) {
        if self.entry(id).is_none() {
            warn!("ignoring answer for unknown id '{id}'");
            return;
        }
        if self.pool.mark_answered(id) {
            debug!("marked '{id}' as answered");
        }
    }

    /// Compare, record, and score in one step.
    pub fn submit_answer(&mut self, question: &Question, selection: &str) -> AnswerOutcome {
        let correct = question.is_correct(selection);
        self.record_answer(&question.id);
        let outcome = self.scoreboard.record(correct, self.config.xp_per_correct);
        debug!(
            "answer for '{}' was {}; xp {} streak {}",
            question.id,
            if correct { "correct" } else { "wrong" },
            outcome.xp,
            outcome.streak
        );
        outcome
    }

    /// Fresh round: everything becomes eligible again and the scoreboard
    /// starts over.
    pub fn reset_answered_questions_tracker(&mut self) {
        self.clear_answered();
        self.scoreboard.reset();
        self.reset_session();
        info!("answered questions tracker reset");
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Drain queued notices, oldest first. At most [`MAX_NOTICES`] are kept
    /// between drains.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOCAB: &str = r#"[
        { "id": "1", "english": "cat", "translations": { "en": "cat", "fr": "chat", "de": "Katze" } },
        { "id": "2", "english": "dog", "translations": { "en": "dog", "fr": "chien" } },
        { "id": "3", "english": "bird", "translations": { "en": "bird", "fr": "oiseau", "de": "Vogel" }, "difficulty": "hard" }
    ]"#;

    fn loaded(seed: u64) -> QuizEngine {
        let mut engine = QuizEngine::seeded(seed);
        engine.load_json(VOCAB).unwrap();
        engine
    }

    #[test]
    fn questions_before_load_are_none() {
        let mut engine = QuizEngine::seeded(1);
        assert_eq!(engine.state(), PoolState::Empty);
        assert!(engine.get_next_question("easy", "fr").is_none());
        assert!(engine.all().is_empty());
    }

    #[test]
    fn missing_translations_are_skipped_with_a_notice() {
        let mut engine = loaded(4);
        let mut ids = Vec::new();
        while let Some(q) = engine.get_next_question("medium", "de") {
            ids.push(q.id);
        }
        ids.sort();
        // "2" has no German word
        assert_eq!(ids, vec!["1", "3"]);
        let notices = engine.take_notices();
        assert!(notices.contains(&Notice::MissingTranslation {
            id: "2".into(),
            language: "de".into()
        }));
        assert!(engine.take_notices().is_empty());
    }

    #[test]
    fn difficulty_tags_are_ignored_by_default() {
        let mut engine = loaded(4);
        assert!(!engine.config().match_entry_difficulty);
        let mut count = 0;
        while engine.get_next_question("easy", "fr").is_some() {
            count += 1;
        }
        assert_eq!(count, 3);
    }

    #[test]
    fn tier_matching_leaves_other_tiers_in_the_pool() {
        let mut engine = loaded(4);
        engine
            .set_config(EngineConfig { match_entry_difficulty: true, ..EngineConfig::default() })
            .unwrap();
        let mut easy = Vec::new();
        while let Some(q) = engine.get_next_question("easy", "fr") {
            easy.push(q.id);
        }
        easy.sort();
        assert_eq!(easy, vec!["1", "2"]);

        // the hard entry was passed over, not used up
        let hard = engine.get_next_question("hard", "fr").unwrap();
        assert_eq!(hard.id, "3");
        assert_eq!(hard.options.len(), 4);
        assert!(engine.get_next_question("hard", "fr").is_none());
        assert_eq!(engine.state(), PoolState::Exhausted);
    }

    #[test]
    fn easy_call_on_all_hard_vocabulary_keeps_entries_for_hard() {
        let mut engine = QuizEngine::seeded(9);
        engine
            .set_config(EngineConfig { match_entry_difficulty: true, ..EngineConfig::default() })
            .unwrap();
        engine
            .load_json(
                r#"[
                    { "id": "a", "english": "storm", "translations": { "fr": "orage" }, "difficulty": "hard" },
                    { "id": "b", "english": "owl", "translations": { "fr": "hibou" }, "difficulty": "hard" }
                ]"#,
            )
            .unwrap();
        assert!(engine.get_next_question("easy", "fr").is_none());
        assert_eq!(engine.remaining(), 2);

        let mut ids = Vec::new();
        while let Some(q) = engine.get_next_question("hard", "fr") {
            ids.push(q.id);
        }
        ids.sort();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn unknown_difficulty_uses_fallback_and_ignores_tags() {
        let mut engine = loaded(8);
        let q = engine.get_next_question("nightmare", "fr").unwrap();
        assert_eq!(q.options.len(), 2);
        assert!(engine
            .take_notices()
            .iter()
            .any(|n| matches!(n, Notice::UnknownDifficulty { .. })));
    }

    #[test]
    fn answer_recorded_mid_session_is_skipped() {
        let mut engine = loaded(2);
        let first = engine.get_next_question("hard", "fr").unwrap();
        // answer everything else up front
        for id in ["1", "2", "3"] {
            if id != first.id {
                engine.record_answer(id);
            }
        }
        assert!(engine.get_next_question("hard", "fr").is_none());
    }

    #[test]
    fn submit_answer_scores_and_records() {
        let mut engine = loaded(6);
        let q = engine.get_next_question("easy", "fr").unwrap();
        let outcome = engine.submit_answer(&q, &q.correct_answer);
        assert!(outcome.correct);
        assert_eq!(outcome.xp, 10);
        assert_eq!(engine.answered_count(), 1);

        let q = engine.get_next_question("easy", "fr").unwrap();
        let wrong = q.options.iter().find(|o| **o != q.correct_answer).unwrap().clone();
        let outcome = engine.submit_answer(&q, &wrong);
        assert!(!outcome.correct);
        assert_eq!(outcome.streak, 0);
        assert_eq!(engine.scoreboard().xp, 10);

        engine.reset_answered_questions_tracker();
        assert_eq!(engine.scoreboard(), &Scoreboard::default());
        assert_eq!(engine.answered_count(), 0);
    }

    #[test]
    fn failed_reload_keeps_previous_vocabulary() {
        let mut engine = loaded(3);
        assert!(matches!(engine.load_json("[]"), Err(LoadError::Empty)));
        assert_eq!(engine.all().len(), 3);
        assert!(engine.get_next_question("easy", "en").is_some());
    }

    #[test]
    fn unknown_id_is_not_recorded() {
        let mut engine = loaded(7);
        engine.record_answer("nope");
        assert_eq!(engine.answered_count(), 0);
        engine.record_answer("1");
        assert_eq!(engine.answered_count(), 1);
    }

    #[test]
    fn notice_queue_keeps_only_the_latest() {
        let mut engine = loaded(1);
        for round in 0..(MAX_NOTICES * 2) {
            engine.reset_session();
            engine.get_next_question(&format!("tier{round}"), "en");
        }
        let notices = engine.take_notices();
        assert_eq!(notices.len(), MAX_NOTICES);
        let last = format!("tier{}", MAX_NOTICES * 2 - 1);
        assert_eq!(
            notices.last(),
            Some(&Notice::UnknownDifficulty { requested: last })
        );
        assert!(engine.take_notices().is_empty());
    }

    #[test]
    fn advance_walks_the_raw_pool() {
        let mut engine = loaded(5);
        let mut seen = 0;
        while engine.advance().is_some() {
            seen += 1;
        }
        assert_eq!(seen, 3);
        assert_eq!(engine.state(), PoolState::Exhausted);
        engine.reset_session();
        assert_eq!(engine.state(), PoolState::Ready);
        assert_eq!(engine.remaining(), 3);
    }
}
