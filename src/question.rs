//! Turning a vocabulary entry into a multiple-choice question.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::config::{MAX_OPTIONS, MIN_OPTIONS};
use crate::language::Language;
use crate::vocabulary::VocabularyEntry;

/// One round of the quiz, ready to render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub clue: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    pub fn is_correct(&self, selection: &str) -> bool {
        selection == self.correct_answer
    }
}

/// A built question plus how many placeholder options it needed.
#[derive(Debug)]
pub struct FormattedQuestion {
    pub question: Question,
    pub placeholders: usize,
}

pub fn clue_for(entry: &VocabularyEntry, lang: Language) -> String {
    match entry.prompt.as_deref() {
        Some(prompt) => prompt.to_string(),
        None => format!("What is '{}' in {}?", entry.english, lang.name()),
    }
}

/// Builds questions against the full vocabulary, which is the distractor source.
pub struct QuestionFormatter<'a> {
    all: &'a [VocabularyEntry],
    placeholder: &'a str,
}

impl<'a> QuestionFormatter<'a> {
    pub fn new(all: &'a [VocabularyEntry], placeholder: &'a str) -> Self {
        Self { all, placeholder }
    }

    /// Distinct target-language words of every other entry, excluding the
    /// correct answer. Order follows the vocabulary.
    pub fn distractor_candidates(&self, entry: &VocabularyEntry, lang: Language, correct: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.all
            .iter()
            .filter(|other| other.id != entry.id)
            .filter_map(|other| other.translation(lang))
            .filter(|word| *word != correct && seen.insert(*word))
            .map(str::to_string)
            .collect()
    }

    /// Returns `None` when `entry` has no word in `lang`.
    pub fn format<R: Rng + ?Sized>(
        &self,
        entry: &VocabularyEntry,
        lang: Language,
        option_count: usize,
        rng: &mut R,
    ) -> Option<FormattedQuestion> {
        let correct = entry.translation(lang)?;
        let wanted = option_count.clamp(MIN_OPTIONS, MAX_OPTIONS) - 1;

        let mut distractors = self.distractor_candidates(entry, lang, correct);
        distractors.shuffle(rng);
        distractors.truncate(wanted);

        let placeholders = wanted - distractors.len();
        if placeholders > 0 {
            let fillers = self.placeholders(lang, correct, placeholders);
            distractors.extend(fillers);
        }

        let mut options = Vec::with_capacity(wanted + 1);
        options.push(correct.to_string());
        options.extend(distractors);
        options.shuffle(rng);

        Some(FormattedQuestion {
            question: Question {
                id: entry.id.clone(),
                clue: clue_for(entry, lang),
                options,
                correct_answer: correct.to_string(),
            },
            placeholders,
        })
    }

    // "(other)", "(other 2)", ... skipping anything that is a real word in
    // the answer language.
    fn placeholders(&self, lang: Language, correct: &str, count: usize) -> Vec<String> {
        let taken: HashSet<&str> = self
            .all
            .iter()
            .filter_map(|e| e.translation(lang))
            .chain(std::iter::once(correct))
            .collect();
        let base = self.placeholder.trim();
        (1..)
            .map(|n| {
                if n == 1 {
                    base.to_string()
                } else if let Some(inner) = base.strip_prefix('(').and_then(|b| b.strip_suffix(')')) {
                    format!("({inner} {n})")
                } else {
                    format!("{base} {n}")
                }
            })
            .filter(|candidate| !taken.contains(candidate.as_str()))
            .take(count)
            .collect()
    }
}
