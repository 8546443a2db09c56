//! Vocabulary entries and the store that holds the loaded list.
//!
//! Two on-disk shapes are understood:
//!
//! - the translation-map shape (`english` + `translations`), which is canonical;
//! - the older pre-baked question shape (`clue` + `correctAnswer` + `language`),
//!   which is normalized into the canonical one while loading.
//!
//! A single file must use one shape throughout.
//!
//! A legacy `clue` becomes the entry's `english` headword, so it is rendered
//! through the usual "What is '...' in ...?" template. Clues that are already
//! a full question (ending in `?`) are kept as the entry's `prompt` instead
//! and shown verbatim.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::LoadError;
use crate::language::Language;

/// Difficulty tier. Controls the option count and, when an entry is tagged,
/// which sessions the entry shows up in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub english: String,
    #[serde(default)]
    pub translations: BTreeMap<String, String>, // language code -> word
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Authored question text, used as the clue instead of the template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl VocabularyEntry {
    pub fn translation(&self, lang: Language) -> Option<&str> {
        self.translations.get(lang.code()).map(String::as_str)
    }

    /// Untagged entries fit every tier; an unrecognized request tier accepts
    /// every entry.
    pub fn fits_difficulty(&self, requested: Option<Difficulty>) -> bool {
        match (self.difficulty, requested) {
            (Some(tag), Some(req)) => tag == req,
            _ => true,
        }
    }

    // Lowercase codes, drop blank words, and make sure the headword is
    // available as the English translation.
    fn normalize(mut self) -> Self {
        self.translations = self
            .translations
            .into_iter()
            .filter(|(_, word)| !word.trim().is_empty())
            .map(|(code, word)| (code.trim().to_ascii_lowercase(), word))
            .collect();
        if !self.translations.contains_key(Language::En.code()) && !self.english.trim().is_empty() {
            self.translations
                .insert(Language::En.code().to_string(), self.english.clone());
        }
        self
    }
}

/// Pre-baked question record found in older vocabulary files. Any authored
/// `options` are ignored: distractors are always synthesized.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyEntry {
    #[serde(deserialize_with = "de_id")]
    id: String,
    clue: String,
    correct_answer: String,
    language: String,
    #[serde(default)]
    difficulty: Option<Difficulty>,
    #[serde(default)]
    category: Option<String>,
}

impl From<LegacyEntry> for VocabularyEntry {
    fn from(legacy: LegacyEntry) -> Self {
        let mut translations = BTreeMap::new();
        translations.insert(legacy.language, legacy.correct_answer);
        let prompt = legacy
            .clue
            .trim_end()
            .ends_with('?')
            .then(|| legacy.clue.trim().to_string());
        VocabularyEntry {
            id: legacy.id,
            english: legacy.clue,
            translations,
            difficulty: legacy.difficulty,
            category: legacy.category,
            prompt,
        }
        .normalize()
    }
}

// Ids are strings, but hand-written data files often use bare numbers.
fn de_id<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }
    Ok(match Id::deserialize(d)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Shape {
    Canonical,
    Legacy,
}

fn shape_of(value: &Value) -> Shape {
    let is_legacy = value
        .as_object()
        .map(|obj| !obj.contains_key("translations") && obj.contains_key("correctAnswer"))
        .unwrap_or(false);
    if is_legacy { Shape::Legacy } else { Shape::Canonical }
}

/// Parse a vocabulary document into normalized entries.
pub fn parse_vocabulary(text: &str) -> Result<Vec<VocabularyEntry>, LoadError> {
    let doc: Value = serde_json::from_str(text)?;
    let Value::Array(items) = doc else {
        return Err(LoadError::NotAList);
    };

    let mut shape: Option<Shape> = None;
    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let this_shape = shape_of(&item);
        match shape {
            None => shape = Some(this_shape),
            Some(s) if s != this_shape => return Err(LoadError::MixedSchema),
            Some(_) => {}
        }
        let entry = match this_shape {
            Shape::Canonical => serde_json::from_value::<VocabularyEntry>(item)
                .map(VocabularyEntry::normalize),
            Shape::Legacy => serde_json::from_value::<LegacyEntry>(item).map(VocabularyEntry::from),
        }
        .map_err(|source| LoadError::InvalidEntry { index, source })?;
        entries.push(entry);
    }
    Ok(entries)
}

/// The loaded vocabulary. Read-only once built; reloading builds a new store.
#[derive(Debug, Default)]
pub struct VocabularyStore {
    entries: Vec<VocabularyEntry>,
    index: HashMap<String, usize>,
}

impl VocabularyStore {
    pub fn from_entries(entries: Vec<VocabularyEntry>) -> Result<Self, LoadError> {
        if entries.is_empty() {
            return Err(LoadError::Empty);
        }
        let mut index = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            if index.insert(entry.id.clone(), pos).is_some() {
                return Err(LoadError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries, index })
    }

    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        Self::from_entries(parse_vocabulary(text)?)
    }

    pub fn all(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&VocabularyEntry> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
