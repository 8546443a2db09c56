use std::fmt;

use serde::Serialize;

/// A condition the engine recovered from on its own. Notices are logged as
/// warnings and queued on the engine until the caller drains them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Notice {
    /// Requested answer language is unsupported; English was used instead.
    InvalidLanguage { requested: String },
    /// Requested difficulty is not a known tier; the fallback option count was used.
    UnknownDifficulty { requested: String },
    /// Entry skipped because it has no word in the answer language.
    MissingTranslation { id: String, language: String },
    /// Not enough distinct distractors; placeholder options were added.
    PaddedOptions { id: String, placeholders: usize },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::InvalidLanguage { requested } => {
                write!(f, "unsupported answer language '{requested}', using 'en'")
            }
            Notice::UnknownDifficulty { requested } => {
                write!(f, "unknown difficulty '{requested}', using fallback option count")
            }
            Notice::MissingTranslation { id, language } => {
                write!(f, "entry '{id}' has no '{language}' translation, skipped")
            }
            Notice::PaddedOptions { id, placeholders } => {
                write!(f, "entry '{id}' padded with {placeholders} placeholder option(s)")
            }
        }
    }
}
