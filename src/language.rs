//! Supported answer languages.

use std::fmt;

/// Language the options and the correct answer are presented in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Fr,
    De,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::De];

    /// Parse a language code (`"fr"`, `"DE"`, ` en `). Returns `None` for
    /// anything outside the supported set.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            "de" => Some(Language::De),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::De => "de",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "French",
            Language::De => "German",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Display name for a language code, falling back to the raw code for
/// languages without a known name.
pub fn language_name(code: &str) -> &str {
    match Language::from_code(code) {
        Some(lang) => lang.name(),
        None => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_parse_case_insensitively() {
        assert_eq!(Language::from_code("FR"), Some(Language::Fr));
        assert_eq!(Language::from_code(" de "), Some(Language::De));
        assert_eq!(Language::from_code("es"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn names_fall_back_to_raw_code() {
        assert_eq!(language_name("en"), "English");
        assert_eq!(language_name("fr"), "French");
        assert_eq!(language_name("de"), "German");
        assert_eq!(language_name("it"), "it");
    }

    #[test]
    fn code_round_trips_for_every_language() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }
}
