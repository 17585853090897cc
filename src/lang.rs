//! Language preference carried through to the account-creation endpoint.
//!
//! The backend receives the ISO 639-1 code as-is; nothing in this crate
//! translates anything based on it.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// A supported interface language.
///
/// The registration form offers exactly two options and defaults to Spanish
/// when the user makes no selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Spanish, the default selection.
    #[default]
    Es,
    /// English.
    En,
}

impl Language {
    /// Create a Language from an ISO 639-1 code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code names a supported language
    /// * `Err` otherwise
    pub fn from_code(code: &str) -> Result<Language> {
        match code {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            other => bail!("Unknown language code: '{}'", other),
        }
    }

    /// The ISO 639-1 code, exactly as serialized on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    /// The language name in its native form (e.g., "Español").
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Es => "Español",
            Language::En => "English",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_spanish() {
        let language = Language::from_code("es").expect("Should succeed");
        assert_eq!(language, Language::Es);
        assert_eq!(language.code(), "es");
    }

    #[test]
    fn test_from_code_english() {
        let language = Language::from_code("en").expect("Should succeed");
        assert_eq!(language, Language::En);
        assert_eq!(language.code(), "en");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Language::from_code("ES").is_err());
    }

    // ==================== Default Tests ====================

    #[test]
    fn test_default_is_spanish() {
        assert_eq!(Language::default(), Language::Es);
    }

    // ==================== Display Name Tests ====================

    #[test]
    fn test_native_names() {
        assert_eq!(Language::Es.native_name(), "Español");
        assert_eq!(Language::En.native_name(), "English");
    }

    // ==================== Serde Tests ====================

    #[test]
    fn test_serializes_as_lowercase_code() {
        assert_eq!(serde_json::to_string(&Language::Es).unwrap(), "\"es\"");
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
    }

    #[test]
    fn test_deserializes_from_code() {
        let lang: Language = serde_json::from_str("\"en\"").expect("Should deserialize");
        assert_eq!(lang, Language::En);
    }
}
