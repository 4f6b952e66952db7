//! Language type for the API

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::Error;
use crate::language::{stemmer_for, LanguageStemmer};

/// Supported stemming languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Danish,
    Dutch,
    /// Porter2
    #[default]
    English,
    Finnish,
    French,
    German,
    Italian,
    /// Bokmål
    Norwegian,
    Portuguese,
    Russian,
    Spanish,
    Swedish,
}

impl Language {
    /// Every supported language, in alphabetical order
    pub const ALL: [Language; 12] = [
        Language::Danish,
        Language::Dutch,
        Language::English,
        Language::Finnish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Norwegian,
        Language::Portuguese,
        Language::Russian,
        Language::Spanish,
        Language::Swedish,
    ];

    /// Get the ISO 639-1 language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Danish => "da",
            Language::Dutch => "nl",
            Language::English => "en",
            Language::Finnish => "fi",
            Language::French => "fr",
            Language::German => "de",
            Language::Italian => "it",
            Language::Norwegian => "no",
            Language::Portuguese => "pt",
            Language::Russian => "ru",
            Language::Spanish => "es",
            Language::Swedish => "sv",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            Language::Danish => "Danish",
            Language::Dutch => "Dutch",
            Language::English => "English",
            Language::Finnish => "Finnish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Norwegian => "Norwegian",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Spanish => "Spanish",
            Language::Swedish => "Swedish",
        }
    }

    /// The stemmer implementing this language's pipeline
    pub fn stemmer(&self) -> &'static dyn LanguageStemmer {
        stemmer_for(*self)
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Parse an ISO 639-1 code, an ISO 639-2 code or an English name
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let language = match code.trim().to_lowercase().as_str() {
            "da" | "dan" | "danish" => Language::Danish,
            "nl" | "nld" | "dut" | "dutch" => Language::Dutch,
            "en" | "eng" | "english" | "porter2" => Language::English,
            "fi" | "fin" | "finnish" => Language::Finnish,
            "fr" | "fra" | "fre" | "french" => Language::French,
            "de" | "deu" | "ger" | "german" => Language::German,
            "it" | "ita" | "italian" => Language::Italian,
            "no" | "nor" | "nb" | "nob" | "norwegian" => Language::Norwegian,
            "pt" | "por" | "portuguese" => Language::Portuguese,
            "ru" | "rus" | "russian" => Language::Russian,
            "es" | "spa" | "spanish" => Language::Spanish,
            "sv" | "swe" | "swedish" => Language::Swedish,
            _ => return Err(Error::InvalidLanguage(code.to_string())),
        };
        Ok(language)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(language.code().parse::<Language>().unwrap(), language);
            assert_eq!(language.name().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("DE".parse::<Language>().unwrap(), Language::German);
        assert_eq!(" Swe ".parse::<Language>().unwrap(), Language::Swedish);
        assert_eq!("nob".parse::<Language>().unwrap(), Language::Norwegian);
    }

    #[test]
    fn test_unknown_language_is_an_error() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert!(matches!(err, Error::InvalidLanguage(ref code) if code == "klingon"));
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Language::Portuguese).unwrap();
        assert_eq!(json, "\"portuguese\"");
        let parsed: Language = serde_json::from_str("\"russian\"").unwrap();
        assert_eq!(parsed, Language::Russian);
    }

    #[test]
    fn test_display_and_default() {
        assert_eq!(Language::Finnish.to_string(), "Finnish");
        assert_eq!(Language::default(), Language::English);
    }
}
