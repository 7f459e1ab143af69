//! Supported mnemonic languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::MnemonicError;

/// Ideographic space, used to join Japanese mnemonics
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// A mnemonic wordlist language
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Language {
    /// English
    #[default]
    English,
    /// Simplified Chinese
    ChineseSimplified,
    /// Traditional Chinese
    ChineseTraditional,
    /// Spanish
    Spanish,
    /// French
    French,
    /// Italian
    Italian,
    /// Japanese
    Japanese,
    /// Korean
    Korean,
    /// Portuguese
    Portuguese,
    /// Russian
    Russian,
    /// Turkish
    Turkish,
    /// Czech
    Czech,
}

impl Language {
    /// Every supported language
    pub const ALL: [Self; 12] = [
        Self::English,
        Self::ChineseSimplified,
        Self::ChineseTraditional,
        Self::Spanish,
        Self::French,
        Self::Italian,
        Self::Japanese,
        Self::Korean,
        Self::Portuguese,
        Self::Russian,
        Self::Turkish,
        Self::Czech,
    ];

    /// Canonical lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::ChineseSimplified => "chinese_simplified",
            Self::ChineseTraditional => "chinese_traditional",
            Self::Spanish => "spanish",
            Self::French => "french",
            Self::Italian => "italian",
            Self::Japanese => "japanese",
            Self::Korean => "korean",
            Self::Portuguese => "portuguese",
            Self::Russian => "russian",
            Self::Turkish => "turkish",
            Self::Czech => "czech",
        }
    }

    /// Character placed between words of a rendered mnemonic
    #[must_use]
    pub const fn delimiter(self) -> char {
        match self {
            Self::Japanese => IDEOGRAPHIC_SPACE,
            _ => ' ',
        }
    }
}

impl FromStr for Language {
    type Err = MnemonicError;

    /// Parse a language identifier, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| MnemonicError::UnsupportedLanguage(s.to_string()))
    }
}

impl TryFrom<String> for Language {
    type Error = MnemonicError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert_eq!("ENGLISH".parse::<Language>().unwrap(), Language::English);
        assert_eq!(
            "Chinese_Simplified".parse::<Language>().unwrap(),
            Language::ChineseSimplified
        );
        assert_eq!("JaPaNeSe".parse::<Language>().unwrap(), Language::Japanese);
    }

    #[test]
    fn test_parse_every_identifier() {
        for lang in Language::ALL {
            assert_eq!(lang.as_str().parse::<Language>().unwrap(), lang);
            assert_eq!(lang.to_string(), lang.as_str());
        }
    }

    #[test]
    fn test_unsupported_language() {
        let err = "invalid".parse::<Language>().unwrap_err();
        assert!(matches!(err, MnemonicError::UnsupportedLanguage(ref s) if s == "invalid"));

        assert!("".parse::<Language>().is_err());
        assert!("chinese".parse::<Language>().is_err());
    }

    #[test]
    fn test_delimiter() {
        assert_eq!(Language::Japanese.delimiter(), '\u{3000}');
        for lang in Language::ALL.into_iter().filter(|l| *l != Language::Japanese) {
            assert_eq!(lang.delimiter(), ' ');
        }
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Language::ChineseTraditional).unwrap();
        assert_eq!(json, "\"chinese_traditional\"");

        let parsed: Language = serde_json::from_str("\"Korean\"").unwrap();
        assert_eq!(parsed, Language::Korean);

        assert!(serde_json::from_str::<Language>("\"klingon\"").is_err());
    }
}
