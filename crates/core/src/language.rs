//! Language and script definitions
//!
//! A normalizer is configured for exactly one target script. The script
//! determines which native digit characters form the leading half of a
//! mixed digit run.

use serde::{Deserialize, Serialize};

/// Supported target languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Bengali,
    Assamese,
    Hindi,
    Marathi,
    Nepali,
}

impl Language {
    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Bengali => "bn",
            Self::Assamese => "as",
            Self::Hindi => "hi",
            Self::Marathi => "mr",
            Self::Nepali => "ne",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bengali => "Bengali",
            Self::Assamese => "Assamese",
            Self::Hindi => "Hindi",
            Self::Marathi => "Marathi",
            Self::Nepali => "Nepali",
        }
    }

    /// Get script used by this language
    pub fn script(&self) -> Script {
        match self {
            Self::Bengali | Self::Assamese => Script::Bengali,
            Self::Hindi | Self::Marathi | Self::Nepali => Script::Devanagari,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Brahmic scripts with native decimal digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    #[default]
    Bengali,
    Devanagari,
}

impl Script {
    /// ISO 15924 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Bengali => "Beng",
            Self::Devanagari => "Deva",
        }
    }

    /// Native digit zero through nine, inclusive
    pub fn digit_range(&self) -> (char, char) {
        match self {
            Self::Bengali => ('\u{09E6}', '\u{09EF}'),
            Self::Devanagari => ('\u{0966}', '\u{096F}'),
        }
    }
}
