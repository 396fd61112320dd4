//! Names of the normalization stages

use serde::{Deserialize, Serialize};

/// One pure text-to-text transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    /// Strip mixed native-then-ASCII digit runs, then trim
    RemoveDigits,
    /// Delete runs of ASCII letters, digits and listed special characters
    RemoveEnglishAndSpecialChars,
    /// Drop whitespace tokens found in the stopword set
    RemoveStopwords,
    /// Delete emoji code points
    RemoveEmojis,
    /// Replace punctuation with a space and collapse whitespace
    RemovePunctuations,
}

/// Order applied by `clean` unless overridden. Punctuation removal is
/// available standalone but not part of it.
///
/// Emoji removal runs before stopword removal: deleting a space-separated
/// emoji leaves a whitespace gap, and only the stopword stage rejoins
/// tokens with single spaces. With this order `clean` is idempotent.
pub const DEFAULT_STAGES: [StageKind; 4] = [
    StageKind::RemoveDigits,
    StageKind::RemoveEnglishAndSpecialChars,
    StageKind::RemoveEmojis,
    StageKind::RemoveStopwords,
];

impl StageKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RemoveDigits => "remove_digits",
            Self::RemoveEnglishAndSpecialChars => "remove_english_and_special_chars",
            Self::RemoveStopwords => "remove_stopwords",
            Self::RemoveEmojis => "remove_emojis",
            Self::RemovePunctuations => "remove_punctuations",
        }
    }

    pub fn all() -> &'static [StageKind] {
        &[
            Self::RemoveDigits,
            Self::RemoveEnglishAndSpecialChars,
            Self::RemoveStopwords,
            Self::RemoveEmojis,
            Self::RemovePunctuations,
        ]
    }

    /// Parse a stage by its snake_case name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.name() == name.trim())
    }
}

impl std::fmt::Display for StageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        assert_eq!(DEFAULT_STAGES[0], StageKind::RemoveDigits);
        assert_eq!(DEFAULT_STAGES[1], StageKind::RemoveEnglishAndSpecialChars);
        assert_eq!(DEFAULT_STAGES[3], StageKind::RemoveStopwords);
        assert!(!DEFAULT_STAGES.contains(&StageKind::RemovePunctuations));
    }

    #[test]
    fn test_name_matches_serde() {
        for stage in StageKind::all() {
            let json = serde_json::to_string(stage).unwrap();
            assert_eq!(json, format!("\"{}\"", stage.name()));
            assert_eq!(StageKind::from_name(stage.name()), Some(*stage));
        }
        assert_eq!(StageKind::from_name("stem"), None);
    }
}
