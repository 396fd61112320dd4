//! Pure stage functions
//!
//! Each stage is total: input with nothing to remove comes back unchanged
//! (apart from the trimming or whitespace collapsing a stage documents).

use bangla_cleaner_core::{PunctuationSet, Script, StopwordSet};

use super::patterns::{mixed_digits, EMOJI, ENGLISH_AND_SPECIAL};

/// Strip native-digit runs that are immediately followed by ASCII digits,
/// then trim both ends.
///
/// Pure ASCII runs and pure native runs are left alone.
pub fn remove_digits(text: &str, script: Script) -> String {
    mixed_digits(script).replace_all(text, "").trim().to_string()
}

/// Delete every run of ASCII letters, ASCII digits and special characters.
///
/// Runs are removed without a separator, so neighbouring tokens that were
/// not whitespace-separated become joined.
pub fn remove_english_and_special_chars(text: &str) -> String {
    ENGLISH_AND_SPECIAL.replace_all(text, "").into_owned()
}

/// Drop whitespace-delimited tokens whose lowercase form is a stopword and
/// rejoin the survivors with single spaces. Kept tokens retain their case.
pub fn remove_stopwords(text: &str, stopwords: &StopwordSet) -> String {
    text.split_whitespace()
        .filter(|token| !stopwords.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Delete emoji code points; nothing is inserted in their place
pub fn remove_emojis(text: &str) -> String {
    EMOJI.replace_all(text, "").into_owned()
}

/// Replace each punctuation character with `replace_with`, collapse
/// whitespace runs into single spaces and trim.
pub fn remove_punctuations(text: &str, punctuation: &PunctuationSet, replace_with: &str) -> String {
    let mut replaced = String::with_capacity(text.len());
    for c in text.chars() {
        if punctuation.contains_char(c) {
            replaced.push_str(replace_with);
        } else {
            replaced.push(c);
        }
    }
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
