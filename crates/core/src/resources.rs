//! Immutable linguistic resource sets
//!
//! Both sets are built once when a resource provider loads and are never
//! mutated afterwards, so a normalizer can share them across threads
//! without locking.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, Script};

/// U+2018, always part of the punctuation set
pub const LEFT_SINGLE_QUOTE: &str = "\u{2018}";
/// U+2019, always part of the punctuation set
pub const RIGHT_SINGLE_QUOTE: &str = "\u{2019}";

/// Set of single-character punctuation symbols
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunctuationSet(HashSet<String>);

impl PunctuationSet {
    /// Build from symbols. Multi-character entries are split into their
    /// characters so that every member is a single character.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = symbols
            .into_iter()
            .flat_map(|s| {
                s.as_ref()
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self(set)
    }

    /// Same set plus the two curly single quotes
    pub fn with_curly_quotes(mut self) -> Self {
        self.0.insert(LEFT_SINGLE_QUOTE.to_string());
        self.0.insert(RIGHT_SINGLE_QUOTE.to_string());
        self
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.0.contains(symbol)
    }

    pub fn contains_char(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.0.contains(&*c.encode_utf8(&mut buf))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Set of lowercase-normalized stopword tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopwordSet(HashSet<String>);

impl StopwordSet {
    /// Build from tokens; entries are trimmed and lowercased, blanks dropped
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self(set)
    }

    /// Membership test on the lowercase form of `token`
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(&token.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// What a resource provider yields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinguisticResources {
    pub script: Script,
    pub punctuation: PunctuationSet,
    pub stopwords: StopwordSet,
}

impl LinguisticResources {
    pub fn new(script: Script, punctuation: PunctuationSet, stopwords: StopwordSet) -> Self {
        Self {
            script,
            punctuation,
            stopwords,
        }
    }

    /// Check the minimum contract: non-empty stopwords, curly quotes present
    pub fn validate(&self) -> Result<()> {
        if self.stopwords.is_empty() {
            return Err(Error::resource_unavailable(
                "stopwords",
                "stopword set is empty",
            ));
        }

        for quote in [LEFT_SINGLE_QUOTE, RIGHT_SINGLE_QUOTE] {
            if !self.punctuation.contains(quote) {
                return Err(Error::resource_unavailable(
                    "punctuation",
                    format!("punctuation set is missing {:?}", quote),
                ));
            }
        }

        Ok(())
    }
}
