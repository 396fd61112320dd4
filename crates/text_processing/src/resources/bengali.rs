//! Embedded Bengali corpus

use bangla_cleaner_core::{
    Error, LinguisticResources, PunctuationSet, ResourceProvider, Result, Script, StopwordSet,
};

use super::resource_lines;

const PUNCTUATION: &str = include_str!("../../data/bn/punctuation.txt");
const STOPWORDS: &str = include_str!("../../data/bn/stopwords.txt");

/// Bengali punctuation and stopwords compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BengaliCorpus;

impl BengaliCorpus {
    pub const SCRIPT: Script = Script::Bengali;

    pub fn new() -> Self {
        Self
    }
}

impl ResourceProvider for BengaliCorpus {
    fn name(&self) -> &str {
        "bengali_corpus"
    }

    fn load(&self) -> Result<LinguisticResources> {
        let punctuation = PunctuationSet::new(resource_lines(PUNCTUATION)).with_curly_quotes();
        let stopwords = StopwordSet::new(resource_lines(STOPWORDS));

        if stopwords.is_empty() {
            return Err(Error::resource_unavailable(
                "bengali_corpus/stopwords",
                "embedded stopword list is empty",
            ));
        }

        Ok(LinguisticResources::new(Self::SCRIPT, punctuation, stopwords))
    }
}
