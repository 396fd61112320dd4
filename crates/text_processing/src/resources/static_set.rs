//! Caller-supplied resources

use bangla_cleaner_core::{
    LinguisticResources, PunctuationSet, ResourceProvider, Result, Script, StopwordSet,
};

/// In-memory punctuation and stopword sets
#[derive(Debug, Clone)]
pub struct StaticResources {
    resources: LinguisticResources,
}

impl StaticResources {
    pub fn new<P, S, T, U>(script: Script, punctuation: P, stopwords: S) -> Self
    where
        P: IntoIterator<Item = T>,
        S: IntoIterator<Item = U>,
        T: AsRef<str>,
        U: AsRef<str>,
    {
        Self {
            resources: LinguisticResources::new(
                script,
                PunctuationSet::new(punctuation).with_curly_quotes(),
                StopwordSet::new(stopwords),
            ),
        }
    }

    /// Bengali script shorthand
    pub fn bengali<P, S, T, U>(punctuation: P, stopwords: S) -> Self
    where
        P: IntoIterator<Item = T>,
        S: IntoIterator<Item = U>,
        T: AsRef<str>,
        U: AsRef<str>,
    {
        Self::new(Script::Bengali, punctuation, stopwords)
    }
}

impl ResourceProvider for StaticResources {
    fn name(&self) -> &str {
        "static"
    }

    fn load(&self) -> Result<LinguisticResources> {
        self.resources.validate()?;
        Ok(self.resources.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bangla_cleaner_core::Error;

    #[test]
    fn test_static_adds_quotes() {
        let resources = StaticResources::bengali([","], ["এবং"]).load().unwrap();
        assert!(resources.punctuation.contains("\u{2018}"));
        assert!(resources.stopwords.contains("এবং"));
    }

    #[test]
    fn test_static_empty_stopwords_unavailable() {
        let provider = StaticResources::bengali([","], Vec::<String>::new());
        assert!(matches!(
            provider.load().unwrap_err(),
            Error::ResourceUnavailable { .. }
        ));
    }
}
