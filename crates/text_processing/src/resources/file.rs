//! File-backed resources

use std::path::{Path, PathBuf};

use bangla_cleaner_core::{
    Error, LinguisticResources, PunctuationSet, ResourceProvider, Result, Script, StopwordSet,
};

use super::resource_lines;

/// Reads newline-delimited punctuation and stopword files
///
/// Blank lines and lines starting with `#` are skipped. Each punctuation
/// line is split into its individual characters.
#[derive(Debug, Clone)]
pub struct FileResourceProvider {
    script: Script,
    punctuation_path: PathBuf,
    stopwords_path: PathBuf,
}

impl FileResourceProvider {
    pub fn new(
        script: Script,
        punctuation_path: impl Into<PathBuf>,
        stopwords_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            script,
            punctuation_path: punctuation_path.into(),
            stopwords_path: stopwords_path.into(),
        }
    }

    fn read(resource: &str, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| {
            Error::resource_unavailable(resource, format!("{}: {}", path.display(), e))
        })
    }
}

impl ResourceProvider for FileResourceProvider {
    fn name(&self) -> &str {
        "files"
    }

    fn load(&self) -> Result<LinguisticResources> {
        let punctuation = Self::read("punctuation", &self.punctuation_path)?;
        let stopwords = Self::read("stopwords", &self.stopwords_path)?;

        let punctuation = PunctuationSet::new(resource_lines(&punctuation)).with_curly_quotes();
        let stopwords = StopwordSet::new(resource_lines(&stopwords));

        tracing::debug!(
            punctuation = punctuation.len(),
            stopwords = stopwords.len(),
            "Loaded resources from files"
        );

        let resources = LinguisticResources::new(self.script, punctuation, stopwords);
        resources.validate()?;
        Ok(resources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_from_files() {
        let punctuation = write("।,\n?\n");
        let stopwords = write("# stopwords\nএবং\nকিন্তু\n");
        let provider =
            FileResourceProvider::new(Script::Bengali, punctuation.path(), stopwords.path());

        let resources = provider.load().unwrap();
        assert_eq!(resources.stopwords.len(), 2);
        // 3 listed + 2 curly quotes
        assert_eq!(resources.punctuation.len(), 5);
        assert!(resources.punctuation.contains(","));
    }

    #[test]
    fn test_missing_file() {
        let stopwords = write("এবং\n");
        let provider = FileResourceProvider::new(
            Script::Bengali,
            "/nonexistent/punctuation.txt",
            stopwords.path(),
        );
        let err = provider.load().unwrap_err();
        assert!(matches!(err, Error::ResourceUnavailable { .. }));
        assert!(err.to_string().contains("punctuation"));
    }

    #[test]
    fn test_empty_stopword_file() {
        let punctuation = write("।\n");
        let stopwords = write("# nothing here\n\n");
        let provider =
            FileResourceProvider::new(Script::Bengali, punctuation.path(), stopwords.path());
        assert!(matches!(
            provider.load().unwrap_err(),
            Error::ResourceUnavailable { .. }
        ));
    }
}
