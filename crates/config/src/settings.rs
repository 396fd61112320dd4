//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use bangla_cleaner_text_processing::{BengaliCorpus, CleanerConfig, ResourceSource};

use crate::ConfigError;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "BANGLA_CLEANER";

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    #[default]
    Development,
    Production,
}

/// Main application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Cleaning pipeline configuration
    #[serde(default)]
    pub cleaner: CleanerConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Settings {
    /// Load from a single YAML or TOML file, chosen by extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileNotFound(format!("{}: {}", path.display(), e)))?;

        let settings: Settings = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?
            },
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "path".to_string(),
                    message: format!("Unsupported config format: {:?}", other),
                })
            },
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_cleaner()?;
        self.validate_observability()?;
        Ok(())
    }

    fn validate_cleaner(&self) -> Result<(), ConfigError> {
        let cleaner = &self.cleaner;

        if cleaner.text_column.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "cleaner.text_column".to_string(),
                message: "Must not be empty".to_string(),
            });
        }

        if cleaner.stages.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "cleaner.stages".to_string(),
                message: "At least one stage is required".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for stage in &cleaner.stages {
            if !seen.insert(stage) {
                return Err(ConfigError::InvalidValue {
                    field: "cleaner.stages".to_string(),
                    message: format!("Stage '{}' listed more than once", stage),
                });
            }
        }

        if cleaner.resources.source == ResourceSource::Builtin
            && cleaner.language.script() != BengaliCorpus::SCRIPT
        {
            return Err(ConfigError::InvalidValue {
                field: "cleaner.language".to_string(),
                message: format!(
                    "Built-in resources only cover Bengali script, not {}; use file resources",
                    cleaner.language
                ),
            });
        }

        if cleaner.resources.source == ResourceSource::Files {
            if cleaner.resources.punctuation_path.is_none() {
                return Err(ConfigError::MissingField(
                    "cleaner.resources.punctuation_path".to_string(),
                ));
            }
            if cleaner.resources.stopwords_path.is_none() {
                return Err(ConfigError::MissingField(
                    "cleaner.resources.stopwords_path".to_string(),
                ));
            }
        }

        Ok(())
    }

    fn validate_observability(&self) -> Result<(), ConfigError> {
        let level = self.observability.log_level.to_lowercase();
        if !matches!(level.as_str(), "trace" | "debug" | "info" | "warn" | "error") {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!("Unknown log level '{}'", self.observability.log_level),
            });
        }
        Ok(())
    }
}

/// Load settings from `config/` and the environment
///
/// Priority: env vars > config/{env} > config/default > defaults
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from("config", env)
}

/// Load settings from a config directory and the environment
pub fn load_settings_from<P: AsRef<Path>>(
    dir: P,
    env: Option<&str>,
) -> Result<Settings, ConfigError> {
    let dir = dir.as_ref();
    let mut builder = Config::builder();

    // Load default config
    builder = builder.add_source(
        File::with_name(&dir.join("default").to_string_lossy()).required(false),
    );

    // Load environment-specific config
    if let Some(env_name) = env {
        builder = builder.add_source(
            File::with_name(&dir.join(env_name).to_string_lossy()).required(false),
        );
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    // Validate
    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bangla_cleaner_core::{Language, StageKind};
    use std::path::PathBuf;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.cleaner.text_column, "text");
        assert_eq!(settings.observability.log_level, "info");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_stages_rejected() {
        let mut settings = Settings::default();
        settings.cleaner.stages.clear();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_duplicate_stage_rejected() {
        let mut settings = Settings::default();
        settings.cleaner.stages.push(StageKind::RemoveDigits);
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("remove_digits"));
    }

    #[test]
    fn test_files_source_requires_paths() {
        let mut settings = Settings::default();
        settings.cleaner.resources.source = ResourceSource::Files;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::MissingField(_))
        ));

        settings.cleaner.resources.punctuation_path = Some(PathBuf::from("p.txt"));
        settings.cleaner.resources.stopwords_path = Some(PathBuf::from("s.txt"));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_builtin_rejects_other_scripts() {
        let mut settings = Settings::default();
        settings.cleaner.language = Language::Hindi;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "cleaner.language"
        ));

        settings.cleaner.language = Language::Assamese;
        assert!(settings.validate().is_ok());

        settings.cleaner.language = Language::Hindi;
        settings.cleaner.resources.source = ResourceSource::Files;
        settings.cleaner.resources.punctuation_path = Some(PathBuf::from("p.txt"));
        settings.cleaner.resources.stopwords_path = Some(PathBuf::from("s.txt"));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_bad_log_level() {
        let mut settings = Settings::default();
        settings.observability.log_level = "loud".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaner.yaml");
        std::fs::write(
            &path,
            "cleaner:\n  text_column: comment\n  label_column: category\n  stages: [remove_emojis, remove_punctuations]\nobservability:\n  log_json: true\n",
        )
        .unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.cleaner.text_column, "comment");
        assert_eq!(settings.cleaner.label_column.as_deref(), Some("category"));
        assert_eq!(
            settings.cleaner.stages,
            vec![StageKind::RemoveEmojis, StageKind::RemovePunctuations]
        );
        assert!(settings.observability.log_json);
        assert_eq!(settings.observability.log_level, "info");
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaner.toml");
        std::fs::write(
            &path,
            "[cleaner]\nlanguage = \"bengali\"\npunctuation_replacement = \"\"\n",
        )
        .unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.cleaner.punctuation_replacement, "");
        assert_eq!(settings.environment, RuntimeEnvironment::Development);
    }

    #[test]
    fn test_from_file_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaner.ini");
        std::fs::write(&path, "x=1").unwrap();
        assert!(matches!(
            Settings::from_file(&path),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_load_settings_layering() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.yaml"),
            "cleaner:\n  text_column: text\nobservability:\n  log_level: warn\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("production.yaml"),
            "environment: production\ncleaner:\n  text_column: comment\n",
        )
        .unwrap();

        let settings = load_settings_from(dir.path(), Some("production")).unwrap();
        assert_eq!(settings.environment, RuntimeEnvironment::Production);
        assert_eq!(settings.cleaner.text_column, "comment");
        assert_eq!(settings.observability.log_level, "warn");

        let settings = load_settings_from(dir.path(), None).unwrap();
        assert_eq!(settings.cleaner.text_column, "text");
    }

    #[test]
    fn test_load_settings_missing_dir_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(dir.path().join("absent"), None).unwrap();
        assert_eq!(settings.cleaner, CleanerConfig::default());
    }
}
