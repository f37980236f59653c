use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid exclude pattern {pattern:?}: {source}")]
    InvalidExcludePattern {
        pattern: String,
        source: glob::PatternError,
    },
}

/// Site build settings, usually read from `sitemark.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the markdown sources.
    pub content_dir: PathBuf,
    /// Page template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template: PathBuf,
    /// Where generated pages are written.
    pub output_dir: PathBuf,
    /// Copied verbatim into `output_dir` before pages are generated.
    pub static_dir: Option<PathBuf>,
    /// Prefix substituted for root-relative `href="/` and `src="/` links.
    pub base_path: String,
    /// Glob patterns, relative to `content_dir`, for sources to skip.
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            template: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
            static_dir: Some(PathBuf::from("static")),
            base_path: "/".to_string(),
            exclude: Vec::new(),
        }
    }
}

impl Config {
    pub const FILE_NAME: &'static str = "sitemark.toml";

    /// Loads a config file, returning `Ok(None)` if it does not exist.
    ///
    /// Paths are shell-expanded and then resolved against the directory
    /// holding the config file.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        let base_dir = config_path.parent().unwrap_or_else(|| Path::new(""));
        Ok(Some(config.expand_paths().resolve_relative_to(base_dir)))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Makes every relative path absolute with respect to `base_dir`.
    pub fn resolve_relative_to(mut self, base_dir: &Path) -> Self {
        let resolve = |p: PathBuf| {
            if p.is_relative() {
                base_dir.join(p)
            } else {
                p
            }
        };
        self.content_dir = resolve(self.content_dir);
        self.template = resolve(self.template);
        self.output_dir = resolve(self.output_dir);
        self.static_dir = self.static_dir.map(resolve);
        self
    }

    /// Compiles the `exclude` globs.
    pub fn exclude_patterns(&self) -> Result<Vec<glob::Pattern>, ConfigError> {
        self.exclude
            .iter()
            .map(|pattern| {
                glob::Pattern::new(pattern).map_err(|source| ConfigError::InvalidExcludePattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect()
    }

    fn expand_paths(mut self) -> Self {
        let expand = |p: PathBuf| Self::expand_path(&p).unwrap_or(p);
        self.content_dir = expand(self.content_dir);
        self.template = expand(self.template);
        self.output_dir = expand(self.output_dir);
        self.static_dir = self.static_dir.map(expand);
        self
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_for_missing_keys() {
        let config: Config = toml::from_str(r#"base_path = "/blog/""#).unwrap();

        assert_eq!(config.base_path, "/blog/");
        assert_eq!(config.content_dir, PathBuf::from("content"));
        assert_eq!(config.static_dir, Some(PathBuf::from("static")));
        assert!(config.exclude.is_empty());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            exclude: vec!["drafts/**".to_string()],
            ..Config::default()
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("SITEMARK_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$SITEMARK_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path);

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/subdir")));

        unsafe {
            env::remove_var("SITEMARK_TEST_VAR");
        }
    }

    #[test]
    fn test_resolve_relative_paths() {
        let config = Config {
            output_dir: PathBuf::from("/abs/out"),
            ..Config::default()
        }
        .resolve_relative_to(Path::new("/site"));

        assert_eq!(config.content_dir, PathBuf::from("/site/content"));
        assert_eq!(config.template, PathBuf::from("/site/template.html"));
        assert_eq!(config.output_dir, PathBuf::from("/abs/out"));
        assert_eq!(config.static_dir, Some(PathBuf::from("/site/static")));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join(Config::FILE_NAME);
        std::fs::write(&config_file, "content_dir = [not valid").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join(Config::FILE_NAME);
        let test_config = Config {
            base_path: "/docs/".to_string(),
            static_dir: Some(PathBuf::from("assets")),
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config.base_path, "/docs/");
        assert_eq!(
            loaded_config.static_dir,
            Some(temp_dir.path().join("assets"))
        );
        assert_eq!(loaded_config.content_dir, temp_dir.path().join("content"));
    }

    #[test]
    fn test_exclude_patterns() {
        let config = Config {
            exclude: vec!["drafts/**".to_string(), "*.tmp.md".to_string()],
            ..Config::default()
        };

        let patterns = config.exclude_patterns().unwrap();

        assert!(patterns[0].matches("drafts/post.md"));
        assert!(patterns[1].matches("note.tmp.md"));
        assert!(!patterns[0].matches("posts/drafts.md"));
    }

    #[test]
    fn test_invalid_exclude_pattern() {
        let config = Config {
            exclude: vec!["[unclosed".to_string()],
            ..Config::default()
        };

        assert!(matches!(
            config.exclude_patterns(),
            Err(ConfigError::InvalidExcludePattern { .. })
        ));
    }
}
