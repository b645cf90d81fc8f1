use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the repository root.
pub const CONFIG_FILE_NAME: &str = "gsum.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitConfig {
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Comma-separated keywords matched against commit subjects.
    #[serde(default)]
    pub keywords: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report format, `JSON` or `PLAINTEXT` (case-insensitive).
    #[serde(default = "default_format")]
    pub format: String,

    /// Destination path for the JSON report.
    #[serde(default = "default_file")]
    pub file: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            file: default_file(),
        }
    }
}

fn default_format() -> String {
    "JSON".to_string()
}

fn default_file() -> PathBuf {
    PathBuf::from("git-report.json")
}

impl Config {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Configured keywords, trimmed, with empty entries dropped.
    pub fn keywords(&self) -> Vec<String> {
        split_keywords(&self.git.search.keywords)
    }

    /// Configured report format.
    pub fn format(&self) -> OutputFormat {
        OutputFormat::from_config(&self.output.format)
    }
}

/// Configuration path: explicit override, or [`CONFIG_FILE_NAME`] in the
/// repository root.
pub fn config_path(explicit: Option<&Path>, repo: &Path) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| repo.join(CONFIG_FILE_NAME))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Plaintext,
}

impl OutputFormat {
    /// Resolve a configured format string. Anything that is not
    /// `PLAINTEXT` (case-insensitive) selects JSON.
    pub fn from_config(value: &str) -> Self {
        if value.eq_ignore_ascii_case("plaintext") {
            Self::Plaintext
        } else {
            Self::Json
        }
    }
}

/// Split a comma-separated keyword value, trimming entries and dropping
/// empty ones.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_file_is_missing() {
        let config = Config::load_or_default("/nonexistent/gsum.toml").unwrap();
        assert!(config.keywords().is_empty());
        assert_eq!(config.format(), OutputFormat::Json);
        assert_eq!(config.output.file, PathBuf::from("git-report.json"));
    }

    #[test]
    fn loads_full_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"
            [git.search]
            keywords = "fix, bug,,  urgent "

            [output]
            format = "plaintext"
            file = "out/report.json"
        "#,
        )
        .unwrap();

        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.keywords(), vec!["fix", "bug", "urgent"]);
        assert_eq!(config.format(), OutputFormat::Plaintext);
        assert_eq!(config.output.file, PathBuf::from("out/report.json"));
    }

    #[test]
    fn empty_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "").unwrap();

        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.output.format, "JSON");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "this is not valid toml [[[").unwrap();

        assert!(Config::load_or_default(&path).is_err());
    }

    #[test]
    fn format_comparison_ignores_case() {
        assert_eq!(OutputFormat::from_config("PLAINTEXT"), OutputFormat::Plaintext);
        assert_eq!(OutputFormat::from_config("PlainText"), OutputFormat::Plaintext);
        assert_eq!(OutputFormat::from_config("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_config("yaml"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_config(""), OutputFormat::Json);
    }

    #[test]
    fn config_path_prefers_explicit_override() {
        let explicit = PathBuf::from("/tmp/custom.toml");
        assert_eq!(
            config_path(Some(explicit.as_path()), Path::new("/repo")),
            explicit
        );
        assert_eq!(
            config_path(None, Path::new("/repo")),
            PathBuf::from("/repo").join(CONFIG_FILE_NAME)
        );
    }
}
