use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for release-tagger.
///
/// Covers the host base URL and the per-run release parameters. Credentials
/// are deliberately not part of the file; the token comes from the
/// environment.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub host: HostConfig,

    #[serde(default)]
    pub release: ReleaseConfig,
}

/// Connection surface for the remote repository host.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct HostConfig {
    /// Instance root, e.g. "https://gitlab.example.com". When unset, no
    /// host client is constructed and the run reports it.
    #[serde(default)]
    pub url: Option<String>,
}

fn default_separator() -> String {
    ".".to_string()
}

fn default_target_ref() -> String {
    "master".to_string()
}

/// Per-run release parameters.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    /// Pattern distinguishing release-versioning tags from unrelated tags.
    /// Empty means every tag is a candidate.
    #[serde(default)]
    pub tag_schema: String,

    /// Delimiter used to split a tag name into segments for incrementing.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Branch or commit the new tag points at.
    #[serde(default = "default_target_ref")]
    pub target_ref: String,

    /// Explicit project id; a webhook trigger overrides it.
    #[serde(default)]
    pub project_id: Option<u64>,

    /// Inline changelog text for the release record.
    #[serde(default)]
    pub changelog: String,

    /// Path to a changelog file; takes precedence over the inline text.
    #[serde(default)]
    pub changelog_path: Option<String>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            tag_schema: String::new(),
            separator: default_separator(),
            target_ref: default_target_ref(),
            project_id: None,
            changelog: String::new(),
            changelog_path: None,
        }
    }
}

impl ReleaseConfig {
    /// Resolve the changelog text, reading the configured file if one is
    /// set, otherwise falling back to the inline text.
    pub fn changelog_text(&self) -> std::io::Result<String> {
        match &self.changelog_path {
            Some(path) => fs::read_to_string(path),
            None => Ok(self.changelog.clone()),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release-tagger.toml` in current directory
/// 3. `release-tagger.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./release-tagger.toml").exists() {
        fs::read_to_string("./release-tagger.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("release-tagger.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.host.url.is_none());
        assert_eq!(config.release.separator, ".");
        assert_eq!(config.release.target_ref, "master");
        assert!(config.release.tag_schema.is_empty());
        assert!(config.release.project_id.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
[release]
tag_schema = "1\\.0\\.\\d+"
project_id = 7
"#,
        )
        .unwrap();
        assert_eq!(config.release.tag_schema, r"1\.0\.\d+");
        assert_eq!(config.release.project_id, Some(7));
        assert_eq!(config.release.separator, ".");
        assert_eq!(config.release.target_ref, "master");
    }

    #[test]
    fn test_inline_changelog_used_without_path() {
        let release = ReleaseConfig {
            changelog: "* notes".to_string(),
            ..ReleaseConfig::default()
        };
        assert_eq!(release.changelog_text().unwrap(), "* notes");
    }
}
