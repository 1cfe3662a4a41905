use super::schema::Schema;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the project root
pub const CONFIG_FILE: &str = "frontcheck.toml";

/// Settings for a `frontcheck check` run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Directory holding the posts
    pub content_dir: PathBuf,

    /// File extension to validate, without the dot
    pub extension: String,

    /// Descend into subdirectories of `content_dir`
    pub recursive: bool,

    /// Require `YYYY-MM-DD-<title>.<ext>` file names
    pub check_filenames: bool,

    pub schema: Schema,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content/blog"),
            extension: "md".to_string(),
            recursive: false,
            check_filenames: true,
            schema: Schema::default(),
        }
    }
}

impl CheckConfig {
    /// Load config from frontcheck.toml, falling back to defaults
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    /// Load config from an explicit path
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
        let config: CheckConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", config_path.display()))?;
        config
            .check()
            .with_context(|| format!("Invalid config: {}", config_path.display()))?;
        Ok(config)
    }

    /// Save config as pretty TOML
    pub fn save(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
        Ok(())
    }

    pub fn check(&self) -> Result<()> {
        let extension = self.extension();
        if extension.is_empty() || extension.contains(['/', '\\']) {
            bail!("Invalid extension '{}'", self.extension);
        }
        self.schema.check()
    }

    /// Extension with any leading dot removed
    pub fn extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldRule;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = CheckConfig::load(dir.path()).unwrap();
        assert_eq!(config, CheckConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = CheckConfig::default();
        config.extension = "markdown".to_string();
        config.recursive = true;
        config.schema.fields.push(FieldRule::scalar("slug").optional());

        let path = dir.path().join(CONFIG_FILE);
        config.save(&path).unwrap();

        assert_eq!(CheckConfig::load(dir.path()).unwrap(), config);
    }

    #[test]
    fn test_partial_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "content_dir = \"posts\"\nextension = \".mdx\"\n",
        )
        .unwrap();

        let config = CheckConfig::load(dir.path()).unwrap();
        assert_eq!(config.content_dir, PathBuf::from("posts"));
        assert_eq!(config.extension(), "mdx");
        assert!(config.check_filenames);
        assert_eq!(config.schema, Schema::default());
    }

    #[test]
    fn test_invalid_schema_is_rejected() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[schema]\ndate_field = \"published\"\n",
        )
        .unwrap();

        let err = CheckConfig::load(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("published"));
    }

    #[test]
    fn test_malformed_toml() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "content_dir = [").unwrap();
        assert!(CheckConfig::load(dir.path()).is_err());
    }
}
