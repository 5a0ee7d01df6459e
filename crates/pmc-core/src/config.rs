use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::editor::DEFAULT_INDENT;

/// Collection file edited when `--file` is not given, relative to the working directory.
pub const DEFAULT_COLLECTION_FILE: &str = "Tymbl.postman_collection.json";

/// What to do when a patch targets a section that does not exist and does not ask to create it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingSection {
    /// Abort the whole run; nothing is written.
    #[default]
    Fail,
    /// Log a warning, record the skip in the summary and continue.
    Skip,
}

/// Global configuration loaded from `~/.config/pmc/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PmcConfig {
    /// Collection file used when `--file` is not passed.
    pub collection_file: PathBuf,
    /// Spaces per indentation level when saving.
    pub indent: usize,
    /// Policy for patches whose target section is missing.
    #[serde(default)]
    pub missing_section: MissingSection,
    /// Write `info.updatedAt` whenever a patch changes the collection.
    #[serde(default = "default_true")]
    pub stamp_updated_at: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PmcConfig {
    fn default() -> Self {
        Self {
            collection_file: PathBuf::from(DEFAULT_COLLECTION_FILE),
            indent: DEFAULT_INDENT,
            missing_section: MissingSection::Fail,
            stamp_updated_at: true,
        }
    }
}

impl PmcConfig {
    /// Timestamp for `info.updatedAt`, or `None` when stamping is disabled.
    pub fn stamp(&self) -> Option<DateTime<Utc>> {
        self.stamp_updated_at.then(Utc::now)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pmc")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PmcConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PmcConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PmcConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = PmcConfig::default();
        assert_eq!(cfg.collection_file, PathBuf::from("Tymbl.postman_collection.json"));
        assert_eq!(cfg.indent, 2);
        assert_eq!(cfg.missing_section, MissingSection::Fail);
        assert!(cfg.stamp_updated_at);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = PmcConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: PmcConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.collection_file, cfg.collection_file);
        assert_eq!(parsed.indent, cfg.indent);
        assert_eq!(parsed.missing_section, cfg.missing_section);
        assert_eq!(parsed.stamp_updated_at, cfg.stamp_updated_at);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            collection_file = "api/Other.postman_collection.json"
            indent = 4
            missing_section = "skip"
            stamp_updated_at = false
        "#;
        let cfg: PmcConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            cfg.collection_file,
            PathBuf::from("api/Other.postman_collection.json")
        );
        assert_eq!(cfg.indent, 4);
        assert_eq!(cfg.missing_section, MissingSection::Skip);
        assert!(!cfg.stamp_updated_at);
    }

    #[test]
    fn config_toml_optional_keys_default() {
        let toml = r#"
            collection_file = "Tymbl.postman_collection.json"
            indent = 2
        "#;
        let cfg: PmcConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.missing_section, MissingSection::Fail);
        assert!(cfg.stamp_updated_at);
    }

    #[test]
    fn config_toml_rejects_unknown_policy() {
        let toml = r#"
            collection_file = "c.json"
            indent = 2
            missing_section = "ignore"
        "#;
        assert!(toml::from_str::<PmcConfig>(toml).is_err());
    }

    #[test]
    fn stamp_follows_setting() {
        let mut cfg = PmcConfig::default();
        assert!(cfg.stamp().is_some());
        cfg.stamp_updated_at = false;
        assert!(cfg.stamp().is_none());
    }
}
