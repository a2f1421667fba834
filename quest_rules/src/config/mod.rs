//! Quest system configuration, read from TOML.
//!
//! ```toml
//! theme = "CyberpunkCity"
//! data_path = "Content/Data/QuestData.json"
//! duplicate_ids = "reject"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::QuestDataError;

/// Default location of the quest data inside the project content folder.
pub const DEFAULT_DATA_PATH: &str = "Content/Data/QuestData.json";

/// Theme pack a quest catalog belongs to.
///
/// Every theme runs on the same registry; the theme only names it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum ThemePack {
    CyberpunkCity,
    #[default]
    MagicalForest,
    Custom(String),
}

impl ThemePack {
    /// Create a theme from its name. Unrecognised names become `Custom`.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.as_str() {
            "CyberpunkCity" => ThemePack::CyberpunkCity,
            "MagicalForest" => ThemePack::MagicalForest,
            _ => ThemePack::Custom(name),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ThemePack::CyberpunkCity => "CyberpunkCity",
            ThemePack::MagicalForest => "MagicalForest",
            ThemePack::Custom(name) => name,
        }
    }
}

impl From<String> for ThemePack {
    fn from(name: String) -> Self {
        Self::from_name(name)
    }
}

impl From<ThemePack> for String {
    fn from(theme: ThemePack) -> Self {
        theme.name().to_string()
    }
}

impl std::fmt::Display for ThemePack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What to do when a catalog contains the same quest id more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateIdPolicy {
    /// Keep every record. Lookups resolve to the first record with the id.
    #[default]
    Preserve,
    /// Keep the first record per id and drop the rest at load time.
    Reject,
}

/// Runtime configuration for a quest registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestSystemConfig {
    pub theme: ThemePack,
    /// Path of the quest data document.
    pub data_path: PathBuf,
    pub duplicate_ids: DuplicateIdPolicy,
}

impl Default for QuestSystemConfig {
    fn default() -> Self {
        Self {
            theme: ThemePack::default(),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            duplicate_ids: DuplicateIdPolicy::default(),
        }
    }
}

impl QuestSystemConfig {
    /// Default configuration for a theme.
    pub fn for_theme(theme: ThemePack) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    /// Parse a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, QuestDataError> {
        Ok(toml::from_str(content)?)
    }

    /// Read a configuration file.
    pub fn load(path: &Path) -> Result<Self, QuestDataError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| QuestDataError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Resolve `data_path` against a project root when it is relative.
    pub fn resolve_data_path(&self, project_root: &Path) -> PathBuf {
        if self.data_path.is_absolute() {
            self.data_path.clone()
        } else {
            project_root.join(&self.data_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = QuestSystemConfig::default();
        assert_eq!(config.theme, ThemePack::MagicalForest);
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(config.duplicate_ids, DuplicateIdPolicy::Preserve);
    }

    #[test]
    fn test_parse_full_config() {
        let config = QuestSystemConfig::from_toml_str(
            r#"
            theme = "CyberpunkCity"
            data_path = "/srv/game/quests.json"
            duplicate_ids = "reject"
            "#,
        )
        .unwrap();

        assert_eq!(config.theme, ThemePack::CyberpunkCity);
        assert_eq!(config.data_path, PathBuf::from("/srv/game/quests.json"));
        assert_eq!(config.duplicate_ids, DuplicateIdPolicy::Reject);
    }

    #[test]
    fn test_partial_config_and_custom_theme() {
        let config = QuestSystemConfig::from_toml_str(r#"theme = "DesertRuins""#).unwrap();
        assert_eq!(config.theme, ThemePack::Custom("DesertRuins".to_string()));
        assert_eq!(config.theme.to_string(), "DesertRuins");
        assert_eq!(config.duplicate_ids, DuplicateIdPolicy::Preserve);

        assert_eq!(QuestSystemConfig::from_toml_str("").unwrap(), QuestSystemConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        let result = QuestSystemConfig::from_toml_str(r#"duplicate_ids = "merge""#);
        assert!(matches!(result, Err(QuestDataError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"theme = "MagicalForest""#).unwrap();
        writeln!(file, r#"data_path = "Data/Forest.json""#).unwrap();

        let config = QuestSystemConfig::load(file.path()).unwrap();
        assert_eq!(config.data_path, PathBuf::from("Data/Forest.json"));
        assert_eq!(
            config.resolve_data_path(Path::new("/game")),
            PathBuf::from("/game/Data/Forest.json")
        );

        let missing = QuestSystemConfig::load(Path::new("/nonexistent/quests.toml"));
        assert!(matches!(missing, Err(QuestDataError::Io { .. })));
    }
}
