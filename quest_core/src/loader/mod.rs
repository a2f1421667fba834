//! Quest data sources.
//!
//! The registry does not parse files itself; it asks a [`QuestSource`] for
//! records once, at initialization.

use std::path::{Path, PathBuf};

use quest_rules::{parse_quest_file, Quest, QuestDataError};
use tracing::info;

/// Anything that can produce the quest records of a catalog.
pub trait QuestSource {
    /// Load every quest record, in source order.
    fn load(&self) -> Result<Vec<Quest>, QuestDataError>;

    /// Short description for diagnostics, e.g. the file path.
    fn describe(&self) -> String;
}

/// Quest data document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuestSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Quest>, QuestDataError> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| QuestDataError::io(&self.path, e))?;
        let quests = parse_quest_file(&content)?;
        info!(path = %self.path.display(), count = quests.len(), "read quest data file");
        Ok(quests)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Quest data document already held in memory.
#[derive(Debug, Clone)]
pub struct JsonStrSource<'a> {
    content: &'a str,
}

impl<'a> JsonStrSource<'a> {
    pub fn new(content: &'a str) -> Self {
        Self { content }
    }
}

impl QuestSource for JsonStrSource<'_> {
    fn load(&self) -> Result<Vec<Quest>, QuestDataError> {
        parse_quest_file(self.content)
    }

    fn describe(&self) -> String {
        format!("<inline json, {} bytes>", self.content.len())
    }
}

/// Records that were parsed elsewhere.
impl QuestSource for Vec<Quest> {
    fn load(&self) -> Result<Vec<Quest>, QuestDataError> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        format!("<{} pre-parsed quests>", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CITY_QUESTS: &str = r#"{
        "quests": [
            { "id": "quest_1", "name": "Neon Alley", "type": "main" },
            { "id": "quest_2", "name": "Chrome Heart", "type": "side",
              "requirements": ["quest_1"] }
        ]
    }"#;

    #[test]
    fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CITY_QUESTS.as_bytes()).unwrap();

        let source = JsonFileSource::new(file.path());
        let quests = source.load().unwrap();

        assert_eq!(quests.len(), 2);
        assert_eq!(quests[1].requirements, vec!["quest_1"]);
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[test]
    fn test_missing_file() {
        let source = JsonFileSource::new("/nonexistent/QuestData.json");
        assert!(matches!(source.load(), Err(QuestDataError::Io { .. })));
    }

    #[test]
    fn test_str_source() {
        let quests = JsonStrSource::new(CITY_QUESTS).load().unwrap();
        assert_eq!(quests[0].name, "Neon Alley");

        assert!(JsonStrSource::new("{ broken").load().is_err());
    }

    #[test]
    fn test_pre_parsed_source() {
        let records = vec![Quest::new("q1", "Static")];
        assert_eq!(records.load().unwrap(), records);
        assert!(records.describe().contains('1'));
    }
}
