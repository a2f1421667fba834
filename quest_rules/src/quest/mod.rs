//! Quest definitions.

mod reward;

pub use reward::*;

use serde::{Deserialize, Serialize};

use crate::lifecycle::QuestStatus;

/// Category of a quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum QuestType {
    #[default]
    Main,
    Side,
    Optional,
}

impl QuestType {
    /// Map the `type` string of the quest data. Anything other than
    /// `"main"` or `"side"` is an optional quest.
    pub fn from_type_str(value: &str) -> Self {
        match value {
            "main" => QuestType::Main,
            "side" => QuestType::Side,
            _ => QuestType::Optional,
        }
    }

    /// The `type` string written back to quest data.
    pub fn as_type_str(&self) -> &'static str {
        match self {
            QuestType::Main => "main",
            QuestType::Side => "side",
            QuestType::Optional => "optional",
        }
    }

    /// Human-readable name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            QuestType::Main => "Main Quest",
            QuestType::Side => "Side Quest",
            QuestType::Optional => "Optional Quest",
        }
    }
}

/// A quest definition together with its current status.
///
/// Everything except `status` is fixed once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Quest {
    /// Primary key. Expected to be unique within a catalog.
    pub id: String,
    pub name: String,
    pub quest_type: QuestType,
    pub objective: String,
    pub description: String,

    /// Ids of quests that must all be completed before this one can start.
    pub requirements: Vec<String>,

    pub reward: QuestReward,
    pub location: String,
    pub estimated_time: String,
    pub status: QuestStatus,
}

impl Quest {
    /// Create a main quest with no requirements and no reward.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the quest type.
    pub fn with_type(mut self, quest_type: QuestType) -> Self {
        self.quest_type = quest_type;
        self
    }

    /// Set the objective text.
    pub fn with_objective(mut self, objective: impl Into<String>) -> Self {
        self.objective = objective.into();
        self
    }

    /// Set the description text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a prerequisite quest id.
    pub fn with_requirement(mut self, quest_id: impl Into<String>) -> Self {
        self.requirements.push(quest_id.into());
        self
    }

    /// Add several prerequisite quest ids, keeping their order.
    pub fn with_requirements<I, S>(mut self, quest_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requirements.extend(quest_ids.into_iter().map(Into::into));
        self
    }

    /// Set the reward.
    pub fn with_reward(mut self, reward: QuestReward) -> Self {
        self.reward = reward;
        self
    }

    /// Set where the quest takes place.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the estimated completion time, e.g. "15 minutes".
    pub fn with_estimated_time(mut self, estimated_time: impl Into<String>) -> Self {
        self.estimated_time = estimated_time.into();
        self
    }

    /// Set the status. Only meaningful before the quest enters a registry.
    pub fn with_status(mut self, status: QuestStatus) -> Self {
        self.status = status;
        self
    }

    /// Check whether the quest has any prerequisites.
    pub fn has_requirements(&self) -> bool {
        !self.requirements.is_empty()
    }

    /// Check whether `quest_id` is one of this quest's prerequisites.
    pub fn requires(&self, quest_id: &str) -> bool {
        self.requirements.iter().any(|r| r == quest_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_fallback_is_optional() {
        assert_eq!(QuestType::from_type_str("main"), QuestType::Main);
        assert_eq!(QuestType::from_type_str("side"), QuestType::Side);
        assert_eq!(QuestType::from_type_str("optional"), QuestType::Optional);
        assert_eq!(QuestType::from_type_str("bonus"), QuestType::Optional);
        // Matching is exact, as in the source data.
        assert_eq!(QuestType::from_type_str("Main"), QuestType::Optional);
        assert_eq!(QuestType::from_type_str(""), QuestType::Optional);
    }

    #[test]
    fn test_new_quest_defaults() {
        let quest = Quest::new("quest_1", "The Glowing Grove");
        assert_eq!(quest.id, "quest_1");
        assert_eq!(quest.quest_type, QuestType::Main);
        assert_eq!(quest.status, QuestStatus::NotStarted);
        assert!(!quest.has_requirements());
        assert!(quest.reward.is_empty());
    }

    #[test]
    fn test_requirements_keep_order() {
        let quest = Quest::new("quest_3", "Heart of the Forest")
            .with_requirement("quest_1")
            .with_requirements(["quest_2", "quest_0"]);

        assert_eq!(quest.requirements, vec!["quest_1", "quest_2", "quest_0"]);
        assert!(quest.requires("quest_2"));
        assert!(!quest.requires("quest_3"));
    }
}
