//! Quest rewards.

use serde::{Deserialize, Serialize};

/// What the player receives for completing a quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QuestReward {
    pub experience: u32,
    pub gold: u32,
    /// Item identifiers, e.g. "quest_1_reward".
    pub items: Vec<String>,
}

impl QuestReward {
    /// Create a reward with experience and gold but no items.
    pub fn new(experience: u32, gold: u32) -> Self {
        Self {
            experience,
            gold,
            items: Vec::new(),
        }
    }

    /// Add an item to the reward.
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Check if the reward grants nothing at all.
    pub fn is_empty(&self) -> bool {
        self.experience == 0 && self.gold == 0 && self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_is_empty() {
        assert!(QuestReward::default().is_empty());
        assert!(!QuestReward::new(100, 0).is_empty());
        assert!(!QuestReward::default().with_item("moonstone").is_empty());
    }
}
