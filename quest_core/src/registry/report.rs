//! Read-only reports over a quest catalog: counts and consistency checks.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use quest_rules::{Quest, QuestStatus, QuestType};

/// Quest counts by type and by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QuestSummary {
    pub total: usize,
    pub main: usize,
    pub side: usize,
    pub optional: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub failed: usize,
}

impl QuestSummary {
    pub fn from_quests(quests: &[Quest]) -> Self {
        let mut summary = Self {
            total: quests.len(),
            ..Default::default()
        };

        for quest in quests {
            match quest.quest_type {
                QuestType::Main => summary.main += 1,
                QuestType::Side => summary.side += 1,
                QuestType::Optional => summary.optional += 1,
            }
            match quest.status {
                QuestStatus::NotStarted => summary.not_started += 1,
                QuestStatus::InProgress => summary.in_progress += 1,
                QuestStatus::Completed => summary.completed += 1,
                QuestStatus::Failed => summary.failed += 1,
            }
        }

        summary
    }

    /// Fraction of quests completed, from 0.0 to 1.0.
    pub fn completion_ratio(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f32 / self.total as f32
        }
    }
}

/// A problem found in catalog data.
///
/// Issues are reported, not enforced: a quest with an unknown requirement
/// stays in the catalog and can simply never start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogIssue {
    /// More than one record uses this id.
    DuplicateId { quest_id: String, occurrences: usize },
    /// A requirement names a quest that is not in the catalog.
    UnknownRequirement { quest_id: String, requirement: String },
    /// A quest lists itself as a requirement.
    SelfRequirement { quest_id: String },
}

impl CatalogIssue {
    pub fn quest_id(&self) -> &str {
        match self {
            CatalogIssue::DuplicateId { quest_id, .. }
            | CatalogIssue::UnknownRequirement { quest_id, .. }
            | CatalogIssue::SelfRequirement { quest_id } => quest_id,
        }
    }

    /// Whether the issue makes the quest impossible to start.
    pub fn blocks_quest(&self) -> bool {
        !matches!(self, CatalogIssue::DuplicateId { .. })
    }
}

impl std::fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogIssue::DuplicateId {
                quest_id,
                occurrences,
            } => write!(f, "quest id '{}' appears {} times", quest_id, occurrences),
            CatalogIssue::UnknownRequirement {
                quest_id,
                requirement,
            } => write!(
                f,
                "quest '{}' requires unknown quest '{}'",
                quest_id, requirement
            ),
            CatalogIssue::SelfRequirement { quest_id } => {
                write!(f, "quest '{}' requires itself", quest_id)
            }
        }
    }
}

/// Check a catalog for duplicate ids and unresolvable requirements.
///
/// Issues come out in catalog order; each duplicate id is reported once.
pub fn validate_catalog(quests: &[Quest]) -> Vec<CatalogIssue> {
    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    for quest in quests {
        *occurrences.entry(quest.id.as_str()).or_default() += 1;
    }

    let mut issues = Vec::new();
    let mut reported: HashSet<&str> = HashSet::new();

    for quest in quests {
        let count = occurrences[quest.id.as_str()];
        if count > 1 && reported.insert(quest.id.as_str()) {
            issues.push(CatalogIssue::DuplicateId {
                quest_id: quest.id.clone(),
                occurrences: count,
            });
        }

        for requirement in &quest.requirements {
            if *requirement == quest.id {
                issues.push(CatalogIssue::SelfRequirement {
                    quest_id: quest.id.clone(),
                });
            } else if !occurrences.contains_key(requirement.as_str()) {
                issues.push(CatalogIssue::UnknownRequirement {
                    quest_id: quest.id.clone(),
                    requirement: requirement.clone(),
                });
            }
        }
    }

    issues
}
