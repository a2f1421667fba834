//! Quest lifecycle: statuses and the transitions allowed between them.

use serde::{Deserialize, Serialize};

/// Progress state of a quest.
///
/// The only transitions are NotStarted -> InProgress -> Completed, or
/// InProgress -> Failed. Nothing skips a state and nothing moves backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum QuestStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    /// Reserved. No current lifecycle operation moves a quest here.
    Failed,
}

impl QuestStatus {
    /// Check whether moving from this status to `next` is a legal transition.
    pub fn can_transition_to(&self, next: QuestStatus) -> bool {
        matches!(
            (self, next),
            (QuestStatus::NotStarted, QuestStatus::InProgress)
                | (QuestStatus::InProgress, QuestStatus::Completed)
                | (QuestStatus::InProgress, QuestStatus::Failed)
        )
    }

    /// Completed and failed quests never change again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, QuestStatus::Completed | QuestStatus::Failed)
    }

    /// Name used in exported data ("NotStarted", "InProgress", ...).
    pub fn as_export_str(&self) -> &'static str {
        match self {
            QuestStatus::NotStarted => "NotStarted",
            QuestStatus::InProgress => "InProgress",
            QuestStatus::Completed => "Completed",
            QuestStatus::Failed => "Failed",
        }
    }

    /// Parse an exported status name. Unknown names read as `NotStarted`.
    pub fn from_export_str(value: &str) -> Self {
        match value {
            "InProgress" => QuestStatus::InProgress,
            "Completed" => QuestStatus::Completed,
            "Failed" => QuestStatus::Failed,
            _ => QuestStatus::NotStarted,
        }
    }

    /// Human-readable name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            QuestStatus::NotStarted => "Not Started",
            QuestStatus::InProgress => "In Progress",
            QuestStatus::Completed => "Completed",
            QuestStatus::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [QuestStatus; 4] = [
        QuestStatus::NotStarted,
        QuestStatus::InProgress,
        QuestStatus::Completed,
        QuestStatus::Failed,
    ];

    #[test]
    fn test_forward_transitions() {
        assert!(QuestStatus::NotStarted.can_transition_to(QuestStatus::InProgress));
        assert!(QuestStatus::InProgress.can_transition_to(QuestStatus::Completed));
        assert!(QuestStatus::InProgress.can_transition_to(QuestStatus::Failed));
    }

    #[test]
    fn test_no_skips_or_reversals() {
        assert!(!QuestStatus::NotStarted.can_transition_to(QuestStatus::Completed));
        assert!(!QuestStatus::NotStarted.can_transition_to(QuestStatus::Failed));
        assert!(!QuestStatus::InProgress.can_transition_to(QuestStatus::NotStarted));
        assert!(!QuestStatus::Completed.can_transition_to(QuestStatus::InProgress));

        for status in ALL {
            assert!(!status.can_transition_to(status));
        }
    }

    #[test]
    fn test_terminal_statuses_have_no_exits() {
        for status in ALL.iter().filter(|s| s.is_terminal()) {
            assert!(ALL.iter().all(|next| !status.can_transition_to(*next)));
        }
    }

    #[test]
    fn test_export_names() {
        for status in ALL {
            assert_eq!(QuestStatus::from_export_str(status.as_export_str()), status);
        }
        assert_eq!(QuestStatus::from_export_str("Abandoned"), QuestStatus::NotStarted);
    }

    #[test]
    fn test_default_is_not_started() {
        assert_eq!(QuestStatus::default(), QuestStatus::NotStarted);
        assert_eq!(QuestStatus::InProgress.to_string(), "In Progress");
    }
}
