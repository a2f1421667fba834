//! Quest Registry - the catalog, quest progress and prerequisite gating.
//!
//! The registry keeps three lists:
//! 1. **Catalog**: every quest as loaded, with its current status
//! 2. **Active index**: copies of quests taken when they started
//! 3. **Completed index**: copies of quests taken when they completed
//!
//! The indices are snapshots, not references into the catalog. Every status
//! change goes through [`QuestRegistry::transition`] so the catalog and the
//! indices stay in agreement.

mod report;

pub use report::*;

use std::collections::HashSet;
use std::path::Path;

use quest_rules::{
    BlueprintQuestData, DuplicateIdPolicy, Quest, QuestStatus, QuestSystemConfig, ThemePack,
};
use tracing::{error, info, warn};

use crate::events::{ListenerId, QuestEvent, QuestEventBus};
use crate::loader::{JsonFileSource, QuestSource};

/// Owns all quest definitions and their progress for one session.
///
/// Lookups scan linearly; catalogs hold tens of quests. When the catalog
/// holds the same id more than once, every operation acts on the first
/// matching record.
#[derive(Debug, Default)]
pub struct QuestRegistry {
    theme: ThemePack,
    duplicate_ids: DuplicateIdPolicy,
    catalog: Vec<Quest>,
    active: Vec<Quest>,
    completed: Vec<Quest>,
    events: QuestEventBus,
}

impl QuestRegistry {
    /// Create an empty registry for a theme.
    pub fn new(theme: ThemePack) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    /// Create an empty registry using the theme and duplicate policy of a config.
    pub fn with_config(config: &QuestSystemConfig) -> Self {
        Self {
            theme: config.theme.clone(),
            duplicate_ids: config.duplicate_ids,
            ..Default::default()
        }
    }

    /// Create a registry and fill it from a data source.
    ///
    /// A source that fails to load leaves the registry empty.
    pub fn from_source(theme: ThemePack, source: &dyn QuestSource) -> Self {
        let mut registry = Self::new(theme);
        registry.load_from(source);
        registry
    }

    /// Create a registry from a config, reading the configured data file.
    ///
    /// A relative `data_path` is read relative to the working directory; use
    /// [`QuestRegistry::from_config_in`] to anchor it at a project root.
    pub fn from_config(config: &QuestSystemConfig) -> Self {
        Self::from_config_in(config, Path::new(""))
    }

    /// Create a registry from a config, resolving a relative `data_path`
    /// against `project_root`.
    pub fn from_config_in(config: &QuestSystemConfig, project_root: &Path) -> Self {
        let mut registry = Self::with_config(config);
        registry.load_from(&JsonFileSource::new(
            config.resolve_data_path(project_root),
        ));
        registry
    }

    /// Load the catalog from a data source.
    ///
    /// On failure the error is logged, the catalog is emptied and `false`
    /// is returned.
    pub fn load_from(&mut self, source: &dyn QuestSource) -> bool {
        match source.load() {
            Ok(records) => {
                self.load_catalog(records);
                true
            }
            Err(e) => {
                error!(
                    theme = %self.theme,
                    source = %source.describe(),
                    error = %e,
                    "failed to load quest data"
                );
                self.load_catalog(Vec::new());
                false
            }
        }
    }

    /// Replace the whole catalog.
    ///
    /// The active and completed indices are rebuilt from the statuses the
    /// records carry (normally all `NotStarted`).
    pub fn load_catalog(&mut self, records: Vec<Quest>) {
        let records = match self.duplicate_ids {
            DuplicateIdPolicy::Preserve => records,
            DuplicateIdPolicy::Reject => self.drop_duplicates(records),
        };

        self.active = records
            .iter()
            .filter(|q| q.status == QuestStatus::InProgress)
            .cloned()
            .collect();
        self.completed = records
            .iter()
            .filter(|q| q.status == QuestStatus::Completed)
            .cloned()
            .collect();
        self.catalog = records;

        info!(
            theme = %self.theme,
            count = self.catalog.len(),
            "quest system initialized"
        );
        for issue in self.validate() {
            warn!(theme = %self.theme, quest_id = issue.quest_id(), "{}", issue);
        }
    }

    fn drop_duplicates(&self, records: Vec<Quest>) -> Vec<Quest> {
        let mut seen = HashSet::new();
        records
            .into_iter()
            .filter(|quest| {
                let first = seen.insert(quest.id.clone());
                if !first {
                    warn!(
                        theme = %self.theme,
                        quest_id = %quest.id,
                        "dropping quest with duplicate id"
                    );
                }
                first
            })
            .collect()
    }

    /// Start a quest.
    ///
    /// Succeeds only when a `NotStarted` record with this id exists and every
    /// requirement is completed. A refused start changes nothing.
    pub fn start_quest(&mut self, quest_id: &str) -> bool {
        let Some(index) = self
            .catalog
            .iter()
            .position(|q| q.id == quest_id && q.status == QuestStatus::NotStarted)
        else {
            warn!(theme = %self.theme, quest_id, "quest not found or already started");
            return false;
        };

        if let Some(missing) = self.first_unmet_requirement(&self.catalog[index]) {
            warn!(
                theme = %self.theme,
                quest_id,
                requirement = missing,
                "quest requirements not met"
            );
            return false;
        }

        let started = self.transition(index, QuestStatus::InProgress);
        self.active.push(started.clone());

        info!(theme = %self.theme, quest_id, name = %started.name, "started quest");
        self.events.emit(&QuestEvent::Started(started));
        true
    }

    /// Complete an active quest.
    ///
    /// Only quests in the active index can complete; a quest that was never
    /// started returns false.
    pub fn complete_quest(&mut self, quest_id: &str) -> bool {
        let Some(position) = self.active.iter().position(|q| q.id == quest_id) else {
            warn!(theme = %self.theme, quest_id, "active quest not found");
            return false;
        };

        let mut finished = self.active.remove(position);
        finished.status = QuestStatus::Completed;

        if let Some(index) = self
            .catalog
            .iter()
            .position(|q| q.id == quest_id && q.status == QuestStatus::InProgress)
        {
            self.transition(index, QuestStatus::Completed);
        } else {
            warn!(
                theme = %self.theme,
                quest_id,
                "active quest has no in-progress catalog record"
            );
        }

        self.completed.push(finished.clone());

        info!(theme = %self.theme, quest_id, name = %finished.name, "completed quest");
        self.events.emit(&QuestEvent::Completed(finished));
        true
    }

    /// Move a catalog record to its next status and return a copy of it.
    fn transition(&mut self, index: usize, next: QuestStatus) -> Quest {
        let quest = &mut self.catalog[index];
        debug_assert!(
            quest.status.can_transition_to(next),
            "illegal quest transition {:?} -> {:?}",
            quest.status,
            next
        );
        quest.status = next;
        quest.clone()
    }

    fn first_unmet_requirement<'a>(&self, quest: &'a Quest) -> Option<&'a str> {
        quest
            .requirements
            .iter()
            .find(|requirement| !self.is_quest_completed(requirement))
            .map(String::as_str)
    }

    /// Check whether every requirement of a quest is in the completed index.
    pub fn requirements_met(&self, quest: &Quest) -> bool {
        self.first_unmet_requirement(quest).is_none()
    }

    pub fn is_quest_active(&self, quest_id: &str) -> bool {
        self.active.iter().any(|q| q.id == quest_id)
    }

    pub fn is_quest_completed(&self, quest_id: &str) -> bool {
        self.completed.iter().any(|q| q.id == quest_id)
    }

    /// Get the first catalog record with this id.
    pub fn get_quest(&self, quest_id: &str) -> Option<&Quest> {
        self.catalog.iter().find(|q| q.id == quest_id)
    }

    /// Copies of the quests currently in progress, in start order.
    pub fn active_quests(&self) -> Vec<Quest> {
        self.active.clone()
    }

    /// Copies of the completed quests, in completion order.
    pub fn completed_quests(&self) -> Vec<Quest> {
        self.completed.clone()
    }

    /// Quests that could be started right now: not started, with every
    /// requirement completed. Recomputed on each call.
    pub fn available_quests(&self) -> Vec<Quest> {
        self.catalog
            .iter()
            .filter(|q| q.status == QuestStatus::NotStarted && self.requirements_met(q))
            .cloned()
            .collect()
    }

    /// The whole catalog, in load order.
    pub fn quests(&self) -> &[Quest] {
        &self.catalog
    }

    pub fn quest_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn theme(&self) -> &ThemePack {
        &self.theme
    }

    /// Register a listener for quest events.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&QuestEvent) + 'static,
    {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Counts of the catalog by type and status.
    pub fn summary(&self) -> QuestSummary {
        QuestSummary::from_quests(&self.catalog)
    }

    /// Check the catalog for duplicate ids and unresolvable requirements.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        validate_catalog(&self.catalog)
    }

    /// Export the catalog with current statuses in Blueprint table layout.
    pub fn export_blueprint_data(&self) -> BlueprintQuestData {
        BlueprintQuestData::from_quests(&self.catalog)
    }
}
