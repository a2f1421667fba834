//! JSON schema of the quest data, and the Blueprint-style export.
//!
//! Input documents look like:
//!
//! ```json
//! {
//!   "quests": [
//!     {
//!       "id": "quest_1", "name": "Lost Lantern", "type": "main",
//!       "objective": "...", "description": "...",
//!       "location": "Whispering Glade", "estimated_time": "10 minutes",
//!       "requirements": [],
//!       "rewards": { "experience": 100, "gold": 50, "items": ["quest_1_reward"] }
//!     }
//!   ]
//! }
//! ```
//!
//! Every field is optional. Missing or `null` values read as empty strings,
//! empty lists or a zero reward.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::QuestDataError;
use crate::lifecycle::QuestStatus;
use crate::quest::{Quest, QuestReward, QuestType};

/// Top-level quest data document.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuestDataFile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub quests: Vec<QuestData>,
}

/// One quest record as it appears in the data document.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuestData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Kept raw; mapped with [`QuestType::from_type_str`].
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub quest_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub objective: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub estimated_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requirements: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rewards: RewardData,
}

/// Reward block of a quest record.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RewardData {
    #[serde(default, deserialize_with = "number_as_i64")]
    pub experience: i64,
    #[serde(default, deserialize_with = "number_as_i64")]
    pub gold: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read any JSON number as an integer. Floats truncate toward zero and
/// out-of-range values saturate.
fn number_as_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(0);
    };
    if let Some(value) = number.as_i64() {
        Ok(value)
    } else if number.as_u64().is_some() {
        Ok(i64::MAX)
    } else {
        // `as` saturates and maps NaN to zero.
        Ok(number.as_f64().map_or(0, |value| value as i64))
    }
}

/// Clamp a raw reward amount into `0..=u32::MAX`.
fn clamp_amount(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

impl From<RewardData> for QuestReward {
    fn from(raw: RewardData) -> Self {
        Self {
            experience: clamp_amount(raw.experience),
            gold: clamp_amount(raw.gold),
            items: raw.items,
        }
    }
}

impl From<&QuestReward> for RewardData {
    fn from(reward: &QuestReward) -> Self {
        Self {
            experience: i64::from(reward.experience),
            gold: i64::from(reward.gold),
            items: reward.items.clone(),
        }
    }
}

impl From<QuestData> for Quest {
    /// Loaded quests always start out `NotStarted`.
    fn from(raw: QuestData) -> Self {
        Self {
            quest_type: QuestType::from_type_str(&raw.quest_type),
            id: raw.id,
            name: raw.name,
            objective: raw.objective,
            description: raw.description,
            requirements: raw.requirements,
            reward: raw.rewards.into(),
            location: raw.location,
            estimated_time: raw.estimated_time,
            status: QuestStatus::NotStarted,
        }
    }
}

impl From<&Quest> for QuestData {
    fn from(quest: &Quest) -> Self {
        Self {
            id: quest.id.clone(),
            name: quest.name.clone(),
            quest_type: quest.quest_type.as_type_str().to_string(),
            objective: quest.objective.clone(),
            description: quest.description.clone(),
            location: quest.location.clone(),
            estimated_time: quest.estimated_time.clone(),
            requirements: quest.requirements.clone(),
            rewards: (&quest.reward).into(),
        }
    }
}

/// Parse a quest data document into quest records, in document order.
pub fn parse_quest_file(content: &str) -> Result<Vec<Quest>, QuestDataError> {
    let file: QuestDataFile = serde_json::from_str(content)?;
    Ok(file.quests.into_iter().map(Quest::from).collect())
}

/// Render quest records back into a quest data document.
pub fn to_quest_file(quests: &[Quest]) -> Result<String, QuestDataError> {
    let file = QuestDataFile {
        quests: quests.iter().map(QuestData::from).collect(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Quest data in the layout consumed by Blueprint data tables.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BlueprintQuestData {
    #[serde(rename = "QuestSystemData")]
    pub quest_system_data: QuestSystemData,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct QuestSystemData {
    pub total_quests: usize,
    pub main_quests: usize,
    pub side_quests: usize,
    pub quests: Vec<BlueprintQuest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct BlueprintQuest {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    #[serde(rename = "Type")]
    pub quest_type: String,
    pub objective: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub rewards: BlueprintReward,
    pub location: String,
    pub estimated_time: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct BlueprintReward {
    pub experience: u32,
    pub gold: u32,
    pub items: Vec<String>,
}

impl From<&Quest> for BlueprintQuest {
    fn from(quest: &Quest) -> Self {
        Self {
            id: quest.id.clone(),
            name: quest.name.clone(),
            quest_type: quest.quest_type.as_type_str().to_string(),
            objective: quest.objective.clone(),
            description: quest.description.clone(),
            requirements: quest.requirements.clone(),
            rewards: BlueprintReward {
                experience: quest.reward.experience,
                gold: quest.reward.gold,
                items: quest.reward.items.clone(),
            },
            location: quest.location.clone(),
            estimated_time: quest.estimated_time.clone(),
            status: quest.status.as_export_str().to_string(),
        }
    }
}

impl BlueprintQuestData {
    /// Build the export from quests and their current statuses.
    pub fn from_quests(quests: &[Quest]) -> Self {
        let count_of = |quest_type: QuestType| {
            quests
                .iter()
                .filter(|q| q.quest_type == quest_type)
                .count()
        };

        Self {
            quest_system_data: QuestSystemData {
                total_quests: quests.len(),
                main_quests: count_of(QuestType::Main),
                side_quests: count_of(QuestType::Side),
                quests: quests.iter().map(BlueprintQuest::from).collect(),
            },
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, QuestDataError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
