//! Record-store collaborator: supplies user routines and subject records.
//!
//! The engine depends only on the record shapes below, not on any storage
//! technology. Field names mirror the stored documents (camelCase).

mod memory;

pub use memory::MemoryStore;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::subject::{Difficulty, Subject, Topic};

/// One recurring daily routine entry. Only entries whose action is
/// `"learning"` carry a time-range label the planner cares about.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineEntry {
    pub action: String,
    #[serde(default)]
    pub time: Option<String>,
}

impl RoutineEntry {
    /// Whether this entry reserves time for studying.
    pub fn is_learning(&self) -> bool {
        self.action == "learning"
    }
}

/// Stored user document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub daily_routine: Vec<RoutineEntry>,
}

impl UserRecord {
    /// Labels of every configured learning window, in routine order.
    pub fn learning_window_labels(&self) -> Vec<String> {
        self.daily_routine
            .iter()
            .filter(|entry| entry.is_learning())
            .filter_map(|entry| entry.time.clone())
            .collect()
    }
}

/// Stored subject document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectRecord {
    pub user_id: String,
    #[serde(default)]
    pub subject_name: Option<String>,
    #[serde(default)]
    pub exam_difficulty: Option<String>,
    #[serde(default)]
    pub exam_date: Option<NaiveDate>,
    #[serde(default)]
    pub topics: Vec<TopicRecord>,
}

/// Stored topic entry within a subject document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicRecord {
    pub name: String,
}

impl SubjectRecord {
    /// Convert the stored shape into the engine's domain model. Unnamed
    /// subjects and unrecognized difficulty tags get their defaults here,
    /// at the record boundary.
    pub fn into_subject(self) -> Subject {
        Subject {
            name: self
                .subject_name
                .unwrap_or_else(|| "Unknown Subject".to_string()),
            exam_date: self.exam_date,
            difficulty: Difficulty::from_tag(self.exam_difficulty.as_deref()),
            topics: self
                .topics
                .into_iter()
                .map(|t| Topic { name: t.name })
                .collect(),
        }
    }
}

/// Supplies per-user routine and subject records.
pub trait RecordStore: Send + Sync {
    /// Fetch the user document, if one exists.
    fn user(&self, user_id: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Fetch the user's subject records, in stored order.
    fn subjects(&self, user_id: &str) -> Result<Vec<SubjectRecord>, StoreError>;
}
