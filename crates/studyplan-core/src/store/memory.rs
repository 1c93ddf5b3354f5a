//! In-memory record store, loadable from the JSON document shape.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::{RecordStore, SubjectRecord, UserRecord};
use crate::error::StoreError;

/// Top-level JSON document: `{ "users": [...], "subjects": [...] }`.
#[derive(Debug, Clone, Default, Deserialize)]
struct RecordFile {
    #[serde(default)]
    users: Vec<UserRecord>,
    #[serde(default)]
    subjects: Vec<SubjectRecord>,
}

/// Record store holding everything in memory. Used by the CLI (loaded
/// from a JSON file) and by tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    users: HashMap<String, UserRecord>,
    subjects: Vec<SubjectRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON file holding `users` and `subjects` arrays.
    pub fn from_json_file(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| StoreError::ReadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Parse from a JSON string holding `users` and `subjects` arrays.
    pub fn from_json(content: &str) -> Result<Self, StoreError> {
        let file: RecordFile = serde_json::from_str(content)?;
        let mut store = Self::new();
        for user in file.users {
            store.insert_user(user);
        }
        for subject in file.subjects {
            store.insert_subject(subject);
        }
        Ok(store)
    }

    pub fn insert_user(&mut self, user: UserRecord) {
        self.users.insert(user.id.clone(), user);
    }

    pub fn insert_subject(&mut self, subject: SubjectRecord) {
        self.subjects.push(subject);
    }
}

impl RecordStore for MemoryStore {
    fn user(&self, user_id: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.get(user_id).cloned())
    }

    fn subjects(&self, user_id: &str) -> Result<Vec<SubjectRecord>, StoreError> {
        Ok(self
            .subjects
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const USER_A: &str = "64b1f0c2a58e4d2f9c3b7a10";
    const USER_B: &str = "64b1f0c2a58e4d2f9c3b7a11";

    fn sample_json() -> String {
        format!(
            r#"{{
                "users": [
                    {{"_id": "{USER_A}", "dailyRoutine": [
                        {{"action": "learning", "time": "09:00 - 11:00"}}
                    ]}},
                    {{"_id": "{USER_B}", "dailyRoutine": []}}
                ],
                "subjects": [
                    {{"userId": "{USER_A}", "subjectName": "Algebra", "topics": [{{"name": "Matrices"}}]}},
                    {{"userId": "{USER_B}", "subjectName": "History", "topics": []}}
                ]
            }}"#
        )
    }

    #[test]
    fn loads_users_and_subjects_from_json() {
        let store = MemoryStore::from_json(&sample_json()).unwrap();

        let user = store.user(USER_A).unwrap().unwrap();
        assert_eq!(user.learning_window_labels(), vec!["09:00 - 11:00"]);
        assert!(store.user("ffffffffffffffffffffffff").unwrap().is_none());
    }

    #[test]
    fn subjects_are_filtered_per_user() {
        let store = MemoryStore::from_json(&sample_json()).unwrap();

        let subjects = store.subjects(USER_A).unwrap();
        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].subject_name.as_deref(), Some("Algebra"));
    }

    #[test]
    fn malformed_json_is_a_store_error() {
        let err = MemoryStore::from_json("{not json").unwrap_err();
        assert!(matches!(err, StoreError::Malformed(_)));
    }

    #[test]
    fn loads_from_a_file_on_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_json().as_bytes()).unwrap();

        let store = MemoryStore::from_json_file(file.path()).unwrap();
        assert!(store.user(USER_A).unwrap().is_some());
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = MemoryStore::from_json_file(Path::new("/nonexistent/records.json")).unwrap_err();
        assert!(matches!(err, StoreError::ReadFailed { .. }));
    }
}
