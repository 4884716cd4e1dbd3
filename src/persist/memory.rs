use std::collections::HashMap;

use crate::wizard::{StoreError, SubmissionSummary, SummaryStore};

/// In-memory summary store.
///
/// Last write wins, matching browser `localStorage` semantics — the wizard
/// writes the summary before the backend send, so a retry after a failed
/// send must be able to write the key again.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw JSON written under `key`, if any.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Decode the summary written under `key`.
    pub fn get(&self, key: &str) -> Result<Option<SubmissionSummary>, StoreError> {
        match self.entries.get(key) {
            Some(json) => serde_json::from_str(json).map(Some).map_err(|e| StoreError {
                key: key.to_owned(),
                reason: e.to_string(),
            }),
            None => Ok(None),
        }
    }

    /// Whether anything was written under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl SummaryStore for MemoryStore {
    fn put(&mut self, key: &str, summary: &SubmissionSummary) -> Result<(), StoreError> {
        let json = serde_json::to_string(summary).map_err(|e| StoreError {
            key: key.to_owned(),
            reason: e.to_string(),
        })?;
        self.entries.insert(key.to_owned(), json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SignupRecord;
    use crate::wizard::{ArtifactNames, SUMMARY_KEY};
    use chrono::Utc;

    fn summary() -> SubmissionSummary {
        SubmissionSummary {
            record: SignupRecord::new(),
            documentos: ArtifactNames {
                frente: "rg-frente.jpg".into(),
                verso: "rg-verso.jpg".into(),
                selfie: "selfie.jpg".into(),
            },
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn put_then_get_round_trips() {
        let mut store = MemoryStore::new();
        store.put(SUMMARY_KEY, &summary()).unwrap();

        assert!(store.contains(SUMMARY_KEY));
        assert!(store.raw(SUMMARY_KEY).unwrap().contains("rg-frente.jpg"));

        let decoded = store.get(SUMMARY_KEY).unwrap().unwrap();
        assert_eq!(decoded.documentos.selfie, "selfie.jpg");
    }

    #[test]
    fn second_write_overwrites() {
        let mut store = MemoryStore::new();
        store.put(SUMMARY_KEY, &summary()).unwrap();

        let mut newer = summary();
        newer.documentos.frente = "rg-frente-2.jpg".into();
        store.put(SUMMARY_KEY, &newer).unwrap();

        let decoded = store.get(SUMMARY_KEY).unwrap().unwrap();
        assert_eq!(decoded.documentos.frente, "rg-frente-2.jpg");
    }

    #[test]
    fn missing_key_is_none() {
        let store = MemoryStore::new();
        assert!(store.get("nothing").unwrap().is_none());
        assert!(store.raw("nothing").is_none());
    }
}
