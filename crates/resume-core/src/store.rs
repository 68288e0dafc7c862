//! The résumé state store, single source of truth for the document.
//!
//! Construction performs the one-time load (hydrate-or-default); a
//! constructed store is the "ready" state and there is no way back to
//! "loading". All later operations act on the in-memory document and
//! persist after every successful mutation.
//!
//! Failure policy: malformed persisted data never raises; it is treated
//! as absent and the user starts from defaults. Persist failures are
//! logged and dropped; the in-memory document is never rolled back, so
//! memory and disk may diverge until the next successful write.

use tracing::warn;

use crate::document::ResumeDocument;
use crate::patch::{ResumePatch, SectionData};
use crate::sanitize::sanitize;
use crate::storage::StorageBackend;

/// Outcome of the user-facing "clear all data?" confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetDecision {
    Confirmed,
    Declined,
}

/// Owns the in-memory [`ResumeDocument`] and its persistence.
pub struct ResumeStore<S: StorageBackend> {
    backend: S,
    document: ResumeDocument,
}

impl<S: StorageBackend> ResumeStore<S> {
    /// Hydrates from the backend, falling back to the default document on
    /// absent or malformed data. No partial recovery is attempted.
    pub fn load(backend: S) -> Self {
        let document = match backend.load() {
            Ok(Some(blob)) => match serde_json::from_str::<serde_json::Value>(&blob) {
                Ok(raw) => sanitize(&raw),
                Err(err) => {
                    warn!("Failed to parse stored resume, starting from defaults: {err}");
                    ResumeDocument::default()
                }
            },
            Ok(None) => ResumeDocument::default(),
            Err(err) => {
                warn!("Failed to read stored resume, starting from defaults: {err}");
                ResumeDocument::default()
            }
        };
        ResumeStore { backend, document }
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    /// Replaces each field supplied in `patch` wholesale, then persists.
    pub fn update(&mut self, patch: ResumePatch) {
        self.document = patch.apply(&self.document);
        self.persist();
    }

    /// Replaces one repeatable section's entire sequence, then persists.
    pub fn update_section(&mut self, data: SectionData) {
        self.update(data.into_patch());
    }

    /// Applies the user's reset decision. Declining is a no-op; confirming
    /// restores defaults and erases persisted storage. Returns whether the
    /// reset happened.
    pub fn reset(&mut self, decision: ResetDecision) -> bool {
        if decision == ResetDecision::Declined {
            return false;
        }
        self.document = ResumeDocument::default();
        if let Err(err) = self.backend.clear() {
            warn!("Failed to clear stored resume: {err}");
        }
        true
    }

    /// Fire-and-forget write of the full document. Serialization of the
    /// document cannot fail; backend errors are logged and swallowed.
    fn persist(&self) {
        let json = match serde_json::to_string(&self.document) {
            Ok(json) => json,
            Err(err) => {
                warn!("Failed to serialize resume: {err}");
                return;
            }
        };
        if let Err(err) = self.backend.save(&json) {
            warn!("Failed to persist resume: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{EducationEntry, PersonalInfo, DEFAULT_SECTION_ORDER};
    use crate::storage::{MemoryStorage, StorageError};

    fn store_with(blob: Option<&str>) -> ResumeStore<MemoryStorage> {
        let backend = match blob {
            Some(b) => MemoryStorage::with_blob(b),
            None => MemoryStorage::new(),
        };
        ResumeStore::load(backend)
    }

    #[test]
    fn test_load_without_blob_yields_defaults() {
        let store = store_with(None);
        assert_eq!(store.document(), &ResumeDocument::default());
    }

    #[test]
    fn test_load_malformed_blob_falls_back_to_defaults() {
        for blob in ["not json at all", "[1,2", r#""just a string""#] {
            let store = store_with(Some(blob));
            assert_eq!(store.document(), &ResumeDocument::default());
        }
    }

    #[test]
    fn test_load_partial_blob_is_sanitized() {
        let store = store_with(Some(r#"{"summary": "hi"}"#));
        assert_eq!(store.document().summary, "hi");
        assert!(store.document().experience.is_empty());
        assert_eq!(
            store.document().section_order,
            DEFAULT_SECTION_ORDER.to_vec()
        );
    }

    #[test]
    fn test_update_persists_and_isolates_fields() {
        let mut store = store_with(None);
        store.update(ResumePatch {
            summary: Some("x".to_string()),
            ..Default::default()
        });
        store.update(ResumePatch {
            summary: Some("y".to_string()),
            ..Default::default()
        });

        assert_eq!(store.document().summary, "y");
        // Only the summary changed from defaults.
        let mut expected = ResumeDocument::default();
        expected.summary = "y".to_string();
        assert_eq!(store.document(), &expected);

        // The write really hit the backend.
        let blob = store.backend.blob().unwrap();
        assert!(blob.contains(r#""summary":"y""#));
    }

    #[test]
    fn test_update_section_replaces_single_section() {
        let mut store = store_with(None);
        store.update_section(SectionData::Education(vec![
            EducationEntry {
                id: "e1".to_string(),
                school: "MIT".to_string(),
                ..Default::default()
            },
            EducationEntry {
                id: "e2".to_string(),
                ..Default::default()
            },
        ]));
        assert_eq!(store.document().education.len(), 2);

        store.update_section(SectionData::Education(Vec::new()));
        assert!(store.document().education.is_empty());
        assert_eq!(store.document().experience.len(), 0);
    }

    #[test]
    fn test_reset_declined_changes_nothing() {
        let mut store = store_with(None);
        store.update(ResumePatch {
            summary: Some("keep me".to_string()),
            ..Default::default()
        });
        let before = store.document().clone();
        let blob_before = store.backend.blob();

        assert!(!store.reset(ResetDecision::Declined));
        assert_eq!(store.document(), &before);
        assert_eq!(store.backend.blob(), blob_before);
    }

    #[test]
    fn test_reset_confirmed_restores_defaults_and_clears_storage() {
        let mut store = store_with(None);
        store.update(ResumePatch {
            summary: Some("gone".to_string()),
            ..Default::default()
        });

        assert!(store.reset(ResetDecision::Confirmed));
        assert_eq!(store.document(), &ResumeDocument::default());
        assert!(store.backend.blob().is_none());
    }

    #[test]
    fn test_refresh_scenario_keeps_first_name() {
        let backend = MemoryStorage::new();
        let mut store = ResumeStore::load(backend);

        // Callers merge nested fields themselves; updates are shallow.
        let mut info = store.document().personal_info.clone();
        info.first_name = "Ada".to_string();
        store.update(ResumePatch {
            personal_info: Some(info),
            ..Default::default()
        });

        // Simulated page refresh: re-run Load against the persisted blob.
        let blob = store.backend.blob().unwrap();
        let reloaded = ResumeStore::load(MemoryStorage::with_blob(blob));
        assert_eq!(reloaded.document().personal_info.first_name, "Ada");
    }

    /// Backend that accepts nothing, to exercise the fire-and-forget path.
    struct FailingStorage;

    impl StorageBackend for FailingStorage {
        fn load(&self) -> Result<Option<String>, StorageError> {
            Ok(None)
        }
        fn save(&self, _json: &str) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::other("disk full")))
        }
        fn clear(&self) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::other("disk full")))
        }
    }

    #[test]
    fn test_persist_failure_keeps_in_memory_state() {
        let mut store = ResumeStore::load(FailingStorage);
        store.update(ResumePatch {
            summary: Some("still here".to_string()),
            ..Default::default()
        });
        assert_eq!(store.document().summary, "still here");

        // Reset still succeeds in memory even when the clear fails.
        assert!(store.reset(ResetDecision::Confirmed));
        assert_eq!(store.document(), &ResumeDocument::default());
    }

    #[test]
    fn test_personal_info_default_is_empty() {
        assert_eq!(PersonalInfo::default().first_name, "");
    }
}
