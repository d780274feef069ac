use std::fs;
use std::path::Path;

use anyhow::Context;
use tracker_core::{Catalog, Job, Preferences, SavedJobs};
use tracker_engine::PersistenceAdapter;
use tracker_logging::{tracker_info, tracker_warn};

const EMBEDDED_CATALOG: &str = include_str!("../../data/jobs.json");

/// Typed access to the stored preference object.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    key: String,
}

impl PreferenceStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Absent or unreadable storage yields defaults; each field defaults on its own.
    pub fn load(&self, adapter: &PersistenceAdapter) -> Preferences {
        adapter
            .load(&self.key)
            .map(|value| Preferences::from_json(&value))
            .unwrap_or_default()
    }

    pub fn save(&self, adapter: &mut PersistenceAdapter, preferences: &Preferences) -> bool {
        adapter.save(&self.key, &preferences.to_json())
    }
}

/// Typed access to the stored array of saved job ids.
#[derive(Debug, Clone)]
pub struct SavedJobStore {
    key: String,
}

impl SavedJobStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn load(&self, adapter: &PersistenceAdapter) -> SavedJobs {
        adapter
            .load(&self.key)
            .map(|value| SavedJobs::from_json(&value))
            .unwrap_or_default()
    }

    pub fn save(&self, adapter: &mut PersistenceAdapter, ids: &[String]) -> bool {
        adapter.save(&self.key, ids)
    }
}

/// Both stores over one adapter.
pub struct Storage {
    adapter: PersistenceAdapter,
    preferences: PreferenceStore,
    saved: SavedJobStore,
}

impl Storage {
    pub fn new(
        adapter: PersistenceAdapter,
        preferences: PreferenceStore,
        saved: SavedJobStore,
    ) -> Self {
        Self {
            adapter,
            preferences,
            saved,
        }
    }

    pub fn load_preferences(&self) -> Preferences {
        self.preferences.load(&self.adapter)
    }

    pub fn load_saved(&self) -> SavedJobs {
        self.saved.load(&self.adapter)
    }

    pub fn save_preferences(&mut self, preferences: &Preferences) -> bool {
        self.preferences.save(&mut self.adapter, preferences)
    }

    pub fn save_saved(&mut self, ids: &[String]) -> bool {
        self.saved.save(&mut self.adapter, ids)
    }
}

/// Reads the catalog from `path`, or the embedded demo catalog when `None`.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    let (text, origin) = match path {
        Some(path) => (
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read job catalog {:?}", path))?,
            path.display().to_string(),
        ),
        None => (EMBEDDED_CATALOG.to_string(), "embedded catalog".to_string()),
    };

    let jobs: Vec<Job> = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse job catalog from {origin}"))?;
    let catalog = Catalog::new(jobs);
    warn_on_unusable_ids(&catalog);
    tracker_info!("Loaded {} jobs from {}", catalog.len(), origin);
    Ok(catalog)
}

fn warn_on_unusable_ids(catalog: &Catalog) {
    let mut seen = std::collections::HashSet::new();
    for job in catalog.jobs() {
        if job.id.is_empty() {
            tracker_warn!("Job {:?} has no id; its actions are disabled", job.title);
        } else if !seen.insert(job.id.as_str()) {
            tracker_warn!("Duplicate job id {:?}; the first listing wins", job.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tracker_core::{update, AppState, Msg, WorkMode};
    use tracker_engine::{KeyValueStore, MemoryStore};

    use crate::platform::events::{to_msg, DomEvent};
    use crate::platform::ui::constants::{ACTION_APPLY, ACTION_SAVE, ACTION_VIEW};

    const PREFS_KEY: &str = "jobTrackerPreferences";
    const SAVED_KEY: &str = "jobTrackerSavedJobs";

    fn storage_over(store: MemoryStore) -> Storage {
        Storage::new(
            PersistenceAdapter::new(store),
            PreferenceStore::new(PREFS_KEY),
            SavedJobStore::new(SAVED_KEY),
        )
    }

    #[test]
    fn embedded_catalog_parses() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.len(), 12);
        assert_eq!(
            catalog.find("jn-001").map(|job| job.title.as_str()),
            Some("Senior React Developer")
        );
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read job catalog"));
    }

    #[test]
    fn malformed_catalog_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        fs::write(&path, "[{\"id\": 1}]").unwrap();
        assert!(load_catalog(Some(&path)).is_err());
    }

    #[test]
    fn job_without_id_loads_and_its_actions_do_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        fs::write(
            &path,
            r#"[
                {"id": "a", "title": "Rust Engineer", "company": "Acme", "location": "Pune",
                 "mode": "Remote", "experience": "1-3", "source": "Naukri",
                 "salaryRange": "8-12 LPA", "postedDaysAgo": 1, "description": "",
                 "skills": ["Rust"], "applyUrl": "https://example.com/a"},
                {"title": "Mystery Role", "company": "Acme", "location": "Pune",
                 "mode": "Onsite", "experience": "Fresher", "source": "Indeed",
                 "salaryRange": "Negotiable", "postedDaysAgo": 2, "description": "",
                 "skills": [], "applyUrl": "https://example.com/b"}
            ]"#,
        )
        .unwrap();

        let catalog = load_catalog(Some(&path)).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.jobs()[1].id, "");

        let before = AppState::new(
            catalog,
            Preferences::default(),
            SavedJobs::new(),
            "/dashboard",
        );
        for action in [ACTION_SAVE, ACTION_VIEW, ACTION_APPLY] {
            for job_id in [Some(""), None] {
                let msg = to_msg(DomEvent::click_action(action, job_id));
                let (after, effects) = update(before.clone(), msg);
                assert!(effects.is_empty());
                assert_eq!(after, before);
            }
            // The same holds when an empty id reaches update directly.
            let job_id = String::new();
            let msg = match action {
                ACTION_SAVE => Msg::SaveToggled { job_id },
                ACTION_VIEW => Msg::JobViewed { job_id },
                _ => Msg::ApplyClicked { job_id },
            };
            let (after, effects) = update(before.clone(), msg);
            assert!(effects.is_empty());
            assert_eq!(after, before);
        }
    }

    #[test]
    fn stores_round_trip_through_the_adapter() {
        let mut storage = storage_over(MemoryStore::new());
        assert_eq!(storage.load_preferences(), Preferences::default());
        assert!(storage.load_saved().is_empty());

        let mut prefs = Preferences::default();
        prefs.role_keywords = "React Developer".to_string();
        prefs.preferred_modes.insert(WorkMode::Remote);
        prefs.min_match_score = 55;
        assert!(storage.save_preferences(&prefs));
        assert!(storage.save_saved(&["jn-003".to_string(), "jn-001".to_string()]));

        assert_eq!(storage.load_preferences(), prefs);
        assert_eq!(storage.load_saved().ids(), vec!["jn-001", "jn-003"]);
    }

    #[test]
    fn corrupt_values_fall_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.set(PREFS_KEY, "{not json").unwrap();
        store.set(SAVED_KEY, "{\"a\": 1}").unwrap();
        let storage = storage_over(store);
        assert_eq!(storage.load_preferences(), Preferences::default());
        assert!(storage.load_saved().is_empty());
    }

    #[test]
    fn disabled_storage_keeps_session_working() {
        let mut storage = storage_over(MemoryStore::disabled());
        assert!(!storage.save_saved(&["jn-001".to_string()]));
        assert!(storage.load_saved().is_empty());
    }
}
