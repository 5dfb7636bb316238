//! Persistent field store.
//!
//! A flat key → string mapping that survives restarts. The file is read once
//! when the store is opened and rewritten on every change; an absent or
//! malformed file falls back to an empty map. There is no schema versioning
//! and no migration.

pub mod state;

pub use state::AppState;

use crate::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Store keys, one per top-level entity.
pub mod keys {
    pub const BUSINESS_INFO: &str = "businessInfo";
    pub const CONTENT_PLAN_INFO: &str = "contentPlanInfo";
    pub const IDEA_GEN_INFO: &str = "ideaGenInfo";
    pub const SCRIPT_INFO: &str = "scriptInfo";
    pub const SCRIPT_TYPE: &str = "scriptType";
    pub const MARKETING_IDEAS: &str = "marketingIdeas";
    pub const STRATEGY: &str = "strategy";
    pub const MONTHLY_PLAN: &str = "monthlyPlan";
    pub const SCRIPT: &str = "script";
    pub const SCENARIO: &str = "scenario";
}

/// Port for key-value persistence of form and result state.
pub trait FieldStore {
    /// Read a stored value, `None` when absent.
    fn load(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete a value if present.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// File-backed store: one JSON object of string entries.
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open a store, reading existing entries from disk. A missing or
    /// malformed file yields an empty store.
    pub fn open(path: &Path) -> Self {
        let entries = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(
                        "Ignoring malformed state file {}: {}",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };

        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl FieldStore for JsonFileStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}
