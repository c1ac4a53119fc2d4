use std::collections::HashSet;
use std::path::{Component, Path};

use validator::Validate;

use super::models::AppRegistryEntry;
use crate::errors::StartupError;

const BUILTIN_APPS: &[(&str, &str, &str)] = &[
    (
        "64d68394-7efc-11ee-abd5-1353e606e9ea",
        "Marvel Discovery",
        "Marvel/Discovery/TMDB3.json",
    ),
    (
        "47cb8b8c-7efc-11ee-905d-836d044cadfc",
        "Blagues",
        "Blagues/Blagues.json",
    ),
];

/// Maps application ids to their display name and config file.
/// Built once at startup and shared read-only between workers.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<AppRegistryEntry>,
}

impl Registry {
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_APPS
                .iter()
                .map(|(id, name, path)| AppRegistryEntry::new(id, name, path))
                .collect(),
        }
    }

    pub fn from_entries(entries: Vec<AppRegistryEntry>) -> Result<Self, StartupError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            entry
                .validate()
                .map_err(|e| StartupError::Registry(format!("entry [{}]: {}", entry.id, e)))?;
            if !is_contained(&entry.config_path) {
                return Err(StartupError::Registry(format!(
                    "entry [{}]: config path {} escapes the base directory",
                    entry.id, entry.config_path
                )));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(StartupError::Registry(format!(
                    "duplicate application id [{}]",
                    entry.id
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Reads a JSON array of `{id, name, config_path}` objects.
    pub fn from_file(path: &Path) -> Result<Self, StartupError> {
        log::debug!("Loading application registry from {}", path.display());
        let raw = std::fs::read(path)
            .map_err(|e| StartupError::Registry(format!("{}: {}", path.display(), e)))?;
        let entries: Vec<AppRegistryEntry> = serde_json::from_slice(&raw)
            .map_err(|e| StartupError::Registry(format!("{}: {}", path.display(), e)))?;
        Self::from_entries(entries)
    }

    pub fn lookup(&self, app_id: &str) -> Option<&AppRegistryEntry> {
        if app_id.is_empty() {
            return None;
        }
        self.entries.iter().find(|entry| entry.id == app_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

fn is_contained(config_path: &str) -> bool {
    Path::new(config_path)
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}
