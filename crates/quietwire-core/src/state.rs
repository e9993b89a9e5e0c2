use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::PluginDescriptor;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to read setup state: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse setup state: {0}")]
    Parse(#[from] serde_json::Error),
}

/// What the last completed setup run produced. The generated files carry the
/// wiring facts; this record carries the provenance they cannot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetupRecord {
    pub descriptor: PluginDescriptor,
    pub written: Vec<PathBuf>,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StateData {
    last_run: Option<SetupRecord>,
}

#[derive(Debug)]
pub struct StateStore {
    path: PathBuf,
    data: Mutex<StateData>,
}

impl StateStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StateError> {
        let path = path.into();
        let data = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            StateData::default()
        };
        Ok(Self {
            path,
            data: Mutex::new(data),
        })
    }

    pub fn default_path() -> Result<PathBuf, StateError> {
        let mut config_dir = dirs::config_dir().ok_or_else(|| {
            StateError::Read(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no config directory",
            ))
        })?;
        config_dir.push("quietwire");
        fs::create_dir_all(&config_dir)?;
        config_dir.push("state.json");
        Ok(config_dir)
    }

    pub fn record(&self, record: SetupRecord) -> Result<(), StateError> {
        let mut data = self.data.lock();
        data.last_run = Some(record);
        self.persist_locked(&data)
    }

    pub fn last_run(&self) -> Option<SetupRecord> {
        self.data.lock().last_run.clone()
    }

    fn persist_locked(&self, data: &StateData) -> Result<(), StateError> {
        let json = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use crate::{EntryPoint, Provenance};

    use super::*;

    fn record() -> SetupRecord {
        let detected: BTreeSet<_> = EntryPoint::ALL.into_iter().collect();
        SetupRecord {
            descriptor: PluginDescriptor::from_entry_points(
                PathBuf::from("/tmp/plugin.so"),
                &detected,
                Provenance::Assumed,
            ),
            written: vec![PathBuf::from("/tmp/out/quietwire-source.conf")],
            completed_at: Utc::now(),
        }
    }

    #[test]
    fn record_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        let record = record();
        {
            let store = StateStore::open(&path).unwrap();
            store.record(record.clone()).unwrap();
        }
        let reopened = StateStore::open(&path).unwrap();
        assert_eq!(reopened.last_run(), Some(record));
    }

    #[test]
    fn fresh_store_has_no_run() {
        let dir = tempdir().unwrap();
        let store = StateStore::open(dir.path().join("state.json")).unwrap();
        assert_eq!(store.last_run(), None);
    }

    #[test]
    fn newer_record_supersedes() {
        let dir = tempdir().unwrap();
        let store = StateStore::open(dir.path().join("state.json")).unwrap();
        let first = record();
        store.record(first.clone()).unwrap();
        let mut second = record();
        second.descriptor.provenance = Provenance::Probed;
        store.record(second.clone()).unwrap();
        assert_eq!(store.last_run(), Some(second));
    }
}
