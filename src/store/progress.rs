// SPDX-License-Identifier: MPL-2.0
//! Completion progress persistence.
//!
//! One record per machine: the set of completed module numbers plus the
//! derived "current" module. The record is created lazily on first read and
//! only ever mutated by [`ProgressStore::complete_module`].
//!
//! # Path Resolution
//!
//! The store file location can be customized for testing or portable
//! deployments:
//! 1. Use `open()` with an explicit base directory override
//! 2. Set `COURSEDECK_DATA_DIR` environment variable
//! 3. Falls back to the platform-specific data directory

use crate::app::paths;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Store file name within the app data directory.
const PROGRESS_FILE: &str = "progress.json";

fn default_current_module() -> u32 {
    1
}

/// Which modules have been completed, and the derived current module.
///
/// Invariant: `current_module == max(completed_modules ∪ {0}) + 1`. The set
/// type enforces uniqueness; [`ProgressRecord::normalize`] restores the
/// invariant after deserializing, so a hand-edited or stale file cannot
/// violate it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressRecord {
    #[serde(default)]
    pub completed_modules: BTreeSet<u32>,
    #[serde(default = "default_current_module")]
    pub current_module: u32,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            completed_modules: BTreeSet::new(),
            current_module: 1,
        }
    }
}

impl ProgressRecord {
    /// Recomputes `current_module` from the completed set.
    fn normalize(&mut self) {
        self.current_module = self.completed_modules.iter().next_back().copied().unwrap_or(0) + 1;
    }
}

/// Repository over the progress record with an injected storage directory.
///
/// Holding the record in memory keeps reads pure; every mutation persists
/// immediately with last-write-wins semantics.
#[derive(Debug)]
pub struct ProgressStore {
    base_dir: Option<PathBuf>,
    record: ProgressRecord,
}

impl ProgressStore {
    /// Opens the store, loading any persisted record.
    ///
    /// Returns a tuple of (store, optional_warning). Loading fails open: a
    /// missing file yields the default record silently; a corrupt file yields
    /// the default record plus a warning key for the notification layer.
    pub fn open(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let (record, warning) = Self::load_record(base_dir.clone());
        (Self { base_dir, record }, warning)
    }

    fn load_record(base_dir: Option<PathBuf>) -> (ProgressRecord, Option<String>) {
        let Some(path) = Self::file_path(base_dir) else {
            return (ProgressRecord::default(), None);
        };

        if !path.exists() {
            return (ProgressRecord::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match serde_json::from_reader::<_, ProgressRecord>(reader) {
                    Ok(mut record) => {
                        record.normalize();
                        (record, None)
                    }
                    Err(err) => {
                        log::warn!("progress store unreadable, starting fresh: {}", err);
                        (
                            ProgressRecord::default(),
                            Some("notification-progress-parse-error".to_string()),
                        )
                    }
                }
            }
            Err(err) => {
                log::warn!("progress store unreadable, starting fresh: {}", err);
                (
                    ProgressRecord::default(),
                    Some("notification-progress-read-error".to_string()),
                )
            }
        }
    }

    /// The current record.
    #[must_use]
    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    /// Membership test for a completed module.
    #[must_use]
    pub fn is_completed(&self, module: u32) -> bool {
        self.record.completed_modules.contains(&module)
    }

    /// Marks a module complete. Idempotent: completing an already-completed
    /// module changes nothing and does not touch the disk.
    ///
    /// Returns an optional warning key if persisting failed; the in-memory
    /// record is updated either way (degraded, session-only persistence).
    pub fn complete_module(&mut self, module: u32) -> Option<String> {
        if !self.record.completed_modules.insert(module) {
            return None;
        }
        self.record.normalize();
        self.save()
    }

    /// Completion percentage over `total` modules, rounded to the nearest
    /// integer. Pure read; `total == 0` yields 0.
    #[must_use]
    pub fn completion_percentage(&self, total: u32) -> u8 {
        if total == 0 {
            return 0;
        }
        let completed = self.record.completed_modules.len() as f64;
        ((completed / f64::from(total)) * 100.0).round() as u8
    }

    fn save(&self) -> Option<String> {
        let Some(path) = Self::file_path(self.base_dir.clone()) else {
            return Some("notification-progress-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                log::warn!("could not create data directory: {}", err);
                return Some("notification-progress-save-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if let Err(err) = serde_json::to_writer(writer, &self.record) {
                    log::warn!("could not save progress: {}", err);
                    return Some("notification-progress-save-error".to_string());
                }
                None
            }
            Err(err) => {
                log::warn!("could not save progress: {}", err);
                Some("notification-progress-save-error".to_string())
            }
        }
    }

    fn file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(PROGRESS_FILE);
            path
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn open_in(dir: &std::path::Path) -> ProgressStore {
        let (store, warning) = ProgressStore::open(Some(dir.to_path_buf()));
        assert!(warning.is_none(), "fresh dir should load silently");
        store
    }

    #[test]
    fn default_record_starts_at_module_one() {
        let record = ProgressRecord::default();
        assert!(record.completed_modules.is_empty());
        assert_eq!(record.current_module, 1);
    }

    #[test]
    fn complete_module_inserts_and_advances_current() {
        let temp_dir = tempdir().expect("temp dir");
        let mut store = open_in(temp_dir.path());

        let warning = store.complete_module(1);
        assert!(warning.is_none());
        assert!(store.is_completed(1));
        assert_eq!(store.record().current_module, 2);
    }

    #[test]
    fn complete_module_is_idempotent() {
        let temp_dir = tempdir().expect("temp dir");
        let mut store = open_in(temp_dir.path());

        store.complete_module(3);
        let before = store.record().clone();
        store.complete_module(3);

        assert_eq!(store.record(), &before);
        assert_eq!(store.record().completed_modules.len(), 1);
    }

    #[test]
    fn current_module_tracks_max_not_insertion_order() {
        let temp_dir = tempdir().expect("temp dir");
        let mut store = open_in(temp_dir.path());

        store.complete_module(4);
        assert_eq!(store.record().current_module, 5);

        // Completing an earlier module must not regress the current module
        store.complete_module(2);
        assert_eq!(store.record().current_module, 5);
    }

    #[test]
    fn invariant_holds_for_arbitrary_sequences() {
        let temp_dir = tempdir().expect("temp dir");
        let mut store = open_in(temp_dir.path());

        for module in [5, 1, 3, 3, 2, 6, 1] {
            store.complete_module(module);
            let record = store.record();
            let max = record.completed_modules.iter().max().copied().unwrap_or(0);
            assert_eq!(record.current_module, max + 1);
        }
        assert_eq!(store.record().completed_modules.len(), 5);
    }

    #[test]
    fn completion_percentage_is_monotone_and_caps_at_100() {
        let temp_dir = tempdir().expect("temp dir");
        let mut store = open_in(temp_dir.path());

        let mut previous = store.completion_percentage(6);
        assert_eq!(previous, 0);

        for module in 1..=6 {
            store.complete_module(module);
            let current = store.completion_percentage(6);
            assert!(current >= previous);
            previous = current;
        }
        assert_eq!(previous, 100);
    }

    #[test]
    fn completion_percentage_rounds_to_nearest() {
        let temp_dir = tempdir().expect("temp dir");
        let mut store = open_in(temp_dir.path());

        store.complete_module(1);
        // 1/6 = 16.66… -> 17
        assert_eq!(store.completion_percentage(6), 17);

        store.complete_module(2);
        // 2/6 = 33.33… -> 33
        assert_eq!(store.completion_percentage(6), 33);
    }

    #[test]
    fn completion_percentage_with_zero_total_is_zero() {
        let temp_dir = tempdir().expect("temp dir");
        let store = open_in(temp_dir.path());
        assert_eq!(store.completion_percentage(0), 0);
    }

    #[test]
    fn progress_survives_reopen() {
        let temp_dir = tempdir().expect("temp dir");
        {
            let mut store = open_in(temp_dir.path());
            store.complete_module(1);
            store.complete_module(2);
        }

        let reopened = open_in(temp_dir.path());
        assert!(reopened.is_completed(1));
        assert!(reopened.is_completed(2));
        assert_eq!(reopened.record().current_module, 3);
    }

    #[test]
    fn corrupt_file_fails_open_with_warning() {
        let temp_dir = tempdir().expect("temp dir");
        fs::write(temp_dir.path().join(PROGRESS_FILE), "not json").expect("write");

        let (store, warning) = ProgressStore::open(Some(temp_dir.path().to_path_buf()));
        assert_eq!(store.record(), &ProgressRecord::default());
        assert_eq!(
            warning,
            Some("notification-progress-parse-error".to_string())
        );
    }

    #[test]
    fn stale_current_module_is_normalized_on_load() {
        let temp_dir = tempdir().expect("temp dir");
        fs::write(
            temp_dir.path().join(PROGRESS_FILE),
            r#"{"completed_modules":[1,2,5],"current_module":2}"#,
        )
        .expect("write");

        let (store, warning) = ProgressStore::open(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(store.record().current_module, 6);
    }
}
