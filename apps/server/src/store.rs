//! Flat-file persistence for progress and exercise statistics.
//!
//! Two JSON documents under the data directory play the role the original
//! browser tool gave to its storage keys: `progress.json` holds the
//! completion snapshot and `exercise_stats.json` the submission counters.
//! Writes are synchronous and last-write-wins; a single session is the only
//! writer. A missing or corrupt document is recovered silently with an
//! empty snapshot, never surfaced to the user.

use crate::error::Result;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use vimgym_core::{ExerciseStats, ProgressSnapshot, StatsSnapshot};

const PROGRESS_FILE: &str = "progress.json";
const STATS_FILE: &str = "exercise_stats.json";

/// Owns the persisted snapshots and keeps them in sync with disk.
#[derive(Debug)]
pub struct ProgressStore {
    progress_path: PathBuf,
    stats_path: PathBuf,
    progress: ProgressSnapshot,
    stats: StatsSnapshot,
}

impl ProgressStore {
    /// Open the store, restoring both snapshots from the data directory.
    pub fn open(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)?;

        let progress_path = data_dir.join(PROGRESS_FILE);
        let stats_path = data_dir.join(STATS_FILE);

        let progress = restore(&progress_path, "progress");
        let stats = restore(&stats_path, "exercise stats");

        Ok(Self {
            progress_path,
            stats_path,
            progress,
            stats,
        })
    }

    pub fn progress(&self) -> &ProgressSnapshot {
        &self.progress
    }

    pub fn stats(&self) -> &ExerciseStats {
        &self.stats.exercise_stats
    }

    /// Flip completion of a challenge and persist. Returns the new
    /// membership.
    pub fn toggle(&mut self, id: i64) -> Result<bool> {
        let completed = self.progress.toggle(id, Utc::now());
        write_document(&self.progress_path, &self.progress)?;
        Ok(completed)
    }

    /// Clear all completions and erase the persisted progress document.
    pub fn reset(&mut self) -> Result<()> {
        self.progress.clear(Utc::now());
        if self.progress_path.exists() {
            fs::remove_file(&self.progress_path)?;
        }
        Ok(())
    }

    /// Record one exercise submission and persist the counters.
    pub fn record_submission(&mut self, success: bool) -> Result<ExerciseStats> {
        self.stats.record(success, Utc::now());
        write_document(&self.stats_path, &self.stats)?;
        Ok(self.stats.exercise_stats)
    }
}

/// Restore a snapshot document, falling back to empty on any failure.
fn restore<T>(path: &Path, what: &str) -> T
where
    T: Restorable + serde::de::DeserializeOwned,
{
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no persisted {what}, starting empty");
            return T::empty_now();
        }
        Err(err) => {
            tracing::warn!("failed to read persisted {what}: {err}; starting empty");
            return T::empty_now();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::warn!("persisted {what} is corrupt: {err}; starting empty");
            T::empty_now()
        }
    }
}

fn write_document<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let raw = serde_json::to_string_pretty(value)
        .map_err(|err| crate::error::ApiError::Persistence(err.to_string()))?;
    fs::write(path, raw)?;
    Ok(())
}

trait Restorable {
    fn empty_now() -> Self;
}

impl Restorable for ProgressSnapshot {
    fn empty_now() -> Self {
        Self::empty(Utc::now())
    }
}

impl Restorable for StatsSnapshot {
    fn empty_now() -> Self {
        Self::empty(Utc::now())
    }
}
