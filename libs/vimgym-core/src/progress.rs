//! Completion tracking and exercise statistics.
//!
//! Both snapshots serialize to the exact flat documents the application
//! persists, so the storage layer only moves strings around:
//!
//! ```json
//! {"completedChallenges": [1, 4], "lastUpdated": "2026-08-30T12:00:00Z"}
//! {"exerciseStats": {"completed": 5, "success": 4}, "lastUpdated": "..."}
//! ```
//!
//! Timestamps are injected by the caller so every operation stays a pure
//! function of its inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Persisted record of which challenges the user marked complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    #[serde(rename = "completedChallenges")]
    pub completed_ids: BTreeSet<i64>,
    #[serde(rename = "lastUpdated")]
    pub last_updated: DateTime<Utc>,
}

impl ProgressSnapshot {
    /// Empty snapshot, also the recovery value for a missing or corrupt
    /// persisted document.
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            completed_ids: BTreeSet::new(),
            last_updated: now,
        }
    }

    /// Flip completion of `id`. Idempotent toggle: applying it twice
    /// restores the original membership. Returns the new membership.
    pub fn toggle(&mut self, id: i64, now: DateTime<Utc>) -> bool {
        let inserted = self.completed_ids.insert(id);
        if !inserted {
            self.completed_ids.remove(&id);
        }
        self.last_updated = now;
        inserted
    }

    pub fn is_completed(&self, id: i64) -> bool {
        self.completed_ids.contains(&id)
    }

    /// Clear all completions.
    pub fn clear(&mut self, now: DateTime<Utc>) {
        self.completed_ids.clear();
        self.last_updated = now;
    }

    /// Rounded completion percentage. Zero total entries is defined as 0%.
    pub fn completion_percentage(&self, total_entries: usize) -> u32 {
        percentage(self.completed_ids.len(), total_entries)
    }

    /// Build the downloadable export document. Does not mutate state.
    pub fn export(&self, total_entries: usize, now: DateTime<Utc>, platform: &str) -> ExportReport {
        ExportReport {
            completed_challenges: self.completed_ids.iter().copied().collect(),
            total_challenges: total_entries,
            completion_percentage: self.completion_percentage(total_entries),
            export_date: now,
            platform: platform.to_string(),
        }
    }
}

/// Downloadable progress export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    pub completed_challenges: Vec<i64>,
    pub total_challenges: usize,
    pub completion_percentage: u32,
    pub export_date: DateTime<Utc>,
    pub platform: String,
}

/// Counters for practice exercise submissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseStats {
    pub completed: u32,
    pub success: u32,
}

impl ExerciseStats {
    /// Record one submission. Every submission counts as completed; a
    /// passing verdict also counts as a success.
    pub fn record(&mut self, success: bool) {
        self.completed += 1;
        if success {
            self.success += 1;
        }
    }

    /// Rounded success rate. No submissions is defined as 0%.
    pub fn success_rate(&self) -> u32 {
        percentage(self.success as usize, self.completed as usize)
    }
}

/// Persisted envelope for [`ExerciseStats`], stored separately from the
/// completion snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    #[serde(rename = "exerciseStats")]
    pub exercise_stats: ExerciseStats,
    #[serde(rename = "lastUpdated")]
    pub last_updated: DateTime<Utc>,
}

impl StatsSnapshot {
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            exercise_stats: ExerciseStats::default(),
            last_updated: now,
        }
    }

    pub fn record(&mut self, success: bool, now: DateTime<Utc>) {
        self.exercise_stats.record(success);
        self.last_updated = now;
    }
}

fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * part as f64 / total as f64).round() as u32
}
