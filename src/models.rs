use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const TOTAL_DAYS: u32 = 150;

/// The set of completed day numbers. Serializes as a flat JSON array of
/// integers (e.g. `[1,2,5,9]`), which is also the on-disk format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Progress {
    pub days: BTreeSet<u32>,
}

impl Progress {
    /// Flips membership of `day`: marks it complete if absent, clears it if
    /// present. Returns the new completion state.
    pub fn toggle(&mut self, day: u32) -> bool {
        if self.days.remove(&day) {
            false
        } else {
            self.days.insert(day);
            true
        }
    }

    pub fn is_complete(&self, day: u32) -> bool {
        self.days.contains(&day)
    }

    pub fn completed_count(&self) -> u32 {
        self.days.len() as u32
    }

    pub fn clear(&mut self) {
        self.days.clear();
    }
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub day: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayStatusResponse {
    pub day: u32,
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub completed_days: Vec<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub completed_count: u32,
    pub remaining_count: u32,
    pub percentage: f64,
    pub streak: u32,
}

/// Snapshot written to the JSON export download. Field names follow the
/// historical export file format, hence the camelCase.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    pub completed_days: Vec<u32>,
    pub total_days: u32,
    pub completed_count: u32,
    pub remaining_count: u32,
    pub percentage: String,
    pub streak: u32,
    pub export_date: String,
}
