use crate::models::{ExportRecord, Progress, StatsResponse, TOTAL_DAYS};
use chrono::{DateTime, SecondsFormat, Utc};

pub fn build_stats(progress: &Progress) -> StatsResponse {
    let completed = progress.completed_count();
    StatsResponse {
        completed_count: completed,
        remaining_count: TOTAL_DAYS.saturating_sub(completed),
        percentage: f64::from(completed) / f64::from(TOTAL_DAYS) * 100.0,
        streak: streak(progress),
    }
}

/// Length of the longest run of consecutive day numbers anywhere in the set.
/// `{1,2,3,90}` scores 3 regardless of which day is most recent.
pub fn streak(progress: &Progress) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<u32> = None;

    for &day in &progress.days {
        run = match prev {
            Some(p) if day == p + 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }

    longest
}

pub fn build_export(progress: &Progress) -> ExportRecord {
    build_export_at(Utc::now(), progress)
}

pub fn build_export_at(now: DateTime<Utc>, progress: &Progress) -> ExportRecord {
    let stats = build_stats(progress);
    ExportRecord {
        completed_days: progress.days.iter().copied().collect(),
        total_days: TOTAL_DAYS,
        completed_count: stats.completed_count,
        remaining_count: stats.remaining_count,
        percentage: format!("{:.2}%", stats.percentage),
        streak: stats.streak,
        export_date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}
