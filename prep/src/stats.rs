//! Summary statistics derived from problem and interview records.
//!
//! DESIGN
//! ======
//! Everything here is a pure function of the record slices plus an explicit
//! `now`, so the dashboard, practice list, and profile can recompute on every
//! render without caching. Day boundaries are UTC midnights.
//!
//! The streak walk accepts a record whose day offset equals the running count
//! *or* the running count plus one. That window is kept as-is. A streak can
//! start from yesterday. A second record on an already counted day ends the
//! walk when that day matched the running count, but counts again when the
//! day was taken through the plus-one slot.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use std::collections::BTreeMap;

use serde::Serialize;
use time::{Date, OffsetDateTime, UtcOffset};

use crate::model::{CodingProblem, Difficulty, InterviewRecord, InterviewType};

/// `round(numerator / denominator * 100)`, or 0 for an empty denominator.
#[must_use]
pub fn percentage(numerator: u32, denominator: u32) -> u32 {
    if denominator == 0 {
        return 0;
    }
    let num = u64::from(numerator) * 200 + u64::from(denominator);
    let den = u64::from(denominator) * 2;
    u32::try_from(num / den).unwrap_or(u32::MAX)
}

/// Rounded mean of `values`, 0 when empty.
#[must_use]
pub fn rounded_mean(values: impl IntoIterator<Item = u32>) -> u32 {
    let (sum, count) = values
        .into_iter()
        .fold((0_u64, 0_u64), |(sum, count), v| (sum + u64::from(v), count + 1));
    if count == 0 {
        return 0;
    }
    u32::try_from((sum * 2 + count) / (count * 2)).unwrap_or(u32::MAX)
}

fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn utc_day(at: OffsetDateTime) -> Date {
    at.to_offset(UtcOffset::UTC).date()
}

/// Consecutive-day activity count walking back from `today`.
#[must_use]
pub fn current_streak(dates: impl IntoIterator<Item = OffsetDateTime>, today: Date) -> u32 {
    let mut days: Vec<Date> = dates.into_iter().map(utc_day).collect();
    days.sort_unstable_by(|a, b| b.cmp(a));

    let mut streak = 0_u32;
    for day in days {
        let offset = (today - day).whole_days();
        let expected = i64::from(streak);
        if offset == expected || offset == expected + 1 {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// Total and solved counts for one bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub total: u32,
    pub solved: u32,
}

// =============================================================================
// CODING
// =============================================================================

/// Summary shown on the dashboard and practice header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CodingSummary {
    pub total_problems: u32,
    pub solved: u32,
    pub attempts: u32,
    /// `round(solved / attempts * 100)`.
    pub success_rate: u32,
    /// Mean per-problem success rate over problems with at least one attempt.
    pub average_success_rate: u32,
    pub streak: u32,
    pub by_difficulty: BTreeMap<Difficulty, Breakdown>,
    pub by_category: BTreeMap<String, Breakdown>,
}

#[must_use]
pub fn coding_summary(problems: &[CodingProblem], now: OffsetDateTime) -> CodingSummary {
    let mut summary = CodingSummary {
        total_problems: count_u32(problems.len()),
        ..CodingSummary::default()
    };

    for problem in problems {
        summary.attempts = summary.attempts.saturating_add(problem.attempts);
        let solved = u32::from(problem.solved);
        summary.solved += solved;

        let by_difficulty = summary.by_difficulty.entry(problem.difficulty).or_default();
        by_difficulty.total += 1;
        by_difficulty.solved += solved;

        let by_category = summary.by_category.entry(problem.category.clone()).or_default();
        by_category.total += 1;
        by_category.solved += solved;
    }

    summary.success_rate = percentage(summary.solved, summary.attempts);
    summary.average_success_rate = rounded_mean(
        problems
            .iter()
            .filter(|p| p.attempts > 0)
            .map(|p| p.success_rate),
    );
    summary.streak = current_streak(problems.iter().filter_map(|p| p.last_solved), utc_day(now));
    summary
}

// =============================================================================
// INTERVIEWS
// =============================================================================

/// Summary of the interview history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct InterviewSummary {
    pub total: u32,
    /// Interviews with every question answered.
    pub completed: u32,
    pub success_rate: u32,
    pub average_score: u32,
    pub best_score: u8,
    pub total_minutes: u32,
    pub streak: u32,
    pub by_type: BTreeMap<InterviewType, u32>,
    pub by_company: BTreeMap<String, u32>,
}

#[must_use]
pub fn interview_summary(records: &[InterviewRecord], now: OffsetDateTime) -> InterviewSummary {
    let mut summary = InterviewSummary {
        total: count_u32(records.len()),
        ..InterviewSummary::default()
    };

    for record in records {
        summary.completed += u32::from(record.is_complete());
        summary.best_score = summary.best_score.max(record.score);
        summary.total_minutes = summary.total_minutes.saturating_add(record.duration_minutes);
        *summary.by_type.entry(record.interview_type).or_default() += 1;
        *summary.by_company.entry(record.company.clone()).or_default() += 1;
    }

    summary.success_rate = percentage(summary.completed, summary.total);
    summary.average_score = rounded_mean(records.iter().map(|r| u32::from(r.score)));
    summary.streak = current_streak(records.iter().map(|r| r.date), utc_day(now));
    summary
}

// =============================================================================
// ACTIVITY
// =============================================================================

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Per-month activity bucket for the profile chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MonthlyActivity {
    pub year: i32,
    /// 1-based month number.
    pub month: u8,
    pub problems: u32,
    pub interviews: u32,
}

impl MonthlyActivity {
    #[must_use]
    pub fn label(&self) -> &'static str {
        MONTH_LABELS
            .get(usize::from(self.month.saturating_sub(1)))
            .copied()
            .unwrap_or("?")
    }
}

/// Solved problems and interviews bucketed by calendar month, oldest first.
#[must_use]
pub fn monthly_activity(problems: &[CodingProblem], interviews: &[InterviewRecord]) -> Vec<MonthlyActivity> {
    let mut buckets: BTreeMap<(i32, u8), (u32, u32)> = BTreeMap::new();
    for at in problems.iter().filter_map(|p| p.last_solved) {
        let day = utc_day(at);
        buckets.entry((day.year(), u8::from(day.month()))).or_default().0 += 1;
    }
    for record in interviews {
        let day = utc_day(record.date);
        buckets.entry((day.year(), u8::from(day.month()))).or_default().1 += 1;
    }
    buckets
        .into_iter()
        .map(|((year, month), (problems, interviews))| MonthlyActivity { year, month, problems, interviews })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ActivityKind {
    Coding,
    Interview,
}

/// One line in the dashboard's recent-activity feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}

/// Newest-first merge of solved problems and interviews, at most `limit` long.
#[must_use]
pub fn recent_activity(problems: &[CodingProblem], interviews: &[InterviewRecord], limit: usize) -> Vec<ActivityItem> {
    let solved = problems.iter().filter_map(|p| {
        p.last_solved.map(|at| ActivityItem {
            kind: ActivityKind::Coding,
            title: format!("Completed \"{}\" problem", p.title),
            at,
        })
    });
    let interviewed = interviews.iter().map(|r| ActivityItem {
        kind: ActivityKind::Interview,
        title: format!("Mock Interview - {}", r.interview_type.label()),
        at: r.date,
    });

    let mut items: Vec<ActivityItem> = solved.chain(interviewed).collect();
    items.sort_by(|a, b| b.at.cmp(&a.at));
    items.truncate(limit);
    items
}

/// Human label such as `"2 hours ago"`.
#[must_use]
pub fn relative_time(at: OffsetDateTime, now: OffsetDateTime) -> String {
    let elapsed = now - at;
    let minutes = elapsed.whole_minutes();
    if minutes < 1 {
        return "just now".to_owned();
    }
    let (value, unit) = if minutes < 60 {
        (minutes, "minute")
    } else if elapsed.whole_hours() < 24 {
        (elapsed.whole_hours(), "hour")
    } else {
        (elapsed.whole_days(), "day")
    };
    if value == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{value} {unit}s ago")
    }
}
