use time::Duration;
use time::macros::{date, datetime};

use super::*;
use crate::model::{ExperienceLevel, InterviewSetup};

const NOW: OffsetDateTime = datetime!(2025-06-15 18:00 UTC);

fn problem(id: u32, difficulty: Difficulty, category: &str, solved: bool, attempts: u32) -> CodingProblem {
    CodingProblem {
        id,
        title: format!("Problem {id}"),
        difficulty,
        category: category.to_owned(),
        description: String::new(),
        solved,
        attempts,
        last_solved: None,
        time_spent_minutes: None,
        success_rate: 0,
        time_complexity: String::new(),
        space_complexity: String::new(),
    }
}

fn solved_at(mut p: CodingProblem, at: OffsetDateTime) -> CodingProblem {
    p.solved = true;
    p.last_solved = Some(at);
    p
}

fn interview(kind: InterviewType, company: &str, at: OffsetDateTime, score: u8, answered: u32) -> InterviewRecord {
    let setup = InterviewSetup::new(kind, company, ExperienceLevel::Mid);
    InterviewRecord::new(&setup, at, score, 30, "", answered, 2)
}

// =============================================================
// percentage / rounded_mean
// =============================================================

#[test]
fn percentage_zero_denominator_is_zero() {
    assert_eq!(percentage(3, 0), 0);
}

#[test]
fn percentage_rounds_half_up() {
    assert_eq!(percentage(1, 3), 33);
    assert_eq!(percentage(2, 3), 67);
    assert_eq!(percentage(1, 8), 13);
    assert_eq!(percentage(5, 5), 100);
}

#[test]
fn rounded_mean_handles_empty_and_values() {
    assert_eq!(rounded_mean(Vec::<u32>::new()), 0);
    assert_eq!(rounded_mean([85, 92, 78]), 85);
    assert_eq!(rounded_mean([1, 2]), 2);
}

// =============================================================
// current_streak
// =============================================================

#[test]
fn streak_empty_is_zero() {
    assert_eq!(current_streak(std::iter::empty(), date!(2025-06-15)), 0);
}

#[test]
fn streak_today_only_is_one() {
    assert_eq!(current_streak([NOW], NOW.date()), 1);
}

#[test]
fn streak_today_and_yesterday_is_two() {
    let dates = [NOW - Duration::days(1), NOW];
    assert_eq!(current_streak(dates, NOW.date()), 2);
}

#[test]
fn streak_stops_at_gap() {
    let dates = [NOW, NOW - Duration::days(3)];
    assert_eq!(current_streak(dates, NOW.date()), 1);
}

#[test]
fn streak_normalizes_time_of_day() {
    let dates = [datetime!(2025-06-15 00:01 UTC), datetime!(2025-06-14 23:59 UTC)];
    assert_eq!(current_streak(dates, date!(2025-06-15)), 2);
}

#[test]
fn streak_may_start_yesterday() {
    let dates = [NOW - Duration::days(1), NOW - Duration::days(2)];
    assert_eq!(current_streak(dates, NOW.date()), 2);
}

#[test]
fn streak_duplicate_day_ends_walk() {
    let dates = [NOW, NOW - Duration::hours(1), NOW - Duration::days(1)];
    assert_eq!(current_streak(dates, NOW.date()), 1);
}

#[test]
fn streak_duplicate_after_skipped_day_counts_twice() {
    let yesterday = NOW - Duration::days(1);
    let dates = [yesterday, yesterday - Duration::hours(1)];
    assert_eq!(current_streak(dates, NOW.date()), 2);
}

#[test]
fn streak_ignores_future_dates() {
    assert_eq!(current_streak([NOW + Duration::days(2)], NOW.date()), 0);
}

// =============================================================
// coding_summary
// =============================================================

#[test]
fn coding_summary_empty_is_all_zero() {
    let summary = coding_summary(&[], NOW);
    assert_eq!(summary, CodingSummary::default());
}

#[test]
fn coding_summary_counts_and_rates() {
    let problems = vec![
        solved_at(problem(1, Difficulty::Easy, "Array", true, 3), NOW),
        problem(2, Difficulty::Medium, "String", false, 1),
        problem(3, Difficulty::Hard, "Binary Search", false, 0),
        solved_at(problem(4, Difficulty::Easy, "Stack", true, 2), NOW - Duration::days(1)),
    ];
    let summary = coding_summary(&problems, NOW);
    assert_eq!(summary.total_problems, 4);
    assert_eq!(summary.solved, 2);
    assert_eq!(summary.attempts, 6);
    assert_eq!(summary.success_rate, 33);
    assert_eq!(summary.streak, 2);
    assert_eq!(summary.by_difficulty[&Difficulty::Easy], Breakdown { total: 2, solved: 2 });
    assert_eq!(summary.by_difficulty[&Difficulty::Hard], Breakdown { total: 1, solved: 0 });
    assert_eq!(summary.by_category["String"], Breakdown { total: 1, solved: 0 });
}

#[test]
fn coding_summary_average_skips_unattempted() {
    let mut a = problem(1, Difficulty::Easy, "Array", true, 2);
    a.success_rate = 50;
    let mut b = problem(2, Difficulty::Easy, "Array", false, 0);
    b.success_rate = 35;
    let summary = coding_summary(&[a, b], NOW);
    assert_eq!(summary.average_success_rate, 50);
}

// =============================================================
// interview_summary
// =============================================================

#[test]
fn interview_summary_aggregates() {
    let records = vec![
        interview(InterviewType::Technical, "Google", NOW, 85, 2),
        interview(InterviewType::Behavioral, "Meta", NOW - Duration::days(1), 92, 1),
        interview(InterviewType::Technical, "Google", NOW - Duration::days(7), 78, 2),
    ];
    let summary = interview_summary(&records, NOW);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.completed, 2);
    assert_eq!(summary.success_rate, 67);
    assert_eq!(summary.average_score, 85);
    assert_eq!(summary.best_score, 92);
    assert_eq!(summary.total_minutes, 90);
    assert_eq!(summary.streak, 2);
    assert_eq!(summary.by_type[&InterviewType::Technical], 2);
    assert_eq!(summary.by_company["Meta"], 1);
}

#[test]
fn interview_summary_empty_is_all_zero() {
    assert_eq!(interview_summary(&[], NOW), InterviewSummary::default());
}

// =============================================================
// activity
// =============================================================

#[test]
fn monthly_activity_buckets_in_order() {
    let problems = vec![
        solved_at(problem(1, Difficulty::Easy, "Array", true, 1), datetime!(2025-02-03 10:00 UTC)),
        solved_at(problem(2, Difficulty::Easy, "Array", true, 1), datetime!(2025-01-20 10:00 UTC)),
        problem(3, Difficulty::Easy, "Array", false, 1),
    ];
    let interviews = vec![interview(InterviewType::Technical, "Google", datetime!(2025-02-10 10:00 UTC), 80, 2)];
    let months = monthly_activity(&problems, &interviews);
    assert_eq!(months.len(), 2);
    assert_eq!(months[0].label(), "Jan");
    assert_eq!((months[0].problems, months[0].interviews), (1, 0));
    assert_eq!(months[1].label(), "Feb");
    assert_eq!((months[1].problems, months[1].interviews), (1, 1));
}

#[test]
fn recent_activity_is_newest_first_and_limited() {
    let problems = vec![solved_at(
        CodingProblem { title: "Two Sum".to_owned(), ..problem(1, Difficulty::Easy, "Array", true, 1) },
        NOW - Duration::hours(2),
    )];
    let interviews = vec![
        interview(InterviewType::SystemDesign, "Amazon", NOW - Duration::days(1), 78, 1),
        interview(InterviewType::Behavioral, "Meta", NOW - Duration::days(3), 92, 2),
    ];
    let items = recent_activity(&problems, &interviews, 2);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Completed \"Two Sum\" problem");
    assert_eq!(items[0].kind, ActivityKind::Coding);
    assert_eq!(items[1].title, "Mock Interview - System Design");
}

#[test]
fn relative_time_labels() {
    assert_eq!(relative_time(NOW, NOW), "just now");
    assert_eq!(relative_time(NOW - Duration::minutes(1), NOW), "1 minute ago");
    assert_eq!(relative_time(NOW - Duration::minutes(45), NOW), "45 minutes ago");
    assert_eq!(relative_time(NOW - Duration::hours(2), NOW), "2 hours ago");
    assert_eq!(relative_time(NOW - Duration::days(1), NOW), "1 day ago");
    assert_eq!(relative_time(NOW - Duration::days(14), NOW), "14 days ago");
}
