use super::*;

fn find(list: &[Achievement], kind: AchievementKind) -> Achievement {
    *list.iter().find(|a| a.kind == kind).unwrap()
}

#[test]
fn empty_summaries_earn_nothing() {
    let list = achievements(&CodingSummary::default(), &InterviewSummary::default());
    assert_eq!(list.len(), 4);
    assert!(list.iter().all(|a| !a.earned && a.progress == 0));
}

#[test]
fn progress_rounds_down() {
    let coding = CodingSummary { solved: 33, streak: 12, ..CodingSummary::default() };
    let interviews = InterviewSummary { total: 3, best_score: 85, ..InterviewSummary::default() };
    let list = achievements(&coding, &interviews);
    assert_eq!(find(&list, AchievementKind::ProblemSolver).progress, 66);
    assert_eq!(find(&list, AchievementKind::InterviewMaster).progress, 30);
    assert_eq!(find(&list, AchievementKind::StreakChampion).progress, 40);
    assert_eq!(find(&list, AchievementKind::PerfectScore).progress, 85);
}

#[test]
fn reaching_target_earns_and_caps_progress() {
    let coding = CodingSummary { solved: 75, ..CodingSummary::default() };
    let interviews = InterviewSummary { total: 10, best_score: 100, streak: 31, ..InterviewSummary::default() };
    let list = achievements(&coding, &interviews);
    assert!(list.iter().all(|a| a.earned));
    assert_eq!(find(&list, AchievementKind::ProblemSolver).progress, 100);
}

#[test]
fn streak_uses_longer_of_the_two() {
    let coding = CodingSummary { streak: 5, ..CodingSummary::default() };
    let interviews = InterviewSummary { streak: 15, ..InterviewSummary::default() };
    let streak = find(&achievements(&coding, &interviews), AchievementKind::StreakChampion);
    assert_eq!(streak.progress, 50);
}

#[test]
fn titles_match_profile_copy() {
    let titles: Vec<&str> = AchievementKind::ALL.iter().map(|k| k.title()).collect();
    assert_eq!(titles, ["Problem Solver", "Interview Master", "Streak Champion", "Perfect Score"]);
}

#[test]
fn label_shows_raw_count_beside_percent() {
    let coding = CodingSummary { solved: 25, streak: 3, ..CodingSummary::default() };
    let list = achievements(&coding, &InterviewSummary::default());

    let solver = find(&list, AchievementKind::ProblemSolver);
    assert_eq!(solver.current, 25);
    assert_eq!(solver.progress, 50);
    assert_eq!(solver.label(), "25/50");

    let streak = find(&list, AchievementKind::StreakChampion);
    assert_eq!(streak.progress, 10);
    assert_eq!(streak.label(), "3/30");
}

#[test]
fn label_caps_at_target() {
    let coding = CodingSummary { solved: 75, ..CodingSummary::default() };
    let solver = find(&achievements(&coding, &InterviewSummary::default()), AchievementKind::ProblemSolver);
    assert_eq!(solver.label(), "50/50");
}
