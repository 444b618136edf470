use prep::catalog::default_problems;

use super::*;

#[test]
fn default_state_shows_everything() {
    let state = PracticeState::default();
    assert_eq!(state.difficulty_value(), "all");
    assert_eq!(state.category_value(), "all");
    assert_eq!(state.visible(&default_problems()).len(), 5);
}

#[test]
fn select_values_drive_filter() {
    let mut state = PracticeState::default();
    state.set_difficulty("Easy");
    state.set_category("Stack");
    assert_eq!(state.difficulty_value(), "Easy");
    assert_eq!(state.category_value(), "Stack");
    let problems = default_problems();
    let visible = state.visible(&problems);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Valid Parentheses");
}

#[test]
fn all_clears_filters() {
    let mut state = PracticeState::default();
    state.set_difficulty("Hard");
    state.set_category("Tree");
    state.set_difficulty(ALL);
    state.set_category(ALL);
    assert_eq!(state.filter, ProblemFilter::default());
}

#[test]
fn search_narrows_results() {
    let mut state = PracticeState::default();
    state.set_search("two".to_owned());
    let problems = default_problems();
    let titles: Vec<&str> = state.visible(&problems).iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Two Sum", "Median of Two Sorted Arrays"]);
}

#[test]
fn difficulty_classes_are_distinct() {
    assert_ne!(difficulty_class(Difficulty::Easy), difficulty_class(Difficulty::Hard));
    assert_eq!(difficulty_class(Difficulty::Medium), "badge badge--medium");
}
