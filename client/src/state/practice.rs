//! Coding-practice browser: filter controls and their select values.

#[cfg(test)]
#[path = "practice_test.rs"]
mod practice_test;

use prep::catalog::ProblemFilter;
use prep::{CodingProblem, Difficulty};

/// Select value meaning "no filter".
pub const ALL: &str = "all";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PracticeState {
    pub filter: ProblemFilter,
}

impl PracticeState {
    /// Apply a difficulty `<select>` value; unknown values clear the filter.
    pub fn set_difficulty(&mut self, value: &str) {
        self.filter.difficulty = Difficulty::parse(value);
    }

    pub fn set_category(&mut self, value: &str) {
        let value = value.trim();
        self.filter.category = (!value.is_empty() && value != ALL).then(|| value.to_owned());
    }

    pub fn set_search(&mut self, value: String) {
        self.filter.search = value;
    }

    #[must_use]
    pub fn difficulty_value(&self) -> &'static str {
        self.filter.difficulty.map_or(ALL, Difficulty::as_str)
    }

    #[must_use]
    pub fn category_value(&self) -> String {
        self.filter.category.clone().unwrap_or_else(|| ALL.to_owned())
    }

    #[must_use]
    pub fn visible<'a>(&self, problems: &'a [CodingProblem]) -> Vec<&'a CodingProblem> {
        self.filter.apply(problems)
    }
}

/// CSS modifier for a difficulty badge.
#[must_use]
pub fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "badge badge--easy",
        Difficulty::Medium => "badge badge--medium",
        Difficulty::Hard => "badge badge--hard",
    }
}
