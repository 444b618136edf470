//! Route paths and query strings shared by links and navigation.
//!
//! Selections travel between pages in the URL so a reload lands on the same
//! screen. Values are percent-encoded here and decoded by the router.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use prep::{Difficulty, ExperienceLevel, InterviewSetup, InterviewType};

pub const HOME: &str = "/";
pub const DASHBOARD: &str = "/dashboard";
pub const CODING: &str = "/coding";
pub const INTERVIEW: &str = "/interview";
pub const RESULTS: &str = "/interview/results";
pub const STATUS: &str = "/status";
pub const PROFILE: &str = "/profile";

fn with_query(path: &str, pairs: &[(&str, &str)]) -> String {
    let query: Vec<String> = pairs
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect();
    if query.is_empty() {
        return path.to_owned();
    }
    format!("{path}?{}", query.join("&"))
}

/// `/coding/solve?difficulty=..&category=..&company=..`
#[must_use]
pub fn solver(difficulty: Difficulty, category: &str, company: Option<&str>) -> String {
    with_query(
        "/coding/solve",
        &[("difficulty", difficulty.as_str()), ("category", category), ("company", company.unwrap_or_default())],
    )
}

/// `/interview/session?type=..&company=..&level=..`
#[must_use]
pub fn session(setup: &InterviewSetup) -> String {
    with_query(
        "/interview/session",
        &[
            ("type", setup.interview_type.as_str()),
            ("company", setup.company.as_str()),
            ("level", setup.experience_level.as_str()),
        ],
    )
}

/// `/status?id=..`, or plain `/status` for a blank id.
#[must_use]
pub fn status_for(interview_id: &str) -> String {
    with_query(STATUS, &[("id", interview_id.trim())])
}

#[must_use]
pub fn room(room_name: &str) -> String {
    format!("/interview/room/{}", urlencoding::encode(room_name.trim()))
}

/// Parse the session query back into a setup. All three fields are required.
#[must_use]
pub fn parse_session(kind: Option<&str>, company: Option<&str>, level: Option<&str>) -> Option<InterviewSetup> {
    let interview_type = InterviewType::parse(kind?)?;
    let company = company.map(str::trim).filter(|c| !c.is_empty())?;
    let level = ExperienceLevel::parse(level?)?;
    Some(InterviewSetup::new(interview_type, company, level))
}

/// Parse the solver query. Difficulty and category are required.
#[must_use]
pub fn parse_solver(
    difficulty: Option<&str>,
    category: Option<&str>,
    company: Option<&str>,
) -> Option<(Difficulty, String, Option<String>)> {
    let difficulty = Difficulty::parse(difficulty?)?;
    let category = category.map(str::trim).filter(|c| !c.is_empty())?;
    let company = company.map(str::trim).filter(|c| !c.is_empty()).map(str::to_owned);
    Some((difficulty, category.to_owned(), company))
}
