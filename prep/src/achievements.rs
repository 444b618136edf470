//! Profile badges derived from the coding and interview summaries.

#[cfg(test)]
#[path = "achievements_test.rs"]
mod achievements_test;

use serde::Serialize;

use crate::stats::{CodingSummary, InterviewSummary};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AchievementKind {
    ProblemSolver,
    InterviewMaster,
    StreakChampion,
    PerfectScore,
}

impl AchievementKind {
    pub const ALL: [Self; 4] = [Self::ProblemSolver, Self::InterviewMaster, Self::StreakChampion, Self::PerfectScore];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::ProblemSolver => "Problem Solver",
            Self::InterviewMaster => "Interview Master",
            Self::StreakChampion => "Streak Champion",
            Self::PerfectScore => "Perfect Score",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::ProblemSolver => "Solved 50+ coding problems",
            Self::InterviewMaster => "Completed 10 mock interviews",
            Self::StreakChampion => "Maintained 30-day streak",
            Self::PerfectScore => "Achieved 100% in an interview",
        }
    }

    /// Value at which the badge is earned.
    #[must_use]
    pub fn target(self) -> u32 {
        match self {
            Self::ProblemSolver => 50,
            Self::InterviewMaster => 10,
            Self::StreakChampion => 30,
            Self::PerfectScore => 100,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub kind: AchievementKind,
    pub earned: bool,
    /// Raw measured value (problems solved, interviews, streak days, score).
    pub current: u32,
    /// Percent towards [`AchievementKind::target`], rounded down, 0-100.
    pub progress: u32,
}

impl Achievement {
    fn measure(kind: AchievementKind, current: u32) -> Self {
        let target = kind.target();
        let progress = u32::try_from(u64::from(current.min(target)) * 100 / u64::from(target)).unwrap_or(100);
        Self { kind, earned: current >= target, current, progress }
    }

    /// Counter shown under the badge, e.g. `25/50`. Capped at the target.
    #[must_use]
    pub fn label(&self) -> String {
        let target = self.kind.target();
        format!("{}/{target}", self.current.min(target))
    }
}

/// All badges in display order.
#[must_use]
pub fn achievements(coding: &CodingSummary, interviews: &InterviewSummary) -> Vec<Achievement> {
    let streak = coding.streak.max(interviews.streak);
    AchievementKind::ALL
        .into_iter()
        .map(|kind| {
            let current = match kind {
                AchievementKind::ProblemSolver => coding.solved,
                AchievementKind::InterviewMaster => interviews.total,
                AchievementKind::StreakChampion => streak,
                AchievementKind::PerfectScore => u32::from(interviews.best_score),
            };
            Achievement::measure(kind, current)
        })
        .collect()
}
