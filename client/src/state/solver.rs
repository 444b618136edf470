//! Problem solver page state: generated statement, editor buffer, test run.
//!
//! DESIGN
//! ======
//! `Generating -> Ready` once the simulated generation delay elapses, or
//! `Missing` when the URL does not name a difficulty and category. A run is
//! `begin_run` followed by `finish_run` after the simulated execution delay;
//! a second run cannot start while one is pending.

#[cfg(test)]
#[path = "solver_test.rs"]
mod solver_test;

use prep::{ProblemDetail, TestResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SolverPhase {
    #[default]
    Generating,
    Ready,
    Missing,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolverState {
    pub phase: SolverPhase,
    pub problem: Option<ProblemDetail>,
    pub code: String,
    pub running: bool,
    pub results: Vec<TestResult>,
    pub hints_visible: bool,
    /// Number of hints revealed so far.
    pub hints_revealed: usize,
}

impl SolverState {
    #[must_use]
    pub fn missing() -> Self {
        Self { phase: SolverPhase::Missing, ..Self::default() }
    }

    /// Install a generated problem and seed the editor with its starter code.
    pub fn loaded(&mut self, problem: ProblemDetail) {
        self.code.clone_from(&problem.starter_code);
        self.problem = Some(problem);
        self.phase = SolverPhase::Ready;
        self.results.clear();
        self.hints_revealed = 0;
    }

    /// Restore the starter code and clear results.
    pub fn reset_code(&mut self) {
        if let Some(problem) = &self.problem {
            self.code.clone_from(&problem.starter_code);
            self.results.clear();
        }
    }

    pub fn toggle_hints(&mut self) {
        self.hints_visible = !self.hints_visible;
        if self.hints_visible && self.hints_revealed == 0 {
            self.hints_revealed = 1;
        }
    }

    /// Reveal one more hint, up to the number available.
    pub fn next_hint(&mut self) {
        let available = self.problem.as_ref().map_or(0, |p| p.hints.len());
        self.hints_revealed = (self.hints_revealed + 1).min(available);
    }

    #[must_use]
    pub fn can_run(&self) -> bool {
        self.phase == SolverPhase::Ready && !self.running
    }

    /// Mark a run as pending. Returns `false` when a run cannot start.
    pub fn begin_run(&mut self) -> bool {
        if !self.can_run() {
            return false;
        }
        self.running = true;
        self.results.clear();
        true
    }

    /// Store results of the pending run and report whether all passed.
    pub fn finish_run(&mut self, results: Vec<TestResult>) -> bool {
        self.running = false;
        self.results = results;
        self.all_passed()
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        !self.results.is_empty() && self.results.iter().all(|r| r.passed)
    }

    /// `"2/3 passed"`.
    #[must_use]
    pub fn summary(&self) -> String {
        let passed = self.results.iter().filter(|r| r.passed).count();
        format!("{passed}/{} passed", self.results.len())
    }
}
