//! Home page "start a practice interview" form.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use prep::source::InitializeRequest;

pub const INTERVIEW_TYPES: [(&str, &str); 2] = [("behavioral", "Behavioral"), ("technical", "Technical")];
pub const DURATIONS: [(&str, &str); 3] =
    [("short", "Short (15 min)"), ("medium", "Medium (30 min)"), ("long", "Long (45 min)")];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StartForm {
    pub request: InitializeRequest,
    pub submitting: bool,
}

impl StartForm {
    /// Job description and resume are both required.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.request.job_description.trim().is_empty() && !self.request.resume.trim().is_empty()
    }

    /// Trimmed request to send, or `None` while incomplete or in flight.
    pub fn begin_submit(&mut self) -> Option<InitializeRequest> {
        if self.submitting || !self.is_complete() {
            return None;
        }
        self.submitting = true;
        let mut request = self.request.clone();
        request.job_description = request.job_description.trim().to_owned();
        request.resume = request.resume.trim().to_owned();
        Some(request)
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}
