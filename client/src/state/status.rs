//! Interview status lookup page.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use prep::source::{InitializeResponse, InterviewContext, InterviewStatus};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusState {
    pub interview_id: String,
    pub room_name: String,
    pub status: Option<InterviewStatus>,
    pub context: Option<InterviewContext>,
    pub loading: bool,
}

impl StatusState {
    /// Start with the id from the page URL, if any.
    #[must_use]
    pub fn with_id(interview_id: Option<&str>) -> Self {
        Self { interview_id: interview_id.map(str::trim).unwrap_or_default().to_owned(), ..Self::default() }
    }

    /// Fill blank lookup fields from the last initialized interview. Fields
    /// the user or the URL already set are kept.
    pub fn prefill(&mut self, handle: &InitializeResponse) {
        if self.interview_id.trim().is_empty() {
            self.interview_id.clone_from(&handle.interview_id);
        }
        if self.room_name.trim().is_empty() {
            self.room_name.clone_from(&handle.room_name);
        }
    }

    /// Trimmed id to look up, or `None` when blank or already loading.
    pub fn begin_status(&mut self) -> Option<String> {
        begin(&mut self.loading, &self.interview_id)
    }

    /// Trimmed room to look up, or `None` when blank or already loading.
    pub fn begin_context(&mut self) -> Option<String> {
        begin(&mut self.loading, &self.room_name)
    }

    pub fn status_loaded(&mut self, status: InterviewStatus) {
        self.loading = false;
        if self.room_name.trim().is_empty() {
            self.room_name.clone_from(&status.room_name);
        }
        self.status = Some(status);
    }

    pub fn context_loaded(&mut self, context: InterviewContext) {
        self.loading = false;
        self.context = Some(context);
    }
}

fn begin(loading: &mut bool, field: &str) -> Option<String> {
    let value = field.trim();
    if *loading || value.is_empty() {
        return None;
    }
    *loading = true;
    Some(value.to_owned())
}
