//! "Share your experience" modal form.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use time::OffsetDateTime;

use prep::{Feedback, FeedbackError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    /// 0 until a star is picked.
    pub rating: u8,
    pub name: String,
    pub role: String,
    pub content: String,
    pub error: Option<String>,
}

impl FeedbackForm {
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.rating > 0 && [&self.name, &self.role, &self.content].iter().all(|f| !f.trim().is_empty())
    }

    /// Validate into a [`Feedback`]. On failure the message is kept for display.
    ///
    /// # Errors
    ///
    /// Whatever [`Feedback::new`] rejects.
    pub fn submit(&mut self, now: OffsetDateTime) -> Result<Feedback, FeedbackError> {
        match Feedback::new(&self.name, &self.role, &self.content, self.rating, now) {
            Ok(feedback) => {
                *self = Self::default();
                Ok(feedback)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
