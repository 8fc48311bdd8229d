//! Inquiry form stub.
//!
//! Submitting never leaves the page: the default submission is suppressed,
//! the visitor gets an acknowledgment, and the form is cleared. Delivering
//! the inquiry is handled elsewhere, so the acknowledgment is shown
//! regardless of outcome.

#[derive(Debug, Clone)]
pub struct ContactForm {
    acknowledgment: String,
}

impl ContactForm {
    pub fn new(acknowledgment: impl Into<String>) -> Self {
        Self {
            acknowledgment: acknowledgment.into(),
        }
    }

    /// Accept a submission and return the message to show the visitor.
    pub fn submit(&self) -> &str {
        tracing::debug!("inquiry acknowledged");
        &self.acknowledgment
    }
}
