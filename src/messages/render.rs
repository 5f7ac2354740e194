//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::InputMode;
use crate::models::{ActivityEntry, Field, FieldErrors, FormFields, SubmissionStatus};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Form data
    pub fields: FormFields,
    pub errors: FieldErrors,

    // UI state
    pub focused_field: Field,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Submission
    pub submission_status: SubmissionStatus,
    pub is_submitting: bool,

    // Activity log
    pub activity: Vec<ActivityEntry>,
    pub activity_scroll: u16,

    // Popups
    pub show_help: bool,
}

impl RenderState {
    /// Label of the submit control, derived from submission state
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            "Sending..."
        } else if self.submission_status == SubmissionStatus::Success {
            "Sent"
        } else {
            "Send request"
        }
    }

    /// The submit control is disabled only after a successful submission
    pub fn submit_disabled(&self) -> bool {
        self.submission_status == SubmissionStatus::Success
    }

    /// Form-level banner to show under the submit control, if any
    pub fn banner(&self) -> Option<(&'static str, SubmissionStatus)> {
        match self.submission_status {
            SubmissionStatus::Success => {
                Some(("Request sent successfully!", SubmissionStatus::Success))
            }
            SubmissionStatus::Error => Some((
                "Request failed. Please try again.",
                SubmissionStatus::Error,
            )),
            SubmissionStatus::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_label_derivation() {
        let mut state = RenderState::default();
        assert_eq!(state.submit_label(), "Send request");

        state.is_submitting = true;
        assert_eq!(state.submit_label(), "Sending...");

        state.is_submitting = false;
        state.submission_status = SubmissionStatus::Success;
        assert_eq!(state.submit_label(), "Sent");

        state.submission_status = SubmissionStatus::Error;
        assert_eq!(state.submit_label(), "Send request");
    }

    #[test]
    fn test_submit_disabled_only_after_success() {
        let mut state = RenderState::default();
        assert!(!state.submit_disabled());

        state.submission_status = SubmissionStatus::Error;
        assert!(!state.submit_disabled());

        state.submission_status = SubmissionStatus::Success;
        assert!(state.submit_disabled());
    }

    #[test]
    fn test_banners_mutually_exclusive() {
        let mut state = RenderState::default();
        assert!(state.banner().is_none());

        state.submission_status = SubmissionStatus::Success;
        let (message, status) = state.banner().unwrap();
        assert_eq!(message, "Request sent successfully!");
        assert_eq!(status, SubmissionStatus::Success);

        state.submission_status = SubmissionStatus::Error;
        let (message, status) = state.banner().unwrap();
        assert_eq!(message, "Request failed. Please try again.");
        assert_eq!(status, SubmissionStatus::Error);
    }
}
