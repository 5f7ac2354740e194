//! Command handlers - business logic for processing UI events

use crate::app::FormState;
use crate::messages::ui_events::InputMode;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{ActivityKind, SubmissionStatus};
use crate::validate;

impl FormState {
    // ========================
    // Field navigation
    // ========================

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.cursor_position = self.current_input().len();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.cursor_position = self.current_input().len();
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.current_input().len();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        let input = self.current_input_mut();
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
            self.field_edited();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let cursor_pos = self.cursor_position;
            let input = self.current_input_mut();
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
            self.field_edited();
        }
    }

    /// Every value change clears the field's own error and returns the
    /// form to idle; other fields keep their messages.
    fn field_edited(&mut self) {
        self.errors.clear(self.focused_field);
        self.submission_status = SubmissionStatus::Idle;
    }

    // ========================
    // Validation
    // ========================

    /// Run all five field validators unconditionally; true iff all pass.
    /// The previous error set is replaced wholesale, so fields that
    /// became valid lose their stale messages in the same pass.
    pub fn validate(&mut self) -> bool {
        self.errors = validate::validate_fields(&self.fields);
        self.errors.is_clear()
    }

    // ========================
    // Submission
    // ========================

    pub fn prepare_submit(&mut self) -> Option<NetworkCommand> {
        // Re-entrancy guard: a submit while one is in flight is a no-op
        if self.is_submitting {
            return None;
        }

        // The control is disabled after a successful submission
        if self.submission_status == SubmissionStatus::Success {
            return None;
        }

        if !self.validate() {
            return None;
        }

        self.is_submitting = true;
        let id = self.next_id();
        self.pending_request_id = Some(id);
        self.push_activity(ActivityKind::Info, "sending contact request");

        Some(NetworkCommand::SubmitContact {
            id,
            payload: self.fields.to_request(),
        })
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        // Only process if it matches the pending request; a late response
        // for an abandoned submission is discarded
        if self.pending_request_id != Some(response.id()) {
            return;
        }

        match response {
            NetworkResponse::Accepted { status, time_ms, .. } => {
                self.submission_status = SubmissionStatus::Success;
                self.push_activity(
                    ActivityKind::Success,
                    format!("request delivered (HTTP {}, {}ms)", status, time_ms),
                );
            }
            NetworkResponse::Failed { message, time_ms, .. } => {
                self.submission_status = SubmissionStatus::Error;
                self.push_activity(
                    ActivityKind::Error,
                    format!("request failed: {} ({}ms)", message, time_ms),
                );
            }
        }

        // The in-flight flag clears on both branches
        self.is_submitting = false;
        self.pending_request_id = None;
    }

    // ========================
    // Activity log scrolling
    // ========================

    pub fn scroll_up(&mut self) {
        self.activity_scroll = self.activity_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.activity_scroll = self.activity_scroll.saturating_add(1);
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;
    use crate::validate::{
        MSG_COMMENT_REQUIRED, MSG_EMAIL_REQUIRED, MSG_FULL_NAME_REQUIRED, MSG_SUBJECT_REQUIRED,
    };

    fn valid_state() -> FormState {
        let mut state = FormState::new();
        state.fields.full_name = "Jane Doe".into();
        state.fields.email = "jane@x.com".into();
        state.fields.subject = "Hi".into();
        state.fields.comment = "Hello".into();
        state.fields.phone = String::new();
        state
    }

    fn type_str(state: &mut FormState, text: &str) {
        for c in text.chars() {
            state.enter_char(c);
        }
    }

    #[test]
    fn test_edit_clears_field_error_and_resets_status() {
        let mut state = FormState::new();
        state.validate();
        assert!(state.errors.get(Field::FullName).is_some());
        state.submission_status = SubmissionStatus::Error;

        state.focused_field = Field::FullName;
        state.cursor_position = 0;
        state.enter_char('J');

        assert_eq!(state.errors.get(Field::FullName), None);
        assert_eq!(state.submission_status, SubmissionStatus::Idle);
        // Other fields keep their messages
        assert!(state.errors.get(Field::Email).is_some());
        assert!(state.errors.get(Field::Subject).is_some());
    }

    #[test]
    fn test_backspace_clears_field_error() {
        let mut state = valid_state();
        state.fields.email = "jane@x".into();
        state.validate();
        assert!(state.errors.get(Field::Email).is_some());

        state.focused_field = Field::Email;
        state.cursor_position = state.current_input().len();
        state.delete_char();

        assert_eq!(state.errors.get(Field::Email), None);
        assert_eq!(state.submission_status, SubmissionStatus::Idle);
    }

    #[test]
    fn test_cursor_movement_does_not_clear_errors() {
        let mut state = FormState::new();
        state.validate();
        state.submission_status = SubmissionStatus::Error;

        state.focused_field = Field::FullName;
        state.move_cursor_left();
        state.move_cursor_right();

        assert!(state.errors.get(Field::FullName).is_some());
        assert_eq!(state.submission_status, SubmissionStatus::Error);
    }

    #[test]
    fn test_validate_all_empty_scenario() {
        let mut state = FormState::new();
        assert!(!state.validate());
        assert_eq!(
            state.errors.full_name.as_deref(),
            Some(MSG_FULL_NAME_REQUIRED)
        );
        assert_eq!(state.errors.email.as_deref(), Some(MSG_EMAIL_REQUIRED));
        assert_eq!(state.errors.subject.as_deref(), Some(MSG_SUBJECT_REQUIRED));
        assert_eq!(state.errors.comment.as_deref(), Some(MSG_COMMENT_REQUIRED));
        assert_eq!(state.errors.phone, None);
    }

    #[test]
    fn test_validate_replaces_stale_errors() {
        let mut state = FormState::new();
        state.validate();
        state.fields = valid_state().fields;
        assert!(state.validate());
        assert!(state.errors.is_clear());
    }

    #[test]
    fn test_submit_happy_path_emits_command() {
        let mut state = valid_state();
        let command = state.prepare_submit();

        match command {
            Some(NetworkCommand::SubmitContact { id, payload }) => {
                assert_eq!(id, 1);
                assert_eq!(payload.full_name, "Jane Doe");
                assert_eq!(payload.email, "jane@x.com");
                assert_eq!(payload.phone, "");
            }
            other => panic!("expected SubmitContact, got {:?}", other),
        }
        assert!(state.is_submitting);
        assert_eq!(state.pending_request_id, Some(1));
    }

    #[test]
    fn test_submit_invalid_makes_no_network_call() {
        let mut state = FormState::new();
        assert!(state.prepare_submit().is_none());
        assert!(!state.is_submitting);
        assert_eq!(state.pending_request_id, None);
        // Errors are now visible
        assert!(!state.errors.is_clear());
    }

    #[test]
    fn test_submit_noop_while_in_flight() {
        let mut state = valid_state();
        assert!(state.prepare_submit().is_some());

        let errors_before = state.errors.clone();
        let pending_before = state.pending_request_id;
        assert!(state.prepare_submit().is_none());
        assert_eq!(state.errors, errors_before);
        assert_eq!(state.pending_request_id, pending_before);
        assert!(state.is_submitting);
    }

    #[test]
    fn test_submit_disabled_after_success() {
        let mut state = valid_state();
        let id = match state.prepare_submit() {
            Some(NetworkCommand::SubmitContact { id, .. }) => id,
            other => panic!("expected SubmitContact, got {:?}", other),
        };
        state.handle_response(NetworkResponse::Accepted {
            id,
            status: 200,
            time_ms: 12,
        });

        assert_eq!(state.submission_status, SubmissionStatus::Success);
        assert!(!state.is_submitting);
        assert!(state.to_render_state().submit_disabled());
        assert!(state.prepare_submit().is_none());

        // Editing a field returns the form to idle, which re-enables sending
        state.focused_field = Field::Comment;
        state.cursor_position = state.current_input().len();
        state.enter_char('!');
        assert_eq!(state.submission_status, SubmissionStatus::Idle);
        assert!(!state.to_render_state().submit_disabled());
        assert!(state.prepare_submit().is_some());
    }

    #[test]
    fn test_failure_keeps_submit_enabled_and_edit_resets() {
        let mut state = valid_state();
        let id = match state.prepare_submit() {
            Some(NetworkCommand::SubmitContact { id, .. }) => id,
            other => panic!("expected SubmitContact, got {:?}", other),
        };
        state.handle_response(NetworkResponse::Failed {
            id,
            message: "connection refused".into(),
            time_ms: 3,
        });

        assert_eq!(state.submission_status, SubmissionStatus::Error);
        assert!(!state.is_submitting);
        assert!(!state.to_render_state().submit_disabled());

        // Editing any field returns the form to idle
        state.focused_field = Field::Subject;
        state.cursor_position = state.current_input().len();
        state.enter_char('!');
        assert_eq!(state.submission_status, SubmissionStatus::Idle);

        // And a fresh submit is possible
        assert!(state.prepare_submit().is_some());
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut state = valid_state();
        assert!(state.prepare_submit().is_some());

        state.handle_response(NetworkResponse::Accepted {
            id: 999,
            status: 200,
            time_ms: 1,
        });

        assert!(state.is_submitting);
        assert_eq!(state.submission_status, SubmissionStatus::Idle);
    }

    #[test]
    fn test_response_after_reset_discarded() {
        let mut state = valid_state();
        let id = match state.prepare_submit() {
            Some(NetworkCommand::SubmitContact { id, .. }) => id,
            other => panic!("expected SubmitContact, got {:?}", other),
        };

        // Simulate teardown of the pending submission
        state.pending_request_id = None;
        state.is_submitting = false;

        state.handle_response(NetworkResponse::Failed {
            id,
            message: "late".into(),
            time_ms: 1,
        });
        assert_eq!(state.submission_status, SubmissionStatus::Idle);
    }

    #[test]
    fn test_typing_through_the_form_then_submitting() {
        let mut state = FormState::new();
        state.start_editing();
        type_str(&mut state, "Jane Doe");
        state.next_field();
        type_str(&mut state, "jane@x.com");
        state.next_field();
        type_str(&mut state, "Hi");
        state.next_field();
        type_str(&mut state, "Hello");
        state.stop_editing();

        assert!(state.prepare_submit().is_some());
        assert!(state.errors.is_clear());
    }

    #[test]
    fn test_invalid_phone_blocks_submit_regardless_of_other_fields() {
        let mut state = valid_state();
        state.fields.phone = "not-a-number".into();
        assert!(state.prepare_submit().is_none());
        assert!(state.errors.phone.is_some());
        assert_eq!(state.errors.full_name, None);
    }
}
