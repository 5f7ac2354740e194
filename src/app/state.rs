//! Form state - pure data structure with no I/O logic

use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use crate::models::{ActivityEntry, ActivityKind, Field, FieldErrors, FormFields, SubmissionStatus};

/// Main application state - pure data, no I/O
pub struct FormState {
    // Form data
    pub fields: FormFields,
    pub errors: FieldErrors,

    // Submission lifecycle
    pub submission_status: SubmissionStatus,
    pub is_submitting: bool,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,

    // UI state
    pub focused_field: Field,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Activity log
    pub activity: Vec<ActivityEntry>,
    pub activity_scroll: u16,

    // Popups
    pub show_help: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        FormState {
            fields: FormFields::default(),
            errors: FieldErrors::default(),
            submission_status: SubmissionStatus::Idle,
            is_submitting: false,
            next_request_id: 1,
            pending_request_id: None,
            focused_field: Field::FullName,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            activity: Vec::new(),
            activity_scroll: 0,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Get the focused field's content
    pub fn current_input(&self) -> &str {
        self.fields.value(self.focused_field)
    }

    /// Get mutable reference to the focused field's content
    pub fn current_input_mut(&mut self) -> &mut String {
        self.fields.value_mut(self.focused_field)
    }

    /// Append a line to the activity log
    pub fn push_activity(&mut self, kind: ActivityKind, message: impl Into<String>) {
        self.activity.push(ActivityEntry::new(kind, message));
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            fields: self.fields.clone(),
            errors: self.errors.clone(),
            focused_field: self.focused_field,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            submission_status: self.submission_status,
            is_submitting: self.is_submitting,
            activity: self.activity.clone(),
            activity_scroll: self.activity_scroll,
            show_help: self.show_help,
        }
    }
}
