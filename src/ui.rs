use ratatui::prelude::*;

use crate::models::{ActivityKind, SubmissionStatus};

/// Title spans for a form field, with the mandatory marker in red
pub fn field_title(label: &str, is_mandatory: bool) -> Line<'static> {
    let mut spans = vec![Span::raw(format!(" {}", label))];
    if is_mandatory {
        spans.push(Span::styled("*", Style::default().fg(Color::Red)));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

/// Border style for a field given focus and edit state
pub fn field_border_style(is_focused: bool, is_editing: bool) -> Style {
    if is_focused && is_editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

/// Style of the submit control label
pub fn submit_style(disabled: bool, is_submitting: bool) -> Style {
    if disabled {
        Style::default().fg(Color::DarkGray)
    } else if is_submitting {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::Cyan).bold()
    }
}

/// Color of the form-level banner
pub fn banner_color(status: SubmissionStatus) -> Color {
    match status {
        SubmissionStatus::Success => Color::Green,
        SubmissionStatus::Error => Color::Red,
        SubmissionStatus::Idle => Color::Reset,
    }
}

/// Color and prefix for an activity log entry
pub fn activity_decor(kind: ActivityKind) -> (Color, &'static str) {
    match kind {
        ActivityKind::Info => (Color::Yellow, "[*] "),
        ActivityKind::Success => (Color::Green, "[+] "),
        ActivityKind::Error => (Color::Red, "[!] "),
    }
}
