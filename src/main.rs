//! Reachout TUI - terminal contact form
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - form state machine processing events
//! - Network Layer (Tokio) - async request delivery

mod models;
mod config;
mod constants;
mod validate;
mod ui;
mod messages;
mod app;
mod network;

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;

use app::AppActor;
use config::Config;
use messages::ui_events::{key_to_ui_event, InputMode};
use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use models::Field;
use network::NetworkActor;

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", constants::LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Resolve endpoint configuration before the terminal goes raw,
    // so a missing URL or key prints a readable error
    let config = Config::load()?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(net_resp_tx, config);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) =
                    key_to_ui_event(key, current_state.input_mode, current_state.show_help)
                {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Header
            Constraint::Min(0),     // Form content
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    draw_header(f, state, main_chunks[0]);
    draw_form(f, state, main_chunks[1]);
    draw_status_bar(f, state, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_header(f: &mut Frame, state: &RenderState, area: Rect) {
    let sending = if state.is_submitting { " [...]" } else { "" };
    let header = Line::from(vec![
        Span::styled(
            " Reachout ",
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::styled(
            format!(" contact request{}", sending),
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(Paragraph::new(header), area);
}

fn draw_form(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Full name
            Constraint::Length(3),  // Email
            Constraint::Length(3),  // Subject
            Constraint::Length(3),  // Comment
            Constraint::Length(3),  // Phone
            Constraint::Length(3),  // Submit + banner
            Constraint::Min(4),     // Activity log
        ])
        .split(area);

    for (field, chunk) in Field::ALL.iter().zip(chunks.iter()) {
        draw_field(f, state, *field, *chunk);
    }

    draw_submit_row(f, state, chunks[5]);
    draw_activity(f, state, chunks[6]);
}

fn draw_field(f: &mut Frame, state: &RenderState, field: Field, area: Rect) {
    let is_focused = state.focused_field == field;
    let is_editing = is_focused && state.input_mode == InputMode::Editing;

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(ui::field_border_style(
            is_focused,
            state.input_mode == InputMode::Editing,
        ))
        .title(ui::field_title(field.label(), field.is_mandatory()));

    // Inline validation message, cleared again on the next edit
    if let Some(message) = state.errors.get(field) {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", message),
            Style::default().fg(Color::Red),
        )));
    }

    let value = Paragraph::new(state.fields.value(field)).block(block);
    f.render_widget(value, area);

    // Cursor
    if is_editing {
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + state.cursor_position as u16 + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_submit_row(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(18), Constraint::Min(0)])
        .split(area);

    let disabled = state.submit_disabled();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        })
        .title(" [s] ");
    let button = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", state.submit_label()),
        ui::submit_style(disabled, state.is_submitting),
    )))
    .block(block);
    f.render_widget(button, chunks[0]);

    if let Some((message, status)) = state.banner() {
        let banner = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                format!(" {}", message),
                Style::default().fg(ui::banner_color(status)).bold(),
            )),
        ]);
        f.render_widget(banner, chunks[1]);
    }
}

fn draw_activity(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Activity (PgUp/PgDn scroll) ");

    let mut lines: Vec<Line> = Vec::new();
    for entry in &state.activity {
        let (color, prefix) = ui::activity_decor(entry.kind);
        lines.push(Line::from(vec![
            Span::styled(
                entry.timestamp.format("%H:%M:%S ").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("{}{}", prefix, entry.message),
                Style::default().fg(color),
            ),
        ]));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No activity yet. Fill in the form and press 's' to send.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let activity = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.activity_scroll, 0));
    f.render_widget(activity, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_submitting {
        " Sending... "
    } else if state.input_mode == InputMode::Editing {
        " ESC:stop editing | arrows:move | Tab:next field "
    } else {
        " Tab:field | e:edit | s:send | ?:help | q:quit "
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 REACHOUT TUI - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Next / previous field
   ↑ / ↓              Previous / next field

 EDITING
   e / Enter          Edit focused field
   Esc                Stop editing
   ← / →              Move cursor

 FORM
   s                  Send request
   PgUp / PgDn        Scroll activity log

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Fields marked * are required. Validation runs
 when you send, not while you type.

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
