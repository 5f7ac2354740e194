//! # Reachout TUI
//!
//! A minimal terminal-based contact form: fill in a request, validate it,
//! and deliver it to a configured HTTP endpoint without leaving the terminal.
//!
//! ## Features
//! - Five-field contact form (full name, email, subject, comment, phone)
//! - Per-field validation with inline error messages, run on submit
//! - Single JSON POST with API-key header
//! - Idle / sending / success / error submission states
//! - Activity log of submission attempts
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (Form state machine)
//! - Network Layer (Tokio runtime)

pub mod models;
pub mod config;
pub mod constants;
pub mod validate;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use models::{ContactRequest, Field, FieldErrors, FormFields, SubmissionStatus};
pub use config::Config;
pub use validate::{is_valid_email, is_valid_phone_number, validate_fields};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use app::{AppActor, FormState};
pub use network::NetworkActor;
