//! Message types for inter-layer communication in the actor-based architecture.
//!
//! Key events become [`UiEvent`]s, submissions travel as [`NetworkCommand`]s
//! and come back as [`NetworkResponse`]s, and the UI draws [`RenderState`] snapshots.

pub mod ui_events;
pub mod network;
pub mod render;

pub use ui_events::UiEvent;
pub use network::{NetworkCommand, NetworkResponse};
pub use render::RenderState;
