//! Network layer - contact request delivery over HTTP
//!
//! The Network actor receives submission commands and sends back responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
