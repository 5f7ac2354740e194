//! Network messages - communication between App and Network layers

use crate::models::ContactRequest;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Deliver a validated contact request to the configured endpoint
    SubmitContact {
        id: u64,
        payload: ContactRequest,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// The endpoint accepted the submission (2xx)
    Accepted {
        id: u64,
        status: u16,
        time_ms: u64,
    },
    /// The submission failed (transport error or non-2xx status)
    Failed {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Accepted { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }
}
