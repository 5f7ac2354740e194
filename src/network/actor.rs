//! Network actor - runs contact submissions in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::config::Config;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, submit_contact};

/// Network actor that processes submission commands
pub struct NetworkActor {
    client: reqwest::Client,
    config: Config,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(response_tx: mpsc::UnboundedSender<NetworkResponse>, config: Config) -> Self {
        NetworkActor {
            client: create_client(),
            config,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::SubmitContact { id, payload }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let config = self.config.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, url = %config.api_url, "Submitting contact request");
                                let result = submit_contact(&client, &config, payload, id).await;
                                match &result {
                                    NetworkResponse::Accepted { status, time_ms, .. } => {
                                        tracing::info!(id, status = *status, time_ms = *time_ms, "Contact request delivered");
                                    }
                                    NetworkResponse::Failed { message, time_ms, .. } => {
                                        tracing::warn!(id, %message, time_ms = *time_ms, "Contact request failed");
                                    }
                                }
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {
                    // Task completed - cleanup is handled by the tasks themselves
                }
            }
        }
    }
}
