//! Contact message delivery.
//!
//! Client-side (csr): `HttpSubmitter` posts JSON via `gloo-net`;
//! `SimulatedSubmitter` waits on a `gloo-timers` future and acknowledges.
//! Native builds resolve immediately (simulated) or report `Unavailable`
//! (HTTP) since there is no browser fetch to drive.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `SubmitError` values; the form turns them into a
//! transient banner and keeps the user's input for a retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use crate::config::ContactConfig;

/// Payload handed to the submitter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("endpoint responded with status {0}")]
    Status(u16),

    /// No transport exists in this build.
    #[error("submission unavailable")]
    Unavailable,
}

impl SubmitError {
    /// Banner text for the form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status(status) if *status == 429 => {
                "Too many messages right now. Please try again in a minute.".to_owned()
            }
            _ => "Sorry, your message could not be sent. Please try again.".to_owned(),
        }
    }
}

/// Opaque asynchronous acknowledgment service for contact messages.
pub trait ContactSubmitter {
    fn submit(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Acknowledges every message after a fixed delay.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedSubmitter {
    pub delay_ms: u32,
}

impl ContactSubmitter for SimulatedSubmitter {
    fn submit(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let delay_ms = self.delay_ms;
        Box::pin(async move {
            #[cfg(feature = "csr")]
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            #[cfg(not(feature = "csr"))]
            let _ = delay_ms;
            log::info!("simulated contact submission from {}", message.email);
            Ok(())
        })
    }
}

/// POSTs the message as JSON to a fixed endpoint.
#[derive(Clone, Debug)]
pub struct HttpSubmitter {
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ContactSubmitter for HttpSubmitter {
    fn submit(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let endpoint = self.endpoint.clone();
        Box::pin(async move { post_json(&endpoint, &message).await })
    }
}

async fn post_json(endpoint: &str, message: &ContactMessage) -> Result<(), SubmitError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(message)
            .map_err(|e| SubmitError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(SubmitError::Status(resp.status()))
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, message);
        Err(SubmitError::Unavailable)
    }
}

/// Pick the transport for `config`: HTTP when an endpoint is set, otherwise
/// the simulated acknowledgment.
pub fn submitter_for(config: &ContactConfig) -> Rc<dyn ContactSubmitter> {
    match config.endpoint.as_deref() {
        Some(endpoint) => Rc::new(HttpSubmitter::new(endpoint)),
        None => Rc::new(SimulatedSubmitter {
            delay_ms: config.simulated_delay_ms,
        }),
    }
}
