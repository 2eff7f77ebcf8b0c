//! One HTTP GET against the target, classified into an [`Outcome`].

use reqwest::Client;

/// Terminal state of a single request task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response was fully received. Status codes are not inspected; a
    /// `500` counts the same as a `200`.
    Success,
    /// The request failed before the response was fully received: connect
    /// error, protocol error, or a connection dropped mid-body.
    ClientError,
    /// The request exceeded the per-request deadline and was cancelled.
    TimedOut,
}

impl Outcome {
    /// Whether this outcome counts towards the success ratio.
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// Performs one GET and drains the response body.
///
/// A single failed attempt is final; there are no retries. The per-request
/// deadline is enforced by the dispatcher, not here.
pub async fn fetch(client: &Client, url: &str) -> Outcome {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(err) => {
            tracing::debug!("request failed: {err}");
            return Outcome::ClientError;
        }
    };
    match response.bytes().await {
        Ok(_) => Outcome::Success,
        Err(err) => {
            tracing::debug!("failed to read response body: {err}");
            Outcome::ClientError
        }
    }
}
