//! Portal API client.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::USER_AGENT;
use tracing::debug;

use desk_model::{MessageDraft, UserId, UserRecord, UserSummary};

use crate::error::{ApiError, Result};

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the portal's JSON API.
///
/// Cheap to clone; clones share the underlying connection pool, which is how
/// the GUI hands a client to each background task.
#[derive(Debug, Clone)]
pub struct PortalClient {
    /// Base URL without a trailing slash.
    base_url: String,
    http: Client,
}

impl PortalClient {
    /// Create a client for the portal at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { base_url, http })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn user_agent() -> String {
        format!("responder-desk/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Fetch a single user's detail record by identifier.
    ///
    /// The identifier is passed through opaquely; whether it names an
    /// existing user is the backend's call, surfaced as a non-success status.
    pub async fn user(&self, id: &UserId) -> Result<UserRecord> {
        let path = format!("/api/user/{id}");
        debug!(user_id = %id, "fetching user record");

        let response = self
            .http
            .get(self.endpoint(&path))
            .header(USER_AGENT, Self::user_agent())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
                endpoint: path,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the directory roster.
    pub async fn users(&self) -> Result<Vec<UserSummary>> {
        let path = "/api/users";
        debug!("fetching user roster");

        let response = self
            .http
            .get(self.endpoint(path))
            .header(USER_AGENT, Self::user_agent())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
                endpoint: path.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Submit a composed message.
    pub async fn send_message(&self, draft: &MessageDraft) -> Result<()> {
        let path = "/api/messages";
        debug!(receiver = %draft.receiver_id, "sending message");

        let response = self
            .http
            .post(self.endpoint(path))
            .header(USER_AGENT, Self::user_agent())
            .json(draft)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
                endpoint: path.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = PortalClient::new("http://localhost:8000/").expect("client");
        assert_eq!(
            client.endpoint("/api/users"),
            "http://localhost:8000/api/users"
        );

        let bare = PortalClient::new("http://localhost:8000").expect("client");
        assert_eq!(
            bare.endpoint("/api/user/7"),
            "http://localhost:8000/api/user/7"
        );
    }

    #[tokio::test]
    async fn unreachable_server_maps_to_network_error() {
        // Port 1 on loopback refuses the connection immediately.
        let client = PortalClient::new("http://127.0.0.1:1").expect("client");
        let err = client
            .user(&UserId::from("7"))
            .await
            .expect_err("expected failure");
        assert!(matches!(err, ApiError::Network(_)));
    }
}
