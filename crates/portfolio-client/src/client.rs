//! HTTP client for the portfolio API

use crate::reconcile::reconcile;
use portfolio_core::{
    ContactAck, Education, ErrorBody, Experience, NewContactMessage, PortfolioData, Profile,
    Project, Skill, CONTACT_PATH, PORTFOLIO_PATH,
};
use serde::Deserialize;
use std::time::Duration;

/// Shown when a failed submission carries no message of its own
pub const DEFAULT_SUBMIT_ERROR: &str = "Failed to send message";

/// Portfolio API client
#[derive(Debug, Clone)]
pub struct PortfolioClient {
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl PortfolioClient {
    /// Create new client
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch the portfolio aggregate.
    ///
    /// The profile is optional in the payload so that a response without
    /// one can be told apart from an undecodable body.
    pub async fn fetch_portfolio(&self) -> Result<PortfolioPayload, ClientError> {
        let url = format!("{}{}", self.base_url, PORTFOLIO_PATH);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ClientError::Parse(e.to_string()))
        } else {
            Err(ClientError::from_failed_response(response).await)
        }
    }

    /// Fetch and reconcile: always yields something to render.
    pub async fn load_portfolio(&self) -> PortfolioData {
        let result = self.fetch_portfolio().await;
        match &result {
            Err(e) => {
                tracing::warn!(error = %e, "Portfolio unavailable, using fallback data");
            }
            Ok(payload) if payload.profile.is_none() => {
                tracing::warn!("Portfolio has no profile, using fallback data");
            }
            Ok(_) => {}
        }
        reconcile(result)
    }

    /// Submit a contact message
    pub async fn submit_contact(
        &self,
        input: &NewContactMessage,
    ) -> Result<ContactAck, ClientError> {
        let url = format!("{}{}", self.base_url, CONTACT_PATH);

        let response = self
            .client
            .post(&url)
            .json(input)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ClientError::Parse(e.to_string()))
        } else {
            Err(ClientError::from_failed_response(response).await)
        }
    }
}

/// Aggregate as received, before reconciliation
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioPayload {
    #[serde(default)]
    pub profile: Option<Profile>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

/// Client errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Server error {status}: {}", message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },
}

impl ClientError {
    async fn from_failed_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.message)
            .filter(|message| !message.is_empty());
        ClientError::Server { status, message }
    }

    /// Text to show the visitor: the API's own message when it sent one
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            _ => DEFAULT_SUBMIT_ERROR.to_string(),
        }
    }
}
