//! HTTP contract shared by the server and its clients

use serde::{Deserialize, Serialize};

/// `GET` the portfolio aggregate
pub const PORTFOLIO_PATH: &str = "/api/portfolio";

/// `POST` a contact submission
pub const CONTACT_PATH: &str = "/api/contact";

/// Body returned for an accepted contact submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAck {
    pub success: bool,
}

impl ContactAck {
    pub fn accepted() -> Self {
        Self { success: true }
    }
}

/// Body returned with every 4xx/5xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
