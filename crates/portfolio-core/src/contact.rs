//! Contact-form input and its validation rules

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ValidationError;

/// A contact submission as received from the form.
///
/// Decoding enforces the shape (three string fields, extra fields ignored).
/// [`NewContactMessage::validated`] only rejects a blank name or message;
/// the email is any string. Size is bounded by the request body limit.
/// Values are stored exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewContactMessage {
    #[validate(custom = "not_blank")]
    pub name: String,

    pub email: String,

    #[validate(custom = "not_blank")]
    pub message: String,
}

impl NewContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Run field rules, handing the input back on success.
    pub fn validated(self) -> Result<Self, ValidationError> {
        self.validate()?;
        Ok(self)
    }

    /// Decode and validate an arbitrary JSON value.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ValidationError> {
        let input: Self = serde_json::from_value(value)
            .map_err(|e| ValidationError::malformed(e.to_string()))?;
        input.validated()
    }
}

fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}
