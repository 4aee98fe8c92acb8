//! Contact form state

use crate::client::PortfolioClient;
use portfolio_core::NewContactMessage;

pub const SENT_TITLE: &str = "Message sent!";
pub const SENT_DESCRIPTION: &str = "Thanks for reaching out. I'll get back to you soon.";

/// Outcome of a submit, as shown to the visitor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitFeedback {
    Sent { title: String, description: String },
    Failed { message: String },
}

impl SubmitFeedback {
    fn sent() -> Self {
        SubmitFeedback::Sent {
            title: SENT_TITLE.to_string(),
            description: SENT_DESCRIPTION.to_string(),
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitFeedback::Sent { .. })
    }
}

/// Fields of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
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

    pub fn to_input(&self) -> NewContactMessage {
        NewContactMessage::new(&self.name, &self.email, &self.message)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Submit the form. Fields are cleared only when the API accepts it.
    pub async fn submit(&mut self, client: &PortfolioClient) -> SubmitFeedback {
        match client.submit_contact(&self.to_input()).await {
            Ok(_) => {
                self.clear();
                SubmitFeedback::sent()
            }
            Err(e) => {
                tracing::debug!(error = %e, "Contact submission failed");
                SubmitFeedback::Failed {
                    message: e.user_message(),
                }
            }
        }
    }
}
