//! Portfolio Client
//!
//! The presentation side of the portfolio API:
//!
//! - [`PortfolioClient`]: typed calls to `GET /api/portfolio` and
//!   `POST /api/contact`
//! - [`reconcile`]: turns a fetch result into display data, falling back to
//!   [`fallback_portfolio`] on any failure
//! - [`ContactForm`]: form fields plus submit feedback
//!
//! Read failures never reach the visitor; submit failures are shown as
//! returned by the API.

pub mod client;
pub mod fallback;
pub mod form;
pub mod reconcile;

pub use client::{ClientError, PortfolioClient, PortfolioPayload, DEFAULT_SUBMIT_ERROR};
pub use fallback::fallback_portfolio;
pub use form::{ContactForm, SubmitFeedback};
pub use reconcile::reconcile;
