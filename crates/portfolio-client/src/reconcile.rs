//! Choosing between fetched content and the fallback dataset

use crate::client::{ClientError, PortfolioPayload};
use crate::fallback::fallback_portfolio;
use portfolio_core::PortfolioData;

/// Decide what the page renders from a fetch result.
///
/// A payload with a profile is used as-is, including the server's empty
/// placeholder profile. Every failure, and a payload with no profile at
/// all, yields [`fallback_portfolio`].
pub fn reconcile(result: Result<PortfolioPayload, ClientError>) -> PortfolioData {
    match result {
        Ok(PortfolioPayload {
            profile: Some(profile),
            experience,
            education,
            skills,
            projects,
        }) => PortfolioData {
            profile,
            experience,
            education,
            skills,
            projects,
        },
        Ok(_) | Err(_) => fallback_portfolio(),
    }
}
