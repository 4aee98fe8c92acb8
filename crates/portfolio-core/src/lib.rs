//! Portfolio Core
//!
//! Shared data contract for the portfolio site: the persisted entities, the
//! aggregate served to the page, contact-form validation and the default
//! seed dataset.
//!
//! ## Entities
//!
//! - [`Profile`]: singleton owner profile (0 or 1 row)
//! - [`Experience`], [`Education`], [`Skill`], [`Project`]: independent
//!   collections in insertion order
//! - [`ContactMessage`]: append-only contact submissions
//!
//! All wire types serialize with camelCase field names and render absent
//! optionals as `null`.

pub mod contact;
pub mod error;
pub mod model;
pub mod seed;
pub mod wire;

pub use contact::NewContactMessage;
pub use error::{SeedLoadError, ValidationError};
pub use model::{
    ContactMessage, Education, Experience, PortfolioData, Profile, Project, Skill,
};
pub use seed::{
    NewEducation, NewExperience, NewProfile, NewProject, NewSkill, SeedData,
};
pub use wire::{ContactAck, ErrorBody, CONTACT_PATH, PORTFOLIO_PATH};
