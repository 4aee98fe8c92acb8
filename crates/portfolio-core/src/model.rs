//! Persisted entities and the portfolio aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Owner profile. Exactly one row is the steady state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i32,
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub location: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub hero_image_url: Option<String>,
    pub about_image_url: Option<String>,
}

impl Profile {
    /// Identifier carried by the placeholder profile
    pub const PLACEHOLDER_ID: i32 = 0;

    /// All-empty profile substituted when no profile row exists yet.
    pub fn placeholder() -> Self {
        Self {
            id: Self::PLACEHOLDER_ID,
            name: String::new(),
            headline: String::new(),
            summary: String::new(),
            location: String::new(),
            email: None,
            phone: None,
            github_url: None,
            linkedin_url: None,
            hero_image_url: None,
            about_image_url: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    /// Free-form display date, e.g. "March 2025"
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: i32,
    pub degree: String,
    pub institution: String,
    pub location: Option<String>,
    pub year: String,
}

/// A skill category with its items in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: i32,
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// A stored contact-form submission. Never served over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Everything a single page render needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub profile: Profile,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

impl PortfolioData {
    /// Assemble the aggregate, substituting the placeholder when `profile`
    /// is absent.
    pub fn assemble(
        profile: Option<Profile>,
        experience: Vec<Experience>,
        education: Vec<Education>,
        skills: Vec<Skill>,
        projects: Vec<Project>,
    ) -> Self {
        Self {
            profile: profile.unwrap_or_else(Profile::placeholder),
            experience,
            education,
            skills,
            projects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_profile_is_empty() {
        let profile = Profile::placeholder();
        assert_eq!(profile.id, 0);
        assert!(profile.name.is_empty());
        assert!(profile.headline.is_empty());
        assert!(profile.summary.is_empty());
        assert!(profile.location.is_empty());
        assert!(profile.email.is_none());
        assert!(profile.about_image_url.is_none());
        assert!(profile.is_placeholder());
    }

    #[test]
    fn test_placeholder_serializes_nulls() {
        let json = serde_json::to_value(Profile::placeholder()).unwrap();
        assert_eq!(json["id"], 0);
        assert_eq!(json["name"], "");
        assert!(json["githubUrl"].is_null());
        assert!(json["heroImageUrl"].is_null());
        assert!(json.get("github_url").is_none());
    }

    #[test]
    fn test_assemble_without_profile() {
        let data = PortfolioData::assemble(None, vec![], vec![], vec![], vec![]);
        assert!(data.profile.is_placeholder());
        assert!(data.experience.is_empty());
        assert!(data.projects.is_empty());
    }

    #[test]
    fn test_experience_wire_names() {
        let experience = Experience {
            id: 3,
            title: "Intern".into(),
            company: "Acme".into(),
            location: None,
            start_date: "March 2025".into(),
            end_date: None,
            description: "Work".into(),
        };
        let json = serde_json::to_value(&experience).unwrap();
        assert_eq!(json["startDate"], "March 2025");
        assert!(json["endDate"].is_null());
    }

    #[test]
    fn test_project_without_tags() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Site",
            "description": "Portfolio",
            "link": null,
            "tags": null
        }))
        .unwrap();
        assert!(project.tags.is_none());
    }
}
