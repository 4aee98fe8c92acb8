//! Seed dataset
//!
//! Rows inserted once into an empty store. The built-in dataset is
//! [`SeedData::default`]; deployments may supply their own as a JSON or
//! YAML file with the same camelCase shape.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SeedLoadError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub location: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub hero_image_url: Option<String>,
    #[serde(default)]
    pub about_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEducation {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub location: Option<String>,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSkill {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Rows inserted by `seed_if_empty`, one group per entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    pub profile: NewProfile,
    #[serde(default)]
    pub experience: Vec<NewExperience>,
    #[serde(default)]
    pub education: Vec<NewEducation>,
    #[serde(default)]
    pub skills: Vec<NewSkill>,
    #[serde(default)]
    pub projects: Vec<NewProject>,
}

impl SeedData {
    /// Load a seed dataset, choosing YAML for `.yaml`/`.yml` and JSON
    /// otherwise.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedLoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SeedLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );

        if is_yaml {
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(serde_json::from_str(&content)?)
        }
    }
}

impl Default for SeedData {
    fn default() -> Self {
        Self {
            profile: NewProfile {
                name: "Komal Maurya".to_string(),
                headline: "Web Developer | React.js & Node.js | Building Scalable Web Solutions"
                    .to_string(),
                summary: "Hi! I\u{2019}m a Web Developer with a strong interest in building intuitive, \
                    user-friendly, and performance-focused web applications that deliver real value \
                    to users and businesses. With hands-on experience in HTML, CSS, JavaScript, \
                    React.js, WordPress, MySQL, and MongoDB, I combine clean UI design with reliable \
                    functionality. I focus on writing clean, maintainable code and creating \
                    interfaces that are responsive, accessible, and easy to use across devices."
                    .to_string(),
                location: "Mira Bhayandar, Maharashtra, India".to_string(),
                email: Some("komal@example.com".to_string()),
                phone: None,
                github_url: Some("https://github.com/komal-maurya789".to_string()),
                linkedin_url: Some("https://www.linkedin.com/in/komalmaurya".to_string()),
                hero_image_url: Some("/images/hero-bg.jpg".to_string()),
                about_image_url: Some("/images/abstract-bg.jpg".to_string()),
            },
            experience: vec![NewExperience {
                title: "Web Development Intern".to_string(),
                company: "Prodigy InfoTech".to_string(),
                location: Some("Remote/Hybrid".to_string()),
                start_date: "March 2025".to_string(),
                end_date: Some("March 2025".to_string()),
                description: "Developing responsive and cross-browser-compatible web interfaces. \
                    Building reusable UI components and clean layouts. Optimizing performance for \
                    speed and scalability."
                    .to_string(),
            }],
            education: vec![NewEducation {
                degree: "BSc IT (Bachelor of Science in Information Technology)".to_string(),
                institution: "Shankar Narayan College of Arts & Commerce".to_string(),
                location: Some("Mumbai, India".to_string()),
                year: "June 2022 - April 2025".to_string(),
            }],
            skills: vec![
                NewSkill {
                    category: "Frontend".to_string(),
                    items: strings(&[
                        "React.js",
                        "HTML5",
                        "CSS3",
                        "JavaScript",
                        "Tailwind CSS",
                        "WordPress",
                    ]),
                },
                NewSkill {
                    category: "Backend".to_string(),
                    items: strings(&["Node.js", "MySQL", "MongoDB"]),
                },
                NewSkill {
                    category: "Tools & Concepts".to_string(),
                    items: strings(&[
                        "Git",
                        "Responsive Design",
                        "Accessibility",
                        "Performance Optimization",
                    ]),
                },
            ],
            projects: vec![NewProject {
                title: "Heart Attack Prediction".to_string(),
                description: "A data-driven project or web application focusing on healthcare \
                    prediction logic. (Publication/Project mentioned in profile)"
                    .to_string(),
                link: None,
                tags: Some(strings(&["Analysis", "Prediction"])),
            }],
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
