//! In-process store
//!
//! Keeps every table in memory behind a single lock. Used for local preview
//! (`serve --store memory`) and tests; contents vanish with the process.

use chrono::Utc;
use portfolio_core::{
    ContactMessage, Education, Experience, NewContactMessage, PortfolioData, Profile, Project,
    SeedData, Skill,
};
use tokio::sync::RwLock;

use crate::error::StoreResult;
use crate::traits::{PortfolioStore, SeedCounts, SeedOutcome};

#[derive(Debug, Default)]
struct Tables {
    profile: Vec<Profile>,
    experience: Vec<Experience>,
    education: Vec<Education>,
    skills: Vec<Skill>,
    projects: Vec<Project>,
    contact_messages: Vec<ContactMessage>,
}

/// Serial ids start at 1, like a fresh PostgreSQL sequence.
fn next_id(len: usize) -> i32 {
    len as i32 + 1
}

/// Memory-backed portfolio store
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl PortfolioStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn get_portfolio(&self) -> StoreResult<PortfolioData> {
        let tables = self.tables.read().await;
        Ok(PortfolioData::assemble(
            tables.profile.first().cloned(),
            tables.experience.clone(),
            tables.education.clone(),
            tables.skills.clone(),
            tables.projects.clone(),
        ))
    }

    async fn create_contact_message(&self, input: &NewContactMessage) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let id = next_id(tables.contact_messages.len());
        tables.contact_messages.push(ContactMessage {
            id,
            name: input.name.clone(),
            email: input.email.clone(),
            message: input.message.clone(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn seed_if_empty(&self, seed: &SeedData) -> StoreResult<SeedOutcome> {
        let mut tables = self.tables.write().await;
        if !tables.profile.is_empty() {
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let profile = &seed.profile;
        tables.profile.push(Profile {
            id: next_id(0),
            name: profile.name.clone(),
            headline: profile.headline.clone(),
            summary: profile.summary.clone(),
            location: profile.location.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            github_url: profile.github_url.clone(),
            linkedin_url: profile.linkedin_url.clone(),
            hero_image_url: profile.hero_image_url.clone(),
            about_image_url: profile.about_image_url.clone(),
        });

        for experience in &seed.experience {
            let id = next_id(tables.experience.len());
            tables.experience.push(Experience {
                id,
                title: experience.title.clone(),
                company: experience.company.clone(),
                location: experience.location.clone(),
                start_date: experience.start_date.clone(),
                end_date: experience.end_date.clone(),
                description: experience.description.clone(),
            });
        }

        for education in &seed.education {
            let id = next_id(tables.education.len());
            tables.education.push(Education {
                id,
                degree: education.degree.clone(),
                institution: education.institution.clone(),
                location: education.location.clone(),
                year: education.year.clone(),
            });
        }

        for skill in &seed.skills {
            let id = next_id(tables.skills.len());
            tables.skills.push(Skill {
                id,
                category: skill.category.clone(),
                items: skill.items.clone(),
            });
        }

        for project in &seed.projects {
            let id = next_id(tables.projects.len());
            tables.projects.push(Project {
                id,
                title: project.title.clone(),
                description: project.description.clone(),
                link: project.link.clone(),
                tags: project.tags.clone(),
            });
        }

        Ok(SeedOutcome::Seeded(SeedCounts::of(seed)))
    }

    async fn contact_messages(&self) -> StoreResult<Vec<ContactMessage>> {
        Ok(self.tables.read().await.contact_messages.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_store_returns_placeholder() {
        let store = MemoryStore::new();
        let data = store.get_portfolio().await.unwrap();
        assert!(data.profile.is_placeholder());
        assert!(data.experience.is_empty());
        assert!(data.education.is_empty());
        assert!(data.skills.is_empty());
        assert!(data.projects.is_empty());
    }

    #[tokio::test]
    async fn test_seed_assigns_serial_ids() {
        let store = MemoryStore::new();
        store.seed_if_empty(&SeedData::default()).await.unwrap();

        let data = store.get_portfolio().await.unwrap();
        assert_eq!(data.profile.id, 1);
        let ids: Vec<i32> = data.skills.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_contact_message_gets_timestamp() {
        let store = MemoryStore::new();
        let before = Utc::now();
        store
            .create_contact_message(&NewContactMessage::new("Jane", "jane@x.com", "Hi"))
            .await
            .unwrap();

        let messages = store.contact_messages().await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, 1);
        assert!(messages[0].created_at >= before);
    }
}
