//! Built-in content shown when the API cannot supply a portfolio.
//!
//! Deliberately independent of the server seed: it has four skill groups
//! and two projects, and renders even when no backend exists at all.

use portfolio_core::{Education, Experience, PortfolioData, Profile, Project, Skill};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The fallback portfolio
pub fn fallback_portfolio() -> PortfolioData {
    let profile = Profile {
        id: Profile::PLACEHOLDER_ID,
        name: "Komal Maurya".to_string(),
        headline: "Web Developer | React.js & Node.js".to_string(),
        summary: "Hi! I\u{2019}m a Web Developer with a strong interest in building intuitive, \
            user-friendly, and performance-focused web applications. With hands-on experience \
            in HTML, CSS, JavaScript, React.js, WordPress, MySQL, and MongoDB, I combine clean \
            UI design with reliable functionality."
            .to_string(),
        location: "Mira Bhayandar, Maharashtra, India".to_string(),
        email: Some("komal.maurya@example.com".to_string()),
        phone: None,
        github_url: Some("https://github.com/komal-maurya789".to_string()),
        linkedin_url: Some("https://linkedin.com/in/komalmaurya".to_string()),
        hero_image_url: Some("/images/hero-bg.jpg".to_string()),
        about_image_url: None,
    };

    let experience = vec![Experience {
        id: 1,
        title: "Web Development Intern".to_string(),
        company: "Prodigy InfoTech".to_string(),
        location: Some("Remote".to_string()),
        start_date: "March 2025".to_string(),
        end_date: Some("Present".to_string()),
        description: "Developing scalable web applications and enhancing user interfaces \
            using modern frontend technologies."
            .to_string(),
    }];

    let education = vec![Education {
        id: 1,
        degree: "BSc IT".to_string(),
        institution: "Shankar Narayan College of Arts & Commerce".to_string(),
        location: Some("Maharashtra, India".to_string()),
        year: "2022 - 2025".to_string(),
    }];

    let skills = vec![
        Skill {
            id: 1,
            category: "Frontend".to_string(),
            items: strings(&["React.js", "HTML5", "CSS3", "JavaScript", "Tailwind CSS"]),
        },
        Skill {
            id: 2,
            category: "Backend".to_string(),
            items: strings(&["Node.js", "Express", "REST APIs"]),
        },
        Skill {
            id: 3,
            category: "Database".to_string(),
            items: strings(&["MongoDB", "MySQL"]),
        },
        Skill {
            id: 4,
            category: "Tools".to_string(),
            items: strings(&["Git", "WordPress", "VS Code"]),
        },
    ];

    let projects = vec![
        Project {
            id: 1,
            title: "Portfolio Website".to_string(),
            description: "A modern, responsive personal portfolio built with React and \
                Framer Motion."
                .to_string(),
            link: Some("#".to_string()),
            tags: Some(strings(&["React", "Framer Motion", "Tailwind"])),
        },
        Project {
            id: 2,
            title: "E-Commerce Dashboard".to_string(),
            description: "Admin dashboard for managing products, orders, and customers."
                .to_string(),
            link: Some("#".to_string()),
            tags: Some(strings(&["React", "Node.js", "MongoDB"])),
        },
    ];

    PortfolioData {
        profile,
        experience,
        education,
        skills,
        projects,
    }
}
