//! Table definitions for the PostgreSQL store
//!
//! Column names are snake_case; `skills.items` and `projects.tags` are
//! `TEXT[]`. Statements are idempotent and run one at a time.

pub const CREATE_PROFILE: &str = "CREATE TABLE IF NOT EXISTS profile (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    headline TEXT NOT NULL,
    summary TEXT NOT NULL,
    location TEXT NOT NULL,
    email TEXT,
    phone TEXT,
    github_url TEXT,
    linkedin_url TEXT,
    hero_image_url TEXT,
    about_image_url TEXT
)";

pub const CREATE_EXPERIENCE: &str = "CREATE TABLE IF NOT EXISTS experience (
    id SERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    company TEXT NOT NULL,
    location TEXT,
    start_date TEXT NOT NULL,
    end_date TEXT,
    description TEXT NOT NULL
)";

pub const CREATE_EDUCATION: &str = "CREATE TABLE IF NOT EXISTS education (
    id SERIAL PRIMARY KEY,
    degree TEXT NOT NULL,
    institution TEXT NOT NULL,
    location TEXT,
    year TEXT NOT NULL
)";

pub const CREATE_SKILLS: &str = "CREATE TABLE IF NOT EXISTS skills (
    id SERIAL PRIMARY KEY,
    category TEXT NOT NULL,
    items TEXT[] NOT NULL
)";

pub const CREATE_PROJECTS: &str = "CREATE TABLE IF NOT EXISTS projects (
    id SERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    link TEXT,
    tags TEXT[]
)";

pub const CREATE_CONTACT_MESSAGES: &str = "CREATE TABLE IF NOT EXISTS contact_messages (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    message TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)";

/// Every table, in creation order
pub const ALL_TABLES: [&str; 6] = [
    CREATE_PROFILE,
    CREATE_EXPERIENCE,
    CREATE_EDUCATION,
    CREATE_SKILLS,
    CREATE_PROJECTS,
    CREATE_CONTACT_MESSAGES,
];
