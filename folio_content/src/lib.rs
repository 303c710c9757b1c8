//! The hardcoded content of the portfolio page.

use std::sync::LazyLock;

use folio_models::portfolio::Portfolio;

pub mod profile;
pub mod projects;
pub mod skills;
pub mod timeline;

pub static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| Portfolio {
    profile: profile::PROFILE.clone(),
    experiences: timeline::EXPERIENCES.clone(),
    certifications: timeline::CERTIFICATIONS.clone(),
    projects: projects::PROJECTS.clone(),
    skills: skills::SKILLS.clone(),
});

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|&item| item.into()).collect()
}
