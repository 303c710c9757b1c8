use folio_models::portfolio::{Project, ProjectFilter, ProjectId, TimelineTab};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ApiTimelineQuery {
    #[serde(default)]
    pub tab: TimelineTab,
}

#[derive(Deserialize)]
pub struct ApiProjectsQuery {
    #[serde(default)]
    pub category: ProjectFilter,
}

#[derive(Deserialize)]
pub struct PathProjectId {
    pub project_id: ProjectId,
}

#[derive(Deserialize)]
pub struct PathSkillCategory {
    pub category: String,
}

/// A project as listed in the gallery, with the technologies split into the
/// ones shown on the card and the number of hidden ones.
#[derive(Serialize)]
pub struct ApiProject {
    #[serde(flatten)]
    pub project: Project,
    pub card_technologies: Vec<String>,
    pub hidden_technologies: usize,
}

impl From<Project> for ApiProject {
    fn from(project: Project) -> Self {
        let (shown, hidden) = project.card_technologies();
        Self {
            card_technologies: shown.to_vec(),
            hidden_technologies: hidden,
            project,
        }
    }
}
