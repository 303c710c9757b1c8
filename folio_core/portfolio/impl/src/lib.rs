use std::sync::Arc;

use folio_content::PORTFOLIO;
use folio_core_portfolio_contracts::PortfolioFeatureService;
use folio_models::portfolio::{
    Portfolio, Profile, Project, ProjectFilter, ProjectId, SkillCategory, SkillGroup,
    TimelineEntry, TimelineTab,
};
use folio_utils::trace_instrument;

#[derive(Debug, Clone)]
pub struct PortfolioFeatureServiceImpl {
    portfolio: Arc<Portfolio>,
}

impl PortfolioFeatureServiceImpl {
    pub fn new(portfolio: Arc<Portfolio>) -> Self {
        Self { portfolio }
    }
}

impl Default for PortfolioFeatureServiceImpl {
    fn default() -> Self {
        Self::new(Arc::new(PORTFOLIO.clone()))
    }
}

impl PortfolioFeatureService for PortfolioFeatureServiceImpl {
    #[trace_instrument(skip(self))]
    async fn get_profile(&self) -> Profile {
        self.portfolio.profile.clone()
    }

    #[trace_instrument(skip(self))]
    async fn list_timeline(&self, tab: TimelineTab) -> Vec<TimelineEntry> {
        self.portfolio.timeline(tab).to_vec()
    }

    #[trace_instrument(skip(self))]
    async fn list_projects(&self, filter: ProjectFilter) -> Vec<Project> {
        self.portfolio
            .projects
            .iter()
            .filter(|project| filter.matches(project))
            .cloned()
            .collect()
    }

    #[trace_instrument(skip(self))]
    async fn get_project(&self, id: ProjectId) -> Option<Project> {
        self.portfolio.project(&id).cloned()
    }

    #[trace_instrument(skip(self))]
    async fn list_skill_categories(&self) -> Vec<SkillGroup> {
        self.portfolio.skills.clone()
    }

    #[trace_instrument(skip(self))]
    async fn get_skill_category(&self, category: SkillCategory) -> Option<SkillGroup> {
        self.portfolio.skill_group(category).cloned()
    }
}

#[cfg(test)]
mod tests {
    use folio_models::portfolio::ProjectCategory;
    use pretty_assertions::assert_eq;

    use super::*;

    fn ids(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|project| project.id.as_str()).collect()
    }

    #[tokio::test]
    async fn list_projects_all() {
        // Arrange
        let sut = PortfolioFeatureServiceImpl::default();

        // Act
        let result = sut.list_projects(ProjectFilter::All).await;

        // Assert
        assert_eq!(result, PORTFOLIO.projects);
    }

    #[tokio::test]
    async fn list_projects_by_category() {
        // Arrange
        let sut = PortfolioFeatureServiceImpl::default();

        // Act
        let result = sut
            .list_projects(ProjectFilter::Category(ProjectCategory::CiCd))
            .await;

        // Assert
        let expected = PORTFOLIO
            .projects
            .iter()
            .filter(|project| project.category == ProjectCategory::CiCd)
            .cloned()
            .collect::<Vec<_>>();
        assert!(!result.is_empty());
        assert_eq!(ids(&result), ids(&expected));
    }

    #[tokio::test]
    async fn list_projects_empty() {
        // Arrange
        let sut = PortfolioFeatureServiceImpl::new(Arc::new(Portfolio {
            projects: PORTFOLIO
                .projects
                .iter()
                .filter(|project| project.category != ProjectCategory::Security)
                .cloned()
                .collect(),
            ..PORTFOLIO.clone()
        }));

        // Act
        let result = sut
            .list_projects(ProjectFilter::Category(ProjectCategory::Security))
            .await;

        // Assert
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn get_project() {
        // Arrange
        let sut = PortfolioFeatureServiceImpl::default();
        let expected = PORTFOLIO.projects[1].clone();

        // Act
        let found = sut.get_project(expected.id.clone()).await;
        let missing = sut.get_project(ProjectId::new(String::from("missing"))).await;

        // Assert
        assert_eq!(found, Some(expected));
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn list_timeline() {
        // Arrange
        let sut = PortfolioFeatureServiceImpl::default();

        // Act
        let experience = sut.list_timeline(TimelineTab::Experience).await;
        let certifications = sut.list_timeline(TimelineTab::Certifications).await;

        // Assert
        assert_eq!(experience, PORTFOLIO.experiences);
        assert_eq!(certifications, PORTFOLIO.certifications);
    }

    #[tokio::test]
    async fn skill_categories() {
        // Arrange
        let sut = PortfolioFeatureServiceImpl::default();

        // Act
        let all = sut.list_skill_categories().await;
        let databases = sut.get_skill_category(SkillCategory::Databases).await;

        // Assert
        assert_eq!(
            all.iter().map(|group| group.category).collect::<Vec<_>>(),
            SkillCategory::ALL
        );
        assert_eq!(databases.as_ref(), PORTFOLIO.skill_group(SkillCategory::Databases));
    }

    #[tokio::test]
    async fn get_profile() {
        // Arrange
        let sut = PortfolioFeatureServiceImpl::default();

        // Act
        let result = sut.get_profile().await;

        // Assert
        assert_eq!(result, PORTFOLIO.profile);
    }
}
