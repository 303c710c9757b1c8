use std::future::Future;

use folio_models::portfolio::{
    Profile, Project, ProjectFilter, ProjectId, SkillCategory, SkillGroup, TimelineEntry,
    TimelineTab,
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PortfolioFeatureService: Send + Sync + 'static {
    fn get_profile(&self) -> impl Future<Output = Profile> + Send;

    /// Return the entries shown on the given timeline tab.
    fn list_timeline(&self, tab: TimelineTab) -> impl Future<Output = Vec<TimelineEntry>> + Send;

    /// Return all projects matching the filter, in their original order.
    fn list_projects(&self, filter: ProjectFilter) -> impl Future<Output = Vec<Project>> + Send;

    fn get_project(&self, id: ProjectId) -> impl Future<Output = Option<Project>> + Send;

    /// Return every skill category together with its skills.
    fn list_skill_categories(&self) -> impl Future<Output = Vec<SkillGroup>> + Send;

    fn get_skill_category(
        &self,
        category: SkillCategory,
    ) -> impl Future<Output = Option<SkillGroup>> + Send;
}

#[cfg(feature = "mock")]
impl MockPortfolioFeatureService {
    pub fn with_get_profile(mut self, result: Profile) -> Self {
        self.expect_get_profile()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_list_timeline(mut self, tab: TimelineTab, result: Vec<TimelineEntry>) -> Self {
        self.expect_list_timeline()
            .once()
            .with(mockall::predicate::eq(tab))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_list_projects(mut self, filter: ProjectFilter, result: Vec<Project>) -> Self {
        self.expect_list_projects()
            .once()
            .with(mockall::predicate::eq(filter))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_get_project(mut self, id: ProjectId, result: Option<Project>) -> Self {
        self.expect_get_project()
            .once()
            .with(mockall::predicate::eq(id))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_list_skill_categories(mut self, result: Vec<SkillGroup>) -> Self {
        self.expect_list_skill_categories()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_get_skill_category(
        mut self,
        category: SkillCategory,
        result: Option<SkillGroup>,
    ) -> Self {
        self.expect_get_skill_category()
            .once()
            .with(mockall::predicate::eq(category))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
