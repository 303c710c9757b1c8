//! State cells of the interactive portfolio sections.
//!
//! Each cell is owned by the section that displays it and changes only
//! through its transition methods. Cells never reference each other.

use std::collections::HashSet;

use crate::portfolio::{
    Proficiency, Project, ProjectDetailTab, ProjectFilter, ProjectId, SkillCategory,
    TimelineEntry, TimelineEntryId, TimelineTab,
};

/// Active tab and expanded entries of the experience timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineView {
    active_tab: TimelineTab,
    expanded: HashSet<TimelineEntryId>,
}

impl TimelineView {
    /// Creates the view with the entries marked as `expanded` already open.
    pub fn new<'a>(entries: impl IntoIterator<Item = &'a TimelineEntry>) -> Self {
        Self {
            active_tab: TimelineTab::default(),
            expanded: entries
                .into_iter()
                .filter(|entry| entry.expanded)
                .map(|entry| entry.id.clone())
                .collect(),
        }
    }

    pub fn active_tab(&self) -> TimelineTab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: TimelineTab) {
        self.active_tab = tab;
    }

    /// Flips the expansion of one entry and returns whether it is now
    /// expanded.
    pub fn toggle(&mut self, id: &TimelineEntryId) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.clone());
            true
        }
    }

    pub fn is_expanded(&self, id: &TimelineEntryId) -> bool {
        self.expanded.contains(id)
    }
}

/// Category filter and detail dialog of the project gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryView {
    filter: ProjectFilter,
    selected: Option<ProjectId>,
    dialog_open: bool,
    detail_tab: ProjectDetailTab,
}

impl GalleryView {
    pub const EMPTY_MESSAGE: &'static str = "No projects found in this category.";

    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: ProjectFilter) {
        self.filter = filter;
    }

    /// The projects matching the current filter, in their original order.
    pub fn visible<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects
            .iter()
            .filter(|project| self.filter.matches(project))
            .collect()
    }

    /// Selects a project and opens the detail dialog on its first tab.
    pub fn open(&mut self, project: &Project) {
        self.selected = Some(project.id.clone());
        self.dialog_open = true;
        self.detail_tab = ProjectDetailTab::default();
    }

    /// Opens or closes the dialog. The selection survives closing, so
    /// reopening shows the same project.
    pub fn set_dialog_open(&mut self, open: bool) {
        self.dialog_open = open && self.selected.is_some();
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn selected(&self) -> Option<&ProjectId> {
        self.selected.as_ref()
    }

    /// The project shown in the dialog, if the dialog is open.
    pub fn dialog_project<'a>(&self, projects: &'a [Project]) -> Option<&'a Project> {
        let selected = self.selected.as_ref().filter(|_| self.dialog_open)?;
        projects.iter().find(|project| project.id == *selected)
    }

    pub fn detail_tab(&self) -> ProjectDetailTab {
        self.detail_tab
    }

    pub fn select_detail_tab(&mut self, tab: ProjectDetailTab) {
        self.detail_tab = tab;
    }
}

/// Selected tab of the skills matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkillsView {
    selected: SkillCategory,
}

impl SkillsView {
    pub fn selected(&self) -> SkillCategory {
        self.selected
    }

    pub fn select(&mut self, category: SkillCategory) {
        self.selected = category;
    }
}

/// Renders a proficiency as a fixed-width text bar, e.g. `[#######...] 70%`.
pub fn proficiency_bar(proficiency: Proficiency, width: usize) -> String {
    let value = usize::from(*proficiency);
    let filled = (value * width + 50) / 100;
    format!(
        "[{}{}] {value:>3}%",
        "#".repeat(filled),
        ".".repeat(width - filled)
    )
}
