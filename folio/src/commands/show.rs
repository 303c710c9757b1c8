use clap::Subcommand;
use folio_core_portfolio_contracts::PortfolioFeatureService;
use folio_models::{
    portfolio::{
        Profile, Project, ProjectDetailTab, ProjectFilter, ProjectId, SkillCategory, SkillGroup,
        TimelineEntry, TimelineEntryId, TimelineTab,
    },
    view::{proficiency_bar, GalleryView, SkillsView, TimelineView},
};

const BAR_WIDTH: usize = 20;

#[derive(Debug, Subcommand)]
pub enum ShowCommand {
    /// Show the hero and about sections
    Profile,
    /// Show the experience timeline
    #[command(aliases(["t"]))]
    Timeline {
        /// The tab to show (experience, certifications)
        #[arg(long, default_value_t)]
        tab: TimelineTab,
        /// Toggle the expansion of an entry; may be given multiple times
        #[arg(long, value_name = "ID")]
        expand: Vec<String>,
    },
    /// Show the project gallery
    #[command(aliases(["p"]))]
    Projects {
        /// The category to show (all, security, ci/cd, infrastructure)
        #[arg(long, default_value_t)]
        filter: ProjectFilter,
        /// Open the detail dialog of a project
        #[arg(long, value_name = "ID")]
        open: Option<String>,
        /// The tab of the detail dialog (security, cicd)
        #[arg(long, default_value_t)]
        detail: ProjectDetailTab,
    },
    /// Show the skills matrix
    #[command(aliases(["s"]))]
    Skills {
        /// The category to show
        #[arg(long, default_value_t)]
        category: SkillCategory,
    },
}

impl ShowCommand {
    pub async fn invoke(self, portfolio: impl PortfolioFeatureService) -> anyhow::Result<()> {
        let output = match self {
            ShowCommand::Profile => render_profile(&portfolio.get_profile().await),
            ShowCommand::Timeline { tab, expand } => {
                let entries = portfolio.list_timeline(tab).await;
                let mut view = TimelineView::new(&entries);
                view.select_tab(tab);
                for id in expand {
                    view.toggle(&TimelineEntryId::new(id));
                }
                render_timeline(&view, &entries)
            }
            ShowCommand::Projects {
                filter,
                open,
                detail,
            } => {
                let projects = portfolio.list_projects(ProjectFilter::All).await;
                let mut view = GalleryView::default();
                view.set_filter(filter);
                if let Some(id) = open {
                    let id = ProjectId::new(id);
                    let project = portfolio
                        .get_project(id.clone())
                        .await
                        .ok_or_else(|| anyhow::anyhow!("Project {id} not found"))?;
                    view.open(&project);
                    view.select_detail_tab(detail);
                }
                render_gallery(&view, &projects)
            }
            ShowCommand::Skills { category } => {
                let groups = portfolio.list_skill_categories().await;
                let mut view = SkillsView::default();
                view.select(category);
                render_skills(&view, &groups)
            }
        };

        print!("{output}");
        Ok(())
    }
}

fn render_profile(profile: &Profile) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n{}\n\n", profile.name, profile.headline));
    for paragraph in &profile.about {
        out.push_str(&format!("{paragraph}\n\n"));
    }
    for highlight in &profile.highlights {
        out.push_str(&format!("  * {highlight}\n"));
    }
    out.push_str(&format!(
        "\nEmail:    {}\nLocation: {}\nGitHub:   {}\nLinkedIn: {}\n\n{}\n",
        profile.email, profile.location, profile.github, profile.linkedin, profile.availability
    ));
    out
}

fn render_timeline(view: &TimelineView, entries: &[TimelineEntry]) -> String {
    let mut out = String::new();
    for tab in TimelineTab::ALL {
        let marker = if *tab == view.active_tab() { "*" } else { " " };
        out.push_str(&format!("[{marker}] {tab}  "));
    }
    out.push_str("\n\n");

    for entry in entries {
        let expanded = view.is_expanded(&entry.id);
        out.push_str(&format!(
            "{} {}  ({})  #{}\n",
            if expanded { "v" } else { ">" },
            entry.title,
            entry.period(),
            entry.id
        ));
        out.push_str(&format!("  {}\n", entry.organization));
        if expanded {
            out.push_str(&format!("\n  {}\n", entry.description));
            if !entry.skills.is_empty() {
                out.push_str(&format!("\n  Skills: {}\n", entry.skills.join(", ")));
            }
            out.push('\n');
        }
    }
    out
}

fn render_gallery(view: &GalleryView, projects: &[Project]) -> String {
    let mut out = String::new();
    for filter in ProjectFilter::all() {
        let marker = if filter == view.filter() { "*" } else { " " };
        out.push_str(&format!("[{marker}] {}  ", filter.label()));
    }
    out.push_str("\n\n");

    let visible = view.visible(projects);
    if visible.is_empty() {
        out.push_str(&format!("{}\n", GalleryView::EMPTY_MESSAGE));
    }
    for project in visible {
        let (technologies, hidden) = project.card_technologies();
        out.push_str(&format!(
            "#{} {} [{}]\n  {}\n  {}",
            project.id,
            project.title,
            project.category,
            project.description,
            technologies.join(", ")
        ));
        if hidden > 0 {
            out.push_str(&format!(" +{hidden}"));
        }
        out.push('\n');
    }

    if let Some(project) = view.dialog_project(projects) {
        let tab = view.detail_tab();
        let details = match tab {
            ProjectDetailTab::Security => &project.security_details,
            ProjectDetailTab::Cicd => &project.cicd_details,
        };
        out.push_str(&format!(
            "\n== {} ==\n{}\n\n-- {} --\n{}\n\nTechnologies: {}\n",
            project.title,
            project.description,
            tab.title(),
            details,
            project.technologies.join(", ")
        ));
    }
    out
}

fn render_skills(view: &SkillsView, groups: &[SkillGroup]) -> String {
    let mut out = String::new();
    for category in SkillCategory::ALL {
        let marker = if *category == view.selected() { "*" } else { " " };
        out.push_str(&format!("[{marker}] {}  ", category.label()));
    }
    out.push_str("\n\n");

    let skills = groups
        .iter()
        .find(|group| group.category == view.selected())
        .map(|group| group.skills.as_slice())
        .unwrap_or_default();
    for skill in skills {
        out.push_str(&format!(
            "{:<28} {}\n",
            skill.name,
            proficiency_bar(skill.proficiency, BAR_WIDTH)
        ));
        if let Some(description) = &skill.description {
            out.push_str(&format!("  {description}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use folio_content::PORTFOLIO;
    use folio_models::portfolio::ProjectCategory;

    use super::*;

    #[test]
    fn profile() {
        let profile = &PORTFOLIO.profile;

        let out = render_profile(profile);

        assert!(out.starts_with(&format!("{}\n{}\n\n", profile.name, profile.headline)));
        for highlight in &profile.highlights {
            assert!(out.contains(&format!("  * {highlight}\n")));
        }
        assert!(out.contains(&format!("Email:    {}\n", profile.email)));
        assert!(out.ends_with(&format!("{}\n", profile.availability)));
    }

    #[test]
    fn timeline_expansion() {
        let entries = &PORTFOLIO.experiences;
        let mut view = TimelineView::new(entries);
        let collapsed = entries.iter().find(|x| !x.expanded).unwrap();

        let before = render_timeline(&view, entries);
        view.toggle(&collapsed.id);
        let after = render_timeline(&view, entries);

        assert!(!before.contains(&collapsed.description));
        assert!(after.contains(&collapsed.description));
        assert!(after.starts_with("[*] experience"));
    }

    #[test]
    fn gallery_filter_and_dialog() {
        let projects = &PORTFOLIO.projects;
        let mut view = GalleryView::default();
        view.set_filter(ProjectFilter::Category(ProjectCategory::CiCd));
        let outside = projects
            .iter()
            .find(|x| x.category != ProjectCategory::CiCd)
            .unwrap();
        view.open(outside);
        view.select_detail_tab(ProjectDetailTab::Cicd);

        let out = render_gallery(&view, projects);

        assert!(out.contains("[*] ci/cd"));
        assert!(!out.contains(&format!("#{} ", outside.id)));
        assert!(out.contains(&format!("== {} ==", outside.title)));
        assert!(out.contains("-- CI/CD Pipeline --"));
        assert!(out.contains(&outside.cicd_details));
    }

    #[test]
    fn gallery_empty() {
        let view = GalleryView::default();

        let out = render_gallery(&view, &[]);

        assert!(out.contains("No projects found in this category."));
    }

    #[test]
    fn skills_tab() {
        let mut view = SkillsView::default();
        view.select(SkillCategory::OperatingSystems);

        let out = render_skills(&view, &PORTFOLIO.skills);

        assert!(out.contains("[*] operating systems"));
        let group = PORTFOLIO
            .skill_group(SkillCategory::OperatingSystems)
            .unwrap();
        for skill in &group.skills {
            assert!(out.contains(&skill.name));
        }
    }
}
