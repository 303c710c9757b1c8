use nutype::nutype;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

use crate::{
    email_address::EmailAddress,
    macros::{id, keyword_enum},
};

id!(TimelineEntryId);
id!(ProjectId);

/// All content shown on the portfolio page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub experiences: Vec<TimelineEntry>,
    pub certifications: Vec<TimelineEntry>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
}

impl Portfolio {
    pub fn timeline(&self, tab: TimelineTab) -> &[TimelineEntry] {
        match tab {
            TimelineTab::Experience => &self.experiences,
            TimelineTab::Certifications => &self.certifications,
        }
    }

    pub fn project(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == *id)
    }

    pub fn skill_group(&self, category: SkillCategory) -> Option<&SkillGroup> {
        self.skills.iter().find(|group| group.category == category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub about: Vec<String>,
    pub highlights: Vec<String>,
    pub email: EmailAddress,
    pub location: String,
    pub github: Url,
    pub linkedin: Url,
    pub availability: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub id: TimelineEntryId,
    pub title: String,
    pub organization: String,
    /// `YYYY-MM`
    pub start_date: String,
    /// `YYYY-MM` or `Present`
    pub end_date: String,
    pub description: String,
    pub skills: Vec<String>,
    /// Whether the entry starts out expanded.
    pub expanded: bool,
}

impl TimelineEntry {
    pub fn period(&self) -> String {
        format!("{} - {}", self.start_date, self.end_date)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineTab {
    #[default]
    Experience,
    Certifications,
}

keyword_enum!(TimelineTab("timeline tab") {
    Experience => "experience",
    Certifications => "certifications",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    pub image: Url,
    pub security_details: String,
    pub cicd_details: String,
    pub technologies: Vec<String>,
}

impl Project {
    /// Number of technologies listed on a gallery card before the rest is
    /// collapsed into a `+N` badge.
    pub const CARD_TECHNOLOGIES: usize = 3;

    /// The technologies shown on the gallery card and the number of hidden
    /// ones.
    pub fn card_technologies(&self) -> (&[String], usize) {
        let shown = self.technologies.len().min(Self::CARD_TECHNOLOGIES);
        (&self.technologies[..shown], self.technologies.len() - shown)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Security,
    CiCd,
    Infrastructure,
}

keyword_enum!(ProjectCategory("project category") {
    Security => "security",
    CiCd => "ci/cd",
    Infrastructure => "infrastructure",
});

/// Category selector of the project gallery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl ProjectFilter {
    pub fn all() -> impl Iterator<Item = Self> {
        std::iter::once(Self::All).chain(ProjectCategory::ALL.iter().copied().map(Self::Category))
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => project.category == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Category(category) => category.as_str(),
        }
    }
}

impl std::fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Category(category) => category.fmt(f),
        }
    }
}

impl std::str::FromStr for ProjectFilter {
    type Err = crate::ParseKeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            _ => s.parse().map(Self::Category).map_err(|_| crate::ParseKeywordError {
                kind: "project filter",
                value: s.into(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectDetailTab {
    #[default]
    Security,
    Cicd,
}

keyword_enum!(ProjectDetailTab("project detail tab") {
    Security => "security",
    Cicd => "cicd",
});

impl ProjectDetailTab {
    pub fn title(self) -> &'static str {
        match self {
            Self::Security => "Security Implementation",
            Self::Cicd => "CI/CD Pipeline",
        }
    }
}

#[nutype(
    validate(less_or_equal = 100),
    derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deref, TryFrom, Serialize, Deserialize)
)]
pub struct Proficiency(u8);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: String,
    pub proficiency: Proficiency,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillCategory {
    #[default]
    Tools,
    Security,
    Infrastructure,
    Databases,
    OperatingSystems,
    Programming,
}

keyword_enum!(SkillCategory("skill category") {
    Tools => "tools",
    Security => "security",
    Infrastructure => "infrastructure",
    Databases => "databases",
    OperatingSystems => "operating-systems",
    Programming => "programming",
});

impl SkillCategory {
    pub fn label(self) -> String {
        self.as_str().replace('-', " ")
    }
}

macro_rules! keyword_serde {
    ($($ident:ident),*) => { $(
        impl Serialize for $ident {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ident {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                String::deserialize(deserializer)?
                    .parse()
                    .map_err(serde::de::Error::custom)
            }
        }
    )* };
}

keyword_serde!(ProjectCategory, ProjectFilter);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn project(id: &str, category: ProjectCategory, technologies: &[&str]) -> Project {
        Project {
            id: ProjectId::new(id.to_owned()),
            title: format!("Project {id}"),
            description: String::new(),
            category,
            image: "https://images.example.com/1.jpg".parse().unwrap(),
            security_details: String::new(),
            cicd_details: String::new(),
            technologies: technologies.iter().map(|&x| x.into()).collect(),
        }
    }

    #[test]
    fn parse_project_filter() {
        for (input, expected) in [
            ("all", Some(ProjectFilter::All)),
            (
                "security",
                Some(ProjectFilter::Category(ProjectCategory::Security)),
            ),
            ("ci/cd", Some(ProjectFilter::Category(ProjectCategory::CiCd))),
            (
                "infrastructure",
                Some(ProjectFilter::Category(ProjectCategory::Infrastructure)),
            ),
            ("cicd", None),
            ("All", None),
            ("", None),
        ] {
            assert_eq!(input.parse::<ProjectFilter>().ok(), expected, "{input}");
        }
    }

    #[test]
    fn project_filter_serde() {
        let filter = ProjectFilter::Category(ProjectCategory::CiCd);
        let json = serde_json::to_value(filter).unwrap();
        assert_eq!(json, serde_json::json!("ci/cd"));
        assert_eq!(
            serde_json::from_value::<ProjectFilter>(json).unwrap(),
            filter
        );
        assert!(serde_json::from_value::<ProjectFilter>(serde_json::json!("x")).is_err());
    }

    #[test]
    fn project_filter_matches() {
        let security = project("1", ProjectCategory::Security, &[]);
        let cicd = project("2", ProjectCategory::CiCd, &[]);

        assert!(ProjectFilter::All.matches(&security));
        assert!(ProjectFilter::All.matches(&cicd));
        assert!(ProjectFilter::Category(ProjectCategory::Security).matches(&security));
        assert!(!ProjectFilter::Category(ProjectCategory::Security).matches(&cicd));
    }

    #[test]
    fn project_filter_all_lists_every_option() {
        assert_eq!(
            ProjectFilter::all().map(|x| x.to_string()).collect::<Vec<_>>(),
            ["all", "security", "ci/cd", "infrastructure"]
        );
        assert_eq!(ProjectFilter::All.label(), "All Projects");
    }

    #[test]
    fn card_technologies() {
        let few = project("1", ProjectCategory::Security, &["a", "b"]);
        let many = project("2", ProjectCategory::Security, &["a", "b", "c", "d", "e"]);

        assert_eq!(few.card_technologies(), (&few.technologies[..], 0));
        assert_eq!(many.card_technologies(), (&many.technologies[..3], 2));
    }

    #[test]
    fn proficiency_bounds() {
        assert!(Proficiency::try_new(0).is_ok());
        assert!(Proficiency::try_new(100).is_ok());
        assert!(Proficiency::try_new(101).is_err());
    }

    #[test]
    fn skill_category_keywords() {
        assert_eq!(
            "operating-systems".parse::<SkillCategory>().unwrap(),
            SkillCategory::OperatingSystems
        );
        assert_eq!(SkillCategory::OperatingSystems.label(), "operating systems");
        assert_eq!(
            serde_json::to_value(SkillCategory::OperatingSystems).unwrap(),
            serde_json::json!("operating-systems")
        );
    }
}
