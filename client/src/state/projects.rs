//! Project grid category filter.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::content::Project;

pub const ALL_LABEL: &str = "All";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(String),
}

impl ProjectFilter {
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_LABEL,
            Self::Category(name) => name,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Category(name) => project.category.eq_ignore_ascii_case(name),
        }
    }
}

/// `All` followed by each distinct category in first-seen order.
pub fn filter_options(projects: &[Project]) -> Vec<ProjectFilter> {
    let mut options = vec![ProjectFilter::All];
    for project in projects {
        let category = project.category.trim();
        if category.is_empty() {
            continue;
        }
        let seen = options.iter().any(|opt| match opt {
            ProjectFilter::Category(name) => name.eq_ignore_ascii_case(category),
            ProjectFilter::All => false,
        });
        if !seen {
            options.push(ProjectFilter::Category(category.to_owned()));
        }
    }
    options
}

pub fn visible_projects<'a>(projects: &'a [Project], filter: &ProjectFilter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}
