//! Portfolio copy and site configuration loaded from `content/site.json`.
//!
//! The JSON is embedded at compile time so the site stays a static bundle;
//! editing copy means editing the JSON, not the components.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::state::nav::Section;

const EMBEDDED_CONTENT: &str = include_str!("../content/site.json");

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid content: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub config: SiteConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub resume_url: Option<String>,
}

impl Profile {
    /// Up to two uppercase initials for the avatar badge.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct About {
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency 0–100, rendered as a bar width.
    pub level: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

impl SiteContent {
    /// Parse and check content JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Parse`] for malformed JSON and
    /// [`ContentError::Invalid`] when required copy is missing or a skill
    /// level exceeds 100.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let mut content: Self = serde_json::from_str(raw)?;
        if content.profile.name.trim().is_empty() {
            return Err(ContentError::Invalid("profile.name is empty".to_owned()));
        }
        if let Some(skill) = content
            .skills
            .iter()
            .flat_map(|g| g.skills.iter())
            .find(|s| s.level > 100)
        {
            return Err(ContentError::Invalid(format!(
                "skill {:?} level {} exceeds 100",
                skill.name, skill.level
            )));
        }
        content.config = content.config.normalized();
        Ok(content)
    }

    /// The content bundled with the site. Falls back to a minimal page when
    /// the bundled JSON is broken.
    pub fn embedded() -> Self {
        match Self::from_json(EMBEDDED_CONTENT) {
            Ok(content) => content,
            Err(err) => {
                log::error!("bundled site content unusable: {err}");
                Self {
                    profile: Profile {
                        name: "Portfolio".to_owned(),
                        ..Profile::default()
                    },
                    ..Self::default()
                }
            }
        }
    }
}

/// Navigable sections in page order.
pub fn page_sections() -> Vec<Section> {
    [
        ("home", "Home"),
        ("about", "About"),
        ("skills", "Skills"),
        ("projects", "Projects"),
        ("experience", "Experience"),
        ("contact", "Contact"),
    ]
    .into_iter()
    .map(|(id, label)| Section::new(id, label))
    .collect()
}
