//! Display content model
//!
//! The biography, education, skills, projects and contact links shown on
//! the page. Content is kept in `content/portfolio.yaml`, embedded into the
//! module at compile time and parsed once on first use.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use super::navigation::{find_entry, Icon};
use crate::error::PortfolioError;

const EMBEDDED_CONTENT: &str = include_str!("../../content/portfolio.yaml");

static PORTFOLIO: OnceCell<Portfolio> = OnceCell::new();

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Portfolio {
    pub owner: Owner,
    pub hero: Hero,
    pub about: About,
    pub education: Education,
    pub skills: Skills,
    pub projects: Projects,
    pub internships: Internships,
    pub achievements: Achievements,
    pub contact: Contact,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Owner {
    pub name: String,
    pub tagline: String,
    pub summary: String,
}

/// Call-to-action buttons of the landing section
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Hero {
    pub primary_label: String,
    pub primary_target: String,
    pub secondary_label: String,
    pub secondary_target: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct About {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub focus_areas: Vec<FocusArea>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FocusArea {
    pub title: String,
    pub detail: String,
    pub icon: Icon,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Education {
    pub title: String,
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub badges: Vec<String>,
    pub core_subjects: Vec<String>,
    pub specializations: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Skills {
    pub title: String,
    pub groups: Vec<SkillGroup>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SkillGroup {
    pub title: String,
    pub icon: Icon,
    pub items: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Projects {
    pub title: String,
    pub items: Vec<Project>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub icon: Icon,
    pub accent: Accent,
}

/// Color accent of a project card
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Blue,
    Green,
    Orange,
    Purple,
}

impl Accent {
    pub fn as_str(self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Green => "green",
            Accent::Orange => "orange",
            Accent::Purple => "purple",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Internships {
    pub title: String,
    pub headline: String,
    pub body: String,
    pub status: String,
    pub interests: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Achievements {
    pub title: String,
    pub groups: Vec<AchievementGroup>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AchievementGroup {
    pub title: String,
    pub icon: Icon,
    pub entries: Vec<Achievement>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Achievement {
    pub title: String,
    pub detail: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Contact {
    pub title: String,
    pub intro: String,
    pub links: Vec<ContactLink>,
    pub footer: String,
}

/// Outbound link (mail-to or profile URL)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
    pub display: String,
    pub icon: Icon,
    /// Opens in a new tab with `rel="noopener noreferrer"`
    #[serde(default)]
    pub external: bool,
}

impl Portfolio {
    /// Parse portfolio content from YAML and check its cross references
    pub fn from_yaml(source: &str) -> Result<Self, PortfolioError> {
        let portfolio: Portfolio = serde_yaml::from_str(source)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Call-to-action targets must name a section of the page
    pub fn validate(&self) -> Result<(), PortfolioError> {
        for target in [&self.hero.primary_target, &self.hero.secondary_target] {
            if find_entry(target).is_none() {
                return Err(PortfolioError::InvalidContent(format!(
                    "call-to-action target '{}' is not a page section",
                    target
                )));
            }
        }
        Ok(())
    }
}

/// The embedded portfolio content, parsed on first access
pub fn portfolio() -> Result<&'static Portfolio, PortfolioError> {
    PORTFOLIO.get_or_try_init(|| {
        let portfolio = Portfolio::from_yaml(EMBEDDED_CONTENT)?;
        log::debug!(
            "Loaded portfolio content: {} projects, {} contact links",
            portfolio.projects.items.len(),
            portfolio.contact.links.len()
        );
        Ok(portfolio)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_parses() {
        let portfolio = portfolio().expect("embedded content should parse");
        assert_eq!(portfolio.owner.name, "Harsh Sahu");
        assert_eq!(portfolio.projects.items.len(), 4);
        assert_eq!(portfolio.skills.groups.len(), 3);
        assert_eq!(portfolio.contact.links.len(), 3);
        assert_eq!(portfolio.hero.secondary_target, "contact");
    }

    #[test]
    fn test_contact_link_kinds() {
        let portfolio = portfolio().unwrap();
        let email = &portfolio.contact.links[0];
        assert!(email.href.starts_with("mailto:"));
        assert!(!email.external);
        assert!(portfolio.contact.links[1..].iter().all(|link| link.external));
    }

    #[test]
    fn test_invalid_call_to_action_target() {
        let source = EMBEDDED_CONTENT.replace("primary_target: about", "primary_target: blog");
        let err = Portfolio::from_yaml(&source).unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidContent(_)));
    }

    #[test]
    fn test_malformed_yaml_is_a_content_error() {
        let err = Portfolio::from_yaml("owner: [unterminated").unwrap_err();
        assert!(matches!(err, PortfolioError::Content(_)));
    }
}
