//! Navigation table
//!
//! The eight section landmarks of the page, in declared order. The order
//! is both the rendered menu order and the priority order the section
//! tracker scans in.

use serde::{Deserialize, Serialize};

/// Icon references used by the navigation menus and content cards
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Home,
    User,
    GraduationCap,
    Code,
    FolderOpen,
    Briefcase,
    Award,
    Mail,
    Github,
    Linkedin,
    ExternalLink,
    ChevronDown,
    Cpu,
    Zap,
    Wrench,
    BookOpen,
    Star,
    Sparkles,
    Menu,
    Close,
}

/// One entry of the navigation menu, bound to a section landmark
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationEntry {
    /// Section element id (`<section id="...">`)
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

impl NavigationEntry {
    const fn new(id: &'static str, label: &'static str, icon: Icon) -> Self {
        Self { id, label, icon }
    }
}

/// The page's sections in declared order
pub const NAVIGATION: [NavigationEntry; 8] = [
    NavigationEntry::new("home", "Home", Icon::Home),
    NavigationEntry::new("about", "About", Icon::User),
    NavigationEntry::new("education", "Education", Icon::GraduationCap),
    NavigationEntry::new("skills", "Skills", Icon::Code),
    NavigationEntry::new("projects", "Projects", Icon::FolderOpen),
    NavigationEntry::new("internships", "Internships", Icon::Briefcase),
    NavigationEntry::new("achievements", "Achievements", Icon::Award),
    NavigationEntry::new("contact", "Contact", Icon::Mail),
];

/// Look up a navigation entry by section id
pub fn find_entry(id: &str) -> Option<&'static NavigationEntry> {
    NAVIGATION.iter().find(|entry| entry.id == id)
}

/// Id of the section that is active before any scrolling happens
pub fn initial_section() -> &'static str {
    NAVIGATION[0].id
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_navigation_order() {
        let ids: Vec<&str> = NAVIGATION.iter().map(|e| e.id).collect();
        assert_eq!(
            ids,
            vec![
                "home",
                "about",
                "education",
                "skills",
                "projects",
                "internships",
                "achievements",
                "contact"
            ]
        );
    }

    #[test]
    fn test_navigation_ids_unique() {
        let ids: HashSet<&str> = NAVIGATION.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), NAVIGATION.len());
    }

    #[test]
    fn test_find_entry() {
        assert_eq!(find_entry("skills").map(|e| e.label), Some("Skills"));
        assert!(find_entry("blog").is_none());
        assert_eq!(initial_section(), "home");
    }
}
