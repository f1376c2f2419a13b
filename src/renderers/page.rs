//! Page markup rendering
//!
//! Builds the template context from the portfolio content and the current
//! page state, then renders the Mustache page template. The output is the
//! complete markup of the mount root: navigation, the eight section
//! landmarks and the decorative backdrop.

use serde::Serialize;

use crate::error::PortfolioError;
use crate::models::{Education, Hero, Icon, Internships, Owner, PageState, Portfolio, NAVIGATION};

use super::classes::{halo_style, mobile_menu_class, nav_link_class, reveal_class, NavVariant};
use super::icons::icon_svg;

const PAGE_TEMPLATE: &str = include_str!("templates/page.html.mustache");
const PAGE_STYLESHEET: &str = include_str!("templates/page.css");

const NAV_ICON_SIZE_DESKTOP: u32 = 16;
const NAV_ICON_SIZE_MOBILE: u32 = 20;
const CARD_ICON_SIZE: u32 = 32;

#[derive(Serialize)]
struct Text<'a> {
    text: &'a str,
}

fn texts(items: &[String]) -> Vec<Text<'_>> {
    items.iter().map(|text| Text { text: text.as_str() }).collect()
}

#[derive(Serialize)]
struct NavItemView {
    id: &'static str,
    label: &'static str,
    class: String,
    active: bool,
    icon_svg: String,
}

#[derive(Serialize)]
struct CardView<'a> {
    title: &'a str,
    detail: &'a str,
    icon_svg: String,
}

#[derive(Serialize)]
struct SkillGroupView<'a> {
    title: &'a str,
    icon_svg: String,
    items: Vec<Text<'a>>,
}

#[derive(Serialize)]
struct ProjectView<'a> {
    title: &'a str,
    description: &'a str,
    accent: &'static str,
    icon_svg: String,
    tech: Vec<Text<'a>>,
}

#[derive(Serialize)]
struct AchievementGroupView<'a> {
    title: &'a str,
    icon_svg: String,
    entries: Vec<CardView<'a>>,
}

#[derive(Serialize)]
struct ContactLinkView<'a> {
    label: &'a str,
    href: &'a str,
    display: &'a str,
    external: bool,
    icon_svg: String,
    trailing_icon_svg: String,
}

#[derive(Serialize)]
struct SectionTitle<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct ContactView<'a> {
    title: &'a str,
    intro: &'a str,
    footer: &'a str,
}

/// Everything the page template reads
#[derive(Serialize)]
struct PageContext<'a> {
    stylesheet: &'static str,
    owner: &'a Owner,
    hero: &'a Hero,
    reveal_class: String,
    halo_style: String,

    nav_desktop: Vec<NavItemView>,
    nav_mobile: Vec<NavItemView>,
    menu_open: bool,
    menu_expanded: &'static str,
    mobile_menu_class: String,
    menu_icon: String,
    close_icon: String,
    chevron_icon: String,

    about: SectionTitle<'a>,
    paragraphs: Vec<Text<'a>>,
    focus_areas: Vec<CardView<'a>>,

    education: &'a Education,
    education_icon: String,
    badges: Vec<Text<'a>>,
    core_subjects: Vec<Text<'a>>,
    specializations: Vec<Text<'a>>,

    skills_title: &'a str,
    skill_groups: Vec<SkillGroupView<'a>>,

    projects_title: &'a str,
    projects: Vec<ProjectView<'a>>,

    internships: &'a Internships,
    internships_icon: String,
    interests: Vec<Text<'a>>,

    achievements_title: &'a str,
    achievement_groups: Vec<AchievementGroupView<'a>>,

    contact: ContactView<'a>,
    contact_links: Vec<ContactLinkView<'a>>,
}

fn nav_items(state: &PageState, variant: NavVariant) -> Vec<NavItemView> {
    let icon_size = match variant {
        NavVariant::Desktop => NAV_ICON_SIZE_DESKTOP,
        NavVariant::Mobile => NAV_ICON_SIZE_MOBILE,
    };
    NAVIGATION
        .iter()
        .map(|entry| {
            let active = entry.id == state.active_section();
            NavItemView {
                id: entry.id,
                label: entry.label,
                class: nav_link_class(variant, active),
                active,
                icon_svg: icon_svg(entry.icon, icon_size),
            }
        })
        .collect()
}

fn build_context<'a>(
    portfolio: &'a Portfolio,
    state: &PageState,
    halo_radius: f64,
) -> PageContext<'a> {
    let menu_open = state.is_menu_open();

    PageContext {
        stylesheet: PAGE_STYLESHEET,
        owner: &portfolio.owner,
        hero: &portfolio.hero,
        reveal_class: reveal_class(state.is_loaded()),
        halo_style: halo_style(state.pointer(), halo_radius),

        nav_desktop: nav_items(state, NavVariant::Desktop),
        nav_mobile: nav_items(state, NavVariant::Mobile),
        menu_open,
        menu_expanded: if menu_open { "true" } else { "false" },
        mobile_menu_class: mobile_menu_class(menu_open),
        menu_icon: icon_svg(Icon::Menu, 24),
        close_icon: icon_svg(Icon::Close, 24),
        chevron_icon: icon_svg(Icon::ChevronDown, 20),

        about: SectionTitle { title: &portfolio.about.title },
        paragraphs: texts(&portfolio.about.paragraphs),
        focus_areas: portfolio
            .about
            .focus_areas
            .iter()
            .map(|area| CardView {
                title: &area.title,
                detail: &area.detail,
                icon_svg: icon_svg(area.icon, CARD_ICON_SIZE),
            })
            .collect(),

        education: &portfolio.education,
        education_icon: icon_svg(Icon::GraduationCap, CARD_ICON_SIZE),
        badges: texts(&portfolio.education.badges),
        core_subjects: texts(&portfolio.education.core_subjects),
        specializations: texts(&portfolio.education.specializations),

        skills_title: &portfolio.skills.title,
        skill_groups: portfolio
            .skills
            .groups
            .iter()
            .map(|group| SkillGroupView {
                title: &group.title,
                icon_svg: icon_svg(group.icon, CARD_ICON_SIZE),
                items: texts(&group.items),
            })
            .collect(),

        projects_title: &portfolio.projects.title,
        projects: portfolio
            .projects
            .items
            .iter()
            .map(|project| ProjectView {
                title: &project.title,
                description: &project.description,
                accent: project.accent.as_str(),
                icon_svg: icon_svg(project.icon, CARD_ICON_SIZE),
                tech: texts(&project.tech),
            })
            .collect(),

        internships: &portfolio.internships,
        internships_icon: icon_svg(Icon::Briefcase, CARD_ICON_SIZE),
        interests: texts(&portfolio.internships.interests),

        achievements_title: &portfolio.achievements.title,
        achievement_groups: portfolio
            .achievements
            .groups
            .iter()
            .map(|group| AchievementGroupView {
                title: &group.title,
                icon_svg: icon_svg(group.icon, CARD_ICON_SIZE),
                entries: group
                    .entries
                    .iter()
                    .map(|entry| CardView {
                        title: &entry.title,
                        detail: &entry.detail,
                        icon_svg: String::new(),
                    })
                    .collect(),
            })
            .collect(),

        contact: ContactView {
            title: &portfolio.contact.title,
            intro: &portfolio.contact.intro,
            footer: &portfolio.contact.footer,
        },
        contact_links: portfolio
            .contact
            .links
            .iter()
            .map(|link| ContactLinkView {
                label: &link.label,
                href: &link.href,
                display: &link.display,
                external: link.external,
                icon_svg: icon_svg(link.icon, CARD_ICON_SIZE),
                trailing_icon_svg: if link.external {
                    icon_svg(Icon::ExternalLink, 16)
                } else {
                    String::new()
                },
            })
            .collect(),
    }
}

/// Render the full page markup for the given content and state
pub fn render_page(
    portfolio: &Portfolio,
    state: &PageState,
    halo_radius: f64,
) -> Result<String, PortfolioError> {
    let context = build_context(portfolio, state, halo_radius);
    let template = mustache::compile_str(PAGE_TEMPLATE)?;
    Ok(template.render_to_string(&context)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::portfolio;

    fn render(state: &PageState) -> String {
        render_page(portfolio().unwrap(), state, 192.0).expect("page should render")
    }

    #[test]
    fn test_renders_every_section_landmark() {
        let html = render(&PageState::new());
        for entry in NAVIGATION.iter() {
            assert!(
                html.contains(&format!(r#"<section id="{}""#, entry.id)),
                "missing section landmark {}",
                entry.id
            );
        }
    }

    #[test]
    fn test_initial_render_marks_home_active() {
        let html = render(&PageState::new());
        // One active button per menu
        assert_eq!(html.matches("nav-link--active").count(), 2);
        assert_eq!(html.matches(r#"aria-current="true""#).count(), 2);
        assert!(html.contains(
            r#"nav-link nav-link--desktop nav-link--active" data-nav-item data-nav-target="home""#
        ));
    }

    #[test]
    fn test_menu_state_in_markup() {
        let mut state = PageState::new();
        let closed = render(&state);
        assert!(closed.contains(r#"class="mobile-menu" data-mobile-menu hidden"#));
        assert!(closed.contains(r#"aria-expanded="false""#));

        state.toggle_menu();
        let open = render(&state);
        assert!(open.contains(r#"class="mobile-menu mobile-menu--open" data-mobile-menu>"#));
        assert!(open.contains(r#"aria-expanded="true""#));
    }

    #[test]
    fn test_stylesheet_is_inlined() {
        let html = render(&PageState::new());
        let start = html.find("<style>").expect("style block");
        let end = html.find("</style>").expect("closed style block");
        let css = &html[start..end];
        assert!(css.contains("@media (min-width: 768px)"));
        assert!(css.contains(".reveal.is-loaded"));
        assert!(start < html.find("<nav").unwrap());
    }

    #[test]
    fn test_text_is_html_escaped() {
        let html = render(&PageState::new());
        assert!(html.contains("Electronics &amp; Communication Engineering"));
        assert!(!html.contains("Electronics & Communication"));
    }

    #[test]
    fn test_external_links_open_in_new_tab() {
        let html = render(&PageState::new());
        assert!(html.contains(
            r#"href="https://github.com/HarshSahu270" target="_blank" rel="noopener noreferrer""#
        ));
        assert!(html.contains(r#"href="mailto:harshsahu3425@gmail.com">"#));
    }

    #[test]
    fn test_call_to_action_targets() {
        let html = render(&PageState::new());
        assert!(html.contains(r#"class="button button--primary" data-nav-target="about""#));
        assert!(html.contains(r#"class="button button--secondary" data-nav-target="contact""#));
    }
}
