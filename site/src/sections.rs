//! Page composition order.
//!
//! The page is the five components rendered one after another with no data
//! passed between them. [`RENDER_ORDER`] makes that sequence explicit so it
//! can be iterated, listed and tested instead of living only in a `view!`.

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::anchors::{ABOUT_ANCHOR, HERO_ANCHOR, PROJECTS_ANCHOR};
use crate::components::{About, Footer, Header, Hero, Projects, about, footer, header, hero, projects};
use crate::types::SectionOutline;

/// One top-level component of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageSection {
    /// Logo and navigation bar
    Header,
    /// Greeting banner with calls to action
    Hero,
    /// Skill cards
    About,
    /// Project cards
    Projects,
    /// Copyright line
    Footer,
}

/// The order in which sections are rendered into the document body.
pub const RENDER_ORDER: [PageSection; 5] = [
    PageSection::Header,
    PageSection::Hero,
    PageSection::About,
    PageSection::Projects,
    PageSection::Footer,
];

impl PageSection {
    /// Kebab-case name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            PageSection::Header => "header",
            PageSection::Hero => "hero",
            PageSection::About => "about",
            PageSection::Projects => "projects",
            PageSection::Footer => "footer",
        }
    }

    /// The `id` this section emits, if it is a link target.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            PageSection::Hero => Some(HERO_ANCHOR),
            PageSection::About => Some(ABOUT_ANCHOR),
            PageSection::Projects => Some(PROJECTS_ANCHOR),
            PageSection::Header | PageSection::Footer => None,
        }
    }

    /// Invoke the component for this section.
    pub fn view(self) -> AnyView {
        match self {
            PageSection::Header => view! { <Header /> }.into_any(),
            PageSection::Hero => view! { <Hero /> }.into_any(),
            PageSection::About => view! { <About /> }.into_any(),
            PageSection::Projects => view! { <Projects /> }.into_any(),
            PageSection::Footer => view! { <Footer /> }.into_any(),
        }
    }

    /// Markup description of what [`PageSection::view`] renders.
    pub fn outline(self) -> SectionOutline {
        match self {
            PageSection::Header => header::outline(),
            PageSection::Hero => hero::outline(),
            PageSection::About => about::outline(),
            PageSection::Projects => projects::outline(),
            PageSection::Footer => footer::outline(),
        }
    }
}

impl fmt::Display for PageSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a section name does not match any [`PageSection`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section '{0}' (expected one of: header, hero, about, projects, footer)")]
pub struct UnknownSection(pub String);

impl FromStr for PageSection {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        RENDER_ORDER
            .into_iter()
            .find(|section| section.name() == wanted)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn render_order_is_header_hero_about_projects_footer() {
        let names: Vec<_> = RENDER_ORDER.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["header", "hero", "about", "projects", "footer"]);
    }

    #[test]
    fn only_content_sections_carry_anchors() {
        let anchors: Vec<_> = RENDER_ORDER.iter().filter_map(|s| s.anchor()).collect();
        assert_eq!(anchors, vec!["hero", "about", "projects"]);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Projects".parse::<PageSection>(), Ok(PageSection::Projects));
        assert_eq!(" footer ".parse::<PageSection>(), Ok(PageSection::Footer));
    }

    #[test]
    fn rejects_unknown_section() {
        let err = "contact".parse::<PageSection>().unwrap_err();
        assert_eq!(err, UnknownSection("contact".into()));
        assert!(err.to_string().contains("unknown section 'contact'"));
    }

    #[test]
    fn serde_name_matches_display() {
        for section in RENDER_ORDER {
            let json = serde_json::to_string(&section).unwrap();
            assert_eq!(json, format!("\"{}\"", section));
        }
    }
}
