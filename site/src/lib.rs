//! # portfolio-site
//!
//! Leptos SSR renderer for a single-page personal portfolio.
//!
//! The page is five stateless components composed in a fixed order: a header
//! with in-page navigation, a hero banner, an About grid of skill cards, a
//! Projects grid of showcase cards, and a footer. All content is `'static`
//! data owned by the component that renders it.
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolio_site::{render_page, SiteOptions};
//!
//! let html = render_page(&SiteOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//!
//! std::fs::write("index.html", html).unwrap();
//! # std::fs::remove_file("index.html").unwrap();
//! ```
//!
//! ## Architecture
//!
//! - [`components`] - Leptos UI components, one module per section
//! - [`sections`] - the explicit render order ([`sections::RENDER_ORDER`])
//! - [`anchors`] - in-page identifiers shared by sections and links
//! - [`outline`] - serializable markup description of the page
//! - [`links`] - link audit over rendered HTML
//! - [`types`] - content records and outline types
//! - [`styles`] - CSS and Content-Security-Policy constants
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through Leptos 0.8's `RenderHtml` trait. No reactive
//! runtime or hydration is involved; output is plain static HTML and is
//! identical on every call.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod anchors;
pub mod components;
pub mod links;
pub mod outline;
pub mod sections;
pub mod styles;
pub mod types;

use components::PortfolioDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use sections::PageSection;
use serde::Deserialize;

pub use links::{LinkAudit, LinkError, LinkIssue, audit_links};
pub use outline::page_outline;

/// Document-level settings. They do not affect any section's content.
///
/// # Example
///
/// ```rust
/// use portfolio_site::SiteOptions;
///
/// let opts = SiteOptions {
///     title: "Jane Doe".into(),
///     ..Default::default()
/// };
/// assert!(opts.inline_css);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteOptions {
    /// `<title>` of the document
    pub title: String,
    /// `lang` attribute of `<html>`
    pub lang: String,
    /// Inline the stylesheet into `<head>`; otherwise link
    /// [`styles::STYLESHEET_FILE`]
    pub inline_css: bool,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            title: components::header::LOGO.to_string(),
            lang: "en".to_string(),
            inline_css: true,
        }
    }
}

/// Render the complete portfolio page.
///
/// Returns a full HTML document including `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use portfolio_site::{render_page, SiteOptions};
///
/// let html = render_page(&SiteOptions::default());
/// assert!(html.contains("id=\"projects\""));
/// ```
pub fn render_page(options: &SiteOptions) -> String {
    let doc = view! { <PortfolioDocument options=options.clone() /> };

    let html = doc.to_html();
    tracing::debug!(bytes = html.len(), title = %options.title, "rendered portfolio page");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render a single section as an HTML fragment.
///
/// ```rust
/// use portfolio_site::{render_section, sections::PageSection};
///
/// let footer = render_section(PageSection::Footer);
/// assert!(footer.starts_with("<footer"));
/// ```
pub fn render_section(section: PageSection) -> String {
    section.view().to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchors::DEFAULT_EXTERNAL_ANCHORS;
    use crate::components::about::SKILLS;
    use crate::components::header::NAV_LINKS;
    use crate::components::projects::PROJECTS;
    use crate::sections::RENDER_ORDER;
    use pretty_assertions::assert_eq;

    fn page() -> String {
        render_page(&SiteOptions::default())
    }

    fn section_slice(html: &str, start: &str, end: &str) -> String {
        let from = html.find(start).expect("section start");
        let to = html[from..].find(end).expect("section end") + from;
        html[from..to].to_string()
    }

    #[test]
    fn renders_complete_document() {
        let html = page();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\""));
        assert!(html.contains("<title>My Portfolio</title>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("Content-Security-Policy"));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(page(), page());
        for section in RENDER_ORDER {
            assert_eq!(render_section(section), render_section(section));
        }
    }

    #[test]
    fn sections_appear_in_render_order() {
        let html = page();
        let positions: Vec<usize> = ["<header", "id=\"hero\"", "id=\"about\"", "id=\"projects\"", "<footer"]
            .iter()
            .map(|marker| html.find(marker).expect("section marker"))
            .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn about_renders_four_cards_in_order() {
        let about = render_section(PageSection::About);

        assert_eq!(about.matches("class=\"skill-card\"").count(), 4);
        let mut cursor = 0;
        for skill in SKILLS.iter() {
            let title = about[cursor..].find(skill.title).expect("skill title") + cursor;
            let description = about[title..].find(skill.description).expect("description") + title;
            cursor = description;
        }
    }

    #[test]
    fn projects_render_three_cards_with_ordered_tags() {
        let html = render_section(PageSection::Projects);
        assert_eq!(html.matches("class=\"project-card\"").count(), 3);

        for (idx, project) in PROJECTS.iter().enumerate() {
            let start = html.find(project.title).expect("project title");
            let card = match PROJECTS.get(idx + 1) {
                Some(next) => section_slice(&html, project.title, next.title),
                None => html[start..].to_string(),
            };

            let tags: Vec<&str> = card
                .split("<span class=\"tag\">")
                .skip(1)
                .filter_map(|chunk| chunk.split("</span>").next())
                .collect();
            assert_eq!(tags, project.tech.to_vec());
            assert!(card.contains(project.github));
        }
    }

    #[test]
    fn outbound_links_open_isolated_context() {
        let html = render_section(PageSection::Projects);
        let audit = audit_links(&html, DEFAULT_EXTERNAL_ANCHORS);

        assert_eq!(audit.outbound.len(), PROJECTS.len());
        for link in &audit.outbound {
            assert!(link.is_isolated(), "{} lacks noopener/noreferrer", link.href);
            assert_eq!(link.rel, vec!["noopener", "noreferrer"]);
        }
    }

    #[test]
    fn every_nav_target_is_emitted_or_external() {
        let html = page();
        let audit = audit_links(&html, DEFAULT_EXTERNAL_ANCHORS)
            .ensure_clean()
            .expect("page links resolve");

        for link in NAV_LINKS.iter() {
            assert!(
                audit.ids.iter().any(|id| id == link.target)
                    || DEFAULT_EXTERNAL_ANCHORS.contains(&link.target),
                "nav target #{} has no section",
                link.target
            );
        }
        assert_eq!(audit.ids, vec!["hero", "about", "projects"]);
        assert!(audit.unresolved_external.contains("contact"));
    }

    #[test]
    fn contact_is_the_only_unresolved_anchor() {
        let none: &[&str] = &[];
        let err = audit_links(&page(), none).ensure_clean().unwrap_err();

        assert_eq!(
            err.issues,
            vec![LinkIssue::BrokenAnchor {
                target: "contact".into()
            }]
        );
    }

    #[test]
    fn html_ids_match_outline_anchors() {
        let audit = audit_links(&page(), DEFAULT_EXTERNAL_ANCHORS);
        assert_eq!(audit.ids, page_outline().anchors());
    }

    #[test]
    fn key_strings_appear_exactly_once() {
        let html = page();
        for needle in [
            "About Me",
            "My Projects",
            "Project 1",
            "Project 2",
            "Project 3",
            "© 2024 My Portfolio. Built with Leptos.",
        ] {
            assert_eq!(html.matches(needle).count(), 1, "{needle}");
        }
    }

    #[test]
    fn header_lists_nav_links_in_order() {
        let header = render_section(PageSection::Header);
        let hrefs: Vec<&str> = header
            .split("href=\"")
            .skip(1)
            .filter_map(|chunk| chunk.split('"').next())
            .collect();

        assert_eq!(hrefs, vec!["#hero", "#about", "#projects", "#contact"]);
        assert!(header.contains("My Portfolio"));
    }

    #[test]
    fn hero_links_to_projects_and_contact() {
        let hero = render_section(PageSection::Hero);

        assert!(hero.contains("href=\"#projects\""));
        assert!(hero.contains("href=\"#contact\""));
        assert!(hero.contains("View Projects"));
        assert!(hero.contains("Get in Touch"));
        assert!(hero.contains("Full Stack Developer | Designer | Creator"));
    }

    #[test]
    fn external_stylesheet_mode_links_css() {
        let html = render_page(&SiteOptions {
            inline_css: false,
            title: "Jane Doe".into(),
            lang: "de".into(),
        });

        assert!(html.contains("href=\"styles.css\""));
        assert!(!html.contains("<style>"));
        assert!(html.contains("<title>Jane Doe</title>"));
        assert!(html.contains("lang=\"de\""));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: SiteOptions = serde_json::from_str(r#"{"title":"Jane"}"#).unwrap();
        assert_eq!(opts.title, "Jane");
        assert_eq!(opts.lang, "en");
        assert!(opts.inline_css);
    }
}
