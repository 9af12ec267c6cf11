//! Data types for the portfolio page.
//!
//! Two families live here:
//!
//! - **Content records** ([`NavLink`], [`Skill`], [`Project`]) - `'static`
//!   literal data owned by the component that renders it.
//! - **Outline types** ([`PageOutline`] and friends) - a serializable
//!   description of the rendered markup, used for JSON export and for
//!   structural checks that don't want to parse HTML.
//!
//! # Example
//!
//! ```rust
//! use portfolio_site::types::Project;
//!
//! let project = Project {
//!     title: "Demo",
//!     description: "A tiny demo",
//!     tech: &["Rust", "Leptos"],
//!     github: "https://github.com/example/demo",
//! };
//! assert_eq!(project.tech.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::sections::PageSection;

/// Positional identity of a card inside its section list.
///
/// Positions are stable only because every list is a `static` array that is
/// never reordered, extended or truncated. A list that becomes dynamic has to
/// key its cards by content (the title) instead.
pub type CardKey = usize;

/// An in-page navigation entry shown in the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Visible link text
    pub label: &'static str,
    /// Anchor identifier without the leading `#`
    pub target: &'static str,
}

impl NavLink {
    /// Same-document `href` for this link (`#target`).
    pub fn href(&self) -> String {
        crate::anchors::fragment(self.target)
    }
}

/// A skill area rendered as a card in the About section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Skill {
    /// Card heading
    pub title: &'static str,
    /// Comma-separated list of technologies
    pub description: &'static str,
}

/// A showcased project rendered as a card in the Projects section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Card heading
    pub title: &'static str,
    /// One-line summary
    pub description: &'static str,
    /// Technology tags, rendered as badges in this order
    pub tech: &'static [&'static str],
    /// Repository URL, opened in a new browsing context
    pub github: &'static str,
}

/// Serializable description of the whole page, in render order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageOutline {
    /// One entry per rendered section
    pub sections: Vec<SectionOutline>,
}

impl PageOutline {
    /// Look up the outline of one section.
    pub fn section(&self, section: PageSection) -> Option<&SectionOutline> {
        self.sections.iter().find(|s| s.section == section)
    }

    /// Anchors emitted by the page, in document order.
    pub fn anchors(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter_map(|s| s.anchor.as_deref())
            .collect()
    }
}

/// Markup description of one section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionOutline {
    /// Which component produced this section
    pub section: PageSection,
    /// `id` attribute of the section element, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    /// Main heading (`h1`/`h2`), if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    /// Free-standing text lines (logo, subheading, copyright)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    /// Links outside of cards (navigation, calls to action)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkOutline>,
    /// Cards in list order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cards: Vec<CardOutline>,
}

impl SectionOutline {
    /// Empty outline for a section; builders fill in the rest.
    pub fn new(section: PageSection) -> Self {
        Self {
            section,
            anchor: section.anchor().map(str::to_string),
            heading: None,
            text: Vec::new(),
            links: Vec::new(),
            cards: Vec::new(),
        }
    }
}

/// Markup description of one card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardOutline {
    /// Positional key (see [`CardKey`])
    pub key: CardKey,
    /// Card heading
    pub title: String,
    /// Card body text
    pub description: String,
    /// Tag badges in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Card action link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkOutline>,
}

/// Markup description of an anchor element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkOutline {
    /// Visible link text
    pub label: String,
    /// `href` attribute
    pub href: String,
    /// `target` attribute; anything but `_self`/`_parent`/`_top` opens a new context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// `rel` attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
}

impl LinkOutline {
    /// Same-document link.
    pub fn in_page(label: &str, href: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            href: href.into(),
            target: None,
            rel: None,
        }
    }

    /// Link opened in a new browsing context.
    pub fn outbound(label: &str, href: &str, target: &str, rel: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            target: Some(target.to_string()),
            rel: Some(rel.to_string()),
        }
    }
}
