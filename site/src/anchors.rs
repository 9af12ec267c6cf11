//! In-page anchor identifiers.
//!
//! Sections use these as their `id` attribute and every same-document link
//! uses them as its `href` fragment, so the two sides cannot drift apart.

/// Hero banner section.
pub const HERO_ANCHOR: &str = "hero";

/// About / skills section.
pub const ABOUT_ANCHOR: &str = "about";

/// Projects showcase section.
pub const PROJECTS_ANCHOR: &str = "projects";

/// Contact section. No component in this crate emits it; the host page is
/// expected to provide it.
pub const CONTACT_ANCHOR: &str = "contact";

/// Anchors that may be linked without being emitted by any section.
pub const DEFAULT_EXTERNAL_ANCHORS: &[&str] = &[CONTACT_ANCHOR];

/// `#anchor` form used in `href` attributes.
pub fn fragment(anchor: &str) -> String {
    format!("#{}", anchor)
}
