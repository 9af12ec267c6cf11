//! Hero banner - greeting and calls to action.

use leptos::prelude::*;

use crate::anchors::{CONTACT_ANCHOR, HERO_ANCHOR, PROJECTS_ANCHOR, fragment};
use crate::sections::PageSection;
use crate::types::{LinkOutline, SectionOutline};

/// Banner heading.
pub const HEADING: &str = "Hi, I'm Your Name";
/// Line under the heading.
pub const SUBHEADING: &str = "Full Stack Developer | Designer | Creator";

const PRIMARY_CTA: &str = "View Projects";
const SECONDARY_CTA: &str = "Get in Touch";

/// Greeting banner. Both calls to action are same-document links.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero" id=HERO_ANCHOR>
            <div class="container">
                <h1>{HEADING}</h1>
                <p>{SUBHEADING}</p>
                <div class="hero-buttons">
                    <a href=fragment(PROJECTS_ANCHOR) class="btn btn-primary">{PRIMARY_CTA}</a>
                    <a href=fragment(CONTACT_ANCHOR) class="btn btn-secondary">{SECONDARY_CTA}</a>
                </div>
            </div>
        </section>
    }
}

pub(crate) fn outline() -> SectionOutline {
    let mut outline = SectionOutline::new(PageSection::Hero);
    outline.heading = Some(HEADING.to_string());
    outline.text.push(SUBHEADING.to_string());
    outline.links = vec![
        LinkOutline::in_page(PRIMARY_CTA, fragment(PROJECTS_ANCHOR)),
        LinkOutline::in_page(SECONDARY_CTA, fragment(CONTACT_ANCHOR)),
    ];
    outline
}
