//! Header bar - logo label and in-page navigation.

use leptos::prelude::*;

use crate::anchors::{ABOUT_ANCHOR, CONTACT_ANCHOR, HERO_ANCHOR, PROJECTS_ANCHOR};
use crate::sections::PageSection;
use crate::types::{LinkOutline, NavLink, SectionOutline};

/// Logo text shown at the left of the header.
pub const LOGO: &str = "My Portfolio";

/// Navigation entries, in display order.
pub static NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Home", target: HERO_ANCHOR },
    NavLink { label: "About", target: ABOUT_ANCHOR },
    NavLink { label: "Projects", target: PROJECTS_ANCHOR },
    NavLink { label: "Contact", target: CONTACT_ANCHOR },
];

/// Sticky header with logo and navigation list.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="container">
                <div class="logo">{LOGO}</div>
                <nav>
                    <ul class="nav">
                        {NAV_LINKS.iter().map(|link| view! {
                            <li><a href=link.href()>{link.label}</a></li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </nav>
            </div>
        </header>
    }
}

pub(crate) fn outline() -> SectionOutline {
    let mut outline = SectionOutline::new(PageSection::Header);
    outline.text.push(LOGO.to_string());
    outline.links = NAV_LINKS
        .iter()
        .map(|link| LinkOutline::in_page(link.label, link.href()))
        .collect();
    outline
}
