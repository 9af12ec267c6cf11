//! Footer.

use leptos::prelude::*;

use crate::sections::PageSection;
use crate::types::SectionOutline;

/// Copyright line.
pub const COPYRIGHT: &str = "© 2024 My Portfolio. Built with Leptos.";

/// Single static copyright line.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p>{COPYRIGHT}</p>
            </div>
        </footer>
    }
}

pub(crate) fn outline() -> SectionOutline {
    let mut outline = SectionOutline::new(PageSection::Footer);
    outline.text.push(COPYRIGHT.to_string());
    outline
}
