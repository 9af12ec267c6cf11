//! About section - one card per skill area.

use leptos::prelude::*;

use crate::anchors::ABOUT_ANCHOR;
use crate::sections::PageSection;
use crate::types::{CardOutline, SectionOutline, Skill};

/// Section heading.
pub const HEADING: &str = "About Me";

/// Skill areas, in display order. Card keys are positions in this array.
pub static SKILLS: [Skill; 4] = [
    Skill {
        title: "Frontend",
        description: "HTML, CSS, JavaScript, React, Vue",
    },
    Skill {
        title: "Backend",
        description: "Node.js, Python, Flask, Express",
    },
    Skill {
        title: "Database",
        description: "MongoDB, PostgreSQL, MySQL",
    },
    Skill {
        title: "Tools",
        description: "Git, Docker, AWS, CI/CD",
    },
];

/// Grid of skill cards. An empty list renders the section with no cards.
#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="about" id=ABOUT_ANCHOR>
            <div class="container">
                <h2>{HEADING}</h2>
                <div class="about-content">
                    {SKILLS.iter().map(|skill| view! {
                        <div class="skill-card">
                            <h3>{skill.title}</h3>
                            <p>{skill.description}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

pub(crate) fn outline() -> SectionOutline {
    let mut outline = SectionOutline::new(PageSection::About);
    outline.heading = Some(HEADING.to_string());
    outline.cards = SKILLS
        .iter()
        .enumerate()
        .map(|(key, skill)| CardOutline {
            key,
            title: skill.title.to_string(),
            description: skill.description.to_string(),
            tags: Vec::new(),
            link: None,
        })
        .collect();
    outline
}
