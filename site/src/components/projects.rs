//! Projects section - showcase cards with tech badges and repository links.
//!
//! Repository links open in a new browsing context. They always carry
//! `rel="noopener noreferrer"` so the opened page gets no `window.opener`
//! handle back to this one and no `Referer` header.

use leptos::prelude::*;

use crate::anchors::PROJECTS_ANCHOR;
use crate::sections::PageSection;
use crate::types::{CardOutline, LinkOutline, Project, SectionOutline};

/// Section heading.
pub const HEADING: &str = "My Projects";

/// `target` attribute of repository links.
pub const OUTBOUND_TARGET: &str = "_blank";

/// `rel` attribute of repository links.
pub const OUTBOUND_REL: &str = "noopener noreferrer";

const REPO_LINK_LABEL: &str = "View on GitHub";

/// Showcased projects, in display order. Card and tag keys are positions.
pub static PROJECTS: [Project; 3] = [
    Project {
        title: "Project 1",
        description: "A cool project built with React",
        tech: &["React", "Node.js", "MongoDB"],
        github: "https://github.com/yourusername/project1",
    },
    Project {
        title: "Project 2",
        description: "An awesome web application",
        tech: &["Python", "Flask", "PostgreSQL"],
        github: "https://github.com/yourusername/project2",
    },
    Project {
        title: "Project 3",
        description: "A modern mobile app",
        tech: &["React Native", "Firebase"],
        github: "https://github.com/yourusername/project3",
    },
];

/// Grid of project cards.
#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section class="projects" id=PROJECTS_ANCHOR>
            <div class="container">
                <h2>{HEADING}</h2>
                <div class="projects-grid">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project=project /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// A single project card. Tags are not de-duplicated and URLs are not checked.
#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="project-card">
            <h3>{project.title}</h3>
            <p>{project.description}</p>
            <div class="tech-tags">
                {project.tech.iter().map(|tech| view! {
                    <span class="tag">{*tech}</span>
                }).collect::<Vec<_>>()}
            </div>
            <a
                href=project.github
                class="btn btn-primary"
                target=OUTBOUND_TARGET
                rel=OUTBOUND_REL
            >
                {REPO_LINK_LABEL}
            </a>
        </div>
    }
}

pub(crate) fn outline() -> SectionOutline {
    let mut outline = SectionOutline::new(PageSection::Projects);
    outline.heading = Some(HEADING.to_string());
    outline.cards = PROJECTS
        .iter()
        .enumerate()
        .map(|(key, project)| CardOutline {
            key,
            title: project.title.to_string(),
            description: project.description.to_string(),
            tags: project.tech.iter().map(|t| t.to_string()).collect(),
            link: Some(LinkOutline::outbound(
                REPO_LINK_LABEL,
                project.github,
                OUTBOUND_TARGET,
                OUTBOUND_REL,
            )),
        })
        .collect();
    outline
}
