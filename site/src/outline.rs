//! Serializable markup description of the page.
//!
//! Built from the same `static` data the components render, so it can be
//! exported as JSON or inspected in tests without parsing HTML.

use crate::sections::RENDER_ORDER;
use crate::types::PageOutline;

/// Outline of the composed page, one entry per section in render order.
pub fn page_outline() -> PageOutline {
    PageOutline {
        sections: RENDER_ORDER.into_iter().map(|s| s.outline()).collect(),
    }
}

/// Outline as pretty-printed or compact JSON.
pub fn outline_json(pretty: bool) -> serde_json::Result<String> {
    let outline = page_outline();
    if pretty {
        serde_json::to_string_pretty(&outline)
    } else {
        serde_json::to_string(&outline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::about::SKILLS;
    use crate::components::header::NAV_LINKS;
    use crate::components::projects::{OUTBOUND_REL, OUTBOUND_TARGET, PROJECTS};
    use crate::sections::PageSection;
    use pretty_assertions::assert_eq;

    #[test]
    fn about_outline_has_four_cards_in_declared_order() {
        let outline = page_outline();
        let about = outline.section(PageSection::About).expect("about section");

        assert_eq!(about.heading.as_deref(), Some("About Me"));
        assert_eq!(about.cards.len(), 4);
        for (idx, (card, skill)) in about.cards.iter().zip(SKILLS.iter()).enumerate() {
            assert_eq!(card.key, idx);
            assert_eq!(card.title, skill.title);
            assert_eq!(card.description, skill.description);
            assert!(card.tags.is_empty());
        }
    }

    #[test]
    fn project_tags_follow_tech_sequence() {
        let outline = page_outline();
        let projects = outline.section(PageSection::Projects).expect("projects section");

        assert_eq!(projects.cards.len(), 3);
        for (card, project) in projects.cards.iter().zip(PROJECTS.iter()) {
            assert_eq!(card.tags, project.tech.to_vec());
            let link = card.link.as_ref().expect("repo link");
            assert_eq!(link.href, project.github);
            assert_eq!(link.target.as_deref(), Some(OUTBOUND_TARGET));
            assert_eq!(link.rel.as_deref(), Some(OUTBOUND_REL));
        }
    }

    #[test]
    fn header_outline_lists_nav_links() {
        let outline = page_outline();
        let header = outline.section(PageSection::Header).expect("header");
        let hrefs: Vec<_> = header.links.iter().map(|l| l.href.as_str()).collect();

        assert_eq!(hrefs, vec!["#hero", "#about", "#projects", "#contact"]);
        assert_eq!(header.links.len(), NAV_LINKS.len());
        assert_eq!(header.anchor, None);
    }

    #[test]
    fn anchors_follow_document_order() {
        assert_eq!(page_outline().anchors(), vec!["hero", "about", "projects"]);
    }

    #[test]
    fn json_round_trips() {
        let json = outline_json(true).unwrap();
        let parsed: PageOutline = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, page_outline());
        assert!(json.contains("\"section\": \"projects\""));
    }

    #[test]
    fn empty_fields_are_omitted() {
        let json = outline_json(false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let footer = &value["sections"][4];

        assert_eq!(footer["section"], "footer");
        assert!(footer.get("cards").is_none());
        assert!(footer.get("anchor").is_none());
    }
}
