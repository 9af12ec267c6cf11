//! Link audit over rendered HTML.
//!
//! Checks the static consistency the page depends on: every same-document
//! link resolves to an emitted `id` (or to an anchor declared external), ids
//! are unique, and every link that opens a new browsing context carries both
//! `noopener` and `noreferrer`.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static ID_ATTR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\sid="([^"]*)""#).unwrap());

static ANCHOR_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<a(\s[^>]*)?>").unwrap());

static ATTR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([a-zA-Z_:][-a-zA-Z0-9_:.]*)="([^"]*)""#).unwrap());

/// `target` keywords that keep navigation in an existing browsing context.
/// Any other non-empty target (`_blank` or a name) may open a new one.
pub const SAME_CONTEXT_TARGETS: [&str; 3] = ["_self", "_parent", "_top"];

/// Rel tokens a new-context link must carry.
pub const REQUIRED_REL_TOKENS: [&str; 2] = ["noopener", "noreferrer"];

/// A link that opens a new browsing context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundLink {
    /// `href` attribute
    pub href: String,
    /// Whitespace-separated `rel` tokens (empty if absent)
    pub rel: Vec<String>,
}

impl OutboundLink {
    /// Whether the link carries every [`REQUIRED_REL_TOKENS`] entry.
    pub fn is_isolated(&self) -> bool {
        REQUIRED_REL_TOKENS
            .iter()
            .all(|required| self.rel.iter().any(|token| token.eq_ignore_ascii_case(required)))
    }
}

/// A single problem found by [`audit_links`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LinkIssue {
    /// `href="#target"` with no matching `id` and not declared external.
    #[error("broken anchor '#{target}'")]
    BrokenAnchor {
        /// Fragment without the `#`
        target: String,
    },
    /// The same `id` emitted more than once.
    #[error("duplicate id '{id}'")]
    DuplicateId {
        /// Repeated identifier
        id: String,
    },
    /// New-context link without `noopener noreferrer`.
    #[error("link to '{href}' opens a new context with rel=\"{rel}\"")]
    UnsafeOutbound {
        /// Link destination
        href: String,
        /// The `rel` value that was found
        rel: String,
    },
}

/// Returned by [`LinkAudit::ensure_clean`] when the audit found issues.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{} link issue(s): {}", .issues.len(), IssueList(.issues))]
pub struct LinkError {
    /// Every issue, in the order found
    pub issues: Vec<LinkIssue>,
}

struct IssueList<'a>(&'a [LinkIssue]);

impl fmt::Display for IssueList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, issue) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

/// Result of scanning a rendered page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkAudit {
    /// Every `id` attribute, in document order
    pub ids: Vec<String>,
    /// Every same-document link target (without `#`), in document order
    pub fragment_targets: Vec<String>,
    /// Every link whose `target` may open a new browsing context
    pub outbound: Vec<OutboundLink>,
    /// Declared-external anchors that were linked but not emitted
    pub unresolved_external: BTreeSet<String>,
    /// Problems found
    pub issues: Vec<LinkIssue>,
}

impl LinkAudit {
    /// `true` when no issues were found.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Turn the audit into an error if it found issues.
    pub fn ensure_clean(self) -> Result<Self, LinkError> {
        if self.is_clean() {
            Ok(self)
        } else {
            Err(LinkError {
                issues: self.issues,
            })
        }
    }
}

/// Whether a link `target` can open a new browsing context.
pub fn opens_new_context(target: &str) -> bool {
    let target = target.trim();
    !target.is_empty()
        && !SAME_CONTEXT_TARGETS
            .iter()
            .any(|keyword| keyword.eq_ignore_ascii_case(target))
}

/// Scan `html` for ids and links.
///
/// `external` lists anchors that may be linked without being emitted; they
/// are reported in [`LinkAudit::unresolved_external`] instead of as issues.
pub fn audit_links<S: AsRef<str>>(html: &str, external: &[S]) -> LinkAudit {
    let mut audit = LinkAudit::default();

    for cap in ID_ATTR_REGEX.captures_iter(html) {
        audit.ids.push(cap[1].to_string());
    }

    for tag in ANCHOR_TAG_REGEX.captures_iter(html) {
        let attrs: HashMap<&str, &str> = tag
            .get(1)
            .map(|m| {
                ATTR_REGEX
                    .captures_iter(m.as_str())
                    .filter_map(|c| Some((c.get(1)?.as_str(), c.get(2)?.as_str())))
                    .collect()
            })
            .unwrap_or_default();

        let href = attrs.get("href").copied().unwrap_or_default();
        if let Some(fragment) = href.strip_prefix('#') {
            audit.fragment_targets.push(fragment.to_string());
        }

        if attrs.get("target").is_some_and(|t| opens_new_context(t)) {
            let rel = attrs.get("rel").copied().unwrap_or_default();
            audit.outbound.push(OutboundLink {
                href: href.to_string(),
                rel: rel.split_whitespace().map(str::to_string).collect(),
            });
        }
    }

    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();
    for id in &audit.ids {
        if !seen.insert(id.as_str()) && reported.insert(id.as_str()) {
            audit.issues.push(LinkIssue::DuplicateId { id: id.clone() });
        }
    }

    let mut broken = BTreeSet::new();
    for target in &audit.fragment_targets {
        if seen.contains(target.as_str()) {
            continue;
        }
        if external.iter().any(|e| e.as_ref() == target.as_str()) {
            audit.unresolved_external.insert(target.clone());
        } else if broken.insert(target.as_str()) {
            audit.issues.push(LinkIssue::BrokenAnchor {
                target: target.clone(),
            });
        }
    }

    for link in &audit.outbound {
        if !link.is_isolated() {
            audit.issues.push(LinkIssue::UnsafeOutbound {
                href: link.href.clone(),
                rel: link.rel.join(" "),
            });
        }
    }

    tracing::debug!(
        ids = audit.ids.len(),
        fragments = audit.fragment_targets.len(),
        outbound = audit.outbound.len(),
        issues = audit.issues.len(),
        "link audit finished"
    );

    audit
}
