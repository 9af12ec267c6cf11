//! Subcommand handlers.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use console::style;
use portfolio_site::outline::outline_json;
use portfolio_site::sections::{PageSection, RENDER_ORDER};
use portfolio_site::styles::{PORTFOLIO_CSS, STYLESHEET_FILE};
use portfolio_site::{LinkAudit, audit_links, render_page, render_section};
use tracing::{debug, info};

use crate::config::PortfolioConfig;

/// Page file written by `build`.
pub const INDEX_FILE: &str = "index.html";

/// Outline file written by `build --outline`.
pub const OUTLINE_FILE: &str = "outline.json";

/// Options for [`build`].
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub out_dir: Option<PathBuf>,
    pub force: bool,
    pub outline: bool,
}

/// Render the page, audit it, and write it to the output directory.
///
/// Returns the paths that were written. Build outputs this run does not
/// produce (`styles.css` with inline CSS, `outline.json` without
/// `--outline`) are removed so a forced rebuild leaves no stale files.
pub fn build(config: &PortfolioConfig, opts: &BuildOptions) -> Result<Vec<PathBuf>> {
    let out_dir = opts
        .out_dir
        .clone()
        .unwrap_or_else(|| config.build.out_dir.clone());

    if !opts.force && is_non_empty_dir(&out_dir)? {
        bail!(
            "Output directory '{}' already exists and is not empty (use --force to overwrite)",
            out_dir.display()
        );
    }

    let html = render_page(&config.site);
    audit_links(&html, &config.anchors.external)
        .ensure_clean()
        .context("rendered page failed the link audit")?;

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let mut written = Vec::new();
    written.push(write_file(&out_dir.join(INDEX_FILE), &html)?);
    if config.site.inline_css {
        remove_stale(&out_dir.join(STYLESHEET_FILE))?;
    } else {
        written.push(write_file(&out_dir.join(STYLESHEET_FILE), PORTFOLIO_CSS)?);
    }
    if opts.outline {
        let json = outline_json(true).context("Failed to serialize page outline")?;
        written.push(write_file(&out_dir.join(OUTLINE_FILE), &json)?);
    } else {
        remove_stale(&out_dir.join(OUTLINE_FILE))?;
    }

    info!(dir = %out_dir.display(), files = written.len(), "build finished");
    Ok(written)
}

/// The full page, or a single section fragment.
pub fn render(config: &PortfolioConfig, section: Option<PageSection>) -> String {
    match section {
        Some(section) => {
            debug!(%section, "rendering single section");
            render_section(section)
        }
        None => render_page(&config.site),
    }
}

/// Page outline as JSON.
pub fn outline(pretty: bool) -> Result<String> {
    outline_json(pretty).context("Failed to serialize page outline")
}

/// Audit the rendered page. In strict mode no anchor counts as external.
pub fn check(config: &PortfolioConfig, strict: bool) -> LinkAudit {
    let html = render_page(&config.site);
    let external: &[String] = if strict { &[] } else { &config.anchors.external };
    audit_links(&html, external)
}

/// Human-readable summary of an audit. With `color`, the status lines are
/// styled: external anchors yellow, `OK` green, issues red.
pub fn format_audit(audit: &LinkAudit, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("ids: {}\n", audit.ids.join(", ")));

    let mut unique = audit.fragment_targets.clone();
    unique.sort();
    unique.dedup();
    out.push_str(&format!(
        "in-page links: {} ({} targets)\n",
        audit.fragment_targets.len(),
        unique.len()
    ));

    let isolated = audit.outbound.iter().filter(|l| l.is_isolated()).count();
    out.push_str(&format!(
        "new-context links: {} ({} with noopener noreferrer)\n",
        audit.outbound.len(),
        isolated
    ));

    if !audit.unresolved_external.is_empty() {
        let names: Vec<_> = audit.unresolved_external.iter().map(String::as_str).collect();
        let line = format!("⚠ external anchors: {}", names.join(", "));
        out.push_str(&format!("{}\n", style(line).yellow().force_styling(color)));
    }

    if audit.is_clean() {
        out.push_str(&format!("{}\n", style("✓ OK").green().bold().force_styling(color)));
    } else {
        for issue in &audit.issues {
            let line = format!("✗ issue: {}", issue);
            out.push_str(&format!("{}\n", style(line).red().bold().force_styling(color)));
        }
    }
    out
}

/// Render order with each section's anchor.
pub fn sections() -> String {
    RENDER_ORDER
        .iter()
        .enumerate()
        .map(|(idx, section)| match section.anchor() {
            Some(anchor) => format!("{}. {:<10} #{}\n", idx + 1, section.name(), anchor),
            None => format!("{}. {}\n", idx + 1, section.name()),
        })
        .collect()
}

fn is_non_empty_dir(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    if !path.is_dir() {
        bail!("Output path '{}' exists and is not a directory", path.display());
    }
    let mut entries = fs::read_dir(path)
        .with_context(|| format!("Failed to read output directory {}", path.display()))?;
    Ok(entries.next().is_some())
}

fn remove_stale(path: &Path) -> Result<()> {
    if path.is_file() {
        fs::remove_file(path)
            .with_context(|| format!("Failed to remove stale {}", path.display()))?;
        info!(path = %path.display(), "removed stale build output");
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(path.to_path_buf())
}
