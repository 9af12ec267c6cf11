//! Render the portfolio page to a file.
//!
//! Run with: `cargo run -p portfolio-site --example render_page`

use portfolio_site::{SiteOptions, anchors::DEFAULT_EXTERNAL_ANCHORS, audit_links, render_page};

fn main() {
    let options = SiteOptions {
        title: "My Portfolio".into(),
        ..Default::default()
    };

    let html = render_page(&options);

    let audit = audit_links(&html, DEFAULT_EXTERNAL_ANCHORS);
    if !audit.is_clean() {
        eprintln!("Link issues: {:?}", audit.issues);
    }

    let output_path = "portfolio.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
