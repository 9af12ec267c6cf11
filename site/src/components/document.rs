//! Root document component - the complete HTML page.

use leptos::prelude::*;

use crate::SiteOptions;
use crate::sections::RENDER_ORDER;
use crate::styles::{CSP, PORTFOLIO_CSS, STYLESHEET_FILE};

/// The complete HTML document: head plus every section in render order.
#[component]
pub fn PortfolioDocument(options: SiteOptions) -> impl IntoView {
    let stylesheet = if options.inline_css {
        view! { <style>{PORTFOLIO_CSS}</style> }.into_any()
    } else {
        view! { <link rel="stylesheet" href=STYLESHEET_FILE /> }.into_any()
    };

    view! {
        <html lang=options.lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{options.title}</title>
                {stylesheet}
            </head>
            <body>
                <div class="app">
                    {RENDER_ORDER.into_iter().map(|section| section.view()).collect::<Vec<_>>()}
                </div>
            </body>
        </html>
    }
}
