//! Leptos UI components for the portfolio page.
//!
//! Every component is a prop-less `#[component]` function over `'static`
//! data. Each module also exposes an `outline()` builder that describes the
//! same markup as plain data (see [`crate::types::PageOutline`]).
//!
//! # Component Hierarchy
//!
//! ```text
//! PortfolioDocument
//! └── div.app (sections in crate::sections::RENDER_ORDER)
//!     ├── Header    logo + NAV_LINKS
//!     ├── Hero      #hero, heading + two calls to action
//!     ├── About     #about, one card per SKILLS entry
//!     ├── Projects  #projects, one card per PROJECTS entry
//!     │   └── tag badge per tech entry
//!     └── Footer    copyright line
//! ```
//!
//! # Usage
//!
//! Components are normally rendered through [`crate::render_page`], but can
//! be used directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use portfolio_site::components::{About, Projects};
//!
//! view! {
//!     <About />
//!     <Projects />
//! }
//! ```

pub mod about;
mod document;
pub mod footer;
pub mod header;
pub mod hero;
pub mod projects;

pub use about::About;
pub use document::PortfolioDocument;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use projects::Projects;
