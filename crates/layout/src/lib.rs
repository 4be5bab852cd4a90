//! Document renderer for warrants.
//!
//! The first page is a fixed template: masthead, title, reference line, info
//! box, narrative sections and the decision block. An attached criminal
//! record then flows as a table over as many continuation pages as it needs.
//! Everything is drawn through `warrant_render_core::DrawingSurface`, so the
//! layout never touches a document format directly.

mod chrome;
pub mod config;
mod context;
pub mod dates;
mod decision;
pub mod labels;
mod ledger;
mod renderer;
mod template;

pub use config::{PageGeometry, RenderConfig};
pub use labels::{LabelOverrides, Labels, Locale};
pub use ledger::LedgerSummary;
pub use renderer::DocumentRenderer;

#[cfg(test)]
mod test_utils;
