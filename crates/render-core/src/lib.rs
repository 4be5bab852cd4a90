//! Core rendering abstractions for warrant documents.
//!
//! This crate provides the capability the document renderer draws onto:
//! - `DrawingSurface` trait abstracting a page-oriented vector/text canvas
//! - Error types for rendering operations
//! - Standard font metrics and word wrapping shared by every backend

mod error;
pub mod font;
pub mod metrics;
pub mod text;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use font::{Font, FontFamily, FontStyle};
pub use traits::DrawingSurface;
pub use types::{ColorTarget, PaintMode, TextAlign, TextOptions};
