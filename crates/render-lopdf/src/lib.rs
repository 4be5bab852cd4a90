//! PDF drawing surface using lopdf.
//!
//! This crate provides a `DrawingSurface` implementation that records lopdf
//! content operations per page and serializes the finished document with a
//! buffered writer. Text uses the standard 14 fonts with WinAnsi encoding, so
//! no font data is embedded.

mod encoding;
mod page;
mod surface;
mod writer;

pub use encoding::to_win_ansi;
pub use surface::LopdfSurface;
pub use writer::StreamingPdfWriter;

use warrant_render_core::RenderError;

pub(crate) fn pdf_error(err: lopdf::Error) -> RenderError {
    RenderError::Pdf(err.to_string())
}
