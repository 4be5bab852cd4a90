//! Warrant document generation.
//!
//! `warrant-press` ties the workspace together: records from
//! `warrant-types`, the document renderer from `warrant-layout` and the PDF
//! surface from `warrant-render-lopdf`.
//!
//! ```ignore
//! use warrant_press::{WarrantPressBuilder, Locale};
//!
//! let press = WarrantPressBuilder::new().with_locale(Locale::French).build()?;
//! let pdf = press.render(&record)?;
//! ```

pub mod error;
mod executor;
pub mod pipeline;

pub use error::PipelineError;
pub use executor::parallelism;
pub use pipeline::{
    WarrantPress, WarrantPressBuilder, read_record, render_warrant, suggested_file_name,
};

pub use warrant_layout::{LabelOverrides, Labels, Locale, PageGeometry, RenderConfig};
pub use warrant_render_core::RenderError;
pub use warrant_types::{
    ArrestEntry, CriminalRecord, Decision, WarrantId, WarrantKind, WarrantRecord, WarrantStatus,
};
