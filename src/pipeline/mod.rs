// src/pipeline/mod.rs
mod builder;
mod press;

pub use builder::WarrantPressBuilder;
pub use press::{WarrantPress, read_record, render_warrant, suggested_file_name};
