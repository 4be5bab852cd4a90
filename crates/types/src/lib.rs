pub mod color;
pub mod geometry;
pub mod ids;
pub mod warrant;

pub use color::Color;
pub use geometry::{Cursor, Point, Rect, Size};
pub use ids::WarrantId;
pub use warrant::{
    display_name, ArrestEntry, CriminalRecord, Decision, WarrantKind, WarrantRecord,
    WarrantStatus,
};
