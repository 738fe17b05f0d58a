//! `quotegrid-layout` — Deterministic layout engine for quote comparisons.
//!
//! Pure engine crate: receives an assembled session, returns a row plan, a
//! value grid, and declarative formatting instructions. No IO; rendering
//! backends consume the output.

pub mod cell;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod grid;
pub mod harness;
pub mod plan;
pub mod range;
pub mod row;
pub mod sections;
pub mod style;

pub use cell::CellValue;
pub use config::GridConfig;
pub use engine::{run, LayoutOutput};
pub use error::LayoutError;
pub use format::{plan_formatting, DimensionOp, FormatPlan, StylePatch, StyleRule};
pub use grid::{build_grid, Grid};
pub use plan::{plan_layout, LayoutPlan};
pub use range::{GridRange, RowSpan};
pub use row::{PlannedRow, RowKind, ValueSource};
pub use style::{Color, LayoutStyle, Palette};
