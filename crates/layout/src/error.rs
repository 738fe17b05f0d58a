use std::fmt;

use quotegrid_model::{MAX_CARRIERS, MIN_CARRIERS};

/// Layout failures are defects in planning or in the assembled session, not
/// business outcomes. They abort the pipeline; missing figures never land
/// here (those become placeholder cells).
#[derive(Debug)]
pub enum LayoutError {
    /// Carrier bundle count outside the supported range.
    CarrierCount(usize),
    /// Built grid height disagrees with the planned row count.
    RowCountMismatch { expected: usize, actual: usize },
    /// Session data columns disagree with the count the plan was built for.
    ColumnCountMismatch { expected: usize, actual: usize },
    /// A built row's width disagrees with the planned column count.
    RowWidthMismatch { row: u32, expected: usize, actual: usize },
    /// A dimension op referenced a column past the grid edge.
    ColumnOutOfRange { column: u32, columns: u32 },
    /// A style rule referenced cells past the grid edge.
    RangeOutOfBounds { range: String, total_rows: u32 },
    /// Style TOML parse / deserialization error.
    StyleParse(String),
    /// Malformed hex color in a style file.
    ColorParse(String),
    /// Output serialization error.
    Serialize(String),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CarrierCount(n) => {
                write!(f, "comparison needs {MIN_CARRIERS}-{MAX_CARRIERS} carriers, got {n}")
            }
            Self::RowCountMismatch { expected, actual } => {
                write!(f, "grid has {actual} rows, plan called for {expected}")
            }
            Self::ColumnCountMismatch { expected, actual } => {
                write!(f, "session has {actual} data columns, plan called for {expected}")
            }
            Self::RowWidthMismatch { row, expected, actual } => {
                write!(f, "row {row} has {actual} cells, expected {expected}")
            }
            Self::ColumnOutOfRange { column, columns } => {
                write!(f, "column {column} is outside the {columns}-column grid")
            }
            Self::RangeOutOfBounds { range, total_rows } => {
                write!(f, "range {range} exceeds the {total_rows}-row grid")
            }
            Self::StyleParse(msg) => write!(f, "style parse error: {msg}"),
            Self::ColorParse(value) => write!(f, "cannot parse color '{value}'"),
            Self::Serialize(msg) => write!(f, "output serialization error: {msg}"),
        }
    }
}

impl std::error::Error for LayoutError {}
