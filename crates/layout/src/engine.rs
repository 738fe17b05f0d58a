//! Pipeline entry: plan the rows, build the grid, plan the formatting.

use quotegrid_model::ComparisonSession;
use serde::Serialize;

use crate::error::LayoutError;
use crate::format::{plan_formatting, FormatPlan};
use crate::grid::{build_grid, Grid};
use crate::plan::plan_layout;
use crate::row::PlannedRow;
use crate::style::LayoutStyle;

/// Everything one layout run produces. `grid.config` is the finalized
/// geometry the format plan was drawn from, demotions included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutOutput {
    pub rows: Vec<PlannedRow>,
    pub grid: Grid,
    pub format: FormatPlan,
}

/// Runs the three stages in order. Pure: same session and style, same
/// output.
pub fn run(session: &ComparisonSession, style: &LayoutStyle) -> Result<LayoutOutput, LayoutError> {
    let plan = plan_layout(session)?;
    let grid = build_grid(&plan, session)?;
    let format = plan_formatting(&grid.config, style)?;
    Ok(LayoutOutput { rows: plan.rows, grid, format })
}

impl LayoutOutput {
    pub fn to_json(&self) -> Result<String, LayoutError> {
        serde_json::to_string(self).map_err(|e| LayoutError::Serialize(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, LayoutError> {
        serde_json::to_string_pretty(self).map_err(|e| LayoutError::Serialize(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
