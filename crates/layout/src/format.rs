//! Declarative formatting instructions. The planner turns grid geometry
//! and a style into an ordered rule list; it never looks at cell values.
//!
//! Rule order is application order and later rules win on overlap. The
//! baseline tint is emitted after the row stripes for exactly that reason.

use serde::Serialize;

use crate::config::GridConfig;
use crate::error::LayoutError;
use crate::range::{GridRange, RowSpan};
use crate::style::{Color, LayoutStyle};

// ---------------------------------------------------------------------------
// Instruction set
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NumberFormat {
    Currency { decimals: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    Thin,
}

/// Uniform border on all four sides of a range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Border {
    pub style: BorderStyle,
    pub color: Color,
}

/// Sparse cell-format patch. Unset fields leave the target untouched, so
/// overlapping rules compose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StylePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_format: Option<NumberFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleRule {
    pub range: GridRange,
    pub patch: StylePatch,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DimensionOp {
    ColumnWidth { start_col: u32, end_col: u32, px: u32 },
    RowHeight { start_row: u32, end_row: u32, px: u32 },
    Merge { range: GridRange },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatPlan {
    pub styles: Vec<StyleRule>,
    pub dimensions: Vec<DimensionOp>,
}

// ---------------------------------------------------------------------------
// Planner
// ---------------------------------------------------------------------------

pub fn plan_formatting(
    config: &GridConfig,
    style: &LayoutStyle,
) -> Result<FormatPlan, LayoutError> {
    let palette = &style.palette;
    let columns = config.columns();
    let mut styles: Vec<StyleRule> = Vec::new();
    let mut rule = |range: GridRange, patch: StylePatch| styles.push(StyleRule { range, patch });

    // Banners. The title banner spans the merged data columns; every other
    // banner paints its full row.
    let banner = StylePatch {
        background: Some(palette.banner),
        text_color: Some(palette.banner_text),
        bold: Some(true),
        align: Some(Alignment::Center),
        ..StylePatch::default()
    };
    for &row in &config.header_rows {
        if row == config.title_row {
            rule(config.title_range(), banner);
        } else {
            rule(GridRange::row(row, 1, columns), banner);
        }
    }
    for &row in &config.sub_header_rows {
        rule(
            GridRange::row(row, 1, columns),
            StylePatch { background: Some(palette.sub_banner), ..banner },
        );
    }

    // Premium breakout emphasis.
    let bold = StylePatch { bold: Some(true), ..StylePatch::default() };
    for &row in &config.premium_rows {
        rule(GridRange::row(row, 1, columns), bold);
    }
    rule(GridRange::row(config.total_row, 1, columns), bold);

    // Currency formatting over contiguous runs of eligible rows.
    let currency = StylePatch {
        number_format: Some(NumberFormat::Currency { decimals: style.currency_decimals }),
        ..StylePatch::default()
    };
    for run in contiguous_runs(&config.currency_rows) {
        rule(GridRange::new(run.start, 2, run.end, columns), currency);
    }

    // Alternating fills, then the baseline tint on top of them.
    let stripe = StylePatch {
        background: Some(palette.row_stripe),
        ..StylePatch::default()
    };
    for &row in &config.shaded_rows {
        rule(GridRange::row(row, 1, columns), stripe);
    }
    if config.has_current_policy {
        let tint = StylePatch {
            background: Some(palette.baseline_tint),
            ..StylePatch::default()
        };
        for span in &config.baseline_spans {
            rule(GridRange::column(2, span.start, span.end), tint);
        }
    }

    // Box around the table, then the alignment sweeps.
    rule(
        config.border_range(),
        StylePatch {
            border: Some(Border { style: BorderStyle::Thin, color: palette.border }),
            ..StylePatch::default()
        },
    );
    rule(
        config.data_align_range(),
        StylePatch { align: Some(Alignment::Center), ..StylePatch::default() },
    );
    rule(
        config.label_align_range(),
        StylePatch { align: Some(Alignment::Left), ..StylePatch::default() },
    );
    rule(
        GridRange::cell(config.date_row, 2),
        StylePatch {
            italic: Some(true),
            align: Some(Alignment::Left),
            ..StylePatch::default()
        },
    );

    let dimensions = vec![
        DimensionOp::ColumnWidth { start_col: 1, end_col: 1, px: style.label_col_px },
        DimensionOp::ColumnWidth { start_col: 2, end_col: columns, px: style.data_col_px },
        DimensionOp::Merge { range: config.logo_range() },
        DimensionOp::Merge { range: config.title_range() },
        DimensionOp::RowHeight {
            start_row: config.title_row,
            end_row: config.date_row,
            px: style.banner_row_px,
        },
    ];

    let plan = FormatPlan { styles, dimensions };
    plan.validate(config)?;
    log::debug!(
        "format plan: {} style rules, {} dimension ops",
        plan.styles.len(),
        plan.dimensions.len()
    );
    Ok(plan)
}

impl FormatPlan {
    /// Every rule and op must land inside the grid.
    fn validate(&self, config: &GridConfig) -> Result<(), LayoutError> {
        let columns = config.columns();
        for rule in &self.styles {
            if !rule.range.fits(config.total_rows, columns) {
                return Err(LayoutError::RangeOutOfBounds {
                    range: rule.range.to_string(),
                    total_rows: config.total_rows,
                });
            }
        }
        for op in &self.dimensions {
            match op {
                DimensionOp::ColumnWidth { start_col, end_col, .. } => {
                    if *start_col < 1 || start_col > end_col || *end_col > columns {
                        return Err(LayoutError::ColumnOutOfRange {
                            column: *end_col,
                            columns,
                        });
                    }
                }
                DimensionOp::RowHeight { start_row, end_row, .. } => {
                    let rows = GridRange::new(*start_row, 1, *end_row, columns);
                    if !rows.fits(config.total_rows, columns) {
                        return Err(LayoutError::RangeOutOfBounds {
                            range: rows.to_string(),
                            total_rows: config.total_rows,
                        });
                    }
                }
                DimensionOp::Merge { range } => {
                    if !range.fits(config.total_rows, columns) {
                        return Err(LayoutError::RangeOutOfBounds {
                            range: range.to_string(),
                            total_rows: config.total_rows,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Collapses an ascending row list into inclusive spans.
fn contiguous_runs(rows: &[u32]) -> Vec<RowSpan> {
    let mut runs: Vec<RowSpan> = Vec::new();
    for &row in rows {
        match runs.last_mut() {
            Some(span) if span.end + 1 == row => span.end = row,
            _ => runs.push(RowSpan::new(row, row)),
        }
    }
    runs
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_grid;
    use crate::harness;
    use crate::plan::plan_layout;
    use crate::style::Palette;
    use quotegrid_model::{ComparisonSession, CoverageValue};

    fn formatted(session: &ComparisonSession) -> (GridConfig, FormatPlan) {
        let plan = plan_layout(session).unwrap();
        let grid = build_grid(&plan, session).unwrap();
        let format = plan_formatting(&grid.config, &LayoutStyle::default()).unwrap();
        (grid.config, format)
    }

    #[test]
    fn title_banner_leads_and_date_italic_closes() {
        let (config, format) = formatted(&harness::full_session());
        let first = &format.styles[0];
        assert_eq!(first.range, config.title_range());
        assert_eq!(first.patch.align, Some(Alignment::Center));
        assert_eq!(first.patch.bold, Some(true));

        let last = format.styles.last().unwrap();
        assert_eq!(last.range, GridRange::cell(2, 2));
        assert_eq!(last.patch.italic, Some(true));
        assert_eq!(last.patch.align, Some(Alignment::Left));
    }

    #[test]
    fn section_banners_paint_the_full_row_centered() {
        let (config, format) = formatted(&harness::multi_dwelling_session());
        let columns = config.columns();
        let palette = Palette::default();

        let banners: Vec<&StyleRule> = format
            .styles
            .iter()
            .filter(|r| r.patch.background == Some(palette.banner))
            .collect();
        assert_eq!(banners.len(), config.header_rows.len());
        for rule in &banners {
            assert_eq!(rule.patch.align, Some(Alignment::Center));
            assert_eq!(rule.range.end_col, columns);
            if rule.range.start_row != config.title_row {
                assert_eq!(rule.range.start_col, 1);
            }
        }

        let sub_banners: Vec<&StyleRule> = format
            .styles
            .iter()
            .filter(|r| r.patch.background == Some(palette.sub_banner))
            .collect();
        assert_eq!(sub_banners.len(), config.sub_header_rows.len());
        for (rule, &row) in sub_banners.iter().zip(&config.sub_header_rows) {
            assert_eq!(rule.range, GridRange::row(row, 1, columns));
            assert_eq!(rule.patch.align, Some(Alignment::Center));
            assert_eq!(rule.patch.bold, Some(true));
        }
    }

    #[test]
    fn premium_and_total_rows_are_bold_across_the_width() {
        let (config, format) = formatted(&harness::standard_session());
        let bold_rows: Vec<u32> = format
            .styles
            .iter()
            .filter(|r| r.patch.bold == Some(true) && r.patch.background.is_none())
            .map(|r| r.range.start_row)
            .collect();
        let mut expected = config.premium_rows.clone();
        expected.push(config.total_row);
        assert_eq!(bold_rows, expected);
    }

    #[test]
    fn currency_rules_cover_contiguous_runs() {
        let (_, format) = formatted(&harness::full_session());
        let currency: Vec<GridRange> = format
            .styles
            .iter()
            .filter(|r| r.patch.number_format.is_some())
            .map(|r| r.range)
            .collect();
        // Premium block plus the home block, data columns only.
        assert_eq!(
            currency,
            vec![GridRange::new(4, 2, 7, 5), GridRange::new(10, 2, 15, 5)]
        );
    }

    #[test]
    fn demoted_row_splits_a_currency_run() {
        let mut session = harness::full_session();
        session.carriers[0].home.as_mut().unwrap().limits.personal_liability =
            Some(CoverageValue::Text("umbrella rider".into()));
        let (_, format) = formatted(&session);
        let currency: Vec<GridRange> = format
            .styles
            .iter()
            .filter(|r| r.patch.number_format.is_some())
            .map(|r| r.range)
            .collect();
        // Liability is row 12; the home run breaks around it.
        assert_eq!(
            currency,
            vec![
                GridRange::new(4, 2, 7, 5),
                GridRange::new(10, 2, 11, 5),
                GridRange::new(13, 2, 15, 5),
            ]
        );
    }

    #[test]
    fn stripes_span_the_full_width() {
        let (config, format) = formatted(&harness::full_session());
        let stripes: Vec<&StyleRule> = format
            .styles
            .iter()
            .filter(|r| r.patch.background == Some(LayoutStyle::default().palette.row_stripe))
            .collect();
        assert_eq!(stripes.len(), config.shaded_rows.len());
        for rule in stripes {
            assert_eq!(rule.range.start_col, 1);
            assert_eq!(rule.range.end_col, config.columns());
        }
    }

    #[test]
    fn baseline_tint_needs_a_current_policy() {
        let tint = LayoutStyle::default().palette.baseline_tint;
        let (_, without) = formatted(&harness::standard_session());
        assert!(without
            .styles
            .iter()
            .all(|r| r.patch.background != Some(tint)));

        let (config, with) = formatted(&harness::full_session());
        let tints: Vec<&StyleRule> = with
            .styles
            .iter()
            .filter(|r| r.patch.background == Some(tint))
            .collect();
        assert_eq!(tints.len(), config.baseline_spans.len());
        // Tint sits in the first data column and follows the stripes so it
        // wins on overlap.
        let stripe = LayoutStyle::default().palette.row_stripe;
        let last_stripe = with
            .styles
            .iter()
            .rposition(|r| r.patch.background == Some(stripe))
            .unwrap();
        let first_tint = with
            .styles
            .iter()
            .position(|r| r.patch.background == Some(tint))
            .unwrap();
        assert!(first_tint > last_stripe);
        for rule in tints {
            assert_eq!(rule.range.start_col, 2);
            assert_eq!(rule.range.end_col, 2);
        }
    }

    #[test]
    fn dimensions_size_merge_and_heighten_the_masthead() {
        let (config, format) = formatted(&harness::full_session());
        assert_eq!(
            format.dimensions,
            vec![
                DimensionOp::ColumnWidth { start_col: 1, end_col: 1, px: 140 },
                DimensionOp::ColumnWidth { start_col: 2, end_col: 5, px: 120 },
                DimensionOp::Merge { range: config.logo_range() },
                DimensionOp::Merge { range: config.title_range() },
                DimensionOp::RowHeight { start_row: 1, end_row: 2, px: 45 },
            ]
        );
    }

    #[test]
    fn style_overrides_flow_into_the_rules() {
        let session = harness::standard_session();
        let plan = plan_layout(&session).unwrap();
        let grid = build_grid(&plan, &session).unwrap();
        let style = LayoutStyle::from_toml(
            "currency_decimals = 2\n\n[columns]\nlabel_px = 180\n",
        )
        .unwrap();
        let format = plan_formatting(&grid.config, &style).unwrap();
        assert!(format.styles.iter().any(|r| {
            r.patch.number_format == Some(NumberFormat::Currency { decimals: 2 })
        }));
        assert!(format
            .dimensions
            .contains(&DimensionOp::ColumnWidth { start_col: 1, end_col: 1, px: 180 }));
    }

    #[test]
    fn corrupt_geometry_is_rejected() {
        let session = harness::standard_session();
        let plan = plan_layout(&session).unwrap();
        let grid = build_grid(&plan, &session).unwrap();
        let mut config = grid.config.clone();
        config.total_rows -= 1;
        let err = plan_formatting(&config, &LayoutStyle::default()).unwrap_err();
        assert!(matches!(err, LayoutError::RangeOutOfBounds { .. }));
    }

    #[test]
    fn contiguous_runs_split_on_gaps() {
        let runs = contiguous_runs(&[4, 5, 6, 10, 11, 15]);
        assert_eq!(
            runs,
            vec![RowSpan::new(4, 6), RowSpan::new(10, 11), RowSpan::new(15, 15)]
        );
        assert!(contiguous_runs(&[]).is_empty());
    }
}
