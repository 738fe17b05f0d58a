//! Grid builder: resolves planned rows against the session into a
//! rectangular value grid. Missing figures become placeholder cells here;
//! only structural breakage is an error.

use quotegrid_model::{
    CarrierBundle, ComparisonSession, CoverageValue, CurrentPolicy, DwellingId, Quote,
};
use serde::Serialize;

use crate::cell::{auto_limits_cell, umbrella_limit_cell, CellValue};
use crate::config::GridConfig;
use crate::error::LayoutError;
use crate::plan::LayoutPlan;
use crate::row::{AutoField, HomeField, PlannedRow, RowKind, UmbrellaField, ValueSource};

/// Resolved grid. `config` is the finalized geometry with currency
/// demotions applied; the format planner reads it as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub rows: Vec<Vec<CellValue>>,
    pub config: GridConfig,
}

impl Grid {
    /// Cell at 1-based (row, col).
    pub fn cell(&self, row: u32, col: u32) -> Option<&CellValue> {
        if row == 0 || col == 0 {
            return None;
        }
        self.rows.get(row as usize - 1)?.get(col as usize - 1)
    }
}

pub fn build_grid(plan: &LayoutPlan, session: &ComparisonSession) -> Result<Grid, LayoutError> {
    if plan.rows.len() != plan.config.total_rows as usize {
        return Err(LayoutError::RowCountMismatch {
            expected: plan.config.total_rows as usize,
            actual: plan.rows.len(),
        });
    }
    if session.data_columns() != plan.config.data_columns as usize {
        return Err(LayoutError::ColumnCountMismatch {
            expected: plan.config.data_columns as usize,
            actual: session.data_columns(),
        });
    }

    let mut config = plan.config.clone();
    let columns = config.columns() as usize;
    let data_columns = data_columns(session);
    let mut rows: Vec<Vec<CellValue>> = Vec::with_capacity(plan.rows.len());

    for planned in &plan.rows {
        let row = match planned.kind {
            RowKind::Title | RowKind::DateLine => {
                // Text sits in the first data column; the label column is
                // reserved for the logo merge.
                let mut row = Vec::with_capacity(columns);
                row.push(CellValue::Blank);
                row.push(CellValue::Text(planned.label.clone()));
                row.resize(columns, CellValue::Blank);
                row
            }
            RowKind::Blank => vec![CellValue::Blank; columns],
            _ => {
                let mut row = Vec::with_capacity(columns);
                if planned.label.is_empty() {
                    row.push(CellValue::Blank);
                } else {
                    row.push(CellValue::Text(planned.label.clone()));
                }
                if planned.source == ValueSource::Total {
                    total_cells(&rows, &plan.rows, config.data_columns as usize, &mut row);
                } else {
                    for column in &data_columns {
                        row.push(resolve_cell(planned.source, column, session));
                    }
                }
                row
            }
        };

        // Descriptive text in a currency row drops that row's number
        // formatting. Placeholders are not text; they never demote.
        if config.is_currency_row(planned.index) && row[1..].iter().any(|c| c.is_text()) {
            log::debug!(
                "row {} holds descriptive text, demoting from currency formatting",
                planned.index
            );
            config.demote_currency_row(planned.index);
        }

        rows.push(row);
    }

    for (i, row) in rows.iter().enumerate() {
        if row.len() != columns {
            return Err(LayoutError::RowWidthMismatch {
                row: i as u32 + 1,
                expected: columns,
                actual: row.len(),
            });
        }
    }

    log::debug!("built grid: {} rows x {} columns", rows.len(), columns);
    Ok(Grid { rows, config })
}

// ---------------------------------------------------------------------------
// Column walk
// ---------------------------------------------------------------------------

/// One data column's backing record: the baseline (current policy) column
/// leads when present, carrier columns follow in session order.
enum DataColumn<'a> {
    Baseline(&'a CurrentPolicy),
    Carrier(&'a CarrierBundle),
}

fn data_columns(session: &ComparisonSession) -> Vec<DataColumn<'_>> {
    let mut columns = Vec::with_capacity(session.data_columns());
    if let Some(policy) = &session.current_policy {
        columns.push(DataColumn::Baseline(policy));
    }
    for bundle in &session.carriers {
        columns.push(DataColumn::Carrier(bundle));
    }
    columns
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

fn resolve_cell(
    source: ValueSource,
    column: &DataColumn<'_>,
    session: &ComparisonSession,
) -> CellValue {
    match source {
        ValueSource::None => CellValue::Blank,
        ValueSource::CarrierNames => match column {
            DataColumn::Baseline(policy) => CellValue::Text(baseline_header(policy)),
            DataColumn::Carrier(bundle) => CellValue::Text(bundle.carrier_name.clone()),
        },
        ValueSource::SectionPremium(section) => {
            // Premium rows exist for inactive sections too; they resolve
            // to placeholders and stay out of the total.
            if !session.has_section(section) {
                return CellValue::Missing;
            }
            match column {
                DataColumn::Baseline(policy) => CellValue::from_amount(policy.premium(section)),
                DataColumn::Carrier(bundle) => {
                    CellValue::from_amount(bundle.quote(section).and_then(|q| q.annual_premium))
                }
            }
        }
        ValueSource::DwellingPremium(dwelling) => match column {
            DataColumn::Baseline(policy) => {
                CellValue::from_amount(policy.dwelling_premium(dwelling))
            }
            DataColumn::Carrier(bundle) => {
                CellValue::from_amount(bundle.home_quote(dwelling).and_then(|q| q.annual_premium))
            }
        },
        ValueSource::Home(dwelling, field) => match column {
            DataColumn::Baseline(policy) => baseline_home_cell(policy, dwelling, field),
            DataColumn::Carrier(bundle) => carrier_home_cell(bundle.home_quote(dwelling), field),
        },
        ValueSource::Auto(field) => match column {
            DataColumn::Baseline(policy) => baseline_auto_cell(policy, field),
            DataColumn::Carrier(bundle) => carrier_auto_cell(bundle.auto.as_ref(), field),
        },
        ValueSource::Umbrella(field) => match column {
            DataColumn::Baseline(policy) => baseline_umbrella_cell(policy, field),
            DataColumn::Carrier(bundle) => carrier_umbrella_cell(bundle.umbrella.as_ref(), field),
        },
        // Totals are computed from the built grid by the caller.
        ValueSource::Total => CellValue::Missing,
    }
}

/// Per-column sum of the already-built premium rows. Premium rows always
/// precede the total row, so `built` holds them resolved.
fn total_cells(
    built: &[Vec<CellValue>],
    plan_rows: &[PlannedRow],
    data_columns: usize,
    out: &mut Vec<CellValue>,
) {
    for j in 0..data_columns {
        let mut sum = 0.0;
        let mut found = false;
        for (planned, cells) in plan_rows.iter().zip(built) {
            if planned.kind == RowKind::PremiumRow {
                if let Some(n) = cells[1 + j].as_number() {
                    sum += n;
                    found = true;
                }
            }
        }
        out.push(if found {
            CellValue::Number(sum)
        } else {
            CellValue::Missing
        });
    }
}

fn baseline_header(policy: &CurrentPolicy) -> String {
    match policy.carrier_name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => format!("Current: {name}"),
        _ => "Current".to_string(),
    }
}

fn baseline_home_cell(policy: &CurrentPolicy, dwelling: DwellingId, field: HomeField) -> CellValue {
    let value = match (dwelling, field) {
        (DwellingId::One, HomeField::Dwelling) => &policy.home_dwelling,
        (DwellingId::One, HomeField::OtherStructures) => &policy.home_other_structures,
        (DwellingId::One, HomeField::Liability) => &policy.home_liability,
        (DwellingId::One, HomeField::PersonalProperty) => &policy.home_personal_property,
        (DwellingId::One, HomeField::LossOfUse) => &policy.home_loss_of_use,
        (DwellingId::One, HomeField::Deductible) => &policy.home_deductible,
        (DwellingId::Two, HomeField::Dwelling) => &policy.home_2_dwelling,
        (DwellingId::Two, HomeField::OtherStructures) => &policy.home_2_other_structures,
        (DwellingId::Two, HomeField::Liability) => &policy.home_2_liability,
        (DwellingId::Two, HomeField::PersonalProperty) => &policy.home_2_personal_property,
        (DwellingId::Two, HomeField::LossOfUse) => &policy.home_2_loss_of_use,
        (DwellingId::Two, HomeField::Deductible) => &policy.home_2_deductible,
    };
    CellValue::from_coverage(value.as_ref())
}

fn carrier_home_cell(quote: Option<&Quote>, field: HomeField) -> CellValue {
    let Some(quote) = quote else {
        return CellValue::Missing;
    };
    match field {
        HomeField::Dwelling => CellValue::from_coverage(quote.limits.dwelling.as_ref()),
        HomeField::OtherStructures => {
            CellValue::from_coverage(quote.limits.other_structures.as_ref())
        }
        HomeField::Liability => CellValue::from_coverage(quote.limits.personal_liability.as_ref()),
        HomeField::PersonalProperty => {
            CellValue::from_coverage(quote.limits.personal_property.as_ref())
        }
        HomeField::LossOfUse => CellValue::from_coverage(quote.limits.loss_of_use.as_ref()),
        HomeField::Deductible => CellValue::from_amount(quote.deductible),
    }
}

fn baseline_auto_cell(policy: &CurrentPolicy, field: AutoField) -> CellValue {
    match field {
        // Current-policy limits arrive pre-formatted; pass them through.
        AutoField::Limits => match policy.auto_limits.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => CellValue::Text(s.to_string()),
            _ => CellValue::Missing,
        },
        AutoField::UmUim => CellValue::from_coverage(policy.auto_um_uim.as_ref()),
        AutoField::Comprehensive => CellValue::from_coverage(policy.auto_comp_deductible.as_ref()),
        AutoField::Collision => CellValue::from_coverage(policy.auto_collision_deductible.as_ref()),
    }
}

fn carrier_auto_cell(quote: Option<&Quote>, field: AutoField) -> CellValue {
    let Some(quote) = quote else {
        return CellValue::Missing;
    };
    match field {
        AutoField::Limits => auto_limits_cell(&quote.limits),
        AutoField::UmUim => CellValue::from_coverage(quote.limits.um_uim.as_ref()),
        AutoField::Comprehensive => CellValue::from_coverage(quote.limits.comprehensive.as_ref()),
        AutoField::Collision => CellValue::from_amount(quote.deductible),
    }
}

fn baseline_umbrella_cell(policy: &CurrentPolicy, field: UmbrellaField) -> CellValue {
    match field {
        UmbrellaField::Limit => match &policy.umbrella_limits {
            None => CellValue::Missing,
            Some(CoverageValue::Text(s)) => CellValue::Text(s.clone()),
            Some(CoverageValue::Amount(n)) => umbrella_limit_cell(Some(*n)),
        },
        UmbrellaField::Deductible => CellValue::from_coverage(policy.umbrella_deductible.as_ref()),
    }
}

fn carrier_umbrella_cell(quote: Option<&Quote>, field: UmbrellaField) -> CellValue {
    let Some(quote) = quote else {
        return CellValue::Missing;
    };
    match field {
        UmbrellaField::Limit => umbrella_limit_cell(quote.limits.umbrella_limit),
        UmbrellaField::Deductible => CellValue::from_amount(quote.deductible),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness;
    use crate::plan::plan_layout;
    use quotegrid_model::Section;

    fn build(session: &ComparisonSession) -> Grid {
        let plan = plan_layout(session).unwrap();
        build_grid(&plan, session).unwrap()
    }

    #[test]
    fn every_row_is_label_plus_data_columns() {
        let session = harness::multi_dwelling_session();
        let grid = build(&session);
        assert_eq!(grid.rows.len(), 34);
        for row in &grid.rows {
            assert_eq!(row.len(), 5);
        }
    }

    #[test]
    fn title_and_date_sit_in_the_first_data_column() {
        let grid = build(&harness::standard_session());
        assert_eq!(grid.cell(1, 1), Some(&CellValue::Blank));
        assert_eq!(
            grid.cell(1, 2),
            Some(&CellValue::Text("Quote Comparison \u{2014} Avery Shaw".into()))
        );
        assert_eq!(grid.cell(2, 2), Some(&CellValue::Text("June 12, 2025".into())));
    }

    #[test]
    fn carrier_header_lists_baseline_then_carriers() {
        let grid = build(&harness::full_session());
        assert_eq!(grid.cell(3, 1), Some(&CellValue::Text("Premium Breakout".into())));
        assert_eq!(
            grid.cell(3, 2),
            Some(&CellValue::Text("Current: Heritage Insurance".into()))
        );
        assert_eq!(grid.cell(3, 3), Some(&CellValue::Text("Lakeside Mutual".into())));
        assert_eq!(grid.cell(3, 5), Some(&CellValue::Text("Summit Assurance".into())));
    }

    #[test]
    fn missing_premium_is_a_placeholder_not_zero() {
        // Second carrier has no auto quote.
        let grid = build(&harness::standard_session());
        assert_eq!(grid.cell(4, 2), Some(&CellValue::Number(1320.0)));
        assert_eq!(grid.cell(4, 3), Some(&CellValue::Missing));
    }

    #[test]
    fn inactive_section_premium_rows_are_placeholders() {
        // Umbrella is not active in the standard session.
        let grid = build(&harness::standard_session());
        assert_eq!(grid.cell(6, 2), Some(&CellValue::Missing));
        assert_eq!(grid.cell(6, 3), Some(&CellValue::Missing));
    }

    #[test]
    fn totals_sum_resolved_premiums_per_column() {
        let grid = build(&harness::standard_session());
        assert_eq!(grid.cell(7, 2), Some(&CellValue::Number(1890.0 + 1320.0)));
        // Only the home premium resolved for the second carrier.
        assert_eq!(grid.cell(7, 3), Some(&CellValue::Number(2050.0)));
    }

    #[test]
    fn totals_cover_all_active_sections_and_baseline() {
        let grid = build(&harness::full_session());
        assert_eq!(grid.cell(7, 2), Some(&CellValue::Number(2100.0 + 1450.0 + 400.0)));
        assert_eq!(grid.cell(7, 3), Some(&CellValue::Number(1890.0 + 1320.0 + 350.0)));
        assert_eq!(grid.cell(7, 5), Some(&CellValue::Number(1725.0 + 1295.0 + 380.0)));
    }

    #[test]
    fn totals_add_both_dwelling_premiums_under_multi_dwelling() {
        let grid = build(&harness::multi_dwelling_session());
        // Premium rows run Auto, Home 1, Home 2, Umbrella; the total row
        // follows at row 8.
        assert_eq!(grid.config.total_row, 8);
        assert_eq!(
            grid.cell(8, 2),
            Some(&CellValue::Number(1450.0 + 2100.0 + 800.0 + 400.0))
        );
        assert_eq!(
            grid.cell(8, 3),
            Some(&CellValue::Number(1320.0 + 1890.0 + 950.0 + 350.0))
        );
        // Columns without a second-dwelling figure total their remaining
        // premium rows.
        assert!(grid.cell(6, 4).unwrap().is_missing());
        assert_eq!(grid.cell(8, 4), Some(&CellValue::Number(1480.0 + 2050.0 + 420.0)));
        assert_eq!(grid.cell(8, 5), Some(&CellValue::Number(1295.0 + 1725.0 + 380.0)));
    }

    #[test]
    fn total_with_no_resolved_premiums_is_a_placeholder() {
        let session = harness::session(
            &[Section::Home],
            vec![harness::bundle("Empty One"), harness::bundle("Empty Two")],
        );
        let grid = build(&session);
        let total = grid.config.total_row;
        assert_eq!(grid.cell(total, 2), Some(&CellValue::Missing));
        assert_eq!(grid.cell(total, 3), Some(&CellValue::Missing));
    }

    #[test]
    fn auto_limits_synthesize_per_column() {
        let grid = build(&harness::full_session());
        // Row 18 is the auto Limits row in the 25-row layout.
        assert_eq!(grid.cell(18, 1), Some(&CellValue::Text("Limits".into())));
        assert_eq!(grid.cell(18, 2), Some(&CellValue::Text("250/500/100".into())));
        assert_eq!(grid.cell(18, 3), Some(&CellValue::Text("250/500/100".into())));
    }

    #[test]
    fn umbrella_limits_render_by_magnitude_in_any_column() {
        let grid = build(&harness::full_session());
        assert_eq!(grid.cell(24, 2), Some(&CellValue::Text("1M CSL".into())));
        assert_eq!(grid.cell(24, 4), Some(&CellValue::Text("2M CSL".into())));
        assert_eq!(grid.cell(24, 5), Some(&CellValue::Number(500_000.0)));
    }

    #[test]
    fn descriptive_text_demotes_a_currency_row() {
        let mut session = harness::full_session();
        session.carriers[0].home.as_mut().unwrap().limits.loss_of_use =
            Some(CoverageValue::Text("actual loss sustained".into()));
        let grid = build(&session);
        // Loss of Use is row 14 in the 25-row layout.
        assert_eq!(
            grid.cell(14, 3),
            Some(&CellValue::Text("actual loss sustained".into()))
        );
        assert!(!grid.config.currency_rows.contains(&14));
        // The plan said currency before resolution.
        let plan = plan_layout(&session).unwrap();
        assert!(plan.config.currency_rows.contains(&14));
    }

    #[test]
    fn placeholders_do_not_demote_currency_rows() {
        let grid = build(&harness::standard_session());
        // Auto premium row holds a placeholder for the second carrier.
        assert_eq!(grid.cell(4, 3), Some(&CellValue::Missing));
        assert!(grid.config.currency_rows.contains(&4));
    }

    #[test]
    fn second_dwelling_columns_resolve_independently() {
        let session = harness::multi_dwelling_session();
        let grid = build(&session);
        // Home 2 Premium row: baseline and first carrier have figures,
        // the other carriers do not.
        assert_eq!(grid.cell(6, 1), Some(&CellValue::Text("Home 2 Premium".into())));
        assert_eq!(grid.cell(6, 2), Some(&CellValue::Number(800.0)));
        assert_eq!(grid.cell(6, 3), Some(&CellValue::Number(950.0)));
        assert_eq!(grid.cell(6, 4), Some(&CellValue::Missing));
        assert_eq!(grid.cell(6, 5), Some(&CellValue::Missing));
    }

    #[test]
    fn unnamed_baseline_header_falls_back_to_current() {
        let mut session = harness::full_session();
        session.current_policy.as_mut().unwrap().carrier_name = Some("  ".into());
        let grid = build(&session);
        assert_eq!(grid.cell(3, 2), Some(&CellValue::Text("Current".into())));
    }

    #[test]
    fn building_twice_yields_identical_grids() {
        let session = harness::full_session();
        let plan = plan_layout(&session).unwrap();
        let first = build_grid(&plan, &session).unwrap();
        let second = build_grid(&plan, &session).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn plan_built_for_another_session_is_a_column_defect() {
        // Four-column plan, two-column session.
        let plan = plan_layout(&harness::full_session()).unwrap();
        assert!(matches!(
            build_grid(&plan, &harness::standard_session()),
            Err(LayoutError::ColumnCountMismatch { expected: 4, actual: 2 })
        ));
    }
}
