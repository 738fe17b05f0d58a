//! Row planner: session shape in, ordered semantic rows plus grid geometry
//! out. Values are not read here; the plan depends only on which sections
//! are active, carrier count, current-policy presence, and the dwelling
//! flag.

use quotegrid_model::{ComparisonSession, DwellingId, Section, MAX_CARRIERS, MIN_CARRIERS};
use serde::Serialize;

use crate::config::GridConfig;
use crate::error::LayoutError;
use crate::range::RowSpan;
use crate::row::{PlannedRow, RowKind, ValueSource};
use crate::sections::{
    dwelling_premium_label, premium_label, section_title, AUTO_ROWS, HOME_ROWS, PREMIUM_ORDER,
    UMBRELLA_ROWS,
};

/// Planner output: the ordered rows and the geometry collected alongside.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPlan {
    pub rows: Vec<PlannedRow>,
    pub config: GridConfig,
}

pub fn plan_layout(session: &ComparisonSession) -> Result<LayoutPlan, LayoutError> {
    let carrier_count = session.carriers.len();
    if !(MIN_CARRIERS..=MAX_CARRIERS).contains(&carrier_count) {
        return Err(LayoutError::CarrierCount(carrier_count));
    }

    let multi = session.multi_dwelling();
    let mut plan = PlanBuilder::new(
        session.data_columns() as u32,
        session.current_policy.is_some(),
        multi,
    );

    plan.title(format!("Quote Comparison \u{2014} {}", session.client_name));
    plan.date_line(session.date.format("%B %-d, %Y").to_string());
    plan.carrier_header("Premium Breakout");

    // Premium breakout: every section gets a premium row whether or not it
    // is active; inactive sections resolve to placeholders there. Only the
    // coverage blocks below collapse.
    let premium_start = plan.next_row();
    for section in PREMIUM_ORDER {
        if section == Section::Home && multi {
            for dwelling in [DwellingId::One, DwellingId::Two] {
                plan.premium(
                    dwelling_premium_label(dwelling),
                    ValueSource::DwellingPremium(dwelling),
                );
            }
        } else {
            plan.premium(premium_label(section), ValueSource::SectionPremium(section));
        }
    }
    plan.total("Total");
    plan.close_block(premium_start);

    for section in session.active_sections() {
        plan.blank();
        plan.header(section_title(section));
        match section {
            Section::Home if multi => {
                for dwelling in [DwellingId::One, DwellingId::Two] {
                    plan.sub_header(dwelling.label());
                    let start = plan.next_row();
                    for spec in HOME_ROWS {
                        plan.data(spec.label, ValueSource::Home(dwelling, spec.field), spec.currency);
                    }
                    plan.close_block(start);
                }
            }
            Section::Home => {
                let start = plan.next_row();
                for spec in HOME_ROWS {
                    plan.data(
                        spec.label,
                        ValueSource::Home(DwellingId::One, spec.field),
                        spec.currency,
                    );
                }
                plan.close_block(start);
            }
            Section::Auto => {
                let start = plan.next_row();
                for spec in AUTO_ROWS {
                    plan.data(spec.label, ValueSource::Auto(spec.field), spec.currency);
                }
                plan.close_block(start);
            }
            Section::Umbrella => {
                let start = plan.next_row();
                for spec in UMBRELLA_ROWS {
                    plan.data(spec.label, ValueSource::Umbrella(spec.field), spec.currency);
                }
                plan.close_block(start);
            }
        }
    }

    Ok(plan.finish())
}

// ---------------------------------------------------------------------------
// Cursor builder
// ---------------------------------------------------------------------------

/// Appends rows and records geometry in one pass. Row positions exist in
/// exactly one place: the cursor.
struct PlanBuilder {
    rows: Vec<PlannedRow>,
    config: GridConfig,
    blocks: Vec<RowSpan>,
}

impl PlanBuilder {
    fn new(data_columns: u32, has_current_policy: bool, multi_dwelling: bool) -> Self {
        Self {
            rows: Vec::new(),
            config: GridConfig::new(data_columns, has_current_policy, multi_dwelling),
            blocks: Vec::new(),
        }
    }

    /// Row number the next push lands on.
    fn next_row(&self) -> u32 {
        self.rows.len() as u32 + 1
    }

    fn push(&mut self, kind: RowKind, label: impl Into<String>, source: ValueSource) -> u32 {
        let index = self.next_row();
        self.rows.push(PlannedRow {
            index,
            kind,
            label: label.into(),
            source,
        });
        index
    }

    fn title(&mut self, label: String) {
        let row = self.push(RowKind::Title, label, ValueSource::None);
        self.config.title_row = row;
        self.config.header_rows.push(row);
    }

    fn date_line(&mut self, label: String) {
        self.config.date_row = self.push(RowKind::DateLine, label, ValueSource::None);
    }

    fn carrier_header(&mut self, label: &str) {
        let row = self.push(RowKind::SectionHeader, label, ValueSource::CarrierNames);
        self.config.header_rows.push(row);
        self.config.first_boxed_row = row;
    }

    fn header(&mut self, label: &'static str) {
        let row = self.push(RowKind::SectionHeader, label, ValueSource::None);
        self.config.header_rows.push(row);
    }

    fn sub_header(&mut self, label: &'static str) {
        let row = self.push(RowKind::SubHeader, label, ValueSource::None);
        self.config.sub_header_rows.push(row);
    }

    fn premium(&mut self, label: &'static str, source: ValueSource) {
        let row = self.push(RowKind::PremiumRow, label, source);
        if self.config.first_data_row == 0 {
            self.config.first_data_row = row;
        }
        self.config.premium_rows.push(row);
        self.config.currency_rows.push(row);
    }

    fn total(&mut self, label: &'static str) {
        let row = self.push(RowKind::TotalRow, label, ValueSource::Total);
        self.config.total_row = row;
        self.config.currency_rows.push(row);
    }

    fn data(&mut self, label: &'static str, source: ValueSource, currency: bool) {
        let row = self.push(RowKind::DataRow, label, source);
        if currency {
            self.config.currency_rows.push(row);
        }
    }

    fn blank(&mut self) {
        self.push(RowKind::Blank, "", ValueSource::None);
    }

    /// Record a contiguous data block from `start` through the last pushed
    /// row. Blocks drive row striping and the baseline column tint.
    fn close_block(&mut self, start: u32) {
        let end = self.rows.len() as u32;
        debug_assert!(start >= 1 && start <= end);
        self.blocks.push(RowSpan::new(start, end));
    }

    fn finish(mut self) -> LayoutPlan {
        self.config.total_rows = self.rows.len() as u32;
        // Stripe every other row, restarting the alternation in each block.
        for span in &self.blocks {
            let mut row = span.start;
            while row <= span.end {
                self.config.shaded_rows.push(row);
                row += 2;
            }
        }
        self.config.baseline_spans = self.blocks;
        LayoutPlan {
            rows: self.rows,
            config: self.config,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
