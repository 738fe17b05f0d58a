use serde::Serialize;

use crate::range::{GridRange, RowSpan};

/// Layout geometry collected while the planner walks its cursor. Row
/// numbers are 1-based; every list is in ascending row order because rows
/// are recorded as they are planned.
///
/// The grid builder finalizes `currency_rows` (descriptive text demotes a
/// row); everything else is fixed by the plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridConfig {
    pub total_rows: u32,
    /// Data columns: one per carrier, plus the baseline column when a
    /// current policy is present. The label column is extra.
    pub data_columns: u32,
    pub has_current_policy: bool,
    pub multi_dwelling: bool,
    pub title_row: u32,
    pub date_row: u32,
    /// Banner rows: title, carrier names, coverage section headers.
    pub header_rows: Vec<u32>,
    /// Dwelling sub-banners (multi-dwelling layouts only).
    pub sub_header_rows: Vec<u32>,
    pub premium_rows: Vec<u32>,
    pub total_row: u32,
    /// Rows whose data cells take currency formatting.
    pub currency_rows: Vec<u32>,
    /// Alternating fill rows; alternation restarts at each data block.
    pub shaded_rows: Vec<u32>,
    /// One span per contiguous data block, for the baseline column tint.
    /// Populated whether or not a current policy is present; the format
    /// planner checks `has_current_policy`.
    pub baseline_spans: Vec<RowSpan>,
    /// First row inside the bordered box (the carrier names row).
    pub first_boxed_row: u32,
    /// First value row (the first premium row).
    pub first_data_row: u32,
}

impl GridConfig {
    pub fn new(data_columns: u32, has_current_policy: bool, multi_dwelling: bool) -> Self {
        Self {
            total_rows: 0,
            data_columns,
            has_current_policy,
            multi_dwelling,
            title_row: 0,
            date_row: 0,
            header_rows: Vec::new(),
            sub_header_rows: Vec::new(),
            premium_rows: Vec::new(),
            total_row: 0,
            currency_rows: Vec::new(),
            shaded_rows: Vec::new(),
            baseline_spans: Vec::new(),
            first_boxed_row: 0,
            first_data_row: 0,
        }
    }

    /// Total column count including the label column.
    pub fn columns(&self) -> u32 {
        self.data_columns + 1
    }

    pub fn is_currency_row(&self, row: u32) -> bool {
        self.currency_rows.contains(&row)
    }

    /// Drop a row from currency formatting. The grid builder calls this
    /// when a descriptive string lands in the row's data cells.
    pub fn demote_currency_row(&mut self, row: u32) {
        self.currency_rows.retain(|&r| r != row);
    }

    // ---- Derived ranges ---------------------------------------------------

    /// Logo block: label column cells of the title and date rows.
    pub fn logo_range(&self) -> GridRange {
        GridRange::column(1, self.title_row, self.date_row)
    }

    /// Title text span, merged across the data columns.
    pub fn title_range(&self) -> GridRange {
        GridRange::row(self.title_row, 2, self.columns())
    }

    /// Boxed table region: carrier names row through the last row.
    pub fn border_range(&self) -> GridRange {
        GridRange::new(self.first_boxed_row, 1, self.total_rows, self.columns())
    }

    /// Data cells that center-align: value rows, data columns.
    pub fn data_align_range(&self) -> GridRange {
        GridRange::new(self.first_data_row, 2, self.total_rows, self.columns())
    }

    /// Label cells that left-align.
    pub fn label_align_range(&self) -> GridRange {
        GridRange::column(1, self.first_data_row, self.total_rows)
    }
}
