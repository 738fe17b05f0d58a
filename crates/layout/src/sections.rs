//! Row tables for the closed set of coverage sections.
//!
//! Supporting a new section variant is a table edit here plus a model
//! enum variant; the planner and builder iterate whatever these declare.

use quotegrid_model::{DwellingId, Section};

use crate::row::{AutoField, HomeField, UmbrellaField};

/// One coverage data row: its label, which figure fills it, and whether it
/// takes currency formatting (descriptive text in the built grid can still
/// demote it).
#[derive(Debug, Clone, Copy)]
pub struct RowSpec<F: 'static> {
    pub label: &'static str,
    pub field: F,
    pub currency: bool,
}

/// Premium breakout order. Coverage blocks below use `Section::ALL` order
/// instead; the breakout historically leads with auto.
pub const PREMIUM_ORDER: [Section; 3] = [Section::Auto, Section::Home, Section::Umbrella];

pub const HOME_ROWS: [RowSpec<HomeField>; 6] = [
    RowSpec { label: "Dwelling", field: HomeField::Dwelling, currency: true },
    RowSpec { label: "Other Structures", field: HomeField::OtherStructures, currency: true },
    RowSpec { label: "Liability", field: HomeField::Liability, currency: true },
    RowSpec { label: "Personal Property", field: HomeField::PersonalProperty, currency: true },
    RowSpec { label: "Loss of Use", field: HomeField::LossOfUse, currency: true },
    RowSpec { label: "Deductible", field: HomeField::Deductible, currency: true },
];

pub const AUTO_ROWS: [RowSpec<AutoField>; 4] = [
    RowSpec { label: "Limits", field: AutoField::Limits, currency: false },
    RowSpec { label: "UM/UIM", field: AutoField::UmUim, currency: false },
    RowSpec { label: "Comprehensive", field: AutoField::Comprehensive, currency: false },
    RowSpec { label: "Collision", field: AutoField::Collision, currency: false },
];

pub const UMBRELLA_ROWS: [RowSpec<UmbrellaField>; 2] = [
    RowSpec { label: "Limits", field: UmbrellaField::Limit, currency: false },
    RowSpec { label: "Deductible", field: UmbrellaField::Deductible, currency: false },
];

/// Coverage block banner text.
pub fn section_title(section: Section) -> &'static str {
    match section {
        Section::Home => "Home Coverage",
        Section::Auto => "Auto Coverage",
        Section::Umbrella => "Umbrella Coverage",
    }
}

/// Premium row label for single-figure sections.
pub fn premium_label(section: Section) -> &'static str {
    match section {
        Section::Home => "Home Premium",
        Section::Auto => "Auto Premium",
        Section::Umbrella => "Umbrella Premium",
    }
}

/// Premium row label when home splits into dwellings.
pub fn dwelling_premium_label(dwelling: DwellingId) -> &'static str {
    match dwelling {
        DwellingId::One => "Home 1 Premium",
        DwellingId::Two => "Home 2 Premium",
    }
}
