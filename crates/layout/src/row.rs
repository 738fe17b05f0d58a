use quotegrid_model::{DwellingId, Section};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Semantic row classes
// ---------------------------------------------------------------------------

/// Semantic class of one planned row. Every formatting decision derives
/// from these tags and the grid geometry, never from cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Title,
    DateLine,
    SectionHeader,
    SubHeader,
    PremiumRow,
    DataRow,
    Blank,
    TotalRow,
}

// ---------------------------------------------------------------------------
// Value sources
// ---------------------------------------------------------------------------

/// Which home figure a data row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeField {
    Dwelling,
    OtherStructures,
    Liability,
    PersonalProperty,
    LossOfUse,
    Deductible,
}

/// Which auto figure a data row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoField {
    Limits,
    UmUim,
    Comprehensive,
    Collision,
}

/// Which umbrella figure a data row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UmbrellaField {
    Limit,
    Deductible,
}

/// Where a row's data cells come from. A closed accessor set rather than
/// callbacks, so plans stay serializable and comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "field", rename_all = "snake_case")]
pub enum ValueSource {
    /// Label-only or spacer row; data cells stay blank.
    None,
    /// Carrier display names across the data columns.
    CarrierNames,
    /// Annual premium for one section.
    SectionPremium(Section),
    /// Annual premium for one home dwelling (multi-dwelling layouts).
    DwellingPremium(DwellingId),
    /// Per-column sum of the premium rows above, recomputed from the grid.
    Total,
    Home(DwellingId, HomeField),
    Auto(AutoField),
    Umbrella(UmbrellaField),
}

// ---------------------------------------------------------------------------
// Planned row
// ---------------------------------------------------------------------------

/// One row of the layout plan: position, semantic tag, label text, and
/// where its data cells come from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedRow {
    /// 1-based row number.
    pub index: u32,
    pub kind: RowKind,
    pub label: String,
    pub source: ValueSource,
}
