use serde::{Serialize, Serializer};

use quotegrid_model::{CoverageLimits, CoverageValue};

/// Placeholder text for figures the session doesn't have.
pub const PLACEHOLDER: &str = "-";

// ---------------------------------------------------------------------------
// Cell values
// ---------------------------------------------------------------------------

/// One grid cell as the builder resolved it.
///
/// `Missing` marks data the session doesn't carry and renders as the
/// placeholder; `Blank` is structural emptiness (spacers, padding). The
/// two are distinct variants and never conflated.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Blank,
    Missing,
    Text(String),
    Number(f64),
}

impl CellValue {
    /// Resolve an optional dollar figure.
    pub fn from_amount(value: Option<f64>) -> Self {
        value.map_or(Self::Missing, Self::Number)
    }

    /// Resolve an optional extracted figure, text passing through verbatim.
    pub fn from_coverage(value: Option<&CoverageValue>) -> Self {
        match value {
            None => Self::Missing,
            Some(CoverageValue::Amount(n)) => Self::Number(*n),
            Some(CoverageValue::Text(s)) => Self::Text(s.clone()),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

// Serialized the way the grid is written: blanks as empty strings, missing
// figures as the placeholder, numbers raw (display formatting is the format
// plan's job).
impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Blank => serializer.serialize_str(""),
            Self::Missing => serializer.serialize_str(PLACEHOLDER),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Number(n) => serializer.serialize_f64(*n),
        }
    }
}

// ---------------------------------------------------------------------------
// Limit synthesis
// ---------------------------------------------------------------------------

/// Auto liability limits as one display string: "250/500/100" from split
/// figures (thousands), else "1M CSL" / "250K CSL" from a combined single
/// limit. Split figures win when both were extracted.
pub fn auto_limits_cell(limits: &CoverageLimits) -> CellValue {
    if let (Some(bi_person), Some(bi_accident), Some(pd_accident)) = (
        limits.bi_per_person,
        limits.bi_per_accident,
        limits.pd_per_accident,
    ) {
        if limits.csl.is_some() {
            log::warn!("auto limits carry both split figures and a CSL, using split");
        }
        return CellValue::Text(format!(
            "{}/{}/{}",
            (bi_person / 1000.0) as i64,
            (bi_accident / 1000.0) as i64,
            (pd_accident / 1000.0) as i64
        ));
    }

    if let Some(csl) = limits.csl {
        let text = if csl >= 1_000_000.0 {
            format!("{}M CSL", (csl / 1_000_000.0) as i64)
        } else {
            format!("{}K CSL", (csl / 1000.0) as i64)
        };
        return CellValue::Text(text);
    }

    log::debug!("auto limits: neither split figures nor a CSL extracted");
    CellValue::Missing
}

/// Umbrella limits at or above $1M render as "NM CSL"; smaller figures
/// stay numeric.
pub fn umbrella_limit_cell(limit: Option<f64>) -> CellValue {
    match limit {
        None => CellValue::Missing,
        Some(v) if v >= 1_000_000.0 => CellValue::Text(format!("{}M CSL", (v / 1_000_000.0) as i64)),
        Some(v) => CellValue::Number(v),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
