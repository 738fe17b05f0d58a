use serde::{Deserialize, Serialize};

use crate::section::{DwellingId, Section};
use crate::value::CoverageValue;

/// The client's in-force coverage, flattened to the figures the comparison
/// renders. Kept flat on purpose: current-policy dec pages arrive as loose
/// figures, not structured quotes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentPolicy {
    pub carrier_name: Option<String>,

    // Home (primary dwelling)
    pub home_premium: Option<f64>,
    pub home_dwelling: Option<CoverageValue>,
    pub home_other_structures: Option<CoverageValue>,
    pub home_personal_property: Option<CoverageValue>,
    pub home_loss_of_use: Option<CoverageValue>,
    pub home_liability: Option<CoverageValue>,
    pub home_deductible: Option<CoverageValue>,

    // Home (second dwelling)
    pub home_2_premium: Option<f64>,
    pub home_2_dwelling: Option<CoverageValue>,
    pub home_2_other_structures: Option<CoverageValue>,
    pub home_2_personal_property: Option<CoverageValue>,
    pub home_2_loss_of_use: Option<CoverageValue>,
    pub home_2_liability: Option<CoverageValue>,
    pub home_2_deductible: Option<CoverageValue>,

    // Auto. Limits arrive pre-formatted on dec pages ("500/500/250",
    // "1M CSL"), so they stay a display string.
    pub auto_premium: Option<f64>,
    pub auto_limits: Option<String>,
    pub auto_um_uim: Option<CoverageValue>,
    pub auto_comp_deductible: Option<CoverageValue>,
    pub auto_collision_deductible: Option<CoverageValue>,

    // Umbrella
    pub umbrella_premium: Option<f64>,
    pub umbrella_limits: Option<CoverageValue>,
    pub umbrella_deductible: Option<CoverageValue>,
}

impl CurrentPolicy {
    /// Section premium as a single figure. For home this is the primary
    /// dwelling; multi-dwelling layouts read per-dwelling premiums instead.
    pub fn premium(&self, section: Section) -> Option<f64> {
        match section {
            Section::Home => self.home_premium,
            Section::Auto => self.auto_premium,
            Section::Umbrella => self.umbrella_premium,
        }
    }

    pub fn dwelling_premium(&self, dwelling: DwellingId) -> Option<f64> {
        match dwelling {
            DwellingId::One => self.home_premium,
            DwellingId::Two => self.home_2_premium,
        }
    }

    /// True when any second-dwelling figure is populated.
    pub fn has_second_dwelling(&self) -> bool {
        self.home_2_premium.is_some()
            || self.home_2_dwelling.is_some()
            || self.home_2_other_structures.is_some()
            || self.home_2_personal_property.is_some()
            || self.home_2_loss_of_use.is_some()
            || self.home_2_liability.is_some()
            || self.home_2_deductible.is_some()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
