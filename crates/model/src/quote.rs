use serde::{Deserialize, Serialize};

use crate::value::CoverageValue;

// ---------------------------------------------------------------------------
// Confidence
// ---------------------------------------------------------------------------

/// Extraction confidence reported by the upstream pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Default for Confidence {
    fn default() -> Self {
        Self::Low
    }
}

// ---------------------------------------------------------------------------
// Coverage limits
// ---------------------------------------------------------------------------

/// Per-line coverage figures as extracted. Everything is optional: a dec
/// page that doesn't state a figure leaves the field unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageLimits {
    // Home
    pub dwelling: Option<CoverageValue>,
    pub other_structures: Option<CoverageValue>,
    pub personal_property: Option<CoverageValue>,
    pub loss_of_use: Option<CoverageValue>,
    pub personal_liability: Option<CoverageValue>,
    pub medical_payments: Option<CoverageValue>,

    // Auto. Split liability and CSL are both carried; rendering decides
    // which one to show.
    pub bi_per_person: Option<f64>,
    pub bi_per_accident: Option<f64>,
    pub pd_per_accident: Option<f64>,
    pub csl: Option<f64>,
    pub um_uim: Option<CoverageValue>,
    pub comprehensive: Option<CoverageValue>,
    pub collision: Option<CoverageValue>,

    // Umbrella
    pub umbrella_limit: Option<f64>,
}

impl CoverageLimits {
    /// True when both the split BI/PD figures and a CSL were extracted for
    /// the same quote.
    pub fn has_conflicting_auto_limits(&self) -> bool {
        self.has_split_limits() && self.csl.is_some()
    }

    pub fn has_split_limits(&self) -> bool {
        self.bi_per_person.is_some() && self.bi_per_accident.is_some() && self.pd_per_accident.is_some()
    }

    /// Named numeric figures that are present, for validation sweeps.
    pub fn present_amounts(&self) -> Vec<(&'static str, f64)> {
        let named = [
            ("dwelling", &self.dwelling),
            ("other_structures", &self.other_structures),
            ("personal_property", &self.personal_property),
            ("loss_of_use", &self.loss_of_use),
            ("personal_liability", &self.personal_liability),
            ("medical_payments", &self.medical_payments),
            ("um_uim", &self.um_uim),
            ("comprehensive", &self.comprehensive),
            ("collision", &self.collision),
        ];
        let mut out = Vec::new();
        for (name, value) in named {
            if let Some(CoverageValue::Amount(n)) = value {
                out.push((name, *n));
            }
        }
        if let Some(n) = self.bi_per_person {
            out.push(("bi_per_person", n));
        }
        if let Some(n) = self.bi_per_accident {
            out.push(("bi_per_accident", n));
        }
        if let Some(n) = self.pd_per_accident {
            out.push(("pd_per_accident", n));
        }
        if let Some(n) = self.csl {
            out.push(("csl", n));
        }
        if let Some(n) = self.umbrella_limit {
            out.push(("umbrella_limit", n));
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Quote
// ---------------------------------------------------------------------------

/// One carrier's quote for a single section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Annual premium in dollars. `None` when extraction found no figure;
    /// the comparison renders a placeholder there, never zero.
    #[serde(default)]
    pub annual_premium: Option<f64>,
    #[serde(default)]
    pub deductible: Option<f64>,
    #[serde(default)]
    pub wind_hail_deductible: Option<f64>,
    #[serde(default)]
    pub limits: CoverageLimits,
    #[serde(default)]
    pub endorsements: Vec<String>,
    #[serde(default)]
    pub confidence: Confidence,
    #[serde(default)]
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
