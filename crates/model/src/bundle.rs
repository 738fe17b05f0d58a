use serde::{Deserialize, Serialize};

use crate::quote::Quote;
use crate::section::{DwellingId, Section};

/// Everything one carrier offered in the comparison. Each section is
/// optional; a bundle usually covers a subset of the session's sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierBundle {
    pub carrier_name: String,
    #[serde(default)]
    pub home: Option<Quote>,
    /// Second-dwelling home quote, present only in multi-dwelling sessions.
    #[serde(default)]
    pub home_2: Option<Quote>,
    #[serde(default)]
    pub auto: Option<Quote>,
    #[serde(default)]
    pub umbrella: Option<Quote>,
}

impl CarrierBundle {
    pub fn quote(&self, section: Section) -> Option<&Quote> {
        match section {
            Section::Home => self.home.as_ref(),
            Section::Auto => self.auto.as_ref(),
            Section::Umbrella => self.umbrella.as_ref(),
        }
    }

    pub fn home_quote(&self, dwelling: DwellingId) -> Option<&Quote> {
        match dwelling {
            DwellingId::One => self.home.as_ref(),
            DwellingId::Two => self.home_2.as_ref(),
        }
    }
}
