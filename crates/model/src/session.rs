use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::bundle::CarrierBundle;
use crate::current::CurrentPolicy;
use crate::error::SessionError;
use crate::section::Section;

/// Carrier bundle count bounds for one comparison.
pub const MIN_CARRIERS: usize = 2;
pub const MAX_CARRIERS: usize = 6;

/// A fully assembled comparison: everything the layout engine reads.
///
/// Serializes both ways so the review step can round-trip a session through
/// an editable document before layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSession {
    pub client_name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub current_policy: Option<CurrentPolicy>,
    pub carriers: Vec<CarrierBundle>,
    pub sections: Vec<Section>,
    #[serde(default)]
    pub agent_notes: Option<String>,
}

impl ComparisonSession {
    /// Parse a session from JSON and run structural validation.
    pub fn from_json(input: &str) -> Result<Self, SessionError> {
        let session: ComparisonSession =
            serde_json::from_str(input).map_err(|e| SessionError::Parse(e.to_string()))?;
        session.validate()?;
        Ok(session)
    }

    /// Structural checks. Failures here are defects in the assembled
    /// session, not missing data; layout refuses to run on them.
    pub fn validate(&self) -> Result<(), SessionError> {
        let n = self.carriers.len();
        if !(MIN_CARRIERS..=MAX_CARRIERS).contains(&n) {
            return Err(SessionError::CarrierCount(n));
        }
        for (index, bundle) in self.carriers.iter().enumerate() {
            if bundle.carrier_name.trim().is_empty() {
                return Err(SessionError::MissingCarrierName(index));
            }
        }
        let mut seen: Vec<Section> = Vec::new();
        for &section in &self.sections {
            if seen.contains(&section) {
                return Err(SessionError::DuplicateSection(section));
            }
            seen.push(section);
        }
        Ok(())
    }

    pub fn has_section(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }

    /// Active sections in canonical order, whatever order the input listed.
    pub fn active_sections(&self) -> Vec<Section> {
        Section::ALL
            .iter()
            .copied()
            .filter(|s| self.has_section(*s))
            .collect()
    }

    /// True when the comparison spans a second dwelling: home is active and
    /// either the current policy or any carrier carries second-home data.
    pub fn multi_dwelling(&self) -> bool {
        if !self.has_section(Section::Home) {
            return false;
        }
        let current = self
            .current_policy
            .as_ref()
            .map_or(false, |p| p.has_second_dwelling());
        current || self.carriers.iter().any(|b| b.home_2.is_some())
    }

    /// One data column per carrier, plus the leading baseline column when a
    /// current policy is present.
    pub fn data_columns(&self) -> usize {
        self.carriers.len() + usize::from(self.current_policy.is_some())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CARRIER_SESSION: &str = r#"{
        "client_name": "Sample Client",
        "date": "2025-06-12",
        "current_policy": {
            "carrier_name": "Legacy Mutual",
            "home_premium": 2100.0,
            "auto_premium": 1450.0,
            "auto_limits": "500/500/250"
        },
        "carriers": [
            {
                "carrier_name": "Carrier A",
                "home": { "annual_premium": 1890.0, "deductible": 1000.0 },
                "auto": { "annual_premium": 1320.0 }
            },
            {
                "carrier_name": "Carrier B",
                "home": { "annual_premium": 2050.0 }
            }
        ],
        "sections": ["home", "auto"]
    }"#;

    #[test]
    fn parse_valid_session() {
        let session = ComparisonSession::from_json(TWO_CARRIER_SESSION).unwrap();
        assert_eq!(session.client_name, "Sample Client");
        assert_eq!(session.date.to_string(), "2025-06-12");
        assert_eq!(session.carriers.len(), 2);
        assert_eq!(session.sections, vec![Section::Home, Section::Auto]);
        assert!(session.current_policy.is_some());
        assert_eq!(session.data_columns(), 3);
        assert!(!session.multi_dwelling());
    }

    #[test]
    fn sections_normalize_to_canonical_order() {
        let input = TWO_CARRIER_SESSION.replace(
            r#""sections": ["home", "auto"]"#,
            r#""sections": ["auto", "home"]"#,
        );
        let session = ComparisonSession::from_json(&input).unwrap();
        assert_eq!(session.active_sections(), vec![Section::Home, Section::Auto]);
    }

    #[test]
    fn reject_single_carrier() {
        let input = r#"{
            "client_name": "X",
            "date": "2025-06-12",
            "carriers": [{ "carrier_name": "Only One" }],
            "sections": ["home"]
        }"#;
        let err = ComparisonSession::from_json(input).unwrap_err();
        assert!(matches!(err, SessionError::CarrierCount(1)));
    }

    #[test]
    fn reject_blank_carrier_name() {
        let input = r#"{
            "client_name": "X",
            "date": "2025-06-12",
            "carriers": [
                { "carrier_name": "Named" },
                { "carrier_name": "  " }
            ],
            "sections": ["home"]
        }"#;
        let err = ComparisonSession::from_json(input).unwrap_err();
        assert!(matches!(err, SessionError::MissingCarrierName(1)));
    }

    #[test]
    fn reject_duplicate_section() {
        let input = TWO_CARRIER_SESSION.replace(
            r#""sections": ["home", "auto"]"#,
            r#""sections": ["home", "home"]"#,
        );
        let err = ComparisonSession::from_json(&input).unwrap_err();
        assert!(matches!(err, SessionError::DuplicateSection(Section::Home)));
    }

    #[test]
    fn carrier_home_2_marks_multi_dwelling() {
        let input = TWO_CARRIER_SESSION.replace(
            r#""home": { "annual_premium": 2050.0 }"#,
            r#""home": { "annual_premium": 2050.0 }, "home_2": { "annual_premium": 900.0 }"#,
        );
        let session = ComparisonSession::from_json(&input).unwrap();
        assert!(session.multi_dwelling());
    }

    #[test]
    fn multi_dwelling_requires_active_home() {
        let input = TWO_CARRIER_SESSION
            .replace(
                r#""home": { "annual_premium": 2050.0 }"#,
                r#""home": { "annual_premium": 2050.0 }, "home_2": { "annual_premium": 900.0 }"#,
            )
            .replace(r#""sections": ["home", "auto"]"#, r#""sections": ["auto"]"#);
        let session = ComparisonSession::from_json(&input).unwrap();
        assert!(!session.multi_dwelling());
    }

    #[test]
    fn session_round_trips_through_json() {
        let session = ComparisonSession::from_json(TWO_CARRIER_SESSION).unwrap();
        let json = serde_json::to_string(&session).unwrap();
        let back = ComparisonSession::from_json(&json).unwrap();
        assert_eq!(session, back);
    }
}
