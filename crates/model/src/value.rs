use serde::{Deserialize, Serialize};

/// A coverage figure as extracted: either a dollar amount or a descriptive
/// string ("actual loss sustained", "500/500").
///
/// Untagged: JSON numbers deserialize as `Amount`, strings as `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoverageValue {
    Amount(f64),
    Text(String),
}

impl CoverageValue {
    pub fn as_amount(&self) -> Option<f64> {
        match self {
            Self::Amount(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_parses_as_amount() {
        let v: CoverageValue = serde_json::from_str("350000").unwrap();
        assert_eq!(v, CoverageValue::Amount(350000.0));
        assert_eq!(v.as_amount(), Some(350000.0));
    }

    #[test]
    fn string_parses_as_text() {
        let v: CoverageValue = serde_json::from_str(r#""actual loss sustained""#).unwrap();
        assert_eq!(v, CoverageValue::Text("actual loss sustained".into()));
        assert!(v.is_text());
        assert_eq!(v.as_amount(), None);
    }

    #[test]
    fn amount_serializes_as_bare_number() {
        let json = serde_json::to_string(&CoverageValue::Amount(1500.0)).unwrap();
        assert_eq!(json, "1500.0");
    }
}
