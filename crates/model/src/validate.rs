//! Advisory checks on an assembled session.
//!
//! Everything here is a warning. Extraction output gets human review before
//! layout, so suspicious figures are flagged for that review, never
//! rejected. Structural problems are `SessionError`s, not warnings.

use crate::quote::{Confidence, Quote};
use crate::section::Section;
use crate::session::ComparisonSession;

/// Deductibles commonly seen on dec pages. Anything else is worth a second
/// look during review.
const STANDARD_DEDUCTIBLES: [f64; 6] = [250.0, 500.0, 1000.0, 2500.0, 5000.0, 10_000.0];

/// Annual premiums at or above this are usually an extraction slip
/// (a limit read as a premium).
const PREMIUM_CEILING: f64 = 50_000.0;

pub fn session_warnings(session: &ComparisonSession) -> Vec<String> {
    let mut warnings = Vec::new();

    if session.sections.is_empty() {
        warnings.push("no sections selected; the comparison will be placeholders only".to_string());
    }

    for bundle in &session.carriers {
        for section in Section::ALL {
            if let Some(quote) = bundle.quote(section) {
                if !session.has_section(section) {
                    warnings.push(format!(
                        "{}: {} quote present but the {} section is not included",
                        bundle.carrier_name, section, section
                    ));
                }
                quote_warnings(&format!("{}/{}", bundle.carrier_name, section), quote, &mut warnings);
            }
        }
        if let Some(quote) = &bundle.home_2 {
            if !session.has_section(Section::Home) {
                warnings.push(format!(
                    "{}: second-dwelling quote present but the home section is not included",
                    bundle.carrier_name
                ));
            }
            quote_warnings(&format!("{}/home 2", bundle.carrier_name), quote, &mut warnings);
        }
    }

    if let Some(policy) = &session.current_policy {
        let premiums = [
            ("current policy home premium", policy.home_premium),
            ("current policy second-dwelling premium", policy.home_2_premium),
            ("current policy auto premium", policy.auto_premium),
            ("current policy umbrella premium", policy.umbrella_premium),
        ];
        for (label, premium) in premiums {
            if let Some(p) = premium {
                if p <= 0.0 {
                    warnings.push(format!("{label} {p} is not positive"));
                } else if p >= PREMIUM_CEILING {
                    warnings.push(format!("{label} {p} looks too large"));
                }
            }
        }
        if policy.has_second_dwelling() && !session.has_section(Section::Home) {
            warnings.push(
                "current policy has second-dwelling figures but the home section is not included"
                    .to_string(),
            );
        }
    }

    warnings
}

fn quote_warnings(context: &str, quote: &Quote, warnings: &mut Vec<String>) {
    match quote.annual_premium {
        None => warnings.push(format!("{context}: no annual premium extracted")),
        Some(p) if p <= 0.0 => {
            warnings.push(format!("{context}: annual premium {p} is not positive"))
        }
        Some(p) if p >= PREMIUM_CEILING => {
            warnings.push(format!("{context}: annual premium {p} looks too large"))
        }
        Some(_) => {}
    }

    if let Some(d) = quote.deductible {
        if !STANDARD_DEDUCTIBLES.contains(&d) {
            warnings.push(format!("{context}: non-standard deductible {d}"));
        }
    }

    for (name, amount) in quote.limits.present_amounts() {
        if amount <= 0.0 {
            warnings.push(format!("{context}: {name} limit {amount} is not positive"));
        }
    }

    if quote.limits.has_conflicting_auto_limits() {
        warnings.push(format!(
            "{context}: both split liability limits and a CSL were extracted"
        ));
    }

    if quote.confidence == Confidence::Low {
        warnings.push(format!("{context}: low extraction confidence"));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::CarrierBundle;
    use crate::quote::CoverageLimits;
    use chrono::NaiveDate;

    fn quote(premium: f64) -> Quote {
        Quote {
            annual_premium: Some(premium),
            deductible: None,
            wind_hail_deductible: None,
            limits: CoverageLimits::default(),
            endorsements: Vec::new(),
            confidence: Confidence::High,
            notes: None,
        }
    }

    fn session(carriers: Vec<CarrierBundle>, sections: Vec<Section>) -> ComparisonSession {
        ComparisonSession {
            client_name: "Test".into(),
            date: NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
            current_policy: None,
            carriers,
            sections,
            agent_notes: None,
        }
    }

    fn bundle(name: &str, home: Option<Quote>) -> CarrierBundle {
        CarrierBundle {
            carrier_name: name.into(),
            home,
            home_2: None,
            auto: None,
            umbrella: None,
        }
    }

    #[test]
    fn clean_session_yields_no_warnings() {
        let s = session(
            vec![
                bundle("A", Some(quote(1800.0))),
                bundle("B", Some(quote(2100.0))),
            ],
            vec![Section::Home],
        );
        assert!(session_warnings(&s).is_empty());
    }

    #[test]
    fn missing_premium_is_flagged() {
        let mut q = quote(0.0);
        q.annual_premium = None;
        let s = session(
            vec![bundle("A", Some(q)), bundle("B", Some(quote(2100.0)))],
            vec![Section::Home],
        );
        let warnings = session_warnings(&s);
        assert!(warnings.iter().any(|w| w.contains("A/home") && w.contains("no annual premium")));
    }

    #[test]
    fn outsized_premium_is_flagged() {
        let s = session(
            vec![
                bundle("A", Some(quote(350_000.0))),
                bundle("B", Some(quote(2100.0))),
            ],
            vec![Section::Home],
        );
        let warnings = session_warnings(&s);
        assert!(warnings.iter().any(|w| w.contains("looks too large")));
    }

    #[test]
    fn non_standard_deductible_is_flagged() {
        let mut q = quote(1800.0);
        q.deductible = Some(750.0);
        let s = session(
            vec![bundle("A", Some(q)), bundle("B", Some(quote(2100.0)))],
            vec![Section::Home],
        );
        let warnings = session_warnings(&s);
        assert!(warnings.iter().any(|w| w.contains("non-standard deductible 750")));
    }

    #[test]
    fn quote_for_inactive_section_is_flagged() {
        let mut b = bundle("A", Some(quote(1800.0)));
        b.umbrella = Some(quote(400.0));
        let s = session(
            vec![b, bundle("B", Some(quote(2100.0)))],
            vec![Section::Home],
        );
        let warnings = session_warnings(&s);
        assert!(warnings
            .iter()
            .any(|w| w.contains("umbrella quote present but the umbrella section is not included")));
    }

    #[test]
    fn low_confidence_is_flagged() {
        let mut q = quote(1800.0);
        q.confidence = Confidence::Low;
        let s = session(
            vec![bundle("A", Some(q)), bundle("B", Some(quote(2100.0)))],
            vec![Section::Home],
        );
        let warnings = session_warnings(&s);
        assert!(warnings.iter().any(|w| w.contains("low extraction confidence")));
    }

    #[test]
    fn empty_sections_is_flagged_not_rejected() {
        let s = session(
            vec![
                bundle("A", Some(quote(1800.0))),
                bundle("B", Some(quote(2100.0))),
            ],
            Vec::new(),
        );
        assert!(s.validate().is_ok());
        let warnings = session_warnings(&s);
        assert!(warnings.iter().any(|w| w.contains("no sections selected")));
    }
}
