//! Session fixtures for layout tests.
//!
//! Builders for assembled sessions without going through JSON. Public so
//! integration tests can share them; not part of the stable API surface.

use chrono::NaiveDate;
use quotegrid_model::{
    CarrierBundle, ComparisonSession, Confidence, CoverageLimits, CoverageValue, CurrentPolicy,
    Quote, Section,
};

/// Quote with the given premium and nothing else set.
pub fn quote(premium: f64) -> Quote {
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

/// Home quote with a populated limit set.
pub fn home_quote(premium: f64) -> Quote {
    let mut q = quote(premium);
    q.deductible = Some(1000.0);
    q.limits = CoverageLimits {
        dwelling: Some(CoverageValue::Amount(450_000.0)),
        other_structures: Some(CoverageValue::Amount(45_000.0)),
        personal_property: Some(CoverageValue::Amount(225_000.0)),
        loss_of_use: Some(CoverageValue::Amount(90_000.0)),
        personal_liability: Some(CoverageValue::Amount(300_000.0)),
        medical_payments: Some(CoverageValue::Amount(5_000.0)),
        ..CoverageLimits::default()
    };
    q
}

/// Auto quote with split liability limits.
pub fn auto_quote(premium: f64) -> Quote {
    let mut q = quote(premium);
    q.deductible = Some(500.0);
    q.limits = CoverageLimits {
        bi_per_person: Some(250_000.0),
        bi_per_accident: Some(500_000.0),
        pd_per_accident: Some(100_000.0),
        um_uim: Some(CoverageValue::Text("250/500".into())),
        comprehensive: Some(CoverageValue::Amount(500.0)),
        ..CoverageLimits::default()
    };
    q
}

/// Umbrella quote with the given limit figure.
pub fn umbrella_quote(premium: f64, limit: f64) -> Quote {
    let mut q = quote(premium);
    q.limits.umbrella_limit = Some(limit);
    q
}

/// Bundle with no quotes.
pub fn bundle(name: &str) -> CarrierBundle {
    CarrierBundle {
        carrier_name: name.into(),
        home: None,
        home_2: None,
        auto: None,
        umbrella: None,
    }
}

/// Session skeleton around the given carriers and sections.
pub fn session(sections: &[Section], carriers: Vec<CarrierBundle>) -> ComparisonSession {
    ComparisonSession {
        client_name: "Avery Shaw".into(),
        date: NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
        current_policy: None,
        carriers,
        sections: sections.to_vec(),
        agent_notes: None,
    }
}

/// Current policy with figures across all three sections.
pub fn current_policy() -> CurrentPolicy {
    CurrentPolicy {
        carrier_name: Some("Heritage Insurance".into()),
        home_premium: Some(2100.0),
        home_dwelling: Some(CoverageValue::Amount(425_000.0)),
        home_other_structures: Some(CoverageValue::Amount(42_500.0)),
        home_personal_property: Some(CoverageValue::Amount(212_500.0)),
        home_loss_of_use: Some(CoverageValue::Amount(85_000.0)),
        home_liability: Some(CoverageValue::Amount(300_000.0)),
        home_deductible: Some(CoverageValue::Amount(1000.0)),
        auto_premium: Some(1450.0),
        auto_limits: Some("250/500/100".into()),
        auto_um_uim: Some(CoverageValue::Text("250/500".into())),
        auto_comp_deductible: Some(CoverageValue::Amount(500.0)),
        auto_collision_deductible: Some(CoverageValue::Amount(500.0)),
        umbrella_premium: Some(400.0),
        umbrella_limits: Some(CoverageValue::Amount(1_000_000.0)),
        umbrella_deductible: Some(CoverageValue::Amount(10_000.0)),
        ..CurrentPolicy::default()
    }
}

/// Two carriers, home and auto, single dwelling, no current policy.
/// The second carrier has no auto quote.
pub fn standard_session() -> ComparisonSession {
    let mut first = bundle("Lakeside Mutual");
    first.home = Some(home_quote(1890.0));
    first.auto = Some(auto_quote(1320.0));
    let mut second = bundle("Pioneer National");
    second.home = Some(home_quote(2050.0));
    session(&[Section::Home, Section::Auto], vec![first, second])
}

/// Three carriers with all sections quoted, plus a current policy.
pub fn full_session() -> ComparisonSession {
    let mut first = bundle("Lakeside Mutual");
    first.home = Some(home_quote(1890.0));
    first.auto = Some(auto_quote(1320.0));
    first.umbrella = Some(umbrella_quote(350.0, 1_000_000.0));

    let mut second = bundle("Pioneer National");
    second.home = Some(home_quote(2050.0));
    second.auto = Some(auto_quote(1480.0));
    second.umbrella = Some(umbrella_quote(420.0, 2_000_000.0));

    let mut third = bundle("Summit Assurance");
    third.home = Some(home_quote(1725.0));
    third.auto = Some(auto_quote(1295.0));
    third.umbrella = Some(umbrella_quote(380.0, 500_000.0));

    let mut s = session(
        &[Section::Home, Section::Auto, Section::Umbrella],
        vec![first, second, third],
    );
    s.current_policy = Some(current_policy());
    s
}

/// Full session with second-dwelling figures on the current policy and the
/// first carrier only.
pub fn multi_dwelling_session() -> ComparisonSession {
    let mut s = full_session();
    s.carriers[0].home_2 = Some(home_quote(950.0));
    if let Some(policy) = s.current_policy.as_mut() {
        policy.home_2_premium = Some(800.0);
        policy.home_2_dwelling = Some(CoverageValue::Amount(250_000.0));
        policy.home_2_deductible = Some(CoverageValue::Amount(1000.0));
    }
    s
}
