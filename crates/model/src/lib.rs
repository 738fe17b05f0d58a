//! `quotegrid-model` — Comparison session data model.
//!
//! Owns the input side of the pipeline: carrier bundles, per-section quotes,
//! the client's current policy, and the assembled `ComparisonSession`.
//! Parsing and validation live here; layout does not.

pub mod bundle;
pub mod current;
pub mod error;
pub mod quote;
pub mod section;
pub mod session;
pub mod validate;
pub mod value;

pub use bundle::CarrierBundle;
pub use current::CurrentPolicy;
pub use error::SessionError;
pub use quote::{Confidence, CoverageLimits, Quote};
pub use section::{DwellingId, Section};
pub use session::{ComparisonSession, MAX_CARRIERS, MIN_CARRIERS};
pub use validate::session_warnings;
pub use value::CoverageValue;
