use std::fmt;

use crate::section::Section;
use crate::session::{MAX_CARRIERS, MIN_CARRIERS};

#[derive(Debug)]
pub enum SessionError {
    /// JSON parse / deserialization error.
    Parse(String),
    /// Carrier bundle count outside the supported range.
    CarrierCount(usize),
    /// Carrier at the given index has a blank name.
    MissingCarrierName(usize),
    /// The same section listed more than once.
    DuplicateSection(Section),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "session parse error: {msg}"),
            Self::CarrierCount(n) => {
                write!(f, "comparison needs {MIN_CARRIERS}-{MAX_CARRIERS} carriers, got {n}")
            }
            Self::MissingCarrierName(index) => {
                write!(f, "carrier at position {index} has no name")
            }
            Self::DuplicateSection(section) => {
                write!(f, "section '{section}' listed more than once")
            }
        }
    }
}

impl std::error::Error for SessionError {}
