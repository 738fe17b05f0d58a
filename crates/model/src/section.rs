use serde::{Deserialize, Serialize};

/// Coverage sections a comparison can include.
///
/// Declaration order is canonical: coverage blocks always render Home, then
/// Auto, then Umbrella, whatever order the session listed them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Home,
    Auto,
    Umbrella,
}

impl Section {
    /// All sections in canonical order.
    pub const ALL: [Section; 3] = [Section::Home, Section::Auto, Section::Umbrella];
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Auto => write!(f, "auto"),
            Self::Umbrella => write!(f, "umbrella"),
        }
    }
}

/// Which dwelling a home quote covers when a session spans two properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DwellingId {
    One,
    Two,
}

impl DwellingId {
    pub fn label(&self) -> &'static str {
        match self {
            Self::One => "Dwelling 1",
            Self::Two => "Dwelling 2",
        }
    }
}
