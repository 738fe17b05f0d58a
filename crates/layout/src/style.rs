//! Style records: the palette and dimension knobs the format planner
//! reads. Immutable once built; overrides come in through a TOML sheet.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// RGB color with unit-interval channels, the shape spreadsheet backends
/// take directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// From a packed 0xRRGGBB value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }

    /// Parses `#RRGGBB` or `RRGGBB`.
    pub fn parse_hex(input: &str) -> Result<Self, LayoutError> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(LayoutError::ColorParse(input.to_string()));
        }
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| LayoutError::ColorParse(input.to_string()))?;
        Ok(Self::from_hex(packed))
    }
}

// ---------------------------------------------------------------------------
// Palette + style
// ---------------------------------------------------------------------------

/// Color roles the plan refers to. Formatting rules name these slots, so a
/// rebrand is a palette swap with no layout change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Palette {
    pub banner: Color,
    pub banner_text: Color,
    pub sub_banner: Color,
    pub row_stripe: Color,
    pub baseline_tint: Color,
    pub border: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            banner: Color::from_hex(0x871C30),
            banner_text: Color::from_hex(0xFFFFFF),
            sub_banner: Color::from_hex(0xB23C48),
            row_stripe: Color::from_hex(0xF8F8F8),
            baseline_tint: Color::from_hex(0xFFF8F0),
            border: Color::from_hex(0xCCCCCC),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutStyle {
    pub palette: Palette,
    /// Label column width.
    pub label_col_px: u32,
    /// Width of each data column.
    pub data_col_px: u32,
    /// Height of the title and date rows.
    pub banner_row_px: u32,
    pub currency_decimals: u8,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            label_col_px: 140,
            data_col_px: 120,
            banner_row_px: 45,
            currency_decimals: 0,
        }
    }
}

impl LayoutStyle {
    /// Parses a TOML style sheet. Keys left out keep their defaults.
    pub fn from_toml(input: &str) -> Result<Self, LayoutError> {
        let config: StyleConfig =
            toml::from_str(input).map_err(|e| LayoutError::StyleParse(e.to_string()))?;
        config.merge_into(Self::default())
    }
}

// ---------------------------------------------------------------------------
// TOML sheet
// ---------------------------------------------------------------------------

/// Template matching the defaults, for `qgrid style --write`.
pub const DEFAULT_STYLE_TOML: &str = r##"# Layout style sheet. Delete any line to keep its default.

currency_decimals = 0

[columns]
label_px = 140
data_px = 120

[rows]
banner_px = 45

[colors]
banner = "#871C30"
banner_text = "#FFFFFF"
sub_banner = "#B23C48"
row_stripe = "#F8F8F8"
baseline_tint = "#FFF8F0"
border = "#CCCCCC"
"##;

/// On-disk shape of the style sheet. Every field optional; colors arrive
/// as hex strings and are converted during the merge.
#[derive(Debug, Default, Deserialize)]
struct StyleConfig {
    #[serde(default)]
    currency_decimals: Option<u8>,
    #[serde(default)]
    columns: ColumnsConfig,
    #[serde(default)]
    rows: RowsConfig,
    #[serde(default)]
    colors: ColorsConfig,
}

#[derive(Debug, Default, Deserialize)]
struct ColumnsConfig {
    #[serde(default)]
    label_px: Option<u32>,
    #[serde(default)]
    data_px: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct RowsConfig {
    #[serde(default)]
    banner_px: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct ColorsConfig {
    #[serde(default)]
    banner: Option<String>,
    #[serde(default)]
    banner_text: Option<String>,
    #[serde(default)]
    sub_banner: Option<String>,
    #[serde(default)]
    row_stripe: Option<String>,
    #[serde(default)]
    baseline_tint: Option<String>,
    #[serde(default)]
    border: Option<String>,
}

impl StyleConfig {
    fn merge_into(self, mut style: LayoutStyle) -> Result<LayoutStyle, LayoutError> {
        if let Some(decimals) = self.currency_decimals {
            style.currency_decimals = decimals;
        }
        if let Some(px) = self.columns.label_px {
            style.label_col_px = px;
        }
        if let Some(px) = self.columns.data_px {
            style.data_col_px = px;
        }
        if let Some(px) = self.rows.banner_px {
            style.banner_row_px = px;
        }
        let palette = &mut style.palette;
        if let Some(hex) = &self.colors.banner {
            palette.banner = Color::parse_hex(hex)?;
        }
        if let Some(hex) = &self.colors.banner_text {
            palette.banner_text = Color::parse_hex(hex)?;
        }
        if let Some(hex) = &self.colors.sub_banner {
            palette.sub_banner = Color::parse_hex(hex)?;
        }
        if let Some(hex) = &self.colors.row_stripe {
            palette.row_stripe = Color::parse_hex(hex)?;
        }
        if let Some(hex) = &self.colors.baseline_tint {
            palette.baseline_tint = Color::parse_hex(hex)?;
        }
        if let Some(hex) = &self.colors.border {
            palette.border = Color::parse_hex(hex)?;
        }
        Ok(style)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sheet_keeps_every_default() {
        let style = LayoutStyle::from_toml("").unwrap();
        assert_eq!(style, LayoutStyle::default());
    }

    #[test]
    fn template_sheet_matches_the_defaults() {
        let style = LayoutStyle::from_toml(DEFAULT_STYLE_TOML).unwrap();
        assert_eq!(style, LayoutStyle::default());
    }

    #[test]
    fn partial_sheet_overrides_only_named_keys() {
        let style = LayoutStyle::from_toml(
            "[colors]\nbanner = \"#003366\"\n\n[columns]\ndata_px = 96\n",
        )
        .unwrap();
        assert_eq!(style.palette.banner, Color::from_hex(0x003366));
        assert_eq!(style.data_col_px, 96);
        assert_eq!(style.label_col_px, 140);
        assert_eq!(style.palette.sub_banner, Palette::default().sub_banner);
    }

    #[test]
    fn hex_parse_accepts_with_and_without_hash() {
        assert_eq!(
            Color::parse_hex("#871C30").unwrap(),
            Color::parse_hex("871c30").unwrap()
        );
    }

    #[test]
    fn short_or_garbled_hex_is_rejected() {
        assert!(matches!(
            Color::parse_hex("#F80"),
            Err(LayoutError::ColorParse(_))
        ));
        assert!(matches!(
            Color::parse_hex("#GGGGGG"),
            Err(LayoutError::ColorParse(_))
        ));
        let err = LayoutStyle::from_toml("[colors]\nborder = \"gray\"\n").unwrap_err();
        assert!(matches!(err, LayoutError::ColorParse(_)));
    }

    #[test]
    fn malformed_toml_is_a_style_parse_error() {
        let err = LayoutStyle::from_toml("[colors\nbanner = 3").unwrap_err();
        assert!(matches!(err, LayoutError::StyleParse(_)));
    }

    #[test]
    fn channels_land_in_the_unit_interval() {
        let c = Color::from_hex(0x871C30);
        assert!((c.r - 135.0 / 255.0).abs() < 1e-6);
        assert!((c.g - 28.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 48.0 / 255.0).abs() < 1e-6);
    }
}
