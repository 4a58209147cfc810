use image::Rgb;
use serde::{Deserialize, Serialize};

use crate::common::{PayloadError, PayloadResult};

// Style
//------------------------------------------------------------------------------

/// Rendering parameters stored next to a payload. Formatting and
/// classification never look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    pub foreground: Rgb<u8>,
    pub background: Rgb<u8>,
    pub eye_shape: EyeShape,
    pub module_shape: ModuleShape,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            foreground: Rgb([0, 0, 0]),
            background: Rgb([255, 255, 255]),
            eye_shape: EyeShape::Square,
            module_shape: ModuleShape::Square,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeShape {
    #[default]
    Square,
    Rounded,
    Circle,
}

#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleShape {
    #[default]
    Square,
    Rounded,
    Dot,
}

// Hex colors
//------------------------------------------------------------------------------

pub fn color_to_hex(color: Rgb<u8>) -> String {
    let Rgb([r, g, b]) = color;
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Parses `#RRGGBB`, case-insensitive.
pub fn color_from_hex(hex: &str) -> PayloadResult<Rgb<u8>> {
    let invalid = || PayloadError::InvalidColor(hex.to_string());

    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

// Persisted record
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecord {
    pub foreground: String,
    pub background: String,
    #[serde(default)]
    pub eye_shape: EyeShape,
    #[serde(default)]
    pub module_shape: ModuleShape,
}

impl From<&Style> for StyleRecord {
    fn from(style: &Style) -> Self {
        Self {
            foreground: color_to_hex(style.foreground),
            background: color_to_hex(style.background),
            eye_shape: style.eye_shape,
            module_shape: style.module_shape,
        }
    }
}

impl TryFrom<StyleRecord> for Style {
    type Error = PayloadError;

    fn try_from(rec: StyleRecord) -> PayloadResult<Self> {
        Ok(Self {
            foreground: color_from_hex(&rec.foreground)?,
            background: color_from_hex(&rec.background)?,
            eye_shape: rec.eye_shape,
            module_shape: rec.module_shape,
        })
    }
}
