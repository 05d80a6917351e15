//! Colors and colormaps for scatter rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of discrete levels a colormap resolves.
pub const COLORMAP_LEVELS: usize = 256;

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or_else(|| format!("invalid color '{}'", value))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Linear color interpolation
pub fn interpolate_color(color1: Color, color2: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let t_inv = 1.0 - t;
    let mix = |a: u8, b: u8| ((a as f64 * t_inv) + (b as f64 * t)).round() as u8;

    Color::new(
        mix(color1.r, color2.r),
        mix(color1.g, color2.g),
        mix(color1.b, color2.b),
        mix(color1.a, color2.a),
    )
}

/// Viridis control points, evenly spaced over [0, 1].
const VIRIDIS: [Color; 5] = [
    Color::rgb(68, 1, 84),
    Color::rgb(72, 36, 117),
    Color::rgb(42, 120, 142),
    Color::rgb(122, 209, 81),
    Color::rgb(253, 231, 37),
];

/// Maps a normalized value in [0, 1] to a color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    /// 0 is black, 1 is white
    #[default]
    Gray,
    Viridis,
}

impl Colormap {
    /// Color for a normalized value.
    ///
    /// Values are clamped to [0, 1] and quantized to [`COLORMAP_LEVELS`]
    /// steps, so a whole image never needs more than that many colors.
    pub fn color_at(&self, value: f64) -> Color {
        let level = lut_index(value);
        match self {
            Colormap::Gray => {
                let v = level as u8;
                Color::rgb(v, v, v)
            }
            Colormap::Viridis => {
                let t = level as f64 / (COLORMAP_LEVELS - 1) as f64;
                piecewise(&VIRIDIS, t)
            }
        }
    }
}

impl std::str::FromStr for Colormap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gray" | "grey" => Ok(Colormap::Gray),
            "viridis" => Ok(Colormap::Viridis),
            other => Err(format!("unknown colormap '{}'", other)),
        }
    }
}

/// Quantize [0, 1] to a colormap level, NaN maps to 0.
fn lut_index(value: f64) -> usize {
    if !(value > 0.0) {
        return 0;
    }
    ((value * COLORMAP_LEVELS as f64) as usize).min(COLORMAP_LEVELS - 1)
}

fn piecewise(stops: &[Color], t: f64) -> Color {
    let scaled = t.clamp(0.0, 1.0) * (stops.len() - 1) as f64;
    let i = scaled.floor() as usize;
    if i >= stops.len() - 1 {
        return stops[stops.len() - 1];
    }
    interpolate_color(stops[i], stops[i + 1], scaled - i as f64)
}
