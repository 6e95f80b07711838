use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{BeamError, BeamResult};

/// Straight (non-premultiplied) RGBA color with channels in `[0, 1]`.
///
/// Parses the CSS forms hosts usually hand over: `#RGB`, `#RRGGBB`, `#RRGGBBAA`,
/// `rgb(r, g, b)` and `rgba(r, g, b, a)` (0..255 channels, 0..1 alpha). In JSON it also
/// accepts `{ "r", "g", "b", "a"? }` objects and `[r, g, b, a?]` arrays of unit floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Color {
    /// Build a color from unit-range channels.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from 8-bit channels.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Parse a CSS color string.
    pub fn parse(s: &str) -> BeamResult<Self> {
        parse_css(s).map_err(BeamError::validation)
    }

    /// Red, green and blue quantized to 8 bits.
    pub fn rgb8(self) -> [u8; 3] {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        [to_u8(self.r), to_u8(self.g), to_u8(self.b)]
    }

    /// Alpha clamped to `[0, 1]`.
    pub fn alpha(self) -> f64 {
        self.a.clamp(0.0, 1.0)
    }

    /// `#rrggbb`, ignoring alpha.
    pub fn to_hex_rgb(self) -> String {
        let [r, g, b] = self.rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Canonical CSS form: `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn to_css(self) -> String {
        if self.alpha() >= 1.0 {
            return self.to_hex_rgb();
        }
        let [r, g, b] = self.rgb8();
        format!("rgba({r}, {g}, {b}, {})", self.alpha())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = BeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Css(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Css(s) => parse_css(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgba(*r, *g, *b, 1.0)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn parse_css(s: &str) -> Result<Color, String> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = s.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
    {
        let args = args
            .strip_suffix(')')
            .ok_or_else(|| format!("unterminated color function \"{s}\""))?;
        return parse_rgb_args(args);
    }

    Err(format!(
        "unsupported color \"{s}\" (expected #RGB, #RRGGBB, #RRGGBBAA, rgb() or rgba())"
    ))
}

fn parse_hex(hex: &str) -> Result<Color, String> {
    fn hex_byte(pair: &str) -> Result<u8, String> {
        // `from_str_radix` alone would accept a leading `+`.
        if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("invalid hex byte \"{pair}\""));
        }
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !hex.is_ascii() {
        return Err(format!("invalid hex color \"#{hex}\""));
    }

    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, slot) in rgb.iter_mut().enumerate() {
                *slot = hex_byte(&hex[i..i + 1])? * 17;
            }
            Ok(Color::from_rgba8(rgb[0], rgb[1], rgb[2], 255))
        }
        6 => Ok(Color::from_rgba8(
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
            255,
        )),
        8 => Ok(Color::from_rgba8(
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
            hex_byte(&hex[6..8])?,
        )),
        _ => Err("hex color must be #RGB, #RRGGBB or #RRGGBBAA".to_owned()),
    }
}

fn parse_rgb_args(args: &str) -> Result<Color, String> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(format!(
            "rgb()/rgba() takes 3 or 4 components, got {}",
            parts.len()
        ));
    }

    let mut values = [0.0f64; 4];
    values[3] = 1.0;
    for (i, part) in parts.iter().enumerate() {
        let v: f64 = part
            .parse()
            .map_err(|_| format!("invalid color component \"{part}\""))?;
        let max = if i == 3 { 1.0 } else { 255.0 };
        if !v.is_finite() || !(0.0..=max).contains(&v) {
            return Err(format!("color component \"{part}\" must be within 0..={max}"));
        }
        values[i] = v;
    }

    Ok(Color::rgba(
        values[0] / 255.0,
        values[1] / 255.0,
        values[2] / 255.0,
        values[3],
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
