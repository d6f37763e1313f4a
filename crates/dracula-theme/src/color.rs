//! Hex color parsing and HSL desaturation.
//!
//! Theme colors are stored as strings exactly as they appear in the palette
//! source (`#RRGGBB`, optionally followed by a two-digit alpha suffix). This
//! module provides the small amount of color algebra the variants need:
//!
//! - [`is_hex_color`]: validation of `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`
//! - [`Rgb::from_hex`] / [`Rgb::to_hex`]: parsing and normalized formatting
//! - [`desaturate`]: lower HSL saturation by a number of percentage points
//!
//! The HSL model here is the plain cylindrical sRGB one. It is not perceptually
//! uniform, and is not meant to be: the soft variant only needs a predictable,
//! repeatable "less vivid" version of each bright color.
//!
//! # Example
//!
//! ```rust
//! use dracula_theme::color::desaturate;
//!
//! assert_eq!(desaturate("#FF5555", 20.0).unwrap(), "#ee6666");
//! ```

// ─── RGB type ───────────────────────────────────────────────────────────────

/// An 8-bit sRGB color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses a hex color string.
    ///
    /// Accepts `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`. Any alpha component
    /// is discarded.
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("Invalid hex color: {} (missing '#')", s))?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex color: {}", s));
        }
        match hex.len() {
            // #rgb / #rgba -> #rrggbb
            3 | 4 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17);
                let parse = || -> Result<Self, std::num::ParseIntError> {
                    Ok(Rgb(digit(0)?, digit(1)?, digit(2)?))
                };
                parse().map_err(|_| format!("Invalid hex color: {}", s))
            }
            // #rrggbb / #rrggbbaa
            6 | 8 => {
                let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
                let parse = || -> Result<Self, std::num::ParseIntError> {
                    Ok(Rgb(pair(0)?, pair(2)?, pair(4)?))
                };
                parse().map_err(|_| format!("Invalid hex color: {}", s))
            }
            n => Err(format!(
                "Invalid hex color: {} (must be 3, 4, 6 or 8 digits, got {})",
                s, n
            )),
        }
    }

    /// Formats as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Converts to HSL.
    pub fn to_hsl(self) -> Hsl {
        let r = self.0 as f64 / 255.0;
        let g = self.1 as f64 / 255.0;
        let b = self.2 as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl {
            h: h * 60.0,
            s,
            l,
        }
    }
}

// ─── HSL ────────────────────────────────────────────────────────────────────

/// A color in HSL space.
///
/// Hue is in degrees (`0.0..360.0`), saturation and lightness are fractions
/// (`0.0..=1.0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Converts back to 8-bit sRGB, rounding each channel to nearest.
    pub fn to_rgb(self) -> Rgb {
        let h = (self.h / 360.0).rem_euclid(1.0);
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        Rgb(to_byte(r), to_byte(g), to_byte(b))
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_byte(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Public helpers ─────────────────────────────────────────────────────────

/// Returns true for `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`.
pub fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.bytes().all(|b| b.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Lowers the HSL saturation of `hex` by `amount` percentage points.
///
/// Saturation is clamped at zero; hue and lightness are kept. The result is
/// always lowercase `#rrggbb`, so an alpha suffix on the input is dropped.
pub fn desaturate(hex: &str, amount: f64) -> Result<String, String> {
    let mut hsl = Rgb::from_hex(hex)?.to_hsl();
    hsl.s = (hsl.s - amount / 100.0).clamp(0.0, 1.0);
    Ok(hsl.to_rgb().to_hex())
}

// ─── Tests ──────────────────────────────────────────────────────────────────
