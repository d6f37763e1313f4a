//! The three generated theme variants.

use std::fmt;
use std::str::FromStr;

use crate::{high_contrast, soft, Theme};

/// One generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    /// The sanitized source theme.
    Base,
    /// Bright colors desaturated.
    Soft,
    /// Black backgrounds, white text, hand-tuned accents.
    HighContrast,
}

impl Variant {
    /// Every variant, in output order.
    pub const ALL: [Variant; 3] = [Variant::Base, Variant::Soft, Variant::HighContrast];

    /// File name the variant is written to.
    pub fn file_name(self) -> &'static str {
        match self {
            Variant::Base => "dracula.json",
            Variant::Soft => "dracula-soft.json",
            Variant::HighContrast => "dracula-high-contrast.json",
        }
    }

    /// Name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Base => "base",
            Variant::Soft => "soft",
            Variant::HighContrast => "high-contrast",
        }
    }

    /// Derives this variant from the sanitized base theme.
    pub fn derive(self, base: &Theme) -> Theme {
        match self {
            Variant::Base => base.clone(),
            Variant::Soft => soft::transform(base),
            Variant::HighContrast => high_contrast::transform(base),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "base" => Ok(Variant::Base),
            "soft" => Ok(Variant::Soft),
            "high-contrast" | "hc" => Ok(Variant::HighContrast),
            _ => Err(format!(
                "unknown variant '{}' (expected base, soft or high-contrast)",
                s
            )),
        }
    }
}

/// Derives every variant of `base`, without touching the filesystem.
pub fn generate(base: &Theme) -> Vec<(Variant, Theme)> {
    Variant::ALL
        .iter()
        .map(|&variant| (variant, variant.derive(base)))
        .collect()
}
