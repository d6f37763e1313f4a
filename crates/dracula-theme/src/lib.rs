//! # Dracula Theme - Editor Theme Variant Generator
//!
//! `dracula-theme` turns a single YAML palette into the editor color-theme
//! JSON files that ship with the theme: the standard theme, a desaturated
//! "soft" theme, and a high-contrast theme.
//!
//! ## Pipeline
//!
//! 1. [`Theme::from_yaml`] parses the palette, resolving the `!alpha` tag
//!    (see [`tags`]), dropping null or empty colors, and validating every
//!    color value.
//! 2. [`Variant::derive`] produces each variant from the loaded theme:
//!    - [`Variant::Base`]: the theme as loaded
//!    - [`Variant::Soft`]: [`soft::transform`]
//!    - [`Variant::HighContrast`]: [`high_contrast::transform`]
//! 3. [`build`] writes the variants as 4-space-indented JSON into the output
//!    directory, atomically and, by default, in parallel.
//!
//! Transforms are pure functions from `&Theme` to a new `Theme`; the loaded
//! theme is never modified.
//!
//! ## Quick Start
//!
//! ```rust
//! use dracula_theme::{generate, Theme, Variant};
//!
//! let theme = Theme::from_yaml(r#"
//! dracula:
//!   ansi: ['#FF5555']
//! colors:
//!   editor.background: '#282A36'
//!   statusBar.foreground: '#FF5555'
//! "#).unwrap();
//!
//! let variants = generate(&theme);
//! let (_, soft) = &variants[1];
//! let (_, hc) = &variants[2];
//!
//! assert_eq!(soft.colors["statusBar.foreground"], "#ee6666");
//! assert_eq!(hc.colors["editor.background"], "#000000");
//! ```
//!
//! ## Writing Files
//!
//! ```rust,no_run
//! use dracula_theme::{build, BuildConfig};
//!
//! let report = build(&BuildConfig::new().with_out_dir("theme")).unwrap();
//! for path in &report.written {
//!     println!("wrote {}", path.display());
//! }
//! ```

pub mod color;
pub mod config;
mod error;
pub mod high_contrast;
pub mod output;
pub mod soft;
pub mod tags;
mod theme;
mod variant;

use std::path::PathBuf;

pub use config::BuildConfig;
pub use error::{ErrorKind, Result, ThemeError};
pub use theme::{
    sanitize_colors, ColorMapping, Palette, Theme, TokenColorRule, TokenSettings,
    FONT_STYLE_FLAGS,
};
pub use variant::{generate, Variant};

/// Summary of a successful [`build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Paths written, in variant order.
    pub written: Vec<PathBuf>,
}

/// Renders every selected variant of `base` to JSON, keyed by output path.
pub fn render(base: &Theme, config: &BuildConfig) -> Result<Vec<(PathBuf, String)>> {
    config
        .selected_variants()
        .into_iter()
        .map(|variant| {
            let theme = variant.derive(base);
            let json = theme.to_json_pretty()?;
            Ok((config.out_dir.join(variant.file_name()), json))
        })
        .collect()
}

/// Loads the palette and writes every selected variant.
///
/// Parse-class errors are returned before the output directory is touched.
/// Once writing starts, every file is attempted; if any fails the build
/// returns [`ThemeError::Incomplete`].
pub fn build(config: &BuildConfig) -> Result<BuildReport> {
    tracing::debug!(source = %config.source.display(), "loading palette");
    let base = Theme::from_file(&config.source)?;
    tracing::debug!(
        colors = base.colors.len(),
        token_rules = base.token_colors.len(),
        "loaded palette"
    );

    let files = render(&base, config)?;
    output::ensure_dir(&config.out_dir)?;
    let written = output::write_all(&files, config.parallel)?;
    Ok(BuildReport { written })
}
