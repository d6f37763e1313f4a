//! The "soft" variant: bright palette colors, desaturated.

use crate::color::desaturate;
use crate::Theme;

/// Saturation reduction, in HSL percentage points.
pub const DESATURATE_AMOUNT: f64 = 20.0;

/// Derives the soft variant of `theme`.
///
/// Every UI color and every token-rule foreground whose value is exactly one
/// of the palette's bright colors (`ansi` + `brightOther`) is replaced by its
/// desaturated form. Values carrying an alpha suffix are never palette
/// members and stay as they are.
pub fn transform(theme: &Theme) -> Theme {
    let bright = theme.palette.bright_colors();
    let soften = |value: &str| -> Option<String> {
        if !bright.contains(value) {
            return None;
        }
        match desaturate(value, DESATURATE_AMOUNT) {
            Ok(softened) => Some(softened),
            Err(err) => {
                tracing::warn!(color = value, error = %err, "bright color left unsoftened");
                None
            }
        }
    };

    let mut soft = theme.clone();
    let mut changed = 0usize;

    for value in soft.colors.values_mut() {
        if let Some(softened) = soften(value.as_str()) {
            *value = softened;
            changed += 1;
        }
    }

    for rule in &mut soft.token_colors {
        if let Some(fg) = rule.settings.foreground.as_mut() {
            if let Some(softened) = soften(fg.as_str()) {
                *fg = softened;
                changed += 1;
            }
        }
    }

    tracing::debug!(changed, "derived soft variant");
    soft
}
