//! Property-based tests for the color algebra and the variant transforms.

use proptest::prelude::*;
use dracula_theme::color::{desaturate, Rgb};
use dracula_theme::high_contrast::{self, is_background_key, is_exempt, BLACK, OVERRIDES};
use dracula_theme::{soft, Theme};

// ============================================================================
// Test helpers
// ============================================================================

fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb(r, g, b))
}

fn hex_strategy() -> impl Strategy<Value = String> {
    rgb_strategy().prop_map(|rgb| rgb.to_hex().to_uppercase())
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}\\.[a-zA-Z]{1,12}",
        "[a-z]{1,8}\\.[a-z]{0,6}(background|Background)",
        "[a-z]{1,8}(Selection|button|Badge|merge|highlight)[a-zA-Z.]{0,8}Background",
        prop::sample::select(OVERRIDES.iter().map(|(k, _)| k.to_string()).collect::<Vec<_>>()),
    ]
}

fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    d.min(360.0 - d)
}

// ============================================================================
// Desaturation
// ============================================================================

proptest! {
    /// Lightness survives desaturation up to 8-bit rounding.
    #[test]
    fn desaturate_keeps_lightness(rgb in rgb_strategy(), amount in 0.0f64..=100.0) {
        let before = rgb.to_hsl();
        let after = Rgb::from_hex(&desaturate(&rgb.to_hex(), amount).unwrap()).unwrap().to_hsl();
        prop_assert!((before.l - after.l).abs() < 0.0025, "{:?} -> {:?}", before, after);
    }

    /// For clearly colored inputs, hue is kept and saturation drops by the amount.
    #[test]
    fn desaturate_moves_only_saturation(rgb in rgb_strategy()) {
        let before = rgb.to_hsl();
        prop_assume!(before.s >= 0.5 && before.l >= 0.25 && before.l <= 0.75);

        let after = Rgb::from_hex(&desaturate(&rgb.to_hex(), 20.0).unwrap()).unwrap().to_hsl();
        prop_assert!(hue_distance(before.h, after.h) < 6.0, "{:?} -> {:?}", before, after);
        prop_assert!((after.s - (before.s - 0.2)).abs() < 0.03, "{:?} -> {:?}", before, after);
    }

    /// Removing all saturation always yields a gray.
    #[test]
    fn full_desaturation_is_gray(rgb in rgb_strategy()) {
        let out = Rgb::from_hex(&desaturate(&rgb.to_hex(), 100.0).unwrap()).unwrap();
        prop_assert_eq!(out.0, out.1);
        prop_assert_eq!(out.1, out.2);
    }

    /// Output is always lowercase six-digit hex.
    #[test]
    fn desaturate_output_is_normalized(hex in hex_strategy()) {
        let out = desaturate(&hex, 20.0).unwrap();
        prop_assert_eq!(out.len(), 7);
        prop_assert_eq!(out.clone(), out.to_lowercase());
    }
}

// ============================================================================
// Variant transforms
// ============================================================================

fn theme_with(colors: Vec<(String, String)>, ansi: Vec<String>) -> Theme {
    let mut theme = Theme::default();
    theme.palette.ansi = ansi;
    theme.colors = colors.into_iter().collect();
    theme
}

proptest! {
    /// Soft only changes values that are bright palette members.
    #[test]
    fn soft_changes_only_bright_members(
        colors in prop::collection::vec((key_strategy(), hex_strategy()), 0..40),
        ansi in prop::collection::vec(hex_strategy(), 0..8),
    ) {
        let base = theme_with(colors, ansi);
        let soft = soft::transform(&base);
        let bright = base.palette.bright_colors();

        prop_assert_eq!(soft.colors.len(), base.colors.len());
        for (key, value) in &base.colors {
            if !bright.contains(value.as_str()) {
                prop_assert_eq!(&soft.colors[key], value);
            }
        }
    }

    /// Every override key ends with the table value, whatever the input held.
    #[test]
    fn overrides_always_win(
        colors in prop::collection::vec((key_strategy(), hex_strategy()), 0..60),
    ) {
        let hc = high_contrast::transform(&theme_with(colors, Vec::new()));
        for (key, value) in OVERRIDES {
            prop_assert_eq!(hc.colors[*key].as_str(), *value);
        }
    }

    /// Outside the override table, swept keys are black and the rest untouched.
    #[test]
    fn sweep_outside_overrides(
        colors in prop::collection::vec((key_strategy(), hex_strategy()), 0..60),
    ) {
        let base = theme_with(colors, Vec::new());
        let hc = high_contrast::transform(&base);
        for (key, value) in &base.colors {
            if OVERRIDES.iter().any(|(k, _)| *k == key.as_str()) {
                continue;
            }
            if is_background_key(key) && !is_exempt(key) {
                prop_assert_eq!(hc.colors[key].as_str(), BLACK);
            } else {
                prop_assert_eq!(&hc.colors[key], value);
            }
        }
    }

    /// Derivation never alters its input.
    #[test]
    fn transforms_do_not_mutate_base(
        colors in prop::collection::vec((key_strategy(), hex_strategy()), 0..30),
        ansi in prop::collection::vec(hex_strategy(), 0..8),
    ) {
        let base = theme_with(colors, ansi);
        let snapshot = base.clone();
        let _ = soft::transform(&base);
        let _ = high_contrast::transform(&base);
        prop_assert_eq!(base, snapshot);
    }
}
