//! The high-contrast variant.
//!
//! Derivation runs in two phases:
//!
//! 1. [`sweep`]: every background-role key is forced to solid black, except
//!    keys naming a surface where black would hide state (selections,
//!    buttons, badges, diff and merge regions, highlights, overview ruler).
//! 2. [`apply_overrides`]: the [`OVERRIDES`] table is written on top,
//!    unconditionally. The table always wins over the sweep.
//!
//! Selection colors follow two rules. The editor can restyle the foreground
//! of selected text, so editor selections are fully inverted (white
//! background, black text). Lists, menus, the terminal and webviews cannot,
//! so their selections use a dark blue background under white text.

use crate::Theme;

/// Solid black, used for every swept background.
pub const BLACK: &str = "#000000";

/// Background roles that are swept regardless of their key suffix.
pub const BACKGROUND_KEYS: &[&str] = &[
    "activityBar.background",
    "breadcrumb.background",
    "debugToolBar.background",
    "dropdown.background",
    "editor.background",
    "editorGroupHeader.noTabsBackground",
    "editorGroupHeader.tabsBackground",
    "editorGutter.background",
    "editorHoverWidget.background",
    "editorPane.background",
    "editorSuggestWidget.background",
    "editorWidget.background",
    "input.background",
    "menu.background",
    "notifications.background",
    "panel.background",
    "peekViewEditor.background",
    "peekViewResult.background",
    "peekViewTitle.background",
    "quickInput.background",
    "scrollbar.shadow",
    "sideBar.background",
    "sideBarSectionHeader.background",
    "statusBar.background",
    "statusBar.debuggingBackground",
    "statusBar.noFolderBackground",
    "tab.activeBackground",
    "tab.inactiveBackground",
    "terminal.background",
    "titleBar.activeBackground",
    "titleBar.inactiveBackground",
    "widget.shadow",
];

/// Key substrings that exempt a key from the sweep.
pub const EXEMPT_SUBSTRINGS: &[&str] = &[
    "selection",
    "Selection",
    "button",
    "Badge",
    "diffEditor",
    "merge",
    "highlight",
    "OverviewRuler",
];

/// Pink accent for focus and active indicators.
pub const ACCENT: &str = "#FF79C6";

/// Background for selections on surfaces that cannot restyle selected text.
pub const UI_SELECTION: &str = "#264F78";

/// Hand-tuned colors applied after the sweep. Later entries win.
pub const OVERRIDES: &[(&str, &str)] = &[
    // Base surfaces and text
    ("foreground", "#FFFFFF"),
    ("focusBorder", ACCENT),
    ("contrastBorder", "#FFFFFF"),
    ("contrastActiveBorder", ACCENT),
    ("widget.shadow", BLACK),
    ("textLink.foreground", "#8BE9FD"),
    ("textLink.activeForeground", ACCENT),
    // Editor
    ("editor.background", BLACK),
    ("editor.foreground", "#FFFFFF"),
    ("editorCursor.foreground", "#FFFFFF"),
    ("editorLineNumber.foreground", "#FFFFFF"),
    ("editorLineNumber.activeForeground", ACCENT),
    ("editor.lineHighlightBackground", BLACK),
    ("editor.lineHighlightBorder", "#FFFFFF"),
    ("editorIndentGuide.background", "#FFFFFF"),
    ("editorIndentGuide.activeBackground", ACCENT),
    ("editorWhitespace.foreground", "#FFFFFF80"),
    ("editorRuler.foreground", "#FFFFFF"),
    ("editorLink.activeForeground", ACCENT),
    ("editorBracketMatch.background", BLACK),
    ("editorBracketMatch.border", ACCENT),
    // Editor selection: full inversion
    ("editor.selectionBackground", "#FFFFFF"),
    ("editor.selectionForeground", BLACK),
    ("editor.inactiveSelectionBackground", "#BFBFBF"),
    ("editor.selectionHighlightBackground", "#00000000"),
    ("editor.selectionHighlightBorder", ACCENT),
    ("editor.wordHighlightBackground", "#00000000"),
    ("editor.wordHighlightBorder", "#FFFFFF"),
    ("editor.wordHighlightStrongBackground", "#00000000"),
    ("editor.wordHighlightStrongBorder", ACCENT),
    ("editor.findMatchBackground", BLACK),
    ("editor.findMatchBorder", ACCENT),
    ("editor.findMatchHighlightBackground", BLACK),
    ("editor.findMatchHighlightBorder", "#FFFFFF"),
    ("editor.rangeHighlightBackground", "#00000000"),
    ("editor.rangeHighlightBorder", "#FFFFFF"),
    // UI selection: dark blue under white text
    ("selection.background", UI_SELECTION),
    ("list.activeSelectionBackground", UI_SELECTION),
    ("list.activeSelectionForeground", "#FFFFFF"),
    ("list.inactiveSelectionBackground", UI_SELECTION),
    ("list.inactiveSelectionForeground", "#FFFFFF"),
    ("list.focusBackground", UI_SELECTION),
    ("list.focusForeground", "#FFFFFF"),
    ("list.focusOutline", ACCENT),
    ("list.hoverBackground", BLACK),
    ("list.hoverForeground", "#FFFFFF"),
    ("list.highlightForeground", ACCENT),
    ("quickInputList.focusBackground", UI_SELECTION),
    ("quickInputList.focusForeground", "#FFFFFF"),
    ("menu.selectionBackground", UI_SELECTION),
    ("menu.selectionForeground", "#FFFFFF"),
    ("menu.selectionBorder", ACCENT),
    ("terminal.selectionBackground", UI_SELECTION),
    ("editorSuggestWidget.selectedBackground", UI_SELECTION),
    ("editorSuggestWidget.highlightForeground", ACCENT),
    // Borders
    ("activityBar.border", "#FFFFFF"),
    ("sideBar.border", "#FFFFFF"),
    ("panel.border", "#FFFFFF"),
    ("statusBar.border", "#FFFFFF"),
    ("titleBar.border", "#FFFFFF"),
    ("tab.border", "#FFFFFF"),
    ("editorGroup.border", "#FFFFFF"),
    ("editorWidget.border", "#FFFFFF"),
    ("editorHoverWidget.border", "#FFFFFF"),
    ("editorSuggestWidget.border", "#FFFFFF"),
    ("input.border", "#FFFFFF"),
    ("dropdown.border", "#FFFFFF"),
    ("checkbox.border", "#FFFFFF"),
    ("peekView.border", "#FFFFFF"),
    ("notifications.border", "#FFFFFF"),
    ("menu.border", "#FFFFFF"),
    // Active indicators
    ("tab.activeBorder", ACCENT),
    ("tab.activeBorderTop", ACCENT),
    ("panelTitle.activeBorder", ACCENT),
    ("activityBar.activeBorder", ACCENT),
    ("inputOption.activeBorder", ACCENT),
    ("editorGroup.focusedEmptyBorder", ACCENT),
    // Foregrounds
    ("activityBar.foreground", "#FFFFFF"),
    ("activityBar.inactiveForeground", "#FFFFFF"),
    ("sideBar.foreground", "#FFFFFF"),
    ("sideBarTitle.foreground", "#FFFFFF"),
    ("sideBarSectionHeader.foreground", "#FFFFFF"),
    ("statusBar.foreground", "#FFFFFF"),
    ("statusBar.debuggingForeground", "#FFFFFF"),
    ("statusBar.debuggingBorder", ACCENT),
    ("titleBar.activeForeground", "#FFFFFF"),
    ("titleBar.inactiveForeground", "#FFFFFF"),
    ("tab.activeForeground", "#FFFFFF"),
    ("tab.inactiveForeground", "#FFFFFF"),
    ("panelTitle.activeForeground", "#FFFFFF"),
    ("panelTitle.inactiveForeground", "#FFFFFF"),
    ("input.foreground", "#FFFFFF"),
    ("input.placeholderForeground", "#BFBFBF"),
    ("dropdown.foreground", "#FFFFFF"),
    ("terminal.foreground", "#FFFFFF"),
    ("terminalCursor.foreground", "#FFFFFF"),
    // Buttons and badges
    ("button.background", BLACK),
    ("button.foreground", "#FFFFFF"),
    ("button.hoverBackground", BLACK),
    ("button.border", "#FFFFFF"),
    ("badge.background", BLACK),
    ("badge.foreground", "#FFFFFF"),
    ("activityBarBadge.background", ACCENT),
    ("activityBarBadge.foreground", BLACK),
    // Widgets
    ("editorWidget.background", BLACK),
    ("editorWidget.foreground", "#FFFFFF"),
    ("editorHoverWidget.background", BLACK),
    ("editorSuggestWidget.background", BLACK),
    ("editorSuggestWidget.foreground", "#FFFFFF"),
    ("notifications.background", BLACK),
    ("notifications.foreground", "#FFFFFF"),
    ("quickInput.background", BLACK),
    ("quickInput.foreground", "#FFFFFF"),
    // Diff: solid fills with bright borders
    ("diffEditor.insertedTextBackground", "#0B3D0B"),
    ("diffEditor.insertedTextBorder", "#50FA7B"),
    ("diffEditor.insertedLineBackground", "#0B3D0B"),
    ("diffEditor.removedTextBackground", "#4D0B0B"),
    ("diffEditor.removedTextBorder", "#FF5555"),
    ("diffEditor.removedLineBackground", "#4D0B0B"),
    ("diffEditor.border", "#FFFFFF"),
    // Merge conflicts
    ("merge.currentHeaderBackground", BLACK),
    ("merge.currentContentBackground", BLACK),
    ("merge.incomingHeaderBackground", BLACK),
    ("merge.incomingContentBackground", BLACK),
    ("merge.commonHeaderBackground", BLACK),
    ("merge.commonContentBackground", BLACK),
    ("merge.border", "#FFFFFF"),
    ("editorOverviewRuler.currentContentForeground", "#50FA7B"),
    ("editorOverviewRuler.incomingContentForeground", "#BD93F9"),
    // Scrollbar
    ("scrollbarSlider.background", "#FFFFFF66"),
    ("scrollbarSlider.hoverBackground", "#FFFFFF"),
    ("scrollbarSlider.activeBackground", "#FFFFFF"),
];

/// Returns true if `key` is exempt from the background sweep.
pub fn is_exempt(key: &str) -> bool {
    EXEMPT_SUBSTRINGS.iter().any(|s| key.contains(s))
}

/// Returns true if `key` names a background role.
pub fn is_background_key(key: &str) -> bool {
    BACKGROUND_KEYS.contains(&key) || key.ends_with("background") || key.ends_with("Background")
}

/// Phase 1: forces every non-exempt background role to [`BLACK`].
///
/// Only keys already present are touched.
pub fn sweep(theme: &mut Theme) -> usize {
    let mut swept = 0;
    for (key, value) in theme.colors.iter_mut() {
        if is_background_key(key) && !is_exempt(key) {
            *value = BLACK.to_string();
            swept += 1;
        }
    }
    swept
}

/// Phase 2: writes every [`OVERRIDES`] entry, inserting absent keys.
pub fn apply_overrides(theme: &mut Theme) {
    for (key, value) in OVERRIDES {
        theme.colors.insert(key.to_string(), value.to_string());
    }
}

/// Derives the high-contrast variant of `theme`.
///
/// Token-color rules are left unchanged.
pub fn transform(theme: &Theme) -> Theme {
    let mut hc = theme.clone();
    let swept = sweep(&mut hc);
    apply_overrides(&mut hc);
    tracing::debug!(swept, overrides = OVERRIDES.len(), "derived high-contrast variant");
    hc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::is_hex_color;

    fn theme(colors: &[(&str, &str)]) -> Theme {
        let mut theme = Theme::default();
        for (k, v) in colors {
            theme.colors.insert(k.to_string(), v.to_string());
        }
        theme
    }

    #[test]
    fn test_background_suffix_is_swept() {
        let mut t = theme(&[
            ("sideBar.background", "#21222C"),
            ("tab.hoverBackground", "#343746"),
            ("sideBar.foreground", "#F8F8F2"),
        ]);
        assert_eq!(sweep(&mut t), 2);
        assert_eq!(t.colors["sideBar.background"], BLACK);
        assert_eq!(t.colors["tab.hoverBackground"], BLACK);
        assert_eq!(t.colors["sideBar.foreground"], "#F8F8F2");
    }

    #[test]
    fn test_known_key_without_suffix_is_swept() {
        let mut t = theme(&[("widget.shadow", "#00000066"), ("scrollbar.shadow", "#191A21")]);
        sweep(&mut t);
        assert_eq!(t.colors["widget.shadow"], BLACK);
        assert_eq!(t.colors["scrollbar.shadow"], BLACK);
    }

    #[test]
    fn test_exempt_keys_keep_value() {
        let mut t = theme(&[
            ("button.background", "#44475A"),
            ("editor.selectionBackground", "#44475A"),
            ("list.inactiveSelectionBackground", "#44475A75"),
            ("badge.background", "#44475A"),
            ("activityBarBadge.background", "#FF79C6"),
            ("diffEditor.insertedTextBackground", "#50FA7B20"),
            ("merge.currentHeaderBackground", "#50FA7B90"),
            ("editor.selectionHighlightBackground", "#424450"),
            ("editorOverviewRuler.background", "#282A36"),
        ]);
        assert_eq!(sweep(&mut t), 1);
        assert_eq!(t.colors["button.background"], "#44475A");
        assert_eq!(t.colors["editor.selectionBackground"], "#44475A");
        assert_eq!(t.colors["list.inactiveSelectionBackground"], "#44475A75");
        assert_eq!(t.colors["activityBarBadge.background"], "#FF79C6");
        assert_eq!(t.colors["diffEditor.insertedTextBackground"], "#50FA7B20");
        assert_eq!(t.colors["merge.currentHeaderBackground"], "#50FA7B90");
        assert_eq!(t.colors["editor.selectionHighlightBackground"], "#424450");
        assert_eq!(t.colors["editorOverviewRuler.background"], "#282A36");
        // lowercase "badge" is not an exemption
        assert_eq!(t.colors["badge.background"], BLACK);
    }

    #[test]
    fn test_sweep_does_not_insert() {
        let mut t = theme(&[]);
        sweep(&mut t);
        assert!(t.colors.is_empty());
    }

    #[test]
    fn test_overrides_insert_absent_keys() {
        let mut t = theme(&[]);
        apply_overrides(&mut t);
        assert_eq!(t.colors["scrollbarSlider.hoverBackground"], "#FFFFFF");
        assert_eq!(t.colors["focusBorder"], ACCENT);
    }

    #[test]
    fn test_overrides_win_over_sweep() {
        let hc = transform(&theme(&[
            ("editorIndentGuide.background", "#424450"),
            ("diffEditor.removedTextBackground", "#FF555550"),
        ]));
        assert_eq!(hc.colors["editorIndentGuide.background"], "#FFFFFF");
        assert_eq!(hc.colors["diffEditor.removedTextBackground"], "#4D0B0B");
    }

    #[test]
    fn test_editor_and_button_example() {
        let base = theme(&[
            ("editor.background", "#282A36"),
            ("button.background", "#6272A4"),
        ]);
        let mut phase1 = base.clone();
        sweep(&mut phase1);
        assert_eq!(phase1.colors["editor.background"], BLACK);
        assert_eq!(phase1.colors["button.background"], "#6272A4");

        let hc = transform(&base);
        assert_eq!(hc.colors["editor.background"], BLACK);
        assert_eq!(hc.colors["button.background"], BLACK);
    }

    #[test]
    fn test_selection_policy() {
        let hc = transform(&theme(&[]));
        assert_eq!(hc.colors["editor.selectionBackground"], "#FFFFFF");
        assert_eq!(hc.colors["editor.selectionForeground"], BLACK);
        assert_eq!(hc.colors["list.activeSelectionBackground"], UI_SELECTION);
        assert_eq!(hc.colors["list.activeSelectionForeground"], "#FFFFFF");
    }

    #[test]
    fn test_every_override_is_a_hex_color() {
        for (key, value) in OVERRIDES {
            assert!(is_hex_color(value), "{key} = {value}");
        }
    }

    #[test]
    fn test_override_keys_are_unique() {
        let mut keys: Vec<&str> = OVERRIDES.iter().map(|(k, _)| *k).collect();
        keys.sort_unstable();
        let before = keys.len();
        keys.dedup();
        assert_eq!(keys.len(), before);
    }

    #[test]
    fn test_tokens_untouched() {
        let mut base = theme(&[("editor.background", "#282A36")]);
        base.token_colors.push(Default::default());
        base.token_colors[0].settings.foreground = Some("#FF79C6".into());
        let hc = transform(&base);
        assert_eq!(hc.token_colors, base.token_colors);
    }
}
