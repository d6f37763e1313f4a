//! The theme document model and its YAML loader.
//!
//! A [`Theme`] mirrors the editor's color-theme JSON schema, plus the
//! `dracula` palette block used to drive the variant transforms:
//!
//! ```yaml
//! name: Dracula
//! dracula:
//!   base: ['#282A36', '#F8F8F2']
//!   ansi: ['#FF5555', '#50FA7B']
//!   brightOther: ['#E9F284']
//!   other: ['#44475A75']
//! colors:
//!   editor.background: '#282A36'
//!   editor.foreground: '#F8F8F2'
//!   editorError.background: null
//! tokenColors:
//!   - name: Comment
//!     scope: [comment]
//!     settings: { foreground: '#6272A4', fontStyle: italic }
//! ```
//!
//! Loading resolves custom tags, drops null or empty color entries, and
//! validates every color and font style. Top-level keys the model does not
//! name (`name`, `type`, `semanticTokenColors`, …) are carried through to the
//! JSON output untouched.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::color::is_hex_color;
use crate::error::{Result, ThemeError};
use crate::tags::{resolve_tags, TagConstructor, DEFAULT_TAGS};

/// Editor UI role name → color.
pub type ColorMapping = BTreeMap<String, String>;

/// Flags allowed in a token rule's `fontStyle`.
pub const FONT_STYLE_FLAGS: &[&str] = &["italic", "bold", "underline", "strikethrough"];

/// Named groups of canonical palette colors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    #[serde(default)]
    pub base: Vec<String>,
    #[serde(default)]
    pub ansi: Vec<String>,
    #[serde(default)]
    pub bright_other: Vec<String>,
    #[serde(default)]
    pub other: Vec<String>,
    /// Any additional groups, kept as-is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Vec<String>>,
}

impl Palette {
    /// The union of the `ansi` and `brightOther` groups.
    ///
    /// Membership is exact string equality, so `#ff5555` does not match a
    /// stored `#FF5555`, and alpha-suffixed values never match.
    pub fn bright_colors(&self) -> HashSet<&str> {
        self.ansi
            .iter()
            .chain(&self.bright_other)
            .map(String::as_str)
            .collect()
    }

    fn groups(&self) -> impl Iterator<Item = (&str, &Vec<String>)> {
        [
            ("base", &self.base),
            ("ansi", &self.ansi),
            ("brightOther", &self.bright_other),
            ("other", &self.other),
        ]
        .into_iter()
        .chain(self.extra.iter().map(|(k, v)| (k.as_str(), v)))
    }
}

/// Style settings applied to a set of syntax scopes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
}

/// A syntax-highlighting rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenColorRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Scope selectors. A single comma-separated string in the source is
    /// split into its parts.
    #[serde(
        default,
        deserialize_with = "deserialize_scope",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub scope: Vec<String>,
    #[serde(default)]
    pub settings: TokenSettings,
}

fn deserialize_scope<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scope {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Scope::deserialize(deserializer)? {
        Scope::One(s) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        Scope::Many(v) => v,
    })
}

/// A color theme: palette, UI colors and token rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Palette groups used as lookup sets by the variant transforms.
    #[serde(rename = "dracula", default)]
    pub palette: Palette,
    #[serde(default)]
    pub colors: ColorMapping,
    #[serde(rename = "tokenColors", default)]
    pub token_colors: Vec<TokenColorRule>,
    /// Remaining top-level keys, passed through unchanged.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// The document as deserialized, before sanitation.
#[derive(Debug, Deserialize)]
struct RawTheme {
    #[serde(rename = "dracula", default)]
    palette: Palette,
    #[serde(default)]
    colors: BTreeMap<String, Option<String>>,
    #[serde(rename = "tokenColors", default)]
    token_colors: Vec<TokenColorRule>,
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

/// Drops entries whose value is null or empty.
pub fn sanitize_colors(raw: BTreeMap<String, Option<String>>) -> ColorMapping {
    raw.into_iter()
        .filter_map(|(key, value)| match value {
            Some(v) if !v.is_empty() => Some((key, v)),
            _ => None,
        })
        .collect()
}

impl Theme {
    /// Loads a theme from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Read`] if the file cannot be read, or any
    /// parse-class error from [`from_yaml`](Theme::from_yaml).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parses, sanitizes and validates a theme from YAML using the default tags.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dracula_theme::Theme;
    ///
    /// let theme = Theme::from_yaml(r#"
    /// dracula:
    ///   ansi: ['#FF5555']
    /// colors:
    ///   statusBar.foreground: '#FF5555'
    ///   editor.lineHighlightBackground: !alpha ['#44475A', '75']
    ///   editorError.background: null
    /// "#).unwrap();
    ///
    /// assert_eq!(theme.colors["editor.lineHighlightBackground"], "#44475A75");
    /// assert!(!theme.colors.contains_key("editorError.background"));
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::from_yaml_with_tags(yaml, DEFAULT_TAGS)
    }

    /// Like [`from_yaml`](Theme::from_yaml) with an explicit tag set.
    pub fn from_yaml_with_tags(yaml: &str, tags: &[TagConstructor]) -> Result<Self> {
        let document: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        let document = resolve_tags(document, tags)?;
        let raw: RawTheme = serde_yaml::from_value(document)?;

        let theme = Theme {
            palette: raw.palette,
            colors: sanitize_colors(raw.colors),
            token_colors: raw.token_colors,
            extra: raw.extra,
        };
        theme.validate()?;
        Ok(theme)
    }

    /// Checks that every color is a hex color and every font style is known.
    pub fn validate(&self) -> Result<()> {
        for (group, colors) in self.palette.groups() {
            for (i, value) in colors.iter().enumerate() {
                if !is_hex_color(value) {
                    return Err(ThemeError::invalid_color(
                        format!("dracula.{}[{}]", group, i),
                        value,
                    ));
                }
            }
        }

        for (key, value) in &self.colors {
            if !is_hex_color(value) {
                return Err(ThemeError::invalid_color(key, value));
            }
        }

        for (i, rule) in self.token_colors.iter().enumerate() {
            let settings = &rule.settings;
            for (field, value) in [
                ("foreground", &settings.foreground),
                ("background", &settings.background),
            ] {
                if let Some(value) = value {
                    if !is_hex_color(value) {
                        return Err(ThemeError::invalid_color(
                            format!("tokenColors[{}].settings.{}", i, field),
                            value,
                        ));
                    }
                }
            }
            if let Some(style) = &settings.font_style {
                if !style
                    .split_whitespace()
                    .all(|flag| FONT_STYLE_FLAGS.contains(&flag))
                {
                    return Err(ThemeError::InvalidFontStyle {
                        rule: i,
                        value: style.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Serializes to JSON indented with four spaces.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Parses a theme previously written by [`to_json_pretty`](Theme::to_json_pretty).
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
