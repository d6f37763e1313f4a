//! Custom YAML tags recognized in palette sources.
//!
//! `serde_yaml` keeps unrecognized tags as [`Value::Tagged`] nodes. Before the
//! document is deserialized into a [`Theme`](crate::Theme), [`resolve_tags`]
//! walks the tree and replaces every tagged node with the scalar its
//! [`TagConstructor`] derives from it.
//!
//! The only built-in constructor is [`ALPHA`], which joins a color with an
//! alpha suffix:
//!
//! ```yaml
//! colors:
//!   editor.selectionBackground: !alpha ['#44475A', '75']   # -> '#44475A75'
//! ```

use serde_yaml::Value;

use crate::error::{Result, ThemeError};

/// A constructor for one custom tag: a fixed-arity sequence of scalars
/// mapped to a single derived string. Integer elements are passed as their
/// decimal text.
#[derive(Debug, Clone, Copy)]
pub struct TagConstructor {
    /// Tag name without the leading `!`.
    pub name: &'static str,
    /// Number of sequence elements the tag expects.
    pub arity: usize,
    /// Builds the scalar from the sequence elements.
    pub construct: fn(&[&str]) -> String,
}

/// `!alpha [hexRGB, alphaSuffix]` → `hexRGB + alphaSuffix`.
///
/// An unquoted integer suffix is taken as written (`80` → `"80"`), but YAML
/// reads `08` as `8`, so suffixes with a leading zero must be quoted.
pub const ALPHA: TagConstructor = TagConstructor {
    name: "alpha",
    arity: 2,
    construct: |parts| parts.concat(),
};

/// Tags understood by [`Theme::from_yaml`](crate::Theme::from_yaml).
pub const DEFAULT_TAGS: &[TagConstructor] = &[ALPHA];

impl TagConstructor {
    fn apply(&self, value: &Value) -> Result<Value> {
        let Value::Sequence(items) = value else {
            return Err(ThemeError::TagElement { tag: self.name });
        };
        if items.len() != self.arity {
            return Err(ThemeError::TagArity {
                tag: self.name,
                expected: self.arity,
                actual: items.len(),
            });
        }
        let parts = items
            .iter()
            .map(scalar_text)
            .collect::<Option<Vec<String>>>()
            .ok_or(ThemeError::TagElement { tag: self.name })?;
        let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
        Ok(Value::String((self.construct)(&parts)))
    }
}

fn scalar_text(item: &Value) -> Option<String> {
    match item {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.is_u64() || n.is_i64() => Some(n.to_string()),
        _ => None,
    }
}

/// Replaces every tagged node in `value` using the given constructors.
///
/// Tags are resolved bottom-up, so a tag's elements may themselves be tagged.
pub fn resolve_tags(value: Value, tags: &[TagConstructor]) -> Result<Value> {
    match value {
        Value::Tagged(tagged) => {
            let name = tagged.tag.to_string();
            let name = name.trim_start_matches('!');
            let constructor = tags
                .iter()
                .find(|t| t.name == name)
                .ok_or_else(|| ThemeError::UnknownTag(name.to_string()))?;
            let inner = resolve_tags(tagged.value, tags)?;
            constructor.apply(&inner)
        }
        Value::Sequence(items) => items
            .into_iter()
            .map(|item| resolve_tags(item, tags))
            .collect::<Result<Vec<_>>>()
            .map(Value::Sequence),
        Value::Mapping(mapping) => {
            let mut resolved = serde_yaml::Mapping::with_capacity(mapping.len());
            for (key, item) in mapping {
                resolved.insert(key, resolve_tags(item, tags)?);
            }
            Ok(Value::Mapping(resolved))
        }
        scalar => Ok(scalar),
    }
}
