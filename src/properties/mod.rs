//! Declarative properties: the nested `name id { key = value }` format that
//! containers and their children are built from.
//!
//! Values are kept as raw text; typed getters convert on demand and report an
//! [`ParseError::InvalidValue`] when the text does not fit.

pub mod parser;
pub mod tokenizer;

pub use parser::{parse_properties, ParseError};

use crate::geometry::{Spacing, Vec2};

/// One block of a properties document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Properties {
    pub(crate) namespace: String,
    pub(crate) id: Option<String>,
    pub(crate) entries: Vec<(String, String)>,
    pub(crate) children: Vec<Properties>,
    pub(crate) line: usize,
}

impl Properties {
    /// Create an empty block named `namespace`.
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            ..Self::default()
        }
    }

    /// Parse a whole document. Shorthand for [`parse_properties`].
    pub fn parse(input: &str) -> Result<Properties, ParseError> {
        parse_properties(input)
    }

    /// Set an entry (builder). Replaces an existing entry with the same key.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
        self
    }

    /// Set the block id (builder).
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Append a nested block (builder).
    pub fn with_child(mut self, child: Properties) -> Self {
        self.children.push(child);
        self
    }

    /// The block name, e.g. `container` or `label`.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Source line the block starts on (0 for blocks built in code).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Nested blocks in document order.
    pub fn children(&self) -> &[Properties] {
        &self.children
    }

    /// Keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Raw value of the first entry named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    // -----------------------------------------------------------------------
    // Typed getters
    // -----------------------------------------------------------------------

    /// `true`/`false` (case-insensitive).
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, ParseError> {
        self.typed(key, "a boolean", |v| match v.to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        })
    }

    pub fn get_f32(&self, key: &str) -> Result<Option<f32>, ParseError> {
        self.typed(key, "a number", |v| v.parse::<f32>().ok())
    }

    pub fn get_i32(&self, key: &str) -> Result<Option<i32>, ParseError> {
        self.typed(key, "an integer", |v| v.parse::<i32>().ok())
    }

    /// A pair `x, y`.
    pub fn get_vec2(&self, key: &str) -> Result<Option<Vec2>, ParseError> {
        self.typed(key, "two numbers 'x, y'", |v| match numbers(v)?.as_slice() {
            [x, y] => Some(Vec2::new(*x, *y)),
            _ => None,
        })
    }

    /// One value for all sides, or `top, right, bottom, left`.
    pub fn get_spacing(&self, key: &str) -> Result<Option<Spacing>, ParseError> {
        self.typed(key, "one or four numbers", |v| match numbers(v)?.as_slice() {
            [all] => Some(Spacing::all(*all)),
            [top, right, bottom, left] => Some(Spacing::new(*top, *right, *bottom, *left)),
            _ => None,
        })
    }

    fn typed<T>(
        &self,
        key: &str,
        expected: &str,
        convert: impl FnOnce(&str) -> Option<T>,
    ) -> Result<Option<T>, ParseError> {
        let Some(raw) = self.get(key) else {
            return Ok(None);
        };
        convert(raw.trim()).map(Some).ok_or_else(|| ParseError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
            expected: expected.to_string(),
        })
    }
}

fn numbers(value: &str) -> Option<Vec<f32>> {
    value
        .split(',')
        .map(|part| part.trim().parse::<f32>().ok())
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> Properties {
        Properties::new("container")
            .with("visible", "FALSE")
            .with("zIndex", "4")
            .with("width", "12.5")
            .with("position", "10, -20")
            .with("padding", "1, 2, 3, 4")
            .with("margin", "6")
            .with("broken", "ten")
    }

    #[test]
    fn typed_getters() {
        let p = block();
        assert_eq!(p.get_bool("visible"), Ok(Some(false)));
        assert_eq!(p.get_i32("zIndex"), Ok(Some(4)));
        assert_eq!(p.get_f32("width"), Ok(Some(12.5)));
        assert_eq!(p.get_vec2("position"), Ok(Some(Vec2::new(10.0, -20.0))));
        assert_eq!(p.get_spacing("padding"), Ok(Some(Spacing::new(1.0, 2.0, 3.0, 4.0))));
        assert_eq!(p.get_spacing("margin"), Ok(Some(Spacing::all(6.0))));
    }

    #[test]
    fn missing_keys_are_none() {
        let p = block();
        assert_eq!(p.get_bool("enabled"), Ok(None));
        assert_eq!(p.get_vec2("size"), Ok(None));
    }

    #[test]
    fn malformed_values_are_errors() {
        let p = block();
        assert_eq!(
            p.get_f32("broken"),
            Err(ParseError::InvalidValue {
                key: "broken".into(),
                value: "ten".into(),
                expected: "a number".into(),
            })
        );
        assert!(p.get_vec2("width").is_err());
        assert!(p.get_spacing("position").is_err());
        assert!(p.get_bool("zIndex").is_err());
    }

    #[test]
    fn with_replaces_existing_key() {
        let p = Properties::new("label").with("text", "a").with("text", "b");
        assert_eq!(p.get("text"), Some("b"));
        assert_eq!(p.keys().count(), 1);
    }
}
