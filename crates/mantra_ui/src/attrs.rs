//! Custom-element attribute conventions.
//!
//! Components take typed props, but hosts that only speak markup (the preview harness, pages
//! templating the library) hand over plain attribute strings. [`Attributes`] converts those
//! strings into typed configuration: booleans are "present and not `false`", numbers are
//! numeric strings, and closed enumerations parse through [`FromAttr`]. Anything that does not
//! parse resolves to `None` so the matching class fragment is simply left out.

use std::collections::BTreeMap;

/// Parses a closed attribute token set into a typed value.
pub trait FromAttr: Sized {
    /// Returns the typed value for `raw`, or `None` when the token is not recognized.
    fn from_attr(raw: &str) -> Option<Self>;
}

/// Ordered attribute map for one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    values: BTreeMap<String, String>,
}

impl Attributes {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from `(name, value)` pairs. Later duplicates win.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut attrs = Self::new();
        for (name, value) in pairs {
            attrs.set(name, value);
        }
        attrs
    }

    /// Sets an attribute. Names are normalized to lowercase as the DOM does.
    pub fn set(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.values
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
    }

    /// Removes an attribute, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(&name.to_ascii_lowercase())
    }

    /// Raw string value, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Raw string value, with empty strings treated as absent.
    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name)
            .filter(|value| !value.trim().is_empty())
            .map(str::to_string)
    }

    /// Boolean attribute: present and not `"false"`.
    pub fn flag(&self, name: &str) -> bool {
        parse_flag(self.get(name))
    }

    /// Numeric attribute parsed from its string form.
    pub fn number(&self, name: &str) -> Option<u32> {
        self.get(name).and_then(parse_number)
    }

    /// Enumerated attribute parsed through [`FromAttr`].
    pub fn token<T: FromAttr>(&self, name: &str) -> Option<T> {
        self.get(name).and_then(T::from_attr)
    }

    /// Enumerated attribute with a default for the absent case.
    ///
    /// An absent attribute yields `Some(default)`; a present but unrecognized one yields `None`,
    /// so the component drops that class fragment instead of silently using the default.
    pub fn token_or<T: FromAttr>(&self, name: &str, default: T) -> Option<T> {
        match self.get(name) {
            None => Some(default),
            Some(raw) => T::from_attr(raw),
        }
    }

    /// Iterates attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of attributes set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Boolean attribute convention shared with custom elements.
pub fn parse_flag(raw: Option<&str>) -> bool {
    match raw {
        None => false,
        Some(value) => !value.trim().eq_ignore_ascii_case("false"),
    }
}

/// Numeric attribute convention. Fractional values are truncated toward zero.
pub fn parse_number(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<u32>() {
        return Some(value);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0 && *value <= u32::MAX as f64)
        .map(|value| value.trunc() as u32)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Size;

    #[test]
    fn boolean_attributes_follow_presence_convention() {
        let attrs = Attributes::from_pairs([("disabled", ""), ("full-width", "false")]);

        assert!(attrs.flag("disabled"));
        assert!(!attrs.flag("full-width"));
        assert!(!attrs.flag("missing"));
        assert!(parse_flag(Some("true")));
        assert!(!parse_flag(Some(" FALSE ")));
    }

    #[test]
    fn numbers_parse_from_numeric_strings() {
        assert_eq!(parse_number("48"), Some(48));
        assert_eq!(parse_number(" 32.9 "), Some(32));
        assert_eq!(parse_number("-4"), None);
        assert_eq!(parse_number("tall"), None);
    }

    #[test]
    fn names_are_case_insensitive_and_last_write_wins() {
        let mut attrs = Attributes::from_pairs([("Name", "ifood"), ("name", "yooga")]);
        assert_eq!(attrs.get("NAME"), Some("yooga"));
        assert_eq!(attrs.len(), 1);

        attrs.remove("name");
        assert!(attrs.is_empty());
    }

    #[test]
    fn unknown_enum_tokens_resolve_to_none() {
        let attrs = Attributes::from_pairs([("size", "large"), ("variant", "gigantic")]);

        assert_eq!(attrs.token::<Size>("size"), Some(Size::Large));
        assert_eq!(attrs.token::<Size>("variant"), None);
    }

    #[test]
    fn absent_tokens_use_the_default_but_unknown_ones_do_not() {
        let attrs = Attributes::from_pairs([("size", "huge")]);

        assert_eq!(attrs.token_or("size", Size::Medium), None);
        assert_eq!(attrs.token_or("other", Size::Medium), Some(Size::Medium));
    }

    #[test]
    fn blank_text_is_treated_as_absent() {
        let attrs = Attributes::from_pairs([("label", "  "), ("placeholder", "Search")]);

        assert_eq!(attrs.text("label"), None);
        assert_eq!(attrs.text("placeholder"), Some("Search".to_string()));
    }
}
