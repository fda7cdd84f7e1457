//! Properties value object - the named string bag handed to spec loaders
//!
//! The pipeline never interprets properties; loaders may use them to expand
//! `${name}` placeholders.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, String>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Layer `other` on top of `self`; keys in `other` win.
    pub fn merged_with(mut self, other: &Properties) -> Self {
        for (name, value) in other.iter() {
            self.set(name, value);
        }
        self
    }

    /// Parse a `name=value` pair as given on the command line
    pub fn parse_pair(pair: &str) -> Option<(String, String)> {
        let (name, value) = pair.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some((name.to_string(), value.to_string()))
    }

    /// Expand `${name}` placeholders.
    ///
    /// Returns the first unknown placeholder name as the error. An unclosed
    /// `${` is kept literally.
    pub fn expand(&self, input: &str) -> Result<String, String> {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find('}') else {
                out.push_str(&rest[start..]);
                return Ok(out);
            };
            let name = after[..end].trim();
            match self.get(name) {
                Some(value) => out.push_str(value),
                None => return Err(name.to_string()),
            }
            rest = &after[end + 1..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_replaces_known_placeholders() {
        let props: Properties = [("device", "desktop"), ("id", "42")].into_iter().collect();
        assert_eq!(
            props.expand("#menu-${device}-${id}").unwrap(),
            "#menu-desktop-42"
        );
    }

    #[test]
    fn expand_reports_unknown_placeholder() {
        let props = Properties::new();
        assert_eq!(props.expand("#x-${missing}"), Err("missing".to_string()));
    }

    #[test]
    fn expand_keeps_unclosed_placeholder() {
        let props = Properties::new();
        assert_eq!(props.expand("a ${b").unwrap(), "a ${b");
    }

    #[test]
    fn parse_pair_splits_on_first_equals() {
        assert_eq!(
            Properties::parse_pair("url=http://x?a=b"),
            Some(("url".to_string(), "http://x?a=b".to_string()))
        );
        assert_eq!(Properties::parse_pair("novalue"), None);
        assert_eq!(Properties::parse_pair("=x"), None);
    }

    #[test]
    fn merged_with_prefers_other() {
        let base: Properties = [("a", "1"), ("b", "2")].into_iter().collect();
        let top: Properties = [("b", "3")].into_iter().collect();
        let merged = base.merged_with(&top);
        assert_eq!(merged.get("a"), Some("1"));
        assert_eq!(merged.get("b"), Some("3"));
    }
}
