//! Defines the flat style map handed between the declaration parser, the
//! sanitizer and the output primitives.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single transform operation, serialized as `{"translateY": -4.9}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Transform {
    TranslateY(f32),
}

/// A primitive style value: a number, a string, or a short transform list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f32),
    Text(String),
    Transform(Vec<Transform>),
}

impl StyleValue {
    pub fn as_number(&self) -> Option<f32> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// True for string values such as `"50%"` or `" 10 % "`.
    pub fn is_percentage(&self) -> bool {
        self.as_text().is_some_and(|s| s.trim().ends_with('%'))
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        StyleValue::Number(n)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n as f32)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<Vec<Transform>> for StyleValue {
    fn from(ops: Vec<Transform>) -> Self {
        StyleValue::Transform(ops)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Text(s) => f.write_str(s),
            StyleValue::Transform(ops) => write!(f, "{:?}", ops),
        }
    }
}

/// Property name → value, keyed by camelCase property names (`fontSize`,
/// `marginLeft`, ...). Iteration order is the key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<String, StyleValue>);

impl StyleMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.0.get(property)
    }

    pub fn contains_key(&self, property: &str) -> bool {
        self.0.contains_key(property)
    }

    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<StyleValue>) {
        self.0.insert(property.into(), value.into());
    }

    pub fn remove(&mut self, property: &str) -> Option<StyleValue> {
        self.0.remove(property)
    }

    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&String, &mut StyleValue) -> bool,
    {
        self.0.retain(keep);
    }

    /// Builder-style insert.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(property, value);
        self
    }

    /// Copies every entry of `top` over `self`; entries in `top` win.
    pub fn overlay(&mut self, top: &StyleMap) {
        for (k, v) in top.iter() {
            self.0.insert(k.clone(), v.clone());
        }
    }

    /// Returns `self` with `top` laid over it.
    pub fn merged(&self, top: &StyleMap) -> StyleMap {
        let mut out = self.clone();
        out.overlay(top);
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StyleValue)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn font_size(&self) -> Option<f32> {
        self.get("fontSize").and_then(StyleValue::as_number)
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for StyleMap {
    type Item = (String, StyleValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
