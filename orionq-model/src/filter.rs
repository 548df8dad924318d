//! Caller-supplied filter parameters.
//!
//! A [`FilterSpec`] is assembled fresh for every invocation, either through
//! the builder methods or parsed from a JSON object such as
//! `{"Vendor": ["Cisco"], "Status": ["1", "2"], "CustomProperties": ["Site"]}`.

use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Reserved key selecting node custom properties.
pub const CUSTOM_PROPERTIES_KEY: &str = "CustomProperties";

/// Patterns supplied for one filter parameter.
///
/// `*` in a pattern stands for "zero or more characters".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    #[default]
    Unset,
    Single(String),
    Many(Vec<String>),
}

impl FilterValue {
    /// Non-empty patterns in the order supplied.
    #[must_use]
    pub fn patterns(&self) -> Vec<&str> {
        match self {
            Self::Unset => Vec::new(),
            Self::Single(p) => std::iter::once(p.as_str())
                .filter(|p| !p.is_empty())
                .collect(),
            Self::Many(ps) => ps
                .iter()
                .map(String::as_str)
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Returns true when no usable pattern is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns().is_empty()
    }

    fn from_json(key: &str, value: &Value) -> ModelResult<Self> {
        match value {
            Value::Null => Ok(Self::Unset),
            Value::Array(items) => items
                .iter()
                .map(|item| scalar_pattern(key, item))
                .collect::<ModelResult<Vec<_>>>()
                .map(Self::Many),
            other => scalar_pattern(key, other).map(Self::Single),
        }
    }
}

fn scalar_pattern(key: &str, value: &Value) -> ModelResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(ModelError::InvalidFilterValue {
            key: key.to_string(),
            reason: format!("expected a string or number, got {}", json_kind(other)),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<&str> for FilterValue {
    fn from(pattern: &str) -> Self {
        Self::Single(pattern.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(pattern: String) -> Self {
        Self::Single(pattern)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(patterns: Vec<String>) -> Self {
        Self::Many(patterns)
    }
}

impl From<Vec<&str>> for FilterValue {
    fn from(patterns: Vec<&str>) -> Self {
        Self::Many(patterns.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FilterValue {
    fn from(patterns: [&str; N]) -> Self {
        Self::Many(patterns.iter().map(|p| p.to_string()).collect())
    }
}

/// Which custom properties to project, and optionally filter on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomProperties {
    /// Project these properties; no filtering.
    Names(Vec<String>),
    /// Project each property and require it to match the pattern.
    Patterns(BTreeMap<String, String>),
}

impl CustomProperties {
    /// Parses the value of the reserved `CustomProperties` key.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidCustomProperties`] unless the value is a
    /// list of names or a map of name → pattern.
    pub fn from_json(value: &Value) -> ModelResult<Self> {
        match value {
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(name) => Ok(name.clone()),
                    other => Err(ModelError::InvalidCustomProperties(format!(
                        "property names must be strings, got {}",
                        json_kind(other)
                    ))),
                })
                .collect::<ModelResult<Vec<_>>>()
                .map(Self::Names),
            Value::Object(map) => map
                .iter()
                .map(|(name, pattern)| {
                    scalar_pattern(name, pattern)
                        .map(|p| (name.clone(), p))
                        .map_err(|_| {
                            ModelError::InvalidCustomProperties(format!(
                                "pattern for '{name}' must be a string or number, got {}",
                                json_kind(pattern)
                            ))
                        })
                })
                .collect::<ModelResult<BTreeMap<_, _>>>()
                .map(Self::Patterns),
            other => Err(ModelError::InvalidCustomProperties(format!(
                "expected a list of names or a name-to-pattern map, got {}",
                json_kind(other)
            ))),
        }
    }

    /// Property names in projection order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::Names(names) => names.iter().map(String::as_str).collect(),
            Self::Patterns(map) => map.keys().map(String::as_str).collect(),
        }
    }

    /// `(name, pattern)` pairs that should become filter clauses.
    #[must_use]
    pub fn filters(&self) -> Vec<(&str, &str)> {
        match self {
            Self::Names(_) => Vec::new(),
            Self::Patterns(map) => map
                .iter()
                .map(|(name, pattern)| (name.as_str(), pattern.as_str()))
                .collect(),
        }
    }
}

/// Filter parameters for a single inventory query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    values: Vec<(String, FilterValue)>,
    custom_properties: Option<CustomProperties>,
}

impl FilterSpec {
    /// An empty spec: no filters, no custom properties.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the patterns for a parameter, replacing any earlier value.
    #[must_use]
    pub fn with(mut self, parameter: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.set(parameter, value);
        self
    }

    /// Selects custom properties.
    #[must_use]
    pub fn with_custom_properties(mut self, properties: CustomProperties) -> Self {
        self.custom_properties = Some(properties);
        self
    }

    /// Sets the patterns for a parameter in place.
    ///
    /// The reserved `CustomProperties` key selects properties by name
    /// instead of becoming a filter; an empty value clears the selection.
    pub fn set(&mut self, parameter: impl Into<String>, value: impl Into<FilterValue>) {
        let parameter = parameter.into();
        let value = value.into();
        if parameter.eq_ignore_ascii_case(CUSTOM_PROPERTIES_KEY) {
            let names: Vec<String> = value.patterns().into_iter().map(str::to_owned).collect();
            self.custom_properties = (!names.is_empty()).then_some(CustomProperties::Names(names));
            return;
        }
        match self
            .values
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&parameter))
        {
            Some(slot) => slot.1 = value,
            None => self.values.push((parameter, value)),
        }
    }

    /// Appends one pattern to a parameter, keeping earlier ones.
    ///
    /// For `CustomProperties` the pattern is a property name added to the
    /// selection.
    pub fn push(&mut self, parameter: impl Into<String>, pattern: impl Into<String>) {
        let parameter = parameter.into();
        let pattern = pattern.into();
        if parameter.eq_ignore_ascii_case(CUSTOM_PROPERTIES_KEY) {
            self.push_custom_property(pattern);
            return;
        }
        match self
            .values
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&parameter))
        {
            Some((_, value)) => {
                let merged = match std::mem::take(value) {
                    FilterValue::Unset => FilterValue::Single(pattern),
                    FilterValue::Single(first) => FilterValue::Many(vec![first, pattern]),
                    FilterValue::Many(mut all) => {
                        all.push(pattern);
                        FilterValue::Many(all)
                    }
                };
                *value = merged;
            }
            None => self.values.push((parameter, FilterValue::Single(pattern))),
        }
    }

    fn push_custom_property(&mut self, name: String) {
        if name.is_empty() {
            return;
        }
        match &mut self.custom_properties {
            Some(CustomProperties::Names(names)) => names.push(name),
            Some(CustomProperties::Patterns(patterns)) => {
                debug!(property = %name, "Selecting by name replaces custom property patterns");
                let mut names: Vec<String> = std::mem::take(patterns).into_keys().collect();
                names.push(name);
                self.custom_properties = Some(CustomProperties::Names(names));
            }
            None => self.custom_properties = Some(CustomProperties::Names(vec![name])),
        }
    }

    /// Sets custom properties in place.
    pub fn set_custom_properties(&mut self, properties: CustomProperties) {
        self.custom_properties = Some(properties);
    }

    /// Looks up a parameter, ignoring ASCII case.
    #[must_use]
    pub fn get(&self, parameter: &str) -> Option<&FilterValue> {
        self.values
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(parameter))
            .map(|(_, v)| v)
    }

    /// All supplied parameters in insertion order.
    pub fn parameters(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(k, _)| k.as_str())
    }

    #[must_use]
    pub fn custom_properties(&self) -> Option<&CustomProperties> {
        self.custom_properties.as_ref()
    }

    /// Parses a JSON object of parameter → pattern(s).
    ///
    /// Keys are not checked against any registry here; unknown keys are
    /// carried along and ignored by the query builder.
    ///
    /// # Errors
    ///
    /// Fails if the document is not an object, a filter value is not a
    /// string/number (or list of them), or custom properties are malformed.
    pub fn from_json(value: &Value) -> ModelResult<Self> {
        let Value::Object(map) = value else {
            return Err(ModelError::InvalidFilterDocument(format!(
                "expected an object, got {}",
                json_kind(value)
            )));
        };

        let mut spec = Self::new();
        for (key, value) in map {
            if key.eq_ignore_ascii_case(CUSTOM_PROPERTIES_KEY) {
                if !value.is_null() {
                    spec.custom_properties = Some(CustomProperties::from_json(value)?);
                }
            } else {
                spec.set(key.clone(), FilterValue::from_json(key, value)?);
            }
        }
        Ok(spec)
    }

    /// Parses a JSON string; see [`FilterSpec::from_json`].
    pub fn from_json_str(json: &str) -> ModelResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json(&value)
    }
}
