//! Raw construction arguments, before validation.
//!
//! Transformers accept mappings either as an explicitly ordered list of
//! entries or as a plain associative map whose iteration order carries no
//! meaning. The distinction matters once more than one entry is present,
//! so it is kept in the type rather than inferred from a container.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{MappingError, Result};
use crate::scalar::Scalar;
use crate::value_map::ValueMap;

/// A per-column value map as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueMapInput {
    Map(ValueMap),
    /// Something other than a mapping, named by its kind (`"list"`, `"int"`, ...).
    Invalid(&'static str),
}

impl From<ValueMap> for ValueMapInput {
    fn from(map: ValueMap) -> Self {
        Self::Map(map)
    }
}

/// The mappings argument as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum MappingsInput {
    /// Entries in application order.
    Ordered(Vec<(String, ValueMapInput)>),
    /// Entries with no defined order.
    Unordered(BTreeMap<String, ValueMapInput>),
    /// Something other than a mapping, named by its kind.
    Invalid(&'static str),
}

impl MappingsInput {
    /// Builds ordered input; iteration order is application order.
    pub fn ordered<I, S, M>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, M)>,
        S: Into<String>,
        M: Into<ValueMapInput>,
    {
        Self::Ordered(
            entries
                .into_iter()
                .map(|(column, map)| (column.into(), map.into()))
                .collect(),
        )
    }

    /// Builds unordered input.
    pub fn unordered<I, S, M>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, M)>,
        S: Into<String>,
        M: Into<ValueMapInput>,
    {
        Self::Unordered(
            entries
                .into_iter()
                .map(|(column, map)| (column.into(), map.into()))
                .collect(),
        )
    }

    /// Number of entries; zero for invalid input.
    pub fn len(&self) -> usize {
        match self {
            Self::Ordered(entries) => entries.len(),
            Self::Unordered(entries) => entries.len(),
            Self::Invalid(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_ordered(&self) -> bool {
        matches!(self, Self::Ordered(_))
    }

    /// Decodes mappings from JSON.
    ///
    /// A JSON object is unordered input (object key order is not preserved).
    /// A JSON array of `[column, value_map]` pairs is ordered input. A value
    /// map is either an object (string keys) or an array of `[key, value]`
    /// pairs, which keeps numeric and boolean keys typed.
    ///
    /// Shape problems are recorded as `Invalid` so validation reports them in
    /// its usual order; only non-scalar keys or values fail here.
    pub fn from_json(transformer: &'static str, value: &Value) -> Result<Self> {
        match value {
            Value::Object(object) => {
                let mut entries = BTreeMap::new();
                for (column, map) in object {
                    entries.insert(column.clone(), value_map_from_json(transformer, column, map)?);
                }
                Ok(Self::Unordered(entries))
            }
            Value::Array(items) => {
                let mut entries = Vec::with_capacity(items.len());
                for item in items {
                    let Some((column, map)) = as_pair(item) else {
                        return Ok(Self::Invalid("list"));
                    };
                    let Some(column) = column.as_str() else {
                        return Ok(Self::Invalid("list"));
                    };
                    entries.push((
                        column.to_string(),
                        value_map_from_json(transformer, column, map)?,
                    ));
                }
                Ok(Self::Ordered(entries))
            }
            other => Ok(Self::Invalid(json_kind(other))),
        }
    }
}

fn value_map_from_json(
    transformer: &'static str,
    column: &str,
    value: &Value,
) -> Result<ValueMapInput> {
    match value {
        Value::Object(object) => {
            let mut map = ValueMap::new();
            for (key, replacement) in object {
                map.insert(
                    Scalar::Str(key.clone()),
                    scalar_from_json(transformer, column, replacement)?,
                );
            }
            Ok(ValueMapInput::Map(map))
        }
        Value::Array(items) => {
            let mut map = ValueMap::new();
            for item in items {
                let Some((key, replacement)) = as_pair(item) else {
                    return Ok(ValueMapInput::Invalid("list"));
                };
                map.insert(
                    scalar_from_json(transformer, column, key)?,
                    scalar_from_json(transformer, column, replacement)?,
                );
            }
            Ok(ValueMapInput::Map(map))
        }
        other => Ok(ValueMapInput::Invalid(json_kind(other))),
    }
}

fn scalar_from_json(transformer: &'static str, column: &str, value: &Value) -> Result<Scalar> {
    match value {
        Value::Null => Ok(Scalar::Null),
        Value::Bool(b) => Ok(Scalar::Bool(*b)),
        Value::Number(n) => Ok(match n.as_i64() {
            Some(i) => Scalar::Int(i),
            None => Scalar::Float(n.as_f64().unwrap_or(f64::NAN)),
        }),
        Value::String(s) => Ok(Scalar::Str(s.clone())),
        other => Err(MappingError::NonScalarValue {
            transformer,
            column: column.to_string(),
            found: json_kind(other),
        }),
    }
}

fn as_pair(value: &Value) -> Option<(&Value, &Value)> {
    match value.as_array()?.as_slice() {
        [first, second] => Some((first, second)),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() || n.is_u64() => "int",
        Value::Number(_) => "float",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
