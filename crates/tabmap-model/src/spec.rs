//! Validated mapping specification.
//!
//! A [`MappingSpec`] is built once, checked eagerly, and never changed
//! afterwards. Entries keep the order they were supplied in; for
//! cross-column rewriting that order is the application order.

use serde_json::Value;

use crate::error::{MappingError, Result};
use crate::input::{MappingsInput, ValueMapInput};
use crate::value_map::ValueMap;

/// One `(source column, value map)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    pub source_column: String,
    pub values: ValueMap,
}

/// Ordered mapping entries plus the column that receives written values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingSpec {
    entries: Vec<MappingEntry>,
    adjust_column: Option<String>,
}

impl MappingSpec {
    /// Validates mappings for per-column rewriting, where each entry writes
    /// back into its own source column.
    ///
    /// Unordered input is accepted with any number of entries because the
    /// entries never touch each other's columns.
    pub fn per_column(transformer: &'static str, mappings: MappingsInput) -> Result<Self> {
        let (entries, _) = validate_entries(transformer, mappings)?;
        Ok(Self {
            entries,
            adjust_column: None,
        })
    }

    /// Validates mappings for rewriting a single `adjust_column`.
    pub fn cross_column(
        transformer: &'static str,
        mappings: MappingsInput,
        adjust_column: impl Into<String>,
    ) -> Result<Self> {
        build_cross_column(transformer, mappings, Some(adjust_column.into()))
    }

    /// Validates JSON arguments for rewriting a single `adjust_column`.
    ///
    /// `adjust_column` must be a JSON string; a missing value is treated the
    /// same as a non-string one.
    pub fn cross_column_from_json(
        transformer: &'static str,
        mappings: &Value,
        adjust_column: Option<&Value>,
    ) -> Result<Self> {
        let mappings = MappingsInput::from_json(transformer, mappings)?;
        let adjust_column = adjust_column.and_then(Value::as_str).map(str::to_string);
        build_cross_column(transformer, mappings, adjust_column)
    }

    /// Validates JSON mappings for per-column rewriting.
    pub fn per_column_from_json(transformer: &'static str, mappings: &Value) -> Result<Self> {
        Self::per_column(transformer, MappingsInput::from_json(transformer, mappings)?)
    }

    /// Entries in application order.
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    /// Source columns in application order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.source_column.as_str())
    }

    /// The column receiving writes, for cross-column specs.
    pub fn adjust_column(&self) -> Option<&str> {
        self.adjust_column.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn build_cross_column(
    transformer: &'static str,
    mappings: MappingsInput,
    adjust_column: Option<String>,
) -> Result<MappingSpec> {
    let (entries, ordered) = validate_entries(transformer, mappings)?;

    let Some(adjust_column) = adjust_column else {
        return Err(MappingError::AdjustColumnNotString { transformer });
    };

    if entries.len() > 1 && !ordered {
        return Err(MappingError::UnorderedMultiColumn { transformer });
    }

    Ok(MappingSpec {
        entries,
        adjust_column: Some(adjust_column),
    })
}

/// Checks the mappings shape and unpacks it into entries.
///
/// Returns whether the input carried an explicit order.
fn validate_entries(
    transformer: &'static str,
    mappings: MappingsInput,
) -> Result<(Vec<MappingEntry>, bool)> {
    let ordered = mappings.is_ordered();
    let raw: Vec<(String, ValueMapInput)> = match mappings {
        MappingsInput::Ordered(entries) => entries,
        MappingsInput::Unordered(entries) => entries.into_iter().collect(),
        MappingsInput::Invalid(_) => {
            return Err(MappingError::MappingsNotMapping { transformer });
        }
    };

    if raw.is_empty() {
        return Err(MappingError::EmptyMappings { transformer });
    }

    // A repeated source column keeps its first position and its last value map.
    let mut unique: Vec<(String, ValueMapInput)> = Vec::with_capacity(raw.len());
    for (source_column, values) in raw {
        match unique.iter_mut().find(|(seen, _)| *seen == source_column) {
            Some(slot) => slot.1 = values,
            None => unique.push((source_column, values)),
        }
    }

    let mut entries = Vec::with_capacity(unique.len());
    for (source_column, values) in unique {
        match values {
            ValueMapInput::Map(values) => entries.push(MappingEntry {
                source_column,
                values,
            }),
            ValueMapInput::Invalid(_) => {
                return Err(MappingError::ValueMapNotMapping {
                    transformer,
                    column: source_column,
                });
            }
        }
    }

    Ok((entries, ordered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::scalar::Scalar;
    use serde_json::json;

    const CROSS: &str = "CrossColumnMappingTransformer";
    const BASE: &str = "BaseMappingTransformer";

    #[test]
    fn ordered_entries_keep_supplied_order() {
        let spec = MappingSpec::cross_column(
            CROSS,
            MappingsInput::ordered([
                ("b", ValueMap::from([("x", "cc")])),
                ("a", ValueMap::from([(1, "aa")])),
            ]),
            "c",
        )
        .unwrap();
        assert_eq!(spec.columns().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(spec.adjust_column(), Some("c"));
    }

    #[test]
    fn single_unordered_entry_is_accepted() {
        let spec = MappingSpec::cross_column(
            CROSS,
            MappingsInput::unordered([("a", ValueMap::from([("a", 1)]))]),
            "c",
        )
        .unwrap();
        assert_eq!(spec.len(), 1);
    }

    #[test]
    fn multiple_unordered_entries_are_rejected_for_cross_column() {
        let err = MappingSpec::cross_column(
            CROSS,
            MappingsInput::unordered([
                ("a", ValueMap::from([("a", 1)])),
                ("b", ValueMap::from([("b", 2)])),
            ]),
            "c",
        )
        .unwrap_err();
        assert!(matches!(err, MappingError::UnorderedMultiColumn { .. }));
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn multiple_unordered_entries_are_fine_per_column() {
        let spec = MappingSpec::per_column(
            BASE,
            MappingsInput::unordered([
                ("a", ValueMap::from([("a", 1)])),
                ("b", ValueMap::from([("b", 2)])),
            ]),
        )
        .unwrap();
        assert_eq!(spec.len(), 2);
        assert_eq!(spec.adjust_column(), None);
    }

    #[test]
    fn repeated_source_column_collapses_to_last_value_map() {
        let spec = MappingSpec::cross_column(
            CROSS,
            MappingsInput::ordered([
                ("a", ValueMap::from([("1", "x")])),
                ("b", ValueMap::from([("y", "z")])),
                ("a", ValueMap::from([("2", "w")])),
            ]),
            "c",
        )
        .unwrap();

        assert_eq!(spec.columns().collect::<Vec<_>>(), vec!["a", "b"]);
        let first = &spec.entries()[0].values;
        assert_eq!(first.len(), 1);
        assert_eq!(first.get(&Scalar::from("2")), Some(&Scalar::from("w")));
        assert_eq!(first.get(&Scalar::from("1")), None);
    }

    #[test]
    fn non_string_adjust_column_from_json() {
        let err =
            MappingSpec::cross_column_from_json(CROSS, &json!({"a": {"a": 1}}), Some(&json!(1)))
                .unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"CrossColumnMappingTransformer: adjust_column should be a string");
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn missing_adjust_column_from_json() {
        let err = MappingSpec::cross_column_from_json(CROSS, &json!({"a": {"a": 1}}), None)
            .unwrap_err();
        assert!(matches!(err, MappingError::AdjustColumnNotString { .. }));
    }

    #[test]
    fn unordered_json_object_rejected_for_cross_column() {
        let err = MappingSpec::cross_column_from_json(
            CROSS,
            &json!({"a": {"a": 1}, "b": {"b": 2}}),
            Some(&json!("c")),
        )
        .unwrap_err();
        assert!(matches!(err, MappingError::UnorderedMultiColumn { .. }));
    }

    #[test]
    fn mappings_shape_checked_before_adjust_column() {
        let err = MappingSpec::cross_column_from_json(CROSS, &json!({"a": 5}), Some(&json!(1)))
            .unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"CrossColumnMappingTransformer: values in mappings dictionary should be dictionaries");
    }

    #[test]
    fn non_mapping_and_empty_mappings() {
        let err = MappingSpec::per_column_from_json(BASE, &json!(["a", "b", "c"])).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"BaseMappingTransformer: mappings must be a dictionary");

        let err = MappingSpec::per_column_from_json(BASE, &json!({})).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"BaseMappingTransformer: mappings has no values");
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn json_ordered_pairs_build_typed_keys() {
        let spec = MappingSpec::cross_column_from_json(
            CROSS,
            &json!([["a", [[1, "aa"], [2, "bb"]]], ["b", {"x": "cc", "z": "dd"}]]),
            Some(&json!("c")),
        )
        .unwrap();
        let first = &spec.entries()[0];
        assert_eq!(first.source_column, "a");
        assert_eq!(first.values.get(&Scalar::Int(1)), Some(&Scalar::from("aa")));
        assert_eq!(spec.entries()[1].source_column, "b");
    }
}
