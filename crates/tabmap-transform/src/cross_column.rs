//! Ordered cross-column rewriting.
//!
//! Each entry looks up values in its own source column and, where a key
//! matches, overwrites the same row of the adjust column. Entries run in the
//! order they were supplied, so a row matched by several entries ends up with
//! the value written by the last of them.

use polars::prelude::DataFrame;
use tabmap_model::{MappingError, MappingSpec, MappingsInput, Result, Scalar, TransformerKind};

use crate::frame::{check_columns, column_scalars, scalars_to_column, table_error};
use crate::transformer::Transformer;

/// Rewrites one adjust column from value maps keyed by other columns.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossColumnMappingTransformer {
    spec: MappingSpec,
    adjust_column: String,
    verbose: bool,
}

impl CrossColumnMappingTransformer {
    pub const NAME: &'static str = TransformerKind::CrossColumnMapping.name();

    /// Validates `mappings` and builds the transformer.
    ///
    /// More than one entry requires [`MappingsInput::Ordered`].
    pub fn new(mappings: MappingsInput, adjust_column: impl Into<String>) -> Result<Self> {
        Self::from_spec(MappingSpec::cross_column(
            Self::NAME,
            mappings,
            adjust_column,
        )?)
    }

    /// Wraps an already validated spec, which must carry an adjust column.
    pub(crate) fn from_spec(spec: MappingSpec) -> Result<Self> {
        let adjust_column = spec
            .adjust_column()
            .map(str::to_string)
            .ok_or(MappingError::AdjustColumnNotString {
                transformer: Self::NAME,
            })?;
        Ok(Self {
            spec,
            adjust_column,
            verbose: false,
        })
    }

    /// Log rewritten rows at info level instead of debug.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// The stored mappings.
    pub fn mappings(&self) -> &MappingSpec {
        &self.spec
    }

    /// The column receiving written values.
    pub fn adjust_column(&self) -> &str {
        &self.adjust_column
    }
}

impl Transformer for CrossColumnMappingTransformer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn spec(&self) -> &MappingSpec {
        &self.spec
    }

    fn transform(&self, df: &DataFrame) -> Result<DataFrame> {
        let adjust = self.adjust_column();
        check_columns(Self::NAME, df, [adjust])?;
        check_columns(Self::NAME, df, self.spec.columns())?;

        let target = df
            .column(adjust)
            .map_err(|e| table_error(Self::NAME, adjust, &e))?;
        let dtype = target.dtype().clone();
        let mut adjusted =
            column_scalars(target).map_err(|e| table_error(Self::NAME, adjust, &e))?;

        let mut written = 0usize;
        for entry in self.spec.entries() {
            let source = entry.source_column.as_str();
            // A source that is also the adjust column sees earlier writes.
            let keys: Vec<Scalar> = if source == adjust {
                adjusted.clone()
            } else {
                let column = df
                    .column(source)
                    .map_err(|e| table_error(Self::NAME, source, &e))?;
                column_scalars(column).map_err(|e| table_error(Self::NAME, source, &e))?
            };

            let mut matched = 0usize;
            for (row, key) in keys.iter().enumerate() {
                if let Some(replacement) = entry.values.get(key) {
                    adjusted[row] = replacement.clone();
                    matched += 1;
                }
            }
            written += matched;

            if self.verbose {
                tracing::info!(
                    transformer = Self::NAME,
                    source = %source,
                    adjust = %adjust,
                    matched,
                    "Applied cross column mapping"
                );
            } else {
                tracing::debug!(
                    transformer = Self::NAME,
                    source = %source,
                    adjust = %adjust,
                    matched,
                    "Applied cross column mapping"
                );
            }
        }

        if written == 0 {
            tracing::trace!(transformer = Self::NAME, adjust = %adjust, "No rows matched");
            return Ok(df.clone());
        }

        let column = scalars_to_column(adjust, &adjusted, &dtype)
            .map_err(|e| table_error(Self::NAME, adjust, &e))?;
        let mut output = df.clone();
        output
            .with_column(column)
            .map_err(|e| table_error(Self::NAME, adjust, &e))?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;
    use tabmap_model::ValueMap;

    fn strings(df: &DataFrame, name: &str) -> Vec<Option<String>> {
        df.column(name)
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect()
    }

    #[test]
    fn self_keyed_entry_sees_earlier_writes() {
        let df = df! {
            "a" => &[1, 2],
            "c" => &["p", "q"],
        }
        .unwrap();
        let transformer = CrossColumnMappingTransformer::new(
            MappingsInput::ordered([
                ("a", ValueMap::from([(1, "r")])),
                ("c", ValueMap::from([("r", "s")])),
            ]),
            "c",
        )
        .unwrap();

        let result = transformer.transform(&df).unwrap();
        assert_eq!(
            strings(&result, "c"),
            vec![Some("s".to_string()), Some("q".to_string())]
        );
    }

    #[test]
    fn missing_source_column_is_reported() {
        let df = df! { "c" => &["p"] }.unwrap();
        let transformer = CrossColumnMappingTransformer::new(
            MappingsInput::unordered([("a", ValueMap::from([(1, "r")]))]),
            "c",
        )
        .unwrap();

        let err = transformer.transform(&df).unwrap_err();
        assert_eq!(
            err.to_string(),
            "CrossColumnMappingTransformer: variable a is not in X"
        );
    }

    #[test]
    fn spec_without_adjust_column_is_rejected() {
        let spec = MappingSpec::per_column(
            "BaseMappingTransformer",
            MappingsInput::unordered([("a", ValueMap::from([(1, "r")]))]),
        )
        .unwrap();

        let err = CrossColumnMappingTransformer::from_spec(spec).unwrap_err();
        assert_eq!(
            err.to_string(),
            "CrossColumnMappingTransformer: adjust_column should be a string"
        );
    }

    #[test]
    fn adjust_column_accessor() {
        let transformer = CrossColumnMappingTransformer::new(
            MappingsInput::unordered([("a", ValueMap::from([(1, "r")]))]),
            "c",
        )
        .unwrap();
        assert_eq!(transformer.adjust_column(), "c");
        assert_eq!(transformer.columns(), vec!["a"]);
    }
}
