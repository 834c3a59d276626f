//! Per-column value substitution.

use polars::prelude::DataFrame;
use tabmap_model::{MappingSpec, MappingsInput, Result, Scalar, TransformerKind};

use crate::frame::{check_columns, column_scalars, scalars_to_column, table_error};
use crate::transformer::Transformer;

/// Rewrites each source column through its own value map.
///
/// For every `(column, value_map)` entry, cells of `column` equal to a key
/// are replaced by the mapped value; all other cells pass through. Entries
/// never read or write each other's columns, so their order is irrelevant.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseMappingTransformer {
    spec: MappingSpec,
    verbose: bool,
}

impl BaseMappingTransformer {
    pub const NAME: &'static str = TransformerKind::Mapping.name();

    /// Validates `mappings` and builds the transformer.
    ///
    /// Unordered mappings are accepted with any number of entries.
    pub fn new(mappings: MappingsInput) -> Result<Self> {
        Ok(Self::from_spec(MappingSpec::per_column(Self::NAME, mappings)?))
    }

    pub(crate) fn from_spec(spec: MappingSpec) -> Self {
        Self {
            spec,
            verbose: false,
        }
    }

    /// Log rewritten columns at info level instead of debug.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// The stored mappings.
    pub fn mappings(&self) -> &MappingSpec {
        &self.spec
    }
}

impl Transformer for BaseMappingTransformer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn spec(&self) -> &MappingSpec {
        &self.spec
    }

    fn transform(&self, df: &DataFrame) -> Result<DataFrame> {
        check_columns(Self::NAME, df, self.spec.columns())?;

        let mut output = df.clone();
        for entry in self.spec.entries() {
            let name = entry.source_column.as_str();
            let column = output
                .column(name)
                .map_err(|e| table_error(Self::NAME, name, &e))?;
            let dtype = column.dtype().clone();
            let cells = column_scalars(column).map_err(|e| table_error(Self::NAME, name, &e))?;

            let mut replaced = 0usize;
            let rewritten: Vec<Scalar> = cells
                .into_iter()
                .map(|cell| match entry.values.get(&cell) {
                    Some(replacement) => {
                        replaced += 1;
                        replacement.clone()
                    }
                    None => cell,
                })
                .collect();

            if self.verbose {
                tracing::info!(
                    transformer = Self::NAME,
                    column = %name,
                    replaced,
                    "Mapped column values"
                );
            } else {
                tracing::debug!(
                    transformer = Self::NAME,
                    column = %name,
                    replaced,
                    "Mapped column values"
                );
            }

            if replaced == 0 {
                continue;
            }

            let column = scalars_to_column(name, &rewritten, &dtype)
                .map_err(|e| table_error(Self::NAME, name, &e))?;
            output
                .with_column(column)
                .map_err(|e| table_error(Self::NAME, name, &e))?;
        }

        Ok(output)
    }
}
