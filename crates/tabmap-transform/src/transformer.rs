//! The fit/transform contract shared by mapping transformers.

use std::fmt;

use polars::prelude::{Column, DataFrame};
use tabmap_model::{MappingSpec, Result};

/// A table transformer with the pipeline `fit`/`transform` surface.
///
/// Implementors own a validated [`MappingSpec`] and differ only in what
/// `transform` does with it.
pub trait Transformer: fmt::Debug + Send + Sync {
    /// Name used as the prefix of every error message.
    fn name(&self) -> &'static str;

    /// The validated mapping specification.
    fn spec(&self) -> &MappingSpec;

    /// Source columns named by the mappings, in application order.
    fn columns(&self) -> Vec<&str> {
        self.spec().columns().collect()
    }

    /// No-op: mappings are supplied at construction, not learned.
    fn fit(&mut self, _df: &DataFrame, _target: Option<&Column>) -> Result<&mut Self>
    where
        Self: Sized,
    {
        Ok(self)
    }

    /// Returns a rewritten copy of `df`.
    ///
    /// Fails with [`MappingError::ColumnNotInTable`](tabmap_model::MappingError::ColumnNotInTable)
    /// before anything is rewritten if a required column is missing.
    fn transform(&self, df: &DataFrame) -> Result<DataFrame>;

    /// `fit` followed by `transform`.
    fn fit_transform(&mut self, df: &DataFrame, target: Option<&Column>) -> Result<DataFrame>
    where
        Self: Sized,
    {
        self.fit(df, target)?.transform(df)
    }
}
