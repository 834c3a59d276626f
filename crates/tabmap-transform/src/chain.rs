//! Ordered chains of transformers built from configuration.

use polars::prelude::{Column, DataFrame};
use tabmap_model::{ChainConfig, Result, TransformerConfig, TransformerKind};

use crate::base::BaseMappingTransformer;
use crate::cross_column::CrossColumnMappingTransformer;
use crate::transformer::Transformer;

/// Builds the transformer a configuration step describes.
pub fn build_transformer(config: &TransformerConfig) -> Result<Box<dyn Transformer>> {
    let spec = config.to_spec()?;
    let transformer: Box<dyn Transformer> = match config.kind {
        TransformerKind::Mapping => {
            Box::new(BaseMappingTransformer::from_spec(spec).with_verbose(config.verbose))
        }
        TransformerKind::CrossColumnMapping => {
            Box::new(CrossColumnMappingTransformer::from_spec(spec)?.with_verbose(config.verbose))
        }
    };
    Ok(transformer)
}

/// Transformers applied one after another, each to the previous output.
#[derive(Debug, Default)]
pub struct TransformerChain {
    steps: Vec<Box<dyn Transformer>>,
}

impl TransformerChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates every step of `config`, failing on the first invalid one.
    pub fn from_config(config: &ChainConfig) -> Result<Self> {
        let steps = config
            .steps
            .iter()
            .map(build_transformer)
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(steps = steps.len(), "Built transformer chain");
        Ok(Self { steps })
    }

    /// Appends a step.
    #[must_use]
    pub fn with_step(mut self, step: impl Transformer + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn steps(&self) -> &[Box<dyn Transformer>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// No-op: mapping steps carry no learned state.
    pub fn fit(&mut self, _df: &DataFrame, _target: Option<&Column>) -> Result<&mut Self> {
        Ok(self)
    }

    /// Threads `df` through every step in order.
    pub fn transform(&self, df: &DataFrame) -> Result<DataFrame> {
        let mut current = df.clone();
        for (index, step) in self.steps.iter().enumerate() {
            let _span = tracing::debug_span!("step", index, transformer = step.name()).entered();
            current = step.transform(&current)?;
        }
        Ok(current)
    }

    /// `fit` followed by `transform`.
    pub fn fit_transform(&mut self, df: &DataFrame, target: Option<&Column>) -> Result<DataFrame> {
        self.fit(df, target)?.transform(df)
    }
}
