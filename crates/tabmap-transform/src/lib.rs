//! Mapping transformers for tabular data.
//!
//! Provides a fit/transform interface for rewriting column values through
//! explicit lookup tables:
//!
//! - **[`BaseMappingTransformer`]**: each value map rewrites its own source column
//! - **[`CrossColumnMappingTransformer`]**: value maps keyed by several source
//!   columns are applied in order to a single adjust column, later entries
//!   overwriting earlier ones
//! - **[`TransformerChain`]**: an ordered list of transformers built from configuration
//!
//! # Example
//!
//! ```ignore
//! use tabmap_model::{MappingsInput, ValueMap};
//! use tabmap_transform::{CrossColumnMappingTransformer, Transformer};
//!
//! let mappings = MappingsInput::ordered([
//!     ("a", ValueMap::from([(1, "aa"), (2, "bb")])),
//!     ("b", ValueMap::from([("x", "cc"), ("z", "dd")])),
//! ]);
//! let transformer = CrossColumnMappingTransformer::new(mappings, "c")?;
//! let output = transformer.transform(&df)?;
//! ```
//!
//! Transformers hold no learned state. `fit` exists for pipeline
//! compatibility and returns the transformer unchanged; `transform` never
//! mutates the stored mappings or the caller's table.

mod base;
mod chain;
mod cross_column;
pub mod frame;
mod transformer;

pub use base::BaseMappingTransformer;
pub use chain::{TransformerChain, build_transformer};
pub use cross_column::CrossColumnMappingTransformer;
pub use transformer::Transformer;

pub use tabmap_model::{ErrorKind, MappingError, Result};
