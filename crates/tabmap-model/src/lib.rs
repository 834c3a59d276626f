//! Data model for lookup-based column rewriting.
//!
//! This crate holds the pieces every mapping transformer shares:
//!
//! - **scalar**: [`Scalar`], the cell value used as lookup key and replacement
//! - **value_map**: [`ValueMap`], a single column's key → replacement lookup
//! - **spec**: [`MappingSpec`], the validated and ordered set of entries
//! - **input**: raw construction arguments ([`MappingsInput`]) and their JSON decoding
//! - **config**: serde configuration for building transformers from files
//! - **error**: the [`MappingError`] taxonomy shared by construction and transform

pub mod config;
pub mod error;
pub mod input;
pub mod scalar;
pub mod spec;
pub mod value_map;

pub use config::{ChainConfig, TransformerConfig, TransformerKind};
pub use error::{ErrorKind, MappingError, Result};
pub use input::{MappingsInput, ValueMapInput};
pub use scalar::{Scalar, format_numeric};
pub use spec::{MappingEntry, MappingSpec};
pub use value_map::ValueMap;
