//! Serializable transformer configuration.
//!
//! Configuration files describe a chain of transformers. Mapping arguments
//! stay as raw JSON here and go through the same validation as the
//! programmatic constructors, so a bad file fails with the same messages.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::spec::MappingSpec;

/// Which mapping transformer a configuration step builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformerKind {
    /// Rewrite each source column in place.
    Mapping,
    /// Rewrite one adjust column from several source columns, in order.
    CrossColumnMapping,
}

impl TransformerKind {
    /// Transformer name used as the prefix of error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mapping => "BaseMappingTransformer",
            Self::CrossColumnMapping => "CrossColumnMappingTransformer",
        }
    }
}

/// One transformer in a configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformerConfig {
    pub kind: TransformerKind,
    /// Object for unordered input, array of `[column, value_map]` pairs for ordered input.
    pub mappings: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjust_column: Option<Value>,
    #[serde(default)]
    pub verbose: bool,
}

impl TransformerConfig {
    /// Validates the raw arguments into a [`MappingSpec`].
    pub fn to_spec(&self) -> Result<MappingSpec> {
        let name = self.kind.name();
        match self.kind {
            TransformerKind::Mapping => MappingSpec::per_column_from_json(name, &self.mappings),
            TransformerKind::CrossColumnMapping => {
                MappingSpec::cross_column_from_json(name, &self.mappings, self.adjust_column.as_ref())
            }
        }
    }
}

/// An ordered list of transformer steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChainConfig {
    pub steps: Vec<TransformerConfig>,
}

impl ChainConfig {
    /// Parses a configuration document.
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
