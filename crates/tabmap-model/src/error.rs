//! Error types for mapping construction and application.
//!
//! Every message is prefixed with the name of the transformer that raised it
//! (e.g. `CrossColumnMappingTransformer: variable c is not in X`). Callers
//! match on that text, so the wording is stable.

use thiserror::Error;

/// Broad class of a [`MappingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument had the wrong shape or type.
    Type,
    /// An argument had the right type but an unusable value.
    Value,
}

/// Errors raised while building a transformer or applying it to a table.
#[derive(Debug, Error)]
pub enum MappingError {
    /// The mappings argument is not a mapping at all.
    #[error("{transformer}: mappings must be a dictionary")]
    MappingsNotMapping { transformer: &'static str },

    /// The mappings argument holds no entries.
    #[error("{transformer}: mappings has no values")]
    EmptyMappings { transformer: &'static str },

    /// A per-column value map is a list or scalar rather than a mapping.
    #[error("{transformer}: values in mappings dictionary should be dictionaries")]
    ValueMapNotMapping {
        transformer: &'static str,
        column: String,
    },

    /// A key or replacement in a decoded value map is not a scalar.
    #[error(
        "{transformer}: mapping keys and values should be scalars, got {found} in column {column}"
    )]
    NonScalarValue {
        transformer: &'static str,
        column: String,
        found: &'static str,
    },

    /// The adjust column was supplied as something other than a string.
    #[error("{transformer}: adjust_column should be a string")]
    AdjustColumnNotString { transformer: &'static str },

    /// More than one entry was supplied without an explicit order.
    #[error(
        "{transformer}: mappings should be an ordered dict for 'replace' mappings using multiple columns"
    )]
    UnorderedMultiColumn { transformer: &'static str },

    /// A column required by the transformer is absent from the table.
    #[error("{transformer}: variable {column} is not in X")]
    ColumnNotInTable {
        transformer: &'static str,
        column: String,
    },

    /// The table engine failed while rebuilding a column.
    #[error("{transformer}: failed to write column {column}: {message}")]
    Table {
        transformer: &'static str,
        column: String,
        message: String,
    },
}

impl MappingError {
    /// Whether this is a type or a value error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ValueMapNotMapping { .. }
            | Self::NonScalarValue { .. }
            | Self::AdjustColumnNotString { .. }
            | Self::UnorderedMultiColumn { .. } => ErrorKind::Type,
            Self::MappingsNotMapping { .. }
            | Self::EmptyMappings { .. }
            | Self::ColumnNotInTable { .. }
            | Self::Table { .. } => ErrorKind::Value,
        }
    }

    /// Name of the transformer that raised the error.
    pub fn transformer(&self) -> &'static str {
        match self {
            Self::MappingsNotMapping { transformer }
            | Self::EmptyMappings { transformer }
            | Self::ValueMapNotMapping { transformer, .. }
            | Self::NonScalarValue { transformer, .. }
            | Self::AdjustColumnNotString { transformer }
            | Self::UnorderedMultiColumn { transformer }
            | Self::ColumnNotInTable { transformer, .. }
            | Self::Table { transformer, .. } => *transformer,
        }
    }
}

pub type Result<T> = std::result::Result<T, MappingError>;
