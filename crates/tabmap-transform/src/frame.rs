//! DataFrame cell access for mapping transformers.
//!
//! Cells are read into [`Scalar`]s so value maps can match them regardless
//! of the column dtype, and rewritten columns are rebuilt with a dtype that
//! can hold every resulting value.

use polars::prelude::*;
use tabmap_model::{MappingError, Result, Scalar};

/// Checks that every named column exists, reporting the first one missing.
pub fn check_columns<'a>(
    transformer: &'static str,
    df: &DataFrame,
    columns: impl IntoIterator<Item = &'a str>,
) -> Result<()> {
    for column in columns {
        if df.get_column_index(column).is_none() {
            return Err(MappingError::ColumnNotInTable {
                transformer,
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

/// Converts a Polars `AnyValue` to a [`Scalar`].
///
/// Unsigned values beyond `i64::MAX` become floats; dtypes without a scalar
/// counterpart (dates, lists, ...) are read as their display text.
pub fn any_to_scalar(value: AnyValue<'_>) -> Scalar {
    match value {
        AnyValue::Null => Scalar::Null,
        AnyValue::Boolean(b) => Scalar::Bool(b),
        AnyValue::Int8(v) => Scalar::Int(i64::from(v)),
        AnyValue::Int16(v) => Scalar::Int(i64::from(v)),
        AnyValue::Int32(v) => Scalar::Int(i64::from(v)),
        AnyValue::Int64(v) => Scalar::Int(v),
        AnyValue::UInt8(v) => Scalar::Int(i64::from(v)),
        AnyValue::UInt16(v) => Scalar::Int(i64::from(v)),
        AnyValue::UInt32(v) => Scalar::Int(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).map_or(Scalar::Float(v as f64), Scalar::Int),
        AnyValue::Float32(v) => Scalar::Float(f64::from(v)),
        AnyValue::Float64(v) => Scalar::Float(v),
        AnyValue::String(s) => Scalar::Str(s.to_string()),
        AnyValue::StringOwned(s) => Scalar::Str(s.to_string()),
        other => Scalar::Str(other.to_string()),
    }
}

/// Reads every cell of a column as a [`Scalar`].
pub fn column_scalars(column: &Column) -> PolarsResult<Vec<Scalar>> {
    let mut values = Vec::with_capacity(column.len());
    for idx in 0..column.len() {
        values.push(any_to_scalar(column.get(idx)?));
    }
    Ok(values)
}

/// Output dtype family for a rebuilt column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputKind {
    AllNull,
    Bool,
    Int,
    Float,
    Str,
}

fn output_kind(values: &[Scalar]) -> OutputKind {
    let (mut bools, mut ints, mut floats, mut strs) = (false, false, false, false);
    for value in values {
        match value {
            Scalar::Null => {}
            Scalar::Bool(_) => bools = true,
            Scalar::Int(_) => ints = true,
            Scalar::Float(_) => floats = true,
            Scalar::Str(_) => strs = true,
        }
    }
    let numeric = ints || floats;
    if strs || (bools && numeric) {
        OutputKind::Str
    } else if bools {
        OutputKind::Bool
    } else if floats {
        OutputKind::Float
    } else if ints {
        OutputKind::Int
    } else {
        OutputKind::AllNull
    }
}

/// Builds a column holding `values`.
///
/// Homogeneous values keep a typed column (cast back to `original` when it
/// belongs to the same numeric family). Mixed strings and non-strings fall
/// back to a string column with non-string cells rendered as text. Nulls
/// stay null.
pub fn scalars_to_column(
    name: &str,
    values: &[Scalar],
    original: &DataType,
) -> PolarsResult<Column> {
    let column = match output_kind(values) {
        OutputKind::AllNull => return Ok(Column::full_null(name.into(), values.len(), original)),
        OutputKind::Bool => {
            let cells: Vec<Option<bool>> = values
                .iter()
                .map(|value| match value {
                    Scalar::Bool(b) => Some(*b),
                    _ => None,
                })
                .collect();
            Column::new(name.into(), cells)
        }
        OutputKind::Int => {
            let cells: Vec<Option<i64>> = values
                .iter()
                .map(|value| match value {
                    Scalar::Int(i) => Some(*i),
                    _ => None,
                })
                .collect();
            let column = Column::new(name.into(), cells);
            if original.is_integer() {
                return Ok(column.strict_cast(original).unwrap_or(column));
            }
            column
        }
        OutputKind::Float => {
            let cells: Vec<Option<f64>> = values
                .iter()
                .map(|value| match value {
                    Scalar::Int(i) => Some(*i as f64),
                    Scalar::Float(f) => Some(*f),
                    _ => None,
                })
                .collect();
            let column = Column::new(name.into(), cells);
            if original.is_float() {
                return column.cast(original);
            }
            column
        }
        OutputKind::Str => {
            let cells: Vec<Option<String>> = values
                .iter()
                .map(|value| (!value.is_null()).then(|| value.render()))
                .collect();
            Column::new(name.into(), cells)
        }
    };
    Ok(column)
}

/// Wraps a Polars failure while rewriting `column`.
pub(crate) fn table_error(
    transformer: &'static str,
    column: &str,
    error: &PolarsError,
) -> MappingError {
    MappingError::Table {
        transformer,
        column: column.to_string(),
        message: error.to_string(),
    }
}
