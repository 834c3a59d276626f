//! Shared fixtures for transformer tests.

#![allow(dead_code)]

use polars::prelude::*;

/// `a = 1..=6`, `b = "a".."f"`.
pub fn create_df_1() -> DataFrame {
    df! {
        "a" => &[1i64, 2, 3, 4, 5, 6],
        "b" => &["a", "b", "c", "d", "e", "f"],
    }
    .unwrap()
}

/// Rows exercising two cross-column entries that can hit the same row.
pub fn create_df_7() -> DataFrame {
    df! {
        "a" => &[4i64, 2, 2, 1, 3],
        "b" => &["x", "z", "y", "x", "x"],
        "c" => &["a", "b", "c", "d", "e"],
    }
    .unwrap()
}

/// String cells of a column, `None` for nulls.
pub fn strings(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    df.column(name)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect()
}

pub fn some(values: &[&str]) -> Vec<Option<String>> {
    values.iter().map(|v| Some((*v).to_string())).collect()
}

pub fn same_column(left: &DataFrame, right: &DataFrame, name: &str) -> bool {
    left.column(name)
        .unwrap()
        .as_materialized_series()
        .equals_missing(right.column(name).unwrap().as_materialized_series())
}
