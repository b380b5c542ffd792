//! Row-to-value parsing helpers.
//!
//! Corpus tables are loaded by external tools, so column affinities vary:
//! a `study_id` may come back as INTEGER, an axis as INTEGER or REAL, a title
//! as NULL. These helpers read `libsql::Value`s leniently instead of failing
//! on the first unexpected storage class.

use libsql::Value;

use crate::error::DatabaseError;

/// Read a column as text. Integers and reals are rendered; NULL becomes `""`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` for BLOB columns.
pub fn get_text(row: &libsql::Row, idx: i32) -> Result<String, DatabaseError> {
    match row.get_value(idx)? {
        Value::Text(s) => Ok(s),
        Value::Integer(i) => Ok(i.to_string()),
        Value::Real(f) => Ok(f.to_string()),
        Value::Null => Ok(String::new()),
        Value::Blob(_) => Err(DatabaseError::Query(format!(
            "column {idx}: expected text, found blob"
        ))),
    }
}

/// Read a nullable column as text. Returns `None` for SQL NULL.
///
/// # Errors
///
/// Returns `DatabaseError::Query` for BLOB columns.
pub fn get_opt_text(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get_value(idx)? {
        Value::Null => Ok(None),
        _ => get_text(row, idx).map(Some),
    }
}

/// Read a numeric column as `f64`, accepting INTEGER or REAL storage.
///
/// # Errors
///
/// Returns `DatabaseError::Query` for non-numeric values.
#[allow(clippy::cast_precision_loss)]
pub fn get_number(row: &libsql::Row, idx: i32) -> Result<f64, DatabaseError> {
    match row.get_value(idx)? {
        Value::Integer(i) => Ok(i as f64),
        Value::Real(f) => Ok(f),
        other => Err(DatabaseError::Query(format!(
            "column {idx}: expected number, found {other:?}"
        ))),
    }
}

/// Convert a libSQL value into JSON.
///
/// Non-finite reals become `null`; blobs become an array of byte values.
#[must_use]
pub fn value_to_json(value: Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Integer(i) => i.into(),
        Value::Real(f) => serde_json::Number::from_f64(f)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        Value::Text(s) => s.into(),
        Value::Blob(bytes) => bytes.into_iter().map(serde_json::Value::from).collect(),
    }
}

/// Read every column of a row into a JSON object keyed by column name.
///
/// `columns` comes from `Rows::column_name` captured before iteration.
///
/// # Errors
///
/// Returns `DatabaseError` if a column read fails.
pub fn row_to_json(
    row: &libsql::Row,
    columns: &[String],
) -> Result<serde_json::Map<String, serde_json::Value>, DatabaseError> {
    let mut map = serde_json::Map::new();
    for (idx, name) in (0..).zip(columns) {
        map.insert(name.clone(), value_to_json(row.get_value(idx)?));
    }
    Ok(map)
}

/// Column names of a result set, in select order.
#[must_use]
pub fn column_names(rows: &libsql::Rows) -> Vec<String> {
    (0..rows.column_count())
        .map(|idx| rows.column_name(idx).unwrap_or_default().to_string())
        .collect()
}
