//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. Dates are `YYYY-MM-DD` text, timestamps RFC 3339 text (with the
//! `SQLite` `datetime('now')` format also accepted), decimals canonical text,
//! and booleans `0`/`1` integers.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use lab_core::validation::{FieldError, ValidationErrors};
use rust_decimal::Decimal;

use crate::error::DatabaseError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string is not a date.
pub fn parse_optional_date(s: Option<&str>) -> Result<Option<NaiveDate>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_date(s)?)),
        _ => Ok(None),
    }
}

#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// # Errors
///
/// Returns `DatabaseError::Query` if the text is not a decimal number.
pub fn parse_decimal(s: &str) -> Result<Decimal, DatabaseError> {
    Decimal::from_str(s)
        .map_err(|e| DatabaseError::Query(format!("Failed to parse decimal '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum (choice labels).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read an INTEGER 0/1 column as `bool`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_bool(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    Ok(row.get::<i64>(idx)? != 0)
}

/// Read a decimal TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read or parse fails.
pub fn get_decimal(row: &libsql::Row, idx: i32) -> Result<Decimal, DatabaseError> {
    parse_decimal(&row.get::<String>(idx)?)
}

/// Read a date TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read or parse fails.
pub fn get_date(row: &libsql::Row, idx: i32) -> Result<NaiveDate, DatabaseError> {
    parse_date(&row.get::<String>(idx)?)
}

/// Drain a result set through a row parser.
///
/// # Errors
///
/// Returns the first read or parse error.
pub async fn collect_rows<T>(
    mut rows: libsql::Rows,
    parse: fn(&libsql::Row) -> Result<T, DatabaseError>,
) -> Result<Vec<T>, DatabaseError> {
    let mut out = Vec::new();
    while let Some(row) = rows.next().await? {
        out.push(parse(&row)?);
    }
    Ok(out)
}

/// Commit `tx` when `result` is `Ok`, roll it back otherwise.
///
/// # Errors
///
/// Returns the original error, or the commit error.
pub async fn finish_transaction<T>(
    tx: libsql::Transaction,
    result: Result<T, DatabaseError>,
) -> Result<T, DatabaseError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(error) => {
            if let Err(rollback) = tx.rollback().await {
                tracing::warn!(%rollback, "transaction rollback failed");
            }
            Err(error)
        }
    }
}

/// Turn a UNIQUE constraint failure into a field-level validation error.
///
/// `SQLite` reports `UNIQUE constraint failed: students.email` (or several
/// comma-separated `table.column` pairs for composite keys). Any other error
/// passes through unchanged.
#[must_use]
pub fn map_constraint_error(error: libsql::Error) -> DatabaseError {
    let message = error.to_string();
    let Some((_, tail)) = message.split_once("UNIQUE constraint failed: ") else {
        return DatabaseError::LibSql(error);
    };
    let columns: Vec<&str> = tail
        .split(',')
        .filter_map(|pair| pair.trim().rsplit('.').next())
        .map(|column| column.trim_end_matches(|c: char| !c.is_alphanumeric() && c != '_'))
        .filter(|column| !column.is_empty())
        .collect();
    let Some(first) = columns.first() else {
        return DatabaseError::LibSql(error);
    };
    let field_error = FieldError::new(
        *first,
        format!("A record with this {} already exists.", columns.join(" and ")),
    );
    DatabaseError::Validation(ValidationErrors::from(field_error))
}
