//! Shared column conversion helpers for query modules.
//!
//! Dates and timestamps are stored as ISO text; these helpers parse them
//! back, mapping failures onto rusqlite's conversion error so they surface
//! through the normal query-error path.

use jiff::civil::Date;
use jiff::Timestamp;
use rusqlite::types::Type;
use rusqlite::Row;

/// Read a `civil::Date` from a TEXT column.
pub(crate) fn date_column(row: &Row, idx: usize) -> rusqlite::Result<Date> {
    row.get::<_, String>(idx)?
        .parse::<Date>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Read a `Timestamp` from a TEXT column.
pub(crate) fn timestamp_column(row: &Row, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Read an enum stored as TEXT via its `FromStr` implementation.
pub(crate) fn enum_column<T>(row: &Row, idx: usize) -> rusqlite::Result<T>
where
    T: std::str::FromStr<Err = String>,
{
    let raw: String = row.get(idx)?;
    raw.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
        )
    })
}
