//! SQLite value to JSON conversion.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use sqlx::sqlite::{SqliteRow, SqliteValueRef};
use sqlx::{Decode, Sqlite, TypeInfo, ValueRef};

use crate::Error;
use crate::store::Row;

/// Convert one SQLite value to JSON.
///
/// Date and time columns are stored as text and come back as strings. BLOBs
/// have no JSON form and are rejected.
pub(crate) fn to_json(value: SqliteValueRef<'_>) -> Result<JsonValue, Error> {
   if value.is_null() {
      return Ok(JsonValue::Null);
   }

   let type_name = value.type_info().name().to_string();
   let json = match type_name.as_str() {
      "TEXT" | "DATE" | "TIME" | "DATETIME" => JsonValue::String(decode::<String>(value)?),
      "INTEGER" => JsonValue::from(decode::<i64>(value)?),
      "REAL" | "NUMERIC" => serde_json::Number::from_f64(decode::<f64>(value)?)
         .map(JsonValue::Number)
         .unwrap_or(JsonValue::Null),
      "BOOLEAN" => JsonValue::Bool(decode::<bool>(value)?),
      "NULL" => JsonValue::Null,
      _ => return Err(Error::UnsupportedDatatype(type_name)),
   };

   Ok(json)
}

fn decode<'r, T: Decode<'r, Sqlite>>(value: SqliteValueRef<'r>) -> Result<T, Error> {
   Ok(T::decode(value).map_err(sqlx::Error::Decode)?)
}

/// Decode fetched rows into column-ordered JSON maps.
pub(crate) fn decode_rows(rows: Vec<SqliteRow>) -> Result<Vec<Row>, Error> {
   use sqlx::{Column, Row as _};

   let mut values = Vec::with_capacity(rows.len());
   for row in rows {
      let mut value = IndexMap::default();
      for (i, column) in row.columns().iter().enumerate() {
         let v = row.try_get_raw(i)?;
         let v = to_json(v)?;
         value.insert(column.name().to_string(), v);
      }
      values.push(value);
   }
   Ok(values)
}
