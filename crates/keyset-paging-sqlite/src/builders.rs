//! Keyset page request builder

use std::future::{Future, IntoFuture};
use std::pin::Pin;

use keyset_paging::{Cursor, Filter, Keyset, build_cursors, configure_keyset, trim_page};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::store::{Row, SqliteStore};
use crate::{Error, Result};

/// One page of a keyset-paginated list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeysetPage {
   /// Rows in ascending `(sort field, id)` order, lookahead row removed
   pub rows: Vec<Row>,
   /// Whether a page exists before the first row
   pub has_prev: bool,
   /// Whether a page exists after the last row
   pub has_next: bool,
   /// Pass as `before` to load the preceding page; empty when `rows` is empty
   pub prev_cursor: String,
   /// Pass as `after` to load the following page; empty when `rows` is empty
   pub next_cursor: String,
}

/// Builder for paginated SELECT queries using keyset (cursor-based) pagination
pub struct FetchPageBuilder {
   store: SqliteStore,
   table: String,
   columns: Vec<String>,
   keyset: Keyset,
   filter: Filter,
   page_size: usize,
   before: String,
   after: String,
}

impl FetchPageBuilder {
   pub(crate) fn new(store: SqliteStore, table: String, keyset: Keyset, page_size: usize) -> Self {
      Self {
         store,
         table,
         columns: Vec::new(),
         keyset,
         filter: Filter::all(),
         page_size,
         before: String::new(),
         after: String::new(),
      }
   }

   /// Columns to select. Must include the keyset's sort and id fields.
   /// Defaults to every column.
   pub fn columns<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
      self.columns = columns.into_iter().map(Into::into).collect();
      self
   }

   /// Base filter (status, role, scope, search) for the list.
   pub fn filter(mut self, filter: Filter) -> Self {
      self.filter = filter;
      self
   }

   /// Fetch the page following the row encoded in `token`.
   pub fn after(mut self, token: impl Into<String>) -> Self {
      self.after = token.into();
      self
   }

   /// Fetch the page preceding the row encoded in `token`.
   ///
   /// Takes precedence over [`after`](Self::after) when both decode.
   pub fn before(mut self, token: impl Into<String>) -> Self {
      self.before = token.into();
      self
   }

   /// Execute the paginated query and return a page of results
   pub async fn execute(self) -> Result<KeysetPage> {
      let config = configure_keyset::<JsonValue>(&self.before, &self.after);
      let plan = self.keyset.plan(&config, self.filter, self.page_size)?;

      let fetched = self.store.fetch(&self.table, &self.columns, &plan).await?;
      debug!(
         table = %self.table,
         fetched = fetched.len(),
         backward = config.is_backward(),
         "Fetched keyset batch"
      );

      let page = trim_page(fetched, &config, self.page_size);
      let cursors = build_cursors(&page.rows, |row| cursor_for(row, &self.keyset))?;

      Ok(KeysetPage {
         rows: page.rows,
         has_prev: page.has_prev,
         has_next: page.has_next,
         prev_cursor: cursors.prev,
         next_cursor: cursors.next,
      })
   }
}

impl IntoFuture for FetchPageBuilder {
   type Output = Result<KeysetPage>;
   type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

   fn into_future(self) -> Self::IntoFuture {
      Box::pin(self.execute())
   }
}

/// Read a row's position in the keyset order.
pub(crate) fn cursor_for(row: &Row, keyset: &Keyset) -> Result<Cursor<JsonValue>> {
   let key = row
      .get(&keyset.field)
      .ok_or_else(|| Error::CursorColumnNotFound {
         column: keyset.field.clone(),
      })?
      .as_str()
      .ok_or_else(|| Error::InvalidSortKey {
         column: keyset.field.clone(),
      })?;
   let id = row
      .get(&keyset.id_field)
      .ok_or_else(|| Error::CursorColumnNotFound {
         column: keyset.id_field.clone(),
      })?;

   Ok(Cursor::new(key, id.clone()))
}

#[cfg(test)]
mod tests {
   use super::*;
   use serde_json::json;

   fn row(pairs: &[(&str, JsonValue)]) -> Row {
      pairs
         .iter()
         .map(|(k, v)| (k.to_string(), v.clone()))
         .collect()
   }

   #[test]
   fn cursor_for_reads_sort_key_and_id() {
      let row = row(&[("id", json!(4)), ("name_ci", json!("acme"))]);
      let cursor = cursor_for(&row, &Keyset::by("name_ci")).unwrap();
      assert_eq!(cursor, Cursor::new("acme", json!(4)));
   }

   #[test]
   fn cursor_for_missing_column() {
      let row = row(&[("id", json!(4))]);
      let result = cursor_for(&row, &Keyset::by("name_ci"));
      assert!(matches!(
         result,
         Err(Error::CursorColumnNotFound { column }) if column == "name_ci"
      ));
   }

   #[test]
   fn cursor_for_non_text_key() {
      let row = row(&[("id", json!(4)), ("score", json!(88))]);
      let result = cursor_for(&row, &Keyset::by("score"));
      assert!(matches!(result, Err(Error::InvalidSortKey { .. })));
   }

   #[test]
   fn cursor_for_custom_id_field() {
      let row = row(&[("user_id", json!("u-9")), ("email", json!("a@x.org"))]);
      let keyset = Keyset::by("email").with_id_field("user_id");
      let cursor = cursor_for(&row, &keyset).unwrap();
      assert_eq!(cursor.id, json!("u-9"));
   }
}
