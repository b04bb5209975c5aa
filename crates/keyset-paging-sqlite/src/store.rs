//! SQLite-backed store: connection pool, capped fetches and counts.

use std::path::Path;

use indexmap::IndexMap;
use keyset_paging::{FetchPlan, Filter, Keyset};
use serde_json::Value as JsonValue;
use sqlx::sqlite::{SqliteArguments, SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Row as _, Sqlite};
use tracing::debug;

use crate::builders::FetchPageBuilder;
use crate::decode::decode_rows;
use crate::sql::{build_count, build_select};
use crate::{Result, StoreConfig};

/// A decoded row: column name to JSON value, in SELECT order.
pub type Row = IndexMap<String, JsonValue>;

/// SQLite database handle used by list queries.
///
/// Cheap to clone; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
   pool: SqlitePool,
}

impl SqliteStore {
   /// Open (creating if necessary) the database at `path`.
   ///
   /// Missing parent directories are created first.
   pub async fn connect(path: impl AsRef<Path>, config: Option<StoreConfig>) -> Result<Self> {
      let path = path.as_ref();
      let config = config.unwrap_or_default();

      if let Some(parent) = path.parent()
         && !parent.as_os_str().is_empty()
      {
         tokio::fs::create_dir_all(parent).await?;
      }

      let options = SqliteConnectOptions::new()
         .filename(path)
         .create_if_missing(true);
      let pool = SqlitePoolOptions::new()
         .max_connections(config.max_connections)
         .idle_timeout(config.idle_timeout)
         .connect_with(options)
         .await?;

      debug!(path = %path.display(), "Opened SQLite store");
      Ok(Self { pool })
   }

   /// Wrap an existing pool.
   pub fn from_pool(pool: SqlitePool) -> Self {
      Self { pool }
   }

   pub fn pool(&self) -> &SqlitePool {
      &self.pool
   }

   /// Run a write statement (DDL, INSERT, UPDATE, DELETE) with `$N` bind
   /// values and return the number of rows affected.
   pub async fn execute(&self, query: &str, values: Vec<JsonValue>) -> Result<u64> {
      let mut q = sqlx::query(query);
      for value in values {
         q = bind_value(q, value);
      }
      let result = q.execute(&self.pool).await?;
      Ok(result.rows_affected())
   }

   /// Fetch the rows selected by a plan, in the plan's sort order, at most
   /// `plan.limit` of them.
   pub async fn fetch(&self, table: &str, columns: &[String], plan: &FetchPlan) -> Result<Vec<Row>> {
      let (sql, values) = build_select(table, columns, plan)?;
      debug!(%sql, binds = values.len(), "Fetching page rows");

      let mut q = sqlx::query(&sql);
      for value in values {
         q = bind_value(q, value);
      }
      let rows = q.fetch_all(&self.pool).await?;
      decode_rows(rows)
   }

   /// Count every row matching `filter`, ignoring any keyset window.
   pub async fn count(&self, table: &str, filter: &Filter) -> Result<u64> {
      let (sql, values) = build_count(table, filter)?;
      debug!(%sql, binds = values.len(), "Counting rows");

      let mut q = sqlx::query(&sql);
      for value in values {
         q = bind_value(q, value);
      }
      let row = q.fetch_one(&self.pool).await?;
      let count: i64 = row.try_get("count")?;
      Ok(u64::try_from(count).unwrap_or_default())
   }

   /// Start a keyset page request against `table`.
   pub fn fetch_page(
      &self,
      table: impl Into<String>,
      keyset: Keyset,
      page_size: usize,
   ) -> FetchPageBuilder {
      FetchPageBuilder::new(self.clone(), table.into(), keyset, page_size)
   }

   /// Close the pool, waiting for checked-out connections to return.
   pub async fn close(&self) {
      self.pool.close().await;
   }
}

type SqliteQuery<'a> = sqlx::query::Query<'a, Sqlite, SqliteArguments<'a>>;

/// Bind a JSON value with the SQLite type that preserves it best.
pub(crate) fn bind_value(query: SqliteQuery<'_>, value: JsonValue) -> SqliteQuery<'_> {
   match value {
      JsonValue::Null => query.bind(None::<String>),
      JsonValue::String(text) => query.bind(text),
      JsonValue::Bool(flag) => query.bind(flag),
      JsonValue::Number(number) => {
         // Integers stay integers so comparisons against INTEGER columns hold
         if let Some(int_val) = number.as_i64() {
            query.bind(int_val)
         } else if let Some(uint_val) = number.as_u64() {
            match i64::try_from(uint_val) {
               Ok(int_val) => query.bind(int_val),
               Err(_) => query.bind(uint_val as f64),
            }
         } else {
            query.bind(number.as_f64().unwrap_or_default())
         }
      }
      other => query.bind(other),
   }
}

#[cfg(test)]
mod tests {
   use super::*;
   use serde_json::json;
   use tempfile::TempDir;

   async fn store() -> (SqliteStore, TempDir) {
      let temp_dir = TempDir::new().unwrap();
      let store = SqliteStore::connect(temp_dir.path().join("nested/dir/test.db"), None)
         .await
         .unwrap();
      (store, temp_dir)
   }

   #[tokio::test]
   async fn connect_creates_parent_directories() {
      let (store, temp_dir) = store().await;
      assert!(temp_dir.path().join("nested/dir/test.db").exists());
      store.close().await;
   }

   #[tokio::test]
   async fn bind_value_round_trips_scalars() {
      let (store, _temp_dir) = store().await;
      store
         .execute(
            "CREATE TABLE t (id INTEGER PRIMARY KEY, label TEXT, score REAL, note TEXT)",
            vec![],
         )
         .await
         .unwrap();

      let affected = store
         .execute(
            "INSERT INTO t (id, label, score, note) VALUES ($1, $2, $3, $4)",
            vec![json!(7), json!("seven"), json!(7.5), JsonValue::Null],
         )
         .await
         .unwrap();
      assert_eq!(affected, 1);

      let plan = FetchPlan {
         filter: Filter::all(),
         order_by: vec![],
         limit: 10,
      };
      let rows = store.fetch("t", &[], &plan).await.unwrap();

      assert_eq!(rows.len(), 1);
      assert_eq!(rows[0]["id"], json!(7));
      assert_eq!(rows[0]["label"], json!("seven"));
      assert_eq!(rows[0]["score"], json!(7.5));
      assert_eq!(rows[0]["note"], JsonValue::Null);
      // Column order follows the table definition
      let keys: Vec<&str> = rows[0].keys().map(String::as_str).collect();
      assert_eq!(keys, vec!["id", "label", "score", "note"]);
   }

   #[tokio::test]
   async fn count_ignores_limit_and_honours_filter() {
      let (store, _temp_dir) = store().await;
      store
         .execute("CREATE TABLE t (id INTEGER PRIMARY KEY, kind TEXT)", vec![])
         .await
         .unwrap();
      for i in 1..=5 {
         let kind = if i % 2 == 0 { "even" } else { "odd" };
         store
            .execute(
               "INSERT INTO t (id, kind) VALUES ($1, $2)",
               vec![json!(i), json!(kind)],
            )
            .await
            .unwrap();
      }

      assert_eq!(store.count("t", &Filter::all()).await.unwrap(), 5);
      assert_eq!(store.count("t", &Filter::eq("kind", "odd")).await.unwrap(), 3);
      assert_eq!(
         store
            .count("t", &Filter::is_in("id", Vec::<i64>::new()))
            .await
            .unwrap(),
         0
      );
   }

   #[tokio::test]
   async fn blob_columns_are_rejected() {
      let (store, _temp_dir) = store().await;
      store
         .execute("CREATE TABLE t (id INTEGER PRIMARY KEY, data BLOB)", vec![])
         .await
         .unwrap();
      store
         .execute("INSERT INTO t (id, data) VALUES (1, x'00ff')", vec![])
         .await
         .unwrap();

      let plan = FetchPlan {
         filter: Filter::all(),
         order_by: vec![],
         limit: 10,
      };
      let result = store.fetch("t", &[], &plan).await;
      assert!(matches!(result, Err(crate::Error::UnsupportedDatatype(_))));
   }
}
