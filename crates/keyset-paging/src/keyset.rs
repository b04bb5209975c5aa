//! Keyset configuration, window predicates and fetch plans.
//!
//! Every row participates in a total order over `(sort field, id field)`.
//! The id breaks ties on duplicate sort keys, so a page boundary that falls
//! inside a run of equal keys neither skips nor repeats rows.
//!
//! For backward pagination the sort order is reversed so the store scans
//! toward the start of the collection; [`trim_page`](crate::trim_page) later
//! restores ascending order.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::cursor::Cursor;
use crate::filter::{CmpOp, Filter};
use crate::{Error, Result};

/// Traversal direction of a page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
   /// First page, or the page after an `after` cursor
   Forward,
   /// The page before a `before` cursor
   Backward,
}

/// Sort order applied by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
   /// Ascending order (smallest first)
   Asc,
   /// Descending order (largest first)
   Desc,
}

impl SortOrder {
   /// `1` for ascending, `-1` for descending.
   pub fn sign(self) -> i32 {
      match self {
         SortOrder::Asc => 1,
         SortOrder::Desc => -1,
      }
   }

   /// Return the opposite sort order.
   pub fn reversed(self) -> Self {
      match self {
         SortOrder::Asc => SortOrder::Desc,
         SortOrder::Desc => SortOrder::Asc,
      }
   }

   pub fn as_sql(self) -> &'static str {
      match self {
         SortOrder::Asc => "ASC",
         SortOrder::Desc => "DESC",
      }
   }
}

/// Direction, sort order and decoded cursor for one page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeysetConfig<I> {
   pub direction: Direction,
   pub sort_order: SortOrder,
   /// Row to resume after (forward) or before (backward)
   pub cursor: Option<Cursor<I>>,
}

impl<I> KeysetConfig<I> {
   /// Configuration for the first page of a list.
   pub fn first_page() -> Self {
      Self {
         direction: Direction::Forward,
         sort_order: SortOrder::Asc,
         cursor: None,
      }
   }

   pub fn is_backward(&self) -> bool {
      self.direction == Direction::Backward
   }
}

/// Decide the traversal for a request from its `before` and `after` tokens.
///
/// A non-empty `before` takes precedence and selects backward traversal in
/// descending order. Otherwise traversal is forward in ascending order, from
/// the `after` cursor if one is supplied.
///
/// A token that does not decode leaves the cursor empty but keeps the
/// direction it asked for. A mangled `after` link lands on the first page; a
/// mangled `before` link lands on the last page, scanned backward.
pub fn configure_keyset<I: DeserializeOwned>(before: &str, after: &str) -> KeysetConfig<I> {
   if !before.trim().is_empty() {
      let cursor = decode_token("before", before);
      debug!(has_cursor = cursor.is_some(), "Paging backward");
      return KeysetConfig {
         direction: Direction::Backward,
         sort_order: SortOrder::Desc,
         cursor,
      };
   }

   let cursor = decode_token("after", after);
   debug!(has_cursor = cursor.is_some(), "Paging forward");
   KeysetConfig {
      direction: Direction::Forward,
      sort_order: SortOrder::Asc,
      cursor,
   }
}

fn decode_token<I: DeserializeOwned>(param: &str, token: &str) -> Option<Cursor<I>> {
   if token.trim().is_empty() {
      return None;
   }

   let cursor = Cursor::decode(token);
   if cursor.is_none() {
      debug!(param, "Ignoring undecodable cursor token");
   }
   cursor
}

/// The sort field of a list and its unique tiebreaker.
///
/// The sort field may be pivoted per request (e.g. to `email` when a search
/// term looks like an email address); whatever field is chosen here drives
/// the sort specification, the window predicate and the cursor keys alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyset {
   /// Field holding the row's sort key
   pub field: String,
   /// Field holding the row's unique id
   pub id_field: String,
}

impl Keyset {
   /// Tiebreaker field used unless overridden.
   pub const DEFAULT_ID_FIELD: &'static str = "id";

   /// Sort by `field`, breaking ties on [`Keyset::DEFAULT_ID_FIELD`].
   pub fn by(field: impl Into<String>) -> Self {
      Self {
         field: field.into(),
         id_field: Self::DEFAULT_ID_FIELD.to_string(),
      }
   }

   pub fn with_id_field(mut self, id_field: impl Into<String>) -> Self {
      self.id_field = id_field.into();
      self
   }

   /// Sort specification the store must apply: sort field, then id.
   pub fn order_by<I>(&self, config: &KeysetConfig<I>) -> Vec<(String, SortOrder)> {
      vec![
         (self.field.clone(), config.sort_order),
         (self.id_field.clone(), config.sort_order),
      ]
   }

   /// Build the window predicate selecting every row strictly after (forward)
   /// or strictly before (backward) the cursor row.
   ///
   /// ```text
   /// forward:  field > key OR (field = key AND id > cursor_id)
   /// backward: field < key OR (field = key AND id < cursor_id)
   /// ```
   ///
   /// Returns `None` when the configuration carries no cursor.
   pub fn window<I>(&self, config: &KeysetConfig<I>) -> Option<Filter>
   where
      I: Clone + Into<JsonValue>,
   {
      let cursor = config.cursor.as_ref()?;
      let op = match config.sort_order {
         SortOrder::Asc => CmpOp::Gt,
         SortOrder::Desc => CmpOp::Lt,
      };

      Some(Filter::any_of([
         Filter::cmp(self.field.as_str(), op, cursor.key.as_str()),
         Filter::all_of([
            Filter::eq(self.field.as_str(), cursor.key.as_str()),
            Filter::cmp(self.id_field.as_str(), op, cursor.id.clone()),
         ]),
      ]))
   }

   /// Assemble the fetch a store must run for one page.
   ///
   /// The caller's `filter` is intersected with the window (each kept as its
   /// own conjunct), the sort specification follows the configuration, and
   /// the limit is `page_size + 1` so the lookahead row reveals whether
   /// another page exists.
   pub fn plan<I>(
      &self,
      config: &KeysetConfig<I>,
      filter: Filter,
      page_size: usize,
   ) -> Result<FetchPlan>
   where
      I: Clone + Into<JsonValue>,
   {
      if self.field.is_empty() || self.id_field.is_empty() {
         return Err(Error::EmptyFieldName);
      }
      if page_size == 0 {
         return Err(Error::InvalidPageSize);
      }
      let limit = page_size
         .checked_add(1)
         .ok_or(Error::PageSizeOverflow(page_size))?;

      let filter = match self.window(config) {
         Some(window) => filter.and(window),
         None => filter,
      };

      Ok(FetchPlan {
         filter,
         order_by: self.order_by(config),
         limit,
      })
   }
}

/// What a store must run to produce one page: the combined filter, the sort
/// specification and the lookahead-inclusive row cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchPlan {
   pub filter: Filter,
   pub order_by: Vec<(String, SortOrder)>,
   pub limit: usize,
}
