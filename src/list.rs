//! List queries and the view model rendered for one page.

use keyset_paging::{Filter, Keyset, PagingConfig, ViewKind, compute_range};
use keyset_paging_sqlite::{Row, SqliteStore};
use serde::Serialize;
use tracing::debug;

use crate::{ListParams, Result};

/// Which organizations a list is restricted to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Scope {
   /// Every organization
   #[default]
   All,
   /// A single organization
   Organization(i64),
   /// A set of organizations (e.g. those a coordinator is assigned to)
   Organizations(Vec<i64>),
}

impl Scope {
   /// Whether the list is pinned to exactly one organization.
   pub fn has_org(&self) -> bool {
      matches!(self, Scope::Organization(_))
   }

   /// Restriction on `field`, or `None` for [`Scope::All`].
   pub fn filter(&self, field: &str) -> Option<Filter> {
      match self {
         Scope::All => None,
         Scope::Organization(id) => Some(Filter::eq(field, *id)),
         Scope::Organizations(ids) => Some(Filter::is_in(field, ids.iter().copied())),
      }
   }
}

/// Everything needed to load one list page from a table.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
   pub table: String,
   /// Columns to select; empty selects all
   pub columns: Vec<String>,
   /// Active sort field and tiebreaker
   pub keyset: Keyset,
   /// Base filter (role, status, scope, search), shared by count and fetch
   pub filter: Filter,
   pub view: ViewKind,
}

impl ListQuery {
   pub fn new(table: impl Into<String>, keyset: Keyset) -> Self {
      Self {
         table: table.into(),
         columns: Vec::new(),
         keyset,
         filter: Filter::all(),
         view: ViewKind::Full,
      }
   }

   pub fn columns<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
      self.columns = columns.into_iter().map(Into::into).collect();
      self
   }

   /// Intersect the base filter with `filter`.
   pub fn and(mut self, filter: Filter) -> Self {
      self.filter = self.filter.and(filter);
      self
   }

   /// Intersect the base filter with `filter` when present.
   pub fn and_maybe(self, filter: Option<Filter>) -> Self {
      match filter {
         Some(filter) => self.and(filter),
         None => self,
      }
   }

   pub fn view(mut self, view: ViewKind) -> Self {
      self.view = view;
      self
   }
}

/// One rendered page of a list, with its navigation state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView {
   pub rows: Vec<Row>,
   pub shown: usize,
   /// Rows matching the base filter across all pages
   pub total: u64,
   pub has_prev: bool,
   pub has_next: bool,
   pub prev_cursor: String,
   pub next_cursor: String,
   pub range_start: usize,
   pub range_end: usize,
   pub prev_start: usize,
   pub next_start: usize,
}

/// Load the page of `query` selected by `params`.
///
/// The total is counted over the base filter alone, independently of the
/// keyset window.
pub async fn fetch_list(
   store: &SqliteStore,
   query: &ListQuery,
   params: &ListParams,
   config: &PagingConfig,
) -> Result<ListView> {
   let page_size = config.size_for(query.view);

   let total = store.count(&query.table, &query.filter).await?;
   let page = store
      .fetch_page(query.table.as_str(), query.keyset.clone(), page_size)
      .columns(query.columns.iter().cloned())
      .filter(query.filter.clone())
      .after(params.after.as_str())
      .before(params.before.as_str())
      .await?;

   let shown = page.rows.len();
   let range = compute_range(params.start, shown, page_size);

   debug!(
      table = %query.table,
      sort = %query.keyset.field,
      total,
      shown,
      has_prev = page.has_prev,
      has_next = page.has_next,
      "Loaded list page"
   );

   Ok(ListView {
      rows: page.rows,
      shown,
      total,
      has_prev: page.has_prev,
      has_next: page.has_next,
      prev_cursor: page.prev_cursor,
      next_cursor: page.next_cursor,
      range_start: range.start,
      range_end: range.end,
      prev_start: range.prev_start,
      next_start: range.next_start,
   })
}
