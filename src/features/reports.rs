//! Members report: an organization pane beside the groups of the selected
//! organization.
//!
//! Both panes page independently within one request. The organization pane
//! reads `org_`-prefixed parameters (`org_q`, `org_after`, `org_before`,
//! `org_start`) and the groups pane reads the unprefixed ones, so a link that
//! pages one pane carries the other pane's parameters through untouched.

use keyset_paging::{Keyset, PagingConfig};
use keyset_paging_sqlite::SqliteStore;
use serde::Serialize;
use tracing::debug;

use super::{folded_query, groups};
use crate::search::prefix;
use crate::{ListParams, ListQuery, ListView, Result, Scope, fetch_list};

/// Key prefix of the organization pane's parameters.
pub const ORG_PANE_PREFIX: &str = "org_";

/// Parsed request for the members report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembersReport {
   pub org_pane: ListParams,
   pub groups_pane: ListParams,
   /// Organization chosen in the left pane (`org`); `None` means all
   pub selected_org: Option<i64>,
}

/// Both panes of one rendered report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembersReportView {
   pub org_pane: ListView,
   /// Organization whose groups are listed, after scoping
   pub selected_org: Option<i64>,
   /// Absent when no single organization is selected
   pub groups_pane: Option<ListView>,
}

impl MembersReport {
   /// Split decoded query-string pairs between the two panes.
   pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
   where
      K: AsRef<str>,
      V: AsRef<str>,
   {
      let pairs: Vec<(K, V)> = pairs.into_iter().collect();
      let pairs = &pairs;
      let borrowed = move || pairs.iter().map(|(k, v)| (k.as_ref(), v.as_ref()));

      let selected_org = borrowed()
         .filter(|(key, _)| *key == "org")
         .last()
         .and_then(|(_, value)| parse_org(value));

      Self {
         org_pane: ListParams::from_pairs_prefixed(ORG_PANE_PREFIX, borrowed()),
         groups_pane: ListParams::from_pairs(borrowed()),
         selected_org,
      }
   }

   /// Organizations sorted by folded name, searched by name prefix.
   pub fn org_pane_query(&self, scope: &Scope) -> ListQuery {
      ListQuery::new("organizations", Keyset::by("name_ci"))
         .columns(["id", "name", "name_ci"])
         .and_maybe(scope.filter("id"))
         .and_maybe(folded_query(&self.org_pane).map(|q| prefix("name_ci", &q)))
   }

   /// The organization whose groups are listed.
   ///
   /// A single-organization scope pins the selection to that organization. A
   /// selection outside a set scope is dropped.
   pub fn groups_org(&self, scope: &Scope) -> Option<i64> {
      match scope {
         Scope::All => self.selected_org,
         Scope::Organization(id) => Some(*id),
         Scope::Organizations(ids) => self.selected_org.filter(|id| ids.contains(id)),
      }
   }

   pub fn groups_pane_query(&self, scope: &Scope) -> Option<ListQuery> {
      let org = self.groups_org(scope)?;
      Some(groups::list_query(&self.groups_pane, &Scope::Organization(org)))
   }

   /// Load both panes.
   pub async fn load(
      &self,
      store: &SqliteStore,
      scope: &Scope,
      config: &PagingConfig,
   ) -> Result<MembersReportView> {
      let org_query = self.org_pane_query(scope);
      let org_pane = fetch_list(store, &org_query, &self.org_pane, config).await?;

      let selected_org = self.groups_org(scope);
      let groups_pane = match self.groups_pane_query(scope) {
         Some(query) => Some(fetch_list(store, &query, &self.groups_pane, config).await?),
         None => None,
      };

      debug!(
         ?selected_org,
         orgs_shown = org_pane.shown,
         groups_shown = groups_pane.as_ref().map(|pane| pane.shown),
         "Loaded members report"
      );

      Ok(MembersReportView {
         org_pane,
         selected_org,
         groups_pane,
      })
   }
}

/// `org` is `all`, empty, or an organization id.
fn parse_org(value: &str) -> Option<i64> {
   value.trim().parse().ok()
}
