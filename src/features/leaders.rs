//! Leaders list.

use keyset_paging::{Filter, Keyset};

use super::{person_search, status_filter};
use crate::search::email_pivot_ok;
use crate::{ListParams, ListQuery, Scope};

pub const COLUMNS: [&str; 6] = [
   "id",
   "full_name",
   "full_name_ci",
   "email",
   "status",
   "organization_id",
];

/// Leaders, sorted by folded name.
///
/// Searching matches a name or email prefix. When the search looks like an
/// email and the list is pinned to one status and one organization, the sort
/// field pivots to `email` and only the email prefix is searched.
pub fn list_query(params: &ListParams, scope: &Scope) -> ListQuery {
   let pivot = email_pivot_ok(&params.q, &params.status, scope.has_org());
   let sort_field = if pivot { "email" } else { "full_name_ci" };

   ListQuery::new("users", Keyset::by(sort_field))
      .columns(COLUMNS)
      .and(Filter::eq("role", "leader"))
      .and_maybe(status_filter(params))
      .and_maybe(scope.filter("organization_id"))
      .and_maybe(person_search(params, pivot))
}
