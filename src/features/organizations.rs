//! Organizations list and organization picker.

use keyset_paging::{Filter, Keyset, ViewKind};

use super::folded_query;
use crate::search::prefix;
use crate::{ListParams, ListQuery, Scope};

pub const COLUMNS: [&str; 6] = ["id", "name", "name_ci", "city", "state", "status"];

/// Organizations sorted by folded name.
///
/// Searching matches a prefix of the name, city or state. `scope` limits the
/// list by organization id; an empty [`Scope::Organizations`] matches nothing.
pub fn list_query(params: &ListParams, scope: &Scope) -> ListQuery {
   let search = folded_query(params).map(|q| {
      Filter::any_of([
         prefix("name_ci", &q),
         prefix("city_ci", &q),
         prefix("state_ci", &q),
      ])
   });

   ListQuery::new("organizations", Keyset::by("name_ci"))
      .columns(COLUMNS)
      .and_maybe(scope.filter("id"))
      .and_maybe(search)
}

/// Active organizations for the picker modal, searched by name prefix.
pub fn picker_query(params: &ListParams) -> ListQuery {
   ListQuery::new("organizations", Keyset::by("name_ci"))
      .columns(["id", "name", "name_ci"])
      .view(ViewKind::Modal)
      .and(Filter::eq("status", "active"))
      .and_maybe(folded_query(params).map(|q| prefix("name_ci", &q)))
}
