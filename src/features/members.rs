//! Members list.

use keyset_paging::{Filter, Keyset};

use super::{folded_query, status_filter};
use crate::search::prefix;
use crate::{ListParams, ListQuery, Scope};

pub const COLUMNS: [&str; 6] = [
   "id",
   "full_name",
   "full_name_ci",
   "email",
   "status",
   "organization_id",
];

/// Members sorted by folded name; searching matches a name prefix only.
pub fn list_query(params: &ListParams, scope: &Scope) -> ListQuery {
   ListQuery::new("users", Keyset::by("full_name_ci"))
      .columns(COLUMNS)
      .and(Filter::eq("role", "member"))
      .and_maybe(status_filter(params))
      .and_maybe(scope.filter("organization_id"))
      .and_maybe(folded_query(params).map(|q| prefix("full_name_ci", &q)))
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn coordinator_scope_and_name_prefix() {
      let params = ListParams::from_pairs([("q", " Émile ")]);
      let query = list_query(&params, &Scope::Organizations(vec![2, 5]));

      assert_eq!(
         query.filter,
         Filter::And(vec![
            Filter::eq("role", "member"),
            Filter::is_in("organization_id", [2_i64, 5]),
            Filter::gte("full_name_ci", "emile"),
            Filter::lt("full_name_ci", "emile\u{ffff}"),
         ])
      );
   }

   #[test]
   fn email_like_search_does_not_pivot() {
      let params = ListParams::from_pairs([("q", "a@b"), ("status", "active")]);
      let query = list_query(&params, &Scope::Organization(1));
      assert_eq!(query.keyset.field, "full_name_ci");
   }
}
