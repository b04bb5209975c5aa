//! System users (admins and analysts) list.

use keyset_paging::{Filter, Keyset};

use super::{person_search, status_filter};
use crate::search::email_pivot_no_org_ok;
use crate::{ListParams, ListQuery};

pub const ROLES: [&str; 2] = ["admin", "analyst"];

/// System users across every organization.
///
/// `role` narrows the list to one of [`ROLES`]; any other value keeps both.
/// The email pivot applies without an organization constraint.
pub fn list_query(params: &ListParams, role: &str) -> ListQuery {
   let role = role.trim().to_lowercase();
   let role_filter = if ROLES.contains(&role.as_str()) {
      Filter::eq("role", role)
   } else {
      Filter::is_in("role", ROLES)
   };

   let pivot = email_pivot_no_org_ok(&params.q, &params.status);
   let sort_field = if pivot { "email" } else { "full_name_ci" };

   ListQuery::new("users", Keyset::by(sort_field))
      .columns(["id", "full_name", "full_name_ci", "email", "role", "status"])
      .and(role_filter)
      .and_maybe(status_filter(params))
      .and_maybe(person_search(params, pivot))
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn both_roles_by_default() {
      let query = list_query(&ListParams::default(), "");
      assert_eq!(
         query.filter,
         Filter::And(vec![Filter::is_in("role", ["admin", "analyst"])])
      );
   }

   #[test]
   fn single_role() {
      let query = list_query(&ListParams::default(), " Analyst ");
      assert_eq!(query.filter, Filter::And(vec![Filter::eq("role", "analyst")]));
   }

   #[test]
   fn pivots_without_org() {
      let params = ListParams::from_pairs([("q", "root@"), ("status", "active")]);
      let query = list_query(&params, "admin");
      assert_eq!(query.keyset.field, "email");
   }
}
