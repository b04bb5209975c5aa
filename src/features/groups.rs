//! Groups list and group picker.

use keyset_paging::{Keyset, ViewKind};

use super::folded_query;
use crate::search::prefix;
use crate::{ListParams, ListQuery, Scope};

pub const COLUMNS: [&str; 4] = ["id", "name", "name_ci", "organization_id"];

pub fn list_query(params: &ListParams, scope: &Scope) -> ListQuery {
   ListQuery::new("groups", Keyset::by("name_ci"))
      .columns(COLUMNS)
      .and_maybe(scope.filter("organization_id"))
      .and_maybe(folded_query(params).map(|q| prefix("name_ci", &q)))
}

/// Same rows as [`list_query`], sized for the picker modal.
pub fn picker_query(params: &ListParams, scope: &Scope) -> ListQuery {
   list_query(params, scope).view(ViewKind::Modal)
}
