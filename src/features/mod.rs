//! Per-feature list queries.
//!
//! Each function turns request parameters into a [`ListQuery`](crate::ListQuery)
//! whose base filter is shared by the count and the keyset fetch.

pub mod groups;
pub mod leaders;
pub mod members;
pub mod organizations;
pub mod reports;
pub mod system_users;

use keyset_paging::Filter;

use crate::ListParams;
use crate::search::prefix;
use crate::text::fold;

/// Folded search term, or `None` when the request has no usable query.
pub(crate) fn folded_query(params: &ListParams) -> Option<String> {
   let folded = fold(&params.q);
   (!folded.is_empty()).then_some(folded)
}

/// Search over a person's folded name or lowercased email.
///
/// With `email_only` the name branch is dropped, which is what the email
/// pivot needs.
pub(crate) fn person_search(params: &ListParams, email_only: bool) -> Option<Filter> {
   let name = folded_query(params)?;
   let email = params.q.trim().to_lowercase();

   let email_prefix = prefix("email", &email);
   if email_only {
      return Some(Filter::any_of([email_prefix]));
   }
   Some(Filter::any_of([prefix("full_name_ci", &name), email_prefix]))
}

pub(crate) fn status_filter(params: &ListParams) -> Option<Filter> {
   params
      .status_filter()
      .map(|status| Filter::eq("status", status))
}
