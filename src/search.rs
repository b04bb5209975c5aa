//! Search helpers shared by list queries.

use keyset_paging::Filter;

/// Upper bound appended to a prefix so that `[term, term + U+FFFF)` covers
/// every string starting with `term`.
pub const PREFIX_SENTINEL: char = '\u{ffff}';

/// Whether an org-scoped list may pivot its sort field to `email`.
///
/// Holds when the query looks like an email address, the status filter is
/// fixed to `active` or `disabled`, and the list is scoped to one
/// organization.
pub fn email_pivot_ok(q: &str, status: &str, has_org: bool) -> bool {
   email_pivot_no_org_ok(q, status) && has_org
}

/// Like [`email_pivot_ok`] for lists with no organization constraint.
pub fn email_pivot_no_org_ok(q: &str, status: &str) -> bool {
   q.contains('@') && is_fixed_status(status)
}

fn is_fixed_status(status: &str) -> bool {
   let status = status.trim().to_lowercase();
   status == "active" || status == "disabled"
}

/// `field >= term AND field < term + U+FFFF`.
///
/// `term` must already be in the same form as the stored column (folded for
/// `*_ci` columns, lowercased for `email`).
pub fn prefix(field: &str, term: &str) -> Filter {
   let mut upper = String::with_capacity(term.len() + PREFIX_SENTINEL.len_utf8());
   upper.push_str(term);
   upper.push(PREFIX_SENTINEL);

   Filter::all_of([Filter::gte(field, term), Filter::lt(field, upper)])
}
