//! Request parameters shared by every list and picker view.

use serde::{Deserialize, Serialize};

/// Paging and search parameters for one list request.
///
/// Values are trimmed; `status` is also lowercased. `search` is accepted as
/// an alias of `q`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
   /// Raw search text
   pub q: String,
   /// Status filter (`active`, `disabled`, or empty for any)
   pub status: String,
   /// Cursor token of the last row on the previous page
   pub after: String,
   /// Cursor token of the first row on the next page
   pub before: String,
   /// 1-based position of the first row, for the "Showing X–Y" label
   pub start: usize,
}

impl Default for ListParams {
   fn default() -> Self {
      Self {
         q: String::new(),
         status: String::new(),
         after: String::new(),
         before: String::new(),
         start: 1,
      }
   }
}

impl ListParams {
   /// Build parameters from decoded query-string pairs.
   ///
   /// Unknown keys are ignored. When a key repeats, the last value wins.
   pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
   where
      K: AsRef<str>,
      V: AsRef<str>,
   {
      Self::from_pairs_prefixed("", pairs)
   }

   /// Build parameters from the pairs whose keys start with `prefix`.
   ///
   /// A page showing two independently paged lists gives one of them a
   /// prefix, so `org_after` pages that list while `after` pages the other.
   pub fn from_pairs_prefixed<K, V>(prefix: &str, pairs: impl IntoIterator<Item = (K, V)>) -> Self
   where
      K: AsRef<str>,
      V: AsRef<str>,
   {
      let mut params = Self::default();
      for (key, value) in pairs {
         let Some(key) = key.as_ref().strip_prefix(prefix) else {
            continue;
         };
         let value = value.as_ref().trim();
         match key {
            "q" | "search" => params.q = value.to_string(),
            "status" => params.status = value.to_lowercase(),
            "after" => params.after = value.to_string(),
            "before" => params.before = value.to_string(),
            "start" => params.start = parse_start(value),
            _ => {}
         }
      }
      params
   }

   /// `status` when it names a concrete status filter.
   pub fn status_filter(&self) -> Option<&str> {
      match self.status.as_str() {
         "active" | "disabled" => Some(self.status.as_str()),
         _ => None,
      }
   }

   /// Whether the request carries a search term.
   pub fn has_query(&self) -> bool {
      !self.q.is_empty()
   }
}

/// Parse the `start` parameter, defaulting to 1 when absent, non-numeric or
/// less than 1.
pub fn parse_start(value: &str) -> usize {
   match value.trim().parse::<usize>() {
      Ok(start) if start >= 1 => start,
      _ => 1,
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn defaults() {
      let params = ListParams::from_pairs(Vec::<(&str, &str)>::new());
      assert_eq!(params, ListParams::default());
      assert_eq!(params.start, 1);
      assert!(!params.has_query());
   }

   #[test]
   fn reads_and_normalizes_values() {
      let params = ListParams::from_pairs([
         ("search", "  Ann "),
         ("status", " Active"),
         ("after", " tok "),
         ("before", ""),
         ("start", "51"),
         ("org", "ignored"),
      ]);

      assert_eq!(params.q, "Ann");
      assert_eq!(params.status, "active");
      assert_eq!(params.status_filter(), Some("active"));
      assert_eq!(params.after, "tok");
      assert_eq!(params.before, "");
      assert_eq!(params.start, 51);
   }

   #[test]
   fn prefixed_keys_belong_to_their_own_pane() {
      let pairs = [
         ("org_q", "north"),
         ("org_after", "org-tok"),
         ("org_start", "51"),
         ("after", "group-tok"),
         ("start", "11"),
      ];

      let org = ListParams::from_pairs_prefixed("org_", pairs);
      assert_eq!(org.q, "north");
      assert_eq!(org.after, "org-tok");
      assert_eq!(org.start, 51);

      let groups = ListParams::from_pairs(pairs);
      assert_eq!(groups.q, "");
      assert_eq!(groups.after, "group-tok");
      assert_eq!(groups.start, 11);
   }

   #[test]
   fn unknown_status_is_no_filter() {
      let params = ListParams::from_pairs([("status", "all")]);
      assert_eq!(params.status_filter(), None);
   }

   #[test]
   fn start_falls_back_to_one() {
      assert_eq!(parse_start(""), 1);
      assert_eq!(parse_start("0"), 1);
      assert_eq!(parse_start("-4"), 1);
      assert_eq!(parse_start("abc"), 1);
      assert_eq!(parse_start(" 11 "), 11);
   }
}
