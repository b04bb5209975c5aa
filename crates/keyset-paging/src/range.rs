//! "Showing X–Y" display ranges.
//!
//! `start` is a 1-based counter the caller threads through its prev/next
//! links. It is advisory only and may drift from the cursor's true position
//! when rows are inserted or removed between loads.

use serde::Serialize;

/// Display bounds for a page and the `start` values for its neighbours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
   /// 1-based index of the first shown row, or 0 when nothing is shown
   pub start: usize,
   /// 1-based index of the last shown row, or 0 when nothing is shown
   pub end: usize,
   /// `start` to send with the previous-page link
   pub prev_start: usize,
   /// `start` to send with the next-page link
   pub next_start: usize,
}

/// Compute the display range for a page of `shown` rows beginning at `start`.
pub fn compute_range(start: usize, shown: usize, page_size: usize) -> Range {
   if shown == 0 {
      return Range {
         start: 0,
         end: 0,
         prev_start: 1,
         next_start: 1,
      };
   }

   Range {
      start,
      end: start.saturating_add(shown).saturating_sub(1),
      prev_start: start.saturating_sub(page_size).max(1),
      next_start: start.saturating_add(shown),
   }
}
