//! Fetch-and-trim paging.

use serde::Serialize;

use crate::keyset::{Direction, KeysetConfig};

/// A trimmed page of rows in ascending display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
   /// The rows to display
   pub rows: Vec<T>,
   /// Whether a page exists before the first row
   pub has_prev: bool,
   /// Whether a page exists after the last row
   pub has_next: bool,
}

impl<T> Page<T> {
   pub fn shown(&self) -> usize {
      self.rows.len()
   }
}

/// Trim the lookahead row from a fetched batch and restore display order.
///
/// `rows` must be in the order the store returned them for a plan built from
/// the same `config`, holding at most `page_size + 1` rows. The store scans
/// away from the cursor, so the lookahead row (if present) is always the last
/// fetched row:
///
/// - Forward: a lookahead row means `has_next`; `has_prev` holds whenever the
///   request resumed from a cursor.
/// - Backward: a lookahead row means `has_prev`; `has_next` always holds,
///   since backward requests are only issued from a page with a successor.
///   A backward request without a cursor scans from the end of the list.
///
/// Backward batches are then reversed, so callers always receive ascending
/// rows regardless of which direction the store scanned.
pub fn trim_page<T, I>(mut rows: Vec<T>, config: &KeysetConfig<I>, page_size: usize) -> Page<T> {
   let has_more = rows.len() > page_size;
   if has_more {
      rows.truncate(page_size);
   }

   let (has_prev, has_next) = match config.direction {
      Direction::Forward => (config.cursor.is_some(), has_more),
      Direction::Backward => (has_more, true),
   };

   normalize_to_ascending(&mut rows, config.direction);

   Page {
      rows,
      has_prev,
      has_next,
   }
}

fn normalize_to_ascending<T>(rows: &mut [T], direction: Direction) {
   if direction == Direction::Backward {
      rows.reverse();
   }
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::cursor::Cursor;
   use crate::keyset::SortOrder;

   fn forward(cursor: bool) -> KeysetConfig<i64> {
      KeysetConfig {
         direction: Direction::Forward,
         sort_order: SortOrder::Asc,
         cursor: cursor.then(|| Cursor::new("k", 1)),
      }
   }

   fn backward() -> KeysetConfig<i64> {
      KeysetConfig {
         direction: Direction::Backward,
         sort_order: SortOrder::Desc,
         cursor: Some(Cursor::new("k", 1)),
      }
   }

   #[test]
   fn first_page_without_lookahead() {
      let page = trim_page(vec![1, 2, 3], &forward(false), 5);
      assert_eq!(page.rows, vec![1, 2, 3]);
      assert!(!page.has_prev);
      assert!(!page.has_next);
   }

   #[test]
   fn first_page_with_lookahead() {
      let page = trim_page((1..=6).collect(), &forward(false), 5);
      assert_eq!(page.rows, vec![1, 2, 3, 4, 5]);
      assert!(!page.has_prev);
      assert!(page.has_next);
   }

   #[test]
   fn forward_page_with_lookahead() {
      let page = trim_page((1..=6).collect(), &forward(true), 5);
      assert_eq!(page.shown(), 5);
      assert!(page.has_prev);
      assert!(page.has_next);
   }

   #[test]
   fn forward_page_without_lookahead() {
      let page = trim_page(vec![1, 2, 3], &forward(true), 5);
      assert_eq!(page.rows, vec![1, 2, 3]);
      assert!(page.has_prev);
      assert!(!page.has_next);
   }

   #[test]
   fn backward_page_with_lookahead() {
      // Store scanned descending: 6 is nearest the cursor, 1 is the lookahead
      let page = trim_page(vec![6, 5, 4, 3, 2, 1], &backward(), 5);
      assert_eq!(page.rows, vec![2, 3, 4, 5, 6]);
      assert!(page.has_prev);
      assert!(page.has_next);
   }

   #[test]
   fn backward_page_without_lookahead() {
      let page = trim_page(vec![3, 2, 1], &backward(), 5);
      assert_eq!(page.rows, vec![1, 2, 3]);
      assert!(!page.has_prev);
      assert!(page.has_next);
   }

   #[test]
   fn backward_without_cursor_reads_the_tail() {
      let config = KeysetConfig::<i64> {
         direction: Direction::Backward,
         sort_order: SortOrder::Desc,
         cursor: None,
      };
      let page = trim_page(vec![9, 8, 7, 6], &config, 3);
      assert_eq!(page.rows, vec![7, 8, 9]);
      assert!(page.has_prev);
      assert!(page.has_next);
   }

   #[test]
   fn empty_first_page() {
      let page = trim_page(Vec::<i64>::new(), &forward(false), 5);
      assert!(page.rows.is_empty());
      assert!(!page.has_prev);
      assert!(!page.has_next);
   }

   #[test]
   fn exactly_page_size_is_untouched() {
      let page = trim_page(vec![1, 2, 3, 4, 5], &forward(false), 5);
      assert_eq!(page.rows, vec![1, 2, 3, 4, 5]);
      assert!(!page.has_next);
   }

   #[test]
   fn single_row_backward_is_reversed_trivially() {
      let page = trim_page(vec![9], &backward(), 5);
      assert_eq!(page.rows, vec![9]);
   }
}
