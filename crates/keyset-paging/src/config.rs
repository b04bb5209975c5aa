//! Page-size configuration for list and picker views

use serde::{Deserialize, Serialize};

/// Rows per page on primary list views.
pub const PAGE_SIZE: usize = 50;

/// Rows per page on compact picker and modal views.
pub const MODAL_PAGE_SIZE: usize = 10;

/// The kind of view a page is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewKind {
   /// Full-width list or report pane
   Full,
   /// Picker or modal table
   Modal,
}

/// Page sizes handed to the paging functions.
///
/// # Examples
///
/// ```
/// use keyset_paging::{PagingConfig, ViewKind};
///
/// // Use defaults
/// let config = PagingConfig::default();
/// assert_eq!(config.size_for(ViewKind::Full), 50);
///
/// // Override just one field
/// let config = PagingConfig {
///    modal_page_size: 5,
///    ..Default::default()
/// };
/// assert_eq!(config.size_for(ViewKind::Modal), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingConfig {
   /// Rows per page on primary list views
   ///
   /// Default: 50
   pub page_size: usize,

   /// Rows per page on picker and modal views
   ///
   /// Default: 10
   pub modal_page_size: usize,
}

impl PagingConfig {
   /// Page size for the given kind of view.
   pub fn size_for(&self, view: ViewKind) -> usize {
      match view {
         ViewKind::Full => self.page_size,
         ViewKind::Modal => self.modal_page_size,
      }
   }
}

impl Default for PagingConfig {
   fn default() -> Self {
      Self {
         page_size: PAGE_SIZE,
         modal_page_size: MODAL_PAGE_SIZE,
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn defaults_match_named_sizes() {
      let config = PagingConfig::default();
      assert_eq!(config.size_for(ViewKind::Full), PAGE_SIZE);
      assert_eq!(config.size_for(ViewKind::Modal), MODAL_PAGE_SIZE);
   }

   #[test]
   fn deserializes_from_camel_case() {
      let config: PagingConfig =
         serde_json::from_str(r#"{"pageSize": 25, "modalPageSize": 5}"#).unwrap();
      assert_eq!(config.page_size, 25);
      assert_eq!(config.modal_page_size, 5);
   }
}
