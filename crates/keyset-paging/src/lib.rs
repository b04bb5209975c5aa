//! # keyset-paging
//!
//! A store-agnostic keyset (cursor-based) pagination engine for list and
//! picker views.
//!
//! Instead of skipping rows with OFFSET, every request resumes the sorted scan
//! from the `(sort key, id)` pair of a row the client has already seen. The
//! engine itself performs no I/O: it decides the traversal direction, builds
//! the window predicate and sort specification a store must apply, trims the
//! over-fetched batch, and derives the cursors and display range for the next
//! request.
//!
//! ## Request Flow
//!
//! ```text
//! before/after tokens ──► configure_keyset ──► KeysetConfig
//! KeysetConfig + Keyset + caller filter ──► FetchPlan (filter AND window, order, limit)
//! store fetch (page_size + 1 rows) ──► trim_page ──► Page { rows, has_prev, has_next }
//! Page rows ──► build_cursors ──► PageCursors { prev, next }
//! start + shown ──► compute_range ──► Range
//! ```
//!
//! ## Example
//!
//! ```
//! use keyset_paging::{Filter, Keyset, PAGE_SIZE, configure_keyset, trim_page};
//!
//! let config = configure_keyset::<i64>("", "");
//! let keyset = Keyset::by("name_ci");
//! let plan = keyset
//!    .plan(&config, Filter::eq("status", "active"), PAGE_SIZE)
//!    .unwrap();
//! assert_eq!(plan.limit, PAGE_SIZE + 1);
//!
//! // ... run `plan` against a store ...
//! let fetched: Vec<i64> = (1..=51).collect();
//! let page = trim_page(fetched, &config, PAGE_SIZE);
//! assert!(page.has_next);
//! assert!(!page.has_prev);
//! ```

mod config;
mod cursor;
mod error;
mod filter;
mod keyset;
mod page;
mod range;

pub use config::{MODAL_PAGE_SIZE, PAGE_SIZE, PagingConfig, ViewKind};
pub use cursor::{Cursor, PageCursors, build_cursors};
pub use error::{Error, Result};
pub use filter::{CmpOp, Filter, compare_values};
pub use keyset::{Direction, FetchPlan, Keyset, KeysetConfig, SortOrder, configure_keyset};
pub use page::{Page, trim_page};
pub use range::{Range, compute_range};
