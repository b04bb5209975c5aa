//! # roster-lists
//!
//! Paginated list views for the roster admin system (organizations, leaders,
//! members, groups, system users and their picker modals), built on
//! [`keyset_paging`] and stored in SQLite through [`keyset_paging_sqlite`].
//!
//! A request's `after`/`before` tokens, search text, status filter and
//! `start` counter become a [`ListParams`]; a feature module turns those into
//! a [`ListQuery`]; [`fetch_list`] loads the page and assembles the
//! [`ListView`] a template renders.
//!
//! ```no_run
//! use keyset_paging::PagingConfig;
//! use keyset_paging_sqlite::SqliteStore;
//! use roster_lists::{ListParams, Scope, features::leaders, fetch_list};
//!
//! # async fn run() -> roster_lists::Result<()> {
//! let store = SqliteStore::connect("roster.db", None).await?;
//! let params = ListParams::from_pairs([("q", "ann"), ("status", "active")]);
//!
//! let query = leaders::list_query(&params, &Scope::Organization(3));
//! let view = fetch_list(&store, &query, &params, &PagingConfig::default()).await?;
//! println!("Showing {}-{} of {}", view.range_start, view.range_end, view.total);
//! # Ok(())
//! # }
//! ```

mod error;
pub mod features;
mod list;
mod params;
pub mod search;
pub mod text;

pub use error::{Error, Result};
pub use list::{ListQuery, ListView, Scope, fetch_list};
pub use params::{ListParams, parse_start};
