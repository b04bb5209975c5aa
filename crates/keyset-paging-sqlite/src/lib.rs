//! # keyset-paging-sqlite
//!
//! SQLite store adapter for [`keyset_paging`], built on SQLx.
//!
//! The paging engine decides *what* to fetch; this crate renders its
//! predicate tree and sort specification to SQL, runs the capped fetch and
//! the independent count, and decodes rows to ordered JSON maps.
//!
//! ## Core Types
//!
//! - **[`SqliteStore`]**: Connection pool plus fetch, count and execute
//! - **[`StoreConfig`]**: Pool settings
//! - **[`FetchPageBuilder`]**: Drives one keyset page request end to end
//! - **[`KeysetPage`]**: Trimmed rows, neighbour flags and cursor tokens
//!
//! ## Example
//!
//! ```no_run
//! use keyset_paging::{Filter, Keyset, PAGE_SIZE};
//! use keyset_paging_sqlite::SqliteStore;
//!
//! # async fn run() -> keyset_paging_sqlite::Result<()> {
//! let store = SqliteStore::connect("roster.db", None).await?;
//!
//! let page = store
//!    .fetch_page("organizations", Keyset::by("name_ci"), PAGE_SIZE)
//!    .filter(Filter::eq("status", "active"))
//!    .await?;
//!
//! // Next request: pass `page.next_cursor` as `after`
//! let next = store
//!    .fetch_page("organizations", Keyset::by("name_ci"), PAGE_SIZE)
//!    .filter(Filter::eq("status", "active"))
//!    .after(page.next_cursor)
//!    .await?;
//! # Ok(())
//! # }
//! ```

mod builders;
mod config;
mod decode;
mod error;
pub mod sql;
mod store;

pub use builders::{FetchPageBuilder, KeysetPage};
pub use config::StoreConfig;
pub use error::{Error, Result};
pub use store::{Row, SqliteStore};
