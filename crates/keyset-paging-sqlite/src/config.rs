//! Configuration for the SQLite store's connection pool

use std::time::Duration;

/// Configuration for [`SqliteStore`](crate::SqliteStore) connection pools
///
/// # Examples
///
/// ```
/// use keyset_paging_sqlite::StoreConfig;
/// use std::time::Duration;
///
/// // Use defaults
/// let config = StoreConfig::default();
///
/// // Override just one field
/// let config = StoreConfig {
///     max_connections: 3,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
   /// Maximum number of pooled connections
   ///
   /// Default: 6
   pub max_connections: u32,

   /// Idle timeout for pooled connections
   ///
   /// Default: 30 seconds
   pub idle_timeout: Duration,
}

impl Default for StoreConfig {
   fn default() -> Self {
      Self {
         max_connections: 6,
         idle_timeout: Duration::from_secs(30),
      }
   }
}
