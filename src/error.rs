/// Result type alias for list operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for list views.
#[derive(Debug, thiserror::Error)]
pub enum Error {
   /// Error from the SQLite store.
   #[error(transparent)]
   Store(#[from] keyset_paging_sqlite::Error),

   /// Error from the paging engine.
   #[error(transparent)]
   Paging(#[from] keyset_paging::Error),
}

impl Error {
   /// Extract a structured error code from the error type.
   ///
   /// This provides machine-readable error codes for error handling.
   pub fn error_code(&self) -> String {
      match self {
         Error::Store(e) => e.error_code(),
         Error::Paging(e) => e.error_code(),
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_error_code_store_passes_through() {
      let err = Error::from(keyset_paging_sqlite::Error::UnsupportedDatatype("BLOB".into()));
      assert_eq!(err.error_code(), "UNSUPPORTED_DATATYPE");
      assert_eq!(err.to_string(), "unsupported datatype: BLOB");
   }

   #[test]
   fn test_error_code_paging_passes_through() {
      let err = Error::from(keyset_paging::Error::PageSizeOverflow(usize::MAX));
      assert_eq!(err.error_code(), "PAGE_SIZE_OVERFLOW");
   }

   #[test]
   fn test_error_code_nested_paging_via_store() {
      let err = Error::from(keyset_paging_sqlite::Error::from(
         keyset_paging::Error::InvalidPageSize,
      ));
      assert_eq!(err.error_code(), "INVALID_PAGE_SIZE");
   }
}
