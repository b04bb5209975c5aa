/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the SQLite store adapter.
#[derive(Debug, thiserror::Error)]
pub enum Error {
   /// Error from SQLx operations.
   #[error(transparent)]
   Sqlx(#[from] sqlx::Error),

   /// Error from the paging engine.
   #[error(transparent)]
   Paging(#[from] keyset_paging::Error),

   /// I/O error when preparing the database location.
   #[error("io error: {0}")]
   Io(#[from] std::io::Error),

   /// SQLite type that cannot be mapped to JSON.
   #[error("unsupported datatype: {0}")]
   UnsupportedDatatype(String),

   /// Keyset column not found in query results.
   #[error("keyset column '{column}' not found in query results")]
   CursorColumnNotFound { column: String },

   /// Sort column holds a value that is not text.
   #[error("sort column '{column}' must hold text values to build a cursor")]
   InvalidSortKey { column: String },

   /// Table or column name contains invalid characters.
   ///
   /// Names must match `[a-zA-Z_][a-zA-Z0-9_.]*` (letters, digits,
   /// underscores, and dots for qualified names like `table.column`).
   #[error("invalid identifier '{name}': must match [a-zA-Z_][a-zA-Z0-9_.]*")]
   InvalidColumnName { name: String },
}

impl Error {
   /// Extract a structured error code from the error type.
   ///
   /// This provides machine-readable error codes for error handling.
   pub fn error_code(&self) -> String {
      match self {
         Error::Sqlx(e) => {
            if let Some(code) = e.as_database_error().and_then(|db_err| db_err.code()) {
               return format!("SQLITE_{}", code);
            }
            "SQLX_ERROR".to_string()
         }
         Error::Paging(e) => e.error_code(),
         Error::Io(_) => "IO_ERROR".to_string(),
         Error::UnsupportedDatatype(_) => "UNSUPPORTED_DATATYPE".to_string(),
         Error::CursorColumnNotFound { .. } => "CURSOR_COLUMN_NOT_FOUND".to_string(),
         Error::InvalidSortKey { .. } => "INVALID_SORT_KEY".to_string(),
         Error::InvalidColumnName { .. } => "INVALID_COLUMN_NAME".to_string(),
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_error_code_sqlx_non_database() {
      // RowNotFound is not a database error, so no SQLite code
      let err = Error::Sqlx(sqlx::Error::RowNotFound);
      assert_eq!(err.error_code(), "SQLX_ERROR");
   }

   #[test]
   fn test_error_code_paging_passes_through() {
      let err = Error::from(keyset_paging::Error::InvalidPageSize);
      assert_eq!(err.error_code(), "INVALID_PAGE_SIZE");
      assert!(err.to_string().contains("greater than zero"));
   }

   #[test]
   fn test_error_code_io() {
      let err = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
      assert_eq!(err.error_code(), "IO_ERROR");
   }

   #[test]
   fn test_error_code_unsupported_datatype() {
      let err = Error::UnsupportedDatatype("BLOB".into());
      assert_eq!(err.error_code(), "UNSUPPORTED_DATATYPE");
   }

   #[test]
   fn test_error_code_cursor_column_not_found() {
      let err = Error::CursorColumnNotFound {
         column: "name_ci".into(),
      };
      assert_eq!(err.error_code(), "CURSOR_COLUMN_NOT_FOUND");
      assert!(err.to_string().contains("name_ci"));
   }

   #[test]
   fn test_error_code_invalid_sort_key() {
      let err = Error::InvalidSortKey {
         column: "score".into(),
      };
      assert_eq!(err.error_code(), "INVALID_SORT_KEY");
      assert!(err.to_string().contains("score"));
   }

   #[test]
   fn test_error_code_invalid_column_name() {
      let err = Error::InvalidColumnName {
         name: "bad;name".into(),
      };
      assert_eq!(err.error_code(), "INVALID_COLUMN_NAME");
      assert!(err.to_string().contains("bad;name"));
   }
}
