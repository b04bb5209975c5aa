//! Error types for keyset-paging

/// Result type alias for paging operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the paging engine.
///
/// A malformed cursor token is deliberately absent from this list: decoding
/// failures degrade to "no cursor" instead of surfacing as errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
   /// Page size must be greater than zero.
   #[error("page size must be greater than zero")]
   InvalidPageSize,

   /// Page size is so large that the lookahead row cannot be added.
   #[error("page size {0} leaves no room for the lookahead row")]
   PageSizeOverflow(usize),

   /// Sort or tiebreaker field name is empty.
   #[error("keyset field name must not be empty")]
   EmptyFieldName,

   /// Cursor could not be serialized into a token.
   #[error("failed to encode cursor: {0}")]
   CursorEncode(#[from] serde_json::Error),
}

impl Error {
   /// Extract a structured error code from the error type.
   pub fn error_code(&self) -> String {
      match self {
         Error::InvalidPageSize => "INVALID_PAGE_SIZE".to_string(),
         Error::PageSizeOverflow(_) => "PAGE_SIZE_OVERFLOW".to_string(),
         Error::EmptyFieldName => "EMPTY_FIELD_NAME".to_string(),
         Error::CursorEncode(_) => "CURSOR_ENCODE_FAILED".to_string(),
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_error_code_invalid_page_size() {
      let err = Error::InvalidPageSize;
      assert_eq!(err.error_code(), "INVALID_PAGE_SIZE");
      assert!(err.to_string().contains("greater than zero"));
   }

   #[test]
   fn test_error_code_page_size_overflow() {
      let err = Error::PageSizeOverflow(usize::MAX);
      assert_eq!(err.error_code(), "PAGE_SIZE_OVERFLOW");
      assert!(err.to_string().contains("lookahead"));
   }

   #[test]
   fn test_error_code_empty_field_name() {
      assert_eq!(Error::EmptyFieldName.error_code(), "EMPTY_FIELD_NAME");
   }
}
