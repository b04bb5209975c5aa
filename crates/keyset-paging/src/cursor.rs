//! Cursor tokens and the cursor builder.
//!
//! A cursor identifies one row's exact position in the active sort order: the
//! row's sort key and its unique id. Tokens are URL-safe base64 of the JSON
//! array `[key, id]`, so they travel unescaped in query strings. The format is
//! opaque to callers; only the round trip `decode(encode(c)) == c` matters.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::Error;

/// A `(sort key, id)` pair taken from a row that was returned to a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor<I> {
   /// Value of the active sort field for the row
   pub key: String,
   /// Unique tiebreaker for rows sharing a sort key
   pub id: I,
}

impl<I> Cursor<I> {
   pub fn new(key: impl Into<String>, id: I) -> Self {
      Self {
         key: key.into(),
         id,
      }
   }
}

impl<I: Serialize> Cursor<I> {
   /// Encode the cursor as an opaque, URL-safe token.
   pub fn encode(&self) -> Result<String, Error> {
      let json = serde_json::to_vec(&(&self.key, &self.id))?;
      Ok(URL_SAFE_NO_PAD.encode(json))
   }
}

impl<I: DeserializeOwned> Cursor<I> {
   /// Decode a token produced by [`Cursor::encode`].
   ///
   /// Returns `None` for empty, truncated or tampered tokens. Callers treat
   /// that exactly like "no cursor supplied".
   pub fn decode(token: &str) -> Option<Self> {
      let token = token.trim();
      if token.is_empty() {
         return None;
      }

      let bytes = URL_SAFE_NO_PAD.decode(token).ok()?;
      let (key, id): (String, I) = serde_json::from_slice(&bytes).ok()?;
      Some(Self { key, id })
   }
}

/// Tokens for the links around a rendered page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCursors {
   /// Pass as `before` to load the page preceding the first rendered row
   pub prev: String,
   /// Pass as `after` to load the page following the last rendered row
   pub next: String,
}

/// Derive the next request's cursors from the rows actually displayed.
///
/// `rows` must already be trimmed and in ascending display order (see
/// [`trim_page`](crate::trim_page)). Both tokens are empty when the page is
/// empty.
pub fn build_cursors<T, I, E>(
   rows: &[T],
   cursor_of: impl Fn(&T) -> Result<Cursor<I>, E>,
) -> Result<PageCursors, E>
where
   I: Serialize,
   E: From<Error>,
{
   let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
      return Ok(PageCursors::default());
   };

   Ok(PageCursors {
      prev: cursor_of(first)?.encode()?,
      next: cursor_of(last)?.encode()?,
   })
}

#[cfg(test)]
mod tests {
   use super::*;
   use serde_json::json;

   #[derive(Debug)]
   struct Item {
      key: &'static str,
      id: i64,
   }

   fn cursor_of(item: &Item) -> Result<Cursor<i64>, Error> {
      Ok(Cursor::new(item.key, item.id))
   }

   // ─── encode / decode ───

   #[test]
   fn round_trip_integer_id() {
      let cursor = Cursor::new("smith, jane", 42_i64);
      let token = cursor.encode().unwrap();
      assert_eq!(Cursor::<i64>::decode(&token), Some(cursor));
   }

   #[test]
   fn round_trip_string_id_with_unicode_key() {
      let cursor = Cursor::new("zoë@example.org", "65f0c0ffee".to_string());
      let token = cursor.encode().unwrap();
      assert_eq!(Cursor::<String>::decode(&token), Some(cursor));
   }

   #[test]
   fn round_trip_json_id() {
      let cursor = Cursor::new("acme", json!(7));
      let token = cursor.encode().unwrap();
      assert_eq!(Cursor::<serde_json::Value>::decode(&token), Some(cursor));
   }

   #[test]
   fn token_is_url_safe() {
      let token = Cursor::new("???>>>~~~", 1_i64).encode().unwrap();
      assert!(
         token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
      );
   }

   #[test]
   fn decode_rejects_empty_and_garbage() {
      assert_eq!(Cursor::<i64>::decode(""), None);
      assert_eq!(Cursor::<i64>::decode("   "), None);
      assert_eq!(Cursor::<i64>::decode("not a cursor!"), None);
      assert_eq!(Cursor::<i64>::decode("%%%"), None);
   }

   #[test]
   fn decode_rejects_wrong_shape() {
      let token = URL_SAFE_NO_PAD.encode(br#"{"key":"a","id":1}"#);
      assert_eq!(Cursor::<i64>::decode(&token), None);

      // Valid shape but id has the wrong type
      let token = URL_SAFE_NO_PAD.encode(br#"["a","x"]"#);
      assert_eq!(Cursor::<i64>::decode(&token), None);
   }

   // ─── build_cursors ───

   #[test]
   fn empty_rows_yield_empty_cursors() {
      let cursors = build_cursors(&[], cursor_of).unwrap();
      assert_eq!(cursors, PageCursors::default());
   }

   #[test]
   fn single_row_prev_equals_next() {
      let rows = [Item { key: "only", id: 1 }];
      let cursors = build_cursors(&rows, cursor_of).unwrap();
      assert!(!cursors.prev.is_empty());
      assert_eq!(cursors.prev, cursors.next);
   }

   #[test]
   fn prev_from_first_next_from_last() {
      let rows = [
         Item { key: "first", id: 1 },
         Item { key: "middle", id: 2 },
         Item { key: "last", id: 3 },
      ];
      let cursors = build_cursors(&rows, cursor_of).unwrap();

      assert_eq!(
         Cursor::<i64>::decode(&cursors.prev),
         Some(Cursor::new("first", 1))
      );
      assert_eq!(
         Cursor::<i64>::decode(&cursors.next),
         Some(Cursor::new("last", 3))
      );
   }

   #[test]
   fn extraction_error_propagates() {
      let rows = [Item { key: "a", id: 1 }];
      let result = build_cursors(&rows, |_: &Item| -> Result<Cursor<i64>, Error> {
         Err(Error::EmptyFieldName)
      });
      assert!(matches!(result, Err(Error::EmptyFieldName)));
   }
}
