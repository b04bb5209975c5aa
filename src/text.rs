//! Text folding for sort keys and prefix searches.
//!
//! Stored `*_ci` columns hold the folded form of their source text, and
//! search terms are folded the same way before they are compared, so
//! "Zoë", "ZOE" and "zoe" all sort and match together.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold `text` for case- and accent-insensitive comparison.
///
/// Trims surrounding whitespace, lowercases, decomposes to NFD and drops
/// every combining mark. Latin letters with no canonical decomposition
/// (`ł`, `ø`, `ß`, ...) are mapped to their base letters.
pub fn fold(text: &str) -> String {
   let mut folded = String::with_capacity(text.len());
   for ch in text.trim().to_lowercase().nfd() {
      if is_combining_mark(ch) {
         continue;
      }
      match base_letter(ch) {
         Some(base) => folded.push_str(base),
         None => folded.push(ch),
      }
   }
   folded
}

/// Base form of a lowercase Latin letter that NFD leaves whole.
fn base_letter(ch: char) -> Option<&'static str> {
   let base = match ch {
      'æ' => "ae",
      'đ' | 'ð' => "d",
      'ħ' => "h",
      'ı' => "i",
      'ŀ' | 'ł' => "l",
      'ø' => "o",
      'œ' => "oe",
      'ß' => "ss",
      'ŧ' => "t",
      'þ' => "th",
      _ => return None,
   };
   Some(base)
}
