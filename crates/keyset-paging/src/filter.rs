//! Predicate trees for store filters.
//!
//! List filters are built as an explicit tree of AND, OR and comparison nodes
//! rather than a flat field-to-condition map. A flat map can hold only one
//! top-level OR, so combining a search disjunction with the keyset window
//! disjunction would overwrite one of them. With a tree, [`Filter::and`]
//! always yields `AND(search-OR, window-OR)`.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Comparison operator of a leaf predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CmpOp {
   Eq,
   Ne,
   Lt,
   Lte,
   Gt,
   Gte,
}

impl CmpOp {
   /// SQL spelling of the operator.
   pub fn as_sql(self) -> &'static str {
      match self {
         CmpOp::Eq => "=",
         CmpOp::Ne => "<>",
         CmpOp::Lt => "<",
         CmpOp::Lte => "<=",
         CmpOp::Gt => ">",
         CmpOp::Gte => ">=",
      }
   }

   fn holds(self, ordering: Ordering) -> bool {
      match self {
         CmpOp::Eq => ordering == Ordering::Equal,
         CmpOp::Ne => ordering != Ordering::Equal,
         CmpOp::Lt => ordering == Ordering::Less,
         CmpOp::Lte => ordering != Ordering::Greater,
         CmpOp::Gt => ordering == Ordering::Greater,
         CmpOp::Gte => ordering != Ordering::Less,
      }
   }
}

/// A store-agnostic row predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Filter {
   /// `field <op> value`
   Cmp {
      field: String,
      op: CmpOp,
      value: JsonValue,
   },
   /// `field IN (values…)`; an empty list matches nothing
   In { field: String, values: Vec<JsonValue> },
   /// Conjunction; an empty list matches everything
   And(Vec<Filter>),
   /// Disjunction; an empty list matches nothing
   Or(Vec<Filter>),
}

impl Default for Filter {
   fn default() -> Self {
      Filter::all()
   }
}

impl Filter {
   /// A filter matching every row.
   pub fn all() -> Self {
      Filter::And(Vec::new())
   }

   /// Whether this filter is the empty conjunction.
   pub fn is_all(&self) -> bool {
      matches!(self, Filter::And(parts) if parts.is_empty())
   }

   pub fn cmp(field: impl Into<String>, op: CmpOp, value: impl Into<JsonValue>) -> Self {
      Filter::Cmp {
         field: field.into(),
         op,
         value: value.into(),
      }
   }

   pub fn eq(field: impl Into<String>, value: impl Into<JsonValue>) -> Self {
      Self::cmp(field, CmpOp::Eq, value)
   }

   pub fn ne(field: impl Into<String>, value: impl Into<JsonValue>) -> Self {
      Self::cmp(field, CmpOp::Ne, value)
   }

   pub fn lt(field: impl Into<String>, value: impl Into<JsonValue>) -> Self {
      Self::cmp(field, CmpOp::Lt, value)
   }

   pub fn lte(field: impl Into<String>, value: impl Into<JsonValue>) -> Self {
      Self::cmp(field, CmpOp::Lte, value)
   }

   pub fn gt(field: impl Into<String>, value: impl Into<JsonValue>) -> Self {
      Self::cmp(field, CmpOp::Gt, value)
   }

   pub fn gte(field: impl Into<String>, value: impl Into<JsonValue>) -> Self {
      Self::cmp(field, CmpOp::Gte, value)
   }

   pub fn is_in<V: Into<JsonValue>>(
      field: impl Into<String>,
      values: impl IntoIterator<Item = V>,
   ) -> Self {
      Filter::In {
         field: field.into(),
         values: values.into_iter().map(Into::into).collect(),
      }
   }

   /// Disjunction of the given filters.
   pub fn any_of(filters: impl IntoIterator<Item = Filter>) -> Self {
      Filter::Or(filters.into_iter().collect())
   }

   /// Conjunction of the given filters, flattening nested conjunctions.
   pub fn all_of(filters: impl IntoIterator<Item = Filter>) -> Self {
      filters.into_iter().fold(Filter::all(), Filter::and)
   }

   /// Intersect two filters.
   ///
   /// Conjunctions are flattened into one AND node. Every other node,
   /// including an OR, becomes a single conjunct and is never merged with
   /// another OR.
   pub fn and(self, other: Filter) -> Self {
      match (self, other) {
         (Filter::And(mut left), Filter::And(right)) => {
            left.extend(right);
            Filter::And(left)
         }
         (Filter::And(mut left), other) => {
            left.push(other);
            Filter::And(left)
         }
         (this, Filter::And(mut right)) => {
            right.insert(0, this);
            Filter::And(right)
         }
         (this, other) => Filter::And(vec![this, other]),
      }
   }

   /// Evaluate the filter against a row.
   ///
   /// `lookup` returns the row's value for a field. Missing fields and JSON
   /// `null` never satisfy a comparison, matching SQL `NULL` semantics.
   pub fn matches<'a, F>(&self, lookup: &F) -> bool
   where
      F: Fn(&str) -> Option<&'a JsonValue>,
   {
      match self {
         Filter::Cmp { field, op, value } => lookup(field.as_str())
            .and_then(|actual| compare_values(actual, value))
            .is_some_and(|ordering| op.holds(ordering)),
         Filter::In { field, values } => lookup(field.as_str()).is_some_and(|actual| {
            values
               .iter()
               .any(|v| compare_values(actual, v) == Some(Ordering::Equal))
         }),
         Filter::And(parts) => parts.iter().all(|part| part.matches(lookup)),
         Filter::Or(parts) => parts.iter().any(|part| part.matches(lookup)),
      }
   }
}

/// Order two JSON scalars of the same kind.
///
/// Strings compare by bytes (SQLite `BINARY` collation), numbers numerically
/// and booleans with `false < true`. Mixed kinds, `null`, arrays and objects
/// are incomparable.
pub fn compare_values(a: &JsonValue, b: &JsonValue) -> Option<Ordering> {
   match (a, b) {
      (JsonValue::String(a), JsonValue::String(b)) => Some(a.as_bytes().cmp(b.as_bytes())),
      (JsonValue::Number(a), JsonValue::Number(b)) => match (a.as_i64(), b.as_i64()) {
         (Some(a), Some(b)) => Some(a.cmp(&b)),
         _ => a.as_f64()?.partial_cmp(&b.as_f64()?),
      },
      (JsonValue::Bool(a), JsonValue::Bool(b)) => Some(a.cmp(b)),
      _ => None,
   }
}
