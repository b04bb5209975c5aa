//! SQL generation for fetch plans and counts.
//!
//! Predicate trees render with `$N` placeholders numbered from
//! `param_offset + 1`, so the values can follow any bind values the caller
//! already uses. Identifiers are validated and then quoted; values never
//! appear in the SQL text.
//!
//! ```text
//! AND(status = 'active', OR(name_ci > 'acme', AND(name_ci = 'acme', id > 9)))
//!   ⇒ "status" = $1 AND ("name_ci" > $2 OR ("name_ci" = $3 AND "id" > $4))
//! ```

use keyset_paging::{FetchPlan, Filter, SortOrder};
use serde_json::Value as JsonValue;

use crate::{Error, Result};

/// Validate that an identifier is safe for SQL interpolation.
///
/// Accepts names matching `[a-zA-Z_][a-zA-Z0-9_.]*`, which covers plain column
/// names, qualified names (e.g., `table.column`), and underscored identifiers.
pub(crate) fn validate_column_name(name: &str) -> Result<()> {
   let mut chars = name.chars();
   let valid_start = chars
      .next()
      .is_some_and(|first| first.is_ascii_alphabetic() || first == '_');
   let valid_rest = chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '.');

   if !valid_start || !valid_rest || name.ends_with('.') || name.contains("..") {
      return Err(Error::InvalidColumnName {
         name: name.to_string(),
      });
   }

   Ok(())
}

/// Quote each dot-separated segment of an identifier.
///
/// Any embedded double quotes are doubled per SQL standard (`"` → `""`).
pub(crate) fn quote_identifier(name: &str) -> String {
   name
      .split('.')
      .map(|part| format!("\"{}\"", part.replace('"', "\"\"")))
      .collect::<Vec<_>>()
      .join(".")
}

/// Render a predicate tree as a SQL boolean expression.
///
/// Returns the SQL fragment and the bind values to use, in placeholder order.
/// An empty conjunction renders as `1 = 1`; an empty disjunction or `IN`
/// list renders as `0 = 1`.
pub fn render_filter(filter: &Filter, param_offset: usize) -> Result<(String, Vec<JsonValue>)> {
   let mut values = Vec::new();
   let sql = render_node(filter, param_offset, &mut values)?;
   Ok((sql, values))
}

fn render_node(filter: &Filter, offset: usize, values: &mut Vec<JsonValue>) -> Result<String> {
   match filter {
      Filter::Cmp { field, op, value } => {
         validate_column_name(field)?;
         values.push(value.clone());
         Ok(format!(
            "{} {} ${}",
            quote_identifier(field),
            op.as_sql(),
            offset + values.len()
         ))
      }
      Filter::In { field, values: list } => {
         validate_column_name(field)?;
         if list.is_empty() {
            return Ok("0 = 1".to_string());
         }
         let mut placeholders = Vec::with_capacity(list.len());
         for value in list {
            values.push(value.clone());
            placeholders.push(format!("${}", offset + values.len()));
         }
         Ok(format!(
            "{} IN ({})",
            quote_identifier(field),
            placeholders.join(", ")
         ))
      }
      Filter::And(parts) => render_group(parts, " AND ", "1 = 1", offset, values),
      Filter::Or(parts) => render_group(parts, " OR ", "0 = 1", offset, values),
   }
}

fn render_group(
   parts: &[Filter],
   joiner: &str,
   empty: &str,
   offset: usize,
   values: &mut Vec<JsonValue>,
) -> Result<String> {
   if parts.is_empty() {
      return Ok(empty.to_string());
   }

   let mut rendered = Vec::with_capacity(parts.len());
   for part in parts {
      let sql = render_node(part, offset, values)?;
      if parts.len() > 1 && is_compound(part) {
         rendered.push(format!("({})", sql));
      } else {
         rendered.push(sql);
      }
   }
   Ok(rendered.join(joiner))
}

/// Whether a node renders as more than one operand joined by AND/OR.
fn is_compound(filter: &Filter) -> bool {
   match filter {
      Filter::And(parts) | Filter::Or(parts) => match parts.as_slice() {
         [only] => is_compound(only),
         [] => false,
         _ => true,
      },
      _ => false,
   }
}

/// Build the ORDER BY clause from a sort specification.
pub(crate) fn build_order_by(order_by: &[(String, SortOrder)]) -> Result<String> {
   let mut parts = Vec::with_capacity(order_by.len());
   for (column, order) in order_by {
      validate_column_name(column)?;
      parts.push(format!("{} {}", quote_identifier(column), order.as_sql()));
   }
   Ok(format!("ORDER BY {}", parts.join(", ")))
}

fn where_clause(filter: &Filter, values: &mut Vec<JsonValue>) -> Result<String> {
   if filter.is_all() {
      return Ok(String::new());
   }
   let (sql, filter_values) = render_filter(filter, values.len())?;
   values.extend(filter_values);
   Ok(format!(" WHERE {}", sql))
}

fn column_list(columns: &[String]) -> Result<String> {
   if columns.is_empty() {
      return Ok("*".to_string());
   }
   let mut quoted = Vec::with_capacity(columns.len());
   for column in columns {
      validate_column_name(column)?;
      quoted.push(quote_identifier(column));
   }
   Ok(quoted.join(", "))
}

/// Build the page query for a fetch plan.
///
/// An empty `columns` list selects every column.
pub fn build_select(
   table: &str,
   columns: &[String],
   plan: &FetchPlan,
) -> Result<(String, Vec<JsonValue>)> {
   validate_column_name(table)?;

   let mut values = Vec::new();
   let mut sql = format!(
      "SELECT {} FROM {}",
      column_list(columns)?,
      quote_identifier(table)
   );
   sql.push_str(&where_clause(&plan.filter, &mut values)?);
   if !plan.order_by.is_empty() {
      sql.push(' ');
      sql.push_str(&build_order_by(&plan.order_by)?);
   }
   sql.push_str(&format!(" LIMIT {}", plan.limit));

   Ok((sql, values))
}

/// Build the total-count query for a filter.
pub fn build_count(table: &str, filter: &Filter) -> Result<(String, Vec<JsonValue>)> {
   validate_column_name(table)?;

   let mut values = Vec::new();
   let mut sql = format!("SELECT COUNT(*) AS \"count\" FROM {}", quote_identifier(table));
   sql.push_str(&where_clause(filter, &mut values)?);

   Ok((sql, values))
}
