//! Query clause extraction
//!
//! kintone queries may end with `order by`, `limit` and `offset` clauses.
//! The record tools need to own pagination themselves, so these clauses are
//! pulled out of the caller's query, reconciled with the tool's own paging
//! values, and re-appended before the request goes out.

use regex::Regex;
use std::sync::LazyLock;

use super::error::KintoneResult;

static ORDER_BY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\s+order\s+by\s+[^\s,]+(?:\s+(?:asc|desc)\b)?(?:\s*,\s*[^\s,]+(?:\s+(?:asc|desc)\b)?)*",
    )
    .unwrap()
});
static LIMIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\s+limit\s+(\d+)").unwrap());
static OFFSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+offset\s+(\d+)").unwrap());

/// A query split into its filter predicate and trailing clauses
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedQuery {
    /// The filter predicate with order-by/limit/offset removed
    pub base_query: String,
    /// The `order by ...` clause exactly as the caller wrote it
    pub order_by: Option<String>,
    /// Effective limit after reconciling with the default
    pub limit: Option<u64>,
    /// Effective offset
    pub offset: Option<u64>,
}

impl ParsedQuery {
    /// Reassemble the query in the order kintone expects:
    /// predicate, order-by, limit, offset.
    pub fn to_query_string(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(4);
        if !self.base_query.is_empty() {
            parts.push(self.base_query.clone());
        }
        if let Some(order_by) = &self.order_by {
            parts.push(order_by.clone());
        }
        if let Some(limit) = self.limit {
            parts.push(format!("limit {}", limit));
        }
        if let Some(offset) = self.offset {
            parts.push(format!("offset {}", offset));
        }
        parts.join(" ")
    }
}

/// Split `query` into predicate, order-by, limit and offset.
///
/// A limit found in the query can only narrow `default_limit`, never widen
/// it. An offset found in the query replaces `default_offset`. Only the first
/// occurrence of each clause is extracted; anything else is left in
/// `base_query` untouched.
///
/// Fails only when a limit/offset numeral does not fit in a `u64`.
pub fn parse_query(
    query: Option<&str>,
    default_limit: Option<u64>,
    default_offset: Option<u64>,
) -> KintoneResult<ParsedQuery> {
    let Some(query) = query.filter(|q| !q.is_empty()) else {
        return Ok(ParsedQuery {
            base_query: String::new(),
            order_by: None,
            limit: default_limit,
            offset: default_offset,
        });
    };

    let mut working = query.to_string();

    let order_by = strip_first(&ORDER_BY_RE, &mut working).map(|(clause, _)| clause.trim().to_string());

    let query_limit = match strip_first(&LIMIT_RE, &mut working) {
        Some((_, Some(digits))) => Some(digits.parse::<u64>()?),
        _ => None,
    };
    let query_offset = match strip_first(&OFFSET_RE, &mut working) {
        Some((_, Some(digits))) => Some(digits.parse::<u64>()?),
        _ => None,
    };

    let limit = match (query_limit, default_limit) {
        (Some(q), Some(d)) => Some(q.min(d)),
        (Some(q), None) => Some(q),
        (None, d) => d,
    };

    Ok(ParsedQuery {
        base_query: working.trim().to_string(),
        order_by,
        limit,
        offset: query_offset.or(default_offset),
    })
}

/// Remove the first match of `re` from `text`, returning the matched text
/// and its first capture group.
fn strip_first(re: &Regex, text: &mut String) -> Option<(String, Option<String>)> {
    let (range, clause, group) = {
        let caps = re.captures(text)?;
        let whole = caps.get(0)?;
        (
            whole.range(),
            whole.as_str().to_string(),
            caps.get(1).map(|m| m.as_str().to_string()),
        )
    };
    text.replace_range(range, "");
    Some((clause, group))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kintone::KintoneError;

    fn parse(query: &str) -> ParsedQuery {
        parse_query(Some(query), Some(100), Some(0)).unwrap()
    }

    #[test]
    fn test_absent_query_returns_defaults() {
        let parsed = parse_query(None, Some(100), Some(0)).unwrap();
        assert_eq!(parsed.base_query, "");
        assert_eq!(parsed.order_by, None);
        assert_eq!(parsed.limit, Some(100));
        assert_eq!(parsed.offset, Some(0));
    }

    #[test]
    fn test_empty_query_returns_defaults() {
        let parsed = parse_query(Some(""), None, None).unwrap();
        assert_eq!(parsed, ParsedQuery::default());
    }

    #[test]
    fn test_plain_predicate_passes_through() {
        let query = r#"field1 = "value1" and field2 > 10"#;
        let parsed = parse(query);
        assert_eq!(parsed.base_query, query);
        assert_eq!(parsed.order_by, None);
        assert_eq!(parsed.limit, Some(100));
        assert_eq!(parsed.offset, Some(0));
    }

    #[test]
    fn test_predicate_is_trimmed() {
        let parsed = parse("  status = \"open\"   ");
        assert_eq!(parsed.base_query, "status = \"open\"");
    }

    #[test]
    fn test_order_by_single_field() {
        let parsed = parse(r#"field1 = "value1" order by field2 desc"#);
        assert_eq!(parsed.base_query, r#"field1 = "value1""#);
        assert_eq!(parsed.order_by.as_deref(), Some("order by field2 desc"));
    }

    #[test]
    fn test_order_by_multiple_fields() {
        let parsed = parse(r#"f1 = "v" order by f2 desc, f3 asc"#);
        assert_eq!(parsed.base_query, r#"f1 = "v""#);
        assert_eq!(parsed.order_by.as_deref(), Some("order by f2 desc, f3 asc"));
    }

    #[test]
    fn test_order_by_without_direction() {
        let parsed = parse("f1 > 3 order by f2, f3");
        assert_eq!(parsed.base_query, "f1 > 3");
        assert_eq!(parsed.order_by.as_deref(), Some("order by f2, f3"));
    }

    #[test]
    fn test_limit_narrows_default() {
        let parsed = parse(r#"field1 = "value1" limit 50"#);
        assert_eq!(parsed.base_query, r#"field1 = "value1""#);
        assert_eq!(parsed.limit, Some(50));
    }

    #[test]
    fn test_limit_cannot_widen_default() {
        let parsed = parse(r#"field1 = "value1" limit 200"#);
        assert_eq!(parsed.base_query, r#"field1 = "value1""#);
        assert_eq!(parsed.limit, Some(100));
    }

    #[test]
    fn test_limit_without_default() {
        let parsed = parse_query(Some(r#"field1 = "value1" limit 50"#), None, Some(0)).unwrap();
        assert_eq!(parsed.base_query, r#"field1 = "value1""#);
        assert_eq!(parsed.limit, Some(50));
        assert_eq!(parsed.offset, Some(0));
    }

    #[test]
    fn test_offset_overrides_default() {
        let parsed = parse(r#"field1 = "value1" offset 50"#);
        assert_eq!(parsed.base_query, r#"field1 = "value1""#);
        assert_eq!(parsed.limit, Some(100));
        assert_eq!(parsed.offset, Some(50));
    }

    #[test]
    fn test_all_clauses() {
        let parsed = parse(r#"field1 = "value1" order by field2 desc limit 75 offset 25"#);
        assert_eq!(parsed.base_query, r#"field1 = "value1""#);
        assert_eq!(parsed.order_by.as_deref(), Some("order by field2 desc"));
        assert_eq!(parsed.limit, Some(75));
        assert_eq!(parsed.offset, Some(25));
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let parsed = parse(r#"field1 = "value1" ORDER BY field2 DESC LIMIT 50 OFFSET 10"#);
        assert_eq!(parsed.base_query, r#"field1 = "value1""#);
        assert_eq!(parsed.order_by.as_deref(), Some("ORDER BY field2 DESC"));
        assert_eq!(parsed.limit, Some(50));
        assert_eq!(parsed.offset, Some(10));
    }

    #[test]
    fn test_clauses_in_any_position() {
        let parsed = parse("a = 1 offset 5 limit 20 order by b asc");
        assert_eq!(parsed.base_query, "a = 1");
        assert_eq!(parsed.order_by.as_deref(), Some("order by b asc"));
        assert_eq!(parsed.limit, Some(20));
        assert_eq!(parsed.offset, Some(5));
    }

    #[test]
    fn test_nested_structure_is_preserved() {
        let parsed = parse(r#"field1 = "value1" and (field2 > 10 or field3 in ("a", "b")) order by field4"#);
        assert_eq!(
            parsed.base_query,
            r#"field1 = "value1" and (field2 > 10 or field3 in ("a", "b"))"#
        );
        assert_eq!(parsed.order_by.as_deref(), Some("order by field4"));
        assert_eq!(parsed.limit, Some(100));
        assert_eq!(parsed.offset, Some(0));
    }

    #[test]
    fn test_only_first_limit_is_extracted() {
        let parsed = parse("a = 1 limit 10 limit 20");
        assert_eq!(parsed.base_query, "a = 1 limit 20");
        assert_eq!(parsed.limit, Some(10));
    }

    #[test]
    fn test_clause_at_start_of_query_is_not_extracted() {
        // every clause needs whitespace before its keyword
        let parsed = parse("limit 10");
        assert_eq!(parsed.base_query, "limit 10");
        assert_eq!(parsed.limit, Some(100));
        assert_eq!(parsed.to_query_string(), "limit 10 limit 100 offset 0");

        let parsed = parse("order by $id desc");
        assert_eq!(parsed.base_query, "order by $id desc");
        assert_eq!(parsed.order_by, None);
    }

    #[test]
    fn test_malformed_predicate_passes_through() {
        let parsed = parse("((a = 1 or ?? b limit 5");
        assert_eq!(parsed.base_query, "((a = 1 or ?? b");
        assert_eq!(parsed.limit, Some(5));
    }

    #[test]
    fn test_oversized_number_is_an_error() {
        let result = parse_query(Some("a = 1 limit 99999999999999999999999"), Some(100), Some(0));
        assert!(matches!(result, Err(KintoneError::QueryNumber(_))));
    }

    #[test]
    fn test_to_query_string_orders_parts() {
        let parsed = parse(r#"f = "x" limit 30 order by g desc"#);
        assert_eq!(parsed.to_query_string(), r#"f = "x" order by g desc limit 30 offset 0"#);
    }

    #[test]
    fn test_to_query_string_without_predicate() {
        let parsed = parse_query(None, Some(500), Some(1000)).unwrap();
        assert_eq!(parsed.to_query_string(), "limit 500 offset 1000");
    }
}
