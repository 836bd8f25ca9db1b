//! Search Query Builder
//!
//! Resource searches are `POST /{resource}/search` with a JSON body of
//! `scopes`, `filters` and `sort`; eager-loaded relations go in the
//! `include` query parameter.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    NotEq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Lte,
    #[serde(rename = "like")]
    Like,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "not in")]
    NotIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Filter {
    pub field: String,
    pub operator: Operator,
    pub value: Value,
}

/// Named model scope with positional parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scope {
    pub name: String,
    pub parameters: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sort {
    pub field: String,
    pub direction: Direction,
}

/// Search request for one resource
///
/// ```
/// use marketplace::domain::query::{Operator, Query};
/// let query = Query::new()
///     .filter("status", Operator::Eq, 1)
///     .with(["category"]);
/// assert_eq!(query.include().as_deref(), Some("category"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Query {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    scopes: Vec<Scope>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    filters: Vec<Filter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    sort: Vec<Sort>,
    #[serde(skip)]
    includes: Vec<String>,
    #[serde(skip)]
    limit: Option<u32>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, field: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        self.filters.push(Filter {
            field: field.into(),
            operator,
            value: value.into(),
        });
        self
    }

    /// Shorthand for an equality filter
    pub fn where_eq(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(field, Operator::Eq, value)
    }

    pub fn scope<I, V>(mut self, name: impl Into<String>, parameters: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.scopes.push(Scope {
            name: name.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.sort.push(Sort {
            field: field.into(),
            direction,
        });
        self
    }

    /// Relations to eager-load
    pub fn with<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes.extend(relations.into_iter().map(Into::into));
        self
    }

    /// Page size; the backend's default applies when unset
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    /// Comma-joined relation list, `None` when nothing is included
    pub fn include(&self) -> Option<String> {
        (!self.includes.is_empty()).then(|| self.includes.join(","))
    }

    /// Query-string pairs for the search URL
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(include) = self.include() {
            pairs.push(("include", include));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_body() {
        let query = Query::new()
            .where_eq("user_id", 3)
            .filter("date", Operator::Gt, "2026-10-19 12:00:00")
            .scope("withActiveOffer", [8])
            .sort_by("created_at", Direction::Desc)
            .with(["service", "category"]);

        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "scopes": [{"name": "withActiveOffer", "parameters": [8]}],
                "filters": [
                    {"field": "user_id", "operator": "=", "value": 3},
                    {"field": "date", "operator": ">", "value": "2026-10-19 12:00:00"}
                ],
                "sort": [{"field": "created_at", "direction": "desc"}]
            })
        );
        assert_eq!(
            query.query_pairs(),
            vec![("include", "service,category".to_string())]
        );
    }

    #[test]
    fn test_empty_query() {
        let query = Query::new();
        assert_eq!(serde_json::to_value(&query).unwrap(), json!({}));
        assert!(query.include().is_none());
        assert_eq!(
            Query::new().limit(50).query_pairs(),
            vec![("limit", "50".to_string())]
        );
    }
}
