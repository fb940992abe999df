//! # Data service contract
//!
//! [`DataService`] is the one interface every admin screen and public page uses to
//! talk to the hosted database. It is an async trait with five generic methods
//! (`list`, `get`, `create`, `update`, `delete`), each keyed by a [`Record`] type
//! whose [`Record::TABLE`] names the backing table.
//!
//! Implementations live elsewhere: [`crate::MemoryStore`] in this crate, and the
//! REST client in the `api` crate.

use std::cmp::Ordering;
use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// A row of a named table.
pub trait Record: Serialize + DeserializeOwned + Clone {
    const TABLE: &'static str;

    /// Primary key. Empty for records not yet created.
    fn id(&self) -> &str;

    /// Columns whose values must be unique across the table.
    fn unique_fields() -> &'static [&'static str] {
        &[]
    }
}

/// Errors surfaced by a [`DataService`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("{table} record {id} not found")]
    NotFound { table: String, id: String },
    #[error("constraint violation on {table}: {detail}")]
    ConstraintViolation { table: String, detail: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid record data: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

/// Sort order for [`Filter`].
#[derive(Clone, Debug, PartialEq)]
pub enum Order {
    Asc(String),
    Desc(String),
}

/// Row selection: equality predicates, an optional sort column and a limit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter {
    pub eq: Vec<(String, Value)>,
    pub order: Option<Order>,
    pub limit: Option<usize>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method adding a `column = value` predicate.
    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.eq.push((column.to_string(), value.into()));
        self
    }

    pub fn order_asc(mut self, column: &str) -> Self {
        self.order = Some(Order::Asc(column.to_string()));
        self
    }

    pub fn order_desc(mut self, column: &str) -> Self {
        self.order = Some(Order::Desc(column.to_string()));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether a serialized row satisfies every predicate.
    pub fn matches(&self, row: &Value) -> bool {
        self.eq
            .iter()
            .all(|(column, value)| row.get(column).unwrap_or(&Value::Null) == value)
    }

    /// Sort and truncate rows that already passed [`Filter::matches`].
    pub fn apply_order(&self, rows: &mut Vec<Value>) {
        if let Some(order) = &self.order {
            let (column, descending) = match order {
                Order::Asc(c) => (c, false),
                Order::Desc(c) => (c, true),
            };
            rows.sort_by(|a, b| {
                let ord = compare_values(
                    a.get(column).unwrap_or(&Value::Null),
                    b.get(column).unwrap_or(&Value::Null),
                );
                if descending {
                    ord.reverse()
                } else {
                    ord
                }
            });
        }
        if let Some(limit) = self.limit {
            rows.truncate(limit);
        }
    }
}

/// Total order over JSON scalars: null < bool < number < string < everything else.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    fn rank(v: &Value) -> u8 {
        match v {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            _ => 4,
        }
    }
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

/// Async CRUD over the hosted tables.
pub trait DataService {
    fn list<T: Record>(
        &self,
        filter: &Filter,
    ) -> impl Future<Output = Result<Vec<T>, StoreError>>;
    fn get<T: Record>(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<T, StoreError>>;
    /// Insert a record. An empty id is assigned by the service.
    fn create<T: Record>(
        &self,
        record: &T,
    ) -> impl Future<Output = Result<T, StoreError>>;
    fn update<T: Record>(
        &self,
        record: &T,
    ) -> impl Future<Output = Result<T, StoreError>>;
    fn delete<T: Record>(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<(), StoreError>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_matches_all_predicates() {
        let filter = Filter::new().eq("published", true).eq("slug", "spring");
        assert!(filter.matches(&json!({"published": true, "slug": "spring"})));
        assert!(!filter.matches(&json!({"published": false, "slug": "spring"})));
        assert!(!filter.matches(&json!({"slug": "spring"})));
    }

    #[test]
    fn test_order_and_limit() {
        let mut rows = vec![
            json!({"created_at": "2024-03-01"}),
            json!({"created_at": "2024-05-01"}),
            json!({"created_at": null}),
            json!({"created_at": "2024-01-01"}),
        ];
        Filter::new().order_desc("created_at").limit(2).apply_order(&mut rows);
        assert_eq!(rows, vec![json!({"created_at": "2024-05-01"}), json!({"created_at": "2024-03-01"})]);
    }
}
