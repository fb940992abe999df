//! Request/response shapes and status mapping of the hosted REST API.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use store::{Filter, Order, StoreError};

use crate::auth::AuthError;

#[derive(Debug, Serialize)]
pub(crate) struct PasswordGrant<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HostedUser {
    #[serde(default)]
    pub email: Option<String>,
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Query-string pairs for a table request: `col=eq.val`, `order=col.desc`, `limit=n`.
pub(crate) fn rest_query(filter: &Filter) -> Vec<(String, String)> {
    let mut query: Vec<(String, String)> = filter
        .eq
        .iter()
        .map(|(column, value)| {
            let op = if value.is_null() { "is" } else { "eq" };
            (column.clone(), format!("{op}.{}", value_text(value)))
        })
        .collect();
    match &filter.order {
        Some(Order::Asc(column)) => query.push(("order".to_string(), format!("{column}.asc"))),
        Some(Order::Desc(column)) => query.push(("order".to_string(), format!("{column}.desc"))),
        None => {}
    }
    if let Some(limit) = filter.limit {
        query.push(("limit".to_string(), limit.to_string()));
    }
    query
}

/// Serialized row for insert: an empty id is left for the database to assign.
pub(crate) fn insert_body(mut row: Value) -> Value {
    if let Some(obj) = row.as_object_mut() {
        if obj.get("id").and_then(Value::as_str) == Some("") {
            obj.remove("id");
        }
    }
    row
}

pub(crate) fn store_error(table: &str, id: &str, status: u16, body: &str) -> StoreError {
    match status {
        404 => StoreError::NotFound {
            table: table.to_string(),
            id: id.to_string(),
        },
        400 | 409 | 422 => StoreError::ConstraintViolation {
            table: table.to_string(),
            detail: body.to_string(),
        },
        _ => StoreError::Network(format!("HTTP {status}: {body}")),
    }
}

pub(crate) fn login_error(status: u16, body: &str) -> AuthError {
    match status {
        400 | 401 | 403 => AuthError::InvalidCredentials,
        _ => AuthError::Backend(format!("HTTP {status}: {body}")),
    }
}

/// Outcome of a logout call. An expired or revoked token is already signed out.
pub(crate) fn logout_result(status: u16, body: &str) -> Result<(), AuthError> {
    match status {
        200..=299 | 401 | 403 => Ok(()),
        _ => Err(AuthError::Backend(format!("HTTP {status}: {body}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rest_query() {
        let filter = Filter::new()
            .eq("published", true)
            .eq("slug", "spring-drive")
            .eq("deleted_at", Value::Null)
            .order_desc("created_at")
            .limit(10);
        assert_eq!(
            rest_query(&filter),
            vec![
                ("published".to_string(), "eq.true".to_string()),
                ("slug".to_string(), "eq.spring-drive".to_string()),
                ("deleted_at".to_string(), "is.null".to_string()),
                ("order".to_string(), "created_at.desc".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
        assert!(rest_query(&Filter::new()).is_empty());
    }

    #[test]
    fn test_insert_body_drops_empty_id() {
        assert_eq!(insert_body(json!({"id": "", "title": "x"})), json!({"title": "x"}));
        assert_eq!(insert_body(json!({"id": "p1"})), json!({"id": "p1"}));
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(store_error("blogs", "b1", 404, ""), StoreError::NotFound { .. }));
        assert!(matches!(
            store_error("admins", "", 409, "duplicate key"),
            StoreError::ConstraintViolation { .. }
        ));
        assert!(matches!(store_error("blogs", "", 503, ""), StoreError::Network(_)));
        assert_eq!(login_error(400, "invalid_grant"), AuthError::InvalidCredentials);
        assert!(matches!(login_error(500, "boom"), AuthError::Backend(_)));
    }

    #[test]
    fn test_logout_status() {
        assert!(logout_result(204, "").is_ok());
        assert!(logout_result(401, "").is_ok());
        assert!(matches!(
            logout_result(503, "unavailable"),
            Err(AuthError::Backend(msg)) if msg == "HTTP 503: unavailable"
        ));
        assert!(matches!(logout_result(500, ""), Err(AuthError::Backend(_))));
    }
}
