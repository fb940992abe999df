use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use crate::service::{DataService, Filter, Record, StoreError};

/// In-memory DataService for testing and local preview.
///
/// Rows are kept as serialized JSON per table, the same shape the REST backend
/// returns, so filters behave identically against both.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<HashMap<&'static str, Vec<Value>>>>,
    next_id: Arc<AtomicU64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, HashMap<&'static str, Vec<Value>>> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn generate_id(&self, table: &str) -> String {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{table}-{n}")
    }
}

fn row_id(row: &Value) -> &str {
    row.get("id").and_then(Value::as_str).unwrap_or_default()
}

fn not_found<T: Record>(id: &str) -> StoreError {
    StoreError::NotFound {
        table: T::TABLE.to_string(),
        id: id.to_string(),
    }
}

/// Reject `row` if a unique column clashes with any other row of the table.
fn check_unique<T: Record>(rows: &[Value], row: &Value) -> Result<(), StoreError> {
    let id = row_id(row);
    for field in T::unique_fields() {
        let Some(value) = row.get(*field).filter(|v| !v.is_null()) else {
            continue;
        };
        if rows
            .iter()
            .any(|other| row_id(other) != id && other.get(*field) == Some(value))
        {
            return Err(StoreError::ConstraintViolation {
                table: T::TABLE.to_string(),
                detail: format!("duplicate value for {field}: {value}"),
            });
        }
    }
    Ok(())
}

impl DataService for MemoryStore {
    async fn list<T: Record>(&self, filter: &Filter) -> Result<Vec<T>, StoreError> {
        let mut rows: Vec<Value> = self
            .tables()
            .get(T::TABLE)
            .map(|rows| rows.iter().filter(|r| filter.matches(r)).cloned().collect())
            .unwrap_or_default();
        filter.apply_order(&mut rows);
        rows.into_iter()
            .map(|row| serde_json::from_value(row).map_err(StoreError::from))
            .collect()
    }

    async fn get<T: Record>(&self, id: &str) -> Result<T, StoreError> {
        let row = self
            .tables()
            .get(T::TABLE)
            .and_then(|rows| rows.iter().find(|r| row_id(r) == id).cloned())
            .ok_or_else(|| not_found::<T>(id))?;
        Ok(serde_json::from_value(row)?)
    }

    async fn create<T: Record>(&self, record: &T) -> Result<T, StoreError> {
        let mut row = serde_json::to_value(record)?;
        if record.id().is_empty() {
            let id = self.generate_id(T::TABLE);
            if let Some(obj) = row.as_object_mut() {
                obj.insert("id".to_string(), Value::String(id));
            }
        }
        let created: T = serde_json::from_value(row.clone())?;

        let mut tables = self.tables();
        let rows = tables.entry(T::TABLE).or_default();
        if rows.iter().any(|r| row_id(r) == created.id()) {
            return Err(StoreError::ConstraintViolation {
                table: T::TABLE.to_string(),
                detail: format!("duplicate id {}", created.id()),
            });
        }
        check_unique::<T>(rows, &row)?;
        rows.push(row);
        Ok(created)
    }

    async fn update<T: Record>(&self, record: &T) -> Result<T, StoreError> {
        let row = serde_json::to_value(record)?;
        let mut tables = self.tables();
        let rows = tables
            .get_mut(T::TABLE)
            .ok_or_else(|| not_found::<T>(record.id()))?;
        let pos = rows
            .iter()
            .position(|r| row_id(r) == record.id())
            .ok_or_else(|| not_found::<T>(record.id()))?;
        check_unique::<T>(rows, &row)?;
        rows[pos] = row;
        Ok(record.clone())
    }

    async fn delete<T: Record>(&self, id: &str) -> Result<(), StoreError> {
        let mut tables = self.tables();
        let rows = tables.get_mut(T::TABLE).ok_or_else(|| not_found::<T>(id))?;
        let before = rows.len();
        rows.retain(|r| row_id(r) != id);
        if rows.len() == before {
            return Err(not_found::<T>(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Admin, BlogPost, Message};

    fn post(slug: &str, published: bool, created_at: &str) -> BlogPost {
        BlogPost {
            id: String::new(),
            title: slug.to_uppercase(),
            slug: slug.to_string(),
            excerpt: String::new(),
            body: String::new(),
            cover_image: None,
            images: Vec::new(),
            published,
            created_at: Some(created_at.to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_get_reads_back() {
        let store = MemoryStore::new();

        assert!(store.list::<BlogPost>(&Filter::new()).await.unwrap().is_empty());

        let created = store.create(&post("wells", true, "2024-01-01")).await.unwrap();
        assert!(!created.id.is_empty());

        let loaded: BlogPost = store.get(&created.id).await.unwrap();
        assert_eq!(loaded, created);
    }

    #[tokio::test]
    async fn test_list_filters_and_orders() {
        let store = MemoryStore::new();
        store.create(&post("first", true, "2024-01-01")).await.unwrap();
        store.create(&post("draft", false, "2024-02-01")).await.unwrap();
        store.create(&post("latest", true, "2024-03-01")).await.unwrap();

        let filter = Filter::new().eq("published", true).order_desc("created_at");
        let posts: Vec<BlogPost> = store.list(&filter).await.unwrap();
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["latest", "first"]);
    }

    #[tokio::test]
    async fn test_unique_field_violation() {
        let store = MemoryStore::new();
        store.create(&post("same", true, "2024-01-01")).await.unwrap();

        let err = store.create(&post("same", false, "2024-02-01")).await.unwrap_err();
        assert!(matches!(err, StoreError::ConstraintViolation { .. }));
    }

    #[tokio::test]
    async fn test_duplicate_id_violation() {
        let store = MemoryStore::new();
        let admin = Admin {
            id: "a1".to_string(),
            email: "one@foundation.org".to_string(),
            name: None,
            role: "super_admin".to_string(),
            password_hash: None,
        };
        store.create(&admin).await.unwrap();

        let clash = Admin {
            email: "two@foundation.org".to_string(),
            ..admin
        };
        let err = store.create(&clash).await.unwrap_err();
        assert!(matches!(err, StoreError::ConstraintViolation { .. }));
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_are_not_found() {
        let store = MemoryStore::new();
        let message = Message {
            id: "m404".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.org".to_string(),
            subject: String::new(),
            body: "Hello".to_string(),
            read: false,
            created_at: None,
        };

        assert!(matches!(
            store.update(&message).await,
            Err(StoreError::NotFound { .. })
        ));
        assert!(matches!(
            store.delete::<Message>("m404").await,
            Err(StoreError::NotFound { .. })
        ));
        assert!(matches!(
            store.get::<Message>("m404").await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_then_delete() {
        let store = MemoryStore::new();
        let mut message = store
            .create(&Message {
                id: String::new(),
                name: "Ana".to_string(),
                email: "ana@example.org".to_string(),
                subject: "Volunteering".to_string(),
                body: "Hello".to_string(),
                read: false,
                created_at: None,
            })
            .await
            .unwrap();

        message.read = true;
        store.update(&message).await.unwrap();
        let unread: Vec<Message> = store.list(&Filter::new().eq("read", false)).await.unwrap();
        assert!(unread.is_empty());

        store.delete::<Message>(&message.id).await.unwrap();
        assert!(store.list::<Message>(&Filter::new()).await.unwrap().is_empty());
    }
}
