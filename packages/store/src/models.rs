//! # Domain records for the foundation site
//!
//! Every table of the hosted database has a record type here. Records are
//! `Serialize + Deserialize` so they travel unchanged between the REST backend,
//! the in-memory store and the UI.
//!
//! | Struct | Table | Notes |
//! |--------|-------|-------|
//! | [`Admin`] | `admins` | Panel accounts. `role` is kept as the raw string so an unknown role survives a round trip. |
//! | [`Project`] | `projects` | Foundation projects with an image gallery. |
//! | [`BlogPost`] | `blogs` | Blog posts, addressed publicly by `slug`. |
//! | [`Message`] | `messages` | Contact-form submissions. |
//! | [`Comment`] | `comments` | Reader comments on blog posts, shown once approved. |
//!
//! Image lists (`images`) are stored as raw JSON values: the table columns are
//! loosely typed and may contain quoted strings, empty entries or non-strings.
//! The gallery pipeline in the `state` crate cleans them up before display.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::service::Record;

/// Read a nullable column, mapping `null` to the type's default.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Admin panel role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    ContentManager,
    MessageManager,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::SuperAdmin, Role::ContentManager, Role::MessageManager];

    /// Parse the wire name of a role. Unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "super_admin" => Some(Role::SuperAdmin),
            "content_manager" => Some(Role::ContentManager),
            "message_manager" => Some(Role::MessageManager),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::ContentManager => "content_manager",
            Role::MessageManager => "message_manager",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super admin",
            Role::ContentManager => "Content manager",
            Role::MessageManager => "Message manager",
        }
    }
}

/// Full admin record, including the password hash when one is stored locally.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    #[serde(default)]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

impl Admin {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// Convert to the client-safe projection.
    pub fn to_info(&self) -> AdminInfo {
        AdminInfo {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role(),
        }
    }
}

impl Record for Admin {
    const TABLE: &'static str = "admins";

    fn id(&self) -> &str {
        &self.id
    }

    fn unique_fields() -> &'static [&'static str] {
        &["email"]
    }
}

/// Identity of the signed-in admin, safe to hand to any view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    /// `None` when the stored role is not one the panel knows.
    pub role: Option<Role>,
}

impl AdminInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_default")]
    pub body: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub images: Vec<Value>,
}

impl Record for Project {
    const TABLE: &'static str = "projects";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default, deserialize_with = "null_default")]
    pub excerpt: String,
    /// Markdown body.
    #[serde(default, deserialize_with = "null_default")]
    pub body: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub images: Vec<Value>,
    #[serde(default, deserialize_with = "null_default")]
    pub published: bool,
    /// Set by the database on insert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Record for BlogPost {
    const TABLE: &'static str = "blogs";

    fn id(&self) -> &str {
        &self.id
    }

    fn unique_fields() -> &'static [&'static str] {
        &["slug"]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "null_default")]
    pub subject: String,
    pub body: String,
    #[serde(default, deserialize_with = "null_default")]
    pub read: bool,
    /// Set by the database on insert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Record for Message {
    const TABLE: &'static str = "messages";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub id: String,
    pub post_id: String,
    pub author: String,
    pub body: String,
    #[serde(default, deserialize_with = "null_default")]
    pub approved: bool,
    /// Set by the database on insert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Record for Comment {
    const TABLE: &'static str = "comments";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
        assert_eq!(Role::parse("editor"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_admin_info_drops_hash_and_unknown_role() {
        let admin = Admin {
            id: "a1".to_string(),
            email: "ops@foundation.org".to_string(),
            name: None,
            role: "permission_admin".to_string(),
            password_hash: Some("$argon2id$...".to_string()),
        };
        let info = admin.to_info();
        assert_eq!(info.role, None);
        assert_eq!(info.display_name(), "ops@foundation.org");
    }

    #[test]
    fn test_project_accepts_loose_image_column() {
        let project: Project = serde_json::from_str(
            r#"{"id":"p1","title":"Wells","images":["\"http://a.jpg\"", 3, null, "/b.png"]}"#,
        )
        .unwrap();
        assert_eq!(project.images.len(), 4);
        assert!(project.summary.is_empty());
    }

    #[test]
    fn test_null_columns_read_as_defaults() {
        let project: Project = serde_json::from_str(
            r#"{"id":"p1","title":"Wells","summary":null,"body":null,"images":null}"#,
        )
        .unwrap();
        assert!(project.images.is_empty());
        assert!(project.summary.is_empty());

        let post: BlogPost = serde_json::from_str(
            r#"{"id":"b1","title":"T","slug":"t","excerpt":null,"images":null,"published":null}"#,
        )
        .unwrap();
        assert!(post.images.is_empty());
        assert!(!post.published);

        let message: Message = serde_json::from_str(
            r#"{"id":"m1","name":"N","email":"n@x.org","subject":null,"body":"hi","read":null}"#,
        )
        .unwrap();
        assert!(!message.read);

        let comment: Comment = serde_json::from_str(
            r#"{"id":"c1","post_id":"b1","author":"A","body":"B","approved":null}"#,
        )
        .unwrap();
        assert!(!comment.approved);

        let admin: Admin =
            serde_json::from_str(r#"{"id":"a1","email":"a@x.org","role":null}"#).unwrap();
        assert_eq!(admin.role(), None);
    }
}
