use store::{AdminInfo, DataService, Filter, MemoryStore, Record, StoreError};

use crate::auth::{AuthError, CredentialService};
use crate::hosted::{HostedBackend, HostedConfig};
use crate::local::LocalBackend;

/// The backend the site runs against.
///
/// Hosted when `SITE_BACKEND_URL`/`SITE_BACKEND_KEY` are configured; otherwise an
/// in-memory store, which starts empty and only admits admins seeded into it.
#[derive(Clone, Debug)]
pub enum Backend {
    Hosted(HostedBackend),
    Local(LocalBackend<MemoryStore>),
}

impl Backend {
    pub fn from_env() -> Self {
        match HostedConfig::from_env() {
            Ok(config) => {
                tracing::info!(url = %config.url, "using hosted backend");
                Backend::Hosted(HostedBackend::new(config))
            }
            Err(e) => {
                tracing::warn!("{e}; falling back to in-memory backend");
                Backend::Local(LocalBackend::new(MemoryStore::new()))
            }
        }
    }

    pub fn local(store: MemoryStore) -> Self {
        Backend::Local(LocalBackend::new(store))
    }

    pub fn is_hosted(&self) -> bool {
        matches!(self, Backend::Hosted(_))
    }

    /// Token worth persisting between page loads. The local backend has none.
    pub fn session_token(&self) -> Option<String> {
        match self {
            Backend::Hosted(b) => b.session_token(),
            Backend::Local(_) => None,
        }
    }

    pub fn restore_session(&self, token: Option<String>) {
        if let Backend::Hosted(b) = self {
            b.restore_session(token);
        }
    }
}

impl CredentialService for Backend {
    async fn check_session(&self) -> Result<Option<AdminInfo>, AuthError> {
        match self {
            Backend::Hosted(b) => b.check_session().await,
            Backend::Local(b) => b.check_session().await,
        }
    }

    async fn login(&self, email: &str, password: &str) -> Result<AdminInfo, AuthError> {
        match self {
            Backend::Hosted(b) => b.login(email, password).await,
            Backend::Local(b) => b.login(email, password).await,
        }
    }

    async fn logout(&self) -> Result<(), AuthError> {
        match self {
            Backend::Hosted(b) => b.logout().await,
            Backend::Local(b) => b.logout().await,
        }
    }
}

impl DataService for Backend {
    async fn list<T: Record>(&self, filter: &Filter) -> Result<Vec<T>, StoreError> {
        match self {
            Backend::Hosted(b) => b.list(filter).await,
            Backend::Local(b) => b.list(filter).await,
        }
    }

    async fn get<T: Record>(&self, id: &str) -> Result<T, StoreError> {
        match self {
            Backend::Hosted(b) => b.get(id).await,
            Backend::Local(b) => b.get(id).await,
        }
    }

    async fn create<T: Record>(&self, record: &T) -> Result<T, StoreError> {
        match self {
            Backend::Hosted(b) => b.create(record).await,
            Backend::Local(b) => b.create(record).await,
        }
    }

    async fn update<T: Record>(&self, record: &T) -> Result<T, StoreError> {
        match self {
            Backend::Hosted(b) => b.update(record).await,
            Backend::Local(b) => b.update(record).await,
        }
    }

    async fn delete<T: Record>(&self, id: &str) -> Result<(), StoreError> {
        match self {
            Backend::Hosted(b) => b.delete::<T>(id).await,
            Backend::Local(b) => b.delete::<T>(id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Project;

    #[tokio::test]
    async fn test_local_backend_delegates() {
        let backend = Backend::local(MemoryStore::new());
        assert!(!backend.is_hosted());
        assert_eq!(backend.session_token(), None);

        let project = backend
            .create(&Project {
                title: "Clean water".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let fetched: Project = backend.get(&project.id).await.unwrap();
        assert_eq!(fetched.title, "Clean water");
        assert_eq!(backend.check_session().await.unwrap(), None);
    }
}
