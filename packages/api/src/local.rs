//! Credentials checked against `admins` rows of any [`DataService`].
//!
//! The session is a single in-process admin id; it does not survive a restart.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use store::{Admin, AdminInfo, DataService, Filter, Record, StoreError};

use crate::auth::{verify_password, AuthError, CredentialService};

#[derive(Clone, Debug)]
pub struct LocalBackend<S> {
    store: S,
    session: Arc<Mutex<Option<String>>>,
}

impl<S: DataService> LocalBackend<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: Arc::new(Mutex::new(None)),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn session(&self) -> MutexGuard<'_, Option<String>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: DataService> CredentialService for LocalBackend<S> {
    async fn check_session(&self) -> Result<Option<AdminInfo>, AuthError> {
        let Some(id) = self.session().clone() else {
            return Ok(None);
        };
        match self.store.get::<Admin>(&id).await {
            Ok(admin) => Ok(Some(admin.to_info())),
            Err(StoreError::NotFound { .. }) => {
                // Account removed while signed in.
                self.session().take();
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn login(&self, email: &str, password: &str) -> Result<AdminInfo, AuthError> {
        let email = email.trim().to_lowercase();
        let filter = Filter::new().eq("email", email.as_str()).limit(1);
        let admins: Vec<Admin> = self.store.list(&filter).await?;

        let Some(admin) = admins.into_iter().next() else {
            return Err(AuthError::InvalidCredentials);
        };
        let Some(ref hash) = admin.password_hash else {
            return Err(AuthError::InvalidCredentials);
        };
        if !verify_password(password, hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        *self.session() = Some(admin.id.clone());
        Ok(admin.to_info())
    }

    async fn logout(&self) -> Result<(), AuthError> {
        self.session().take();
        Ok(())
    }
}

impl<S: DataService> DataService for LocalBackend<S> {
    async fn list<T: Record>(&self, filter: &Filter) -> Result<Vec<T>, StoreError> {
        self.store.list(filter).await
    }

    async fn get<T: Record>(&self, id: &str) -> Result<T, StoreError> {
        self.store.get(id).await
    }

    async fn create<T: Record>(&self, record: &T) -> Result<T, StoreError> {
        self.store.create(record).await
    }

    async fn update<T: Record>(&self, record: &T) -> Result<T, StoreError> {
        self.store.update(record).await
    }

    async fn delete<T: Record>(&self, id: &str) -> Result<(), StoreError> {
        self.store.delete::<T>(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::hash_password;
    use store::{MemoryStore, Role};

    async fn backend_with_admin(role: &str) -> LocalBackend<MemoryStore> {
        let store = MemoryStore::new();
        store
            .create(&Admin {
                id: String::new(),
                email: "director@foundation.org".to_string(),
                name: Some("Director".to_string()),
                role: role.to_string(),
                password_hash: Some(hash_password("s3cret-pass").unwrap()),
            })
            .await
            .unwrap();
        LocalBackend::new(store)
    }

    #[tokio::test]
    async fn test_no_session_initially() {
        let backend = backend_with_admin("super_admin").await;
        assert_eq!(backend.check_session().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_login_then_check_then_logout() {
        let backend = backend_with_admin("content_manager").await;

        let info = backend.login("  Director@Foundation.org ", "s3cret-pass").await.unwrap();
        assert_eq!(info.role, Some(Role::ContentManager));
        assert_eq!(info.display_name(), "Director");

        let current = backend.check_session().await.unwrap();
        assert_eq!(current, Some(info));

        backend.logout().await.unwrap();
        assert_eq!(backend.check_session().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email() {
        let backend = backend_with_admin("super_admin").await;
        assert_eq!(
            backend.login("director@foundation.org", "nope").await,
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            backend.login("someone@else.org", "s3cret-pass").await,
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(backend.check_session().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unknown_role_signs_in_without_role() {
        let backend = backend_with_admin("permission_admin").await;
        let info = backend.login("director@foundation.org", "s3cret-pass").await.unwrap();
        assert_eq!(info.role, None);
    }

    #[tokio::test]
    async fn test_deleted_account_ends_session() {
        let backend = backend_with_admin("super_admin").await;
        let info = backend.login("director@foundation.org", "s3cret-pass").await.unwrap();
        backend.delete::<Admin>(&info.id).await.unwrap();
        assert_eq!(backend.check_session().await.unwrap(), None);
    }
}
