use std::future::Future;

use store::{AdminInfo, StoreError};

/// Failures of the credential service.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("network error: {0}")]
    Network(String),
    #[error("backend error: {0}")]
    Backend(String),
}

impl From<StoreError> for AuthError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Network(msg) => AuthError::Network(msg),
            other => AuthError::Backend(other.to_string()),
        }
    }
}

/// Who is signed in, and the means to change it.
pub trait CredentialService {
    /// The current session's admin, `None` when there is no valid session.
    fn check_session(&self) -> impl Future<Output = Result<Option<AdminInfo>, AuthError>>;
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<AdminInfo, AuthError>>;
    fn logout(&self) -> impl Future<Output = Result<(), AuthError>>;
}
