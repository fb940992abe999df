//! # Hosted backend: REST client for the managed database/auth service
//!
//! Auth endpoints live under `/auth/v1`, tables under `/rest/v1/<table>`.
//! Every request carries the public key as `apikey`; once signed in, the
//! session's access token replaces it as the bearer.
//!
//! A signed-in user is an admin only if a row with the same email exists in the
//! `admins` table; its `role` column decides what the panel shows.

mod config;
mod wire;

pub use config::{ConfigError, HostedConfig, KEY_VAR, URL_VAR};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use reqwest::{Method, RequestBuilder, Response};
use store::{Admin, AdminInfo, DataService, Filter, Record, StoreError};

use crate::auth::{AuthError, CredentialService};
use wire::{HostedUser, PasswordGrant, TokenResponse};

#[derive(Clone, Debug)]
pub struct HostedBackend {
    config: HostedConfig,
    http: reqwest::Client,
    token: Arc<Mutex<Option<String>>>,
}

fn network_store(e: reqwest::Error) -> StoreError {
    StoreError::Network(e.to_string())
}

fn network_auth(e: reqwest::Error) -> AuthError {
    AuthError::Network(e.to_string())
}

async fn ensure_success(response: Response, table: &str, id: &str) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(table, status = status.as_u16(), "hosted request failed");
    Err(wire::store_error(table, id, status.as_u16(), &body))
}

impl HostedBackend {
    pub fn new(config: HostedConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            token: Arc::new(Mutex::new(None)),
        }
    }

    fn token(&self) -> MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Access token of the current session, for persisting across reloads.
    pub fn session_token(&self) -> Option<String> {
        self.token().clone()
    }

    /// Reinstate a previously persisted access token.
    pub fn restore_session(&self, token: Option<String>) {
        *self.token() = token;
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.config.url)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.config.url)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let bearer = self
            .session_token()
            .unwrap_or_else(|| self.config.anon_key.clone());
        self.http
            .request(method, url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(bearer)
    }

    async fn admin_for(&self, email: &str) -> Result<Option<AdminInfo>, AuthError> {
        let filter = Filter::new().eq("email", email.to_lowercase()).limit(1);
        let admins: Vec<Admin> = self.list(&filter).await?;
        Ok(admins.first().map(Admin::to_info))
    }

    /// Rows returned with `Prefer: return=representation`.
    async fn representation<T: Record>(response: Response, id: &str) -> Result<T, StoreError> {
        let rows: Vec<T> = response
            .json()
            .await
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        rows.into_iter().next().ok_or_else(|| StoreError::NotFound {
            table: T::TABLE.to_string(),
            id: id.to_string(),
        })
    }
}

impl CredentialService for HostedBackend {
    async fn check_session(&self) -> Result<Option<AdminInfo>, AuthError> {
        if self.session_token().is_none() {
            return Ok(None);
        }
        let response = self
            .request(Method::GET, &self.auth_url("user"))
            .send()
            .await
            .map_err(network_auth)?;
        let status = response.status().as_u16();
        if status == 401 || status == 403 {
            self.token().take();
            return Ok(None);
        }
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Backend(format!("HTTP {status}: {body}")));
        }
        let user: HostedUser = response
            .json()
            .await
            .map_err(|e| AuthError::Backend(e.to_string()))?;
        let Some(email) = user.email else {
            return Ok(None);
        };
        self.admin_for(&email).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<AdminInfo, AuthError> {
        let email = email.trim().to_lowercase();
        let response = self
            .http
            .post(self.auth_url("token?grant_type=password"))
            .header("apikey", &self.config.anon_key)
            .json(&PasswordGrant {
                email: &email,
                password,
            })
            .send()
            .await
            .map_err(network_auth)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(wire::login_error(status.as_u16(), &body));
        }
        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Backend(e.to_string()))?;
        self.restore_session(Some(token.access_token));

        match self.admin_for(&email).await {
            Ok(Some(info)) => Ok(info),
            Ok(None) => {
                tracing::warn!("sign-in without an admins row rejected");
                self.token().take();
                Err(AuthError::InvalidCredentials)
            }
            Err(e) => {
                self.token().take();
                Err(e)
            }
        }
    }

    async fn logout(&self) -> Result<(), AuthError> {
        if self.session_token().is_none() {
            return Ok(());
        }
        let result = self
            .request(Method::POST, &self.auth_url("logout"))
            .send()
            .await;
        self.token().take();
        let response = result.map_err(network_auth)?;
        let status = response.status().as_u16();
        if response.status().is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        wire::logout_result(status, &body)
    }
}

impl DataService for HostedBackend {
    async fn list<T: Record>(&self, filter: &Filter) -> Result<Vec<T>, StoreError> {
        let response = self
            .request(Method::GET, &self.rest_url(T::TABLE))
            .query(&wire::rest_query(filter))
            .send()
            .await
            .map_err(network_store)?;
        let response = ensure_success(response, T::TABLE, "").await?;
        response
            .json()
            .await
            .map_err(|e| StoreError::Serialization(e.to_string()))
    }

    async fn get<T: Record>(&self, id: &str) -> Result<T, StoreError> {
        let rows: Vec<T> = self.list(&Filter::new().eq("id", id).limit(1)).await?;
        rows.into_iter().next().ok_or_else(|| StoreError::NotFound {
            table: T::TABLE.to_string(),
            id: id.to_string(),
        })
    }

    async fn create<T: Record>(&self, record: &T) -> Result<T, StoreError> {
        let body = wire::insert_body(serde_json::to_value(record)?);
        let response = self
            .request(Method::POST, &self.rest_url(T::TABLE))
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await
            .map_err(network_store)?;
        let response = ensure_success(response, T::TABLE, record.id()).await?;
        Self::representation(response, record.id()).await
    }

    async fn update<T: Record>(&self, record: &T) -> Result<T, StoreError> {
        let response = self
            .request(Method::PATCH, &self.rest_url(T::TABLE))
            .query(&[("id", format!("eq.{}", record.id()))])
            .header("Prefer", "return=representation")
            .json(record)
            .send()
            .await
            .map_err(network_store)?;
        let response = ensure_success(response, T::TABLE, record.id()).await?;
        Self::representation(response, record.id()).await
    }

    async fn delete<T: Record>(&self, id: &str) -> Result<(), StoreError> {
        let response = self
            .request(Method::DELETE, &self.rest_url(T::TABLE))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .send()
            .await
            .map_err(network_store)?;
        let response = ensure_success(response, T::TABLE, id).await?;
        Self::representation::<T>(response, id).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let backend = HostedBackend::new(HostedConfig::new("https://db.example.org/", "anon"));
        assert_eq!(backend.auth_url("user"), "https://db.example.org/auth/v1/user");
        assert_eq!(backend.rest_url("blogs"), "https://db.example.org/rest/v1/blogs");
    }

    #[test]
    fn test_session_token_roundtrip() {
        let backend = HostedBackend::new(HostedConfig::new("https://db.example.org", "anon"));
        assert_eq!(backend.session_token(), None);
        backend.restore_session(Some("jwt".to_string()));
        assert_eq!(backend.clone().session_token(), Some("jwt".to_string()));
        backend.restore_session(None);
        assert_eq!(backend.session_token(), None);
    }

    #[tokio::test]
    async fn test_no_token_means_no_session_without_network() {
        let backend = HostedBackend::new(HostedConfig::new("http://127.0.0.1:9", "anon"));
        assert_eq!(backend.check_session().await.unwrap(), None);
        backend.logout().await.unwrap();
    }
}
