//! # API crate: credential and data backends for the foundation site
//!
//! Everything the UI needs from the outside world goes through two traits:
//! [`CredentialService`] (defined here) and [`store::DataService`]. This crate
//! provides the implementations.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | `CredentialService` contract, `AuthError`, Argon2 password hashing |
//! | [`hosted`] | REST client for the hosted database/auth service, configured from the environment |
//! | [`local`] | Credentials checked against `Admin` records of any `DataService` (tests, local preview) |
//! | [`backend`] | [`Backend`], the enum the UI actually holds: hosted when configured, local otherwise |

pub mod auth;
pub mod backend;
pub mod hosted;
pub mod local;

pub use auth::{AuthError, CredentialService};
pub use backend::Backend;
pub use hosted::{ConfigError, HostedBackend, HostedConfig};
pub use local::LocalBackend;
