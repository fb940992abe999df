//! Authentication: the credential service contract and password hashing.

mod password;
mod service;

pub use password::{hash_password, verify_password};
pub use service::{AuthError, CredentialService};
