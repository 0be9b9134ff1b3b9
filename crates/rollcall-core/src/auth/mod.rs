//! Authentication module for credentials and the session slot.
//!
//! This module provides:
//! - `derive_password`: the memorable student password rule
//! - `CredentialDirectory`: login against the staff and student credential spaces
//! - `SessionContext`: the current principal, persisted to a `KeyValueStore`
//!
//! Nothing here hashes or salts; the credential tables are fixtures.

pub mod credentials;
pub mod session;

pub use credentials::{derive_password, CredentialDirectory, LoginForm};
pub use session::{SessionContext, SESSION_KEY};
