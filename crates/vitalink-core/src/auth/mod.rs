//! Authentication module: the session store and its error taxonomy.
//!
//! This module provides:
//! - `SessionStore`: signup/login/logout over a persistent account registry
//! - `Session`: the signed-in account's public projection
//! - `AuthError`: everything the store can refuse with
//!
//! The store persists two fixed keys (`healthcare_users`,
//! `healthcare_user`) through a [`Storage`](crate::storage::Storage)
//! backend and is their only writer. Views consume the store's contract
//! and never read the keys directly.

pub mod error;
pub mod session;
pub mod store;

pub use error::AuthError;
pub use session::Session;
pub use store::SessionStore;
