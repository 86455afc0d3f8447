//! Data models shared across VitaLink front ends.
//!
//! - `Account`: a registered identity, exactly as stored in the registry
//! - `Role`: patient or professional

pub mod account;

pub use account::{Account, Role};
