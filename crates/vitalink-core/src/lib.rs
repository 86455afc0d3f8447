//! Core library for VitaLink.
//!
//! This crate contains everything the front ends share:
//!
//! - `auth`: the session store - signup/login/logout over a persistent
//!   account registry
//! - `models`: account records and the role enum, in the wire format the
//!   web front end uses
//! - `storage`: the key-value persistence the session store writes through
//! - `config`: application configuration (remembered login, data paths)

pub mod auth;
pub mod config;
pub mod models;
pub mod storage;

pub use auth::{AuthError, Session, SessionStore};
pub use models::{Account, Role};
pub use storage::{FileStorage, MemoryStorage, Storage};
