//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`session`] -- signed session cookies backed by `user_sessions` rows.
//! - [`redirect`] -- login redirect targets (`?next=`).

pub mod password;
pub mod redirect;
pub mod session;
