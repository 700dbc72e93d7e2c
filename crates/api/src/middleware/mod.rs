//! Request extractors and request-aware layers.
//!
//! - [`auth::AuthUser`] -- requires a signed-in user, otherwise redirects to login.
//! - [`auth::CurrentUser`] -- the signed-in user if any; never rejects.
//! - [`error_pages::with_viewer`] -- error pages rendered with the visitor's navigation.

pub mod auth;
pub mod error_pages;
