//! Domain logic for the excursion registration service.
//!
//! Everything in this crate is pure: no database, no HTTP. The `db` and
//! `api` crates build on these types.

pub mod application_status;
pub mod error;
pub mod forms;
pub mod types;
