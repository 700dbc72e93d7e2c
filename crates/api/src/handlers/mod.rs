//! Request handlers, one module per page group.

pub mod accounts;
pub mod applications;
pub mod events;
pub mod pages;
