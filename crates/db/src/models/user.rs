//! User entity model and DTOs.

use sqlx::FromRow;
use vylety_core::types::{Date, DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash and personal data; never render it wholesale.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub date_joined: Timestamp,
    pub dob: Date,
    pub street: String,
    pub city: String,
    pub number: String,
    pub postal_code: String,
    pub phone: String,
    pub school: String,
    pub grade: String,
    pub id_number: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user at registration.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dob: Date,
    pub street: String,
    pub city: String,
    pub number: String,
    pub postal_code: String,
    pub phone: String,
    pub school: String,
    pub grade: String,
    pub id_number: String,
}
