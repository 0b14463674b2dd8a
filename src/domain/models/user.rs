use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, FromRow, Row};
use uuid::Uuid;

use super::{parsed_column, UnknownVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Guest,
    Host,
}

impl UserRole {
    pub const ALL: [UserRole; 2] = [UserRole::Guest, UserRole::Host];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Guest => "guest",
            UserRole::Host => "host",
        }
    }

    pub fn can_host(&self) -> bool {
        matches!(self, UserRole::Host)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guest" => Ok(UserRole::Guest),
            "host" => Ok(UserRole::Host),
            other => Err(UnknownVariant { kind: "role", value: other.to_string() }),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
}

pub struct NewUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

impl User {
    pub fn new(params: NewUserParams) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: params.username,
            email: params.email,
            password_hash: params.password_hash,
            first_name: params.first_name,
            last_name: params.last_name,
            role: params.role,
            is_superuser: false,
            created_at: Utc::now(),
        }
    }
}

impl<'r> FromRow<'r, SqliteRow> for User {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: parsed_column(row, "id")?,
            username: row.try_get("username")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            role: parsed_column(row, "role")?,
            is_superuser: row.try_get("is_superuser")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
