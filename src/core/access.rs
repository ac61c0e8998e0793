use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;

/// Roles stored on user profiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    User,
    Admin,
    PropertyAdmin,
    SuperAdmin,
}

impl Role {
    pub fn can_access_admin(self) -> bool {
        !matches!(self, Role::User)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::PropertyAdmin => "property_admin",
            Role::SuperAdmin => "super_admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            "property_admin" => Ok(Role::PropertyAdmin),
            "super_admin" => Ok(Role::SuperAdmin),
            other => Err(format!("unknown role `{other}`")),
        }
    }
}

/// A row of the user profiles table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub user_id: Uuid,
    #[serde(default)]
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Decides the effective role of a signed-in account.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    super_admin_email: Option<String>,
}

impl AccessPolicy {
    pub fn new(super_admin_email: Option<String>) -> Self {
        Self {
            super_admin_email: super_admin_email
                .map(|email| email.trim().to_ascii_lowercase())
                .filter(|email| !email.is_empty()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.super_admin_email.clone())
    }

    /// The configured super-admin wins over any stored role; accounts without
    /// a profile are plain users.
    pub fn resolve_role(&self, email: &str, stored: Option<Role>) -> Role {
        let is_super_admin = self
            .super_admin_email
            .as_deref()
            .is_some_and(|configured| configured == email.trim().to_ascii_lowercase());
        if is_super_admin {
            tracing::debug!("configured super-admin signed in");
            Role::SuperAdmin
        } else {
            stored.unwrap_or_default()
        }
    }

    pub fn can_access_admin(&self, email: &str, stored: Option<Role>) -> bool {
        self.resolve_role(email, stored).can_access_admin()
    }
}
