use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Error returned when parsing a role from text fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(String);

/// The three actor roles of the platform.
///
/// Each role owns an independent session: a browser may hold a user
/// session, a creator session, and an admin session at the same time
/// without any shared identity between them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Creator,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::User, Role::Creator, Role::Admin];

    /// Canonical string representation, also the API namespace segment
    /// and the URL path prefix for this role's route subtree.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Creator => "creator",
            Self::Admin => "admin",
        }
    }

    /// Path of this role's login page.
    #[must_use]
    pub fn login_path(self) -> &'static str {
        match self {
            Self::User => "/user/login",
            Self::Creator => "/creator/login",
            Self::Admin => "/admin/login",
        }
    }

    /// Path of this role's post-login landing page.
    #[must_use]
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::User => "/user/dashboard",
            Self::Creator => "/creator/dashboard",
            Self::Admin => "/admin/dashboard",
        }
    }

    /// Persisted-storage key holding this role's bearer token.
    #[must_use]
    pub fn token_key(self) -> &'static str {
        match self {
            Self::User => "festivia.user.token",
            Self::Creator => "festivia.creator.token",
            Self::Admin => "festivia.admin.token",
        }
    }

    /// Persisted-storage key holding this role's serialized profile.
    #[must_use]
    pub fn profile_key(self) -> &'static str {
        match self {
            Self::User => "festivia.user.profile",
            Self::Creator => "festivia.creator.profile",
            Self::Admin => "festivia.admin.profile",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Self::User),
            "creator" => Ok(Self::Creator),
            "admin" => Ok(Self::Admin),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_roundtrip() {
        for (text, role) in [
            ("user", Role::User),
            ("creator", Role::Creator),
            ("admin", Role::Admin),
        ] {
            assert_eq!(role.as_str(), text);
            assert_eq!(role.to_string(), text);
            assert_eq!(Role::from_str(text).unwrap(), role);
        }
    }

    #[test]
    fn role_invalid() {
        assert!(Role::from_str("superadmin").is_err());
    }

    #[test]
    fn storage_keys_do_not_collide() {
        let mut keys: Vec<&str> = Role::ALL
            .iter()
            .flat_map(|role| [role.token_key(), role.profile_key()])
            .collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 6, "each role needs its own pair of keys");
    }

    #[test]
    fn route_paths_are_role_prefixed() {
        for role in Role::ALL {
            let prefix = format!("/{role}/");
            assert!(role.login_path().starts_with(&prefix));
            assert!(role.dashboard_path().starts_with(&prefix));
        }
    }
}
