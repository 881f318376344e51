//! User identity and role membership.

use std::collections::BTreeSet;

use gatekeep_core::AppResult;
use serde::Serialize;

use crate::security::{RoleName, validate_name};

/// Validated unique username.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Username(String);

impl Username {
    /// Creates a validated username.
    ///
    /// Trims surrounding whitespace; the result must be non-empty and at most
    /// [`crate::NAME_MAX_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        Ok(Self(validate_name("username", value)?))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// A registered user and the roles it currently holds.
///
/// The user owns its role-membership set; roles themselves are shared and
/// live independently of any user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: Username,
    roles: BTreeSet<RoleName>,
}

impl User {
    /// Creates a user with no role assignments.
    #[must_use]
    pub fn new(username: Username) -> Self {
        Self {
            username,
            roles: BTreeSet::new(),
        }
    }

    /// Creates a user holding the given roles.
    #[must_use]
    pub fn with_roles(username: Username, roles: BTreeSet<RoleName>) -> Self {
        Self { username, roles }
    }

    /// Returns the unique username.
    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the names of the roles held by this user.
    #[must_use]
    pub fn roles(&self) -> &BTreeSet<RoleName> {
        &self.roles
    }
}
