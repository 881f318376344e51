//! Roles and permissions.

use std::collections::BTreeSet;

use gatekeep_core::{AppError, AppResult};
use serde::Serialize;

use crate::NAME_MAX_LENGTH;

/// Validated unique role name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RoleName(String);

impl RoleName {
    /// Creates a validated role name.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        Ok(Self(validate_name("role name", value)?))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for RoleName {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Validated unique permission name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PermissionName(String);

impl PermissionName {
    /// Creates a validated permission name.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        Ok(Self(validate_name("permission name", value)?))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for PermissionName {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// A named, reusable bundle of permissions assignable to users.
///
/// The role owns its permission-membership set; permissions are shared leaf
/// entities and live independently of any role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    name: RoleName,
    permissions: BTreeSet<PermissionName>,
}

impl Role {
    /// Creates a role with no permission grants.
    #[must_use]
    pub fn new(name: RoleName) -> Self {
        Self {
            name,
            permissions: BTreeSet::new(),
        }
    }

    /// Creates a role holding the given permissions.
    #[must_use]
    pub fn with_permissions(name: RoleName, permissions: BTreeSet<PermissionName>) -> Self {
        Self { name, permissions }
    }

    /// Returns the unique role name.
    #[must_use]
    pub fn name(&self) -> &RoleName {
        &self.name
    }

    /// Returns the names of the permissions held by this role.
    #[must_use]
    pub fn permissions(&self) -> &BTreeSet<PermissionName> {
        &self.permissions
    }
}

/// An atomic named capability with no internal structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permission {
    name: PermissionName,
}

impl Permission {
    /// Creates a permission.
    #[must_use]
    pub fn new(name: PermissionName) -> Self {
        Self { name }
    }

    /// Returns the unique permission name.
    #[must_use]
    pub fn name(&self) -> &PermissionName {
        &self.name
    }
}

pub(crate) fn validate_name(kind: &str, value: impl Into<String>) -> AppResult<String> {
    let value = value.into();
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{kind} must not be empty")));
    }

    if trimmed.chars().count() > NAME_MAX_LENGTH {
        return Err(AppError::Validation(format!(
            "{kind} must not exceed {NAME_MAX_LENGTH} characters"
        )));
    }

    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{PermissionName, Role, RoleName};

    #[test]
    fn role_name_is_trimmed() {
        let name = RoleName::new(" editor ");
        assert!(name.is_ok());
        assert_eq!(name.unwrap_or_else(|_| panic!("test")).as_str(), "editor");
    }

    #[test]
    fn empty_permission_name_is_rejected() {
        assert!(PermissionName::new("  ").is_err());
    }

    #[test]
    fn overlong_role_name_is_rejected() {
        assert!(RoleName::new("r".repeat(81)).is_err());
    }

    #[test]
    fn role_permission_membership_is_a_set() {
        let Ok(name) = RoleName::new("editor") else {
            panic!("test");
        };
        let Ok(permission) = PermissionName::new("edit_document") else {
            panic!("test");
        };
        let permissions: BTreeSet<PermissionName> =
            [permission.clone(), permission].into_iter().collect();
        let role = Role::with_permissions(name, permissions);
        assert_eq!(role.permissions().len(), 1);
    }

    #[test]
    fn new_role_holds_no_permissions() {
        let Ok(name) = RoleName::new("viewer") else {
            panic!("test");
        };
        assert!(Role::new(name).permissions().is_empty());
    }
}
