use std::collections::BTreeSet;

use gatekeep_domain::{Intent, Permission, PermissionName, Role, User};
use serde::{Deserialize, Serialize};

/// Health response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service liveness indicator.
    pub status: &'static str,
}

/// Incoming payload for user registration.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Unique username.
    pub username: String,
}

/// API representation of a user.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// Unique username.
    pub username: String,
    /// Names of the roles held by the user.
    pub roles: Vec<String>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            username: value.username().as_str().to_owned(),
            roles: value
                .roles()
                .iter()
                .map(|role| role.as_str().to_owned())
                .collect(),
        }
    }
}

/// Incoming payload for role creation.
#[derive(Debug, Deserialize)]
pub struct CreateRoleRequest {
    /// Unique role name.
    pub name: String,
}

/// API representation of a role.
#[derive(Debug, Serialize)]
pub struct RoleResponse {
    /// Unique role name.
    pub name: String,
    /// Names of the permissions held by the role.
    pub permissions: Vec<String>,
}

impl From<Role> for RoleResponse {
    fn from(value: Role) -> Self {
        Self {
            name: value.name().as_str().to_owned(),
            permissions: value
                .permissions()
                .iter()
                .map(|permission| permission.as_str().to_owned())
                .collect(),
        }
    }
}

/// Incoming payload for permission creation.
#[derive(Debug, Deserialize)]
pub struct CreatePermissionRequest {
    /// Unique permission name.
    pub name: String,
}

/// API representation of a permission.
#[derive(Debug, Serialize)]
pub struct PermissionResponse {
    /// Unique permission name.
    pub name: String,
}

impl From<Permission> for PermissionResponse {
    fn from(value: Permission) -> Self {
        Self {
            name: value.name().as_str().to_owned(),
        }
    }
}

/// Incoming payload for assigning a role to a user.
#[derive(Debug, Deserialize)]
pub struct AssignRoleRequest {
    /// Name of the role to assign.
    pub role: String,
}

/// Incoming payload for assigning a permission to a role.
#[derive(Debug, Deserialize)]
pub struct AssignPermissionRequest {
    /// Name of the permission to assign.
    pub permission: String,
}

/// Incoming payload for an access check.
#[derive(Debug, Deserialize)]
pub struct CheckAccessRequest {
    /// User requesting the action.
    pub username: String,
    /// Free-text utterance describing the action.
    pub input_text: String,
}

/// Outcome of an access check.
#[derive(Debug, Serialize)]
pub struct CheckAccessResponse {
    /// User the decision applies to.
    pub username: String,
    /// Detected intent label.
    pub intent: Intent,
    /// Whether access is granted.
    pub has_access: bool,
    /// The user's effective permissions at decision time.
    pub user_permissions: BTreeSet<PermissionName>,
}
