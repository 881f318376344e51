//! Administrative operations on users, roles, and permissions.

use std::sync::Arc;

use gatekeep_core::AppResult;
use gatekeep_domain::{Permission, PermissionName, Role, RoleName, User, Username};

use crate::directory_ports::DirectoryRepository;


/// Application service for user/role/permission administration.
#[derive(Clone)]
pub struct DirectoryService {
    repository: Arc<dyn DirectoryRepository>,
}

impl DirectoryService {
    /// Creates a new directory service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn DirectoryRepository>) -> Self {
        Self { repository }
    }

    /// Registers a user under a unique username.
    pub async fn create_user(&self, username: &str) -> AppResult<User> {
        self.repository.create_user(Username::new(username)?).await
    }

    /// Creates a role under a unique name.
    pub async fn create_role(&self, name: &str) -> AppResult<Role> {
        self.repository.create_role(RoleName::new(name)?).await
    }

    /// Creates a permission under a unique name.
    pub async fn create_permission(&self, name: &str) -> AppResult<Permission> {
        self.repository
            .create_permission(PermissionName::new(name)?)
            .await
    }

    /// Finds a user by username.
    pub async fn find_user(&self, username: &str) -> AppResult<Option<User>> {
        self.repository.find_user(&Username::new(username)?).await
    }

    /// Assigns an existing role to an existing user.
    ///
    /// Membership is a set: assigning an already-held role succeeds without
    /// effect.
    pub async fn assign_role_to_user(&self, username: &str, role: &str) -> AppResult<()> {
        self.repository
            .assign_role_to_user(&Username::new(username)?, &RoleName::new(role)?)
            .await
    }

    /// Assigns an existing permission to an existing role.
    ///
    /// Affects every user holding the role from the next grant snapshot on.
    pub async fn assign_permission_to_role(&self, role: &str, permission: &str) -> AppResult<()> {
        self.repository
            .assign_permission_to_role(&RoleName::new(role)?, &PermissionName::new(permission)?)
            .await
    }
}
