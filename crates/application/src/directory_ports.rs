//! Repository port for the user/role/permission store.

use async_trait::async_trait;
use gatekeep_core::AppResult;
use gatekeep_domain::{Permission, PermissionName, Role, RoleName, User, Username};

/// Snapshot of one user's role grants, taken atomically from the store.
///
/// Each entry carries the role's permission set as it stood at snapshot time,
/// so a permission resolution never mixes state from before and after a
/// concurrent administrative mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserGrants {
    /// The user the snapshot belongs to.
    pub username: Username,
    /// The user's roles with their permission sets.
    pub roles: Vec<Role>,
}

/// Repository port for user, role, and permission storage.
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Creates a user. Fails with a conflict if the username is taken.
    async fn create_user(&self, username: Username) -> AppResult<User>;

    /// Creates a role. Fails with a conflict if the role name is taken.
    async fn create_role(&self, name: RoleName) -> AppResult<Role>;

    /// Creates a permission. Fails with a conflict if the name is taken.
    async fn create_permission(&self, name: PermissionName) -> AppResult<Permission>;

    /// Finds a user by username.
    async fn find_user(&self, username: &Username) -> AppResult<Option<User>>;

    /// Adds a role to a user's role set. Idempotent.
    async fn assign_role_to_user(&self, username: &Username, role: &RoleName) -> AppResult<()>;

    /// Adds a permission to a role's permission set. Idempotent.
    async fn assign_permission_to_role(
        &self,
        role: &RoleName,
        permission: &PermissionName,
    ) -> AppResult<()>;

    /// Returns an atomic grant snapshot for a user, or `None` if the user
    /// does not exist.
    async fn user_grants(&self, username: &Username) -> AppResult<Option<UserGrants>>;
}
