//! In-memory user/role/permission store.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use gatekeep_application::{DirectoryRepository, UserGrants};
use gatekeep_core::{AppError, AppResult};
use gatekeep_domain::{Permission, PermissionName, Role, RoleName, User, Username};
use tokio::sync::RwLock;

/// The whole relationship graph behind one lock: a mutation commits entirely
/// before any grant snapshot can observe it.
#[derive(Debug, Default)]
struct DirectoryState {
    users: HashMap<Username, BTreeSet<RoleName>>,
    roles: HashMap<RoleName, BTreeSet<PermissionName>>,
    permissions: BTreeSet<PermissionName>,
}

/// In-memory directory repository implementation.
#[derive(Debug, Default)]
pub struct InMemoryDirectoryRepository {
    state: RwLock<DirectoryState>,
}

impl InMemoryDirectoryRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(DirectoryState::default()),
        }
    }
}

#[async_trait]
impl DirectoryRepository for InMemoryDirectoryRepository {
    async fn create_user(&self, username: Username) -> AppResult<User> {
        let mut state = self.state.write().await;

        if state.users.contains_key(&username) {
            return Err(AppError::Conflict(format!(
                "user '{username}' already exists"
            )));
        }

        state.users.insert(username.clone(), BTreeSet::new());
        Ok(User::new(username))
    }

    async fn create_role(&self, name: RoleName) -> AppResult<Role> {
        let mut state = self.state.write().await;

        if state.roles.contains_key(&name) {
            return Err(AppError::Conflict(format!("role '{name}' already exists")));
        }

        state.roles.insert(name.clone(), BTreeSet::new());
        Ok(Role::new(name))
    }

    async fn create_permission(&self, name: PermissionName) -> AppResult<Permission> {
        let mut state = self.state.write().await;

        if !state.permissions.insert(name.clone()) {
            return Err(AppError::Conflict(format!(
                "permission '{name}' already exists"
            )));
        }

        Ok(Permission::new(name))
    }

    async fn find_user(&self, username: &Username) -> AppResult<Option<User>> {
        let state = self.state.read().await;

        Ok(state
            .users
            .get(username)
            .map(|roles| User::with_roles(username.clone(), roles.clone())))
    }

    async fn assign_role_to_user(&self, username: &Username, role: &RoleName) -> AppResult<()> {
        let mut state = self.state.write().await;

        if !state.roles.contains_key(role) {
            return Err(AppError::NotFound(format!("role '{role}' not found")));
        }

        let Some(roles) = state.users.get_mut(username) else {
            return Err(AppError::NotFound(format!("user '{username}' not found")));
        };

        roles.insert(role.clone());
        Ok(())
    }

    async fn assign_permission_to_role(
        &self,
        role: &RoleName,
        permission: &PermissionName,
    ) -> AppResult<()> {
        let mut state = self.state.write().await;

        if !state.permissions.contains(permission) {
            return Err(AppError::NotFound(format!(
                "permission '{permission}' not found"
            )));
        }

        let Some(permissions) = state.roles.get_mut(role) else {
            return Err(AppError::NotFound(format!("role '{role}' not found")));
        };

        permissions.insert(permission.clone());
        Ok(())
    }

    async fn user_grants(&self, username: &Username) -> AppResult<Option<UserGrants>> {
        let state = self.state.read().await;

        Ok(state.users.get(username).map(|role_names| UserGrants {
            username: username.clone(),
            roles: role_names
                .iter()
                .map(|name| {
                    Role::with_permissions(
                        name.clone(),
                        state.roles.get(name).cloned().unwrap_or_default(),
                    )
                })
                .collect(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use gatekeep_application::DirectoryRepository;
    use gatekeep_core::AppError;
    use gatekeep_domain::{PermissionName, RoleName, Username};

    use super::InMemoryDirectoryRepository;

    fn username(value: &str) -> Username {
        Username::new(value).unwrap_or_else(|_| panic!("test"))
    }

    fn role_name(value: &str) -> RoleName {
        RoleName::new(value).unwrap_or_else(|_| panic!("test"))
    }

    fn permission_name(value: &str) -> PermissionName {
        PermissionName::new(value).unwrap_or_else(|_| panic!("test"))
    }

    #[tokio::test]
    async fn duplicate_user_is_a_conflict() {
        let repository = InMemoryDirectoryRepository::new();

        assert!(repository.create_user(username("alice")).await.is_ok());
        let duplicate = repository.create_user(username("alice")).await;
        assert!(matches!(duplicate, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn duplicate_permission_leaves_the_original_unchanged() {
        let repository = InMemoryDirectoryRepository::new();

        assert!(
            repository
                .create_permission(permission_name("edit_document"))
                .await
                .is_ok()
        );
        let duplicate = repository
            .create_permission(permission_name("edit_document"))
            .await;
        assert!(matches!(duplicate, Err(AppError::Conflict(_))));

        assert!(
            repository
                .create_role(role_name("editor"))
                .await
                .is_ok()
        );
        assert!(
            repository
                .assign_permission_to_role(&role_name("editor"), &permission_name("edit_document"))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn assigning_an_unknown_role_is_not_found() {
        let repository = InMemoryDirectoryRepository::new();
        assert!(repository.create_user(username("alice")).await.is_ok());

        let assigned = repository
            .assign_role_to_user(&username("alice"), &role_name("ghost"))
            .await;
        assert!(matches!(assigned, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn assigning_an_unknown_permission_is_not_found() {
        let repository = InMemoryDirectoryRepository::new();
        assert!(repository.create_role(role_name("editor")).await.is_ok());

        let assigned = repository
            .assign_permission_to_role(&role_name("editor"), &permission_name("ghost"))
            .await;
        assert!(matches!(assigned, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn assignments_are_idempotent() {
        let repository = InMemoryDirectoryRepository::new();
        assert!(repository.create_user(username("alice")).await.is_ok());
        assert!(repository.create_role(role_name("editor")).await.is_ok());

        for _ in 0..2 {
            assert!(
                repository
                    .assign_role_to_user(&username("alice"), &role_name("editor"))
                    .await
                    .is_ok()
            );
        }

        let user = repository.find_user(&username("alice")).await;
        assert!(user.is_ok());
        let Ok(Some(user)) = user else {
            panic!("test");
        };
        assert_eq!(user.roles().len(), 1);
    }

    #[tokio::test]
    async fn grant_snapshot_reflects_later_permission_mutations() {
        let repository = InMemoryDirectoryRepository::new();
        assert!(repository.create_user(username("alice")).await.is_ok());
        assert!(repository.create_role(role_name("editor")).await.is_ok());
        assert!(
            repository
                .create_permission(permission_name("edit_document"))
                .await
                .is_ok()
        );
        assert!(
            repository
                .assign_role_to_user(&username("alice"), &role_name("editor"))
                .await
                .is_ok()
        );

        let before = repository.user_grants(&username("alice")).await;
        let Ok(Some(before)) = before else {
            panic!("test");
        };
        assert!(before.roles[0].permissions().is_empty());

        assert!(
            repository
                .assign_permission_to_role(&role_name("editor"), &permission_name("edit_document"))
                .await
                .is_ok()
        );

        let after = repository.user_grants(&username("alice")).await;
        let Ok(Some(after)) = after else {
            panic!("test");
        };
        assert_eq!(after.roles[0].permissions().len(), 1);
    }

    #[tokio::test]
    async fn unknown_user_has_no_grant_snapshot() {
        let repository = InMemoryDirectoryRepository::new();
        let grants = repository.user_grants(&username("ghost")).await;
        assert!(matches!(grants, Ok(None)));
    }
}
