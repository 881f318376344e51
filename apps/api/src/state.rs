use gatekeep_application::{AccessService, DirectoryService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Intent-gated access evaluation.
    pub access_service: AccessService,
    /// User/role/permission administration.
    pub directory_service: DirectoryService,
}
