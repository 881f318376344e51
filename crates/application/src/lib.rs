//! Application services and ports.

#![forbid(unsafe_code)]

mod access_service;
mod classifier_service;
mod directory_ports;
mod directory_service;

pub use access_service::{AccessDecision, AccessService, check_access, effective_permissions};
pub use classifier_service::{ClassificationError, IntentClassifier};
pub use directory_ports::{DirectoryRepository, UserGrants};
pub use directory_service::DirectoryService;
