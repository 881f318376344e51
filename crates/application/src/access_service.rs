//! Permission resolution and the access decision.

use std::collections::BTreeSet;
use std::sync::Arc;

use gatekeep_core::{AppError, AppResult};
use gatekeep_domain::{Intent, PermissionName, Username};
use tracing::debug;

use crate::classifier_service::IntentClassifier;
use crate::directory_ports::{DirectoryRepository, UserGrants};


/// Outcome of evaluating a user's utterance against its grants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDecision {
    /// The intent detected from the utterance.
    pub intent: Intent,
    /// Whether every required permission is covered by the effective set.
    pub granted: bool,
    /// The user's effective permissions at decision time.
    pub effective_permissions: BTreeSet<PermissionName>,
}

/// Computes a user's effective permission set from a grant snapshot.
///
/// The union over every held role's permission set. A user with zero roles
/// yields the empty set.
#[must_use]
pub fn effective_permissions(grants: &UserGrants) -> BTreeSet<PermissionName> {
    grants
        .roles
        .iter()
        .flat_map(|role| role.permissions().iter().cloned())
        .collect()
}

/// Decides whether the required permissions are covered by the effective set.
///
/// Pure set containment: an empty required set is vacuously satisfied.
#[must_use]
pub fn check_access(
    required: &BTreeSet<PermissionName>,
    effective: &BTreeSet<PermissionName>,
) -> bool {
    required.is_subset(effective)
}

/// Application service combining intent detection with permission checks.
#[derive(Clone)]
pub struct AccessService {
    repository: Arc<dyn DirectoryRepository>,
    classifier: Arc<IntentClassifier>,
}

impl AccessService {
    /// Creates a new access service from a store port and a fitted classifier.
    #[must_use]
    pub fn new(repository: Arc<dyn DirectoryRepository>, classifier: Arc<IntentClassifier>) -> Self {
        Self {
            repository,
            classifier,
        }
    }

    /// Evaluates whether a user may act on the intent of an utterance.
    ///
    /// Resolves the user's grant snapshot, detects the intent, and checks the
    /// intent's required permissions against the user's effective set.
    /// Classification failures collapse to
    /// [`AppError::IntentNotRecognized`] after a debug event; a missing user
    /// is reported as [`AppError::NotFound`]. Errors are terminal for the
    /// request, nothing is retried.
    pub async fn evaluate_access(
        &self,
        username: &str,
        input_text: &str,
    ) -> AppResult<AccessDecision> {
        let username = Username::new(username)?;

        let grants = self
            .repository
            .user_grants(&username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{username}' not found")))?;

        let intent = match self.classifier.detect(input_text) {
            Ok(intent) => intent,
            Err(error) => {
                debug!(username = %username, %error, "intent classification failed");
                return Err(AppError::IntentNotRecognized(
                    "input text did not map to a known intent".to_owned(),
                ));
            }
        };

        let required = required_permissions(intent)?;
        let effective = effective_permissions(&grants);

        Ok(AccessDecision {
            intent,
            granted: check_access(&required, &effective),
            effective_permissions: effective,
        })
    }
}

fn required_permissions(intent: Intent) -> AppResult<BTreeSet<PermissionName>> {
    intent
        .required_permissions()
        .iter()
        .map(|name| PermissionName::new(*name))
        .collect()
}
