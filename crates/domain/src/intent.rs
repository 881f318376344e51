//! The closed set of intents the classifier can act on.

use std::str::FromStr;

use gatekeep_core::AppError;
use serde::Serialize;

/// A categorical label describing the action a user's input is requesting.
///
/// The set is closed: extending it requires new training examples and a new
/// required-permission entry. A model prediction outside this set degrades to
/// "not recognized" at the classifier boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// The user wants to edit a document.
    EditDocument,
    /// The user wants to view a document.
    ViewDocument,
    /// The user wants to delete a document.
    DeleteDocument,
}

impl Intent {
    /// Returns the stable wire label for this intent.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EditDocument => "edit_document",
            Self::ViewDocument => "view_document",
            Self::DeleteDocument => "delete_document",
        }
    }

    /// Returns all known intents.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Intent] = &[
            Intent::EditDocument,
            Intent::ViewDocument,
            Intent::DeleteDocument,
        ];

        ALL
    }

    /// Returns the permission names required to act on this intent.
    ///
    /// Total over the intent set. Duplicates would carry no meaning; the
    /// access decision treats the list as a set.
    #[must_use]
    pub fn required_permissions(&self) -> &'static [&'static str] {
        match self {
            Self::EditDocument => &["edit_document"],
            Self::ViewDocument => &["view_document"],
            Self::DeleteDocument => &["delete_document"],
        }
    }
}

impl FromStr for Intent {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "edit_document" => Ok(Self::EditDocument),
            "view_document" => Ok(Self::ViewDocument),
            "delete_document" => Ok(Self::DeleteDocument),
            _ => Err(AppError::Validation(format!(
                "unknown intent label '{value}'"
            ))),
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.as_str())
    }
}
