//! Folder store errors.

use thiserror::Error;

use folderhub_core::error::{AppError, ErrorKind};
use folderhub_core::types::OrgId;

/// Failures reported by [`FolderStore`](super::FolderStore) operations.
///
/// Each precondition has its own variant; the first violated one is
/// returned and no partial result accompanies it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FolderError {
    /// The nil organization id was supplied.
    #[error("invalid organization id")]
    InvalidOrganization,

    /// No folder with that name exists in any organization.
    #[error("folder '{name}' does not exist")]
    FolderNotFound {
        /// The requested folder name.
        name: String,
    },

    /// A folder with that name exists, but only in other organizations.
    #[error("folder '{name}' does not exist in organization {org_id}")]
    FolderExistsInOtherOrganization {
        /// The requested folder name.
        name: String,
        /// The organization that was searched.
        org_id: OrgId,
    },

    /// No folder of the organization has that path.
    #[error("no folder at path '{path}' in organization {org_id}")]
    PathNotFound {
        /// The requested path.
        path: String,
        /// The organization that was searched.
        org_id: OrgId,
    },

    /// Source and destination paths are identical.
    #[error("cannot move folder '{path}' to itself")]
    CannotMoveToSelf {
        /// The shared path.
        path: String,
    },

    /// No folder has the source path.
    #[error("source folder '{path}' does not exist")]
    SourceNotFound {
        /// The requested source path.
        path: String,
    },

    /// No folder has the destination path.
    #[error("destination folder '{path}' does not exist")]
    DestinationNotFound {
        /// The requested destination path.
        path: String,
    },

    /// Source and destination belong to different organizations.
    #[error("cannot move folder '{source_path}' to '{destination_path}' in a different organization")]
    CrossOrganizationMove {
        /// Source folder path.
        source_path: String,
        /// Destination folder path.
        destination_path: String,
    },

    /// The destination lies inside the subtree being moved.
    #[error("cannot move folder '{source_path}' into its descendant '{destination_path}'")]
    CannotMoveIntoOwnDescendant {
        /// Source folder path.
        source_path: String,
        /// Destination folder path.
        destination_path: String,
    },
}

impl FolderError {
    /// The application-level category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FolderNotFound { .. }
            | Self::FolderExistsInOtherOrganization { .. }
            | Self::PathNotFound { .. }
            | Self::SourceNotFound { .. }
            | Self::DestinationNotFound { .. } => ErrorKind::NotFound,
            Self::InvalidOrganization
            | Self::CannotMoveToSelf { .. }
            | Self::CrossOrganizationMove { .. }
            | Self::CannotMoveIntoOwnDescendant { .. } => ErrorKind::Validation,
        }
    }
}

impl From<FolderError> for AppError {
    fn from(err: FolderError) -> Self {
        Self::with_source(err.kind(), err.to_string(), err)
    }
}
