//! In-memory folder store over materialized paths.

use tracing::{debug, info, warn};

use folderhub_core::types::OrgId;
use folderhub_entity::folder::{Folder, FolderTree, path};

use super::error::FolderError;
use super::index::FolderIndex;

/// Owns a flat folder collection and answers hierarchy queries over it.
///
/// Queries return owned copies; [`move_folder`](Self::move_folder) rewrites
/// paths in place and lends out the updated collection.
#[derive(Debug, Clone, Default)]
pub struct FolderStore {
    /// Records in their original order.
    folders: Vec<Folder>,
    /// Lookup indexes into `folders`.
    index: FolderIndex,
}

impl FolderStore {
    /// Creates a store owning `folders`.
    ///
    /// Malformed records are kept as supplied and logged.
    pub fn new(folders: Vec<Folder>) -> Self {
        for folder in &folders {
            if let Err(e) = folder.validate() {
                warn!(folder_id = %folder.id, error = %e, "Malformed folder record");
            }
        }

        let index = FolderIndex::build(&folders);
        debug!(
            folders = folders.len(),
            organizations = index.organizations().len(),
            "Folder store built"
        );

        Self { folders, index }
    }

    /// Number of folders in the store.
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// Whether the store holds no folders.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// The whole collection in its original order.
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// Organizations in the order they first appear, without the nil one.
    pub fn organizations(&self) -> Vec<OrgId> {
        self.index
            .organizations()
            .iter()
            .copied()
            .filter(|org_id| !org_id.is_nil())
            .collect()
    }

    /// The first folder with exactly this path, in any organization.
    pub fn find_by_path(&self, path: &str) -> Option<&Folder> {
        self.index
            .first_with_path(path)
            .map(|idx| &self.folders[idx])
    }

    /// Lists the folders owned by `org_id`.
    pub fn list_by_organization(&self, org_id: OrgId) -> Result<Vec<Folder>, FolderError> {
        ensure_org(org_id)?;

        let folders: Vec<Folder> = self
            .index
            .in_org(org_id)
            .iter()
            .map(|&idx| self.folders[idx].clone())
            .collect();

        debug!(org_id = %org_id, count = folders.len(), "Listed organization folders");
        Ok(folders)
    }

    /// Lists every descendant of the first folder named `name` in `org_id`.
    ///
    /// When `org_id` has no such folder, the error says whether the name
    /// exists in some other organization.
    pub fn list_descendants(
        &self,
        org_id: OrgId,
        name: &str,
    ) -> Result<Vec<Folder>, FolderError> {
        ensure_org(org_id)?;

        let parent = self.find_named(org_id, name)?;
        let folders: Vec<Folder> = self
            .index
            .descendants(&parent.path)
            .into_iter()
            .map(|idx| &self.folders[idx])
            .filter(|folder| folder.org_id == org_id)
            .cloned()
            .collect();

        debug!(
            org_id = %org_id,
            parent = %parent.path,
            count = folders.len(),
            "Listed descendant folders"
        );
        Ok(folders)
    }

    /// Lists the ancestors of the folder at `path` within `org_id`, root first.
    pub fn ancestors(&self, org_id: OrgId, path: &str) -> Result<Vec<Folder>, FolderError> {
        ensure_org(org_id)?;

        if self.first_in_org(self.index.with_path(path), org_id).is_none() {
            return Err(FolderError::PathNotFound {
                path: path.to_string(),
                org_id,
            });
        }

        let mut ancestors = Vec::new();
        let mut current = path::parent_of(path);
        while let Some(ancestor) = current {
            if let Some(folder) = self.first_in_org(self.index.with_path(ancestor), org_id) {
                ancestors.push(folder.clone());
            }
            current = path::parent_of(ancestor);
        }
        ancestors.reverse();
        Ok(ancestors)
    }

    /// Builds the folder tree of `org_id`.
    pub fn tree(&self, org_id: OrgId) -> Result<FolderTree, FolderError> {
        let folders = self.list_by_organization(org_id)?;
        Ok(FolderTree::from_folders(&folders))
    }

    /// Moves the folder at `source_path`, with its subtree, under the folder
    /// at `destination_path`.
    ///
    /// Every precondition is checked before the first path is rewritten, so
    /// an error leaves the store untouched. Only folders of the source's
    /// organization whose path is the source path or lies below it at a
    /// separator boundary are rewritten.
    pub fn move_folder(
        &mut self,
        source_path: &str,
        destination_path: &str,
    ) -> Result<&[Folder], FolderError> {
        if source_path == destination_path {
            return Err(FolderError::CannotMoveToSelf {
                path: source_path.to_string(),
            });
        }

        let source_idx =
            self.index
                .first_with_path(source_path)
                .ok_or_else(|| FolderError::SourceNotFound {
                    path: source_path.to_string(),
                })?;
        let destination_idx = self
            .index
            .first_with_path(destination_path)
            .ok_or_else(|| FolderError::DestinationNotFound {
                path: destination_path.to_string(),
            })?;

        let source = &self.folders[source_idx];
        let destination = &self.folders[destination_idx];

        if source.org_id != destination.org_id {
            return Err(FolderError::CrossOrganizationMove {
                source_path: source_path.to_string(),
                destination_path: destination_path.to_string(),
            });
        }

        if path::is_descendant_of(&destination.path, &source.path) {
            return Err(FolderError::CannotMoveIntoOwnDescendant {
                source_path: source_path.to_string(),
                destination_path: destination_path.to_string(),
            });
        }

        let org_id = source.org_id;
        let old_root = source.path.clone();
        let new_root = path::join(&destination.path, &source.name);

        let moved: Vec<usize> = self
            .index
            .subtree(&old_root)
            .into_iter()
            .filter(|&idx| self.folders[idx].org_id == org_id)
            .collect();

        for &idx in &moved {
            let folder = &mut self.folders[idx];
            if let Some(new_path) = path::rebase(&folder.path, &old_root, &new_root) {
                let old_path = std::mem::replace(&mut folder.path, new_path);
                self.index.relocate(idx, &old_path, &folder.path);
                debug!(from = %old_path, to = %folder.path, "Folder path rewritten");
            }
        }

        info!(
            org_id = %org_id,
            source = %old_root,
            destination = %destination_path,
            new_path = %new_root,
            moved = moved.len(),
            "Folder moved"
        );

        Ok(&self.folders)
    }

    /// The first folder of `org_id` named `name`, or the two-tier not-found error.
    fn find_named(&self, org_id: OrgId, name: &str) -> Result<&Folder, FolderError> {
        let named = self.index.with_name(name);
        match self.first_in_org(named, org_id) {
            Some(folder) => Ok(folder),
            None if named.is_empty() => Err(FolderError::FolderNotFound {
                name: name.to_string(),
            }),
            None => Err(FolderError::FolderExistsInOtherOrganization {
                name: name.to_string(),
                org_id,
            }),
        }
    }

    fn first_in_org(&self, positions: &[usize], org_id: OrgId) -> Option<&Folder> {
        positions
            .iter()
            .map(|&idx| &self.folders[idx])
            .find(|folder| folder.org_id == org_id)
    }
}

impl From<Vec<Folder>> for FolderStore {
    fn from(folders: Vec<Folder>) -> Self {
        Self::new(folders)
    }
}

/// Rejects the reserved nil organization.
fn ensure_org(org_id: OrgId) -> Result<(), FolderError> {
    if org_id.is_nil() {
        return Err(FolderError::InvalidOrganization);
    }
    Ok(())
}
