//! Folder entity model.

use serde::{Deserialize, Serialize};

use folderhub_core::error::AppError;
use folderhub_core::result::AppResult;
use folderhub_core::types::{FolderId, OrgId};

use super::path;

/// A folder in an organization's hierarchy.
///
/// The serialized field names follow the seed data format
/// (`id`, `name`, `org_id`, `paths`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Folder name; equals the last segment of `path`.
    pub name: String,
    /// The owning organization.
    pub org_id: OrgId,
    /// Full materialized path (e.g., `alpha.bravo.charlie`).
    #[serde(rename = "paths")]
    pub path: String,
}

impl Folder {
    /// Create a folder record.
    pub fn new(
        id: FolderId,
        name: impl Into<String>,
        org_id: OrgId,
        path: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            org_id,
            path: path.into(),
        }
    }

    /// Create a root folder with a fresh identifier.
    pub fn root(name: impl Into<String>, org_id: OrgId) -> Self {
        let name = name.into();
        let path = name.clone();
        Self::new(FolderId::new(), name, org_id, path)
    }

    /// Create a child of `parent` with a fresh identifier.
    pub fn child_of(parent: &Folder, name: impl Into<String>) -> Self {
        let name = name.into();
        let path = path::join(&parent.path, &name);
        Self::new(FolderId::new(), name, parent.org_id, path)
    }

    /// Check if this is a root folder (single-segment path).
    pub fn is_root(&self) -> bool {
        !self.path.contains(path::SEPARATOR)
    }

    /// Depth in the tree (1 for roots).
    pub fn depth(&self) -> usize {
        path::depth(&self.path)
    }

    /// Path of the parent folder, if any.
    pub fn parent_path(&self) -> Option<&str> {
        path::parent_of(&self.path)
    }

    /// Whether this folder lies strictly below `other` in the same organization.
    pub fn is_descendant_of(&self, other: &Folder) -> bool {
        self.org_id == other.org_id && path::is_descendant_of(&self.path, &other.path)
    }

    /// Check the record is well formed: a real organization, a usable name,
    /// no empty segments, and a path that ends with the folder's own name.
    pub fn validate(&self) -> AppResult<()> {
        if self.org_id.is_nil() {
            return Err(AppError::validation(format!(
                "Folder '{}' belongs to the nil organization",
                self.name
            )));
        }
        if !path::is_valid_segment(&self.name) {
            return Err(AppError::validation(format!(
                "Folder {} has an invalid name '{}'",
                self.id, self.name
            )));
        }
        if !path::segments(&self.path).all(path::is_valid_segment) {
            return Err(AppError::validation(format!(
                "Folder '{}' has an empty segment in path '{}'",
                self.name, self.path
            )));
        }
        if path::last_segment(&self.path) != self.name {
            return Err(AppError::validation(format!(
                "Folder '{}' path '{}' does not end with its name",
                self.name, self.path
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org() -> OrgId {
        OrgId::new()
    }

    #[test]
    fn test_root_and_child() {
        let alpha = Folder::root("alpha", org());
        let bravo = Folder::child_of(&alpha, "bravo");

        assert!(alpha.is_root());
        assert!(!bravo.is_root());
        assert_eq!(bravo.path, "alpha.bravo");
        assert_eq!(bravo.org_id, alpha.org_id);
        assert_eq!(bravo.depth(), 2);
        assert_eq!(bravo.parent_path(), Some("alpha"));
        assert!(bravo.is_descendant_of(&alpha));
        assert!(!alpha.is_descendant_of(&bravo));
    }

    #[test]
    fn test_descendant_requires_same_org() {
        let alpha = Folder::root("alpha", org());
        let foreign = Folder::new(FolderId::new(), "bravo", org(), "alpha.bravo");
        assert!(!foreign.is_descendant_of(&alpha));
    }

    #[test]
    fn test_validate() {
        let id = FolderId::new();
        let org = org();
        assert!(Folder::new(id, "charlie", org, "alpha.bravo.charlie")
            .validate()
            .is_ok());
        assert!(Folder::new(id, "charlie", org, "alpha.bravo").validate().is_err());
        assert!(Folder::new(id, "charlie", org, "alpha..charlie").validate().is_err());
        assert!(Folder::new(id, "", org, "").validate().is_err());
        assert!(Folder::new(id, "a.b", org, "a.b").validate().is_err());
        assert!(Folder::new(id, "alpha", OrgId::nil(), "alpha").validate().is_err());
    }

    #[test]
    fn test_json_field_names() {
        let folder = Folder::new(FolderId::nil(), "bravo", OrgId::nil(), "alpha.bravo");
        let value = serde_json::to_value(&folder).expect("serialize");
        assert_eq!(value["paths"], "alpha.bravo");
        assert_eq!(value["org_id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(value["name"], "bravo");

        let parsed: Folder = serde_json::from_value(value).expect("deserialize");
        assert_eq!(parsed, folder);
    }
}
