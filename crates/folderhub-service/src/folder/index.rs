//! Lookup indexes over the store's folder vector.
//!
//! Every index maps a key to positions in the owning vector. Position lists
//! are kept in ascending order so results come back in collection order.

use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;

use folderhub_core::types::OrgId;
use folderhub_entity::folder::{Folder, path};

/// Path, organization and name indexes for a folder collection.
#[derive(Debug, Clone, Default)]
pub struct FolderIndex {
    /// Ordered so a descendant prefix is a contiguous key range.
    by_path: BTreeMap<String, Vec<usize>>,
    by_org: HashMap<OrgId, Vec<usize>>,
    by_name: HashMap<String, Vec<usize>>,
    /// Organizations in first-seen order.
    orgs: Vec<OrgId>,
}

impl FolderIndex {
    /// Index a folder collection.
    pub fn build(folders: &[Folder]) -> Self {
        let mut index = Self::default();
        for (idx, folder) in folders.iter().enumerate() {
            index
                .by_path
                .entry(folder.path.clone())
                .or_default()
                .push(idx);
            index
                .by_name
                .entry(folder.name.clone())
                .or_default()
                .push(idx);
            let org = index.by_org.entry(folder.org_id).or_default();
            if org.is_empty() {
                index.orgs.push(folder.org_id);
            }
            org.push(idx);
        }
        index
    }

    /// Positions of folders with exactly this path.
    pub fn with_path(&self, path: &str) -> &[usize] {
        self.by_path.get(path).map_or(&[], Vec::as_slice)
    }

    /// Position of the first folder with exactly this path.
    pub fn first_with_path(&self, path: &str) -> Option<usize> {
        self.with_path(path).first().copied()
    }

    /// Positions of folders owned by `org_id`.
    pub fn in_org(&self, org_id: OrgId) -> &[usize] {
        self.by_org.get(&org_id).map_or(&[], Vec::as_slice)
    }

    /// Positions of folders named `name`, across all organizations.
    pub fn with_name(&self, name: &str) -> &[usize] {
        self.by_name.get(name).map_or(&[], Vec::as_slice)
    }

    /// Organizations in the order they first appear.
    pub fn organizations(&self) -> &[OrgId] {
        &self.orgs
    }

    /// Positions of strict descendants of `root`, in collection order.
    pub fn descendants(&self, root: &str) -> Vec<usize> {
        let prefix = path::descendant_prefix(root);
        let mut hits: Vec<usize> = self
            .by_path
            .range::<str, _>((Bound::Included(prefix.as_str()), Bound::Unbounded))
            .take_while(|(key, _)| key.starts_with(prefix.as_str()))
            .flat_map(|(_, positions)| positions.iter().copied())
            .collect();
        hits.sort_unstable();
        hits
    }

    /// Positions of `root` itself and its descendants, in collection order.
    pub fn subtree(&self, root: &str) -> Vec<usize> {
        let mut hits = self.descendants(root);
        hits.extend_from_slice(self.with_path(root));
        hits.sort_unstable();
        hits
    }

    /// Move position `idx` from `old_path` to `new_path` in the path index.
    pub fn relocate(&mut self, idx: usize, old_path: &str, new_path: &str) {
        if let Some(positions) = self.by_path.get_mut(old_path) {
            if let Ok(at) = positions.binary_search(&idx) {
                positions.remove(at);
            }
            if positions.is_empty() {
                self.by_path.remove(old_path);
            }
        }

        let positions = self.by_path.entry(new_path.to_string()).or_default();
        if let Err(at) = positions.binary_search(&idx) {
            positions.insert(at, idx);
        }
    }
}
