//! Folder tree structures for hierarchical display.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use folderhub_core::types::FolderId;

use super::model::Folder;
use super::path;

/// A node in a folder tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder ID.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Full path.
    pub path: String,
    /// Depth level (1 for roots).
    pub depth: usize,
    /// Number of direct child folders.
    pub child_count: u64,
    /// Child folder nodes.
    pub children: Vec<FolderNode>,
}

/// A forest of folder nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderTree {
    /// The root node(s) of the tree.
    pub roots: Vec<FolderNode>,
    /// Total number of folders in the tree.
    pub total_folders: u64,
}

impl FolderTree {
    /// Create an empty folder tree.
    pub fn empty() -> Self {
        Self {
            roots: Vec::new(),
            total_folders: 0,
        }
    }

    /// Build a tree from a flat list of folders.
    ///
    /// A folder hangs under the first folder whose path equals its parent
    /// path. Folders whose parent is not in `folders` become roots, so a
    /// subtree slice produces a tree rooted at its top folder.
    pub fn from_folders(folders: &[Folder]) -> Self {
        if folders.is_empty() {
            return Self::empty();
        }

        let mut by_path: HashMap<&str, usize> = HashMap::with_capacity(folders.len());
        for (idx, folder) in folders.iter().enumerate() {
            by_path.entry(folder.path.as_str()).or_insert(idx);
        }

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); folders.len()];
        let mut roots = Vec::new();
        for (idx, folder) in folders.iter().enumerate() {
            match path::parent_of(&folder.path).and_then(|p| by_path.get(p)) {
                Some(&parent) if parent != idx => children[parent].push(idx),
                _ => roots.push(idx),
            }
        }

        Self {
            roots: roots
                .into_iter()
                .map(|idx| build_node(idx, folders, &children))
                .collect(),
            total_folders: folders.len() as u64,
        }
    }

    /// Visit every node depth-first, parents before children.
    pub fn walk(&self) -> impl Iterator<Item = &FolderNode> {
        let mut stack: Vec<&FolderNode> = self.roots.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

fn build_node(idx: usize, folders: &[Folder], children: &[Vec<usize>]) -> FolderNode {
    let folder = &folders[idx];
    let nodes: Vec<FolderNode> = children[idx]
        .iter()
        .map(|&child| build_node(child, folders, children))
        .collect();

    FolderNode {
        id: folder.id,
        name: folder.name.clone(),
        path: folder.path.clone(),
        depth: folder.depth(),
        child_count: nodes.len() as u64,
        children: nodes,
    }
}
