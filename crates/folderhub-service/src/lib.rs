//! # folderhub-service
//!
//! Service layer for FolderHub. [`FolderStore`] owns a flat collection of
//! folders and answers organization-scoped hierarchy queries and subtree
//! moves over their materialized paths. The [`seed`] module supplies the
//! initial collection.

pub mod folder;
pub mod seed;

pub use folder::{FolderError, FolderStore};
pub use seed::SampleGenerator;
