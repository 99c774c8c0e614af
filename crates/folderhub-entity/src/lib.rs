//! # folderhub-entity
//!
//! Domain entity models for FolderHub. Folders are flat records whose
//! position in the hierarchy is encoded by a dot-delimited materialized
//! path; the [`folder::path`] module holds the helpers every other crate
//! uses to reason about ancestry.

pub mod folder;
