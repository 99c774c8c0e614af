//! Folder hierarchy store.

pub mod error;
pub mod index;
pub mod store;

pub use error::FolderError;
pub use store::FolderStore;
