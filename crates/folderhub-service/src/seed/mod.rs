//! Seed data for the folder store.
//!
//! The store itself never creates folders; its collection comes from the
//! bundled sample, a JSON file, or the random [`SampleGenerator`].

pub mod generator;
pub mod loader;

pub use folderhub_core::config::seed::DEFAULT_ORG_ID;
pub use generator::SampleGenerator;
pub use loader::{load, load_from_path, sample, write_to_path};
