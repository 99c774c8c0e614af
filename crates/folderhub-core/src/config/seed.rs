//! Seed dataset configuration.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::OrgId;

/// Organization that owns the bundled sample folders and that the demo
/// queries when nothing else is configured.
pub const DEFAULT_ORG_ID: OrgId = OrgId(Uuid::from_u128(0xc1556e17_b7c0_45a3_a6ae_9546248fb17a));

/// Where the initial folder collection comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Path to a JSON array of folders. `None` uses the bundled sample.
    #[serde(default)]
    pub file: Option<String>,
    /// Organization queried by the demo entry point.
    #[serde(default = "default_org_id")]
    pub default_org_id: OrgId,
    /// Settings for the random sample generator.
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            file: None,
            default_org_id: default_org_id(),
            generator: GeneratorConfig::default(),
        }
    }
}

/// Random sample generator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of organizations to generate.
    #[serde(default = "default_organizations")]
    pub organizations: usize,
    /// Folders generated per organization.
    #[serde(default = "default_folders_per_org")]
    pub folders_per_org: usize,
    /// Maximum path depth (1 = roots only).
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// RNG seed; equal seeds produce equal datasets.
    #[serde(default = "default_rng_seed")]
    pub rng_seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            organizations: default_organizations(),
            folders_per_org: default_folders_per_org(),
            max_depth: default_max_depth(),
            rng_seed: default_rng_seed(),
        }
    }
}

/// Default organization used by the demo.
pub fn default_org_id() -> OrgId {
    DEFAULT_ORG_ID
}

fn default_organizations() -> usize {
    3
}

fn default_folders_per_org() -> usize {
    20
}

fn default_max_depth() -> usize {
    4
}

fn default_rng_seed() -> u64 {
    2022
}
