//! Deterministic random folder datasets.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::{Builder, Uuid};

use folderhub_core::config::seed::GeneratorConfig;
use folderhub_core::types::{FolderId, OrgId};
use folderhub_entity::folder::{Folder, path};

/// Base names for generated folders.
const WORDS: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india", "juliet",
    "kilo", "lima", "mike", "november", "oscar", "papa", "quebec", "romeo", "sierra", "tango",
    "uniform", "victor", "whiskey", "xray", "yankee", "zulu",
];

/// Chance that a new folder nests under an existing one rather than
/// starting a new root.
const NEST_PROBABILITY: f64 = 0.7;

/// Generates random folder forests for a number of organizations.
#[derive(Debug, Clone)]
pub struct SampleGenerator {
    config: GeneratorConfig,
}

impl SampleGenerator {
    /// Creates a generator from configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates the dataset. Equal configurations yield equal datasets.
    ///
    /// Names are unique within an organization, parents always precede
    /// their children, and no path is deeper than `max_depth`.
    pub fn generate(&self) -> Vec<Folder> {
        let mut rng = StdRng::seed_from_u64(self.config.rng_seed);
        let max_depth = self.config.max_depth.max(1);
        let mut folders: Vec<Folder> =
            Vec::with_capacity(self.config.organizations * self.config.folders_per_org);

        for _ in 0..self.config.organizations {
            let org_id = OrgId::from_uuid(random_uuid(&mut rng));
            let start = folders.len();
            let mut used: HashMap<&'static str, usize> = HashMap::new();

            for _ in 0..self.config.folders_per_org {
                let name = unique_name(&mut rng, &mut used);
                let id = FolderId::from_uuid(random_uuid(&mut rng));

                let parents: Vec<usize> = (start..folders.len())
                    .filter(|&idx| folders[idx].depth() < max_depth)
                    .collect();
                let parent = if !parents.is_empty() && rng.gen_bool(NEST_PROBABILITY) {
                    Some(parents[rng.gen_range(0..parents.len())])
                } else {
                    None
                };

                let folder_path = match parent {
                    Some(idx) => path::join(&folders[idx].path, &name),
                    None => name.clone(),
                };
                folders.push(Folder::new(id, name, org_id, folder_path));
            }
        }

        folders
    }
}

fn random_uuid(rng: &mut StdRng) -> Uuid {
    Builder::from_random_bytes(rng.r#gen()).into_uuid()
}

fn unique_name(rng: &mut StdRng, used: &mut HashMap<&'static str, usize>) -> String {
    let word = WORDS[rng.gen_range(0..WORDS.len())];
    let count = used.entry(word).or_insert(0);
    *count += 1;
    if *count == 1 {
        word.to_string()
    } else {
        format!("{word}-{count}")
    }
}
