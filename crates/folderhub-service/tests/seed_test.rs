//! Seed datasets driven through the folder store.

use pretty_assertions::assert_eq;
use rstest::rstest;

use folderhub_core::config::seed::{GeneratorConfig, SeedConfig};
use folderhub_core::types::OrgId;
use folderhub_entity::folder::{Folder, path};
use folderhub_service::seed::{self, DEFAULT_ORG_ID};
use folderhub_service::{FolderError, FolderStore, SampleGenerator};

fn generated(rng_seed: u64) -> Vec<Folder> {
    SampleGenerator::new(GeneratorConfig {
        organizations: 3,
        folders_per_org: 60,
        max_depth: 5,
        rng_seed,
    })
    .generate()
}

/// Descendants computed by a plain scan over the collection.
fn scan_descendants(folders: &[Folder], org: OrgId, name: &str) -> Option<Vec<Folder>> {
    let parent = folders.iter().find(|f| f.org_id == org && f.name == name)?;
    Some(
        folders
            .iter()
            .filter(|f| f.org_id == org && path::is_descendant_of(&f.path, &parent.path))
            .cloned()
            .collect(),
    )
}

#[test]
fn sample_default_org_queries() {
    let store = FolderStore::new(seed::sample().expect("sample parses"));

    let folders = store.list_by_organization(DEFAULT_ORG_ID).expect("valid org");
    assert!(folders.iter().all(|f| f.org_id == DEFAULT_ORG_ID));
    assert_eq!(folders.len(), 12);

    let got = store
        .list_descendants(DEFAULT_ORG_ID, "alpha")
        .expect("alpha exists");
    let paths: Vec<&str> = got.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "alpha.bravo",
            "alpha.bravo.charlie",
            "alpha.delta",
            "alpha.delta.echo"
        ]
    );

    assert_eq!(
        store.list_descendants(DEFAULT_ORG_ID, "lima"),
        Err(FolderError::FolderExistsInOtherOrganization {
            name: "lima".into(),
            org_id: DEFAULT_ORG_ID,
        })
    );
}

#[test]
fn config_without_file_loads_sample() {
    let folders = seed::load(&SeedConfig::default()).expect("sample loads");
    assert_eq!(folders, seed::sample().expect("sample parses"));
}

#[test]
fn written_seed_reloads_identically() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("folders.json");
    let folders = generated(11);

    seed::write_to_path(&file, &folders).expect("write");
    let config = SeedConfig {
        file: Some(file.to_string_lossy().into_owned()),
        ..SeedConfig::default()
    };
    assert_eq!(seed::load(&config).expect("reload"), folders);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
fn descendants_match_full_scan(#[case] rng_seed: u64) {
    let folders = generated(rng_seed);
    let store = FolderStore::new(folders.clone());

    for org in store.organizations() {
        for folder in folders.iter().filter(|f| f.org_id == org) {
            let expected = scan_descendants(&folders, org, &folder.name).expect("named folder");
            let got = store.list_descendants(org, &folder.name).expect("named folder");
            assert_eq!(got, expected);
        }
    }
}

#[rstest]
#[case(4)]
#[case(5)]
fn moves_rewrite_exactly_the_subtree(#[case] rng_seed: u64) {
    let folders = generated(rng_seed);
    let org = folders[0].org_id;
    let in_org: Vec<&Folder> = folders.iter().filter(|f| f.org_id == org).collect();

    let mut checked = 0;
    for source in &in_org {
        for destination in &in_org {
            if source.path == destination.path
                || path::is_descendant_of(&destination.path, &source.path)
            {
                continue;
            }

            let mut store = FolderStore::new(folders.clone());
            let moved = store
                .move_folder(&source.path, &destination.path)
                .expect("legal move");
            let new_root = path::join(&destination.path, &source.name);

            for (before, after) in folders.iter().zip(moved) {
                assert_eq!(before.id, after.id);
                let expected = if before.org_id == org {
                    path::rebase(&before.path, &source.path, &new_root)
                        .unwrap_or_else(|| before.path.clone())
                } else {
                    before.path.clone()
                };
                assert_eq!(after.path, expected);
            }

            checked += 1;
            if checked == 50 {
                return;
            }
        }
    }
}
