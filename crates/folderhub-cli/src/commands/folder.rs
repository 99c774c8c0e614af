//! Folder query and move commands.

use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use folderhub_core::config::AppConfig;
use folderhub_core::error::AppError;
use folderhub_core::types::OrgId;
use folderhub_service::FolderError;

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// List all folders of an organization
    List {
        /// Organization ID (defaults to the configured one)
        #[arg(short, long)]
        org: Option<OrgId>,
    },
    /// List every descendant of a folder, by name
    Children {
        /// Organization ID (defaults to the configured one)
        #[arg(short, long)]
        org: Option<OrgId>,
        /// Name of the parent folder
        #[arg(short, long)]
        name: String,
    },
    /// Move a folder and its subtree under another folder
    Move {
        /// Path of the folder to move
        #[arg(long)]
        source: String,
        /// Path of the new parent folder
        #[arg(long)]
        destination: String,
    },
    /// Show the ancestors of a folder, root first
    Ancestors {
        /// Organization ID (defaults to the configured one)
        #[arg(short, long)]
        org: Option<OrgId>,
        /// Full path of the folder
        #[arg(short, long)]
        path: String,
    },
    /// Show an organization's folder tree
    Tree {
        /// Organization ID (defaults to the configured one)
        #[arg(short, long)]
        org: Option<OrgId>,
    },
    /// List the organizations in the dataset
    Orgs,
}

/// Organization display row
#[derive(Debug, Serialize, Tabled)]
struct OrgRow {
    /// Organization ID
    org_id: String,
    /// Number of folders
    folders: usize,
}

/// Execute folder commands
pub fn execute(
    command: &FolderCommand,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut store = super::open_store(config)?;
    let org_or_default = |org: &Option<OrgId>| org.unwrap_or(config.seed.default_org_id);

    match command {
        FolderCommand::List { org } => {
            let folders = store.list_by_organization(org_or_default(org))?;
            output::print_folders(&folders, format);
        }
        FolderCommand::Children { org, name } => {
            let folders = store.list_descendants(org_or_default(org), name)?;
            output::print_folders(&folders, format);
        }
        FolderCommand::Move {
            source,
            destination,
        } => {
            let folders = store.move_folder(source, destination)?;
            output::print_folders(folders, format);
            if format == OutputFormat::Table {
                output::print_success(&format!("Moved '{}' under '{}'", source, destination));
            }
        }
        FolderCommand::Ancestors { org, path } => {
            let folders = store.ancestors(org_or_default(org), path)?;
            output::print_folders(&folders, format);
        }
        FolderCommand::Tree { org } => {
            let tree = store.tree(org_or_default(org))?;
            output::print_tree(&tree, format);
        }
        FolderCommand::Orgs => {
            let rows = store
                .organizations()
                .into_iter()
                .map(|org_id| {
                    Ok(OrgRow {
                        org_id: org_id.to_string(),
                        folders: store.list_by_organization(org_id)?.len(),
                    })
                })
                .collect::<Result<Vec<OrgRow>, FolderError>>()?;
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
