//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use folderhub_entity::folder::{Folder, FolderTree};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
pub struct FolderRow {
    /// Name
    name: String,
    /// Path
    path: String,
    /// Organization
    org_id: String,
    /// Folder ID
    id: String,
}

impl From<&Folder> for FolderRow {
    fn from(folder: &Folder) -> Self {
        Self {
            name: folder.name.clone(),
            path: folder.path.clone(),
            org_id: folder.org_id.to_string(),
            id: folder.id.to_string(),
        }
    }
}

/// Print folders in the selected format
pub fn print_folders(folders: &[Folder], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let rows: Vec<FolderRow> = folders.iter().map(FolderRow::from).collect();
            print_list(&rows, format);
        }
        // The seed wire format, so output can be fed back in with --seed.
        OutputFormat::Json => print_json(&folders),
    }
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                let table = Table::new(items).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{}", json);
        }
    }
}

/// Print a single item as pretty JSON
pub fn print_json<T: Serialize>(item: &T) {
    let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
    println!("{}", json);
}

/// Print a folder tree with box-drawing indentation
pub fn print_tree(tree: &FolderTree, format: OutputFormat) {
    if format == OutputFormat::Json {
        print_json(tree);
        return;
    }
    if tree.roots.is_empty() {
        println!("No results found.");
        return;
    }
    for node in tree.walk() {
        let indent = "  ".repeat(node.depth.saturating_sub(1));
        println!("{}├── {} ({})", indent, node.name, node.child_count);
    }
    println!("{} folder(s)", tree.total_folders);
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}
