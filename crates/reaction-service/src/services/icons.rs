//! Icon catalog - reaction images discovered on disk
//!
//! The image root holds the default set as plain files and every other set as
//! a subdirectory. Nothing is cached here; the settings snapshot keeps the
//! set currently in use.

use std::io;
use std::path::{Path, PathBuf};

use reaction_core::entities::IconSet;
use tokio::fs;
use tracing::{instrument, warn};

/// Reads icon sets from the image root
#[derive(Debug, Clone)]
pub struct IconCatalog {
    root: PathBuf,
    url: String,
}

impl IconCatalog {
    /// Create a catalog over `root`, served publicly under `url`
    pub fn new(root: impl Into<PathBuf>, url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            url: url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of the named sets, sorted
    #[instrument(skip(self))]
    pub async fn list_sets(&self) -> Vec<String> {
        match scan(&self.root, EntryKind::Directory).await {
            Ok(names) => names,
            Err(e) => {
                warn!(root = %self.root.display(), error = %e, "Cannot list icon sets");
                Vec::new()
            }
        }
    }

    /// Load a set by name, `None` for the default set
    ///
    /// An unreadable directory yields an empty set.
    #[instrument(skip(self))]
    pub async fn load_set(&self, name: Option<&str>) -> IconSet {
        let dir = match name {
            Some(set) => self.root.join(set),
            None => self.root.clone(),
        };

        let files = match scan(&dir, EntryKind::File).await {
            Ok(files) => files,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Cannot read icon set");
                Vec::new()
            }
        };

        let mut extension = String::new();
        let mut icons = Vec::with_capacity(files.len());
        for file in &files {
            let path = Path::new(file);
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            // The whole set shares the extension of the last file scanned
            extension = path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or_default()
                .to_lowercase();
            icons.push(stem.to_string());
        }

        if icons.is_empty() {
            warn!(dir = %dir.display(), "Icon set is empty");
        }

        IconSet {
            name: name.map(str::to_string),
            extension,
            icons,
        }
    }

    /// Public URL of one icon of a set
    pub fn icon_url(&self, set: &IconSet, icon: &str) -> String {
        format!("{}/{}", self.url, set.relative_path(icon))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Directory,
}

/// Sorted names of the visible entries of one kind in `dir`
async fn scan(dir: &Path, kind: EntryKind) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    let mut read_dir = fs::read_dir(dir).await?;

    while let Some(entry) = read_dir.next_entry().await? {
        let Ok(file_type) = entry.file_type().await else {
            continue;
        };
        let matches = match kind {
            EntryKind::File => file_type.is_file(),
            EntryKind::Directory => file_type.is_dir(),
        };
        if !matches {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if !name.starts_with('.') {
                names.push(name.to_string());
            }
        }
    }

    names.sort();
    Ok(names)
}
