//! Discovery of Live sets below a root folder.
//!
//! The scan walks the tree once, skips backup folders, decodes each set's
//! project icon and returns entries ordered newest first.

mod icon;


pub use icon::{icon_size, load_icon};

use bevy::log::{debug, info, warn};
use image::RgbaImage;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use crate::constants::{BACKUP_MARKER, PROJECT_EXTENSION};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("projects folder {path:?} is not accessible: {source}")]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("projects folder {0:?} is not a directory")]
    RootNotDirectory(PathBuf),
}

/// One discovered Live set.
#[derive(Debug, Clone)]
pub struct ProjectEntry {
    /// Last modification time of the set file, used for ordering
    pub modified: SystemTime,
    pub path: PathBuf,
    /// Decoded icon, already resized to a square of [`icon_size`]
    pub icon: Option<RgbaImage>,
}

impl ProjectEntry {
    /// Display name: the file name without its extension.
    pub fn name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Folder containing the set file.
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new(""))
    }
}

/// Scan `root` for Live sets, newest first.
///
/// Fails only when the root itself cannot be read. Problems below the root
/// (unreadable folders, sets that vanish mid-scan, broken icons) are logged
/// and the affected entry is skipped or left without an icon.
pub fn scan_projects(root: &Path, row_height: u32) -> Result<Vec<ProjectEntry>, ScanError> {
    check_root(root)?;

    let size = icon_size(row_height);
    let mut projects = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_backup_dir(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable path during scan: {}", e);
                continue;
            }
        };

        // Follows symlinks to sets; linked folders are still not descended
        if !is_project_file(entry.path()) || !entry.path().is_file() {
            continue;
        }

        // The set may have been moved or deleted since its folder was listed
        let modified = match std::fs::metadata(entry.path()).and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(e) => {
                warn!("Skipping {:?}: could not read modification time: {}", entry.path(), e);
                continue;
            }
        };

        let path = entry.into_path();
        let icon = load_icon(&path, size);
        debug!("Found set {:?} (icon: {})", path, icon.is_some());

        projects.push(ProjectEntry {
            modified,
            path,
            icon,
        });
    }

    sort_newest_first(&mut projects);
    info!("Found {} sets under {:?}", projects.len(), root);
    Ok(projects)
}

fn check_root(root: &Path) -> Result<(), ScanError> {
    let metadata = std::fs::metadata(root).map_err(|source| ScanError::RootInaccessible {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(ScanError::RootNotDirectory(root.to_path_buf()));
    }
    // An unreadable root is an error, never an empty list
    std::fs::read_dir(root).map_err(|source| ScanError::RootInaccessible {
        path: root.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Stable sort, most recently modified first.
pub fn sort_newest_first(projects: &mut [ProjectEntry]) {
    projects.sort_by(|a, b| b.modified.cmp(&a.modified));
}

/// Whether `path` names a Live set file.
pub fn is_project_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == PROJECT_EXTENSION)
}

/// Whether `entry` is a directory whose full path mentions the backup marker,
/// the root and its ancestors included.
fn is_backup_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && path_has_backup_marker(entry.path())
}

/// Whether any component of `path` contains the backup marker.
pub fn path_has_backup_marker(path: &Path) -> bool {
    path.components().any(|c| match c {
        Component::Normal(name) => name.to_string_lossy().contains(BACKUP_MARKER),
        _ => false,
    })
}
