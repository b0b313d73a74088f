use crate::error::{Error, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Snapshot of a manifest file taken before the scaffold touches it
#[derive(Debug, Clone)]
struct FileSnapshot {
    /// Whether the file existed when tracking started
    original_existed: bool,

    /// Content at tracking time, for restoration on rollback
    original_content: Option<Vec<u8>>,
}

/// Tracks file changes and provides rollback functionality
pub struct FileTracker {
    /// Tracked files with their snapshots, in tracking order
    changes: Vec<(PathBuf, FileSnapshot)>,

    /// Whether automatic restore on drop is enabled
    restore_enabled: bool,

    /// Whether to force rollback regardless of restore_enabled
    force_rollback: bool,
}

impl Default for FileTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl FileTracker {
    /// Creates a new FileTracker with restore on drop enabled
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
            restore_enabled: true,
            force_rollback: false,
        }
    }

    /// Creates a new FileTracker with restore on drop configurable
    pub fn new_with_restore(restore_enabled: bool) -> Self {
        Self {
            changes: Vec::new(),
            restore_enabled,
            force_rollback: false,
        }
    }

    /// Starts tracking a file
    pub fn track_file(&mut self, path: &Path) -> Result<()> {
        debug!("Tracking file: {}", path.display());

        if self.changes.iter().any(|(tracked, _)| tracked == path) {
            debug!("File already tracked: {}", path.display());
            return Ok(());
        }

        // If the file already exists, store its content for potential rollback
        let snapshot = if path.exists() {
            let content = fs::read(path).map_err(|e| Error::FileOperation {
                path: path.to_path_buf(),
                message: format!("Failed to read file content: {}", e),
            })?;

            FileSnapshot {
                original_existed: true,
                original_content: Some(content),
            }
        } else {
            FileSnapshot {
                original_existed: false,
                original_content: None,
            }
        };

        self.changes.push((path.to_path_buf(), snapshot));
        info!("Started tracking file: {}", path.display());
        Ok(())
    }

    /// Force rollback of tracked changes
    pub fn force_rollback(&mut self) {
        self.force_rollback = true;
    }

    /// Rollback all tracked changes
    pub fn rollback(&mut self) -> Result<()> {
        info!("Rolling back file changes...");

        // Process file changes in reverse tracking order
        for (path, snapshot) in self.changes.iter().rev() {
            if snapshot.original_existed {
                if let Some(content) = &snapshot.original_content {
                    fs::write(path, content).map_err(|e| Error::FileOperation {
                        path: path.to_path_buf(),
                        message: format!("Failed to restore file content: {}", e),
                    })?;
                    info!("Restored original content to {}", path.display());
                }
            } else if path.exists() {
                fs::remove_file(path).map_err(|e| Error::FileOperation {
                    path: path.to_path_buf(),
                    message: format!("Failed to remove file: {}", e),
                })?;
                info!("Removed created file: {}", path.display());
            }
        }

        self.changes.clear();
        info!("Rollback completed successfully");
        Ok(())
    }

    /// Clear tracked changes without rollback
    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.changes.clear();
    }
}

impl Drop for FileTracker {
    fn drop(&mut self) {
        // Only perform rollback if force_rollback is true and restore_enabled is true
        if self.force_rollback && self.restore_enabled && !self.changes.is_empty() {
            match self.rollback() {
                Ok(_) => {}
                Err(e) => {
                    warn!("Error during automatic rollback: {}", e);
                }
            }
        }
    }
}

/// A guard wrapper around FileTracker that simplifies working with tracked files
pub struct FileTrackerGuard {
    inner: FileTracker,
}

impl Default for FileTrackerGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl FileTrackerGuard {
    /// Creates a new FileTrackerGuard with restore on drop enabled
    pub fn new() -> Self {
        Self {
            inner: FileTracker::new(),
        }
    }

    /// Creates a new FileTrackerGuard with restore on drop configurable
    pub fn new_with_restore(restore_enabled: bool) -> Self {
        Self {
            inner: FileTracker::new_with_restore(restore_enabled),
        }
    }

    /// Starts tracking a file
    pub fn track_file(&mut self, path: &Path) -> Result<()> {
        self.inner.track_file(path)
    }

    /// Force rollback of tracked changes
    pub fn force_rollback(&mut self) {
        self.inner.force_rollback();
    }
}
