// SPDX-License-Identifier: LGPL-3.0-only
//! Theme directory change watcher.

use boxmodel_theme::file::is_theme_file;
use notify::event::ModifyKind;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use thiserror::Error;

/// Errors from watching a theme directory.
#[derive(Debug, Error)]
pub enum WatchError {
    /// Error from the file watcher (notify crate).
    #[error("File watcher error: {0}")]
    Notify(#[from] notify::Error),
    /// The watched path is not a directory.
    #[error("Not a directory: {0:?}")]
    NotADirectory(PathBuf),
}

/// A change to a `.theme` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeDirChange {
    /// A theme file appeared, including the new name of a renamed file.
    Added(PathBuf),
    /// A theme file was written to.
    Modified(PathBuf),
    /// A theme file disappeared, including the old name of a renamed file.
    Removed(PathBuf),
}

impl ThemeDirChange {
    /// The theme file the change refers to.
    pub fn path(&self) -> &Path {
        match self {
            ThemeDirChange::Added(path) | ThemeDirChange::Modified(path) | ThemeDirChange::Removed(path) => {
                path
            },
        }
    }
}

/// Watches a theme directory for changes to `.theme` files.
pub struct ThemeDirWatcher {
    watcher: RecommendedWatcher,
    event_rx: mpsc::Receiver<notify::Result<Event>>,
    dir: PathBuf,
}

impl ThemeDirWatcher {
    /// Start watching `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, WatchError> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(WatchError::NotADirectory(dir));
        }

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx)?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        log::debug!("Watching theme directory {:?}", dir);

        Ok(Self {
            watcher,
            event_rx: rx,
            dir,
        })
    }

    /// The watched directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Stop watching.
    pub fn stop(mut self) -> Result<(), WatchError> {
        self.watcher.unwatch(&self.dir)?;
        Ok(())
    }

    /// Poll for theme file changes (non-blocking).
    ///
    /// Returns all pending changes since the last call.
    pub fn poll_changes(&self) -> Vec<ThemeDirChange> {
        let mut changes = Vec::new();

        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                Ok(event) => changes.extend(convert_event(event)),
                Err(e) => log::warn!("Theme directory watcher error: {}", e),
            }
        }

        changes
    }
}

/// Convert a notify Event into theme file changes, dropping other files.
pub fn convert_event(event: Event) -> Vec<ThemeDirChange> {
    let mut changes = Vec::new();

    match event.kind {
        EventKind::Create(_) => {
            changes.extend(event.paths.into_iter().map(ThemeDirChange::Added));
        },
        EventKind::Modify(ModifyKind::Name(_)) => {
            // Rename events carry the old and the new path
            if event.paths.len() >= 2 {
                changes.push(ThemeDirChange::Removed(event.paths[0].clone()));
                changes.push(ThemeDirChange::Added(event.paths[1].clone()));
            } else {
                // Only one side of the rename is known
                for path in event.paths {
                    if path.exists() {
                        changes.push(ThemeDirChange::Added(path));
                    } else {
                        changes.push(ThemeDirChange::Removed(path));
                    }
                }
            }
        },
        EventKind::Modify(ModifyKind::Metadata(_)) | EventKind::Access(_) => {},
        EventKind::Modify(_) | EventKind::Any | EventKind::Other => {
            changes.extend(event.paths.into_iter().map(ThemeDirChange::Modified));
        },
        EventKind::Remove(_) => {
            changes.extend(event.paths.into_iter().map(ThemeDirChange::Removed));
        },
    }

    changes.retain(|change| is_theme_file(change.path()));
    changes
}
