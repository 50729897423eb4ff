//! Small filesystem helpers shared by the adapters.
//!
//! Cleanup is best-effort throughout: a stale artifact that cannot be
//! removed is logged and left behind rather than aborting regeneration.

use std::fs;
use std::io;
use std::path::Path;

/// Write text, creating parent directories as needed.
pub fn write_text(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

/// Create a symlink at `link` pointing at `target`, replacing whatever
/// entry (file or link) is currently there.
pub fn replace_symlink(link: &Path, target: &str) -> io::Result<()> {
    if link.symlink_metadata().is_ok() {
        fs::remove_file(link)?;
    }
    symlink(target, link)
}

#[cfg(unix)]
fn symlink(target: &str, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &str, link: &Path) -> io::Result<()> {
    let resolved = link.parent().map(|p| p.join(target)).unwrap_or_else(|| target.into());
    if resolved.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}

/// Remove one directory entry of any type, logging failures.
pub fn remove_entry_logged(path: &Path) {
    let Ok(metadata) = path.symlink_metadata() else {
        return;
    };
    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    if let Err(e) = result {
        tracing::warn!("Failed to remove {}: {}", path.display(), e);
    }
}

/// Empty a directory without removing the directory itself.
pub fn clear_dir_logged(dir: &Path) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        remove_entry_logged(&entry.path());
    }
}

/// Remove a regular file if present, logging failures.
pub fn remove_file_logged(path: &Path) {
    if path.symlink_metadata().is_ok() {
        if let Err(e) = fs::remove_file(path) {
            tracing::warn!("Failed to remove {}: {}", path.display(), e);
        }
    }
}

/// Remove a directory tree if present, logging failures.
pub fn remove_dir_logged(path: &Path) {
    if path.is_dir() {
        if let Err(e) = fs::remove_dir_all(path) {
            tracing::warn!("Failed to remove {}: {}", path.display(), e);
        }
    }
}
