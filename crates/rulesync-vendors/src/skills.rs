//! Shared-skill synchronization.
//!
//! Each immediate subdirectory of the configured shared path is one
//! "skill". Skills are symlinked into every active vendor's destination
//! directory. A destination entry that is anything other than a symlink
//! to the expected skill is a conflict that aborts the whole sync; stale
//! links left behind by removed skills are pruned automatically.

use crate::error::{Error, Result};
use crate::fsutil;
use rulesync_core::paths::{normalize_lexically, relative_from, root_relative_key, slash_string};
use rulesync_core::{Artifact, Config, FileMap, Vendor};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Symlink every shared skill into the destinations of the given
/// vendors. Returns the map of (intended) symlinks; with `dry_run` no
/// filesystem change happens.
pub fn sync_skills(
    config: &Config,
    output_root: &Path,
    vendors: &[Vendor],
    dry_run: bool,
) -> Result<FileMap> {
    let mut files = FileMap::new();

    if config.skills.shared_path.is_empty() {
        return Ok(files);
    }
    let shared_path = output_root.join(&config.skills.shared_path);
    if !shared_path.is_dir() {
        return Ok(files);
    }

    let skill_dirs = list_skill_dirs(&shared_path)?;
    if skill_dirs.is_empty() {
        return Ok(files);
    }
    let skill_names: BTreeSet<String> = skill_dirs
        .iter()
        .filter_map(|dir| dir.file_name().map(|name| name.to_string_lossy().into_owned()))
        .collect();

    let active: Vec<(&Vendor, &String)> = config
        .skills
        .vendor_destinations
        .iter()
        .filter(|(vendor, _)| vendors.contains(*vendor))
        .collect();
    if active.is_empty() {
        return Ok(files);
    }

    let shared_norm = normalize_lexically(&shared_path);

    for (_vendor, dest_rel) in active {
        let dest_dir = output_root.join(dest_rel);

        if !dry_run {
            fs::create_dir_all(&dest_dir)?;
            prune_stale_links(&dest_dir, &shared_norm, &skill_names);
        }

        for skill_dir in &skill_dirs {
            let Some(skill_name) = skill_dir.file_name() else {
                continue;
            };
            let link_path = dest_dir.join(skill_name);
            let target = match relative_from(skill_dir, &dest_dir) {
                Some(relative) => slash_string(&relative),
                None => slash_string(skill_dir),
            };

            if link_path.symlink_metadata().is_ok() {
                check_existing_entry(&link_path, skill_dir, &dest_dir, output_root)?;
                // Already correctly linked; record and move on.
                files.insert(
                    root_relative_key(&link_path, output_root),
                    Artifact::Symlink(target),
                );
                continue;
            }

            files.insert(
                root_relative_key(&link_path, output_root),
                Artifact::Symlink(target.clone()),
            );
            if !dry_run {
                fsutil::replace_symlink(&link_path, &target)?;
            }
        }
    }

    Ok(files)
}

/// Immediate subdirectories of the shared path, sorted by name.
fn list_skill_dirs(shared_path: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = fs::read_dir(shared_path)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort_by_key(|dir| dir.file_name().map(|name| name.to_os_string()));
    Ok(dirs)
}

/// An entry already occupies the link path. Acceptable only when it is a
/// symlink resolving to the skill directory itself.
fn check_existing_entry(
    link_path: &Path,
    skill_dir: &Path,
    dest_dir: &Path,
    output_root: &Path,
) -> Result<()> {
    let rel_link = root_relative_key(link_path, output_root);
    let rel_skill = root_relative_key(skill_dir, output_root);

    let is_symlink = link_path
        .symlink_metadata()
        .map(|metadata| metadata.file_type().is_symlink())
        .unwrap_or(false);
    if !is_symlink {
        return Err(Error::SkillConflict(format!(
            "Conflict: '{rel_link}' already exists and is not a symlink. \
             Cannot symlink shared skill '{rel_skill}' there."
        )));
    }

    let existing_target = fs::read_link(link_path)?;
    let existing_abs = if existing_target.is_absolute() {
        existing_target.clone()
    } else {
        dest_dir.join(&existing_target)
    };

    let matches = match (existing_abs.canonicalize(), skill_dir.canonicalize()) {
        (Ok(existing), Ok(expected)) => existing == expected,
        // A dangling link cannot be the expected skill.
        _ => false,
    };
    if !matches {
        return Err(Error::SkillConflict(format!(
            "Conflict: '{rel_link}' is a symlink to '{}', but expected it to \
             point to shared skill '{rel_skill}'",
            slash_string(&existing_target)
        )));
    }
    Ok(())
}

/// Delete destination symlinks whose target lies inside the shared tree
/// but whose name no longer matches any current skill. Anything that is
/// not a symlink, or that points outside the shared tree, is left alone.
fn prune_stale_links(dest_dir: &Path, shared_norm: &Path, skill_names: &BTreeSet<String>) {
    let Ok(entries) = fs::read_dir(dest_dir) else {
        return;
    };

    for entry in entries.flatten() {
        let is_symlink = entry
            .file_type()
            .map(|file_type| file_type.is_symlink())
            .unwrap_or(false);
        if !is_symlink {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if skill_names.contains(&name) {
            continue;
        }

        let Ok(target) = fs::read_link(entry.path()) else {
            continue;
        };
        let resolved = if target.is_absolute() {
            target
        } else {
            dest_dir.join(target)
        };
        // Lexical containment: the target may no longer exist, which is
        // exactly the stale case being handled.
        if normalize_lexically(&resolved).starts_with(shared_norm) {
            if let Err(e) = fs::remove_file(entry.path()) {
                tracing::warn!("Failed to prune stale skill link {}: {}", entry.path().display(), e);
            }
        }
    }
}
