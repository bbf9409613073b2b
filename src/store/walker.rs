//! Lazy traversal of a password store directory tree.
//!
//! Every non-directory entry whose name ends in `.<extension>` is a secret.
//! The walk is depth-first with each directory's entries sorted by name,
//! so repeated exports of an unchanged store produce identical files.
//! Subdirectories that cannot be read are skipped with a warning; only an
//! unreadable root is fatal.

use std::fs;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::{PassExportError, Result};
use crate::store::SecretId;

/// Iterator over the secrets of a store, yielded in traversal order.
///
/// Finite and single-pass. An `Err` item means a secret's path is not
/// valid UTF-8 or the root itself vanished mid-walk; callers abort on it.
pub struct SecretWalker {
    root: PathBuf,
    suffix: String,
    inner: walkdir::IntoIter,
}

/// Start walking the store at `root`, looking for `.<extension>` files.
///
/// Fails immediately if `root` cannot be read as a directory.
pub fn walk_store(root: &Path, extension: &str) -> Result<SecretWalker> {
    fs::read_dir(root).map_err(|source| PassExportError::StoreUnreadable {
        path: root.to_path_buf(),
        source,
    })?;

    let inner = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    Ok(SecretWalker {
        root: root.to_path_buf(),
        suffix: format!(".{extension}"),
        inner,
    })
}

impl SecretWalker {
    /// Build the id for a secret file, or `None` if the entry is not a secret.
    fn secret_id(&self, entry: &walkdir::DirEntry) -> Option<Result<SecretId>> {
        if entry.file_type().is_dir() || is_symlink_to_dir(entry) {
            return None;
        }

        if !entry.file_name().to_string_lossy().ends_with(&self.suffix) {
            return None;
        }
        let Some(name) = entry.file_name().to_str() else {
            return Some(Err(PassExportError::InvalidStorePath(
                entry.path().to_path_buf(),
            )));
        };
        let title = name.strip_suffix(&self.suffix)?;

        let relative = entry.path().strip_prefix(&self.root).ok()?;
        let group = match relative.parent() {
            Some(parent) => match group_name(parent) {
                Some(group) => group,
                None => {
                    return Some(Err(PassExportError::InvalidStorePath(
                        entry.path().to_path_buf(),
                    )))
                }
            },
            None => String::new(),
        };

        Some(Ok(SecretId::new(group, title)))
    }
}

impl Iterator for SecretWalker {
    type Item = Result<SecretId>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) if err.depth() > 0 => {
                    let path = err.path().unwrap_or(self.root.as_path()).display().to_string();
                    tracing::warn!(path = %path, error = %err, "skipping unreadable directory");
                    continue;
                }
                Err(err) => {
                    return Some(Err(PassExportError::StoreUnreadable {
                        path: self.root.clone(),
                        source: err.into(),
                    }));
                }
            };

            if let Some(id) = self.secret_id(&entry) {
                return Some(id);
            }
        }
    }
}

/// Symlinks are not followed, but a link to a directory is still a
/// directory, not a secret.
fn is_symlink_to_dir(entry: &walkdir::DirEntry) -> bool {
    entry.path_is_symlink()
        && fs::metadata(entry.path())
            .map(|m| m.is_dir())
            .unwrap_or(false)
}

/// Join the components of a relative directory path with `/`.
///
/// Returns `None` if a component is not valid UTF-8.
fn group_name(dir: &Path) -> Option<String> {
    let mut parts = Vec::new();
    for component in dir.components() {
        if let Component::Normal(part) = component {
            parts.push(part.to_str()?);
        }
    }
    Some(parts.join("/"))
}
