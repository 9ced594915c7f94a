//! File-system implementation of [`ConfigTree`].

use std::fs;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::application::system::{ConfigTree, TreeError};

#[derive(Debug, Default, Clone, Copy)]
pub struct FsConfigTree;

impl ConfigTree for FsConfigTree {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn entry_count(&self, dir: &Path) -> Result<usize, TreeError> {
        let entries = fs::read_dir(dir).map_err(|e| TreeError::new("cannot list", dir, e))?;
        Ok(entries.count())
    }

    fn create_dir(&self, dir: &Path) -> Result<(), TreeError> {
        fs::create_dir_all(dir).map_err(|e| TreeError::new("cannot create", dir, e))
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> Result<(), TreeError> {
        if !from.is_dir() {
            return Err(TreeError::new(
                "cannot copy",
                from,
                std::io::Error::new(std::io::ErrorKind::NotFound, "source directory missing"),
            ));
        }
        for entry in WalkDir::new(from) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(from).to_path_buf();
                TreeError::new("cannot walk", &path, e.into())
            })?;
            let relative = entry.path().strip_prefix(from).unwrap_or(entry.path());
            let target = to.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target).map_err(|e| TreeError::new("cannot create", &target, e))?;
            } else {
                fs::copy(entry.path(), &target)
                    .map_err(|e| TreeError::new("cannot copy", entry.path(), e))?;
            }
        }
        debug!(from = %from.display(), to = %to.display(), "copied configuration tree");
        Ok(())
    }

    fn remove_tree(&self, dir: &Path) -> Result<(), TreeError> {
        match fs::remove_dir_all(dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TreeError::new("cannot remove", dir, e)),
        }
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), TreeError> {
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent).map_err(|e| TreeError::new("cannot create", parent, e))?;
        }
        fs::copy(from, to).map_err(|e| TreeError::new("cannot copy", from, e))?;
        Ok(())
    }

    #[cfg(unix)]
    fn restrict_to_owner(&self, path: &Path) -> Result<(), TreeError> {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| TreeError::new("cannot restrict", path, e))
    }

    #[cfg(not(unix))]
    fn restrict_to_owner(&self, path: &Path) -> Result<(), TreeError> {
        // No POSIX modes; only check the file is there.
        fs::metadata(path)
            .map(|_| ())
            .map_err(|e| TreeError::new("cannot restrict", path, e))
    }
}
