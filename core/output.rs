use crate::CoreError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Output collected in a scratch directory beside `target` and moved into
/// place by [`StagedTree::commit`]. Dropping an uncommitted tree discards it.
#[derive(Debug)]
pub struct StagedTree {
    staging: TempDir,
    target: PathBuf,
}

impl StagedTree {
    pub fn new(target: &Path) -> Result<Self, CoreError> {
        let parent = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|e| CoreError::io(&parent, e))?;
        let staging = tempfile::Builder::new()
            .prefix(".headerprep_")
            .tempdir_in(&parent)
            .map_err(|e| CoreError::io(&parent, e))?;
        tracing::debug!("staging output for {} in {}", target.display(), staging.path().display());
        Ok(StagedTree {
            staging,
            target: target.to_path_buf(),
        })
    }

    pub fn create_dir(&self, rel: &Path) -> Result<(), CoreError> {
        let dir = self.staging.path().join(rel);
        fs::create_dir_all(&dir).map_err(|e| CoreError::io(&dir, e))
    }

    /// Safe to call from several workers at once, including for siblings
    /// sharing a parent directory.
    pub fn write(&self, rel: &Path, contents: impl AsRef<[u8]>) -> Result<(), CoreError> {
        let dst = self.staging.path().join(rel);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent).map_err(|e| CoreError::io(parent, e))?;
        }
        fs::write(&dst, contents).map_err(|e| CoreError::io(&dst, e))
    }

    /// Returns the number of files moved into the target tree.
    pub fn commit(self) -> Result<usize, CoreError> {
        let entries = WalkDir::new(self.staging.path())
            .min_depth(1)
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;
        let staged_files = entries.iter().filter(|e| e.file_type().is_file()).count();

        if !self.target.exists() {
            fs::rename(self.staging.path(), &self.target)
                .map_err(|e| CoreError::io(&self.target, e))?;
            // The staging directory no longer exists, so dropping the TempDir is a no-op.
            return Ok(staged_files);
        }

        for entry in &entries {
            let rel = entry
                .path()
                .strip_prefix(self.staging.path())
                .map_err(anyhow::Error::from)?;
            let dst = self.target.join(rel);
            if entry.file_type().is_dir() {
                fs::create_dir_all(&dst).map_err(|e| CoreError::io(&dst, e))?;
            } else {
                fs::rename(entry.path(), &dst).map_err(|e| CoreError::io(&dst, e))?;
            }
        }
        Ok(staged_files)
    }
}
