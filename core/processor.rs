use crate::CoreError;
use crate::config::StripConfig;
use crate::output::StagedTree;
use crate::stripper;
use anyhow::Result;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Stripped,
    Copied,
}

#[derive(Debug)]
pub struct ProcessedFileResult {
    pub path: PathBuf,
    pub outcome: Result<FileAction, CoreError>,
}

impl ProcessedFileResult {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Exempt files are staged as raw bytes and never decoded.
fn transform_file(path: &Path, config: &StripConfig) -> Result<(Vec<u8>, FileAction), CoreError> {
    if config.is_exempt(path) {
        let raw = fs::read(path).map_err(|e| CoreError::io(path, e))?;
        return Ok((raw, FileAction::Copied));
    }
    let content = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
    let stripped =
        stripper::strip_header(&content, &config.markers).map_err(|source| CoreError::Strip {
            path: path.to_path_buf(),
            source,
        })?;
    Ok((stripped.into_bytes(), FileAction::Stripped))
}

fn process_single_file(
    path: &Path,
    input_root: &Path,
    staged: &StagedTree,
    config: &StripConfig,
) -> Result<FileAction, CoreError> {
    let rel = path.strip_prefix(input_root).map_err(anyhow::Error::from)?;
    let (content, action) = transform_file(path, config)?;
    staged.write(rel, &content)?;
    tracing::debug!("{:?} {}", action, rel.display());
    Ok(action)
}

/// Transforms `files` (all under `input_root`) into their mirrored paths
/// under `output_root`.
///
/// Every file is attempted. The output tree is only touched when all of them
/// succeed; otherwise the staged results are discarded and the failures are
/// reported through the returned results.
pub fn process_files(
    files: &[PathBuf],
    input_root: &Path,
    output_root: &Path,
    config: &StripConfig,
) -> Result<Vec<ProcessedFileResult>> {
    let staged = StagedTree::new(output_root)?;

    let results: Vec<ProcessedFileResult> = files
        .par_iter()
        .map(|p| ProcessedFileResult {
            path: p.clone(),
            outcome: process_single_file(p, input_root, &staged, config),
        })
        .collect();

    let failures = results.iter().filter(|r| !r.is_ok()).count();
    if failures > 0 {
        tracing::info!(
            "{} of {} files failed, leaving {} untouched",
            failures,
            results.len(),
            output_root.display()
        );
        return Ok(results);
    }

    let committed = staged.commit()?;
    tracing::info!("wrote {} files to {}", committed, output_root.display());
    Ok(results)
}
