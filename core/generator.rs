//! Builds the starting set of SWIG interface files: one `.i` per header,
//! in a tree mirroring the include root.

use crate::CoreError;
use crate::config::{INTERFACE_EXTENSION, is_header};
use crate::output::StagedTree;
use anyhow::Context;
use std::path::{Component, Path};
use walkdir::WalkDir;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSummary {
    pub directories: usize,
    pub interface_files: usize,
}

pub fn interface_file_contents(rel_header: &str) -> String {
    format!("%{{\n#include \"{rel_header}\"\n%}}\n\n%include \"{rel_header}\"\n")
}

/// `rel` joined with forward slashes, whatever the host separator.
pub fn posix_relative(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

pub fn generate_interface_files(
    src_root: &Path,
    dst_root: &Path,
) -> Result<GenerateSummary, CoreError> {
    if !src_root.is_dir() {
        return Err(anyhow::anyhow!(
            "Source root not found or not a directory: {}",
            src_root.display()
        )
        .into());
    }
    let staged = StagedTree::new(dst_root)?;
    let mut summary = GenerateSummary::default();

    for entry in WalkDir::new(src_root).sort_by_file_name() {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(src_root)
            .context("walked outside the source root")?;

        if entry.file_type().is_dir() {
            staged.create_dir(rel)?;
            summary.directories += 1;
            continue;
        }
        if !entry.file_type().is_file() || !is_header(rel) {
            continue;
        }

        let rel_header = posix_relative(rel);
        staged.write(
            &rel.with_extension(INTERFACE_EXTENSION),
            &interface_file_contents(&rel_header),
        )?;
        tracing::debug!("generated interface for {}", rel_header);
        summary.interface_files += 1;
    }

    staged.commit()?;
    tracing::info!(
        "generated {} interface files in {}",
        summary.interface_files,
        dst_root.display()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn contents_follow_the_template() {
        assert_eq!(
            interface_file_contents("CSP/Systems/Spaces/Space.h"),
            "%{\n#include \"CSP/Systems/Spaces/Space.h\"\n%}\n\n%include \"CSP/Systems/Spaces/Space.h\"\n"
        );
    }

    #[test]
    fn relative_paths_use_forward_slashes() {
        let rel: PathBuf = ["a", "b", "c", "Foo.h"].iter().collect();
        assert_eq!(posix_relative(&rel), "a/b/c/Foo.h");
    }

    #[test]
    fn mirrors_tree_and_writes_interface_files() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("include");
        let dst = tmp.path().join("interfaces");
        fs::create_dir_all(src.join("a/b/c")).unwrap();
        fs::create_dir_all(src.join("empty")).unwrap();
        fs::write(src.join("a/b/c/Foo.h"), "").unwrap();
        fs::write(src.join("Top.h"), "").unwrap();
        fs::write(src.join("a/notes.txt"), "").unwrap();

        let summary = generate_interface_files(&src, &dst).unwrap();
        assert_eq!(summary.interface_files, 2);
        // root, a, a/b, a/b/c, empty
        assert_eq!(summary.directories, 5);

        assert_eq!(
            fs::read_to_string(dst.join("a/b/c/Foo.i")).unwrap(),
            interface_file_contents("a/b/c/Foo.h")
        );
        assert_eq!(
            fs::read_to_string(dst.join("Top.i")).unwrap(),
            interface_file_contents("Top.h")
        );
        assert!(dst.join("empty").is_dir());
        assert!(!dst.join("a/notes.txt").exists());
        assert!(!dst.join("a/notes.i").exists());
    }

    #[test]
    fn missing_source_root_fails_without_output() {
        let tmp = tempfile::tempdir().unwrap();
        let dst = tmp.path().join("interfaces");
        assert!(generate_interface_files(&tmp.path().join("nope"), &dst).is_err());
        assert!(!dst.exists());
    }
}
