use anyhow::{Context, Result};
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;
use std::path::{Path, PathBuf};

use crate::config::is_header;

/// Every header under `root`, sorted. Nothing is filtered out implicitly:
/// hidden files and ignore-files play no part, only the `exclude` globs.
pub fn find_headers(root: &Path, exclude: &[String]) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        anyhow::bail!("Input root not found or not a directory: {}", root.display());
    }
    let mut walker = WalkBuilder::new(root);
    walker.standard_filters(false);

    let mut overrides = OverrideBuilder::new(root);
    for pattern in exclude {
        overrides
            .add(&format!("!{}", pattern))
            .with_context(|| format!("Exclude: {}", pattern))?;
    }
    walker.overrides(overrides.build().context("Overrides")?);

    let mut headers = Vec::new();
    for entry in walker.build() {
        let entry = entry.with_context(|| format!("Walking {}", root.display()))?;
        if entry.file_type().is_some_and(|ft| ft.is_file()) && is_header(entry.path()) {
            headers.push(entry.into_path());
        }
    }
    if headers.is_empty() {
        tracing::warn!("no headers found under {}", root.display());
    }
    headers.sort();
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn finds_headers_recursively() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "CSP/CSPFoundation.h");
        touch(tmp.path(), "CSP/Systems/Spaces/Space.h");
        touch(tmp.path(), "CSP/Systems/Spaces/Space.cpp");
        touch(tmp.path(), ".hidden/Secret.h");
        touch(tmp.path(), "README.md");

        let found = find_headers(tmp.path(), &[]).unwrap();
        let rel: Vec<_> = found
            .iter()
            .map(|p| p.strip_prefix(tmp.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            rel,
            vec![
                PathBuf::from(".hidden/Secret.h"),
                PathBuf::from("CSP/CSPFoundation.h"),
                PathBuf::from("CSP/Systems/Spaces/Space.h"),
            ]
        );
    }

    #[test]
    fn exclude_globs_skip_matches() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "CSP/Public.h");
        touch(tmp.path(), "CSP/Internal/Private.h");

        let found = find_headers(tmp.path(), &["Internal/".to_string()]).unwrap();
        assert_eq!(found, vec![tmp.path().join("CSP/Public.h")]);
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(find_headers(&tmp.path().join("nope"), &[]).is_err());
    }
}
