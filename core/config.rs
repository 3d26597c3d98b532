use std::collections::HashSet;
use std::path::Path;

pub const IGNORE_START_MARKER: &str = "CSP_START_IGNORE";
pub const IGNORE_END_MARKER: &str = "CSP_END_IGNORE";
pub const NO_EXPORT_MARKER: &str = "CSP_NO_EXPORT";

pub const HEADER_EXTENSION: &str = "h";
pub const INTERFACE_EXTENSION: &str = "i";

/// Headers copied through untouched. The container types need their
/// non-exported iterator API to stay visible to the binding generator.
pub const DEFAULT_EXEMPT_FILES: &[&str] = &[
    "CSPCommon.h",
    "String.h",
    "Optional.h",
    "List.h",
    "Map.h",
    "Array.h",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub ignore_start: &'static str,
    pub ignore_end: &'static str,
    pub no_export: &'static str,
}

impl Default for Markers {
    fn default() -> Self {
        Markers {
            ignore_start: IGNORE_START_MARKER,
            ignore_end: IGNORE_END_MARKER,
            no_export: NO_EXPORT_MARKER,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StripConfig {
    pub markers: Markers,
    exempt: HashSet<String>,
}

impl Default for StripConfig {
    fn default() -> Self {
        StripConfig {
            markers: Markers::default(),
            exempt: DEFAULT_EXEMPT_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl StripConfig {
    pub fn with_extra_exemptions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exempt.extend(names.into_iter().map(Into::into));
        self
    }

    /// Exemption is decided on the base name alone, wherever the file sits in the tree.
    pub fn is_exempt(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| self.exempt.contains(n))
    }
}

pub fn is_header(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(HEADER_EXTENSION)
}
