pub mod args;
pub mod config;
pub mod file_finder;
pub mod generator;
pub mod output;
pub mod processor;
pub mod stripper;

pub use args::{CompletionArgs, GenerateArgs, GenerateCli, StripArgs, StripCli, ToolCommand};
pub use config::{Markers, StripConfig};
pub use file_finder::find_headers;
pub use generator::{GenerateSummary, generate_interface_files, interface_file_contents};
pub use output::StagedTree;
pub use processor::{FileAction, ProcessedFileResult, process_files};
pub use stripper::{StripError, strip_declarations, strip_header, strip_regions};

use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Strip {
        path: PathBuf,
        #[source]
        source: StripError,
    },

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl CoreError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        CoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
