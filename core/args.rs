use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::StripConfig;

#[derive(Debug, Subcommand, Clone)]
pub enum ToolCommand {
    #[clap(about = "Generate shell completion scripts")]
    Completion(CompletionArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct CompletionArgs {
    #[clap(value_parser = clap::value_parser!(clap_complete::Shell))]
    pub shell: clap_complete::Shell,
}

// The roots are optional only so that `completion` can run without them.
#[derive(Debug, Parser, Clone, Default)]
pub struct StripArgs {
    #[clap(help = "Header include root to read", required = true)]
    pub input_root: Option<PathBuf>,

    #[clap(help = "Directory to write the stripped, mirrored tree into", required = true)]
    pub output_root: Option<PathBuf>,

    #[clap( long, value_name = "NAME", help = "Additional file name to copy unchanged [multiple allowed]", action = clap::ArgAction::Append )]
    pub exempt: Vec<String>,
    #[clap( long, value_name = "PATTERN", help = "Glob pattern for files/directories to skip [multiple allowed]", action = clap::ArgAction::Append )]
    pub exclude: Vec<String>,
    #[clap(long, help = "Skip the confirmation prompt")]
    pub no_confirm: bool,
    #[clap(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

impl StripArgs {
    pub fn roots(&self) -> Result<(&Path, &Path)> {
        required_roots(&self.input_root, &self.output_root)
    }

    pub fn config(&self) -> StripConfig {
        StripConfig::default().with_extra_exemptions(self.exempt.iter().cloned())
    }
}

#[derive(Debug, Parser, Clone, Default)]
pub struct GenerateArgs {
    #[clap(help = "Source root directory to scan for headers", required = true)]
    pub src_root: Option<PathBuf>,

    #[clap(
        help = "Destination root for the mirrored tree of interface files",
        required = true
    )]
    pub dst_root: Option<PathBuf>,

    #[clap(long, help = "Skip the confirmation prompt")]
    pub no_confirm: bool,
    #[clap(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

impl GenerateArgs {
    pub fn roots(&self) -> Result<(&Path, &Path)> {
        required_roots(&self.src_root, &self.dst_root)
    }
}

fn required_roots<'a>(
    src: &'a Option<PathBuf>,
    dst: &'a Option<PathBuf>,
) -> Result<(&'a Path, &'a Path)> {
    let src = src.as_deref().ok_or_else(|| anyhow!("missing source root"))?;
    let dst = dst.as_deref().ok_or_else(|| anyhow!("missing destination root"))?;
    Ok((src, dst))
}

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "strip-no-export",
    version,
    about = "Strip CSP_START_IGNORE / CSP_END_IGNORE blocks and CSP_NO_EXPORT declarations from headers",
    long_about = "Mirrors every .h file under INPUT_ROOT into OUTPUT_ROOT, removing ignore regions and\nnon-exported declarations so the result can be handed to a binding generator.",
    propagate_version = true,
    subcommand_negates_reqs = true
)]
pub struct StripCli {
    #[clap(subcommand)]
    pub command: Option<ToolCommand>,

    #[clap(flatten)]
    pub main_opts: StripArgs,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "gen-interface-files",
    version,
    about = "Mirror a header tree and generate matching .i interface files",
    propagate_version = true,
    subcommand_negates_reqs = true
)]
pub struct GenerateCli {
    #[clap(subcommand)]
    pub command: Option<ToolCommand>,

    #[clap(flatten)]
    pub main_opts: GenerateArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definitions_are_consistent() {
        StripCli::command().debug_assert();
        GenerateCli::command().debug_assert();
    }

    #[test]
    fn strip_args_parse_roots_and_exemptions() {
        let cli = StripCli::try_parse_from([
            "strip-no-export",
            "include",
            "out",
            "--exempt",
            "Vector.h",
            "--exclude",
            "**/Internal/**",
        ])
        .unwrap();
        let (input, output) = cli.main_opts.roots().unwrap();
        assert_eq!(input, Path::new("include"));
        assert_eq!(output, Path::new("out"));
        assert!(cli.main_opts.config().is_exempt(Path::new("Vector.h")));
        assert_eq!(cli.main_opts.exclude, vec!["**/Internal/**".to_string()]);
    }

    #[test]
    fn roots_are_required_without_subcommand() {
        assert!(StripCli::try_parse_from(["strip-no-export", "include"]).is_err());
        assert!(GenerateCli::try_parse_from(["gen-interface-files"]).is_err());
    }

    #[test]
    fn completion_needs_no_roots() {
        let cli = GenerateCli::try_parse_from(["gen-interface-files", "completion", "bash"]).unwrap();
        assert!(matches!(cli.command, Some(ToolCommand::Completion(_))));
    }
}
