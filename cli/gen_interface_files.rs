use headerprep_core::{GenerateArgs, GenerateCli, ToolCommand, generate_interface_files};
mod interaction;

use anyhow::Result;
use clap::Parser;
use console::style;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli: GenerateCli = GenerateCli::parse();

    if let Some(ToolCommand::Completion(args)) = cli.command {
        interaction::print_completions::<GenerateCli>(args.shell);
        return ExitCode::SUCCESS;
    }

    let args = cli.main_opts;
    interaction::init_logging(args.verbose);

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            interaction::report_error("Error", &e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &GenerateArgs) -> Result<ExitCode> {
    let (src_root, dst_root) = args.roots()?;

    if !interaction::confirm_overwrite(dst_root, args.no_confirm)? {
        return Ok(ExitCode::SUCCESS);
    }

    let summary = generate_interface_files(src_root, dst_root)?;
    println!(
        "Generated {} interface {} across {} {} in {}.",
        style(summary.interface_files).green(),
        if summary.interface_files == 1 { "file" } else { "files" },
        style(summary.directories).green(),
        if summary.directories == 1 { "directory" } else { "directories" },
        dst_root.display()
    );
    Ok(ExitCode::SUCCESS)
}
