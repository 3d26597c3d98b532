use headerprep_core::{
    CoreError, FileAction, ProcessedFileResult, StripCli, ToolCommand, find_headers, process_files,
};
mod interaction;

use anyhow::Result;
use clap::Parser;
use console::style;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli: StripCli = StripCli::parse();

    if let Some(ToolCommand::Completion(args)) = cli.command {
        interaction::print_completions::<StripCli>(args.shell);
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

fn run(args: &headerprep_core::StripArgs) -> Result<ExitCode> {
    let (input_root, output_root) = args.roots()?;
    let config = args.config();

    let headers = find_headers(input_root, &args.exclude)?;
    if headers.is_empty() {
        println!("No headers found under {}.", input_root.display());
        return Ok(ExitCode::SUCCESS);
    }

    if !interaction::confirm_overwrite(output_root, args.no_confirm)? {
        return Ok(ExitCode::SUCCESS);
    }

    println!("Stripping {} headers...", headers.len());
    let results = process_files(&headers, input_root, output_root, &config)?;

    let (stripped, copied, failed) = tally(&results);
    for result in &results {
        if let Err(err) = &result.outcome {
            print_failure(err);
        }
    }

    if failed > 0 {
        eprintln!(
            "{} {} failed, nothing was written to {}.",
            style(failed).red(),
            if failed == 1 { "file" } else { "files" },
            output_root.display()
        );
        return Ok(ExitCode::FAILURE);
    }

    println!(
        "Result: {} stripped, {} copied unchanged into {}.",
        style(stripped).green(),
        style(copied).green(),
        output_root.display()
    );
    Ok(ExitCode::SUCCESS)
}

fn tally(results: &[ProcessedFileResult]) -> (usize, usize, usize) {
    results
        .iter()
        .fold((0, 0, 0), |(s, c, f), r| match r.outcome {
            Ok(FileAction::Stripped) => (s + 1, c, f),
            Ok(FileAction::Copied) => (s, c + 1, f),
            Err(_) => (s, c, f + 1),
        })
}

fn print_failure(err: &CoreError) {
    eprintln!("  {} {}", style("Failed:").yellow(), style(err).red());
}
