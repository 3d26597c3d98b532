use anyhow::Result;
use clap::CommandFactory;
use console::style;
use dialoguer::Confirm;
use std::fs;
use std::io;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

pub fn print_completions<C: CommandFactory>(shell: clap_complete::Shell) {
    let mut cmd = C::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}

pub fn report_error(context: &str, err: &anyhow::Error) {
    eprintln!("{}", style(format!("{}: {:#}", context, err)).red());
}

/// Asks before writing into a non-empty output directory. Unattended runs
/// (pipes, CI) never prompt.
pub fn confirm_overwrite(output_root: &Path, no_confirm: bool) -> Result<bool> {
    if no_confirm || !console::user_attended() {
        return Ok(true);
    }
    let non_empty = fs::read_dir(output_root)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false);
    if !non_empty {
        return Ok(true);
    }

    let prompt = format!(
        "{} is not empty, write into it anyway?",
        style(output_root.display()).cyan()
    );

    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;

    if !confirmed {
        println!("Aborted by user.");
    }

    Ok(confirmed)
}
