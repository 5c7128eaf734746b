use clap::Parser;
use sbom_index::cli::{Cli, run};
use sbom_index::logging::init_logging;
use sbom_index::SbomError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref()) {
        eprintln!("Warning: failed to initialize logging: {err}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, cli.json);
            ExitCode::from(err.code().exit_code())
        }
    }
}

fn report_error(err: &SbomError, json: bool) {
    tracing::debug!(error = ?err, "Command failed");

    if json {
        let envelope = serde_json::json!({ "error": err.to_structured() });
        eprintln!("{envelope}");
        return;
    }

    eprintln!("Error: {err}");
    if let Some(hint) = err.hint() {
        eprintln!("Hint: {hint}");
    }
}
