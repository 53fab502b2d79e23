#![allow(clippy::print_stderr)]

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tsdart_cli::args::{CliArgs, DiagnosticsFormat};
use tsdart_cli::driver;

fn main() -> Result<ExitCode> {
    // TSDART_LOG / TSDART_LOG_FORMAT, see tsdart_common::tracing_config.
    tsdart_common::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let output = driver::run(&args)?;

    let mut stdout = std::io::stdout().lock();
    for line in &output.lines {
        writeln!(stdout, "{line}").context("failed to write output")?;
    }

    for kind in &output.unhandled {
        eprintln!("warning: {kind} has no Dart translation; emitted 'dynamic'");
    }
    match args.diagnostics {
        DiagnosticsFormat::Text => {
            for diagnostic in output.diagnostics.diagnostics() {
                eprintln!("{}", driver::format_diagnostic(diagnostic));
            }
        }
        DiagnosticsFormat::Json => {
            let json = output
                .diagnostics
                .to_json()
                .context("failed to serialize diagnostics")?;
            eprintln!("{json}");
        }
    }

    Ok(if output.diagnostics.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
