use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the tsdart binary.
#[derive(Parser, Debug)]
#[command(
    name = "tsdart",
    version,
    about = "Translate TypeScript type nodes into Dart types"
)]
pub struct CliArgs {
    /// JSON file holding a type node or an array of type nodes.
    pub input: PathBuf,

    /// Translator options file (camelCase JSON).
    #[arg(short = 'p', long = "options")]
    pub options: Option<PathBuf>,

    /// Warn about every type that degrades to `dynamic`.
    #[arg(long = "reportLossyTypes", alias = "report-lossy-types")]
    pub report_lossy_types: bool,

    /// Override the maximum type nesting depth.
    #[arg(long = "maxTypeDepth", alias = "max-type-depth")]
    pub max_type_depth: Option<u32>,

    /// How diagnostics are written to stderr.
    #[arg(long = "diagnostics", value_enum, default_value_t = DiagnosticsFormat::Text)]
    pub diagnostics: DiagnosticsFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DiagnosticsFormat {
    Text,
    Json,
}
