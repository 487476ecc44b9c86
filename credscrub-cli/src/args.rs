use std::path::PathBuf;

use clap::Args;

use crate::output::OutputFormat;

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Args, Clone)]
pub struct RedactorArgs {
    /// YAML or JSON config file (falls back to CREDSCRUB_CONFIG).
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub replacement: Option<String>,
    /// Environment variable holding a known secret.
    #[arg(long = "secret-env", value_name = "NAME")]
    pub secret_env: Vec<String>,
    /// File with one known secret per line.
    #[arg(long)]
    pub secrets_file: Option<PathBuf>,
    /// Only redact URIs with this scheme.
    #[arg(long = "scheme")]
    pub schemes: Vec<String>,
}
