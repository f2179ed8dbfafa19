use clap::Parser;
use std::path::PathBuf;

/// Preview host for the schema form builder UI
#[derive(Parser, Debug, Clone)]
#[command(name = "schemaform", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "SCHEMAFORM_CONFIG", default_value = "schemaform.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "SCHEMAFORM_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "SCHEMAFORM_PORT")]
    pub port: Option<u16>,
}
