use clap::Parser;
use nq_config::NqConfig;

/// Command-line flags for the `neuroquery` binary.
///
/// Every flag is optional; a flag that is given overrides the value loaded
/// from config files and the environment.
#[derive(Debug, Parser)]
#[command(
    name = "neuroquery",
    version,
    about = "Read-only HTTP queries over a neuroimaging study corpus"
)]
pub struct Cli {
    /// Interface to bind
    #[arg(long)]
    pub bind: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Database URL (local path, file: URL, or libsql:// remote)
    #[arg(long)]
    pub db_url: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply flag overrides on top of loaded configuration.
    pub fn apply(&self, config: &mut NqConfig) {
        if let Some(bind) = &self.bind {
            config.server.bind_address.clone_from(bind);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = &self.db_url {
            config.database.url.clone_from(url);
        }
    }
}
