use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::infra::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Server,
    Stdio,
}

impl Mode {
    fn as_str(self) -> &'static str {
        match self {
            Mode::Server => "server",
            Mode::Stdio => "stdio",
        }
    }
}

/// Startup flags. Anything left unset falls back to the environment.
#[derive(Debug, Parser)]
#[command(name = "wp-mcp-gateway")]
#[command(about = "MCP gateway exposing WordPress post tools")]
#[command(version)]
pub struct Cli {
    /// Transport to serve (env: MODE)
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// HTTP port in server mode (env: PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// TOML file with a [wordpress] table (env: WP_GATEWAY_CONFIG)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also mount the plain JSON-RPC endpoint at /rpc (env: ENABLE_RPC_SHIM)
    #[arg(long)]
    pub rpc_shim: bool,
}

impl Cli {
    /// Flags win over environment values.
    pub fn apply(self, mut cfg: Config) -> Config {
        if let Some(mode) = self.mode {
            cfg.mode = mode.as_str().to_owned();
        }
        if let Some(port) = self.port {
            cfg.port = port;
        }
        if let Some(path) = self.config {
            cfg.config_path = Some(path);
        }
        cfg.rpc_shim |= self.rpc_shim;
        cfg
    }
}
