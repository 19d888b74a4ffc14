//! CLI argument definitions using clap
//!
//! Commands:
//! - onboard-tui [form]
//! - onboard-tui mock-server --addr <socket> --delay-ms <ms>

use clap::{Parser, Subcommand};
use std::net::SocketAddr;

/// Client onboarding form for the terminal
#[derive(Parser, Debug)]
#[command(name = "onboard-tui")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Fill in and submit the onboarding form (default)
    Form,

    /// Serve the mock submission endpoint
    MockServer {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,

        /// Artificial processing delay per submission; defaults to the
        /// config file value, then 1000
        #[arg(long)]
        delay_ms: Option<u64>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
