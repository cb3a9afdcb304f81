use std::net::SocketAddr;

use clap::Parser;

/// Serves document pages over HTTP.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Config {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,
}
