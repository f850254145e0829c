pub mod commands;
pub mod utils;

use std::net::{IpAddr, SocketAddr};

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "classwork-api")]
#[command(about = "Classwork services - JWT-gated list algorithms API, task manager API and balance tool")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(long, global = true, help = "Address to bind (overrides HOST)")]
    pub host: Option<String>,

    #[arg(long, short, global = true, help = "Port to bind (overrides PORT)")]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Serve the list algorithms API (register, login, sort, search, aggregates)")]
    Algorithms,

    #[command(about = "Serve the in-memory task manager API")]
    Tasks,

    #[command(about = "Apply increments to a balance and print the result")]
    Balance {
        #[command(flatten)]
        args: commands::balance::BalanceArgs,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

impl Cli {
    /// Resolve the bind address: CLI flags win over configuration.
    pub fn bind_addr(&self, config: &AppConfig) -> anyhow::Result<SocketAddr> {
        let host = self.host.as_deref().unwrap_or(&config.server.host);
        let ip: IpAddr = host
            .parse()
            .with_context(|| format!("invalid bind address '{}'", host))?;
        Ok(SocketAddr::new(ip, self.port.unwrap_or(config.server.port)))
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let config = crate::config::config();

    match &cli.command {
        Commands::Algorithms => commands::serve::algorithms(config, cli.bind_addr(config)?).await,
        Commands::Tasks => commands::serve::tasks(config, cli.bind_addr(config)?).await,
        Commands::Balance { args } => commands::balance::handle(args, output_format),
    }
}
