//! fleet-cli: one-shot import of vehicle masters from Excel into MongoDB

mod cli;
mod config;
mod db;
mod excel;
mod vehicle;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Import(args) => cli::commands::import::handle_import_command(args).await,
        Commands::Check(args) => cli::commands::check::handle_check_command(args).await,
    }
}
