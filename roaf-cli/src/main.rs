//! Command line client that prints the next ROAF waste pickup dates.

mod cli;
mod config;
mod logging;
mod output;

use std::io;

use anyhow::Result;
use clap::Parser;
use reqwest::Client;
use roaf_provider_norkart::NorkartProvider;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Arguments::parse();

    // Configuration has to resolve before anything touches the network,
    // and the log file path comes out of it.
    let config = config::Config::load()?;
    logging::init(&config.log_file)?;

    match run(&args, config).await {
        Ok(()) => Ok(()),
        Err(err) => {
            error!(error = %err, "run failed");
            Err(err)
        }
    }
}

async fn run(args: &cli::Arguments, config: config::Config) -> Result<()> {
    let client = Client::builder().user_agent("roaf/0.1").build()?;
    let provider = NorkartProvider::new(client, config.provider);

    let records = provider.pickup_calendar().await?;

    let mut stdout = io::stdout().lock();
    if args.json {
        output::render_json(&records, &mut stdout)?;
    } else {
        output::render_text(&records, &mut stdout)?;
    }
    Ok(())
}
