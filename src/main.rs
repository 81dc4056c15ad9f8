mod app;
mod cli;
mod config;
mod consts;
mod error;
mod logging;
mod output;
mod pricing;

use clap::Parser;
use tracing::debug;

use app::{CommandContext, run_command};
use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let cli = if cli.no_config {
        debug!("skipping config files");
        cli
    } else {
        let config = Config::load();
        cli.with_config(&config)
    };

    let result = CommandContext::from_cli(&cli)
        .and_then(|ctx| run_command(cli.command.as_ref(), &ctx));

    match result {
        Ok(out) => {
            print!("{out}");
            if !out.ends_with('\n') {
                println!();
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
