use anyhow::Result;
use clap::{CommandFactory, Parser};
use fc_zonegen::usage::FULL_USAGE_GUIDE;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod generate;
mod path_guard;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.full_usage {
        Cli::command().print_help()?;
        println!();
        println!();
        println!("{FULL_USAGE_GUIDE}");
        return Ok(());
    }

    generate::run_generate(cli)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
