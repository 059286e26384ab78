use clap::Parser;
use log::*;
use std::rc::Rc;
use tokio_util::sync::CancellationToken;

use createrelease::{
    ReleaseBotError, Result,
    cli::Args,
    forge::{github::Github, manager::ForgeManager},
    orchestrator::{Orchestrator, Outcome, settle::SettleTimer},
    shutdown,
};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("createrelease")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

async fn run(args: &Args) -> Result<Outcome> {
    let release_config = args.release_config()?;
    let orchestrator_config = args.orchestrator_config(&release_config)?;

    let github = Github::new(release_config.remote_config(&args.api_url))?;
    let forge = Rc::new(ForgeManager::new(Box::new(github)));

    info!("handling event for {}", forge.repo_name());

    let cancel = CancellationToken::new();
    shutdown::install_signal_handlers(cancel.clone())?;

    let orchestrator = Orchestrator::builder()
        .settle_timer(SettleTimer::new(
            orchestrator_config.settle_delay,
            cancel,
        ))
        .config(Rc::new(orchestrator_config))
        .forge(forge)
        .build()?;

    orchestrator.run(&release_config.event).await
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli_args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprintln!("{}", ReleaseBotError::from(err));
            std::process::exit(1);
        }
    };

    initialize_logger(cli_args.debug)?;

    match run(&cli_args).await {
        Ok(Outcome::Released { tag, url }) => {
            info!("released {tag}: {url}");
        }
        Ok(Outcome::Abandoned { pr_number }) => {
            info!("release for #{pr_number} abandoned");
        }
        Ok(Outcome::Skipped(_)) => {}
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    }

    Ok(())
}
