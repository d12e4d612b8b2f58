mod cli;
mod printer;

use std::process::ExitCode;

use anyhow::{Context, Result};
use openapi_spec::{config::Config, project::ProjectConfig, tooling::ToolingClient, SpecGenerator};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::Cli::parse();

    // CLI overrides env and rc file
    let mut cfg = Config::load();
    args.apply(&mut cfg);

    init_tracing(cfg.get_bool("VERBOSE"));
    debug!(path = %cfg.config_path.display(), "loaded config");

    match run(&args, &cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            printer::eprint_error(&format!("error: {:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &cli::Cli, cfg: &Config) -> Result<()> {
    let project_path = cfg.project_config_path();
    let project = ProjectConfig::load(&project_path)?;
    let client = ToolingClient::from_config(cfg).context("cannot connect to org")?;

    SpecGenerator::new(&client, &project)
        .generate(&args.spec_options())
        .await?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "warn,openapi_spec=debug" } else { "warn,openapi_spec=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
