mod config;
mod load;
mod report;
mod script;

use std::process::ExitCode;

use clap::Parser;
use seams::diagram;
use seams::engine::EngineCore;
use seams::upload::UploadError;

use config::{Cli, Command, ConfigError, NormalizeArgs, ReplayConfig};
use load::LoadError;
use report::ReportError;
use script::ScriptError;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("{0} has no drawable <svg> root")]
    NoDrawableRoot(String),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Replay(args) => run_replay(ReplayConfig::from_args(args)?).await,
        Command::Normalize(args) => run_normalize(&args).await,
    }
}

async fn run_replay(cfg: ReplayConfig) -> Result<(), CliError> {
    let mut core = EngineCore::new();
    core.set_viewport(cfg.width, cfg.height);

    // Count is checked before any file is touched.
    let ticket = core.begin_upload(cfg.files.len())?;
    let files = load::read_pair(&cfg.files).await?;
    core.complete_upload(ticket, files)?;

    if let Some(path) = &cfg.events {
        let text = load::read_source(path).await?.text;
        let events = script::parse(&text)?;
        script::replay(&mut core, &events);
    }

    print!("{}", report::format_listing(&core.listing()));

    if let Some(path) = &cfg.scene_out {
        report::write_json(path, &core.scene()).await?;
    }
    if let Some(path) = &cfg.preview_out {
        report::write_json(path, &core.projection()).await?;
    }
    Ok(())
}

async fn run_normalize(args: &NormalizeArgs) -> Result<(), CliError> {
    let pane = args.pane()?;
    let source = load::read_source(&args.file).await?;
    let diagram =
        diagram::normalize(&source.text, &source.name, pane).ok_or_else(|| CliError::NoDrawableRoot(source.name.clone()))?;
    println!("{}", diagram.content());
    Ok(())
}
