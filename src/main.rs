//! Danqing - AI image generation CLI for Cloudflare Workers AI.

mod adapters;
mod cassette;
mod cli;
mod config;
mod context;
mod error;
mod model;
mod normalize;
mod output;
mod ports;

use std::process;

use clap::Parser;
use log::{debug, info};

use crate::cassette::config::{cassette_mode, CassetteMode};
use crate::cli::Cli;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::normalize::normalize_prompt;
use crate::output::write_image;
use crate::ports::ImageRequest;

#[tokio::main]
async fn main() {
    // Parse errors exit 1 like every other failure; clap's own exit would
    // be 2. Help and version still print to stdout and exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Default to info-level output, debug for this crate with `--verbose`;
/// `RUST_LOG` wins when set.
fn init_logging(verbose: bool) {
    let default_filters = if verbose { "info,danqing=debug" } else { "info" };
    let filters = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filters.to_string());
    pretty_env_logger::formatted_builder().parse_filters(&filters).init();
}

async fn run(cli: Cli) -> Result<(), error::GenError> {
    // Usage errors surface before any config or network work.
    let (prompt, output_path) = cli.resolve()?;

    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(error::GenError::Config)?;
    debug!("config loaded from {}", config_path.display());

    let (ctx, recording_session) = match cassette_mode() {
        CassetteMode::Replay(cassette_path) => {
            debug!("replaying from {}", cassette_path.display());
            (ServiceContext::replaying(&cassette_path)?, None)
        }
        CassetteMode::Recording => {
            debug!("recording mode enabled");
            let (ctx, session) = ServiceContext::recording(&config)?;
            (ctx, Some(session))
        }
        CassetteMode::Live => (ServiceContext::live(&config)?, None),
    };

    let final_prompt = normalize_prompt(ctx.translator.as_ref(), &prompt).await;

    info!("generating image");
    let request = ImageRequest { prompt: final_prompt };
    let payload = ctx.generator.generate(&request).await?;

    write_image(&payload.data, &output_path)?;
    eprintln!("Saved: {}", output_path.display());

    // Finish recording if active
    if let Some(session) = recording_session {
        // The adapters hold recorder handles; they must be gone before
        // finish() can take sole ownership.
        drop(ctx);
        match session.finish() {
            Ok(path) => eprintln!("Cassette saved: {}", path.display()),
            Err(e) => eprintln!("Warning: failed to save cassette: {e}"),
        }
    }

    Ok(())
}
