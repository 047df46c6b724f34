use anyhow::Context;
use clap::Parser;
use std::io::Read;
use volume_discount::utils::logger;
use volume_discount::{evaluate, CliConfig, RunInput};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting volume-discount evaluation");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // A broken payload is a CLI-level failure; the engine itself only ever
    // degrades once it has a parsed input.
    let input = match &config.input {
        Some(path) => {
            RunInput::from_file(path).with_context(|| format!("reading run input from {}", path))?
        }
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("reading run input from stdin")?;
            RunInput::from_json_str(&raw).context("parsing run input from stdin")?
        }
    };

    tracing::debug!("Evaluating {} cart lines", input.cart_lines.len());
    let result = evaluate(&input);
    tracing::info!("Produced {} discount instructions", result.discounts.len());

    let rendered = if config.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", rendered);

    Ok(())
}
