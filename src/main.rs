use anyhow::{Context, Result};
use clap::Parser;
use metadata_pull::Harvester;
use metadata_pull::cli::CliArgs;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse before anything else so a usage error never touches the network
    let args = CliArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let harvester =
        Harvester::new(args.to_config()).context("invalid harvest configuration")?;

    let report = harvester
        .run(&args.subfield)
        .await
        .with_context(|| format!("failed to harvest subfield {:?}", args.subfield))?;

    println!(
        "Subfield \"{}\" data saved to {}",
        report.subfield,
        report.output_path.display()
    );
    Ok(())
}
