//! clusterstat - Snakemake `--cluster-status` hook for SLURM.

use clap::Parser;
use clusterstat_cli::Args;
use clusterstat_slurm::{JobId, resolve_status};
use miette::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let job = JobId::parse(&args.job_id)?;
    tracing::debug!("Resolving job {} with {}", job, args.sacct);
    let status = resolve_status(&args.sacct, &job).await;

    println!("{}", status);
    Ok(())
}

/// Log to stderr; stdout carries only the status line.
fn init_logging(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
