//! CLI argument parsing for clusterstat.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "clusterstat")]
#[command(about = "Snakemake cluster-status hook for SLURM: prints success, running or failed")]
pub struct Args {
    /// SLURM job ID as printed by `sbatch --parsable`
    pub job_id: String,

    /// sacct executable to query
    #[arg(long, env = "CLUSTERSTAT_SACCT", default_value = "sacct")]
    pub sacct: String,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Default log filter when RUST_LOG is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
