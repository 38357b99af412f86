//! Resolve job status via sacct.

use crate::job_id::JobId;
use crate::types::{ClusterStatus, SlurmJobState};
use clusterstat_parsers::{first_field, run_command_allow_failure};
use thiserror::Error;
use tokio::process::Command;

#[derive(Error, Debug)]
pub enum SacctError {
    #[error("Failed to execute sacct: {0}")]
    ExecutionError(String),
}

/// States in which the job has not finished yet.
const ACTIVE_STATES: [&str; 5] = [
    "PENDING",
    "CONFIGURING",
    "COMPLETING",
    "RUNNING",
    "SUSPENDED",
];

/// Parse the state column of the first sacct record.
///
/// The state is matched by containment rather than equality so decorated
/// names still classify, e.g. `COMPLETED+` or a token glued to other text.
fn parse_state(output: &str) -> SlurmJobState {
    // sacct states can have suffixes like "CANCELLED by 12345"
    let base_state = first_field(output);

    if base_state.contains("COMPLETED") {
        return SlurmJobState::Completed;
    }

    match ACTIVE_STATES
        .iter()
        .find(|active| base_state.contains(*active))
    {
        Some(active) => SlurmJobState::from_name(active),
        None => SlurmJobState::from_name(base_state),
    }
}

/// Classify raw sacct output into a cluster status.
pub fn classify(output: &str) -> ClusterStatus {
    parse_state(output).cluster_status()
}

fn sacct_command(sacct: &str, job: &JobId) -> Command {
    let mut cmd = Command::new(sacct);
    cmd.args(["-j", &job.id, "--format", "State", "--noheader"]);
    if let Some(cluster) = &job.cluster {
        cmd.args(["--clusters", cluster]);
    }
    cmd
}

/// Query the raw state column for a job.
///
/// A non-zero sacct exit is logged and whatever it printed is returned.
pub async fn query_state(sacct: &str, job: &JobId) -> Result<String, SacctError> {
    let mut cmd = sacct_command(sacct, job);
    tracing::debug!("Running {:?}", cmd.as_std());

    let stdout = run_command_allow_failure(&mut cmd, sacct)
        .await
        .map_err(|e| SacctError::ExecutionError(e.to_string()))?;

    tracing::debug!("sacct output for {}: {:?}", job, stdout);
    Ok(stdout)
}

/// Resolve the cluster status of a job.
///
/// Never fails: a job sacct cannot describe is reported as failed.
pub async fn resolve_status(sacct: &str, job: &JobId) -> ClusterStatus {
    if job.is_empty() {
        tracing::warn!("Empty job ID, reporting failed");
        return ClusterStatus::Failed;
    }

    let output = match query_state(sacct, job).await {
        Ok(output) => output,
        Err(e) => {
            tracing::warn!("{}", e);
            String::new()
        }
    };

    let status = classify(&output);
    match first_field(&output) {
        "" => tracing::warn!("sacct returned no state for job {}", job),
        raw => tracing::debug!("Job {} is {} -> {}", job, raw, status),
    }
    status
}
