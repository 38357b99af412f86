//! Job identifiers as handed to the cluster-status hook.

use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

/// What Snakemake captures when sbatch runs without `--parsable` and prints
/// "Submitted batch job N" instead of the bare id.
pub const SUBMITTED_PLACEHOLDER: &str = "Submitted";

#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum JobIdError {
    #[error("Invalid job ID: {0}")]
    #[diagnostic(
        code(clusterstat::missing_parsable),
        help("Did you remember to add the flag --parsable to your sbatch call?")
    )]
    MissingParsable(String),
}

/// A SLURM job id, optionally qualified with the cluster it was submitted to.
///
/// `sbatch --parsable` prints `jobid;cluster` on federated/multi-cluster
/// installations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobId {
    pub id: String,
    pub cluster: Option<String>,
}

impl JobId {
    /// Only the exact placeholder is rejected; a padded one is an ordinary
    /// (unknown) id.
    pub fn parse(raw: &str) -> Result<Self, JobIdError> {
        if raw == SUBMITTED_PLACEHOLDER {
            return Err(JobIdError::MissingParsable(raw.to_string()));
        }

        let raw = raw.trim();

        let (id, cluster) = match raw.split_once(';') {
            Some((id, cluster)) => {
                let cluster = cluster.trim();
                (id.trim(), (!cluster.is_empty()).then(|| cluster.to_string()))
            }
            None => (raw, None),
        };

        Ok(JobId {
            id: id.to_string(),
            cluster,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cluster {
            Some(cluster) => write!(f, "{};{}", self.id, cluster),
            None => f.write_str(&self.id),
        }
    }
}
