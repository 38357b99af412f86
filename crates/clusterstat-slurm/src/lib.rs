//! SLURM integration for clusterstat.
//!
//! Resolve a job's cluster status from sacct.

pub mod job_id;
pub mod sacct;
pub mod types;

pub use job_id::{JobId, JobIdError, SUBMITTED_PLACEHOLDER};
pub use sacct::{SacctError, classify, query_state, resolve_status};
pub use types::{ClusterStatus, SlurmJobState};
