//! SLURM job states and the cluster status they map to.

use std::fmt;

/// Outcome reported to the workflow manager's cluster-status hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterStatus {
    Success,
    Running,
    Failed,
}

impl ClusterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClusterStatus::Success => "success",
            ClusterStatus::Running => "running",
            ClusterStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for ClusterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SLURM job state as reported by sacct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlurmJobState {
    Pending,
    Configuring,
    Running,
    Completing,
    Suspended,
    Completed,
    Failed,
    Cancelled,
    Timeout,
    OutOfMemory,
    NodeFail,
    BootFail,
    Deadline,
    Preempted,
    Unknown(String),
}

impl SlurmJobState {
    /// Look up a state by its exact sacct name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "PENDING" => SlurmJobState::Pending,
            "CONFIGURING" => SlurmJobState::Configuring,
            "RUNNING" => SlurmJobState::Running,
            "COMPLETING" => SlurmJobState::Completing,
            "SUSPENDED" => SlurmJobState::Suspended,
            "COMPLETED" => SlurmJobState::Completed,
            "FAILED" => SlurmJobState::Failed,
            "CANCELLED" => SlurmJobState::Cancelled,
            "TIMEOUT" => SlurmJobState::Timeout,
            "OUT_OF_MEMORY" => SlurmJobState::OutOfMemory,
            "NODE_FAIL" => SlurmJobState::NodeFail,
            "BOOT_FAIL" => SlurmJobState::BootFail,
            "DEADLINE" => SlurmJobState::Deadline,
            "PREEMPTED" => SlurmJobState::Preempted,
            other => SlurmJobState::Unknown(other.to_string()),
        }
    }

    /// Map to the tri-state hook outcome.
    ///
    /// Anything that is neither finished successfully nor still active counts
    /// as failed, including states sacct may add in future releases.
    pub fn cluster_status(&self) -> ClusterStatus {
        match self {
            SlurmJobState::Completed => ClusterStatus::Success,
            SlurmJobState::Pending
            | SlurmJobState::Configuring
            | SlurmJobState::Running
            | SlurmJobState::Completing
            | SlurmJobState::Suspended => ClusterStatus::Running,
            _ => ClusterStatus::Failed,
        }
    }
}
