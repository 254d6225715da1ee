use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Which part of a setup run produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Scaffold,
    Provision,
    Bootstrap,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scaffold => write!(f, "scaffold"),
            Self::Provision => write!(f, "provision"),
            Self::Bootstrap => write!(f, "bootstrap"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StepStatus {
    Succeeded,
    Failed { reason: String },
    Skipped { reason: String },
}

impl StepStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Outcome of a single scaffold, provisioning, or bootstrap step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub name: String,
    pub phase: Phase,
    #[serde(flatten)]
    pub status: StepStatus,
    /// Whether a failure of this step aborts the run.
    pub critical: bool,
}

impl StepReport {
    pub fn succeeded(name: impl Into<String>, phase: Phase, critical: bool) -> Self {
        Self {
            name: name.into(),
            phase,
            status: StepStatus::Succeeded,
            critical,
        }
    }

    pub fn failed(
        name: impl Into<String>,
        phase: Phase,
        critical: bool,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phase,
            status: StepStatus::Failed {
                reason: reason.into(),
            },
            critical,
        }
    }

    pub fn skipped(name: impl Into<String>, phase: Phase, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phase,
            status: StepStatus::Skipped {
                reason: reason.into(),
            },
            critical: false,
        }
    }
}

/// Summary of one full setup run.
#[derive(Debug, Clone, Serialize)]
pub struct SetupReport {
    pub run_id: Uuid,
    pub project: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub steps: Vec<StepReport>,
}

impl SetupReport {
    pub fn start(project: impl Into<String>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            project: project.into(),
            started_at: Utc::now(),
            finished_at: None,
            steps: Vec::new(),
        }
    }

    pub fn record(&mut self, report: StepReport) {
        self.steps.push(report);
    }

    pub fn finish(mut self) -> Self {
        self.finished_at = Some(Utc::now());
        self
    }

    pub fn succeeded(&self) -> usize {
        self.steps.iter().filter(|s| s.status.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.steps.iter().filter(|s| s.status.is_failure()).count()
    }

    pub fn skipped(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s.status, StepStatus::Skipped { .. }))
            .count()
    }

    /// Wall-clock duration, once the run has finished.
    pub fn elapsed(&self) -> Option<chrono::Duration> {
        self.finished_at.map(|end| end - self.started_at)
    }
}
