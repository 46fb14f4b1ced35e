use crate::error::{ReleaseError, Result};
use crate::version::DEFAULT_SEPARATOR;

/// Environment variable a pipeline uses to hand the webhook target project
/// id to this tool.
pub const TRIGGER_PROJECT_ENV: &str = "RELEASE_TRIGGER_PROJECT_ID";

/// Default target ref when none is configured.
pub const DEFAULT_TARGET_REF: &str = "master";

/// Metadata attached to a run that was started by an inbound webhook event.
///
/// Absent for manually/explicitly configured runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerCause {
    pub target_project_id: u64,
}

impl TriggerCause {
    /// Read the trigger metadata from the environment, the way a pipeline
    /// injects it. Absent or unparsable values mean "no webhook trigger".
    pub fn from_env() -> Option<Self> {
        let raw = std::env::var(TRIGGER_PROJECT_ENV).ok()?;
        let target_project_id = raw.trim().parse().ok()?;
        Some(TriggerCause { target_project_id })
    }
}

/// Where the resolved project id came from.
///
/// A webhook trigger always overrides the explicitly configured id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSource {
    Explicit(u64),
    FromWebhook(u64),
}

impl ProjectSource {
    /// Resolve the project id once, before orchestration begins.
    pub fn resolve(explicit: Option<u64>, cause: Option<&TriggerCause>) -> Result<Self> {
        match (cause, explicit) {
            (Some(cause), _) => Ok(ProjectSource::FromWebhook(cause.target_project_id)),
            (None, Some(id)) => Ok(ProjectSource::Explicit(id)),
            (None, None) => Err(ReleaseError::MissingProject),
        }
    }

    pub fn project_id(&self) -> u64 {
        match self {
            ProjectSource::Explicit(id) | ProjectSource::FromWebhook(id) => *id,
        }
    }
}

/// Resolved inputs for one orchestration run.
///
/// Constructed once per invocation from configured parameters (plus an
/// optional webhook override for the project id), consumed immediately,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRequest {
    pub project: ProjectSource,
    pub target_ref: String,
    pub tag_schema: String,
    pub separator: String,
    pub changelog: String,
}

impl ReleaseRequest {
    /// Build a request from the configuration surface, applying defaults:
    /// empty separator becomes `.`, empty target ref becomes `master`.
    pub fn new(
        project: ProjectSource,
        target_ref: impl Into<String>,
        tag_schema: impl Into<String>,
        separator: impl Into<String>,
        changelog: impl Into<String>,
    ) -> Self {
        let target_ref = non_empty_or(target_ref.into(), DEFAULT_TARGET_REF);
        let separator = non_empty_or(separator.into(), DEFAULT_SEPARATOR);

        ReleaseRequest {
            project,
            target_ref,
            tag_schema: tag_schema.into(),
            separator,
            changelog: changelog.into(),
        }
    }
}

fn non_empty_or(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}
