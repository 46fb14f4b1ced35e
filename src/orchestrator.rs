//! Release orchestration - the sequential control flow of one run.
//!
//! One invocation walks resolve project → fetch tags → filter → select
//! latest → increment → create tag → create release, blocking on each host
//! call. All errors are contained here: [ReleaseOrchestrator::run] logs the
//! failure to the progress sink and returns a [RunOutcome] value, never
//! panicking or propagating, so the surrounding pipeline layer decides what
//! a logged failure means for the build.

use tracing::debug;

use crate::domain::{ProjectSource, Release, ReleaseRequest, TriggerCause};
use crate::error::{ReleaseError, Result};
use crate::host::HostClient;
use crate::schema::TagSchemaMatcher;
use crate::sink::ProgressSink;
use crate::version::next_tag_name;

/// Configured inputs of one run, before project resolution.
///
/// The explicit project id comes from configuration; the trigger cause, when
/// present, carries the webhook's own target project id and wins.
#[derive(Debug, Clone, Default)]
pub struct RunParams {
    pub explicit_project: Option<u64>,
    pub cause: Option<TriggerCause>,
    pub target_ref: String,
    pub tag_schema: String,
    pub separator: String,
    pub changelog: String,
}

/// How one orchestration run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// Tag and release created on the host.
    Released { tag: String, release: Release },
    /// No existing tag matched the schema - the normal state for a first
    /// release, reported as informational.
    NoMatchingTag { schema: String },
    /// The run stopped on an error; already logged to the sink.
    Failed(ReleaseError),
}

impl RunOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, RunOutcome::Failed(_))
    }
}

/// Drives one release run against an injected host client.
///
/// The client and the sink are both handed in explicitly; the orchestrator
/// never looks collaborators up from ambient state. A missing client is a
/// reportable condition of its own, not a construction error, because the
/// run must still log it to the pipeline.
pub struct ReleaseOrchestrator<'a> {
    client: Option<&'a dyn HostClient>,
    sink: Option<&'a dyn ProgressSink>,
}

impl<'a> ReleaseOrchestrator<'a> {
    pub fn new(client: Option<&'a dyn HostClient>, sink: Option<&'a dyn ProgressSink>) -> Self {
        ReleaseOrchestrator { client, sink }
    }

    /// Run the release operation to completion.
    ///
    /// Every failure is caught, logged, and returned as an outcome. No
    /// remote call is retried; once tag creation has succeeded there is no
    /// undo, so a failed release creation leaves the tag on the host.
    pub fn run(&self, params: &RunParams) -> RunOutcome {
        match self.execute(params) {
            Ok((tag, release)) => {
                self.println(&format!("Created tag {} and its release", tag));
                RunOutcome::Released { tag, release }
            }
            Err(ReleaseError::NoMatchingTag { schema }) => {
                self.println(&format!(
                    "No existing tag matches schema '{}'; nothing to increment",
                    schema
                ));
                RunOutcome::NoMatchingTag { schema }
            }
            Err(e) => {
                self.println(&format!("Release run failed: {}", e));
                RunOutcome::Failed(e)
            }
        }
    }

    fn execute(&self, params: &RunParams) -> Result<(String, Release)> {
        let project = ProjectSource::resolve(params.explicit_project, params.cause.as_ref())?;
        let request = ReleaseRequest::new(
            project,
            params.target_ref.clone(),
            params.tag_schema.clone(),
            params.separator.clone(),
            params.changelog.clone(),
        );

        let project_id = request.project.project_id();
        self.println(&format!("Accessing project {}", project_id));

        let client = self.client.ok_or(ReleaseError::NoClientConfigured)?;

        self.println("Beginning with release process");
        let tags = client.list_tags(project_id)?;
        self.println(&format!("Fetched {} tags", tags.len()));

        let matcher = TagSchemaMatcher::new(&request.tag_schema)?;
        let matching = matcher.filter(tags.iter().map(|tag| tag.name.as_str()));
        if matching.is_empty() {
            return Err(ReleaseError::NoMatchingTag {
                schema: matcher.pattern().to_string(),
            });
        }

        // Plain code-point ordering, deliberately not semantic-version
        // ordering: with mixed digit widths "1.9" sorts above "1.10".
        let latest = matching
            .iter()
            .max()
            .cloned()
            .ok_or(ReleaseError::NoMatchingTag {
                schema: matcher.pattern().to_string(),
            })?;
        self.println(&format!("Latest matching tag: {}", latest));

        let next = next_tag_name(&latest, &request.separator)?;
        self.println(&format!("Next tag: {}", next));

        client.create_tag(project_id, &request.target_ref, &next, None, None)?;
        self.println(&format!(
            "Created tag {} at ref {}",
            next, request.target_ref
        ));

        client.create_release(project_id, &next, &request.changelog)?;

        let release = Release::new(next.clone(), request.changelog.clone());
        Ok((next, release))
    }

    fn println(&self, message: &str) {
        match self.sink {
            Some(sink) => sink.line(message),
            None => debug!("{}", message),
        }
    }
}
