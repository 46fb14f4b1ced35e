//! Remote repository host abstraction
//!
//! The orchestrator talks to the host only through the [HostClient] trait,
//! which carries the three operations a release run needs. Concrete
//! implementations:
//!
//! - [gitlab::GitLabClient]: blocking HTTP implementation against the
//!   GitLab v4 REST API
//! - [mock::MockHostClient]: in-memory double for tests
//!
//! The client is always handed to the orchestrator explicitly; nothing in
//! this crate looks a client up from ambient state.

pub mod gitlab;
pub mod mock;

pub use gitlab::GitLabClient;
pub use mock::MockHostClient;

use crate::domain::Tag;
use crate::error::Result;

/// Remote host operations used by a release run.
///
/// All methods are synchronous and attempted exactly once; retries, if any,
/// belong to the caller's pipeline layer. Implementations map transport
/// failures to [crate::error::ReleaseError::Host].
pub trait HostClient: Send + Sync {
    /// List every tag of a project.
    ///
    /// Fails with a host error on network/auth failure.
    fn list_tags(&self, project_id: u64) -> Result<Vec<Tag>>;

    /// Create a tag pointing at `target_ref`.
    ///
    /// Fails if the ref does not resolve or the tag name already exists on
    /// the host.
    fn create_tag(
        &self,
        project_id: u64,
        target_ref: &str,
        tag_name: &str,
        message: Option<&str>,
        release_description: Option<&str>,
    ) -> Result<()>;

    /// Attach a release record to an existing tag.
    ///
    /// Fails if the tag does not exist on the host.
    fn create_release(&self, project_id: u64, tag_name: &str, description: &str) -> Result<()>;
}
