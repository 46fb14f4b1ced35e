use std::sync::Mutex;

use crate::domain::{Release, Tag};
use crate::error::{ReleaseError, Result};
use crate::host::HostClient;

/// A create-tag call as the mock observed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTag {
    pub project_id: u64,
    pub target_ref: String,
    pub tag_name: String,
    pub message: Option<String>,
    pub release_description: Option<String>,
}

/// Mock host for testing without a network dependency.
///
/// Behaves like the real host for the cases the orchestrator cares about:
/// created tags show up in subsequent `list_tags` calls, creating a tag that
/// already exists is a conflict, and a release requires its tag to exist.
/// Failure injection covers the host-communication error paths.
pub struct MockHostClient {
    tags: Mutex<Vec<Tag>>,
    snapshot: Option<Vec<Tag>>,
    created_tags: Mutex<Vec<CreatedTag>>,
    created_releases: Mutex<Vec<Release>>,
    fail_list_tags: bool,
    fail_create_release: bool,
}

impl MockHostClient {
    /// Create a mock host with no tags.
    pub fn new() -> Self {
        MockHostClient {
            tags: Mutex::new(Vec::new()),
            snapshot: None,
            created_tags: Mutex::new(Vec::new()),
            created_releases: Mutex::new(Vec::new()),
            fail_list_tags: false,
            fail_create_release: false,
        }
    }

    /// Create a mock host seeded with existing tag names.
    pub fn with_tags<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mock = Self::new();
        {
            let mut tags = mock.tags.lock().unwrap();
            for name in names {
                tags.push(Tag::new(name));
            }
        }
        mock
    }

    /// Freeze `list_tags` at the current tag set. Later created tags still
    /// conflict on creation but no longer show up in listings, which is how
    /// two racing runs end up computing the same tag name.
    pub fn with_stale_listing(mut self) -> Self {
        self.snapshot = Some(self.tags.lock().unwrap().clone());
        self
    }

    /// Make `list_tags` fail with a host-communication error.
    pub fn failing_list_tags(mut self) -> Self {
        self.fail_list_tags = true;
        self
    }

    /// Make `create_release` fail with a host-communication error.
    pub fn failing_create_release(mut self) -> Self {
        self.fail_create_release = true;
        self
    }

    /// Every create-tag call observed, in order.
    pub fn created_tags(&self) -> Vec<CreatedTag> {
        self.created_tags.lock().unwrap().clone()
    }

    /// Every create-release call observed, in order.
    pub fn created_releases(&self) -> Vec<Release> {
        self.created_releases.lock().unwrap().clone()
    }
}

impl Default for MockHostClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HostClient for MockHostClient {
    fn list_tags(&self, _project_id: u64) -> Result<Vec<Tag>> {
        if self.fail_list_tags {
            return Err(ReleaseError::host("list tags failed with status 502"));
        }
        match &self.snapshot {
            Some(snapshot) => Ok(snapshot.clone()),
            None => Ok(self.tags.lock().unwrap().clone()),
        }
    }

    fn create_tag(
        &self,
        project_id: u64,
        target_ref: &str,
        tag_name: &str,
        message: Option<&str>,
        release_description: Option<&str>,
    ) -> Result<()> {
        let mut tags = self.tags.lock().unwrap();
        if tags.iter().any(|tag| tag.name == tag_name) {
            return Err(ReleaseError::host(format!(
                "create tag failed with status 409: tag '{}' already exists",
                tag_name
            )));
        }

        tags.push(Tag::new(tag_name));
        self.created_tags.lock().unwrap().push(CreatedTag {
            project_id,
            target_ref: target_ref.to_string(),
            tag_name: tag_name.to_string(),
            message: message.map(str::to_string),
            release_description: release_description.map(str::to_string),
        });
        Ok(())
    }

    fn create_release(&self, _project_id: u64, tag_name: &str, description: &str) -> Result<()> {
        if self.fail_create_release {
            return Err(ReleaseError::host("create release failed with status 500"));
        }

        let tags = self.tags.lock().unwrap();
        if !tags.iter().any(|tag| tag.name == tag_name) {
            return Err(ReleaseError::host(format!(
                "create release failed with status 404: tag '{}' does not exist",
                tag_name
            )));
        }

        self.created_releases
            .lock()
            .unwrap()
            .push(Release::new(tag_name, description));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_lists_seeded_tags() {
        let mock = MockHostClient::with_tags(["v1", "1.0.0"]);
        let tags = mock.list_tags(7).unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "v1");
    }

    #[test]
    fn test_created_tag_becomes_listable() {
        let mock = MockHostClient::new();
        mock.create_tag(7, "master", "1.0.0", None, None).unwrap();
        let tags = mock.list_tags(7).unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "1.0.0");
    }

    #[test]
    fn test_duplicate_tag_conflicts() {
        let mock = MockHostClient::with_tags(["1.0.0"]);
        let err = mock.create_tag(7, "master", "1.0.0", None, None).unwrap_err();
        assert!(err.to_string().contains("409"));
    }

    #[test]
    fn test_release_requires_existing_tag() {
        let mock = MockHostClient::new();
        let err = mock.create_release(7, "1.0.0", "notes").unwrap_err();
        assert!(err.to_string().contains("does not exist"));

        mock.create_tag(7, "master", "1.0.0", None, None).unwrap();
        mock.create_release(7, "1.0.0", "notes").unwrap();
        assert_eq!(mock.created_releases().len(), 1);
    }

    #[test]
    fn test_stale_listing_hides_created_tags() {
        let mock = MockHostClient::with_tags(["1.0.0"]).with_stale_listing();
        mock.create_tag(7, "master", "1.0.1", None, None).unwrap();
        let listed = mock.list_tags(7).unwrap();
        assert_eq!(listed.len(), 1);
        // the created tag still conflicts even though it is not listed
        let err = mock.create_tag(7, "master", "1.0.1", None, None).unwrap_err();
        assert!(err.to_string().contains("409"));
    }

    #[test]
    fn test_failure_injection() {
        let mock = MockHostClient::new().failing_list_tags();
        assert!(mock.list_tags(7).is_err());

        let mock = MockHostClient::with_tags(["1.0.0"]).failing_create_release();
        mock.create_tag(7, "master", "1.0.1", None, None).unwrap();
        assert!(mock.create_release(7, "1.0.1", "notes").is_err());
    }
}
