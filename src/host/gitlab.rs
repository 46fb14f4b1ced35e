use reqwest::blocking::{Client, RequestBuilder, Response};
use serde_json::json;
use tracing::debug;

use crate::domain::Tag;
use crate::error::{ReleaseError, Result};
use crate::host::HostClient;

/// Blocking GitLab v4 REST client.
///
/// Covers exactly the three operations a release run needs. Calls block the
/// invoking pipeline thread until the host responds; no retries are made.
pub struct GitLabClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl GitLabClient {
    /// Create a client for a GitLab instance.
    ///
    /// # Arguments
    /// * `base_url` - Instance root, e.g. "https://gitlab.example.com"
    /// * `token` - Private token, if the instance requires one
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        GitLabClient {
            http: Client::new(),
            base_url,
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v4/{}", self.base_url, path)
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header("PRIVATE-TOKEN", token),
            None => request,
        }
    }

    /// Turn a non-success response into an opaque host error carrying the
    /// status and response body.
    fn check(response: Response, operation: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        Err(ReleaseError::host(format!(
            "{} failed with status {}: {}",
            operation, status, body
        )))
    }
}

impl HostClient for GitLabClient {
    fn list_tags(&self, project_id: u64) -> Result<Vec<Tag>> {
        let url = self.url(&format!("projects/{}/repository/tags", project_id));
        debug!(url = %url, "listing tags");

        let response = self.authed(self.http.get(&url)).send()?;
        let response = Self::check(response, "list tags")?;

        let tags: Vec<Tag> = response
            .json()
            .map_err(|e| ReleaseError::host(format!("cannot decode tag list: {}", e)))?;
        Ok(tags)
    }

    fn create_tag(
        &self,
        project_id: u64,
        target_ref: &str,
        tag_name: &str,
        message: Option<&str>,
        release_description: Option<&str>,
    ) -> Result<()> {
        let url = self.url(&format!("projects/{}/repository/tags", project_id));
        debug!(url = %url, tag = tag_name, target = target_ref, "creating tag");

        let mut params = vec![("tag_name", tag_name), ("ref", target_ref)];
        if let Some(message) = message {
            params.push(("message", message));
        }
        if let Some(description) = release_description {
            params.push(("release_description", description));
        }

        let response = self.authed(self.http.post(&url)).query(&params).send()?;
        Self::check(response, "create tag")?;
        Ok(())
    }

    fn create_release(&self, project_id: u64, tag_name: &str, description: &str) -> Result<()> {
        let url = self.url(&format!("projects/{}/releases", project_id));
        debug!(url = %url, tag = tag_name, "creating release");

        let body = json!({
            "tag_name": tag_name,
            "description": description,
        });

        let response = self.authed(self.http.post(&url)).json(&body).send()?;
        Self::check(response, "create release")?;
        Ok(())
    }
}
