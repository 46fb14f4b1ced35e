use serde::Deserialize;

/// Release record attached to a tag on the remote host.
///
/// Created at the end of a successful run; ownership passes to the host
/// immediately, this system keeps no copy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub description: String,
}

impl Release {
    pub fn new(tag_name: impl Into<String>, description: impl Into<String>) -> Self {
        Release {
            tag_name: tag_name.into(),
            description: description.into(),
        }
    }
}
