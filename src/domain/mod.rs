//! Domain records and project resolution - pure data, no host access

pub mod release;
pub mod request;
pub mod tag;

pub use release::Release;
pub use request::{ProjectSource, ReleaseRequest, TriggerCause};
pub use tag::{CommitRef, Tag};
