//! Composition function for `XStorageBucket`.
//!
//! Each invocation always desires the bucket. The bucket ACL refers to the bucket
//! by the name the provider assigned it, so the ACL is only desired once an
//! observed bucket carries that name. Until then the function reports that it is
//! waiting and the orchestrator calls again on its own schedule.

mod compose;
mod error;
pub mod params;
pub mod readiness;
pub mod synth;

pub use compose::BucketComposition;
pub use error::ComposeError;
pub use params::Parameters;
pub use readiness::ExternalName;

/// Composition resource name of the bucket.
pub const BUCKET: &str = "bucket";

/// Composition resource name of the bucket ACL.
pub const ACL: &str = "acl";

/// Result message while the bucket has no provider-assigned name yet.
pub const WAITING_MESSAGE: &str = "waiting for bucket to be created";
