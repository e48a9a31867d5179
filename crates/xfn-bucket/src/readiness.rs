//! Readiness of the bucket, derived from observed state only.

use std::fmt;

use tracing::debug;
use xfn_abi::RunFunctionRequest;
use xfn_models::Bucket;
use xfn_sdk::resource;

use crate::BUCKET;

/// Provider-assigned bucket name. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExternalName(String);

impl ExternalName {
    /// Returns `None` for an empty name; an empty annotation means "not created".
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        (!name.is_empty()).then_some(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExternalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ExternalName> for String {
    fn from(value: ExternalName) -> Self {
        value.0
    }
}

/// External name of the observed bucket, if the provider has created it.
///
/// A missing bucket, a bucket without the external-name annotation, an empty
/// annotation and an observed object that does not parse as a bucket all read
/// as "not ready".
pub fn inspect(req: &RunFunctionRequest) -> Option<ExternalName> {
    let bucket: Bucket = match resource::observed(req, BUCKET) {
        Ok(Some(bucket)) => bucket,
        Ok(None) => return None,
        Err(err) => {
            debug!(resource = BUCKET, error = %err, "observed bucket unreadable; not ready");
            return None;
        }
    };
    bucket.external_name().and_then(ExternalName::new)
}
