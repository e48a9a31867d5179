//! Desired parameters of the composite.

use xfn_abi::RunFunctionRequest;
use xfn_models::{XStorageBucket, XStorageBucketParameters};
use xfn_sdk::resource;

use crate::ComposeError;

/// Parameters read once per invocation from `spec.parameters`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    pub location: String,
    /// Predefined ACL applied to the bucket.
    pub access_level: String,
    pub versioning_enabled: bool,
}

impl Parameters {
    pub fn from_composite(xr: &XStorageBucket) -> Result<Self, ComposeError> {
        let params = xr.parameters().ok_or(ComposeError::MissingParameters)?;
        Self::from_spec(params)
    }

    fn from_spec(params: &XStorageBucketParameters) -> Result<Self, ComposeError> {
        Ok(Self {
            location: params
                .location
                .clone()
                .ok_or(ComposeError::MissingParameter("location"))?,
            access_level: params
                .acl
                .clone()
                .ok_or(ComposeError::MissingParameter("acl"))?,
            versioning_enabled: params
                .versioning
                .ok_or(ComposeError::MissingParameter("versioning"))?,
        })
    }
}

/// Read [`Parameters`] from the observed composite of `req`.
pub fn extract(req: &RunFunctionRequest) -> Result<Parameters, ComposeError> {
    let xr: XStorageBucket = resource::observed_composite(req)
        .map_err(ComposeError::Composite)?
        .ok_or(ComposeError::MissingComposite)?;
    Parameters::from_composite(&xr)
}
