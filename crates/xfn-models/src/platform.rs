//! Composite resource served by the function (`platform.example.com/v1alpha1`).

use serde::{Deserialize, Serialize};

use crate::{CanonicalForm, ObjectMeta};

pub const API_VERSION: &str = "platform.example.com/v1alpha1";

/// User-facing storage bucket request (`XStorageBucket`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XStorageBucket {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ObjectMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<XStorageBucketSpec>,
}

impl XStorageBucket {
    pub fn new(parameters: XStorageBucketParameters) -> Self {
        Self {
            api_version: Some(API_VERSION.into()),
            kind: Some(Self::KIND.into()),
            metadata: None,
            spec: Some(XStorageBucketSpec {
                parameters: Some(parameters),
            }),
        }
    }

    pub fn parameters(&self) -> Option<&XStorageBucketParameters> {
        self.spec.as_ref().and_then(|s| s.parameters.as_ref())
    }
}

impl CanonicalForm for XStorageBucket {
    const API_VERSION: &'static str = API_VERSION;
    const KIND: &'static str = "XStorageBucket";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XStorageBucketSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<XStorageBucketParameters>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XStorageBucketParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Predefined ACL name, e.g. `private` or `publicRead`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versioning: Option<bool>,
}
