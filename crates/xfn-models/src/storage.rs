//! GCP storage managed resources (`storage.gcp.upbound.io/v1beta1`).

use serde::{Deserialize, Serialize};

use crate::{CanonicalForm, ObjectMeta};

pub const API_VERSION: &str = "storage.gcp.upbound.io/v1beta1";

// ---------------------------------------------------------------------------
// Bucket
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ObjectMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<BucketSpec>,
}

impl Bucket {
    pub fn new(spec: BucketSpec) -> Self {
        Self {
            api_version: Some(API_VERSION.into()),
            kind: Some(Self::KIND.into()),
            metadata: None,
            spec: Some(spec),
        }
    }

    pub fn location(&self) -> Option<&str> {
        self.spec
            .as_ref()
            .and_then(|s| s.for_provider.as_ref())
            .and_then(|p| p.location.as_deref())
    }

    /// Provider-assigned bucket name, once the provider has created the bucket.
    pub fn external_name(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(ObjectMeta::external_name)
    }
}

impl CanonicalForm for Bucket {
    const API_VERSION: &'static str = API_VERSION;
    const KIND: &'static str = "Bucket";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_provider: Option<BucketForProvider>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketForProvider {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versioning: Option<Vec<VersioningItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersioningItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

// ---------------------------------------------------------------------------
// BucketACL
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketAcl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ObjectMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<BucketAclSpec>,
}

impl BucketAcl {
    pub fn new(spec: BucketAclSpec) -> Self {
        Self {
            api_version: Some(API_VERSION.into()),
            kind: Some(Self::KIND.into()),
            metadata: None,
            spec: Some(spec),
        }
    }
}

impl CanonicalForm for BucketAcl {
    const API_VERSION: &'static str = API_VERSION;
    const KIND: &'static str = "BucketACL";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketAclSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_provider: Option<BucketAclForProvider>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketAclForProvider {
    /// External name of the bucket this ACL governs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predefined_acl: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn acl_fields_use_provider_casing() {
        let acl = BucketAcl::new(BucketAclSpec {
            for_provider: Some(BucketAclForProvider {
                bucket: Some("my-bukkit".into()),
                predefined_acl: Some("private".into()),
            }),
        });
        assert_eq!(
            serde_json::to_value(&acl).unwrap(),
            json!({
                "apiVersion": "storage.gcp.upbound.io/v1beta1",
                "kind": "BucketACL",
                "spec": { "forProvider": { "bucket": "my-bukkit", "predefinedAcl": "private" } },
            })
        );
    }

    #[test]
    fn explicit_false_versioning_is_kept() {
        let item = VersioningItem {
            enabled: Some(false),
        };
        assert_eq!(serde_json::to_value(&item).unwrap(), json!({ "enabled": false }));
        assert_eq!(
            serde_json::to_value(VersioningItem::default()).unwrap(),
            json!({})
        );
    }
}
