//! Desired managed resources, as pure functions of their inputs.

use xfn_models::{
    Bucket, BucketAcl, BucketAclForProvider, BucketAclSpec, BucketForProvider, BucketSpec,
    VersioningItem,
};

use crate::{ExternalName, Parameters};

/// Desired bucket. The versioning block is always present, including when disabled.
pub fn bucket(params: &Parameters) -> Bucket {
    Bucket::new(BucketSpec {
        for_provider: Some(BucketForProvider {
            location: Some(params.location.clone()),
            versioning: Some(vec![VersioningItem {
                enabled: Some(params.versioning_enabled),
            }]),
        }),
    })
}

/// Desired ACL for the bucket named `bucket`.
pub fn bucket_acl(params: &Parameters, bucket: &ExternalName) -> BucketAcl {
    BucketAcl::new(BucketAclSpec {
        for_provider: Some(BucketAclForProvider {
            bucket: Some(bucket.as_str().to_string()),
            predefined_acl: Some(params.access_level.clone()),
        }),
    })
}
