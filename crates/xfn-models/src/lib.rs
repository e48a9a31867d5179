//! Typed schemas for the storage-bucket composition.
//!
//! The types mirror the CRD schemas of the composite (`platform.example.com/v1alpha1`)
//! and of the GCP storage provider (`storage.gcp.upbound.io/v1beta1`). Every field is
//! optional so that "unset" stays distinguishable from `false` or `""` on the wire.

mod canonical;
mod meta;
pub mod platform;
pub mod storage;

pub use canonical::{CanonicalForm, ModelError};
pub use meta::{ANNOTATION_COMPOSITION_RESOURCE_NAME, ANNOTATION_EXTERNAL_NAME, ObjectMeta};
pub use platform::{XStorageBucket, XStorageBucketParameters, XStorageBucketSpec};
pub use storage::{
    Bucket, BucketAcl, BucketAclForProvider, BucketAclSpec, BucketForProvider, BucketSpec,
    VersioningItem,
};
