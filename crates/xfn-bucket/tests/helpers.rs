//! Shared request builders for integration tests.
//!
//! Each integration test compiles this module separately, so some helpers may
//! appear unused in a given test binary.

#![allow(dead_code)]

use std::collections::BTreeMap;

use serde_json::{Value, json};
use xfn_abi::{RequestMeta, Resource, RunFunctionRequest, RunFunctionResponse, State, Struct};
use xfn_bucket::BucketComposition;
use xfn_models::{CanonicalForm, XStorageBucket, XStorageBucketParameters};
use xfn_sdk::{FunctionConfig, run_function};

pub const TAG: &str = "hello";

pub fn parameters(location: &str, acl: &str, versioning: bool) -> XStorageBucketParameters {
    XStorageBucketParameters {
        location: Some(location.into()),
        acl: Some(acl.into()),
        versioning: Some(versioning),
    }
}

pub fn object(value: Value) -> Struct {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

pub fn composite(params: XStorageBucketParameters) -> Resource {
    Resource::new(XStorageBucket::new(params).to_canonical_form().unwrap())
}

/// Observed bucket as the provider reports it, optionally with an external name.
pub fn observed_bucket(external_name: Option<&str>) -> Resource {
    let mut body = json!({
        "apiVersion": "storage.gcp.upbound.io/v1beta1",
        "kind": "Bucket",
        "spec": { "forProvider": { "location": "us-east-1" } },
    });
    if let Some(name) = external_name {
        body["metadata"] = json!({ "annotations": { "crossplane.io/external-name": name } });
    }
    Resource::new(object(body))
}

pub fn request(composite: Option<Resource>, observed: Vec<(&str, Resource)>) -> RunFunctionRequest {
    let resources: BTreeMap<String, Resource> = observed
        .into_iter()
        .map(|(name, resource)| (name.to_string(), resource))
        .collect();
    RunFunctionRequest {
        meta: Some(RequestMeta { tag: TAG.into() }),
        observed: Some(State {
            composite,
            resources,
        }),
        desired: None,
        input: None,
    }
}

pub fn run(req: &RunFunctionRequest) -> RunFunctionResponse {
    run_function(&BucketComposition, &FunctionConfig::default(), req)
}

/// Desired resource `name` as plain JSON, for whole-object comparisons.
pub fn desired_json(rsp: &RunFunctionResponse, name: &str) -> Value {
    Value::Object(rsp.desired.resources[name].resource.clone())
}
