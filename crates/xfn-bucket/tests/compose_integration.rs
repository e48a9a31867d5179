#[path = "helpers.rs"]
mod helpers;

use std::time::Duration;

use helpers::{
    TAG, composite, desired_json, object, observed_bucket, parameters, request, run,
};
use serde_json::json;
use xfn_abi::{RequestMeta, Resource, RunFunctionResponse, Severity, State, Target};
use xfn_bucket::{ACL, BUCKET, BucketComposition, WAITING_MESSAGE};
use xfn_sdk::{DEFAULT_TTL, FunctionConfig, run_bytes, run_function};

fn expected_bucket(versioning: bool) -> serde_json::Value {
    json!({
        "apiVersion": "storage.gcp.upbound.io/v1beta1",
        "kind": "Bucket",
        "spec": {
            "forProvider": {
                "location": "us-east-1",
                "versioning": [ { "enabled": versioning } ],
            },
        },
    })
}

fn expected_acl() -> serde_json::Value {
    json!({
        "apiVersion": "storage.gcp.upbound.io/v1beta1",
        "kind": "BucketACL",
        "spec": {
            "forProvider": {
                "bucket": "my-bukkit",
                "predefinedAcl": "private",
            },
        },
    })
}

fn assert_meta(rsp: &RunFunctionResponse) {
    assert_eq!(rsp.meta.tag, TAG);
    assert_eq!(rsp.meta.ttl, DEFAULT_TTL);
}

#[test]
fn bucket_not_yet_created() {
    let req = request(
        Some(composite(parameters("us-east-1", "private", false))),
        vec![],
    );
    let rsp = run(&req);

    assert_meta(&rsp);
    assert_eq!(rsp.desired.resources.len(), 1);
    assert_eq!(desired_json(&rsp, BUCKET), expected_bucket(false));
    assert_eq!(rsp.results.len(), 1);
    assert_eq!(rsp.results[0].severity, Severity::Normal);
    assert_eq!(rsp.results[0].message, WAITING_MESSAGE);
    assert_eq!(rsp.results[0].target, Some(Target::CompositeAndClaim));
}

#[test]
fn bucket_created() {
    let req = request(
        Some(composite(parameters("us-east-1", "private", false))),
        vec![(BUCKET, observed_bucket(Some("my-bukkit")))],
    );
    let rsp = run(&req);

    assert_meta(&rsp);
    assert!(rsp.results.is_empty());
    assert_eq!(rsp.desired.resources.len(), 2);
    assert_eq!(desired_json(&rsp, BUCKET), expected_bucket(false));
    assert_eq!(desired_json(&rsp, ACL), expected_acl());
}

#[test]
fn bucket_created_with_versioning() {
    let req = request(
        Some(composite(parameters("us-east-1", "private", true))),
        vec![(BUCKET, observed_bucket(Some("my-bukkit")))],
    );
    let rsp = run(&req);

    assert_meta(&rsp);
    assert!(rsp.results.is_empty());
    assert_eq!(desired_json(&rsp, BUCKET), expected_bucket(true));
    assert_eq!(desired_json(&rsp, ACL), expected_acl());
}

#[test]
fn previous_desired_state_is_not_carried_over() {
    let mut req = request(
        Some(composite(parameters("us-east-1", "private", false))),
        vec![],
    );
    let stale = State {
        composite: None,
        resources: [
            (ACL.to_string(), Resource::new(expected_acl().as_object().unwrap().clone())),
            (
                "stale".to_string(),
                Resource::new(object(json!({ "kind": "Leftover" }))),
            ),
        ]
        .into_iter()
        .collect(),
    };
    req.desired = Some(stale);
    let rsp = run(&req);

    assert_meta(&rsp);
    let names: Vec<&str> = rsp.desired.resources.keys().map(String::as_str).collect();
    assert_eq!(names, vec![BUCKET]);
    assert_eq!(desired_json(&rsp, BUCKET), expected_bucket(false));
    assert_eq!(rsp.results.len(), 1);
    assert_eq!(rsp.results[0].severity, Severity::Normal);
    assert_eq!(rsp.results[0].message, WAITING_MESSAGE);
    assert_eq!(rsp.results[0].target, Some(Target::CompositeAndClaim));
}

#[test]
fn observed_bucket_without_external_name_keeps_waiting() {
    for observed in [observed_bucket(None), observed_bucket(Some(""))] {
        let req = request(
            Some(composite(parameters("us-east-1", "private", true))),
            vec![(BUCKET, observed)],
        );
        let rsp = run(&req);
        assert!(!rsp.desired.resources.contains_key(ACL));
        assert_eq!(rsp.results.len(), 1);
        assert_eq!(rsp.results[0].message, WAITING_MESSAGE);
    }
}

#[test]
fn acl_refers_to_external_name_not_composite_name() {
    let mut xr = composite(parameters("us-east-1", "private", false));
    xr.resource
        .insert("metadata".into(), json!({ "name": "my-composite" }));
    let req = request(Some(xr), vec![(BUCKET, observed_bucket(Some("provider-name")))]);
    let rsp = run(&req);
    assert_eq!(
        desired_json(&rsp, ACL)["spec"]["forProvider"]["bucket"],
        "provider-name"
    );
}

#[test]
fn missing_parameters_fail_closed() {
    let mut xr = composite(parameters("us-east-1", "private", false));
    xr.resource.insert("spec".into(), json!({}));
    let req = request(Some(xr), vec![(BUCKET, observed_bucket(Some("my-bukkit")))]);
    let rsp = run(&req);

    assert_meta(&rsp);
    assert!(rsp.desired.resources.is_empty());
    assert_eq!(rsp.results.len(), 1);
    assert_eq!(rsp.results[0].severity, Severity::Fatal);
    assert_eq!(rsp.results[0].target, Some(Target::Composite));
    assert!(rsp.results[0].message.contains("spec.parameters"));
}

#[test]
fn missing_composite_fails_closed() {
    let rsp = run(&request(None, vec![]));
    assert!(rsp.desired.resources.is_empty());
    assert_eq!(rsp.results[0].severity, Severity::Fatal);
}

#[test]
fn tag_and_ttl_follow_request_and_config() {
    let mut req = request(
        Some(composite(parameters("EU", "publicRead", true))),
        vec![],
    );
    req.meta = Some(RequestMeta {
        tag: "another-tag".into(),
    });
    let config = FunctionConfig::default().with_ttl(Duration::from_secs(15));
    let rsp = run_function(&BucketComposition, &config, &req);
    assert_eq!(rsp.meta.tag, "another-tag");
    assert_eq!(rsp.meta.ttl, Duration::from_secs(15));
}

#[test]
fn identical_requests_compose_identically() {
    let req = request(
        Some(composite(parameters("us-east-1", "private", true))),
        vec![(BUCKET, observed_bucket(Some("my-bukkit")))],
    );
    assert_eq!(run(&req), run(&req));
}

#[test]
fn cbor_envelope_round_trip() {
    let req = request(
        Some(composite(parameters("us-east-1", "private", false))),
        vec![(BUCKET, observed_bucket(Some("my-bukkit")))],
    );
    let bytes = req.encode().unwrap();
    let out = run_bytes(&BucketComposition, &FunctionConfig::default(), &bytes).unwrap();
    let rsp = RunFunctionResponse::decode(&out).unwrap();
    assert_eq!(rsp, run(&req));
}
