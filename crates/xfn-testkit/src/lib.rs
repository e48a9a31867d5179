//! Composition tests: render a function the way the orchestrator would and
//! assert on the composed objects.
//!
//! A test names a composite (`xr`), the composed resources the orchestrator has
//! already observed, and the objects expected after one pass. Expected objects
//! match a rendered object when they are a JSON subset of it, so tests only
//! spell out the fields they care about.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use xfn_abi::{
    RequestMeta, Resource, RunFunctionRequest, RunFunctionResponse, Severity, State, Struct,
};
use xfn_models::ANNOTATION_COMPOSITION_RESOURCE_NAME;
use xfn_sdk::{CompositionFunction, FunctionConfig, run_function};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionTest {
    pub name: String,
    pub xr: Struct,
    #[serde(default)]
    pub observed_resources: Vec<Struct>,
    #[serde(default)]
    pub assert_resources: Vec<Struct>,
}

impl CompositionTest {
    pub fn from_json(text: &str) -> Result<Self, TestkitError> {
        serde_json::from_str(text).map_err(TestkitError::Parse)
    }

    pub fn load(path: &Path) -> Result<Self, TestkitError> {
        let text = fs::read_to_string(path).map_err(|source| TestkitError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Request the orchestrator would send for this test.
    pub fn request(&self) -> Result<RunFunctionRequest, TestkitError> {
        let mut state = State {
            composite: Some(Resource::new(self.xr.clone())),
            ..Default::default()
        };
        for (index, observed) in self.observed_resources.iter().enumerate() {
            let name = composition_resource_name(observed)
                .ok_or(TestkitError::UnnamedObserved(index))?;
            state
                .resources
                .insert(name.to_string(), Resource::new(observed.clone()));
        }
        Ok(RunFunctionRequest {
            meta: Some(RequestMeta {
                tag: self.name.clone(),
            }),
            observed: Some(state),
            desired: None,
            input: None,
        })
    }
}

/// Output of one rendered pass.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub response: RunFunctionResponse,
    /// The composite followed by every desired composed resource.
    pub objects: Vec<Struct>,
}

/// Run `function` once for `test` and collect the resulting objects.
///
/// Desired resources are annotated with their composition resource name and
/// inherit `metadata.name` from their observed counterpart, as the orchestrator
/// does when it applies them.
pub fn render<F>(
    function: &F,
    config: &FunctionConfig,
    test: &CompositionTest,
) -> Result<Rendered, TestkitError>
where
    F: CompositionFunction + ?Sized,
{
    let req = test.request()?;
    let response = run_function(function, config, &req);
    if let Some(fatal) = response
        .results
        .iter()
        .find(|r| r.severity == Severity::Fatal)
    {
        return Err(TestkitError::Fatal(fatal.message.clone()));
    }

    let observed = req.observed_resources();
    let mut objects = vec![test.xr.clone()];
    for (name, desired) in &response.desired.resources {
        let mut object = desired.resource.clone();
        let metadata = metadata_mut(&mut object);
        let annotations = object_entry(metadata, "annotations");
        annotations.insert(
            ANNOTATION_COMPOSITION_RESOURCE_NAME.into(),
            Value::from(name.as_str()),
        );
        let observed_name = observed
            .and_then(|resources| resources.get(name))
            .and_then(|r| r.resource.get("metadata"))
            .and_then(|m| m.get("name"))
            .cloned();
        if let Some(observed_name) = observed_name {
            metadata.insert("name".into(), observed_name);
        }
        objects.push(object);
    }
    debug!(test = %test.name, objects = objects.len(), "rendered");
    Ok(Rendered { response, objects })
}

/// Check every assert resource against the rendered objects.
pub fn assert_rendered(rendered: &Rendered, test: &CompositionTest) -> Result<(), TestkitError> {
    for expected in &test.assert_resources {
        let expected_value = Value::Object(expected.clone());
        let matched = rendered
            .objects
            .iter()
            .any(|object| is_subset(&expected_value, &Value::Object(object.clone())));
        if !matched {
            return Err(TestkitError::Unmatched {
                test: test.name.clone(),
                expected: describe(expected),
            });
        }
    }
    Ok(())
}

/// Render and assert in one step.
pub fn run<F>(
    function: &F,
    config: &FunctionConfig,
    test: &CompositionTest,
) -> Result<Rendered, TestkitError>
where
    F: CompositionFunction + ?Sized,
{
    let rendered = render(function, config, test)?;
    assert_rendered(&rendered, test)?;
    Ok(rendered)
}

/// `expected` is contained in `actual`: objects by key, arrays element-wise with equal length.
pub fn is_subset(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Object(want), Value::Object(have)) => want
            .iter()
            .all(|(key, value)| have.get(key).is_some_and(|got| is_subset(value, got))),
        (Value::Array(want), Value::Array(have)) => {
            want.len() == have.len() && want.iter().zip(have).all(|(w, h)| is_subset(w, h))
        }
        _ => expected == actual,
    }
}

fn composition_resource_name(object: &Struct) -> Option<&str> {
    object
        .get("metadata")?
        .get("annotations")?
        .get(ANNOTATION_COMPOSITION_RESOURCE_NAME)?
        .as_str()
}

fn metadata_mut(object: &mut Struct) -> &mut Struct {
    object_entry(object, "metadata")
}

fn object_entry<'a>(object: &'a mut Struct, key: &str) -> &'a mut Struct {
    let slot = object
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Struct::new()));
    if !slot.is_object() {
        *slot = Value::Object(Struct::new());
    }
    match slot {
        Value::Object(map) => map,
        _ => unreachable!("slot was just made an object"),
    }
}

fn describe(object: &Struct) -> String {
    let api_version = text_field(object, "apiVersion");
    let kind = text_field(object, "kind");
    match composition_resource_name(object) {
        Some(name) => format!("{api_version} {kind} ({name})"),
        None => format!("{api_version} {kind}"),
    }
}

fn text_field<'a>(object: &'a Struct, key: &str) -> &'a str {
    object.get(key).and_then(Value::as_str).unwrap_or("?")
}

#[derive(Debug, Error)]
pub enum TestkitError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid composition test: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("observed resource #{0} has no crossplane.io/composition-resource-name annotation")]
    UnnamedObserved(usize),
    #[error("function returned a fatal result: {0}")]
    Fatal(String),
    #[error("{test}: no rendered object matches expected {expected}")]
    Unmatched { test: String, expected: String },
}
