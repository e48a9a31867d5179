//! Function request/response envelopes shared by the orchestrator-facing driver and the SDK.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_cbor::{ser::Write as CborWrite, value::Value as CborValue};
use thiserror::Error;

/// Generic JSON object carried inside a [`Resource`].
pub type Struct = serde_json::Map<String, serde_json::Value>;

/// Function request envelope (orchestrator → function).
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct RunFunctionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<RequestMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed: Option<State>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired: Option<State>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<serde_json::Value>,
}

impl RunFunctionRequest {
    pub fn decode(bytes: &[u8]) -> Result<Self, AbiDecodeError> {
        serde_cbor::from_slice(bytes).map_err(AbiDecodeError::Cbor)
    }

    pub fn encode(&self) -> Result<Vec<u8>, AbiEncodeError> {
        to_canonical_cbor(self).map_err(AbiEncodeError::Cbor)
    }

    pub fn from_json(text: &str) -> Result<Self, AbiDecodeError> {
        serde_json::from_str(text).map_err(AbiDecodeError::Json)
    }

    /// Correlation tag, or the empty string when the request carries no meta.
    pub fn tag(&self) -> &str {
        self.meta.as_ref().map(|m| m.tag.as_str()).unwrap_or_default()
    }

    /// Observed composite resource, if the orchestrator supplied one.
    pub fn observed_composite(&self) -> Option<&Resource> {
        self.observed.as_ref().and_then(|s| s.composite.as_ref())
    }

    /// Observed composed resources, keyed by composition resource name.
    pub fn observed_resources(&self) -> Option<&BTreeMap<String, Resource>> {
        self.observed.as_ref().map(|s| &s.resources)
    }
}

/// Function response envelope (function → orchestrator).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RunFunctionResponse {
    pub meta: ResponseMeta,
    #[serde(default)]
    pub desired: State,
    #[serde(default)]
    pub results: Vec<Diagnostic>,
}

impl RunFunctionResponse {
    pub fn decode(bytes: &[u8]) -> Result<Self, AbiDecodeError> {
        serde_cbor::from_slice(bytes).map_err(AbiDecodeError::Cbor)
    }

    pub fn encode(&self) -> Result<Vec<u8>, AbiEncodeError> {
        to_canonical_cbor(self).map_err(AbiEncodeError::Cbor)
    }

    pub fn to_json(&self) -> Result<String, AbiEncodeError> {
        serde_json::to_string(self).map_err(AbiEncodeError::Json)
    }

    pub fn to_json_pretty(&self) -> Result<String, AbiEncodeError> {
        serde_json::to_string_pretty(self).map_err(AbiEncodeError::Json)
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct RequestMeta {
    pub tag: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ResponseMeta {
    pub tag: String,
    /// How long the orchestrator may treat this response as current.
    #[serde(rename = "ttl_seconds", with = "duration_secs")]
    pub ttl: Duration,
}

/// Composite plus composed resources, keyed by composition resource name.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct State {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite: Option<Resource>,
    #[serde(default)]
    pub resources: BTreeMap<String, Resource>,
}

/// Opaque resource body as exchanged with the orchestrator.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Resource {
    pub resource: Struct,
}

impl Resource {
    pub fn new(resource: Struct) -> Self {
        Self { resource }
    }
}

impl From<Struct> for Resource {
    fn from(resource: Struct) -> Self {
        Self::new(resource)
    }
}

/// Advisory result attached to a response.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Where the orchestrator surfaces the result. Absent means the composite only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Normal,
    Warning,
    Fatal,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Composite,
    CompositeAndClaim,
}

#[derive(Debug, Error)]
pub enum AbiDecodeError {
    #[error("failed to decode CBOR envelope: {0}")]
    Cbor(#[from] serde_cbor::Error),
    #[error("failed to decode JSON envelope: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AbiEncodeError {
    #[error("failed to encode CBOR envelope: {0}")]
    Cbor(serde_cbor::Error),
    #[error("failed to encode JSON envelope: {0}")]
    Json(serde_json::Error),
}

/// Serialize a value into canonical CBOR (sorted map keys, self-describe tag).
pub fn to_canonical_cbor<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_cbor::Error> {
    let mut buf = Vec::with_capacity(256);
    write_canonical_cbor(value, &mut buf)?;
    Ok(buf)
}

fn write_canonical_cbor<T: Serialize, W: CborWrite>(
    value: &T,
    writer: W,
) -> Result<(), serde_cbor::Error> {
    let canonical_value: CborValue = serde_cbor::value::to_value(value)?;
    let mut serializer = serde_cbor::ser::Serializer::new(writer);
    serializer.self_describe()?;
    canonical_value.serialize(&mut serializer)
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
