use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use xfn_abi::Struct;

/// Conversion between a typed resource and the generic record carried in envelopes.
///
/// Implementors only name their API version and kind; the conversions go through
/// serde, so field mapping is checked at compile time by the derive.
pub trait CanonicalForm: Serialize + DeserializeOwned {
    const API_VERSION: &'static str;
    const KIND: &'static str;

    /// Render into a generic record, stamping `apiVersion` and `kind`.
    fn to_canonical_form(&self) -> Result<Struct, ModelError> {
        match serde_json::to_value(self).map_err(ModelError::Encode)? {
            Value::Object(mut record) => {
                record.insert("apiVersion".into(), Value::from(Self::API_VERSION));
                record.insert("kind".into(), Value::from(Self::KIND));
                Ok(record)
            }
            _ => Err(ModelError::NotAnObject { kind: Self::KIND }),
        }
    }

    /// Parse a generic record. A record that names a different `apiVersion` or
    /// `kind` is rejected; a record that omits them is accepted.
    fn from_canonical_form(record: &Struct) -> Result<Self, ModelError> {
        expect_field(record, "apiVersion", Self::API_VERSION)?;
        expect_field(record, "kind", Self::KIND)?;
        serde_json::from_value(Value::Object(record.clone())).map_err(|source| {
            ModelError::Decode {
                kind: Self::KIND,
                source,
            }
        })
    }
}

fn expect_field(
    record: &Struct,
    field: &'static str,
    expected: &'static str,
) -> Result<(), ModelError> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(()),
        Some(Value::String(found)) if found == expected => Ok(()),
        Some(other) => Err(ModelError::TypeMismatch {
            field,
            expected,
            found: other.to_string(),
        }),
    }
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to encode resource: {0}")]
    Encode(serde_json::Error),
    #[error("failed to decode {kind}: {source}")]
    Decode {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{kind} did not serialize to an object")]
    NotAnObject { kind: &'static str },
    #[error("{field} mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
}
