use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Annotation carrying the provider-assigned name of a managed resource.
pub const ANNOTATION_EXTERNAL_NAME: &str = "crossplane.io/external-name";

/// Annotation naming the composition slot a composed resource occupies.
pub const ANNOTATION_COMPOSITION_RESOURCE_NAME: &str = "crossplane.io/composition-resource-name";

/// Subset of Kubernetes object metadata the composition reads or writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

impl ObjectMeta {
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations
            .as_ref()
            .and_then(|a| a.get(key))
            .map(String::as_str)
    }

    /// Provider-assigned external name, if the provider has set one.
    pub fn external_name(&self) -> Option<&str> {
        self.annotation(ANNOTATION_EXTERNAL_NAME)
    }
}
