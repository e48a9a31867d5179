//! Typed access to the resources carried by request and response envelopes.

use xfn_abi::{Resource, RunFunctionRequest, RunFunctionResponse};
use xfn_models::{CanonicalForm, ModelError};

/// Insert (or replace) the desired composed resource `name`.
pub fn set_desired<T: CanonicalForm>(
    rsp: &mut RunFunctionResponse,
    name: &str,
    value: &T,
) -> Result<(), ModelError> {
    let record = value.to_canonical_form()?;
    rsp.desired
        .resources
        .insert(name.to_string(), Resource::new(record));
    Ok(())
}

/// Parse the observed composite resource, if one was supplied.
pub fn observed_composite<T: CanonicalForm>(
    req: &RunFunctionRequest,
) -> Result<Option<T>, ModelError> {
    req.observed_composite()
        .map(|r| T::from_canonical_form(&r.resource))
        .transpose()
}

/// Parse the observed composed resource `name`, if the orchestrator reported it.
pub fn observed<T: CanonicalForm>(
    req: &RunFunctionRequest,
    name: &str,
) -> Result<Option<T>, ModelError> {
    req.observed_resources()
        .and_then(|resources| resources.get(name))
        .map(|r| T::from_canonical_form(&r.resource))
        .transpose()
}
