use thiserror::Error;
use tracing::{debug, warn};
use xfn_abi::{AbiDecodeError, AbiEncodeError, RunFunctionRequest, RunFunctionResponse};

use crate::{FunctionConfig, response};

/// Trait implemented by every composition function.
pub trait CompositionFunction {
    /// Structural failure; reported to the orchestrator as a fatal result.
    type Error: std::error::Error;

    /// Add desired resources and results to `rsp`. The response already carries
    /// the echoed tag and TTL.
    fn compose(
        &self,
        req: &RunFunctionRequest,
        rsp: &mut RunFunctionResponse,
    ) -> Result<(), Self::Error>;
}

/// Errors surfaced while running over encoded envelopes.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("request decode failed: {0}")]
    Decode(#[from] AbiDecodeError),
    #[error("response encode failed: {0}")]
    Encode(#[from] AbiEncodeError),
}

/// Run `function` against `req`.
///
/// A composition error never yields a partial resource set: every desired
/// resource is dropped and a single fatal result carries the error text.
pub fn run_function<F>(
    function: &F,
    config: &FunctionConfig,
    req: &RunFunctionRequest,
) -> RunFunctionResponse
where
    F: CompositionFunction + ?Sized,
{
    let mut rsp = response::to(req, config.ttl);
    match function.compose(req, &mut rsp) {
        Ok(()) => {
            debug!(
                tag = %rsp.meta.tag,
                resources = rsp.desired.resources.len(),
                results = rsp.results.len(),
                "composed"
            );
        }
        Err(err) => {
            warn!(tag = %rsp.meta.tag, error = %err, "composition failed");
            rsp.desired.resources.clear();
            response::fatal(&mut rsp, err.to_string());
        }
    }
    rsp
}

/// Execute a function against a CBOR request envelope, returning the CBOR response.
pub fn run_bytes<F>(
    function: &F,
    config: &FunctionConfig,
    input: &[u8],
) -> Result<Vec<u8>, RunError>
where
    F: CompositionFunction + ?Sized,
{
    let req = RunFunctionRequest::decode(input)?;
    let rsp = run_function(function, config, &req);
    Ok(rsp.encode()?)
}
