use tracing::debug;
use xfn_abi::{RunFunctionRequest, RunFunctionResponse};
use xfn_models::CanonicalForm;
use xfn_sdk::response::{self, TargetExt};
use xfn_sdk::{CompositionFunction, resource};

use crate::{ACL, BUCKET, ComposeError, WAITING_MESSAGE, params, readiness, synth};

/// The `XStorageBucket` composition.
#[derive(Debug, Clone, Copy, Default)]
pub struct BucketComposition;

impl CompositionFunction for BucketComposition {
    type Error = ComposeError;

    fn compose(
        &self,
        req: &RunFunctionRequest,
        rsp: &mut RunFunctionResponse,
    ) -> Result<(), Self::Error> {
        let params = params::extract(req)?;

        set_desired(rsp, BUCKET, &synth::bucket(&params))?;

        let Some(external_name) = readiness::inspect(req) else {
            debug!(resource = BUCKET, "bucket has no external name yet");
            response::normal(rsp, WAITING_MESSAGE).target_composite_and_claim();
            return Ok(());
        };

        debug!(resource = ACL, external_name = %external_name, "bucket ready; composing acl");
        set_desired(rsp, ACL, &synth::bucket_acl(&params, &external_name))?;
        Ok(())
    }
}

fn set_desired<T: CanonicalForm>(
    rsp: &mut RunFunctionResponse,
    name: &'static str,
    value: &T,
) -> Result<(), ComposeError> {
    resource::set_desired(rsp, name, value).map_err(|source| ComposeError::Render {
        resource: name,
        source,
    })
}
