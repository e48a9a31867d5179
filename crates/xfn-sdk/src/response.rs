//! Helpers for building and annotating a [`RunFunctionResponse`].

use std::time::Duration;

use xfn_abi::{
    Diagnostic, ResponseMeta, RunFunctionRequest, RunFunctionResponse, Severity, State, Target,
};

/// Response skeleton for `req`: echoed tag, the given TTL, no resources, no results.
pub fn to(req: &RunFunctionRequest, ttl: Duration) -> RunFunctionResponse {
    RunFunctionResponse {
        meta: ResponseMeta {
            tag: req.tag().to_string(),
            ttl,
        },
        desired: State::default(),
        results: Vec::new(),
    }
}

/// Append a normal-severity result.
pub fn normal(rsp: &mut RunFunctionResponse, message: impl Into<String>) -> &mut Diagnostic {
    push(rsp, Severity::Normal, message.into())
}

/// Append a warning result.
pub fn warning(rsp: &mut RunFunctionResponse, message: impl Into<String>) -> &mut Diagnostic {
    push(rsp, Severity::Warning, message.into())
}

/// Append a fatal result targeting the composite. The orchestrator treats the
/// pipeline run as failed.
pub fn fatal(rsp: &mut RunFunctionResponse, message: impl Into<String>) -> &mut Diagnostic {
    push(rsp, Severity::Fatal, message.into()).target_composite()
}

fn push(rsp: &mut RunFunctionResponse, severity: Severity, message: String) -> &mut Diagnostic {
    rsp.results.push(Diagnostic {
        severity,
        message,
        target: None,
    });
    let last = rsp.results.len() - 1;
    &mut rsp.results[last]
}

/// Target selection for a freshly pushed result.
pub trait TargetExt {
    fn target_composite(&mut self) -> &mut Self;
    fn target_composite_and_claim(&mut self) -> &mut Self;
}

impl TargetExt for Diagnostic {
    fn target_composite(&mut self) -> &mut Self {
        self.target = Some(Target::Composite);
        self
    }

    fn target_composite_and_claim(&mut self) -> &mut Self {
        self.target = Some(Target::CompositeAndClaim);
        self
    }
}
