use thiserror::Error;
use xfn_models::ModelError;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("observed composite resource is missing")]
    MissingComposite,
    #[error("composite resource has no spec.parameters")]
    MissingParameters,
    #[error("composite resource is missing spec.parameters.{0}")]
    MissingParameter(&'static str),
    #[error("cannot parse composite resource: {0}")]
    Composite(#[source] ModelError),
    #[error("cannot render desired {resource}: {source}")]
    Render {
        resource: &'static str,
        #[source]
        source: ModelError,
    },
}
