//! SDK for writing composition functions.
//!
//! A function implements [`CompositionFunction`]; [`run_function`] wraps it with the
//! response skeleton (echoed tag, TTL) and fail-closed error handling, and
//! [`run_bytes`] does the same over encoded envelopes.

mod config;
mod function;
pub mod resource;
pub mod response;

pub use config::{ConfigError, DEFAULT_TTL, FunctionConfig, TTL_ENV};
pub use function::{CompositionFunction, RunError, run_bytes, run_function};
