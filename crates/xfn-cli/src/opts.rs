//! Global CLI options.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use xfn_sdk::FunctionConfig;

#[derive(Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Response TTL in seconds (env: XFN_TTL_SECONDS)
    #[arg(long, global = true)]
    pub ttl_seconds: Option<u64>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalOpts {
    /// Environment first, then the command-line override.
    pub fn function_config(&self) -> Result<FunctionConfig> {
        let config = FunctionConfig::from_env().context("load function config")?;
        Ok(match self.ttl_seconds {
            Some(secs) => config.with_ttl(Duration::from_secs(secs)),
            None => config,
        })
    }
}
