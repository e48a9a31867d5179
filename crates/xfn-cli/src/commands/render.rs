//! `xfn render`: one pass over a JSON request envelope.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use xfn_abi::RunFunctionRequest;
use xfn_bucket::BucketComposition;
use xfn_sdk::{FunctionConfig, run_function};

use crate::opts::GlobalOpts;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Request envelope as JSON; `-` reads stdin
    pub request: PathBuf,
}

pub fn cmd_render(opts: &GlobalOpts, config: &FunctionConfig, args: &RenderArgs) -> Result<()> {
    let text = read_request(&args.request)?;
    let req = RunFunctionRequest::from_json(&text)
        .with_context(|| format!("parse request {}", args.request.display()))?;

    let rsp = run_function(&BucketComposition, config, &req);
    info!(
        tag = %rsp.meta.tag,
        resources = rsp.desired.resources.len(),
        results = rsp.results.len(),
        "rendered"
    );

    let out = if opts.pretty {
        rsp.to_json_pretty()?
    } else {
        rsp.to_json()?
    };
    println!("{out}");
    Ok(())
}

fn read_request(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read request from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}
