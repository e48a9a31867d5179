mod commands;
mod opts;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::render::RenderArgs;
use commands::test::TestArgs;
use opts::GlobalOpts;

#[derive(Parser, Debug)]
#[command(name = "xfn", version, about = "XStorageBucket composition function")]
struct Cli {
    #[command(flatten)]
    opts: GlobalOpts,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the function once against a request envelope
    Render(RenderArgs),

    /// Run composition test files
    Test(TestArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.opts.verbose);
    let config = cli.opts.function_config()?;

    match cli.command {
        Command::Render(args) => commands::render::cmd_render(&cli.opts, &config, &args),
        Command::Test(args) => commands::test::cmd_test(&config, &args),
    }
}

/// Logs go to stderr so stdout stays a clean JSON document.
fn setup_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}
