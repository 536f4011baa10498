//! pki-server command - PKI server instance administration.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pkiserver::instance::{DEFAULT_INSTANCE_NAME, DEFAULT_INSTANCE_ROOT, Instance};
use pkiserver::output::{OutputFormat, OutputOptions};

#[derive(Parser)]
#[command(name = "pki-server", version, about = "PKI server administration tool")]
struct Cli {
    /// Instance ID.
    #[arg(short, long, global = true, default_value = DEFAULT_INSTANCE_NAME)]
    instance: String,

    /// Directory holding the instances.
    #[arg(
        long,
        global = true,
        env = "PKI_INSTANCE_ROOT",
        default_value = DEFAULT_INSTANCE_ROOT
    )]
    instance_root: PathBuf,

    /// Run in verbose mode.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Run in debug mode.
    #[arg(long, global = true)]
    debug: bool,

    /// Output JSON.
    #[arg(short = 'j', long, global = true)]
    json: bool,

    /// Pretty print JSON.
    #[arg(short = 'p', long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// HTTP connector management commands.
    HttpConnector(commands::connector::ConnectorCmd),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let opts = OutputOptions { pretty: cli.pretty };

    let instance = Instance::with_root(&cli.instance_root, cli.instance);

    let result = match cli.command {
        Command::HttpConnector(cmd) => cmd.run(&instance, format, &opts),
    };

    if let Err(e) = result {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
