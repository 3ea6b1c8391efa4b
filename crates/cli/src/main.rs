//! vault2env - write secrets stored in HashiCorp Vault to a `.env` file.
//!
//! Responsibilities:
//! - Parse command-line arguments and resolve them against `VAULT_*` variables.
//! - Read one secret path from Vault via the shared client library.
//! - Merge the secrets into the env file and report what was written.
//!
//! Does NOT handle:
//! - The Vault protocol (see `crates/client`).
//! - The env file format or merge rules (see `crates/envfile`).
//!
//! Invariants:
//! - Logs go to stderr; stdout carries only the success report.
//! - Every failure, including a rejected command line, exits with code 1.
//! - The tokio runtime is shut down before the process environment is touched.

mod args;
mod error;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use error::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use vault2env_client::{SecretMap, VaultClient};
use vault2env_config::RequestParameters;
use vault2env_envfile::{EnvSink, LocalEnvFile, MemoryEnv, MergePolicy, ProcessEnv, merge};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            std::process::exit(ExitCode::Success.as_i32());
        }
        Err(e) => std::process::exit(error::report(&error::usage(&e)).as_i32()),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => error::report(&e),
    };

    std::process::exit(exit_code.as_i32());
}

fn run(cli: &Cli) -> Result<()> {
    let params = vault2env_config::resolve(&cli.to_raw_params())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let secrets = runtime.block_on(fetch(&params))?;
    // Joins the blocking pool, leaving this thread as the only one running.
    drop(runtime);

    let store = LocalEnvFile::new(&params.env_file);
    let policy = MergePolicy {
        force: params.force,
        pollute: params.pollute,
        merge: params.merge,
    };

    let mut sink: Box<dyn EnvSink> = if params.pollute {
        // SAFETY: the runtime above has been dropped and nothing else spawns
        // threads, so the process is single-threaded from here on.
        Box::new(unsafe { ProcessEnv::new() })
    } else {
        Box::new(MemoryEnv::new())
    };

    let outcome = merge(&secrets, policy, &store, sink.as_mut())?;

    tracing::info!(
        path = %params.env_file.display(),
        added = ?outcome.added,
        overwritten = ?outcome.overwritten,
        unchanged = ?outcome.unchanged,
        "Env file updated"
    );

    print_report(&secrets, &params);
    Ok(())
}

async fn fetch(params: &RequestParameters) -> Result<SecretMap> {
    let client = VaultClient::builder().from_params(params).build()?;

    tracing::debug!(addr = %client.base_url(), path = %params.path, "Reading secrets");
    let secrets = client.read_secrets(&params.path).await?;
    tracing::debug!(count = secrets.len(), "Read secrets");

    Ok(secrets)
}

fn print_report(secrets: &SecretMap, params: &RequestParameters) {
    println!("Retrieved secrets:");
    for name in secrets.keys() {
        println!("{name}");
    }
    println!();
    println!("{} file created.", params.env_file.display());
    println!();
}
