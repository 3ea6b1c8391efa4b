//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Flatten parsed arguments into the raw parameter map the resolver consumes.
//!
//! Does NOT handle:
//! - Environment variable fallbacks or validation (see `vault2env_config::resolve`).

use clap::Parser;
use vault2env_config::RawParams;
use vault2env_config::constants::{
    PARAM_ADDR, PARAM_ENV_FILE, PARAM_FORCE, PARAM_MERGE, PARAM_PATH, PARAM_POLLUTE,
    PARAM_SKIP_VERIFY, PARAM_TIMEOUT, PARAM_TOKEN,
};

#[derive(Parser, Debug)]
#[command(name = "vault2env")]
#[command(about = "Write secrets stored in HashiCorp Vault to a .env file", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  vault2env --addr https://vault.example:8200 --token $TOKEN --path secret/app\n  VAULT_ADDR=https://vault.example:8200 vault2env --path secret/app --merge\n  vault2env --path secret/app --force --env-file config/.env.local\n"
)]
pub struct Cli {
    /// Vault server address (falls back to VAULT_ADDR)
    #[arg(long, value_name = "URL")]
    pub addr: Option<String>,

    /// Vault token (falls back to VAULT_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Secret path to read, e.g. secret/app
    #[arg(long)]
    pub path: Option<String>,

    /// Overwrite an existing env file and any differing keys in it
    #[arg(long)]
    pub force: bool,

    /// Export the retrieved secrets into the environment of this process
    #[arg(long)]
    pub pollute: bool,

    /// Merge into an existing env file, failing if a key would change
    #[arg(long)]
    pub merge: bool,

    /// Env file to create or update [default: .env]
    #[arg(long, value_name = "FILE")]
    pub env_file: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<String>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long)]
    pub skip_verify: bool,
}

impl Cli {
    /// Flatten the arguments into raw parameters.
    ///
    /// Absent options are left out so the resolver can fall back to the
    /// environment; set boolean flags are recorded as bare flags.
    pub fn to_raw_params(&self) -> RawParams {
        let mut raw = RawParams::new();

        let options = [
            (PARAM_ADDR, &self.addr),
            (PARAM_TOKEN, &self.token),
            (PARAM_PATH, &self.path),
            (PARAM_ENV_FILE, &self.env_file),
            (PARAM_TIMEOUT, &self.timeout),
        ];
        for (name, value) in options {
            if let Some(value) = value {
                raw.insert(name.to_string(), value.clone());
            }
        }

        let flags = [
            (PARAM_FORCE, self.force),
            (PARAM_POLLUTE, self.pollute),
            (PARAM_MERGE, self.merge),
            (PARAM_SKIP_VERIFY, self.skip_verify),
        ];
        for (name, set) in flags {
            if set {
                raw.insert(name.to_string(), String::new());
            }
        }

        raw
    }
}
