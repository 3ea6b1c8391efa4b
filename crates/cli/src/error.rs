//! CLI exit codes and error reporting.
//!
//! Invariants:
//! - Every failure exits with code 1; there is no per-error mapping.
//! - Errors are printed to stderr only, so stdout carries nothing but the
//!   success report.

/// Exit codes for vault2env.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Secrets were retrieved and written.
    Success = 0,

    /// Any failure: missing parameters, Vault errors or env file conflicts.
    GeneralError = 1,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Turn a rejected command line into a plain one-line error.
///
/// clap renders `error: <message>` followed by usage text; only the message
/// is kept so it reads like every other failure.
pub fn usage(err: &clap::Error) -> anyhow::Error {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    let message = first.strip_prefix("error: ").unwrap_or(first);
    anyhow::anyhow!("{message}")
}

/// Print a failure the way scripts expect it and return the matching exit code.
pub fn report(err: &anyhow::Error) -> ExitCode {
    eprintln!("Error while retrieving secrets: {err:#}");
    ExitCode::GeneralError
}
