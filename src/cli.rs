//! Command line interface for the `rdm-errdata` binary.
//!
//! Composes one diagnostic from values given on the command line, which is
//! handy when checking what operators will see for a given failure.

use clap::Parser;

/// Command line arguments for the `rdm-errdata` binary.
#[derive(Debug, Parser)]
#[command(
    name = "rdm-errdata",
    version,
    about = "Render the error data attached to an RDM error completion"
)]
pub struct Cli {
    /// Base error text for the provider error code.
    #[arg(long, default_value = "Unknown error")]
    pub errno_text: String,
    /// Provider error code reported with the completion.
    #[arg(long, default_value_t = 0)]
    pub prov_errno: u32,
    /// Local endpoint address text; omitted renders as N/A.
    #[arg(long)]
    pub local: Option<String>,
    /// Peer address text; omitted renders as N/A.
    #[arg(long)]
    pub peer: Option<String>,
    /// Local host id in hex, with or without a `0x` prefix.
    #[arg(long, value_parser = parse_host_id, default_value = "0")]
    pub local_host_id: u64,
    /// Peer host id in hex; 0 means the peer is not registered.
    #[arg(long, value_parser = parse_host_id, default_value = "0")]
    pub peer_host_id: u64,
}

/// Parse a hexadecimal host id, accepting an optional `0x` prefix.
///
/// # Errors
///
/// Returns a message when `value` is not valid hexadecimal.
pub fn parse_host_id(value: &str) -> Result<u64, String> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    u64::from_str_radix(digits, 16).map_err(|e| format!("invalid host id {value:?}: {e}"))
}
