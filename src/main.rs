//! Binary rendering the error data for a single failed operation.
//!
//! Parses CLI arguments, feeds them through [`ErrorDataBuilder`] and prints
//! the resulting diagnostic with its byte length.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use rdm_errdata::{ErrorDataBuilder, HostId, PeerDescriptor, ProviderErrno, RdmEndpoint};

/// Endpoint whose facts all come from the command line.
struct CliEndpoint<'a> {
    cli: &'a cli::Cli,
}

impl RdmEndpoint for CliEndpoint<'_> {
    type Addr = ();

    fn local_address_text(&self) -> Option<String> { self.cli.local.clone() }

    fn peer_address_text(&self, (): ()) -> Option<String> { self.cli.peer.clone() }

    fn host_id(&self) -> HostId { HostId::new(self.cli.local_host_id) }

    fn lookup_peer(&self, (): ()) -> Option<PeerDescriptor> {
        let host_id = HostId::new(self.cli.peer_host_id);
        host_id.is_known().then_some(PeerDescriptor::new(host_id))
    }
}

fn main() -> ExitCode {
    // Enable structured logging for the binary.
    // Applications embedding the library should install their own subscriber.
    tracing_subscriber::fmt::init();

    let cli = cli::Cli::parse();
    let endpoint = CliEndpoint { cli: &cli };
    let errno_text = |_: ProviderErrno| cli.errno_text.clone();

    match ErrorDataBuilder::new().build(
        &endpoint,
        &errno_text,
        (),
        ProviderErrno::new(cli.prov_errno),
    ) {
        Ok(payload) => {
            println!("{payload}");
            println!("err_data_size: {}", payload.len());
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("failed to build error data: {error}");
            ExitCode::FAILURE
        }
    }
}
