#![doc(html_root_url = "https://docs.rs/rdm-errdata/latest")]
//! Public API for the `rdm-errdata` library.
//!
//! This crate builds the bounded diagnostic string attached to error
//! completions of a reliable-datagram transport: the provider's error text
//! followed by a descriptor naming both endpoint addresses and host ids.

pub mod bounded;
pub mod builder;
pub mod completion;
pub mod config;
pub mod descriptor;
pub mod endpoint;
pub mod error;
pub mod host_id;
pub mod metrics;
pub mod payload;

pub use builder::ErrorDataBuilder;
pub use completion::ErrorCompletion;
pub use config::ErrorDataConfig;
pub use descriptor::{
    ConnectionDescriptor,
    MAX_CONNECTION_ANNOTATION_LEN,
    write_connection_descriptor,
};
pub use endpoint::{ErrnoText, PeerDescriptor, ProviderErrno, RdmEndpoint};
/// Result type alias re-exported for convenience when building payloads.
pub use error::{ErrorDataError, Result};
pub use host_id::{HostId, HostIdError, HostIdToken};
pub use payload::{ErrorPayload, HeapAllocator, PayloadAllocator};
