//! Capabilities supplied by the surrounding transport.
//!
//! Error data needs a few facts the transport owns: the text for a provider
//! error code, both address strings, and host ids for each side. These
//! traits let the builder ask for them without touching live endpoint or
//! peer-table state, so tests can substitute deterministic fakes.

use std::borrow::Cow;

use derive_more::{Display, From, Into};

use crate::host_id::HostId;

/// Provider-specific error code attached to an error completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, From, Into)]
#[display("{_0}")]
pub struct ProviderErrno(u32);

impl ProviderErrno {
    /// Wrap a raw provider error code.
    #[must_use]
    pub const fn new(code: u32) -> Self { Self(code) }

    /// Return the raw code.
    #[must_use]
    pub const fn get(self) -> u32 { self.0 }
}

/// Resolves provider error codes to human-readable text.
///
/// Implementations must never return empty text.
pub trait ErrnoText {
    /// Describe `code`.
    fn errno_to_text(&self, code: ProviderErrno) -> Cow<'_, str>;
}

impl<F, S> ErrnoText for F
where
    F: Fn(ProviderErrno) -> S,
    S: Into<Cow<'static, str>>,
{
    fn errno_to_text(&self, code: ProviderErrno) -> Cow<'_, str> { self(code).into() }
}

/// Per-remote-endpoint state consulted when describing a connection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PeerDescriptor {
    /// Host id reported by the peer, or [`HostId::UNKNOWN`].
    pub host_id: HostId,
}

impl PeerDescriptor {
    /// Describe a peer running on `host_id`.
    #[must_use]
    pub const fn new(host_id: HostId) -> Self { Self { host_id } }
}

/// A reliable-datagram endpoint able to describe itself and its peers.
///
/// Address text is expected to fit the fabric's address-string buffer,
/// terminator included; see
/// [`ErrorDataConfig`](crate::config::ErrorDataConfig).
pub trait RdmEndpoint {
    /// Fabric address handle naming a remote peer.
    type Addr: Copy + std::fmt::Debug;

    /// Text form of this endpoint's own address, if it can be rendered.
    fn local_address_text(&self) -> Option<String>;

    /// Text form of the remote address `addr`, if it can be rendered.
    fn peer_address_text(&self, addr: Self::Addr) -> Option<String>;

    /// Host id of the machine running this endpoint.
    fn host_id(&self) -> HostId;

    /// Peer state registered for `addr`, if any.
    fn lookup_peer(&self, addr: Self::Addr) -> Option<PeerDescriptor>;

    /// Host id of the peer at `addr`, or [`HostId::UNKNOWN`] when no peer is
    /// registered.
    fn peer_host_id(&self, addr: Self::Addr) -> HostId {
        self.lookup_peer(addr)
            .map_or(HostId::UNKNOWN, |peer| peer.host_id)
    }
}

impl<E: RdmEndpoint + ?Sized> RdmEndpoint for &E {
    type Addr = E::Addr;

    fn local_address_text(&self) -> Option<String> { (**self).local_address_text() }

    fn peer_address_text(&self, addr: Self::Addr) -> Option<String> {
        (**self).peer_address_text(addr)
    }

    fn host_id(&self) -> HostId { (**self).host_id() }

    fn lookup_peer(&self, addr: Self::Addr) -> Option<PeerDescriptor> {
        (**self).lookup_peer(addr)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{ErrnoText, PeerDescriptor, ProviderErrno, RdmEndpoint};
    use crate::host_id::HostId;

    struct Table(HashMap<u64, PeerDescriptor>);

    impl RdmEndpoint for Table {
        type Addr = u64;

        fn local_address_text(&self) -> Option<String> { None }

        fn peer_address_text(&self, _addr: u64) -> Option<String> { None }

        fn host_id(&self) -> HostId { HostId::UNKNOWN }

        fn lookup_peer(&self, addr: u64) -> Option<PeerDescriptor> { self.0.get(&addr).copied() }
    }

    #[test]
    fn peer_host_id_defaults_to_unknown() {
        let table = Table(HashMap::from([(7, PeerDescriptor::new(HostId::new(0x55)))]));
        assert_eq!(table.peer_host_id(7), HostId::new(0x55));
        assert_eq!(table.peer_host_id(8), HostId::UNKNOWN);
    }

    #[test]
    fn closures_provide_errno_text() {
        let text = |code: ProviderErrno| format!("code {code}");
        assert_eq!(text.errno_to_text(ProviderErrno::new(4)), "code 4");
    }
}
