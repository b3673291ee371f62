//! Deterministic collaborators shared by the integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use rdm_errdata::{HostId, PayloadAllocator, PeerDescriptor, ProviderErrno, RdmEndpoint};

/// Base text used by most scenarios.
pub const EAGAIN_TEXT: &str = "Resource temporarily unavailable";

/// Errno text collaborator returning [`EAGAIN_TEXT`] for every code.
pub fn eagain_text(_: ProviderErrno) -> &'static str { EAGAIN_TEXT }

/// A remote peer as the fake endpoint knows it.
#[derive(Clone, Debug)]
pub struct FakePeer {
    pub address: Option<String>,
    pub descriptor: Option<PeerDescriptor>,
}

/// Endpoint answering from fixed tables.
#[derive(Clone, Debug, Default)]
pub struct FakeEndpoint {
    pub address: Option<String>,
    pub host_id: HostId,
    pub peers: HashMap<u64, FakePeer>,
}

impl FakeEndpoint {
    /// Endpoint `fi_addr_0` on host 0x1 with one address-only peer,
    /// `fi_addr_1`, registered at handle 1 without peer state.
    pub fn sample() -> Self {
        Self::new(Some("fi_addr_0"), HostId::new(0x1)).with_peer(1, Some("fi_addr_1"), None)
    }

    pub fn new(address: Option<&str>, host_id: HostId) -> Self {
        Self {
            address: address.map(str::to_owned),
            host_id,
            peers: HashMap::new(),
        }
    }

    pub fn with_peer(mut self, addr: u64, address: Option<&str>, host_id: Option<HostId>) -> Self {
        self.peers.insert(
            addr,
            FakePeer {
                address: address.map(str::to_owned),
                descriptor: host_id.map(PeerDescriptor::new),
            },
        );
        self
    }
}

impl RdmEndpoint for FakeEndpoint {
    type Addr = u64;

    fn local_address_text(&self) -> Option<String> { self.address.clone() }

    fn peer_address_text(&self, addr: u64) -> Option<String> {
        self.peers.get(&addr).and_then(|peer| peer.address.clone())
    }

    fn host_id(&self) -> HostId { self.host_id }

    fn lookup_peer(&self, addr: u64) -> Option<PeerDescriptor> {
        self.peers.get(&addr).and_then(|peer| peer.descriptor)
    }
}

/// Allocator that never succeeds.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingAllocator;

impl PayloadAllocator for FailingAllocator {
    type Buffer = Vec<u8>;

    fn allocate(&self, _capacity: usize) -> Option<Self::Buffer> { None }
}

/// Allocator that counts buffers handed out and buffers still alive.
#[derive(Clone, Debug, Default)]
pub struct TrackingAllocator {
    allocated: Arc<AtomicUsize>,
    live: Arc<AtomicUsize>,
    last_capacity: Arc<AtomicUsize>,
}

impl TrackingAllocator {
    pub fn allocated(&self) -> usize { self.allocated.load(Ordering::SeqCst) }

    pub fn live(&self) -> usize { self.live.load(Ordering::SeqCst) }

    pub fn last_capacity(&self) -> usize { self.last_capacity.load(Ordering::SeqCst) }
}

impl PayloadAllocator for TrackingAllocator {
    type Buffer = TrackedBuffer;

    fn allocate(&self, capacity: usize) -> Option<Self::Buffer> {
        self.allocated.fetch_add(1, Ordering::SeqCst);
        self.live.fetch_add(1, Ordering::SeqCst);
        self.last_capacity.store(capacity, Ordering::SeqCst);
        Some(TrackedBuffer {
            bytes: vec![0; capacity],
            live: Arc::clone(&self.live),
        })
    }
}

/// Buffer that decrements its allocator's live count when released.
#[derive(Debug)]
pub struct TrackedBuffer {
    bytes: Vec<u8>,
    live: Arc<AtomicUsize>,
}

impl AsRef<[u8]> for TrackedBuffer {
    fn as_ref(&self) -> &[u8] { &self.bytes }
}

impl AsMut<[u8]> for TrackedBuffer {
    fn as_mut(&mut self) -> &mut [u8] { &mut self.bytes }
}

impl Drop for TrackedBuffer {
    fn drop(&mut self) { self.live.fetch_sub(1, Ordering::SeqCst); }
}
