//! Allocate-and-compose entry point for error data.
//!
//! [`ErrorDataBuilder`] gathers the base error text and a connection
//! descriptor from the transport's capabilities, sizes a buffer for the
//! worst case, and writes `"<base text> <descriptor>"` into it.
//!
//! Each call is independent: the builder holds no per-call state, so it may
//! be shared freely between endpoints and threads.

use log::{debug, warn};

use crate::{
    completion::ErrorCompletion,
    config::ErrorDataConfig,
    descriptor::ConnectionDescriptor,
    endpoint::{ErrnoText, ProviderErrno, RdmEndpoint},
    error::{ErrorDataError, Result},
    metrics::{self, Side},
    payload::{ErrorPayload, HeapAllocator, PayloadAllocator},
};

/// Builds diagnostic payloads for error completions.
///
/// # Examples
///
/// ```
/// use rdm_errdata::{ErrorDataBuilder, descriptor::ConnectionDescriptor, host_id::HostId};
///
/// let builder = ErrorDataBuilder::new();
/// let descriptor =
///     ConnectionDescriptor::new(Some("fi_addr_0"), Some("fi_addr_1"), HostId::new(1), HostId::UNKNOWN);
/// let payload = builder
///     .compose("Resource temporarily unavailable", &descriptor)
///     .expect("payload fits");
/// assert!(payload.message().ends_with("Peer host id: N/A"));
/// assert_eq!(payload.len(), payload.message().len() + 1);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ErrorDataBuilder<A = HeapAllocator> {
    allocator: A,
    config: ErrorDataConfig,
}

impl ErrorDataBuilder {
    /// Create a builder using the heap and the default address limit.
    #[must_use]
    pub fn new() -> Self { Self::default() }
}

impl<A> ErrorDataBuilder<A> {
    /// Replace the allocator used for payload buffers.
    #[must_use]
    pub fn with_allocator<B>(self, allocator: B) -> ErrorDataBuilder<B> {
        ErrorDataBuilder {
            allocator,
            config: self.config,
        }
    }

    /// Replace the sizing configuration.
    #[must_use]
    pub fn with_config(mut self, config: ErrorDataConfig) -> Self {
        self.config = config;
        self
    }

    /// The sizing configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ErrorDataConfig { &self.config }
}

impl<A: PayloadAllocator> ErrorDataBuilder<A> {
    /// Build the error data for a failed operation against `remote_addr`.
    ///
    /// The base text comes from `errno_text`; addresses and host ids come
    /// from `endpoint`. A peer with no registered state shows `N/A` for its
    /// host id.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorDataError::Allocation`] when no buffer is available and
    /// [`ErrorDataError::Formatting`] when the descriptor exceeds its static
    /// bound, for example because an address string is longer than the
    /// configured limit. No buffer outlives a failed call.
    pub fn build<E, T>(
        &self,
        endpoint: &E,
        errno_text: &T,
        remote_addr: E::Addr,
        prov_errno: ProviderErrno,
    ) -> Result<ErrorPayload<A::Buffer>>
    where
        E: RdmEndpoint + ?Sized,
        T: ErrnoText + ?Sized,
    {
        let base_text = errno_text.errno_to_text(prov_errno);
        let local_addr = endpoint.local_address_text();
        let peer_addr = endpoint.peer_address_text(remote_addr);
        let descriptor = ConnectionDescriptor::new(
            local_addr.as_deref(),
            peer_addr.as_deref(),
            endpoint.host_id(),
            endpoint.peer_host_id(remote_addr),
        );

        if descriptor.local_host().is_unavailable() {
            metrics::inc_unknown_host_ids(Side::Local);
        }
        if descriptor.peer_host().is_unavailable() {
            metrics::inc_unknown_host_ids(Side::Peer);
        }

        let result = self.compose(&base_text, &descriptor);
        match &result {
            Ok(payload) => {
                metrics::inc_payloads();
                debug!(
                    "built error data: prov_errno={prov_errno}, remote_addr={remote_addr:?}, len={}",
                    payload.len()
                );
            }
            Err(error) => metrics::inc_failures(error.reason()),
        }
        result
    }

    /// Allocate a buffer and write `"<base_text> <descriptor>"` into it.
    ///
    /// The buffer is sized as `base_text.len()` plus the descriptor bound plus
    /// two bytes for the delimiting space and the terminator. The returned
    /// payload's length counts the terminator and is strictly smaller than
    /// that size.
    ///
    /// # Errors
    ///
    /// See [`ErrorDataBuilder::build`].
    pub fn compose(
        &self,
        base_text: &str,
        descriptor: &ConnectionDescriptor<'_>,
    ) -> Result<ErrorPayload<A::Buffer>> {
        let capacity = self.config.payload_capacity(base_text.len());
        let Some(mut buf) = self
            .allocator
            .allocate(capacity)
            .filter(|buf| buf.as_ref().len() >= capacity)
        else {
            return Err(ErrorDataError::Allocation { capacity });
        };

        let (head, rest) = buf.as_mut().split_at_mut(base_text.len());
        head.copy_from_slice(base_text.as_bytes());
        let Some((delimiter, tail)) = rest.split_first_mut() else {
            return Err(ErrorDataError::Allocation { capacity });
        };
        *delimiter = b' ';

        let region_len = tail.len().min(self.config.annotation_capacity());
        let region = &mut tail[..region_len];
        // On failure `buf` is dropped on return, releasing it.
        let written = descriptor.write_to(region)?;

        let len = base_text.len() + 1 + written + 1;
        Ok(ErrorPayload::new(buf, len))
    }

    /// Build an error completion carrying error data when it can be made.
    ///
    /// A failure to build the data is not fatal: the completion is returned
    /// without annotation and the failure is logged.
    pub fn error_completion<E, T>(
        &self,
        endpoint: &E,
        errno_text: &T,
        remote_addr: E::Addr,
        err: i32,
        prov_errno: ProviderErrno,
    ) -> ErrorCompletion<A::Buffer>
    where
        E: RdmEndpoint + ?Sized,
        T: ErrnoText + ?Sized,
    {
        let err_data = self
            .build(endpoint, errno_text, remote_addr, prov_errno)
            .inspect_err(|error| {
                warn!(
                    "reporting error completion without error data: err={err}, \
                     prov_errno={prov_errno}, remote_addr={remote_addr:?}, reason={}, error={error}",
                    error.reason()
                );
            })
            .ok();
        ErrorCompletion {
            err,
            prov_errno,
            err_data,
        }
    }
}
