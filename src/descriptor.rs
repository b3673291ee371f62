//! Connection descriptors appended to error diagnostics.
//!
//! A descriptor names both ends of a failed operation:
//!
//! ```text
//! Local: <addr> Local host id: <token>\tPeer: <addr> Peer host id: <token>
//! ```
//!
//! Absent addresses and unknown host ids render as `N/A`. The longest
//! possible descriptor is known at compile time, so callers can size a buffer
//! once and never truncate.

use std::fmt::{self, Write};

use crate::{
    bounded::{BoundedWriter, FormatError},
    host_id::{HOST_ID_STR_LENGTH, HostId, HostIdLabel, NA_STR},
};

/// Expands to the descriptor format string.
///
/// Kept as a macro so the same literal drives both formatting and the
/// compile-time capacity computation.
macro_rules! conn_info_format {
    () => {
        "Local: {} Local host id: {}\tPeer: {} Peer host id: {}"
    };
}

/// Size of the descriptor template, counting its placeholders and one
/// terminator byte.
pub const CONN_INFO_TEMPLATE_SIZE: usize = conn_info_format!().len() + 1;

/// Size of a fabric address-string buffer, including its terminator.
///
/// Room for an IPv6 presentation address (46 bytes) plus 50 bytes of
/// provider prefix and suffix.
pub const ADDRESS_STR_LEN: usize = 46 + 50;

/// Buffer capacity that holds any descriptor whose addresses fit in
/// `max_address_len`-byte buffers.
///
/// # Examples
///
/// ```
/// use rdm_errdata::descriptor::{
///     ADDRESS_STR_LEN,
///     MAX_CONNECTION_ANNOTATION_LEN,
///     annotation_capacity,
/// };
///
/// assert_eq!(annotation_capacity(ADDRESS_STR_LEN), MAX_CONNECTION_ANNOTATION_LEN);
/// ```
#[must_use]
pub const fn annotation_capacity(max_address_len: usize) -> usize {
    CONN_INFO_TEMPLATE_SIZE + HOST_ID_STR_LENGTH * 2 + max_address_len * 2
}

/// Buffer capacity that holds any descriptor for the default address limit.
pub const MAX_CONNECTION_ANNOTATION_LEN: usize = annotation_capacity(ADDRESS_STR_LEN);

/// Both ends of a connection, ready to render.
///
/// # Examples
///
/// ```
/// use rdm_errdata::{descriptor::ConnectionDescriptor, host_id::HostId};
///
/// let descriptor = ConnectionDescriptor::new(
///     Some("fi_addr_0"),
///     None,
///     HostId::new(0x1),
///     HostId::UNKNOWN,
/// );
/// assert_eq!(
///     descriptor.to_string(),
///     "Local: fi_addr_0 Local host id: i-00000000000000001\tPeer: N/A Peer host id: N/A"
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectionDescriptor<'a> {
    local_addr: Option<&'a str>,
    peer_addr: Option<&'a str>,
    local_host: HostIdLabel,
    peer_host: HostIdLabel,
}

impl<'a> ConnectionDescriptor<'a> {
    /// Describe a connection from its address texts and host ids.
    #[must_use]
    pub fn new(
        local_addr: Option<&'a str>,
        peer_addr: Option<&'a str>,
        local_host_id: HostId,
        peer_host_id: HostId,
    ) -> Self {
        Self {
            local_addr,
            peer_addr,
            local_host: local_host_id.label(),
            peer_host: peer_host_id.label(),
        }
    }

    /// Label shown for the local host id.
    #[must_use]
    pub const fn local_host(&self) -> &HostIdLabel { &self.local_host }

    /// Label shown for the peer host id.
    #[must_use]
    pub const fn peer_host(&self) -> &HostIdLabel { &self.peer_host }

    /// Render into `buf`, terminating the text with a NUL byte.
    ///
    /// Returns the text length, excluding the terminator.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Truncated`] when the text and terminator do not
    /// fit in `buf`.
    pub fn write_to(&self, buf: &mut [u8]) -> Result<usize, FormatError> {
        let mut writer = BoundedWriter::new(buf);
        // BoundedWriter never fails mid-write; overflow surfaces from finish.
        let _ = write!(writer, "{self}");
        writer.finish()
    }
}

impl fmt::Display for ConnectionDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            conn_info_format!(),
            self.local_addr.unwrap_or(NA_STR),
            self.local_host,
            self.peer_addr.unwrap_or(NA_STR),
            self.peer_host,
        )
    }
}

/// Write the connection descriptor for the given ends into `buf`.
///
/// `buf` should be [`annotation_capacity`] bytes for the address limit in
/// use. On success the text is NUL-terminated and strictly shorter than
/// `buf`; its length, excluding the terminator, is returned.
///
/// # Errors
///
/// Returns [`FormatError::Truncated`] if the descriptor would not fit, or
/// would exactly fill `buf` without room for the terminator.
pub fn write_connection_descriptor(
    local_addr: Option<&str>,
    peer_addr: Option<&str>,
    local_host_id: HostId,
    peer_host_id: HostId,
    buf: &mut [u8],
) -> Result<usize, FormatError> {
    ConnectionDescriptor::new(local_addr, peer_addr, local_host_id, peer_host_id).write_to(buf)
}
