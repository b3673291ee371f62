//! Sizing configuration for error data payloads.

use std::num::NonZeroUsize;

use crate::descriptor::{ADDRESS_STR_LEN, annotation_capacity};

/// Bytes reserved around the descriptor: one delimiting space and one
/// terminator.
pub const PAYLOAD_RESERVED_BYTES: usize = 2;

/// Limits used to size error data buffers.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
///
/// use rdm_errdata::{config::ErrorDataConfig, descriptor::MAX_CONNECTION_ANNOTATION_LEN};
///
/// let config = ErrorDataConfig::default();
/// assert_eq!(config.annotation_capacity(), MAX_CONNECTION_ANNOTATION_LEN);
/// assert_eq!(config.payload_capacity(10), 10 + MAX_CONNECTION_ANNOTATION_LEN + 2);
///
/// let narrow = config.with_max_address_len(NonZeroUsize::new(16).expect("non-zero"));
/// assert!(narrow.annotation_capacity() < MAX_CONNECTION_ANNOTATION_LEN);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ErrorDataConfig {
    max_address_len: NonZeroUsize,
}

impl ErrorDataConfig {
    /// The fabric's address-string buffer size.
    pub const DEFAULT_MAX_ADDRESS_LEN: NonZeroUsize = match NonZeroUsize::new(ADDRESS_STR_LEN) {
        Some(len) => len,
        None => panic!("address buffer size must be non-zero"),
    };

    /// Create a configuration for the given address-string buffer size,
    /// counting the terminator.
    #[must_use]
    pub const fn new(max_address_len: NonZeroUsize) -> Self { Self { max_address_len } }

    /// Replace the address-string buffer size.
    #[must_use]
    pub const fn with_max_address_len(self, max_address_len: NonZeroUsize) -> Self {
        Self { max_address_len }
    }

    /// Address-string buffer size, counting the terminator.
    #[must_use]
    pub const fn max_address_len(&self) -> NonZeroUsize { self.max_address_len }

    /// Capacity that holds any connection descriptor under this limit.
    #[must_use]
    pub const fn annotation_capacity(&self) -> usize {
        annotation_capacity(self.max_address_len.get())
    }

    /// Allocation size for a payload whose base text is `base_len` bytes.
    ///
    /// Saturates rather than wrapping; a saturated request simply fails to
    /// allocate.
    #[must_use]
    pub const fn payload_capacity(&self, base_len: usize) -> usize {
        base_len
            .saturating_add(self.annotation_capacity())
            .saturating_add(PAYLOAD_RESERVED_BYTES)
    }
}

impl Default for ErrorDataConfig {
    fn default() -> Self { Self::new(Self::DEFAULT_MAX_ADDRESS_LEN) }
}
