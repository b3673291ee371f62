//! Host identifiers and their fixed-width textual tokens.
//!
//! A [`HostId`] names the physical host running an endpoint. Diagnostics
//! render it as a [`HostIdToken`]: `i-` followed by 17 zero-padded lowercase
//! hex digits. The value 0 is reserved to mean "unknown" and never renders as
//! a token.

use std::fmt::{self, Write};

use derive_more::{Display, From, Into};
use thiserror::Error;

use crate::bounded::BoundedWriter;

/// Length of a rendered host id token, excluding any terminator.
pub const HOST_ID_STR_LENGTH: usize = 19;

/// Scratch size needed to render a token with its terminator.
pub const HOST_ID_BUF_LEN: usize = HOST_ID_STR_LENGTH + 1;

/// Placeholder shown wherever a value is absent or cannot be rendered.
pub const NA_STR: &str = "N/A";

/// Identifier of the physical host running an endpoint.
///
/// # Examples
///
/// ```
/// use rdm_errdata::host_id::HostId;
///
/// assert!(HostId::new(0x123).is_known());
/// assert!(!HostId::UNKNOWN.is_known());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, From, Into)]
#[display("{_0:#x}")]
pub struct HostId(u64);

impl HostId {
    /// Sentinel meaning the host id is unknown or unsupported.
    pub const UNKNOWN: Self = Self(0);

    /// Wrap a raw host id value.
    #[must_use]
    pub const fn new(value: u64) -> Self { Self(value) }

    /// Return the raw value.
    #[must_use]
    pub const fn get(self) -> u64 { self.0 }

    /// Report whether this id carries a real value rather than the sentinel.
    #[must_use]
    pub const fn is_known(self) -> bool { self.0 != 0 }

    /// Render the token for this id, or `N/A` when it cannot be rendered.
    #[must_use]
    pub fn label(self) -> HostIdLabel {
        match HostIdToken::encode(self) {
            Ok(token) => HostIdLabel::Token(token),
            Err(_) => HostIdLabel::Unavailable,
        }
    }
}

/// Reasons a host id produced no token.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum HostIdError {
    /// The id is the "unknown" sentinel; there is nothing to show.
    #[error("host id unavailable")]
    Unavailable,
    /// Rendering produced an unexpected length.
    #[error("host id rendered to {len} bytes, expected {HOST_ID_STR_LENGTH}")]
    Malformed {
        /// Number of bytes the rendering produced.
        len: usize,
    },
}

/// A rendered host id such as `i-00000000000000123`.
///
/// The token lives in a fixed stack array; it never allocates.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostIdToken {
    buf: [u8; HOST_ID_BUF_LEN],
}

impl HostIdToken {
    /// Render `host_id` as a token.
    ///
    /// # Errors
    ///
    /// Returns [`HostIdError::Unavailable`] for the sentinel id 0 and
    /// [`HostIdError::Malformed`] if the rendering is not exactly
    /// [`HOST_ID_STR_LENGTH`] bytes long.
    ///
    /// # Examples
    ///
    /// ```
    /// use rdm_errdata::host_id::{HostId, HostIdError, HostIdToken};
    ///
    /// let token = HostIdToken::encode(HostId::new(0x123)).expect("non-zero id");
    /// assert_eq!(token.as_str(), "i-00000000000000123");
    /// assert_eq!(
    ///     HostIdToken::encode(HostId::UNKNOWN),
    ///     Err(HostIdError::Unavailable)
    /// );
    /// ```
    pub fn encode(host_id: HostId) -> Result<Self, HostIdError> {
        if !host_id.is_known() {
            return Err(HostIdError::Unavailable);
        }

        let mut buf = [0u8; HOST_ID_BUF_LEN];
        let mut writer = BoundedWriter::new(&mut buf);
        write!(writer, "i-{:017x}", host_id.get()).map_err(|_| HostIdError::Malformed { len: 0 })?;
        let required = writer.required();
        match writer.finish() {
            Ok(HOST_ID_STR_LENGTH) => Ok(Self { buf }),
            Ok(len) => Err(HostIdError::Malformed { len }),
            Err(_) => Err(HostIdError::Malformed { len: required }),
        }
    }

    /// The token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.buf
            .get(..HOST_ID_STR_LENGTH)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .unwrap_or(NA_STR)
    }
}

impl fmt::Display for HostIdToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl fmt::Debug for HostIdToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HostIdToken").field(&self.as_str()).finish()
    }
}

/// What a diagnostic shows for a host id: its token, or `N/A`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostIdLabel {
    /// The id rendered successfully.
    Token(HostIdToken),
    /// The id was the sentinel or failed to render.
    Unavailable,
}

impl HostIdLabel {
    /// The text shown in diagnostics.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Token(token) => token.as_str(),
            Self::Unavailable => NA_STR,
        }
    }

    /// Report whether the `N/A` placeholder was substituted.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool { matches!(self, Self::Unavailable) }
}

impl fmt::Display for HostIdLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}
