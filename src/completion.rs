//! Error completion records carrying optional error data.

use std::fmt;

use crate::{endpoint::ProviderErrno, payload::ErrorPayload};

/// An error completion as delivered to the application.
///
/// `err_data` is owned by the record; the reporting layer forwards it and
/// releases it by dropping the record. A record without data reports an
/// `err_data_size` of zero.
pub struct ErrorCompletion<B = Box<[u8]>> {
    /// Fabric-level error code.
    pub err: i32,
    /// Provider-specific error code.
    pub prov_errno: ProviderErrno,
    /// Diagnostic text describing the failure, if it could be built.
    pub err_data: Option<ErrorPayload<B>>,
}

impl<B: AsRef<[u8]>> ErrorCompletion<B> {
    /// A completion that carries no error data.
    #[must_use]
    pub fn without_data(err: i32, prov_errno: ProviderErrno) -> Self {
        Self {
            err,
            prov_errno,
            err_data: None,
        }
    }

    /// Size of the attached error data in bytes, or 0 when absent.
    #[must_use]
    pub fn err_data_size(&self) -> usize { self.err_data.as_ref().map_or(0, ErrorPayload::len) }

    /// The attached diagnostic text, if any.
    #[must_use]
    pub fn err_data_message(&self) -> Option<String> {
        self.err_data
            .as_ref()
            .map(|payload| payload.message().into_owned())
    }
}

impl<B: AsRef<[u8]>> fmt::Debug for ErrorCompletion<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorCompletion")
            .field("err", &self.err)
            .field("prov_errno", &self.prov_errno)
            .field("err_data", &self.err_data)
            .finish()
    }
}
