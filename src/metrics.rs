//! Metric helpers for `rdm-errdata`.
//!
//! This module defines metric names and simple helper functions wrapping the
//! [`metrics`](https://docs.rs/metrics) crate. Without the `metrics` feature
//! the helpers do nothing.

#[cfg(feature = "metrics")]
use metrics::counter;

/// Name of the counter tracking successfully built payloads.
pub const PAYLOADS_TOTAL: &str = "rdm_errdata_payloads_total";
/// Name of the counter tracking failed builds, labelled by `reason`.
pub const FAILURES_TOTAL: &str = "rdm_errdata_failures_total";
/// Name of the counter tracking `N/A` host id substitutions, labelled by
/// `side`.
pub const UNKNOWN_HOST_IDS_TOTAL: &str = "rdm_errdata_unknown_host_ids_total";

/// Which end of the connection a host id belongs to.
#[derive(Clone, Copy, Debug)]
pub enum Side {
    /// The endpoint reporting the error.
    Local,
    /// The remote peer.
    Peer,
}

impl Side {
    #[cfg_attr(not(feature = "metrics"), allow(dead_code))]
    fn as_str(self) -> &'static str {
        match self {
            Side::Local => "local",
            Side::Peer => "peer",
        }
    }
}

/// Record a successfully built payload.
pub fn inc_payloads() {
    #[cfg(feature = "metrics")]
    counter!(PAYLOADS_TOTAL).increment(1);
}

/// Record a failed build for the given reason label.
pub fn inc_failures(reason: &'static str) {
    #[cfg(feature = "metrics")]
    counter!(FAILURES_TOTAL, "reason" => reason).increment(1);
    #[cfg(not(feature = "metrics"))]
    let _ = reason;
}

/// Record an `N/A` substitution for a host id.
pub fn inc_unknown_host_ids(side: Side) {
    #[cfg(feature = "metrics")]
    counter!(UNKNOWN_HOST_IDS_TOTAL, "side" => side.as_str()).increment(1);
    #[cfg(not(feature = "metrics"))]
    let _ = side;
}
