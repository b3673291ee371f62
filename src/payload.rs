//! Owned error data buffers.
//!
//! An [`ErrorPayload`] is produced once per error event and handed to the
//! completion layer, which becomes its sole owner. Buffers come from a
//! [`PayloadAllocator`]; dropping the payload releases its buffer.

use std::{borrow::Cow, fmt};

/// Source of payload buffers.
///
/// Allocation failure is an ordinary outcome reported as `None`. Releasing a
/// buffer is dropping it.
pub trait PayloadAllocator {
    /// Owned buffer type handed out by this allocator.
    type Buffer: AsRef<[u8]> + AsMut<[u8]>;

    /// Allocate a zeroed buffer of exactly `capacity` bytes.
    fn allocate(&self, capacity: usize) -> Option<Self::Buffer>;
}

impl<A: PayloadAllocator + ?Sized> PayloadAllocator for &A {
    type Buffer = A::Buffer;

    fn allocate(&self, capacity: usize) -> Option<Self::Buffer> { (**self).allocate(capacity) }
}

/// Allocates payload buffers on the global heap.
///
/// Uses fallible reservation, so exhaustion yields `None` instead of
/// aborting the process.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeapAllocator;

impl PayloadAllocator for HeapAllocator {
    type Buffer = Box<[u8]>;

    fn allocate(&self, capacity: usize) -> Option<Self::Buffer> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity).ok()?;
        buf.resize(capacity, 0);
        Some(buf.into_boxed_slice())
    }
}

/// A NUL-terminated diagnostic string and the buffer that holds it.
///
/// `len` counts the terminator and is always strictly smaller than the
/// buffer's capacity.
pub struct ErrorPayload<B = Box<[u8]>> {
    buf: B,
    len: usize,
}

impl<B: AsRef<[u8]>> ErrorPayload<B> {
    /// Wrap `buf`, whose first `len` bytes hold the terminated text.
    pub(crate) fn new(buf: B, len: usize) -> Self { Self { buf, len } }

    /// Occupied length in bytes, terminator included.
    #[must_use]
    pub fn len(&self) -> usize { self.len }

    /// Always `false`: a payload holds at least its terminator.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Size of the underlying allocation.
    #[must_use]
    pub fn capacity(&self) -> usize { self.buf.as_ref().len() }

    /// The occupied bytes, terminator included.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { self.buf.as_ref().get(..self.len).unwrap_or_default() }

    /// The diagnostic text without its terminator.
    #[must_use]
    pub fn message(&self) -> Cow<'_, str> {
        let text = self.as_bytes().split_last().map_or(&[][..], |(_, text)| text);
        String::from_utf8_lossy(text)
    }

    /// Give up ownership of the buffer together with its occupied length.
    #[must_use]
    pub fn into_parts(self) -> (B, usize) { (self.buf, self.len) }
}

impl<B: AsRef<[u8]>> fmt::Display for ErrorPayload<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.message()) }
}

impl<B: AsRef<[u8]>> fmt::Debug for ErrorPayload<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorPayload")
            .field("message", &self.message())
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorPayload, HeapAllocator, PayloadAllocator};

    #[test]
    fn heap_allocator_returns_zeroed_buffer_of_requested_size() {
        let buf = HeapAllocator.allocate(32).expect("small allocation succeeds");
        assert_eq!(buf.len(), 32);
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn heap_allocator_reports_exhaustion() {
        assert!(HeapAllocator.allocate(usize::MAX).is_none());
    }

    #[test]
    fn payload_exposes_text_and_terminator() {
        let mut buf = vec![0u8; 16].into_boxed_slice();
        buf[..6].copy_from_slice(b"hello\0");
        let payload = ErrorPayload::new(buf, 6);

        assert_eq!(payload.len(), 6);
        assert_eq!(payload.capacity(), 16);
        assert_eq!(payload.as_bytes(), b"hello\0");
        assert_eq!(payload.message(), "hello");
        assert_eq!(payload.to_string(), "hello");

        let (raw, len) = payload.into_parts();
        assert_eq!(&raw[..len], b"hello\0");
    }
}
