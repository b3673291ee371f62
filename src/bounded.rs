//! A fixed-capacity text sink with C `snprintf` semantics.
//!
//! [`BoundedWriter`] writes formatted text into a caller-provided byte slice,
//! always reserving one byte for a NUL terminator. When the text would not
//! fit, the writer keeps counting so the caller learns how many bytes the
//! full text needed, and [`BoundedWriter::finish`] reports the overflow.

use std::fmt;

use thiserror::Error;

/// Formatting failed because the rendered text did not fit its buffer.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// The rendered text plus its terminator exceeded the buffer capacity.
    #[error("formatted text needs {required} bytes plus terminator, capacity is {capacity}")]
    Truncated {
        /// Length of the full text, excluding the terminator.
        required: usize,
        /// Capacity of the destination buffer, including the terminator.
        capacity: usize,
    },
}

/// Writes text into a fixed byte slice, reserving space for a terminator.
///
/// # Examples
///
/// ```
/// use std::fmt::Write;
///
/// use rdm_errdata::bounded::BoundedWriter;
///
/// let mut buf = [0u8; 8];
/// let mut writer = BoundedWriter::new(&mut buf);
/// write!(writer, "id={}", 42).expect("writer never errors");
/// assert_eq!(writer.finish(), Ok(5));
/// assert_eq!(&buf[..6], b"id=42\0");
/// ```
#[derive(Debug)]
pub struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    required: usize,
}

impl<'a> BoundedWriter<'a> {
    /// Wrap `buf` as the destination for formatted text.
    #[must_use]
    pub fn new(buf: &'a mut [u8]) -> Self { Self { buf, required: 0 } }

    /// Capacity of the destination, including the terminator byte.
    #[must_use]
    pub fn capacity(&self) -> usize { self.buf.len() }

    /// Number of text bytes requested so far, whether or not they fit.
    #[must_use]
    pub fn required(&self) -> usize { self.required }

    /// Terminate the text and return its length, excluding the terminator.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Truncated`] when the text would fill or exceed
    /// the capacity, leaving no room for the terminator.
    pub fn finish(self) -> Result<usize, FormatError> {
        let capacity = self.buf.len();
        match self.buf.get_mut(self.required) {
            Some(terminator) => {
                *terminator = 0;
                Ok(self.required)
            }
            None => Err(FormatError::Truncated {
                required: self.required,
                capacity,
            }),
        }
    }
}

impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let start = self.required;
        self.required = self.required.saturating_add(s.len());
        // Once the text overflows nothing more is copied; only the count grows.
        if self.required < self.buf.len()
            && let Some(dst) = self.buf.get_mut(start..self.required)
        {
            dst.copy_from_slice(s.as_bytes());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Write;

    use rstest::rstest;

    use super::{BoundedWriter, FormatError};

    #[rstest]
    #[case::fits_with_room(8, "abc", Ok(3))]
    #[case::fits_exactly_with_terminator(4, "abc", Ok(3))]
    #[case::fills_without_terminator(3, "abc", Err(FormatError::Truncated { required: 3, capacity: 3 }))]
    #[case::exceeds(2, "abcdef", Err(FormatError::Truncated { required: 6, capacity: 2 }))]
    #[case::empty_buffer(0, "", Err(FormatError::Truncated { required: 0, capacity: 0 }))]
    fn finish_reports_snprintf_outcome(
        #[case] capacity: usize,
        #[case] text: &str,
        #[case] expected: Result<usize, FormatError>,
    ) {
        let mut buf = vec![0xff_u8; capacity];
        let mut writer = BoundedWriter::new(&mut buf);
        writer.write_str(text).expect("writer never errors");
        assert_eq!(writer.finish(), expected);
    }

    #[test]
    fn terminator_follows_text() {
        let mut buf = [0xff_u8; 6];
        let mut writer = BoundedWriter::new(&mut buf);
        write!(writer, "{}-{}", "a", 7).expect("writer never errors");
        assert_eq!(writer.finish(), Ok(3));
        assert_eq!(&buf, b"a-7\0\xff\xff");
    }

    #[test]
    fn overflow_keeps_counting_across_writes() {
        let mut buf = [0u8; 4];
        let mut writer = BoundedWriter::new(&mut buf);
        writer.write_str("ab").expect("writer never errors");
        writer.write_str("cdef").expect("writer never errors");
        writer.write_str("g").expect("writer never errors");
        assert_eq!(writer.required(), 7);
        assert_eq!(
            writer.finish(),
            Err(FormatError::Truncated {
                required: 7,
                capacity: 4
            })
        );
        assert_eq!(&buf[..2], b"ab");
    }
}
