//! `OctetView` - A read-only view over byte slices for decoding identity records.
//!
//! The Cell Global Identity decoder walks a record through an `OctetView`
//! field by field: three PLMN octets, then LAC, then Cell Identity.

use std::cell::Cell;

/// A read-only cursor over a byte slice.
///
/// Multi-byte values are read in big-endian order and always widened as
/// unsigned integers.
///
/// # Example
/// ```
/// use cellid_common::OctetView;
///
/// let data = [0x72, 0x04, 0x01, 0xFF];
/// let view = OctetView::new(&data);
///
/// assert_eq!(view.read_nibbles(), (0x7, 0x2));
/// assert_eq!(view.read_u16(), 0x0401);
/// assert_eq!(view.read(), 0xFF);
/// ```
#[derive(Debug)]
pub struct OctetView<'a> {
    data: &'a [u8],
    index: Cell<usize>,
}

impl<'a> OctetView<'a> {
    /// Creates a new `OctetView` from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            index: Cell::new(0),
        }
    }

    /// Reads a single byte and advances the index.
    ///
    /// # Panics
    /// Panics if there are no more bytes to read.
    #[inline]
    pub fn read(&self) -> u8 {
        let idx = self.index.get();
        self.index.set(idx + 1);
        self.data[idx]
    }

    /// Reads a single byte split into its semi-octets, as `(high, low)`.
    #[inline]
    pub fn read_nibbles(&self) -> (u8, u8) {
        let octet = self.read();
        (octet >> 4, octet & 0x0F)
    }

    /// Reads a 16-bit value in big-endian order.
    #[inline]
    pub fn read_u16(&self) -> u16 {
        u16::from_be_bytes(self.read_array())
    }

    /// Reads `N` bytes into a fixed-size array.
    ///
    /// # Panics
    /// Panics if fewer than `N` bytes remain.
    pub fn read_array<const N: usize>(&self) -> [u8; N] {
        let idx = self.index.get();
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[idx..idx + N]);
        self.index.set(idx + N);
        out
    }
}
