//! `OctetString` type for raw identity records.
//!
//! Holds the octets of a record on their way in from text input, and lets
//! tests lay out records semi-octet by semi-octet.

use std::fmt;

use crate::error::Error;

/// A variable-length sequence of octets (bytes).
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct OctetString {
    data: Vec<u8>,
}

impl OctetString {
    /// Creates a new empty `OctetString`.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an `OctetString` from a hex string.
    ///
    /// Whitespace anywhere in the input is ignored, and both upper and lower
    /// case digits are accepted.
    ///
    /// # Arguments
    /// * `hex` - A hex string (e.g., "72F41000010002" or "72 f4 10 00 01 00 02")
    ///
    /// # Errors
    /// `Error::InvalidHex` on an odd number of digits or a non-hex character.
    ///
    /// # Example
    /// ```
    /// use cellid_common::OctetString;
    ///
    /// let raw = OctetString::from_hex("72F41000010002").unwrap();
    /// assert_eq!(raw.data(), &[0x72, 0xF4, 0x10, 0x00, 0x01, 0x00, 0x02]);
    /// assert!(OctetString::from_hex("72F").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let digits: String = hex.chars().filter(|c| !c.is_whitespace()).collect();
        Ok(Self {
            data: hex::decode(digits)?,
        })
    }

    /// Appends a byte constructed from two 4-bit nibbles.
    ///
    /// Bits above the low four of each argument are dropped.
    pub fn append_octet_nibbles(&mut self, high_nibble: u8, low_nibble: u8) {
        self.data.push(((high_nibble & 0x0F) << 4) | (low_nibble & 0x0F));
    }

    /// Appends a 16-bit value in big-endian order.
    pub fn append_u16(&mut self, value: u16) {
        self.data.extend_from_slice(&value.to_be_bytes());
    }

    /// Returns the underlying bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for OctetString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OctetString({})", hex::encode(&self.data))
    }
}

impl fmt::Display for OctetString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.data))
    }
}
