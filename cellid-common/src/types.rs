//! Cell identity types: PLMN and Cell Global Identity.
//!
//! Decoding follows the GlobalCellId octet layout referenced from
//! 3GPP TS 23.003:
//!
//! ```text
//! octet 1  bits 4321  MCC digit 1
//!          bits 8765  MCC digit 2
//! octet 2  bits 4321  MCC digit 3
//!          bits 8765  MNC digit 3, or filler (1111) for shorter MNCs
//! octet 3  bits 8765  MNC digit 1
//!          bits 4321  MNC digit 2
//! octets 4-5          Location Area Code (TS 24.008)
//! octets 6-7          Cell Identity (TS 24.008)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::octet_view::OctetView;

/// Number of octets in an encoded Cell Global Identity.
pub const CGI_LENGTH: usize = 7;

/// Number of octets in an encoded PLMN identity.
pub const PLMN_LENGTH: usize = 3;

/// Semi-octet value marking an absent MNC digit.
pub const FILLER_NIBBLE: u8 = 0x0F;

/// Number of significant digits detected in an MNC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MncLength {
    /// Filler present and second digit zero
    OneDigit,
    /// Filler present
    #[default]
    TwoDigit,
    /// No filler, all three semi-octets are digits
    ThreeDigit,
}

impl MncLength {
    /// Returns the digit count as a number.
    pub const fn digits(self) -> usize {
        match self {
            MncLength::OneDigit => 1,
            MncLength::TwoDigit => 2,
            MncLength::ThreeDigit => 3,
        }
    }
}

/// Public Land Mobile Network identifier.
///
/// A PLMN uniquely identifies a mobile network and consists of:
/// - MCC (Mobile Country Code): 3 decimal digits
/// - MNC (Mobile Network Code): 1, 2 or 3 decimal digits
///
/// Digits are not range-checked during decoding, so a semi-octet holding
/// 10-15 contributes its raw value to the sum.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Plmn {
    /// Mobile Country Code
    pub mcc: u16,
    /// Mobile Network Code
    pub mnc: u16,
    /// Number of MNC digits detected from the filler convention
    pub mnc_length: MncLength,
}

impl Plmn {
    /// Creates a new PLMN with the given MCC and MNC.
    pub const fn new(mcc: u16, mnc: u16, mnc_length: MncLength) -> Self {
        Self {
            mcc,
            mnc,
            mnc_length,
        }
    }

    /// Decodes a PLMN from its 3-octet encoding.
    ///
    /// MNC length is resolved in this order:
    /// 1. filler in octet 2 and MNC digit 2 is zero: 1-digit MNC
    /// 2. filler in octet 2: 2-digit MNC
    /// 3. otherwise: 3-digit MNC
    ///
    /// # Example
    /// ```
    /// use cellid_common::{MncLength, Plmn};
    ///
    /// let plmn = Plmn::decode([0x21, 0xF3, 0x12]);
    /// assert_eq!(plmn, Plmn::new(123, 12, MncLength::TwoDigit));
    /// ```
    pub fn decode(bytes: [u8; PLMN_LENGTH]) -> Self {
        let view = OctetView::new(&bytes);

        // Decode MCC
        let (mcc2, mcc1) = view.read_nibbles();
        let (mnc3, mcc3) = view.read_nibbles();
        let mcc = 100 * mcc1 as u16 + 10 * mcc2 as u16 + mcc3 as u16;

        // Decode MNC
        let (mnc1, mnc2) = view.read_nibbles();
        let has_filler = mnc3 == FILLER_NIBBLE;

        let (mnc, mnc_length) = if has_filler && mnc2 == 0 {
            (mnc1 as u16, MncLength::OneDigit)
        } else if has_filler {
            (10 * mnc1 as u16 + mnc2 as u16, MncLength::TwoDigit)
        } else {
            (
                100 * mnc1 as u16 + 10 * mnc2 as u16 + mnc3 as u16,
                MncLength::ThreeDigit,
            )
        };

        Self {
            mcc,
            mnc,
            mnc_length,
        }
    }
}

impl fmt::Debug for Plmn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Plmn({:03}-{:0width$})",
            self.mcc,
            self.mnc,
            width = self.mnc_length.digits()
        )
    }
}

impl fmt::Display for Plmn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:03}-{:0width$}",
            self.mcc,
            self.mnc,
            width = self.mnc_length.digits()
        )
    }
}

/// Cell Global Identity: PLMN, Location Area Code and Cell Identity.
///
/// Serializes flat, as `mcc`, `mnc`, `mnc-length`, `lac` and `cell-id`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CellGlobalId {
    /// Network the cell belongs to
    #[serde(flatten)]
    pub plmn: Plmn,
    /// Location Area Code
    pub lac: u16,
    /// Cell Identity
    pub cell_id: u16,
}

impl CellGlobalId {
    /// Creates a new Cell Global Identity from its parts.
    pub const fn new(plmn: Plmn, lac: u16, cell_id: u16) -> Self {
        Self { plmn, lac, cell_id }
    }

    /// Decodes a Cell Global Identity from its 7-octet encoding.
    ///
    /// Decoding is total: every input produces a value.
    ///
    /// # Example
    /// ```
    /// use cellid_common::CellGlobalId;
    ///
    /// let cgi = CellGlobalId::decode([0x21, 0x63, 0x54, 0x04, 0x01, 0x00, 0xFF]);
    /// assert_eq!(cgi.mcc(), 123);
    /// assert_eq!(cgi.mnc(), 546);
    /// assert_eq!(cgi.lac, 1025);
    /// assert_eq!(cgi.cell_id, 255);
    /// ```
    pub fn decode(bytes: [u8; CGI_LENGTH]) -> Self {
        let view = OctetView::new(&bytes);
        let plmn = Plmn::decode(view.read_array());
        let lac = view.read_u16();
        let cell_id = view.read_u16();
        Self { plmn, lac, cell_id }
    }

    /// Decodes a Cell Global Identity from the start of a byte slice.
    ///
    /// Octets after the seventh are ignored.
    ///
    /// # Errors
    /// `Error::TooShort` if the slice holds fewer than [`CGI_LENGTH`] octets.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let record: [u8; CGI_LENGTH] = bytes
            .get(..CGI_LENGTH)
            .and_then(|head| <[u8; CGI_LENGTH]>::try_from(head).ok())
            .ok_or_else(|| Error::TooShort {
                expected: CGI_LENGTH,
                actual: bytes.len(),
                value: hex::encode(bytes),
            })?;
        Ok(Self::decode(record))
    }

    /// Returns the Mobile Country Code.
    pub fn mcc(&self) -> u16 {
        self.plmn.mcc
    }

    /// Returns the Mobile Network Code.
    pub fn mnc(&self) -> u16 {
        self.plmn.mnc
    }
}

impl fmt::Debug for CellGlobalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CellGlobalId({:?}, lac={}, ci={})",
            self.plmn, self.lac, self.cell_id
        )
    }
}

impl fmt::Display for CellGlobalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MCC: {:03}, MNC: {:03}, LAC: {}, Cell-ID: {}",
            self.plmn.mcc, self.plmn.mnc, self.lac, self.cell_id
        )
    }
}
