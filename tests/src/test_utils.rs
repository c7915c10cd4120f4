//! Test utility functions for integration tests
//!
//! Provides logging setup and builders for raw 7-octet records.

use cellid_common::{OctetString, CGI_LENGTH, FILLER_NIBBLE};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging for tests
///
/// Uses RUST_LOG environment variable if set, otherwise defaults to "warn"
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Builder for raw records laid out digit by digit.
///
/// MNC digit 3 defaults to the filler nibble.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    mcc: [u8; 3],
    mnc: [u8; 2],
    mnc3: u8,
    lac: u16,
    cell_id: u16,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self {
            mcc: [0, 0, 1],
            mnc: [0, 1],
            mnc3: FILLER_NIBBLE,
            lac: 0,
            cell_id: 0,
        }
    }
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mcc_digits(mut self, d1: u8, d2: u8, d3: u8) -> Self {
        self.mcc = [d1, d2, d3];
        self
    }

    /// Sets MNC digits 1 and 2; digit 3 is left as is.
    pub fn mnc_digits(mut self, d1: u8, d2: u8) -> Self {
        self.mnc = [d1, d2];
        self
    }

    /// Sets the semi-octet shared by MNC digit 3 and the filler.
    pub fn mnc_third(mut self, d3: u8) -> Self {
        self.mnc3 = d3;
        self
    }

    pub fn lac(mut self, lac: u16) -> Self {
        self.lac = lac;
        self
    }

    pub fn cell_id(mut self, cell_id: u16) -> Self {
        self.cell_id = cell_id;
        self
    }

    pub fn build(&self) -> [u8; CGI_LENGTH] {
        let mut os = OctetString::new();
        os.append_octet_nibbles(self.mcc[1], self.mcc[0]);
        os.append_octet_nibbles(self.mnc3, self.mcc[2]);
        os.append_octet_nibbles(self.mnc[0], self.mnc[1]);
        os.append_u16(self.lac);
        os.append_u16(self.cell_id);

        let mut record = [0u8; CGI_LENGTH];
        record.copy_from_slice(os.data());
        record
    }
}

/// Shorthand for a record with the given MCC digits, MNC semi-octets and
/// 16-bit fields.
pub fn build_record(mcc: [u8; 3], mnc: [u8; 3], lac: u16, cell_id: u16) -> [u8; CGI_LENGTH] {
    RecordBuilder::new()
        .mcc_digits(mcc[0], mcc[1], mcc[2])
        .mnc_digits(mnc[0], mnc[1])
        .mnc_third(mnc[2])
        .lac(lac)
        .cell_id(cell_id)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_layout() {
        let record = RecordBuilder::new()
            .mcc_digits(2, 7, 4)
            .mnc_digits(1, 0)
            .lac(1)
            .cell_id(2)
            .build();
        assert_eq!(record, [0x72, 0xF4, 0x10, 0x00, 0x01, 0x00, 0x02]);
    }

    #[test]
    fn test_build_record_three_digit() {
        let record = build_record([1, 2, 3], [5, 4, 6], 0x0401, 0x00FF);
        assert_eq!(record, [0x21, 0x63, 0x54, 0x04, 0x01, 0x00, 0xFF]);
    }
}
