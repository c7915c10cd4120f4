//! Command-line input handling: hex text to decoded Cell Global Identity.

use cellid_common::{log_cell_identity, CellGlobalId, Error, OctetString};
use tracing::debug;

/// Parses one hex-encoded argument and decodes it.
///
/// Whitespace inside the argument is ignored. Fails before decoding if the
/// text is not hex or holds fewer than 7 octets.
pub fn decode_argument(arg: &str) -> Result<CellGlobalId, Error> {
    let raw = OctetString::from_hex(arg)?;
    debug!(len = raw.data().len(), hex = %raw, "parsed cell identity argument");

    let cgi = CellGlobalId::from_slice(raw.data())?;
    log_cell_identity(raw.data(), &cgi);
    Ok(cgi)
}
