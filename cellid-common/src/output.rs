//! Rendering of decoded Cell Global Identities.

use crate::config::OutputFormat;
use crate::error::Error;
use crate::types::CellGlobalId;

/// Renders a decoded record in the requested format.
///
/// Text output is a single line; JSON and YAML carry the detected MNC
/// length alongside the four numeric fields.
///
/// # Example
/// ```
/// use cellid_common::{output::render, CellGlobalId, OutputFormat};
///
/// let cgi = CellGlobalId::decode([0x21, 0x63, 0x54, 0x04, 0x01, 0x00, 0xFF]);
/// assert_eq!(
///     render(&cgi, OutputFormat::Text).unwrap(),
///     "MCC: 123, MNC: 546, LAC: 1025, Cell-ID: 255"
/// );
/// ```
pub fn render(cgi: &CellGlobalId, format: OutputFormat) -> Result<String, Error> {
    match format {
        OutputFormat::Text => Ok(cgi.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(cgi)?),
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(cgi)?;
            Ok(yaml.trim_end().to_string())
        }
    }
}
