//! Decode scenario integration tests
//!
//! Tests the path a front-end takes: hex text, length check, decode, render.

use cellid_common::{render, CellGlobalId, Error, OctetString, OutputFormat};
use integration_tests::{init_test_logging, known_vectors};

fn decode_hex(hex: &str) -> Result<CellGlobalId, Error> {
    let raw = OctetString::from_hex(hex)?;
    CellGlobalId::from_slice(raw.data())
}

/// Every known vector decodes to its expected fields and text
#[test]
fn test_known_vectors() {
    init_test_logging();

    for vector in known_vectors() {
        let cgi = decode_hex(vector.hex)
            .unwrap_or_else(|e| panic!("{}: unexpected error: {e}", vector.name));

        assert_eq!(cgi.mcc(), vector.mcc, "{}", vector.name);
        assert_eq!(cgi.mnc(), vector.mnc, "{}", vector.name);
        assert_eq!(cgi.plmn.mnc_length, vector.mnc_length, "{}", vector.name);
        assert_eq!(cgi.lac, vector.lac, "{}", vector.name);
        assert_eq!(cgi.cell_id, vector.cell_id, "{}", vector.name);
        assert_eq!(
            render(&cgi, OutputFormat::Text).unwrap(),
            vector.text,
            "{}",
            vector.name
        );
    }
}

/// A 5-byte input is rejected with the required and received counts
#[test]
fn test_short_input_rejected_before_decode() {
    init_test_logging();

    let err = decode_hex("72 F4 10 00 01").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("must contain 7 bytes"), "{message}");
    assert!(message.contains("Got only 5"), "{message}");
    assert!(err.is_input_error());
}

/// Empty input reports zero octets received
#[test]
fn test_empty_input_rejected() {
    let err = decode_hex("").unwrap_err();
    assert!(matches!(err, Error::TooShort { actual: 0, .. }));
}

/// Non-hex input never reaches the length check
#[test]
fn test_malformed_hex_rejected() {
    for bad in ["72F4100001000", "72F41000010002XY", "0x72F4100001000"] {
        let err = decode_hex(bad).unwrap_err();
        assert!(matches!(err, Error::InvalidHex(_)), "{bad}: {err}");
    }
}

/// JSON and YAML renderings agree with the text rendering
#[test]
fn test_structured_renderings() {
    let cgi = decode_hex("21 63 54 04 01 00 FF").unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&render(&cgi, OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(json["mcc"], 123);
    assert_eq!(json["mnc"], 546);
    assert_eq!(json["mnc-length"], "three-digit");
    assert_eq!(json["lac"], 1025);
    assert_eq!(json["cell-id"], 255);

    let yaml: serde_yaml::Value =
        serde_yaml::from_str(&render(&cgi, OutputFormat::Yaml).unwrap()).unwrap();
    assert_eq!(yaml["mnc"].as_u64(), Some(546));
    assert_eq!(yaml["cell-id"].as_u64(), Some(255));
}

/// Decoding is safe to run from several threads at once
#[test]
fn test_concurrent_decode() {
    let raw = [0x21, 0x63, 0x54, 0x04, 0x01, 0x00, 0xFF];
    let expected = CellGlobalId::decode(raw);

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || CellGlobalId::decode(raw)))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
