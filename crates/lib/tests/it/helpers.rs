//! Shared fixtures and factories for the integration test suite.

use burrow::Document;

/// JSON text of the nested fixture used across the suite.
pub const SAMPLE_JSON: &str =
    r#"{"foo":"bar","baz":{"quz":["qux"],"quuz":{"quux":"fred"}},"corge":"thud","null":null}"#;

/// Decodes [`SAMPLE_JSON`] into a fresh document.
///
/// Shape:
/// - `foo`: `"bar"`
/// - `baz.quz`: `["qux"]`
/// - `baz.quuz.quux`: `"fred"`
/// - `corge`: `"thud"`
/// - `null`: declared null
pub fn sample() -> Document {
    Document::from_json(SAMPLE_JSON).expect("fixture JSON decodes")
}
