use crate::utils::error::{MapsError, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

pub const JSON_EXT: &str = ".json";
pub const MIN_JSON_EXT: &str = ".min.json";

const JSON_INDENT: &[u8] = b"    ";

/// Serializes the human-readable form: 4-space indentation, UTF-8 text with
/// non-ASCII characters left unescaped.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    into_fixed_string(buf)
}

/// Serializes the minified form: no whitespace between tokens.
pub fn to_min_json<T: Serialize>(value: &T) -> Result<String> {
    let text = serde_json::to_string(value)?;
    Ok(unescape(&text))
}

fn into_fixed_string(buf: Vec<u8>) -> Result<String> {
    let text = String::from_utf8(buf).map_err(|e| MapsError::ProcessingError {
        message: format!("serializer produced invalid UTF-8: {e}"),
    })?;
    Ok(unescape(&text))
}

/// Collapses double-escaped `\u` sequences left behind by sources that ship
/// already-escaped text, so the output carries single-escaped sequences.
fn unescape(text: &str) -> String {
    text.replace("\\\\u", "\\u")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_uses_four_space_indent() {
        let value = json!({"id": 5});
        let pretty = to_pretty_json(&value).unwrap();
        assert_eq!(pretty, "{\n    \"id\": 5\n}");
    }

    #[test]
    fn test_min_has_no_inter_token_whitespace() {
        let value = json!({"id": 5, "name": "kz_example"});
        let min = to_min_json(&value).unwrap();
        assert_eq!(min, r#"{"id":5,"name":"kz_example"}"#);
    }

    #[test]
    fn test_non_ascii_stays_unescaped() {
        let value = json!({"name": "kz_багульник"});
        let min = to_min_json(&value).unwrap();
        assert!(min.contains("kz_багульник"));
    }

    #[test]
    fn test_double_escaped_unicode_is_collapsed() {
        // The raw value holds a literal `\u0421` sequence; plain
        // serialization would escape the backslash.
        let value = json!({"name": "kz_\\u0421"});

        let min = to_min_json(&value).unwrap();
        assert_eq!(min, r#"{"name":"kz_\u0421"}"#);

        // The fixed-up file text now parses back to the actual character.
        let reparsed: serde_json::Value = serde_json::from_str(&min).unwrap();
        assert_eq!(reparsed["name"], json!("kz_С"));

        let pretty = to_pretty_json(&value).unwrap();
        assert!(pretty.contains(r#""kz_\u0421""#));
    }

    #[test]
    fn test_pretty_and_min_parse_to_equal_values() {
        let value = json!([
            {"id": 5, "name": "kz_example", "mappers": [{"name": "Alice", "id64": null}]}
        ]);

        let pretty: serde_json::Value =
            serde_json::from_str(&to_pretty_json(&value).unwrap()).unwrap();
        let min: serde_json::Value = serde_json::from_str(&to_min_json(&value).unwrap()).unwrap();

        assert_eq!(pretty, min);
    }
}
