use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::error::{MapsError, Result};

/// One remote collection endpoint, paired with the directory label its
/// dumps are written under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub endpoint: &'static str,
    pub label: &'static str,
}

/// One map's metadata as delivered by the remote source.
///
/// Known keys are named fields; everything else the source sends passes
/// through untouched in `extra`. `id` and `name` are required, so malformed
/// records are rejected when the response is parsed rather than surfacing
/// later as a missing key during the per-record dumps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapRecord {
    /// Integer-like: the source delivers either a number or a digit string.
    pub id: Value,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workshop_url: Option<String>,
    /// Delimited mapper names, consumed by normalization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapper_name: Option<String>,
    /// Delimited mapper steamid64s, consumed by normalization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapper_steamid64: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mappers: Option<Vec<MapperCredit>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One credited mapper. Either field may be unknown independently; unknown
/// values serialize as explicit `null`, never as `""` or `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperCredit {
    pub name: Option<String>,
    pub id64: Option<u64>,
}

impl MapperCredit {
    /// Builds a credit from raw delimited-list substrings. A substring is
    /// meaningful only if non-empty and not the literal text `"null"`.
    pub fn from_raw(name: Option<&str>, id64: Option<&str>) -> Result<Self> {
        let id64 = match meaningful(id64) {
            Some(raw) => Some(raw.parse::<u64>().map_err(|e| MapsError::ProcessingError {
                message: format!("invalid mapper steamid64 '{raw}': {e}"),
            })?),
            None => None,
        };

        Ok(Self {
            name: meaningful(name).map(str::to_owned),
            id64,
        })
    }
}

fn meaningful(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty() && *s != "null")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_from_raw_values() {
        let credit = MapperCredit::from_raw(Some("Alice"), Some("76561198000000001")).unwrap();
        assert_eq!(credit.name.as_deref(), Some("Alice"));
        assert_eq!(credit.id64, Some(76561198000000001));
    }

    #[test]
    fn test_credit_null_and_empty_become_absent() {
        let credit = MapperCredit::from_raw(Some("null"), Some("")).unwrap();
        assert_eq!(credit, MapperCredit { name: None, id64: None });

        let credit = MapperCredit::from_raw(None, Some("null")).unwrap();
        assert_eq!(credit, MapperCredit { name: None, id64: None });
    }

    #[test]
    fn test_credit_bad_id64_is_an_error() {
        assert!(MapperCredit::from_raw(Some("Bob"), Some("not-a-number")).is_err());
    }

    #[test]
    fn test_credit_serializes_explicit_nulls() {
        let credit = MapperCredit { name: Some("Bob".to_string()), id64: None };
        let json = serde_json::to_string(&credit).unwrap();
        assert_eq!(json, r#"{"name":"Bob","id64":null}"#);
    }

    #[test]
    fn test_record_requires_id_and_name() {
        let missing_name = serde_json::json!({"id": 1});
        assert!(serde_json::from_value::<MapRecord>(missing_name).is_err());

        let missing_id = serde_json::json!({"name": "kz_example"});
        assert!(serde_json::from_value::<MapRecord>(missing_id).is_err());
    }

    #[test]
    fn test_record_passes_unknown_keys_through() {
        let raw = serde_json::json!({
            "id": 5,
            "name": "kz_example",
            "tier": 3,
            "validated": true
        });
        let record: MapRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.extra.get("tier"), Some(&serde_json::json!(3)));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back.get("validated"), Some(&serde_json::json!(true)));
    }
}
