use crate::domain::model::{MapRecord, MapperCredit};
use crate::utils::error::{MapsError, Result};
use serde_json::Value;

/// Separator used by the source between entries of a delimited credit list.
pub const CREDIT_SEPARATOR: &str = ", ";

/// Applies all sub-transforms to every record of a fetched collection.
pub fn normalize_maps(maps: &mut [MapRecord]) -> Result<()> {
    for map in maps.iter_mut() {
        fix_mappers(map)?;
        fix_urls(map);
        fix_types(map)?;
    }
    Ok(())
}

/// Rewrites the delimited `mapper_name`/`mapper_steamid64` strings into the
/// structured `mappers` list. Both raw fields are consumed regardless of
/// shape; the shorter list is padded so credits pair up positionally and a
/// missing name or id becomes an absent field rather than shortening the
/// list. If neither raw field was present, no `mappers` list is produced.
pub fn fix_mappers(map: &mut MapRecord) -> Result<()> {
    let raw_names = map.mapper_name.take();
    let raw_ids = map.mapper_steamid64.take();

    if raw_names.is_none() && raw_ids.is_none() {
        return Ok(());
    }

    let names: Vec<&str> = raw_names.as_deref().map(split_credits).unwrap_or_default();
    let ids: Vec<&str> = raw_ids.as_deref().map(split_credits).unwrap_or_default();

    let length = names.len().max(ids.len());
    let mut mappers = Vec::with_capacity(length);
    for i in 0..length {
        mappers.push(MapperCredit::from_raw(
            names.get(i).copied(),
            ids.get(i).copied(),
        )?);
    }

    map.mappers = Some(mappers);
    Ok(())
}

fn split_credits(raw: &str) -> Vec<&str> {
    if raw.is_empty() {
        Vec::new()
    } else {
        raw.split(CREDIT_SEPARATOR).collect()
    }
}

/// Upgrades the workshop URL scheme and drops the `/?` query quirk. Only the
/// first occurrence of each pattern is touched, which keeps the rewrite
/// idempotent. A record without a workshop URL is left alone.
pub fn fix_urls(map: &mut MapRecord) {
    if let Some(url) = map.workshop_url.as_mut() {
        *url = url.replacen("http://", "https://", 1).replacen("/?", "?", 1);
    }
}

/// Coerces the integer-typed fields delivered as digit strings. Falsy values
/// (`0`, `""`, `null`) are left untouched.
pub fn fix_types(map: &mut MapRecord) -> Result<()> {
    coerce_int("id", &mut map.id)?;
    if let Some(difficulty) = map.difficulty.as_mut() {
        coerce_int("difficulty", difficulty)?;
    }
    Ok(())
}

fn coerce_int(key: &str, val: &mut Value) -> Result<()> {
    if !is_truthy(val) {
        return Ok(());
    }

    let int = match &*val {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i,
            // Fractional input truncates toward zero.
            None => n.as_f64().ok_or_else(|| bad_int(key, val))? as i64,
        },
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| bad_int(key, val))?,
        Value::Bool(true) => 1,
        _ => return Err(bad_int(key, val)),
    };

    *val = Value::from(int);
    Ok(())
}

fn bad_int(key: &str, val: &Value) -> MapsError {
    MapsError::ProcessingError {
        message: format!("field '{key}' is not an integer: {val}"),
    }
}

fn is_truthy(val: &Value) -> bool {
    match val {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
