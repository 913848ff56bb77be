//! Normalization of loosely shaped part records.
//!
//! Part records from other tools name the same field several ways. Each
//! field has a fixed priority list; the first key present wins.

use crate::error::{CabinetError, Result};
use crate::model::{Dimensions, Vec3};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A part record in canonical form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPart {
    pub name: Option<String>,
    pub part_type: Option<String>,
    pub dimensions: Dimensions,
    pub position: Vec3,
    pub quantity: u32,
    pub material: Option<String>,
}

fn unrecognized(message: impl Into<String>) -> CabinetError {
    CabinetError::UnrecognizedShape {
        message: message.into(),
    }
}

/// Look up `field` in `nested` first, then each top-level alias in order.
fn lookup<'a>(
    record: &'a Map<String, Value>,
    nested: Option<(&str, &str)>,
    aliases: &[&str],
) -> Option<(String, &'a Value)> {
    if let Some((object, field)) = nested {
        if let Some(value) = record.get(object).and_then(|o| o.get(field)) {
            return Some((format!("{object}.{field}"), value));
        }
    }
    aliases
        .iter()
        .find_map(|alias| record.get(*alias).map(|v| (alias.to_string(), v)))
}

fn as_number(path: &str, value: &Value) -> Result<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number
        .filter(|n| n.is_finite())
        .ok_or_else(|| unrecognized(format!("'{path}' is not a number: {value}")))
}

fn required_number(
    record: &Map<String, Value>,
    nested: (&str, &str),
    aliases: &[&str],
) -> Result<f64> {
    let (path, value) = lookup(record, Some(nested), aliases)
        .ok_or_else(|| unrecognized(format!("missing dimension '{}'", aliases[0])))?;
    as_number(&path, value)
}

fn optional_number(
    record: &Map<String, Value>,
    nested: (&str, &str),
    aliases: &[&str],
) -> Result<f64> {
    match lookup(record, Some(nested), aliases) {
        Some((path, value)) => as_number(&path, value),
        None => Ok(0.0),
    }
}

fn optional_string(record: &Map<String, Value>, aliases: &[&str]) -> Result<Option<String>> {
    match lookup(record, None, aliases) {
        None | Some((_, Value::Null)) => Ok(None),
        Some((_, Value::String(s))) => Ok(Some(s.clone())),
        Some((path, other)) => Err(unrecognized(format!("'{path}' is not a string: {other}"))),
    }
}

/// Normalize a part record.
///
/// Dimensions are required: `dimensions.w` > `width` > `w` (likewise for h
/// and d). Position uses `position.x` > `x` and defaults to the origin.
/// `quantity` > `qty`, default 1.
pub fn normalize_part(record: &Value) -> Result<NormalizedPart> {
    let record = record
        .as_object()
        .ok_or_else(|| unrecognized(format!("expected an object, got {record}")))?;

    let dimensions = Dimensions::new(
        required_number(record, ("dimensions", "w"), &["width", "w"])?,
        required_number(record, ("dimensions", "h"), &["height", "h"])?,
        required_number(record, ("dimensions", "d"), &["depth", "d"])?,
    );
    let position = Vec3::new(
        optional_number(record, ("position", "x"), &["x"])?,
        optional_number(record, ("position", "y"), &["y"])?,
        optional_number(record, ("position", "z"), &["z"])?,
    );

    let quantity = match lookup(record, None, &["quantity", "qty"]) {
        None => 1,
        Some((path, value)) => {
            let q = as_number(&path, value)?;
            if q < 0.0 || q.fract() != 0.0 || q > u32::MAX as f64 {
                return Err(unrecognized(format!("'{path}' is not a whole count: {value}")));
            }
            q as u32
        }
    };

    Ok(NormalizedPart {
        name: optional_string(record, &["part_name", "name"])?,
        part_type: optional_string(record, &["part_type", "type"])?,
        dimensions,
        position,
        quantity,
        material: optional_string(record, &["material"])?,
    })
}
