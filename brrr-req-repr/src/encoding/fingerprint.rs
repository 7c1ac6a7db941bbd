//! Position-insensitive structural fingerprints using xxh3
//!
//! A fragment is serialized to a JSON value, every `range` field is
//! overwritten with the synthetic range, and the rendered text is hashed.
//! Struct fields serialize in declaration order, so the text is stable
//! across runs and platforms.

use serde::Serialize;
use serde_json::Value;
use xxhash_rust::xxh3::xxh3_64;

use crate::error::ReprResult;
use crate::expr::Range;

/// Fingerprints are reduced into `0..FINGERPRINT_MODULUS`.
pub const FINGERPRINT_MODULUS: u64 = 1_000_000;

/// Field name carrying source positions on every located node.
const RANGE_FIELD: &str = "range";

/// Render a fragment with all source positions replaced by
/// [`Range::SYNTHETIC`].
pub fn canonical_form<T: Serialize + ?Sized>(fragment: &T) -> ReprResult<String> {
    let placeholder = serde_json::to_value(Range::SYNTHETIC)?;
    let mut value = serde_json::to_value(fragment)?;
    erase_ranges(&mut value, &placeholder);
    Ok(value.to_string())
}

/// Structural fingerprint of a fragment.
///
/// Equal for fragments differing only in source positions. Distinct
/// fragments collide with probability about 1 in [`FINGERPRINT_MODULUS`].
pub fn fingerprint<T: Serialize + ?Sized>(fragment: &T) -> ReprResult<u64> {
    let canonical = canonical_form(fragment)?;
    Ok(xxh3_64(canonical.as_bytes()) % FINGERPRINT_MODULUS)
}

fn erase_ranges(value: &mut Value, placeholder: &Value) {
    match value {
        Value::Object(fields) => {
            for (key, field) in fields.iter_mut() {
                if key == RANGE_FIELD {
                    *field = placeholder.clone();
                } else {
                    erase_ranges(field, placeholder);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                erase_ranges(item, placeholder);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }
}
