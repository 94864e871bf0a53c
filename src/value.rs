//! JavaScript runtime value model.
//!
//! An enum runtime object can hold, and a membership query can present, any
//! JavaScript value. [`Value`] models that set with the equality semantics the
//! containers need: SameValueZero, the comparison `Set` and `Map` use at
//! runtime (`-0` equals `+0`, `NaN` equals `NaN`, no cross-type coercion).

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A JavaScript runtime value as seen by the enum containers.
///
/// `Symbol` and `Object` are opaque placeholders: neither can ever be an enum
/// member, so every membership query on them answers `false` and their
/// identity never becomes observable through this crate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Value {
    Number(f64),
    String(String),
    Bool(bool),
    BigInt(i128),
    Symbol,
    Object,
    Null,
    Undefined,
}

/// Canonical bit pattern for SameValueZero comparisons: `-0.0` folds into
/// `+0.0` and every NaN payload folds into the canonical quiet NaN.
pub(crate) fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Symbol, Value::Symbol)
            | (Value::Object, Value::Object)
            | (Value::Null, Value::Null)
            | (Value::Undefined, Value::Undefined) => true,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Number(n) => canonical_bits(*n).hash(state),
            Value::String(s) => s.hash(state),
            Value::Bool(b) => b.hash(state),
            Value::BigInt(n) => n.hash(state),
            Value::Symbol | Value::Object | Value::Null | Value::Undefined => {}
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&js_number_string(*n)),
            Value::String(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::BigInt(n) => write!(f, "{n}"),
            Value::Symbol => f.write_str("Symbol()"),
            Value::Object => f.write_str("[object Object]"),
            Value::Null => f.write_str("null"),
            Value::Undefined => f.write_str("undefined"),
        }
    }
}

/// Converts a number to the string `Number.prototype.toString()` produces.
///
/// Reverse-lookup keys in an [`EnumObject`](crate::EnumObject) are generated
/// with this formatting, matching what the TypeScript compiler emits for
/// numeric members.
pub fn js_number_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        };
    }

    let abs = value.abs();
    if !(1e-6..1e21).contains(&abs) {
        // JavaScript switches to exponential notation outside this range and
        // always prints an explicit exponent sign.
        let mut formatted = format!("{value:e}");
        if let Some(split) = formatted.find('e') {
            let (mantissa, exp) = formatted.split_at(split);
            let exp_digits = &exp[1..];
            let (sign, digits) = if let Some(rest) = exp_digits.strip_prefix('-') {
                ('-', rest)
            } else {
                ('+', exp_digits)
            };
            let trimmed = digits.trim_start_matches('0');
            let digits = if trimmed.is_empty() { "0" } else { trimmed };
            formatted = format!("{mantissa}e{sign}{digits}");
        }
        return formatted;
    }

    value.to_string()
}
