//! # Assertions / 断言
//!
//! Assertion primitives for test bodies. Each evaluates a predicate and, when
//! it does not hold, returns [`Signal::Assertion`] carrying the expected value,
//! the actual value and a message. Values are [`serde_json::Value`]s so the
//! same data flows unchanged into the JSON and console reports.
//!
//! `assert_equals` compares loosely (`1` equals `"1"`), `assert_same` compares
//! strictly (type and value must both match).
//!
//! 测试主体使用的断言原语。`assert_equals` 为宽松比较（`1` 等于 `"1"`），
//! `assert_same` 为严格比较（类型和值都必须一致）。

use serde_json::Value;
use std::any::{Any, type_name};
use std::cmp::Ordering;

use crate::core::signal::{AssertionFailed, Signal, TestFlow};

/// The value kinds `assert_is_type` understands.
/// `assert_is_type` 支持的值类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    String,
    Int,
    Float,
    Bool,
    Array,
    Object,
    Null,
}

impl ValueType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Bool,
            Value::Number(n) if n.is_f64() => ValueType::Float,
            Value::Number(_) => ValueType::Int,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Bool => "bool",
            ValueType::Array => "array",
            ValueType::Object => "object",
            ValueType::Null => "null",
        }
    }
}

fn failed(expected: impl Into<Value>, actual: impl Into<Value>, message: &str) -> TestFlow {
    Err(Signal::Assertion(AssertionFailed::new(
        expected, actual, message,
    )))
}

fn or_default<'a>(message: &'a str, default: &'a str) -> &'a str {
    if message.is_empty() { default } else { message }
}

/// Parses a string the way a numeric comparison would read it: surrounding
/// whitespace allowed, digits/sign/decimal point/exponent only.
pub fn numeric_value(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty()
        || !trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => numeric_value(s),
        _ => None,
    }
}

/// Truthiness: `null`, `false`, `0`, `""`, `"0"`, `[]` and `{}` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Loose (coercive) equality.
///
/// 宽松（强制转换）相等比较。
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), other) | (other, Value::Bool(x)) => *x == is_truthy(other),
        (Value::Null, Value::String(s)) | (Value::String(s), Value::Null) => s.is_empty(),
        (Value::Null, other) | (other, Value::Null) => !is_truthy(other),
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            match numeric_value(s) {
                Some(parsed) => n.as_f64() == Some(parsed),
                None => n.to_string() == *s,
            }
        }
        (Value::String(x), Value::String(y)) => match (numeric_value(x), numeric_value(y)) {
            (Some(nx), Some(ny)) => nx == ny,
            _ => x == y,
        },
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| loose_eq(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| loose_eq(x, y)))
        }
        _ => false,
    }
}

/// Strict equality: same JSON type and same value. `1` and `1.0` differ.
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    a == b
}

/// Orders two values numerically when both read as numbers, otherwise
/// lexically when both are strings.
pub fn loose_cmp(a: &Value, b: &Value) -> Option<Ordering> {
    match (as_number(a), as_number(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y),
        _ => match (a, b) {
            (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
            _ => None,
        },
    }
}

pub fn assert_true(condition: bool, message: &str) -> TestFlow {
    if condition {
        return Ok(());
    }
    failed(
        true,
        false,
        or_default(message, "Failed asserting that condition is true."),
    )
}

pub fn assert_false(condition: bool, message: &str) -> TestFlow {
    if !condition {
        return Ok(());
    }
    failed(
        false,
        true,
        or_default(message, "Failed asserting that condition is false."),
    )
}

/// Passes when `expected` and `actual` are loosely equal.
pub fn assert_equals(
    expected: impl Into<Value>,
    actual: impl Into<Value>,
    message: &str,
) -> TestFlow {
    let (expected, actual) = (expected.into(), actual.into());
    if loose_eq(&expected, &actual) {
        return Ok(());
    }
    failed(expected, actual, message)
}

pub fn assert_not_equals(
    expected: impl Into<Value>,
    actual: impl Into<Value>,
    message: &str,
) -> TestFlow {
    let (expected, actual) = (expected.into(), actual.into());
    if !loose_eq(&expected, &actual) {
        return Ok(());
    }
    let default = format!("Failed asserting that [{actual}] is not equal to [{expected}].");
    failed(expected, actual, or_default(message, &default))
}

/// Passes when `expected` and `actual` have the same type and value.
pub fn assert_same(
    expected: impl Into<Value>,
    actual: impl Into<Value>,
    message: &str,
) -> TestFlow {
    let (expected, actual) = (expected.into(), actual.into());
    if strict_eq(&expected, &actual) {
        return Ok(());
    }
    failed(expected, actual, message)
}

pub fn assert_not_same(
    expected: impl Into<Value>,
    actual: impl Into<Value>,
    message: &str,
) -> TestFlow {
    let (expected, actual) = (expected.into(), actual.into());
    if !strict_eq(&expected, &actual) {
        return Ok(());
    }
    let default = format!("Failed asserting that [{actual}] is not identical to [{expected}].");
    failed(expected, actual, or_default(message, &default))
}

/// Fails when `value` is not null.
pub fn assert_null(value: impl Into<Value>, message: &str) -> TestFlow {
    let value = value.into();
    if value.is_null() {
        return Ok(());
    }
    failed(
        Value::Null,
        value,
        or_default(message, "Failed asserting that value is null."),
    )
}

/// Fails when `value` is null.
pub fn assert_not_null(value: impl Into<Value>, message: &str) -> TestFlow {
    let value = value.into();
    if !value.is_null() {
        return Ok(());
    }
    failed(
        "not null",
        value,
        or_default(message, "Failed asserting that value is not null."),
    )
}

pub fn assert_empty(value: impl Into<Value>, message: &str) -> TestFlow {
    let value = value.into();
    if !is_truthy(&value) {
        return Ok(());
    }
    failed(
        "empty",
        value,
        or_default(message, "Failed asserting that value is empty."),
    )
}

pub fn assert_not_empty(value: impl Into<Value>, message: &str) -> TestFlow {
    let value = value.into();
    if is_truthy(&value) {
        return Ok(());
    }
    failed(
        "not empty",
        value,
        or_default(message, "Failed asserting that value is not empty."),
    )
}

pub fn assert_string_contains(needle: &str, haystack: &str, message: &str) -> TestFlow {
    if haystack.contains(needle) {
        return Ok(());
    }
    let default = format!("Failed asserting that string contains [{needle}] in [{haystack}].");
    failed(needle, haystack, or_default(message, &default))
}

pub fn assert_string_starts_with(prefix: &str, string: &str, message: &str) -> TestFlow {
    if string.starts_with(prefix) {
        return Ok(());
    }
    let default = format!("Failed asserting that string starts with [{prefix}] in [{string}].");
    failed(prefix, string, or_default(message, &default))
}

pub fn assert_string_ends_with(suffix: &str, string: &str, message: &str) -> TestFlow {
    if string.ends_with(suffix) {
        return Ok(());
    }
    let default = format!("Failed asserting that string ends with [{suffix}] in [{string}].");
    failed(suffix, string, or_default(message, &default))
}

/// Passes when the JSON kind of `value` is `ty`.
pub fn assert_is_type(ty: ValueType, value: impl Into<Value>, message: &str) -> TestFlow {
    let value = value.into();
    let actual = ValueType::of(&value);
    if actual == ty {
        return Ok(());
    }
    let default = format!("Failed asserting that value is of type [{}].", ty.as_str());
    failed(ty.as_str(), actual.as_str(), or_default(message, &default))
}

pub fn assert_is_string(value: impl Into<Value>, message: &str) -> TestFlow {
    assert_is_type(ValueType::String, value, message)
}

pub fn assert_is_int(value: impl Into<Value>, message: &str) -> TestFlow {
    assert_is_type(ValueType::Int, value, message)
}

pub fn assert_is_float(value: impl Into<Value>, message: &str) -> TestFlow {
    assert_is_type(ValueType::Float, value, message)
}

pub fn assert_is_bool(value: impl Into<Value>, message: &str) -> TestFlow {
    assert_is_type(ValueType::Bool, value, message)
}

pub fn assert_is_array(value: impl Into<Value>, message: &str) -> TestFlow {
    assert_is_type(ValueType::Array, value, message)
}

pub fn assert_is_object(value: impl Into<Value>, message: &str) -> TestFlow {
    assert_is_type(ValueType::Object, value, message)
}

/// Passes when the concrete type behind `value` is `T`.
pub fn assert_instance_of<T: Any>(value: &dyn Any, message: &str) -> TestFlow {
    if value.is::<T>() {
        return Ok(());
    }
    let expected = type_name::<T>();
    let default = format!("Failed asserting that value is an instance of [{expected}].");
    failed(expected, "other type", or_default(message, &default))
}

/// Objects are checked for a string key, arrays for an integer index.
pub fn assert_array_has_key(
    key: impl Into<Value>,
    array: impl Into<Value>,
    message: &str,
) -> TestFlow {
    let (key, array) = (key.into(), array.into());
    let present = match (&array, &key) {
        (Value::Object(map), Value::String(k)) => map.contains_key(k),
        (Value::Object(map), other) => map.contains_key(&other.to_string()),
        (Value::Array(items), k) => as_number(k)
            .filter(|index| index.fract() == 0.0 && *index >= 0.0)
            .is_some_and(|index| (index as usize) < items.len()),
        _ => false,
    };
    if present {
        return Ok(());
    }
    let default = format!("Failed asserting that array has the key [{key}].");
    failed(key, array, or_default(message, &default))
}

/// Counts the elements of an array or object; a number is taken as the count.
pub fn assert_count(expected: usize, value: impl Into<Value>, message: &str) -> TestFlow {
    let value = value.into();
    let count = match &value {
        Value::Array(items) => Value::from(items.len()),
        Value::Object(map) => Value::from(map.len()),
        other => other.clone(),
    };
    assert_same(expected, count, message)
}

/// Passes when `actual > expected`.
pub fn assert_greater_than(
    expected: impl Into<Value>,
    actual: impl Into<Value>,
    message: &str,
) -> TestFlow {
    let (expected, actual) = (expected.into(), actual.into());
    if loose_cmp(&actual, &expected) == Some(Ordering::Greater) {
        return Ok(());
    }
    let default = format!("Failed asserting that [{actual}] is greater than [{expected}].");
    failed(expected, actual, or_default(message, &default))
}

/// Passes when `actual < expected`.
pub fn assert_less_than(
    expected: impl Into<Value>,
    actual: impl Into<Value>,
    message: &str,
) -> TestFlow {
    let (expected, actual) = (expected.into(), actual.into());
    if loose_cmp(&actual, &expected) == Some(Ordering::Less) {
        return Ok(());
    }
    let default = format!("Failed asserting that [{actual}] is less than [{expected}].");
    failed(expected, actual, or_default(message, &default))
}
