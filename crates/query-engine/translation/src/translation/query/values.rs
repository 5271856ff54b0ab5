//! Handle the translation of literal values.

use query_engine_proto::proto::ast::Literal;

use crate::translation::error::Error;

/// Largest absolute value that still renders as a 32-bit literal.
const INT32_BOUND: u64 = 0xFFFF_FFFF;

/// Convert a scalar JSON value into a typed literal.
///
/// Integers whose absolute value fits in 32 bits become 32-bit literals and
/// larger ones 64-bit; non-integral numbers become doubles.
pub fn translate_json_scalar(value: &serde_json::Value) -> Result<Literal, Error> {
    match value {
        serde_json::Value::Bool(b) => Ok(Literal::Bool(*b)),
        serde_json::Value::String(s) => Ok(Literal::String(s.clone())),
        serde_json::Value::Number(number) => match number.as_i64() {
            Some(int) if int.unsigned_abs() <= INT32_BOUND => Ok(Literal::Int32(int)),
            Some(int) => Ok(Literal::Int64(int)),
            None => number.as_f64().map(Literal::Double).ok_or_else(|| {
                Error::UnsupportedQueryShape(format!("number out of range: {number}"))
            }),
        },
        other => Err(Error::UnsupportedQueryShape(format!(
            "expected a scalar value, got {other}"
        ))),
    }
}
