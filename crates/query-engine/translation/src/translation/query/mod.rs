//! Translate the query part of a search document.

pub mod filtering;
pub mod values;

use query_engine_proto::proto::ast::Expression;

use crate::translation::error::Error;

/// Translate a parsed bool query document into a single filter expression.
///
/// The top level must be an object with exactly one key, `bool`. Anything
/// else is rejected, naming the keys that were found instead.
pub fn translate(query: &serde_json::Value) -> Result<Expression, Error> {
    let serde_json::Value::Object(object) = query else {
        return Err(Error::UnsupportedQueryShape(
            "expected a top-level object".to_string(),
        ));
    };

    match object.get("bool") {
        Some(bool_query) if object.len() == 1 => filtering::handle(bool_query),
        _ => {
            let invalid_keys = object
                .keys()
                .filter(|key| *key != "bool")
                .cloned()
                .collect::<Vec<String>>()
                .join(", ");
            Err(Error::UnsupportedQueryShape(format!(
                "invalid top-level keys: {invalid_keys}"
            )))
        }
    }
}
