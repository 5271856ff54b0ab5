//! Handle the translation of individual bool query clauses.

use serde_json::{Map, Value};

use query_engine_proto::proto;
use query_engine_proto::proto::ast::Expression;

use super::values;
use crate::translation::error::Error;
use crate::translation::helpers::split_into_calls_of_two;

/// Translate one query node.
///
/// Scalars become literals so that comparison operands can reuse this entry
/// point. Lists are only valid inside the clauses that expect them, and an
/// object carrying a `bool` key is unwrapped before any clause handling.
pub fn handle(node: &Value) -> Result<Expression, Error> {
    match node {
        Value::Array(_) => Err(Error::UnsupportedQueryShape(
            "list not expected here".to_string(),
        )),
        Value::Object(object) => match object.get("bool") {
            Some(inner) => handle(inner),
            None => handle_clauses(object),
        },
        scalar => Ok(Expression::Literal(values::translate_json_scalar(scalar)?)),
    }
}

/// Accumulate fragments from every recognized clause on one object, then
/// combine them into a single conjunction.
fn handle_clauses(object: &Map<String, Value>) -> Result<Expression, Error> {
    let mut fragments = Vec::new();

    if let Some(field) = object.get("field") {
        fragments.push(handle_field(field)?);
    }

    if let Some(should) = object.get("should") {
        let inner = handle_list("should", should)?;
        if let Some(combined) = split_into_calls_of_two("or", inner) {
            fragments.push(combined);
        }
    }

    if let Some(must_not) = object.get("must_not") {
        let inner = handle_list("must_not", must_not)?;
        if let Some(combined) = split_into_calls_of_two("and", inner) {
            fragments.push(proto::helpers::unary_call("invert", combined));
        }
    }

    if let Some(filter) = object.get("filter") {
        fragments.extend(handle_list("filter", filter)?);
    }

    if let Some(must) = object.get("must") {
        fragments.extend(handle_list("must", must)?);
    }

    if let Some(range) = object.get("range") {
        fragments.push(handle_range(range)?);
    }

    if let Some(exists) = object.get("exists") {
        fragments.push(proto::helpers::unary_call("is_valid", handle(exists)?));
    }

    if let Some(terms) = object.get("terms") {
        fragments.extend(handle_terms("terms", terms)?);
    }

    if let Some(term) = object.get("term") {
        fragments.extend(handle_terms("term", term)?);
    }

    if let Some(matches) = object.get("match") {
        fragments.extend(handle_match(matches)?);
    }

    // Keys outside the recognized clause set are deliberately skipped.

    split_into_calls_of_two("and", fragments).ok_or(Error::EmptyClauseSet)
}

/// A `field` clause names a column directly.
fn handle_field(field: &Value) -> Result<Expression, Error> {
    match field {
        Value::String(name) => Ok(proto::helpers::column(name)),
        other => Err(Error::UnsupportedQueryShape(format!(
            "field name must be a string, got {other}"
        ))),
    }
}

/// Handle each element of a clause whose value is a list of sub-queries.
fn handle_list(clause: &str, list: &Value) -> Result<Vec<Expression>, Error> {
    let Value::Array(items) = list else {
        return Err(Error::InvalidArgumentShape(clause.to_string()));
    };
    items.iter().map(handle).collect()
}

/// Map a `range` operator key to the comparison function it stands for.
fn range_function(operator: &str) -> Option<&'static str> {
    match operator {
        "lt" => Some("less"),
        "lte" => Some("less_equal"),
        "gt" => Some("greater"),
        "gte" => Some("greater_equal"),
        _ => None,
    }
}

/// A `range` clause holds `field -> { operator: threshold }` pairs. Each
/// pair becomes a two-argument comparison call, collected in document order
/// and combined into a conjunction.
fn handle_range(range: &Value) -> Result<Expression, Error> {
    let Value::Object(fields) = range else {
        return Err(Error::InvalidOptionsShape("range".to_string()));
    };

    let mut comparisons = Vec::new();
    for (field, thresholds) in fields {
        let Value::Object(thresholds) = thresholds else {
            return Err(Error::InvalidOptionsShape("range".to_string()));
        };
        for (operator, threshold) in thresholds {
            let Some(function_name) = range_function(operator) else {
                return Err(Error::UnsupportedOperator(format!(
                    "range operator '{operator}'"
                )));
            };
            comparisons.push(proto::helpers::call(
                function_name,
                vec![proto::helpers::column(field), handle(threshold)?],
            ));
        }
    }

    split_into_calls_of_two("and", comparisons).ok_or(Error::EmptyClauseSet)
}

/// `terms` and `term` clauses both check a column against a single value
/// through the set-membership function.
fn handle_terms(clause: &str, terms: &Value) -> Result<Vec<Expression>, Error> {
    let Value::Object(fields) = terms else {
        return Err(Error::InvalidOptionsShape(clause.to_string()));
    };

    let mut fragments = Vec::new();
    for (field, value) in fields {
        fragments.push(proto::helpers::call_with_options(
            "string_list_contains_any",
            vec![proto::helpers::column(field)],
            "set_lookup_options",
            vec![("values".to_string(), option_value(clause, field, value)?)],
        ));
    }
    Ok(fragments)
}

/// A `match` clause turns each pair into a substring regex test.
fn handle_match(matches: &Value) -> Result<Vec<Expression>, Error> {
    let Value::Object(fields) = matches else {
        return Err(Error::InvalidOptionsShape("match".to_string()));
    };

    let mut fragments = Vec::new();
    for (field, value) in fields {
        // The field name is handled as a scalar, so it reaches the service
        // as a string literal rather than a column reference.
        let argument = handle(&Value::String(field.clone()))?;
        let pattern = format!(".+{}.+", option_value("match", field, value)?);
        fragments.push(proto::helpers::call_with_options(
            "match_substring_regex",
            vec![argument],
            "match_substring_options",
            vec![("pattern".to_string(), pattern)],
        ));
    }
    Ok(fragments)
}

/// The string form of a scalar clause value. List and object values are
/// refused rather than flattened.
fn option_value(clause: &str, field: &str, value: &Value) -> Result<String, Error> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(Error::UnsupportedOperator(format!(
            "non-scalar value in '{clause}' for field '{field}'"
        ))),
    }
}
