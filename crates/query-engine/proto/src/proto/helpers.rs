//! Helpers for building proto::ast types in certain shapes and patterns.

use indexmap::IndexMap;

use super::ast::*;

/// A bare column reference.
pub fn column(name: &str) -> Expression {
    Expression::Column(ColumnName(name.to_string()))
}

/// A call without options.
pub fn call(function_name: &str, arguments: Vec<Expression>) -> Expression {
    Expression::Call(Call {
        function_name: function_name.to_string(),
        arguments,
        options: IndexMap::new(),
    })
}

/// Wrap an expression in a single-argument call.
pub fn unary_call(function_name: &str, argument: Expression) -> Expression {
    call(function_name, vec![argument])
}

/// A call carrying one named option block.
pub fn call_with_options(
    function_name: &str,
    arguments: Vec<Expression>,
    block: &str,
    entries: Vec<(String, String)>,
) -> Expression {
    let mut options = IndexMap::new();
    options.insert(block.to_string(), entries.into_iter().collect());
    Expression::Call(Call {
        function_name: function_name.to_string(),
        arguments,
        options,
    })
}
