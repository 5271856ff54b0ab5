//! Helpers for composing filter expression fragments.

use query_engine_proto::proto;
use query_engine_proto::proto::ast::Expression;

/// Combine fragments into nested two-argument calls of `function_name`.
///
/// A single fragment is returned unchanged. Otherwise the two rightmost
/// fragments form the innermost call, and each earlier fragment wraps the
/// accumulated call as the first argument, so `[a, b, c]` becomes
/// `f(a, f(b, c))`. Argument order matters to the execution service for
/// non-commutative functions.
pub fn split_into_calls_of_two(
    function_name: &str,
    mut fragments: Vec<Expression>,
) -> Option<Expression> {
    let last = fragments.pop()?;
    let Some(second_to_last) = fragments.pop() else {
        return Some(last);
    };

    let mut folded = proto::helpers::call(function_name, vec![second_to_last, last]);
    while let Some(fragment) = fragments.pop() {
        folded = proto::helpers::call(function_name, vec![fragment, folded]);
    }
    Some(folded)
}
