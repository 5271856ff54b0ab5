//! Type definitions of the filter expression AST representation.

use indexmap::IndexMap;

/// A complete request for the query execution service: which data
/// partitions to scan, which columns to return, which rows to keep, and a
/// row cap.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub arrow_urls: Vec<String>,
    pub projection_columns: Vec<String>,
    pub filter_expression: Expression,
    pub max_rows: u64,
}

/// A scalar filter expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Column(ColumnName),
    Literal(Literal),
    Call(Call),
}

/// A reference to a named column of the scanned data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnName(pub String);

/// A typed literal value. The variant doubles as the wire type tag, so a
/// value can never disagree with its declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    /// An integer whose absolute value fits in 32 bits. The full unsigned
    /// 32-bit range is representable, hence the wider storage.
    Int32(i64),
    Int64(i64),
    Double(f64),
    String(String),
}

/// A function call over zero or more argument expressions, with optional
/// keyed option blocks understood by the execution service.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub function_name: String,
    pub arguments: Vec<Expression>,
    pub options: CallOptions,
}

/// Option blocks attached to a call, keyed by block name. Insertion order
/// is preserved so rendering stays deterministic.
pub type CallOptions = IndexMap<String, IndexMap<String, String>>;

impl Literal {
    /// The wire field name carrying this literal's value.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Literal::Bool(_) => "bool_value",
            Literal::Int32(_) => "int32_value",
            Literal::Int64(_) => "int64_value",
            Literal::Double(_) => "double_value",
            Literal::String(_) => "string_value",
        }
    }
}
