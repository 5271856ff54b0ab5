//! The filter-expression model and its protobuf text format rendering,
//! as consumed by the query execution service.

pub mod proto;
