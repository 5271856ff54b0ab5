//! Build a complete execution service request from a search document.

use serde::Deserialize;

use query_engine_proto::proto;
use query_engine_proto::proto::ast::QueryRequest;

use super::error::Error;
use super::query;

/// The slice of a search document this engine understands.
///
/// `sort` and `from` are accepted for compatibility with existing callers
/// but have no counterpart in the execution service request.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub query: serde_json::Value,
    #[serde(rename = "_source")]
    pub source: Vec<String>,
    #[serde(default)]
    pub sort: Vec<String>,
    #[serde(default)]
    pub from: Option<u64>,
    #[serde(default)]
    pub size: Option<u64>,
}

/// Translate a search document into a request over the given data
/// partitions. A `size` in the document may lower the row ceiling, never
/// raise it.
pub fn build_request(
    search: &SearchRequest,
    arrow_urls: Vec<String>,
) -> Result<QueryRequest, Error> {
    tracing::debug!(
        columns = search.source.len(),
        partitions = arrow_urls.len(),
        "translating search request"
    );

    let filter_expression = query::translate(&search.query)?;
    let max_rows = search
        .size
        .map_or(proto::MAX_ROWS, |size| size.min(proto::MAX_ROWS));

    Ok(QueryRequest {
        arrow_urls,
        projection_columns: search.source.clone(),
        filter_expression,
        max_rows,
    })
}
