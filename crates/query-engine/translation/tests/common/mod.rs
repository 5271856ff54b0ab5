use std::fs;
use std::path::PathBuf;

use query_engine_translation::translation::request;

/// Build the request for a golden search document and compare the rendered
/// text against the checked-in expectation.
pub fn test_translation(testname: &str, arrow_urls: &[&str]) -> anyhow::Result<()> {
    let directory = PathBuf::from("tests/goldenfiles").join(testname);

    let search: request::SearchRequest =
        serde_json::from_str(&fs::read_to_string(directory.join("request.json"))?)?;
    let expected = fs::read_to_string(directory.join("expected.txt"))?;

    let built = request::build_request(
        &search,
        arrow_urls.iter().map(ToString::to_string).collect(),
    )?;

    similar_asserts::assert_eq!(built.text(), expected);
    Ok(())
}
