use query_engine_proto::proto;
use query_engine_proto::proto::ast::{Expression, Literal, QueryRequest};
use query_engine_proto::proto::string::TextProto;

fn render(expression: &Expression) -> String {
    let mut text = TextProto::new();
    expression.to_text(&mut text);
    text.text
}

#[test]
fn it_renders_a_column() {
    assert_eq!(render(&proto::helpers::column("xpos")), "column: \"xpos\"\n");
}

#[test]
fn it_renders_literal_blocks() {
    assert_eq!(
        render(&Expression::Literal(Literal::Bool(true))),
        "literal {\n  bool_value: true\n}\n"
    );
    assert_eq!(
        render(&Expression::Literal(Literal::Int32(42))),
        "literal {\n  int32_value: 42\n}\n"
    );
    assert_eq!(
        render(&Expression::Literal(Literal::Int64(8_589_934_592))),
        "literal {\n  int64_value: 8589934592\n}\n"
    );
    assert_eq!(
        render(&Expression::Literal(Literal::Double(0.0001))),
        "literal {\n  double_value: 0.0001\n}\n"
    );
    assert_eq!(
        render(&Expression::Literal(Literal::String("missense".to_string()))),
        "literal {\n  string_value: \"missense\"\n}\n"
    );
}

#[test]
fn it_escapes_quotes_and_backslashes() {
    let literal = Expression::Literal(Literal::String(
        "5' UTR \"variant\" \\ test".to_string(),
    ));
    let expected = r#"literal {
  string_value: "5' UTR \"variant\" \\ test"
}
"#;
    assert_eq!(render(&literal), expected);
}

#[test]
fn it_renders_a_call_with_arguments() {
    let call = proto::helpers::call(
        "less",
        vec![
            proto::helpers::column("gnomad_exomes_AF"),
            Expression::Literal(Literal::Double(0.0001)),
        ],
    );
    let expected = r#"call {
  function_name: "less"
  arguments {
    column: "gnomad_exomes_AF"
  }
  arguments {
    literal {
      double_value: 0.0001
    }
  }
}
"#;
    similar_asserts::assert_eq!(render(&call), expected);
}

#[test]
fn it_renders_option_blocks_after_arguments() {
    let call = proto::helpers::call_with_options(
        "string_list_contains_any",
        vec![proto::helpers::column("clinvar_clinical_significance")],
        "set_lookup_options",
        vec![("values".to_string(), "Benign".to_string())],
    );
    let expected = r#"call {
  function_name: "string_list_contains_any"
  arguments {
    column: "clinvar_clinical_significance"
  }
  set_lookup_options {
    values: "Benign"
  }
}
"#;
    similar_asserts::assert_eq!(render(&call), expected);
}

#[test]
fn it_renders_byte_identically_across_runs() {
    let call = proto::helpers::call_with_options(
        "match_substring_regex",
        vec![proto::helpers::column("consequences")],
        "match_substring_options",
        vec![("pattern".to_string(), ".+missense.+".to_string())],
    );
    assert_eq!(render(&call), render(&call.clone()));
}

#[test]
fn it_honors_a_custom_indent_width() {
    let mut text = TextProto::with_indent_width(4);
    Expression::Literal(Literal::Double(0.5)).to_text(&mut text);
    assert_eq!(text.text, "literal {\n    double_value: 0.5\n}\n");
}

#[test]
fn it_renders_a_full_request() {
    let request = QueryRequest {
        arrow_urls: vec!["file:///data/part-00000.zstd.arrow".to_string()],
        projection_columns: vec!["xpos".to_string(), "variantId".to_string()],
        filter_expression: proto::helpers::unary_call(
            "is_valid",
            proto::helpers::column("gnomad_exomes_AF"),
        ),
        max_rows: proto::MAX_ROWS,
    };
    let expected = r#"arrow_urls: "file:///data/part-00000.zstd.arrow"
projection_columns: "xpos"
projection_columns: "variantId"
filter_expression {
  call {
    function_name: "is_valid"
    arguments {
      column: "gnomad_exomes_AF"
    }
  }
}
max_rows: 10000
"#;
    similar_asserts::assert_eq!(request.text(), expected);
}
