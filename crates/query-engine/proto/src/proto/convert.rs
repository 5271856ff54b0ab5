//! Convert the filter expression AST to the protobuf text format
//! understood by the query execution service.

use super::ast::*;
use super::string::TextProto;

impl QueryRequest {
    pub fn to_text(&self, text: &mut TextProto) {
        for url in &self.arrow_urls {
            text.append_string_field("arrow_urls", url);
        }

        for column in &self.projection_columns {
            text.append_string_field("projection_columns", column);
        }

        text.open_block("filter_expression");
        self.filter_expression.to_text(text);
        text.close_block();

        text.append_field("max_rows", &self.max_rows.to_string());
    }

    /// Render the whole request as one text format document.
    pub fn text(&self) -> String {
        let mut text = TextProto::new();
        self.to_text(&mut text);
        text.text
    }
}

impl Expression {
    pub fn to_text(&self, text: &mut TextProto) {
        match self {
            Expression::Column(column) => column.to_text(text),
            Expression::Literal(literal) => literal.to_text(text),
            Expression::Call(call) => call.to_text(text),
        }
    }
}

impl ColumnName {
    pub fn to_text(&self, text: &mut TextProto) {
        let ColumnName(name) = self;
        text.append_string_field("column", name);
    }
}

impl Literal {
    pub fn to_text(&self, text: &mut TextProto) {
        text.open_block("literal");
        match self {
            Literal::Bool(true) => text.append_field(self.type_tag(), "true"),
            Literal::Bool(false) => text.append_field(self.type_tag(), "false"),
            Literal::Int32(i) => text.append_field(self.type_tag(), &i.to_string()),
            Literal::Int64(i) => text.append_field(self.type_tag(), &i.to_string()),
            Literal::Double(d) => text.append_field(self.type_tag(), &d.to_string()),
            Literal::String(s) => text.append_string_field(self.type_tag(), s),
        }
        text.close_block();
    }
}

impl Call {
    pub fn to_text(&self, text: &mut TextProto) {
        text.open_block("call");
        text.append_string_field("function_name", &self.function_name);

        for argument in &self.arguments {
            text.open_block("arguments");
            argument.to_text(text);
            text.close_block();
        }

        for (block, entries) in &self.options {
            text.open_block(block);
            for (key, value) in entries {
                text.append_string_field(key, value);
            }
            text.close_block();
        }

        text.close_block();
    }
}
