/// Report formatters - text and JSON renderings of the report view
pub mod json_formatter;
pub mod text_formatter;

pub use json_formatter::JsonReportFormatter;
pub use text_formatter::TextReportFormatter;
