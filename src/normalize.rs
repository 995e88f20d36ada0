//! Comment and string stripping shared by both analyzers.
//!
//! Identifier matching over the stripped text cannot false-positive on
//! mentions inside comments or string contents. Comments are removed before
//! strings; a comment marker embedded in a string literal (or a quote inside
//! a comment) can still split a span incorrectly. That is a known limitation
//! of the lexical approach, not something to paper over with a real lexer.

use regex::Regex;
use std::sync::OnceLock;

fn re_line_comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"//[^\n]*").expect("valid line comment regex"))
}

fn re_block_comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid block comment regex"))
}

fn re_string_literal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""(?:\\.|[^"\\])*""#).expect("valid string literal regex"))
}

/// Remove `// …` line comments (newline kept), `/* … */` block comments
/// (shortest span, may cross lines), then double-quoted string literals
/// (shortest span between unescaped quotes).
pub fn strip_comments_and_strings(source: &str) -> String {
    let stripped = re_line_comment().replace_all(source, "");
    let stripped = re_block_comment().replace_all(&stripped, "");
    re_string_literal().replace_all(&stripped, "").into_owned()
}
