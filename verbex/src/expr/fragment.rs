use std::borrow::Cow;

use regex_syntax::is_meta_character;

use crate::expr::Expression;

/// A pattern-safe piece of text, ready to be appended to an expression body.
///
/// Every operation that accepts caller-supplied text funnels through this
/// type, so user input can never accidentally introduce pattern
/// metacharacters:
///
/// - Plain text ([`&str`], [`String`], [`char`]) is escaped so the literal
///   matches itself exactly, including whitespace:
///
///   ```
///   use verbex::expr::Fragment;
///
///   assert_eq!(Fragment::from("www.").as_str(), r"www\.");
///   assert_eq!(Fragment::from("a b+c").as_str(), r"a\ b\+c");
///   ```
///
/// - Pre-built patterns ([`regex::Regex`], [`Expression`]) pass their source
///   through verbatim, so patterns compose structurally:
///
///   ```
///   use verbex::expr::{Expression, Fragment};
///
///   let mut digits = Expression::new();
///   digits.digit().digit();
///   assert_eq!(Fragment::from(&digits).as_str(), r"\d\d");
///   ```
#[derive(Clone, Debug)]
pub struct Fragment<'a>(Cow<'a, str>);

impl<'a> Fragment<'a> {
    /// Wraps already-safe pattern text without escaping it.
    pub fn raw(pattern: impl Into<Cow<'a, str>>) -> Self {
        Fragment(pattern.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Whether `ch` must be escaped for the text to match itself literally.
///
/// [`is_meta_character`] covers the syntax metacharacters; whitespace is
/// escaped on top of that so assembled patterns stay readable and survive
/// flags like `(?x)` unchanged.
fn must_escape(ch: char) -> bool {
    is_meta_character(ch) || matches!(ch, ' ' | '\n' | '\r' | '\t' | '\x0B' | '\x0C')
}

fn escape_into(text: &str, dst: &mut String) {
    for ch in text.chars() {
        match ch {
            '\n' => dst.push_str(r"\n"),
            '\r' => dst.push_str(r"\r"),
            '\t' => dst.push_str(r"\t"),
            '\x0B' => dst.push_str(r"\v"),
            '\x0C' => dst.push_str(r"\f"),
            ch if must_escape(ch) => {
                dst.push('\\');
                dst.push(ch);
            }
            ch => dst.push(ch),
        }
    }
}

impl<'a> From<&'a str> for Fragment<'a> {
    fn from(text: &'a str) -> Self {
        if text.contains(must_escape) {
            let mut escaped = String::with_capacity(text.len() + 2);
            escape_into(text, &mut escaped);
            Fragment(Cow::Owned(escaped))
        } else {
            Fragment(Cow::Borrowed(text))
        }
    }
}

impl From<String> for Fragment<'static> {
    fn from(text: String) -> Self {
        if text.contains(must_escape) {
            let mut escaped = String::with_capacity(text.len() + 2);
            escape_into(&text, &mut escaped);
            Fragment(Cow::Owned(escaped))
        } else {
            Fragment(Cow::Owned(text))
        }
    }
}

impl<'a> From<&'a String> for Fragment<'a> {
    fn from(text: &'a String) -> Self {
        Fragment::from(text.as_str())
    }
}

impl From<char> for Fragment<'static> {
    fn from(ch: char) -> Self {
        let mut escaped = String::new();
        escape_into(ch.encode_utf8(&mut [0; 4]), &mut escaped);
        Fragment(Cow::Owned(escaped))
    }
}

impl<'a> From<&'a regex::Regex> for Fragment<'a> {
    fn from(pattern: &'a regex::Regex) -> Self {
        Fragment(Cow::Borrowed(pattern.as_str()))
    }
}

impl From<&Expression> for Fragment<'static> {
    fn from(expr: &Expression) -> Self {
        Fragment(Cow::Owned(expr.pattern()))
    }
}
