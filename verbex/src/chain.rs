/*!
The chained builder variant.

[`Chain`] wraps an [`Expression`] and moves it through a by-value fluent
chain, finalized by the explicit terminal [`end`](Chain::end), or by
[`end_of_line`](Chain::end_of_line), which sets the suffix and compiles in
one step so chains ending at a line end need no separate terminal call.

```
use verbex::chain::Chain;

let re = Chain::new()
    .start_of_line(true)
    .then("http")
    .maybe("s")
    .then("://")
    .maybe("www.")
    .anything_but(" ")
    .end_of_line()?;

assert_eq!(re.as_str(), r"^(?:http)(?:s)?(?:://)(?:www\.)?(?:[^\ ]*)$");
assert!(re.is_match("https://www.google.com"));
# Ok::<(), verbex::Error>(())
```
*/
use std::ops::RangeBounds;

use regex::Regex;

use crate::{
    expr::{Expression, Fragment},
    Error,
};

/// An expression assembled as a chain of moves, with no modifiers.
///
/// Each operation consumes and returns the chain, so one assembly is one
/// linear sequence of calls with a single owner throughout.
#[derive(Debug, Default)]
pub struct Chain(Expression);

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pattern assembled so far.
    pub fn pattern(&self) -> String {
        self.0.pattern()
    }

    /// See [`Expression::find`].
    pub fn find<'a>(mut self, value: impl Into<Fragment<'a>>) -> Self {
        self.0.find(value);
        self
    }

    /// Alias of [`find`](Chain::find), reading as prose.
    pub fn then<'a>(mut self, value: impl Into<Fragment<'a>>) -> Self {
        self.0.then(value);
        self
    }

    pub fn maybe<'a>(mut self, value: impl Into<Fragment<'a>>) -> Self {
        self.0.maybe(value);
        self
    }

    pub fn anything(mut self) -> Self {
        self.0.anything();
        self
    }

    pub fn anything_but<'a>(mut self, value: impl Into<Fragment<'a>>) -> Self {
        self.0.anything_but(value);
        self
    }

    pub fn line_break(mut self) -> Self {
        self.0.line_break();
        self
    }

    /// Alias of [`line_break`](Chain::line_break).
    pub fn br(self) -> Self {
        self.line_break()
    }

    pub fn tab(mut self) -> Self {
        self.0.tab();
        self
    }

    pub fn word(mut self) -> Self {
        self.0.word();
        self
    }

    pub fn letter(mut self) -> Self {
        self.0.letter();
        self
    }

    pub fn digit(mut self) -> Self {
        self.0.digit();
        self
    }

    pub fn integer(mut self) -> Self {
        self.0.integer();
        self
    }

    pub fn whitespace(mut self) -> Self {
        self.0.whitespace();
        self
    }

    pub fn hex(mut self) -> Self {
        self.0.hex();
        self
    }

    pub fn any_of<'a>(mut self, value: impl Into<Fragment<'a>>) -> Self {
        self.0.any_of(value);
        self
    }

    /// Alias of [`any_of`](Chain::any_of).
    pub fn any<'a>(self, value: impl Into<Fragment<'a>>) -> Self {
        self.any_of(value)
    }

    /// See [`Expression::range`].
    pub fn range<'a, I>(mut self, bounds: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Fragment<'a>>,
    {
        self.0.range(bounds);
        self
    }

    /// See [`Expression::multiple`].
    pub fn multiple<'a>(
        mut self,
        value: impl Into<Fragment<'a>>,
        bounds: impl RangeBounds<u32>,
    ) -> Self {
        self.0.multiple(value, bounds);
        self
    }

    /// See [`Expression::one_or_more`]; the definition runs against the
    /// underlying [`Expression`].
    pub fn one_or_more(mut self, definition: impl FnOnce(&mut Expression)) -> Self {
        self.0.one_or_more(definition);
        self
    }

    pub fn zero_or_more(mut self, definition: impl FnOnce(&mut Expression)) -> Self {
        self.0.zero_or_more(definition);
        self
    }

    pub fn begin_capture(mut self) -> Self {
        self.0.begin_capture();
        self
    }

    pub fn begin_named_capture(mut self, name: &str) -> Self {
        self.0.begin_named_capture(name);
        self
    }

    pub fn end_capture(mut self) -> Self {
        self.0.end_capture();
        self
    }

    pub fn capture(mut self, definition: impl FnOnce(&mut Expression)) -> Self {
        self.0.capture(definition);
        self
    }

    pub fn named_capture(mut self, name: &str, definition: impl FnOnce(&mut Expression)) -> Self {
        self.0.named_capture(name, definition);
        self
    }

    pub fn start_of_line(mut self, enable: bool) -> Self {
        self.0.start_of_line(enable);
        self
    }

    pub fn start_of_string(mut self, enable: bool) -> Self {
        self.0.start_of_string(enable);
        self
    }

    pub fn end_of_string(mut self, enable: bool) -> Self {
        self.0.end_of_string(enable);
        self
    }

    /// See [`Expression::alternatively`].
    pub fn alternatively(mut self) -> Self {
        self.0.alternatively();
        self
    }

    /// [`alternatively`](Chain::alternatively) with an inline
    /// [`find`](Chain::find) of the new branch.
    pub fn branch<'a>(mut self, value: impl Into<Fragment<'a>>) -> Self {
        self.0.branch(value);
        self
    }

    /// Sets the end-of-line anchor and finalizes the chain in one step.
    pub fn end_of_line(mut self) -> Result<Regex, Error> {
        self.0.end_of_line(true);
        self.0.compile()
    }

    /// The explicit terminal operation: compiles the accumulated fragments.
    pub fn end(self) -> Result<Regex, Error> {
        self.0.compile()
    }
}

impl From<Chain> for Expression {
    fn from(chain: Chain) -> Self {
        chain.0
    }
}
