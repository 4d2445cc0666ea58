/*!
The expression assembly engine.

[`Expression`] accumulates a pattern as three fragments, `prefix + body +
suffix`, plus a [`Modifiers`] set. Every operation mutates that state and
returns `&mut Self`, so calls chain; [`Expression::compile`] hands the
assembled pattern to [`regex`] and returns the compiled matcher.

## Example
```
use verbex::expr::Expression;

let mut url = Expression::new();
url.start_of_line(true)
    .find("http")
    .maybe("s")
    .find("://")
    .maybe("www.")
    .anything_but(" ")
    .end_of_line(true);

assert_eq!(url.pattern(), r"^(?:http)(?:s)?(?:://)(?:www\.)?(?:[^\ ]*)$");
let re = url.compile()?;
assert!(re.is_match("https://www.google.com"));
assert!(re.is_match("http://goo gle.com") == false);
# Ok::<(), verbex::Error>(())
```

Nested definitions append into the same body, so combinators compose freely:

```
use verbex::expr::Expression;

let mut words = Expression::new();
words.one_or_more(|e| {
    e.word();
    e.zero_or_more(|e| {
        e.whitespace();
    });
});

let re = words.compile()?;
assert_eq!(re.find("this is sparta").unwrap().as_str(), "this is sparta");
# Ok::<(), verbex::Error>(())
```
*/
use std::ops::{Bound, RangeBounds};

use itertools::Itertools;
use regex::{Regex, RegexBuilder};

use crate::Error;

pub use self::{fragment::Fragment, modifier::Modifiers};

mod fragment;
mod modifier;

/// A regular-expression pattern under assembly.
///
/// An `Expression` is created fresh per assembly, mutated by a linear
/// sequence of operations on one thread of control, finalized once with
/// [`compile`](Expression::compile), and then discarded; the compiled
/// [`Regex`] is the only long-lived artifact. It is not meant to be shared
/// between concurrent callers.
#[derive(Clone, Debug, Default)]
pub struct Expression {
    /// Anchor fragment prepended to the final pattern: empty, a start
    /// anchor, or opened by the alternation group marker `(?:`.
    prefix: String,
    body: String,
    /// Anchor fragment appended to the final pattern: empty, an end anchor,
    /// or closed by the alternation group marker `)`.
    suffix: String,
    modifiers: Modifiers,
    /// Whether the top-level alternation group markers have been inserted.
    /// Flips once per assembly; see [`Expression::alternatively`].
    alternating: bool,
}

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty expression carrying a modifier set.
    ///
    /// ```
    /// use verbex::expr::{Expression, Modifiers};
    ///
    /// let mut e = Expression::with_modifiers(Modifiers::CASE_INSENSITIVE);
    /// e.find("HELLO");
    /// assert!(e.compile()?.is_match("hello world"));
    /// # Ok::<(), verbex::Error>(())
    /// ```
    pub fn with_modifiers(modifiers: Modifiers) -> Self {
        Expression {
            modifiers,
            ..Self::default()
        }
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Appends `value` as a non-capturing group: `(?:value)`.
    ///
    /// Plain text is escaped to match itself literally; a [`Regex`] or
    /// another `Expression` contributes its pattern verbatim. See
    /// [`Fragment`].
    pub fn find<'a>(&mut self, value: impl Into<Fragment<'a>>) -> &mut Self {
        self.body.push_str("(?:");
        self.body.push_str(value.into().as_str());
        self.body.push(')');
        self
    }

    /// Alias of [`find`](Expression::find), reading better mid-chain.
    pub fn then<'a>(&mut self, value: impl Into<Fragment<'a>>) -> &mut Self {
        self.find(value)
    }

    /// Appends `value` as an optional non-capturing group: `(?:value)?`.
    pub fn maybe<'a>(&mut self, value: impl Into<Fragment<'a>>) -> &mut Self {
        self.body.push_str("(?:");
        self.body.push_str(value.into().as_str());
        self.body.push_str(")?");
        self
    }

    // Anchors. Enabling one is idempotent, disabling clears the fragment.
    // Each anchor owns the whole prefix/suffix, so the last writer wins;
    // this includes the group marker written by `alternatively`.

    /// Anchors the pattern at a line start (`^`), or clears the anchor.
    pub fn start_of_line(&mut self, enable: bool) -> &mut Self {
        self.prefix = if enable { "^".to_owned() } else { String::new() };
        self
    }

    /// Anchors the pattern at a line end (`$`), or clears the anchor.
    pub fn end_of_line(&mut self, enable: bool) -> &mut Self {
        self.suffix = if enable { "$".to_owned() } else { String::new() };
        self
    }

    /// Anchors the pattern at the start of the whole string (`\A`),
    /// regardless of embedded line breaks.
    pub fn start_of_string(&mut self, enable: bool) -> &mut Self {
        self.prefix = if enable { r"\A".to_owned() } else { String::new() };
        self
    }

    /// Anchors the pattern at the end of the whole string (`\z`).
    pub fn end_of_string(&mut self, enable: bool) -> &mut Self {
        self.suffix = if enable { r"\z".to_owned() } else { String::new() };
        self
    }

    /// Any character, any number of times: `(?:.*)`.
    ///
    /// Greedy, and stops at line breaks unless [`Modifiers::MULTILINE`] is
    /// set.
    pub fn anything(&mut self) -> &mut Self {
        self.body.push_str("(?:.*)");
        self
    }

    /// Any run of characters outside the given set: `(?:[^value]*)`.
    pub fn anything_but<'a>(&mut self, value: impl Into<Fragment<'a>>) -> &mut Self {
        self.body.push_str("(?:[^");
        self.body.push_str(value.into().as_str());
        self.body.push_str("]*)");
        self
    }

    /// A Unix or Windows line break: `(?:\n|(?:\r\n))`.
    pub fn line_break(&mut self) -> &mut Self {
        self.body.push_str(r"(?:\n|(?:\r\n))");
        self
    }

    /// Alias of [`line_break`](Expression::line_break).
    pub fn br(&mut self) -> &mut Self {
        self.line_break()
    }

    /// A tab character: `\t`.
    pub fn tab(&mut self) -> &mut Self {
        self.body.push_str(r"\t");
        self
    }

    /// One or more word characters: `\w+`.
    pub fn word(&mut self) -> &mut Self {
        self.body.push_str(r"\w+");
        self
    }

    /// Exactly one word character: `\w`.
    pub fn letter(&mut self) -> &mut Self {
        self.body.push_str(r"\w");
        self
    }

    /// Exactly one digit: `\d`.
    pub fn digit(&mut self) -> &mut Self {
        self.body.push_str(r"\d");
        self
    }

    /// One or more digits; [`digit`](Expression::digit) wrapped in
    /// [`one_or_more`](Expression::one_or_more).
    pub fn integer(&mut self) -> &mut Self {
        self.one_or_more(|e| {
            e.digit();
        })
    }

    /// One or more whitespace characters: `\s+`.
    pub fn whitespace(&mut self) -> &mut Self {
        self.body.push_str(r"\s+");
        self
    }

    /// Exactly one hexadecimal digit: `[0-9A-Fa-f]`.
    pub fn hex(&mut self) -> &mut Self {
        self.body.push_str("[0-9A-Fa-f]");
        self
    }

    /// A single character from the given set: `[value]`.
    pub fn any_of<'a>(&mut self, value: impl Into<Fragment<'a>>) -> &mut Self {
        self.body.push('[');
        self.body.push_str(value.into().as_str());
        self.body.push(']');
        self
    }

    /// Alias of [`any_of`](Expression::any_of).
    pub fn any<'a>(&mut self, value: impl Into<Fragment<'a>>) -> &mut Self {
        self.any_of(value)
    }

    /// A single character from the given ranges: `[from-to...]`.
    ///
    /// `bounds` is a flat, even-length sequence of range bounds; consecutive
    /// bounds are paired up inside one enclosing class.
    ///
    /// ```
    /// use verbex::expr::Expression;
    ///
    /// let mut e = Expression::new();
    /// e.range(['0', '9', 'A', 'Z']);
    /// assert_eq!(e.pattern(), "[0-9A-Z]");
    /// ```
    ///
    /// An odd-length sequence is a contract violation; the unpaired trailing
    /// bound is dropped.
    pub fn range<'a, I>(&mut self, bounds: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Fragment<'a>>,
    {
        self.body.push('[');
        for (from, to) in bounds.into_iter().map(Into::into).tuples() {
            self.body.push_str(from.as_str());
            self.body.push('-');
            self.body.push_str(to.as_str());
        }
        self.body.push(']');
        self
    }

    /// `value` repeated within `bounds`, wrapped in a capturing group.
    ///
    /// The group is always capturing, so callers relying on capture indices
    /// must account for it. Unbounded repetition (`..`) emits the legacy
    /// `(value)+`; otherwise a `{min,max}` quantifier is emitted.
    ///
    /// ```
    /// use verbex::expr::Expression;
    ///
    /// let mut e = Expression::new();
    /// e.multiple("ab", 2..=5);
    /// assert_eq!(e.pattern(), "(ab){2,5}");
    ///
    /// let mut e = Expression::new();
    /// e.multiple("ab", 2..);
    /// assert_eq!(e.pattern(), "(ab){2,}");
    ///
    /// let mut e = Expression::new();
    /// e.multiple("ab", ..);
    /// assert_eq!(e.pattern(), "(ab)+");
    /// ```
    pub fn multiple<'a>(
        &mut self,
        value: impl Into<Fragment<'a>>,
        bounds: impl RangeBounds<u32>,
    ) -> &mut Self {
        self.body.push('(');
        self.body.push_str(value.into().as_str());
        self.body.push(')');

        let min = match bounds.start_bound() {
            Bound::Included(&n) => Some(n),
            Bound::Excluded(&n) => Some(n + 1),
            Bound::Unbounded => None,
        };
        let max = match bounds.end_bound() {
            Bound::Included(&n) => Some(n),
            Bound::Excluded(&n) => Some(n.saturating_sub(1)),
            Bound::Unbounded => None,
        };
        match (min, max) {
            (Some(min), Some(max)) => self.body.push_str(&format!("{{{min},{max}}}")),
            (Some(min), None) => self.body.push_str(&format!("{{{min},}}")),
            (None, Some(max)) => self.body.push_str(&format!("{{0,{max}}}")),
            (None, None) => self.body.push('+'),
        }
        self
    }

    /// One or more repetitions of whatever `definition` appends: `(?:...)+`.
    ///
    /// The definition runs against this same expression, so nested calls
    /// append into the same body and combinators nest arbitrarily.
    pub fn one_or_more(&mut self, definition: impl FnOnce(&mut Expression)) -> &mut Self {
        self.body.push_str("(?:");
        definition(self);
        self.body.push_str(")+");
        self
    }

    /// Zero or more repetitions of whatever `definition` appends: `(?:...)*`.
    pub fn zero_or_more(&mut self, definition: impl FnOnce(&mut Expression)) -> &mut Self {
        self.body.push_str("(?:");
        definition(self);
        self.body.push_str(")*");
        self
    }

    /// Opens a positional capturing group: `(`.
    ///
    /// Group markers are ordinary body text, so captures nest freely and
    /// positional indices accumulate in opening order. Every
    /// `begin_capture` needs a matching
    /// [`end_capture`](Expression::end_capture) before finalization.
    pub fn begin_capture(&mut self) -> &mut Self {
        self.body.push('(');
        self
    }

    /// Opens a named capturing group: `(?<name>`.
    pub fn begin_named_capture(&mut self, name: &str) -> &mut Self {
        self.body.push_str("(?<");
        self.body.push_str(name);
        self.body.push('>');
        self
    }

    /// Closes the innermost open capturing group: `)`.
    pub fn end_capture(&mut self) -> &mut Self {
        self.body.push(')');
        self
    }

    /// Captures whatever `definition` appends, by position.
    pub fn capture(&mut self, definition: impl FnOnce(&mut Expression)) -> &mut Self {
        self.begin_capture();
        definition(self);
        self.end_capture()
    }

    /// Captures whatever `definition` appends, by name.
    ///
    /// ```
    /// use verbex::expr::Expression;
    ///
    /// let mut e = Expression::new();
    /// e.find("scored ").named_capture("goals", |e| {
    ///     e.word();
    /// });
    ///
    /// let caps = e.compile()?.captures("Jerry scored 5 goals!").unwrap();
    /// assert_eq!(&caps["goals"], "5");
    /// # Ok::<(), verbex::Error>(())
    /// ```
    pub fn named_capture(
        &mut self,
        name: &str,
        definition: impl FnOnce(&mut Expression),
    ) -> &mut Self {
        self.begin_named_capture(name);
        definition(self);
        self.end_capture()
    }

    /// Starts a new branch of a top-level alternation.
    ///
    /// The first call transitions the assembly into its alternating state:
    /// the opening marker `(?:` is appended to the prefix and the closing
    /// marker `)` prepended to the suffix, once per assembly no matter how
    /// many branches follow. Every call then inserts the branch separator
    /// `)|(?:` into the body, so `A`, `B`, `C` become three branches of one
    /// group, `(?:A)|(?:B)|(?:C)`, never nested pairwise alternations.
    ///
    /// ```
    /// use verbex::expr::Expression;
    ///
    /// let mut e = Expression::new();
    /// e.find("lions").alternatively().find("tigers").alternatively().find("bears");
    /// assert_eq!(e.pattern(), "(?:(?:lions))|(?:(?:tigers))|(?:(?:bears))");
    /// assert!(e.compile()?.is_match("bears"));
    /// # Ok::<(), verbex::Error>(())
    /// ```
    ///
    /// The group markers share the prefix and suffix with the anchor
    /// setters, and the last writer wins: calling an anchor setter after
    /// `alternatively` overwrites a group marker and leaves a pattern that
    /// fails to compile. Anchor first, then alternate.
    pub fn alternatively(&mut self) -> &mut Self {
        if !self.alternating {
            self.prefix.push_str("(?:");
            self.suffix.insert(0, ')');
            self.alternating = true;
        }
        self.body.push_str(")|(?:");
        self
    }

    /// [`alternatively`](Expression::alternatively) with an inline
    /// [`find`](Expression::find) of `value` as the new branch.
    pub fn branch<'a>(&mut self, value: impl Into<Fragment<'a>>) -> &mut Self {
        self.alternatively().find(value)
    }

    /// The assembled pattern, `prefix + body + suffix`.
    ///
    /// [`Modifiers::WHOLE_LINE`] and [`Modifiers::WHOLE_STRING`] wrap the
    /// whole assembly in `^(?:...)$` and `\A(?:...)\z` respectively.
    pub fn pattern(&self) -> String {
        let pattern = format!("{}{}{}", self.prefix, self.body, self.suffix);
        if self.modifiers.contains(Modifiers::WHOLE_STRING) {
            format!(r"\A(?:{pattern})\z")
        } else if self.modifiers.contains(Modifiers::WHOLE_LINE) {
            format!("^(?:{pattern})$")
        } else {
            pattern
        }
    }

    /// Compiles the assembled pattern into a [`Regex`].
    ///
    /// The modifier set maps onto the engine's flags here:
    /// [`Modifiers::CASE_INSENSITIVE`] to case-insensitive matching, and
    /// [`Modifiers::MULTILINE`] to both line-boundary anchors and `.`
    /// matching line breaks (the reference semantics of the single
    /// `multiline` modifier). A rejected pattern is always a programmer
    /// error in the call sequence and surfaces as [`Error::Compile`]
    /// carrying the assembled pattern.
    pub fn compile(&self) -> Result<Regex, Error> {
        let pattern = self.pattern();
        RegexBuilder::new(&pattern)
            .case_insensitive(self.modifiers.contains(Modifiers::CASE_INSENSITIVE))
            .multi_line(
                self.modifiers
                    .intersects(Modifiers::MULTILINE | Modifiers::WHOLE_LINE),
            )
            .dot_matches_new_line(self.modifiers.contains(Modifiers::MULTILINE))
            .build()
            .map_err(|error| Error::Compile { pattern, error })
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiled(definition: impl FnOnce(&mut Expression)) -> Regex {
        let mut e = Expression::new();
        definition(&mut e);
        e.compile().unwrap()
    }

    #[test]
    fn find_builds_a_non_capturing_group() {
        let mut e = Expression::new();
        e.find("lions");
        assert_eq!(e.pattern(), "(?:lions)");

        let re = e.compile().unwrap();
        assert!(re.is_match("lions"));
        assert_eq!(
            re.find("lions, tigers, and bears, oh my!").unwrap().as_str(),
            "lions"
        );
    }

    #[test]
    fn find_escapes_metacharacters() {
        let re = compiled(|e| {
            e.find("1.5+2 (approx?)");
        });
        assert!(re.is_match("the total is 1.5+2 (approx?) units"));
        // The unescaped metacharacters would happily match this one.
        assert!(re.is_match("the total is 1x5.2 (approx) units") == false);
    }

    #[test]
    fn expressions_compose_unescaped() {
        let mut digits = Expression::new();
        digits.digit().digit();

        let re = compiled(|e| {
            e.find("v").find(&digits);
        });
        assert!(re.is_match("v42"));
        assert!(re.is_match(r"v\d\d") == false);
    }

    #[test]
    fn maybe() {
        let re = compiled(|e| {
            e.find("http").maybe("s").find("://");
        });
        assert!(re.is_match("https://example.com"));
        assert!(re.is_match("http://example.com"));
    }

    #[test]
    fn anything() {
        let re = compiled(|e| {
            e.anything();
        });
        assert!(re.is_match("The quick brown fox jumps over the lazy dog."));
        assert!(re.is_match(""));
    }

    #[test]
    fn anything_but_is_unanchored_and_unbounded() {
        let mut e = Expression::new();
        e.anything_but(" ");
        assert_eq!(e.pattern(), r"(?:[^\ ]*)");

        let re = compiled(|e| {
            e.start_of_line(true).anything_but("<>").end_of_line(true);
        });
        assert!(re.is_match("no angle brackets at all"));
        assert!(re.is_match("some <angle> brackets") == false);
    }

    #[test]
    fn line_break_and_alias() {
        let multiline = "I'm a multiline\nstring.";
        for re in [
            compiled(|e| {
                e.line_break();
            }),
            compiled(|e| {
                e.br();
            }),
        ] {
            assert!(re.is_match(multiline));
            assert!(re.is_match("hello world") == false);
        }
        assert!(compiled(|e| {
            e.line_break();
        })
        .is_match("windows\r\nline"));
    }

    #[test]
    fn word_matches_runs_letter_matches_one() {
        let word = compiled(|e| {
            e.start_of_line(true).word().end_of_line(true);
        });
        for single in ["a", "A", "0", "_"] {
            assert!(word.is_match(single));
        }
        assert!(word.is_match("abc"));
        assert!(word.is_match("!") == false);

        let letter = compiled(|e| {
            e.start_of_line(true).letter().end_of_line(true);
        });
        for single in ["a", "A", "0", "_"] {
            assert!(letter.is_match(single));
        }
        assert!(letter.is_match("abc") == false);
        assert!(letter.is_match("/") == false);
    }

    #[test]
    fn digit_and_integer() {
        let mut e = Expression::new();
        e.integer();
        assert_eq!(e.pattern(), r"(?:\d)+");

        let re = compiled(|e| {
            e.start_of_line(true).integer().end_of_line(true);
        });
        assert!(re.is_match("12345"));
        assert!(re.is_match("12a45") == false);

        let one = compiled(|e| {
            e.start_of_line(true).digit().end_of_line(true);
        });
        assert!(one.is_match("7"));
        assert!(one.is_match("77") == false);
    }

    #[test]
    fn hex_matches_one_hexadecimal_digit() {
        let re = compiled(|e| {
            e.start_of_string(true)
                .one_or_more(|e| {
                    e.hex();
                })
                .end_of_string(true);
        });
        assert!(re.is_match("123abc"));
        assert!(re.is_match("FFFFFF"));
        assert!(re.is_match("abcdefg") == false);
    }

    #[test]
    fn any_of() {
        let re = compiled(|e| {
            e.any_of("aeiou");
        });
        assert!(re.is_match("fox"));
        assert!(re.is_match("xyz") == false);
    }

    #[test]
    fn range_pairs_bounds() {
        let mut e = Expression::new();
        e.range(['0', '9', 'A', 'Z']);
        assert_eq!(e.pattern(), "[0-9A-Z]");

        let re = compiled(|e| {
            e.range(['0', '9']);
        });
        assert!(re.is_match("5"));
        assert!(re.is_match("q") == false);
    }

    #[test]
    fn multiple_unbounded_matches_one_or_more() {
        let re = compiled(|e| {
            e.multiple("+", ..);
        });
        assert!(re.is_match("++++"));
        assert_eq!(re.find("ab++++cd").unwrap().as_str(), "++++");
        assert!(re.is_match("abcd") == false);
    }

    #[test]
    fn multiple_bounded() {
        let re = compiled(|e| {
            e.start_of_line(true).multiple("ab", 2..=5).end_of_line(true);
        });
        assert!(re.is_match("ab") == false);
        assert!(re.is_match("abab"));
        assert!(re.is_match("ababababab"));
        assert!(re.is_match("abababababab") == false);

        let at_least = compiled(|e| {
            e.start_of_line(true).multiple("ab", 2..).end_of_line(true);
        });
        assert!(at_least.is_match("ab") == false);
        assert!(at_least.is_match("abababababab"));
    }

    #[test]
    fn multiple_always_captures() {
        let re = compiled(|e| {
            e.multiple("x", 2..=3);
        });
        let caps = re.captures("xxx").unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), "x");
    }

    #[test]
    fn one_or_more_and_zero_or_more_nest() {
        let re = compiled(|e| {
            e.one_or_more(|e| {
                e.word();
                e.zero_or_more(|e| {
                    e.whitespace();
                });
            });
        });
        assert_eq!(re.find("this is sparta").unwrap().as_str(), "this is sparta");
        assert_eq!(re.find("111 333 777").unwrap().as_str(), "111 333 777");

        let zero = compiled(|e| {
            e.start_of_line(true)
                .zero_or_more(|e| {
                    e.word();
                })
                .end_of_line(true);
        });
        assert!(zero.is_match(""));
        assert!(zero.is_match("spartaaa"));
    }

    #[test]
    fn captures_by_position_and_name() {
        let re = compiled(|e| {
            e.start_of_line(true).capture(|e| {
                e.word();
            });
        });
        let caps = re.captures("Jerry scored 5 goals!").unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), "Jerry");

        let re = compiled(|e| {
            e.find("scored ").named_capture("goals", |e| {
                e.word();
            });
        });
        let caps = re.captures("Jerry scored 5 goals!").unwrap();
        assert_eq!(&caps["goals"], "5");
    }

    #[test]
    fn unnamed_captures_accumulate_positionally() {
        let re = compiled(|e| {
            e.capture(|e| {
                e.word();
            })
            .find(" ")
            .capture(|e| {
                e.integer();
            });
        });
        let caps = re.captures("goals 5").unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), "goals");
        assert_eq!(caps.get(2).unwrap().as_str(), "5");
    }

    #[test]
    fn alternation_widens_one_top_level_group() {
        let mut e = Expression::new();
        e.find("A").branch("B").branch("C");
        // Three branches of a single group, not nested pairwise alternation.
        assert_eq!(e.pattern(), "(?:(?:A))|(?:(?:B))|(?:(?:C))");

        let re = e.compile().unwrap();
        assert!(re.is_match("xxAxx"));
        assert!(re.is_match("xxBxx"));
        assert!(re.is_match("xxCxx"));
        assert!(re.is_match("xxDxx") == false);
    }

    #[test]
    fn alternation_group_markers_insert_once() {
        let mut e = Expression::new();
        e.find("http://").alternatively().find("ftp://");
        let once = e.pattern();
        assert_eq!(once.matches("(?:(?:").count(), 2);
        assert!(once.starts_with("(?:"));
        assert!(once.ends_with(")"));

        let re = e.compile().unwrap();
        assert!(re.is_match("ftp://ftp.google.com/"));
        assert!(re.is_match("http://www.google.com"));
    }

    #[test]
    fn alternation_keeps_prior_anchors() {
        let mut e = Expression::new();
        e.start_of_line(true)
            .end_of_line(true)
            .find("cat")
            .branch("dog");
        assert_eq!(e.pattern(), "^(?:(?:cat))|(?:(?:dog))$");

        let re = e.compile().unwrap();
        assert!(re.is_match("cat heads the line"));
        assert!(re.is_match("trails the dog"));
        assert!(re.is_match("a cat naps") == false);
    }

    #[test]
    fn anchor_after_alternation_fails_to_compile() {
        // The anchor setters and the alternation markers share the prefix;
        // the last writer wins, leaving an unbalanced group. Callers should
        // anchor first, then alternate.
        let mut e = Expression::new();
        e.find("a").branch("b").start_of_line(true);

        let err = e.compile().unwrap_err();
        assert!(matches!(err, Error::Compile { .. }));
        assert_eq!(err.pattern(), Some("^(?:a))|(?:(?:b))"));
    }

    #[test]
    fn start_of_line_is_idempotent_and_clearable() {
        let mut once = Expression::new();
        once.start_of_line(true);
        let mut twice = Expression::new();
        twice.start_of_line(true).start_of_line(true);
        assert_eq!(once.pattern(), twice.pattern());

        let mut cleared = Expression::new();
        cleared.start_of_line(true).find("abc").start_of_line(false);
        assert_eq!(cleared.pattern(), "(?:abc)");
    }

    #[test]
    fn line_anchors() {
        let re = compiled(|e| {
            e.start_of_line(true).find("abc");
        });
        assert!(re.is_match("abcdefg"));
        assert!(re.is_match("xxxabc") == false);
        // Without the multiline modifier, `^` only matches the string start.
        assert!(re.is_match("xxx\nabcdefg") == false);

        let multi = {
            let mut e = Expression::with_modifiers(Modifiers::MULTILINE);
            e.start_of_line(true).find("abc");
            e.compile().unwrap()
        };
        assert!(multi.is_match("xxx\nabcdefg"));
        assert!(multi.is_match("xxx\nxxxabc") == false);

        let end = {
            let mut e = Expression::with_modifiers(Modifiers::MULTILINE);
            e.find("abc").end_of_line(true);
            e.compile().unwrap()
        };
        assert!(end.is_match("xxxabc\nxxx"));
        assert!(end.is_match("xxx\nxxabcx") == false);
    }

    #[test]
    fn string_anchors_ignore_embedded_lines() {
        let start = {
            let mut e = Expression::with_modifiers(Modifiers::MULTILINE);
            e.start_of_string(true).find("abc");
            e.compile().unwrap()
        };
        assert!(start.is_match("abcdefg\nxxx"));
        assert!(start.is_match("xxx\nabcdefg") == false);

        let end = {
            let mut e = Expression::with_modifiers(Modifiers::MULTILINE);
            e.find("abc").end_of_string(true);
            e.compile().unwrap()
        };
        assert!(end.is_match("xxx\nxxxabc"));
        assert!(end.is_match("xxxabc\nxxx") == false);
    }

    #[test]
    fn modifiers_default_off() {
        let re = compiled(|e| {
            e.find("a").anything().find("b");
        });
        assert!(re.is_match("axxxb"));
        assert!(re.is_match("AxxxB") == false);
        assert!(re.is_match("a\nb") == false);
    }

    #[test]
    fn ignorecase_modifier() {
        let mut e = Expression::with_modifiers(Modifiers::CASE_INSENSITIVE);
        e.find("a").anything().find("b");
        let re = e.compile().unwrap();
        assert!(re.is_match("AxxxB"));
        assert!(re.is_match("a\nb") == false);
    }

    #[test]
    fn multiline_modifier_crosses_line_breaks() {
        let mut e = Expression::with_modifiers(Modifiers::MULTILINE);
        e.find("a").anything().find("b");
        let re = e.compile().unwrap();
        assert!(re.is_match("a\nb"));
        assert!(re.is_match("AxxxB") == false);

        let mut e =
            Expression::with_modifiers(Modifiers::CASE_INSENSITIVE | Modifiers::MULTILINE);
        e.find("a").anything().find("b");
        let re = e.compile().unwrap();
        assert!(re.is_match("AxxxB"));
        assert!(re.is_match("a\nb"));
    }

    #[test]
    fn whole_line_modifier() {
        let mut e = Expression::with_modifiers(Modifiers::WHOLE_LINE);
        e.find("abc");
        let re = e.compile().unwrap();
        assert!(re.is_match("abc"));
        assert!(re.is_match("abcxx") == false);
        assert!(re.is_match("xxabc") == false);
        assert!(re.is_match("abc\nxx"));
        assert!(re.is_match("xx\nabc"));
    }

    #[test]
    fn whole_string_modifier() {
        let mut e = Expression::with_modifiers(Modifiers::WHOLE_STRING);
        e.find("abc");
        let re = e.compile().unwrap();
        assert!(re.is_match("abc"));
        assert!(re.is_match("abcxx") == false);
        assert!(re.is_match("abc\nxx") == false);
        assert!(re.is_match("xx\nabc") == false);
    }

    #[test]
    fn url_round_trip() {
        let mut e = Expression::new();
        e.start_of_line(true)
            .find("http")
            .maybe("s")
            .find("://")
            .maybe("www.")
            .anything_but(" ")
            .end_of_line(true);
        assert_eq!(e.pattern(), r"^(?:http)(?:s)?(?:://)(?:www\.)?(?:[^\ ]*)$");

        let re = e.compile().unwrap();
        assert!(re.is_match("https://www.google.com"));
        assert!(re.is_match("http://google.com"));
        assert!(re.is_match("http://goo gle.com") == false);
        assert!(re.is_match("htp://google.com") == false);
    }

    #[test]
    fn display_shows_the_pattern() {
        let mut e = Expression::new();
        e.find("abc").maybe("d");
        assert_eq!(e.to_string(), "(?:abc)(?:d)?");
    }
}
