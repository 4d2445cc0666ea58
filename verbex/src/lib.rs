/*!
A fluent, verbal regular expression builder.

Patterns are assembled by chaining semantically named operations such as
`find`, `maybe`, `anything`, `one_or_more`, `capture` and `alternatively`,
instead of writing raw regex syntax. The builder accumulates the pattern string
incrementally and, on finalization, compiles it with [`regex`], which is the
only matching engine involved; this crate emits patterns, it never parses or
executes them.

## Features
- Literal safety: caller text is escaped at a single chokepoint
  ([`expr::Fragment`]), so metacharacters in user input always match
  themselves. Pre-built [`regex::Regex`] values and other expressions
  compose verbatim.
- Top-level alternation: every [`alternatively`](expr::Expression::alternatively)
  call widens one group, so `A`, `B`, `C` become three branches, never nested
  pairs.
- Two assembly styles: a scoped definition compiled in one atomic call
  ([`scope::express`]), and an incremental chain with an explicit terminal
  ([`chain::Chain`]).
- Modifiers (`ignorecase`, `multiline`, `whole_line`, `whole_string`) mapped
  onto the engine's flags at finalization.
*/
//! ## Usage
//! ```
//! use verbex::scope::express;
//!
//! let re = express().call(|e| {
//!     e.start_of_line(true)
//!         .find("http")
//!         .maybe("s")
//!         .find("://")
//!         .maybe("www.")
//!         .anything_but(" ")
//!         .end_of_line(true);
//! })?;
//!
//! assert!(re.is_match("https://www.google.com"));
//! assert!(re.is_match("http://goo gle.com") == false);
//! # Ok::<(), verbex::Error>(())
//! ```
//!
//! The same assembly as an incremental chain:
//! ```
//! use verbex::chain::Chain;
//!
//! let re = Chain::new()
//!     .start_of_line(true)
//!     .then("http")
//!     .maybe("s")
//!     .then("://")
//!     .maybe("www.")
//!     .anything_but(" ")
//!     .end_of_line()?;
//!
//! assert_eq!(re.as_str(), r"^(?:http)(?:s)?(?:://)(?:www\.)?(?:[^\ ]*)$");
//! # Ok::<(), verbex::Error>(())
//! ```
//!
//! Or against a plain [`expr::Expression`], finalized explicitly:
//! ```
//! use verbex::expr::Expression;
//!
//! let mut link = Expression::new();
//! link.find("http://").branch("ftp://");
//!
//! let re = link.compile()?;
//! assert!(re.is_match("ftp://ftp.google.com/"));
//! # Ok::<(), verbex::Error>(())
//! ```

pub mod chain;
mod error;
pub mod expr;
pub mod scope;

pub use error::Error;

#[cfg(test)]
mod tests {
    use crate::{chain::Chain, expr::Modifiers, scope::express};

    #[test]
    fn url() {
        let re = express()
            .call(|e| {
                e.start_of_line(true)
                    .find("http")
                    .maybe("s")
                    .find("://")
                    .maybe("www.")
                    .anything_but(" ")
                    .end_of_line(true);
            })
            .unwrap();
        assert_eq!(re.as_str(), r"^(?:http)(?:s)?(?:://)(?:www\.)?(?:[^\ ]*)$");
        assert!(re.is_match("https://www.google.com"));
        assert!(re.is_match("http://google.com"));
        assert!(re.is_match("http://goo gle.com") == false);
        assert!(re.is_match("htp://google.com") == false);
    }

    #[test]
    fn scoped_and_chained_agree() {
        let scoped = express()
            .modifiers(Modifiers::CASE_INSENSITIVE)
            .call(|e| {
                e.find("v").integer();
            })
            .unwrap();
        let chained = Chain::new().then("V").integer().end().unwrap();
        assert!(scoped.is_match("V42"));
        assert!(chained.is_match("V42"));
        assert_eq!(scoped.as_str().to_lowercase(), chained.as_str().to_lowercase());
    }
}
