use std::str::FromStr;

use bitflags::bitflags;

use crate::Error;

bitflags! {
    /// Modifiers accumulated at construction time and mapped to the host
    /// engine's flags at finalization.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        /// Token `ignorecase`: case-insensitive matching.
        const CASE_INSENSITIVE = 1 << 0;
        /// Token `multiline`: `^`/`$` match at embedded line boundaries and
        /// `anything` crosses line breaks.
        const MULTILINE = 1 << 1;
        /// Token `whole_line`: the assembled pattern must match a whole line.
        const WHOLE_LINE = 1 << 2;
        /// Token `whole_string`: the assembled pattern must match the whole
        /// string, embedded line breaks included.
        const WHOLE_STRING = 1 << 3;
    }
}

impl Modifiers {
    /// Parses a set of modifier tokens.
    ///
    /// ```
    /// use verbex::expr::Modifiers;
    ///
    /// let modifiers = Modifiers::from_tokens(["ignorecase", "multiline"])?;
    /// assert_eq!(modifiers, Modifiers::CASE_INSENSITIVE | Modifiers::MULTILINE);
    /// # Ok::<(), verbex::Error>(())
    /// ```
    ///
    /// An unrecognized token is a caller error:
    ///
    /// ```
    /// use verbex::{expr::Modifiers, Error};
    ///
    /// assert!(matches!(
    ///     Modifiers::from_tokens(["extended"]),
    ///     Err(Error::UnknownModifier(token)) if token == "extended",
    /// ));
    /// ```
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<Self, Error> {
        let mut modifiers = Modifiers::empty();
        for token in tokens {
            modifiers |= token.parse()?;
        }
        Ok(modifiers)
    }
}

impl FromStr for Modifiers {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Error> {
        Ok(match token {
            "ignorecase" => Modifiers::CASE_INSENSITIVE,
            "multiline" => Modifiers::MULTILINE,
            "whole_line" => Modifiers::WHOLE_LINE,
            "whole_string" => Modifiers::WHOLE_STRING,
            _ => return Err(Error::UnknownModifier(token.to_owned())),
        })
    }
}
