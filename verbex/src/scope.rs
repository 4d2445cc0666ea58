/*!
Scoped construction: evaluate a self-contained definition against a fresh
builder and compile it into a matcher as one atomic step.

```
use verbex::scope::express;

let re = express().call(|e| {
    e.find("scored ");
    e.named_capture("goals", |e| {
        e.word();
    });
})?;

let caps = re.captures("Jerry scored 5 goals!").unwrap();
assert_eq!(&caps["goals"], "5");
# Ok::<(), verbex::Error>(())
```

With modifiers, either typed or parsed from tokens:

```
use verbex::{expr::Modifiers, scope::express};

let re = express()
    .modifiers(Modifiers::from_tokens(["ignorecase", "multiline"])?)
    .call(|e| {
        e.find("a").anything().find("b");
    })?;
assert!(re.is_match("A\nB"));
# Ok::<(), verbex::Error>(())
```

## Mixing in caller-defined operations

A definition can invoke operations by name through [`Scope::call`]. Names
the builder vocabulary does not recognize are forwarded to the [`Helpers`]
collaborator passed at construction; a name neither side claims fails the
whole construction with [`Error::MissingOperation`], with no partial
success.

```
use verbex::{expr::Expression, scope::{express, Helpers}};

struct Shout;

impl Helpers for Shout {
    fn call(&mut self, name: &str, arg: Option<&str>, expr: &mut Expression) -> bool {
        match name {
            "shout" => {
                expr.find(arg.unwrap_or_default().to_uppercase());
                true
            }
            _ => false,
        }
    }
}

let mut helpers = Shout;
let re = express()
    .helpers(&mut helpers)
    .call(|e| {
        e.find("they ");
        e.call("shout", Some("hey"));
    })?;
assert!(re.is_match("they HEY"));
# Ok::<(), verbex::Error>(())
```
*/
use std::ops::{Deref, DerefMut};

use bon::builder;
use regex::Regex;

use crate::{
    expr::{Expression, Modifiers},
    Error,
};

/// Caller-defined operations a scoped definition may invoke by name.
///
/// This is the explicit stand-in for the reference's enclosing-scope
/// delegation: instead of capturing the caller's scope, a scoped assembly is
/// handed one collaborator and asks it for every name it does not recognize
/// itself. Return `true` to claim the operation.
///
/// Any `FnMut(&str, Option<&str>, &mut Expression) -> bool` closure is a
/// valid collaborator.
pub trait Helpers {
    fn call(&mut self, name: &str, arg: Option<&str>, expr: &mut Expression) -> bool;
}

impl<F> Helpers for F
where
    F: FnMut(&str, Option<&str>, &mut Expression) -> bool,
{
    fn call(&mut self, name: &str, arg: Option<&str>, expr: &mut Expression) -> bool {
        self(name, arg, expr)
    }
}

/// The builder a scoped definition runs against.
///
/// Dereferences to [`Expression`], so the whole typed vocabulary is available
/// directly; [`Scope::call`] adds by-name dispatch with [`Helpers`]
/// fallback for everything else. A typed operation returns
/// `&mut Expression`, on which `call` does not exist, so issue by-name calls
/// as their own statements rather than chained onto typed ones.
pub struct Scope<'h> {
    expr: Expression,
    helpers: Option<&'h mut dyn Helpers>,
    /// First unresolved operation, surfaced at finalization.
    missing: Option<Error>,
}

impl<'h> Scope<'h> {
    fn new(modifiers: Modifiers, helpers: Option<&'h mut dyn Helpers>) -> Self {
        Scope {
            expr: Expression::with_modifiers(modifiers),
            helpers,
            missing: None,
        }
    }

    /// Invokes an operation by name.
    ///
    /// The names of all value and no-argument operations of the vocabulary
    /// are recognized, aliases included; combinators taking definitions have
    /// no by-name form, since a name cannot carry one. For anchor setters,
    /// an argument of `"false"` disables the anchor. Unrecognized names go
    /// to the [`Helpers`] collaborator; unclaimed ones fail the assembly at
    /// finalization.
    pub fn call(&mut self, name: &str, arg: Option<&str>) -> &mut Self {
        let value = arg.unwrap_or_default();
        let enable = arg != Some("false");
        match name {
            "find" | "then" => {
                self.expr.find(value);
            }
            "maybe" => {
                self.expr.maybe(value);
            }
            "anything" => {
                self.expr.anything();
            }
            "anything_but" => {
                self.expr.anything_but(value);
            }
            "line_break" | "br" => {
                self.expr.line_break();
            }
            "tab" => {
                self.expr.tab();
            }
            "word" => {
                self.expr.word();
            }
            "letter" => {
                self.expr.letter();
            }
            "digit" => {
                self.expr.digit();
            }
            "integer" => {
                self.expr.integer();
            }
            "whitespace" => {
                self.expr.whitespace();
            }
            "hex" => {
                self.expr.hex();
            }
            "any_of" | "any" => {
                self.expr.any_of(value);
            }
            "start_of_line" => {
                self.expr.start_of_line(enable);
            }
            "end_of_line" => {
                self.expr.end_of_line(enable);
            }
            "start_of_string" => {
                self.expr.start_of_string(enable);
            }
            "end_of_string" => {
                self.expr.end_of_string(enable);
            }
            "alternatively" | "branch" => match arg {
                Some(value) => {
                    self.expr.branch(value);
                }
                None => {
                    self.expr.alternatively();
                }
            },
            "begin_capture" => match arg {
                Some(name) => {
                    self.expr.begin_named_capture(name);
                }
                None => {
                    self.expr.begin_capture();
                }
            },
            "end_capture" => {
                self.expr.end_capture();
            }
            _ => {
                let claimed = match self.helpers.as_deref_mut() {
                    Some(helpers) => helpers.call(name, arg, &mut self.expr),
                    None => false,
                };
                if !claimed && self.missing.is_none() {
                    self.missing = Some(Error::MissingOperation(name.to_owned()));
                }
            }
        }
        self
    }

    fn finish(self) -> Result<Regex, Error> {
        if let Some(missing) = self.missing {
            return Err(missing);
        }
        self.expr.compile()
    }
}

impl Deref for Scope<'_> {
    type Target = Expression;

    fn deref(&self) -> &Expression {
        &self.expr
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut Expression {
        &mut self.expr
    }
}

/// Evaluates `definition` against a fresh builder and compiles the result.
///
/// The definition is the finishing argument; modifiers and the [`Helpers`]
/// collaborator are optional setters. See the [module docs](self) for
/// examples.
#[builder]
pub fn express<'h, F>(
    #[builder(finish_fn)] definition: F,
    #[builder(default)] modifiers: Modifiers,
    helpers: Option<&'h mut dyn Helpers>,
) -> Result<Regex, Error>
where
    F: FnOnce(&mut Scope<'h>),
{
    let mut scope = Scope::new(modifiers, helpers);
    definition(&mut scope);
    scope.finish()
}
