//! Character classes and their union.
//!
//! A class renders in two layers: the *body* that may sit inside a bracket
//! expression (`a-z`, `[:alpha:]`, `\pL`) and the outer form used when the
//! class stands on its own (`[a-z]`, `[[:alpha:]]`, `\pL`). Unions and
//! appended sets nest bodies inside a single bracket.

use std::fmt;

use crate::ast::{one_of, Pattern, Regexp};

/// The Perl shorthand classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerlClass {
    /// `\d`
    Digit,
    /// `\s`
    Whitespace,
    /// `\w`
    Word,
}

impl PerlClass {
    fn letter(self, negated: bool) -> char {
        let letter = match self {
            PerlClass::Digit => 'd',
            PerlClass::Whitespace => 's',
            PerlClass::Word => 'w',
        };
        if negated {
            letter.to_ascii_uppercase()
        } else {
            letter
        }
    }
}

/// A set of characters any one of which matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharClass {
    /// Explicit characters plus nested classes: `[abc]`.
    Set {
        chars: Vec<char>,
        classes: Vec<CharClass>,
        negated: bool,
    },
    /// Inclusive range: `[a-z]`.
    Range { start: char, end: char, negated: bool },
    /// POSIX class: `[[:alpha:]]`.
    Ascii { name: String, negated: bool },
    /// Unicode property: `\p{Greek}`.
    Unicode { name: String, negated: bool },
    /// Perl shorthand: `\d`.
    Perl { kind: PerlClass, negated: bool },
}

/// Returns a class matching any of `chars`.
pub fn char_set(chars: impl IntoIterator<Item = char>) -> CharClass {
    CharClass::Set {
        chars: chars.into_iter().collect(),
        classes: Vec::new(),
        negated: false,
    }
}

/// Returns a class matching any character from `start` to `end`, inclusive.
pub fn char_range(start: char, end: char) -> CharClass {
    CharClass::Range {
        start,
        end,
        negated: false,
    }
}

/// Returns the ASCII class called `name`, e.g. `alpha` or `digit`.
pub fn ascii_class(name: impl Into<String>) -> CharClass {
    CharClass::Ascii {
        name: name.into(),
        negated: false,
    }
}

/// Returns the Unicode class called `name`, e.g. `Greek` or `L`.
pub fn unicode_class(name: impl Into<String>) -> CharClass {
    CharClass::Unicode {
        name: name.into(),
        negated: false,
    }
}

pub const fn perl_class(kind: PerlClass) -> CharClass {
    CharClass::Perl {
        kind,
        negated: false,
    }
}

impl CharClass {
    pub fn is_negated(&self) -> bool {
        match self {
            CharClass::Set { negated, .. }
            | CharClass::Range { negated, .. }
            | CharClass::Ascii { negated, .. }
            | CharClass::Unicode { negated, .. }
            | CharClass::Perl { negated, .. } => *negated,
        }
    }

    /// ASCII, Unicode and Perl classes carry their negation in their own
    /// syntax, so they can keep either polarity inside any bracket.
    pub fn is_named(&self) -> bool {
        matches!(
            self,
            CharClass::Ascii { .. } | CharClass::Unicode { .. } | CharClass::Perl { .. }
        )
    }

    fn with_negated(mut self, value: bool) -> Self {
        match &mut self {
            CharClass::Set { negated, .. }
            | CharClass::Range { negated, .. }
            | CharClass::Ascii { negated, .. }
            | CharClass::Unicode { negated, .. }
            | CharClass::Perl { negated, .. } => *negated = value,
        }
        self
    }

    /// Matches exactly the characters this class does not.
    pub fn negate(self) -> Self {
        let negated = self.is_negated();
        self.with_negated(!negated)
    }

    /// Adds `classes` to this one.
    ///
    /// A set keeps its characters and polarity and gains nested classes.
    /// Any other class becomes the first nested member of a new set that
    /// takes over its polarity.
    pub fn append(self, classes: impl IntoIterator<Item = CharClass>) -> Self {
        match self {
            CharClass::Set {
                chars,
                classes: mut nested,
                negated,
            } => {
                nested.extend(classes);
                CharClass::Set {
                    chars,
                    classes: nested,
                    negated,
                }
            }
            other => {
                let negated = other.is_negated();
                let mut nested = vec![other];
                nested.extend(classes);
                CharClass::Set {
                    chars: Vec::new(),
                    classes: nested,
                    negated,
                }
            }
        }
    }

    /// The text of this class as it appears inside a bracket expression.
    pub fn body(&self) -> ClassBody<'_> {
        ClassBody(self)
    }
}

fn write_member(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    if c == '\\' || c == '^' {
        f.write_str("\\")?;
    }
    write!(f, "{c}")
}

/// Display adapter for [`CharClass::body`].
pub struct ClassBody<'a>(&'a CharClass);

impl fmt::Display for ClassBody<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            CharClass::Set {
                chars,
                classes,
                negated,
            } => {
                if *negated {
                    f.write_str("^")?;
                }
                for &c in chars {
                    write_member(f, c)?;
                }
                for class in classes {
                    fmt::Display::fmt(&class.body(), f)?;
                }
                Ok(())
            }
            CharClass::Range {
                start,
                end,
                negated,
            } => {
                if *negated {
                    f.write_str("^")?;
                }
                write_member(f, *start)?;
                f.write_str("-")?;
                write_member(f, *end)
            }
            CharClass::Ascii { name, negated } => {
                let caret = if *negated { "^" } else { "" };
                write!(f, "[:{caret}{name}:]")
            }
            CharClass::Unicode { name, negated } => {
                f.write_str(if *negated { r"\P" } else { r"\p" })?;
                if name.chars().count() > 1 {
                    write!(f, "{{{name}}}")
                } else {
                    f.write_str(name)
                }
            }
            CharClass::Perl { kind, negated } => write!(f, "\\{}", kind.letter(*negated)),
        }
    }
}

impl Pattern for CharClass {}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharClass::Set { .. } | CharClass::Range { .. } | CharClass::Ascii { .. } => {
                write!(f, "[{}]", self.body())
            }
            CharClass::Unicode { .. } | CharClass::Perl { .. } => {
                fmt::Display::fmt(&self.body(), f)
            }
        }
    }
}

fn bracket(classes: Vec<CharClass>, negated: bool) -> CharClass {
    CharClass::Set {
        chars: Vec::new(),
        classes,
        negated,
    }
}

/// Joins `classes` into a pattern matching any of them.
///
/// Sets and ranges are split by polarity. When only one polarity is
/// present the result is a single bracket with that polarity; with both,
/// it is an alternation of a plain bracket followed by a negated one.
/// Named classes join the bracket of their own polarity, flipping their
/// local negation when placed in a negated bracket. With no negated set
/// or range, everything lands in one plain bracket.
pub fn union(classes: impl IntoIterator<Item = CharClass>) -> Regexp {
    let mut positive = Vec::new();
    let mut negative = Vec::new();
    let mut named = Vec::new();
    for class in classes {
        if class.is_named() {
            named.push(class);
        } else if class.is_negated() {
            negative.push(class.with_negated(false));
        } else {
            positive.push(class);
        }
    }

    tracing::event!(
        tracing::Level::TRACE,
        operation = "union",
        positive = positive.len() as u64,
        negative = negative.len() as u64,
        named = named.len() as u64
    );

    if negative.is_empty() {
        positive.extend(named);
        return bracket(positive, false).into();
    }

    if positive.is_empty() {
        negative.extend(named.into_iter().map(CharClass::negate));
        return bracket(negative, true).into();
    }

    for class in named {
        if class.is_negated() {
            negative.push(class.negate());
        } else {
            positive.push(class);
        }
    }
    one_of([bracket(positive, false), bracket(negative, true)]).into()
}
