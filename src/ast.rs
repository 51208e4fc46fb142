use std::borrow::Cow;
use std::fmt;

use crate::class::CharClass;
use crate::group::Group;
use crate::repeat::Repeat;

/// One node of an uncompiled regular expression.
///
/// Every node renders itself through `fmt::Display`; children are rendered
/// recursively, so the text of the root is the whole pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Regexp {
    Literal(Literal),
    Sequence(Sequence),
    Group(Group),
    Repeat(Repeat),
    Class(CharClass),
}

/// Operations shared by every node kind.
pub trait Pattern: Into<Regexp> + fmt::Display {
    /// The pattern text, ready to be handed to a regex compiler.
    fn render(&self) -> String {
        self.to_string()
    }

    /// Wraps the node in a capturing group.
    fn group(self) -> Group {
        Group::new(self)
    }

    /// Repeats the node zero or more times. Parentheses are added on render
    /// only when the node needs them.
    fn repeat(self) -> Repeat {
        Repeat::new(self)
    }

    /// Matches the node zero or one times.
    fn optional(self) -> Repeat {
        self.repeat().min(0).max(1)
    }

    /// Renders the node and compiles the text with the `regex` crate.
    fn compile(&self) -> crate::Result<regex::Regex> {
        crate::compile::compile(&self.render())
    }
}

impl Pattern for Regexp {
    fn group(self) -> Group {
        match self {
            Regexp::Group(group) => group,
            other => Group::new(other),
        }
    }
}

impl fmt::Display for Regexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regexp::Literal(lit) => fmt::Display::fmt(lit, f),
            Regexp::Sequence(seq) => fmt::Display::fmt(seq, f),
            Regexp::Group(group) => fmt::Display::fmt(group, f),
            Regexp::Repeat(rep) => fmt::Display::fmt(rep, f),
            Regexp::Class(class) => fmt::Display::fmt(class, f),
        }
    }
}

/// Pattern text emitted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal(Cow<'static, str>);

impl Literal {
    pub const fn from_static(text: &'static str) -> Self {
        Literal(Cow::Borrowed(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Pattern for Literal {}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns a node that renders `text` verbatim. No validation is done.
pub fn raw(text: impl Into<Cow<'static, str>>) -> Literal {
    Literal(text.into())
}

/// Returns a node matching `text` literally, with metacharacters escaped.
pub fn literal(text: &str) -> Literal {
    raw(regex::escape(text))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// Elements follow each other.
    Concat,
    /// Elements are alternatives (`|`).
    Alternate,
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Concat => "",
            Separator::Alternate => "|",
        }
    }
}

/// Ordered list of nodes joined by a separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    items: Vec<Regexp>,
    separator: Separator,
}

impl Sequence {
    pub fn items(&self) -> &[Regexp] {
        &self.items
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// Returns the sequence with `item` added at the end.
    pub fn then(mut self, item: impl Into<Regexp>) -> Self {
        self.items.push(item.into());
        self
    }
}

impl Pattern for Sequence {}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(self.separator.as_str())?;
            }
            fmt::Display::fmt(item, f)?;
        }
        Ok(())
    }
}

/// Returns a node expecting each item to appear in order.
pub fn sequence<I>(items: I) -> Sequence
where
    I: IntoIterator,
    I::Item: Into<Regexp>,
{
    Sequence {
        items: items.into_iter().map(Into::into).collect(),
        separator: Separator::Concat,
    }
}

/// Returns a capturing group matching any of `choices`, preferring earlier ones.
pub fn one_of<I>(choices: I) -> Group
where
    I: IntoIterator,
    I::Item: Into<Regexp>,
{
    Group::new(Sequence {
        items: choices.into_iter().map(Into::into).collect(),
        separator: Separator::Alternate,
    })
}

impl From<Literal> for Regexp {
    fn from(lit: Literal) -> Self {
        Regexp::Literal(lit)
    }
}

impl From<Sequence> for Regexp {
    fn from(seq: Sequence) -> Self {
        Regexp::Sequence(seq)
    }
}

impl From<Group> for Regexp {
    fn from(group: Group) -> Self {
        Regexp::Group(group)
    }
}

impl From<Repeat> for Regexp {
    fn from(rep: Repeat) -> Self {
        Regexp::Repeat(rep)
    }
}

impl From<CharClass> for Regexp {
    fn from(class: CharClass) -> Self {
        Regexp::Class(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_is_not_escaped() {
        assert_eq!(raw(r"\zhello\z").render(), r"\zhello\z");
    }

    #[test]
    fn literal_escapes_metacharacters() {
        assert_eq!(literal(r"\zhello\z").render(), r"\\zhello\\z");
        assert_eq!(literal("a.b*c").render(), r"a\.b\*c");
    }

    #[test]
    fn sequence_concatenates() {
        let seq = sequence([literal("hello"), literal("world")]);
        assert_eq!(seq.render(), "helloworld");
    }

    #[test]
    fn then_appends_to_a_sequence() {
        let seq = sequence([literal("a")]).then(literal("b").repeat());
        assert_eq!(seq.render(), "ab*");
        assert_eq!(seq.items().len(), 2);
    }

    #[test]
    fn one_of_joins_with_pipe_inside_a_group() {
        assert_eq!(one_of([literal("a"), literal("bc")]).render(), "(a|bc)");
    }

    #[test]
    fn empty_alternation_renders_without_error() {
        assert_eq!(one_of(Vec::<Regexp>::new()).render(), "()");
    }

    #[test]
    fn grouping_a_group_keeps_it() {
        let group: Regexp = one_of([literal("a"), literal("b")]).into();
        assert_eq!(group.group().capture_as("x").render(), "(?P<x>a|b)");
    }

    #[test]
    fn render_is_repeatable() {
        let re: Regexp = sequence([literal("a").repeat(), literal("b").optional()]).into();
        let first = re.render();
        assert_eq!(first, re.render());
        assert_eq!(first, "a*b?");
    }
}
