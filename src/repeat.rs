use std::fmt;

use crate::ast::{Pattern, Regexp};

/// A node repeated some number of times.
///
/// A fresh repetition means "zero or more, greedy" (`*`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat {
    re: Box<Regexp>,
    min: Option<u32>,
    max: Option<u32>,
    ungreedy: bool,
}

impl Repeat {
    pub fn new(re: impl Into<Regexp>) -> Self {
        Repeat {
            re: Box::new(re.into()),
            min: None,
            max: None,
            ungreedy: false,
        }
    }

    pub fn inner(&self) -> &Regexp {
        &self.re
    }

    /// Must appear at least `min` times.
    pub fn min(mut self, min: u32) -> Self {
        self.min = Some(min);
        self
    }

    /// May appear at most `max` times.
    pub fn max(mut self, max: u32) -> Self {
        self.max = Some(max);
        self
    }

    /// Must appear exactly `count` times.
    pub fn exactly(mut self, count: u32) -> Self {
        self.min = Some(count);
        self.max = Some(count);
        self
    }

    /// Prefers more matches. This is the default.
    pub fn greedy(mut self) -> Self {
        self.ungreedy = false;
        self
    }

    /// Prefers fewer matches.
    pub fn ungreedy(mut self) -> Self {
        self.ungreedy = true;
        self
    }

    pub fn is_greedy(&self) -> bool {
        !self.ungreedy
    }
}

impl Pattern for Repeat {}

/// Whether `text`, the rendering of `re`, must be parenthesized before a
/// quantifier can follow it.
fn needs_parens(re: &Regexp, text: &str) -> bool {
    if matches!(re, Regexp::Group(_) | Regexp::Class(_)) {
        return false;
    }
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(_), None, _) => false,
        (Some('\\'), Some(_), None) => false,
        _ => true,
    }
}

impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.re.to_string();
        if needs_parens(&self.re, &text) {
            write!(f, "({text})")?;
        } else {
            f.write_str(&text)?;
        }

        let min = self.min.unwrap_or(0);
        match self.max {
            None => match min {
                0 => f.write_str("*")?,
                1 => f.write_str("+")?,
                n => write!(f, "{{{n},}}")?,
            },
            Some(1) if min == 0 => f.write_str("?")?,
            Some(max) if max == min => write!(f, "{{{min}}}")?,
            Some(max) => write!(f, "{{{min},{max}}}")?,
        }

        if self.ungreedy {
            f.write_str("?")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{literal, raw, Pattern};
    use crate::class::char_set;

    #[test]
    fn defaults_to_zero_or_more() {
        assert_eq!(literal("hello").repeat().render(), "(hello)*");
    }

    #[test]
    fn quantifier_shorthand() {
        let hello = || literal("hello").repeat();
        assert_eq!(hello().min(1).render(), "(hello)+");
        assert_eq!(hello().min(2).render(), "(hello){2,}");
        assert_eq!(hello().max(10).render(), "(hello){0,10}");
        assert_eq!(hello().min(1).max(10).render(), "(hello){1,10}");
        assert_eq!(hello().exactly(5).render(), "(hello){5}");
        assert_eq!(hello().min(0).max(1).render(), "(hello)?");
        assert_eq!(hello().max(1).render(), "(hello)?");
    }

    #[test]
    fn ungreedy_appends_question_mark() {
        assert_eq!(literal("hello").repeat().ungreedy().render(), "(hello)*?");
        assert_eq!(
            literal("hello").repeat().ungreedy().greedy().render(),
            "(hello)*"
        );
    }

    #[test]
    fn single_character_is_not_wrapped() {
        assert_eq!(literal("h").repeat().render(), "h*");
        assert_eq!(literal("é").repeat().render(), "é*");
    }

    #[test]
    fn single_escape_is_not_wrapped() {
        assert_eq!(raw(r"\w").repeat().render(), r"\w*");
        assert_eq!(literal(".").repeat().min(1).render(), r"\.+");
    }

    #[test]
    fn groups_and_classes_are_not_wrapped() {
        assert_eq!(literal("hello").group().repeat().render(), "(hello)*");
        assert_eq!(char_set(['h', 'e', 'y']).repeat().render(), "[hey]*");
    }

    #[test]
    fn empty_text_is_wrapped() {
        assert_eq!(raw("").repeat().render(), "()*");
    }

    #[test]
    fn optional_on_a_repetition_nests() {
        assert_eq!(literal("h").repeat().optional().render(), "(h*)?");
    }

    #[test]
    fn inverted_bounds_render_literally() {
        assert_eq!(literal("a").repeat().min(5).max(2).render(), "a{5,2}");
    }
}
