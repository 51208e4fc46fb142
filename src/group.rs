use std::fmt;

use crate::ast::{Pattern, Regexp};
use crate::flags::Flags;

/// How a group participates in capturing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Capture {
    /// Numbered capture, the default for a fresh group.
    #[default]
    Capturing,
    /// Capture reported under a name: `(?P<name>...)`.
    Named(String),
    /// Plain grouping: `(?:...)`.
    NonCapturing,
}

/// A node in parentheses, optionally scoping flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    re: Box<Regexp>,
    capture: Capture,
    set_flags: Flags,
    unset_flags: Flags,
}

impl Group {
    pub fn new(re: impl Into<Regexp>) -> Self {
        Group {
            re: Box::new(re.into()),
            capture: Capture::default(),
            set_flags: Flags::empty(),
            unset_flags: Flags::empty(),
        }
    }

    pub fn inner(&self) -> &Regexp {
        &self.re
    }

    pub fn capture_mode(&self) -> &Capture {
        &self.capture
    }

    /// Makes the group a numbered capture, dropping any name.
    pub fn capture(mut self) -> Self {
        self.capture = Capture::Capturing;
        self
    }

    /// Makes the group a named capture.
    pub fn capture_as(mut self, name: impl Into<String>) -> Self {
        self.capture = Capture::Named(name.into());
        self
    }

    /// Makes the group non-capturing, dropping any name.
    pub fn no_capture(mut self) -> Self {
        self.capture = Capture::NonCapturing;
        self
    }

    /// Enables `flags` inside the group, replacing previously set flags.
    pub fn set_flags(mut self, flags: Flags) -> Self {
        self.set_flags = flags;
        self
    }

    /// Explicitly disables `flags` inside the group, replacing previously
    /// unset flags.
    ///
    /// This differs from not setting a flag: a flag set on an enclosing
    /// group also applies here unless it is unset.
    pub fn unset_flags(mut self, flags: Flags) -> Self {
        self.unset_flags = flags;
        self
    }

    fn flags_directive(&self) -> String {
        let mut out = String::new();
        if !self.set_flags.is_empty() {
            out.push_str(&self.set_flags.to_string());
        }
        if !self.unset_flags.is_empty() {
            out.push('-');
            out.push_str(&self.unset_flags.to_string());
        }
        out
    }
}

impl Pattern for Group {
    fn group(self) -> Group {
        self
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        if let Capture::Named(name) = &self.capture {
            write!(f, "?P<{name}>")?;
        }

        let flags = self.flags_directive();
        if self.capture == Capture::NonCapturing {
            write!(f, "?{flags}:")?;
        } else if !flags.is_empty() {
            // capturing groups scope flags with a nested directive
            write!(f, "(?{flags})")?;
        }

        fmt::Display::fmt(&self.re, f)?;
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::literal;

    fn hello() -> Group {
        literal("hello").group()
    }

    #[test]
    fn default_group_captures() {
        assert_eq!(hello().render(), "(hello)");
        assert_eq!(hello().capture_mode(), &Capture::Capturing);
    }

    #[test]
    fn no_capture() {
        assert_eq!(hello().no_capture().render(), "(?:hello)");
    }

    #[test]
    fn named_capture() {
        assert_eq!(hello().capture_as("test").render(), "(?P<test>hello)");
    }

    #[test]
    fn capture_clears_name_and_no_capture() {
        assert_eq!(hello().capture_as("test").capture().render(), "(hello)");
        assert_eq!(hello().no_capture().capture().render(), "(hello)");
        assert_eq!(hello().capture_as("test").no_capture().render(), "(?:hello)");
    }

    #[test]
    fn set_flags_inside_capturing_group() {
        let group = hello().set_flags(Flags::CASE_INSENSITIVE | Flags::MULTI_LINE);
        assert_eq!(group.render(), "((?im)hello)");
    }

    #[test]
    fn unset_flags_inside_capturing_group() {
        let group = hello().unset_flags(Flags::CASE_INSENSITIVE | Flags::MULTI_LINE);
        assert_eq!(group.render(), "((?-im)hello)");
    }

    #[test]
    fn set_and_unset_flags() {
        let group = hello()
            .set_flags(Flags::CASE_INSENSITIVE)
            .unset_flags(Flags::MULTI_LINE);
        assert_eq!(group.render(), "((?i-m)hello)");
    }

    #[test]
    fn flags_on_non_capturing_group() {
        let group = hello()
            .no_capture()
            .set_flags(Flags::CASE_INSENSITIVE | Flags::MULTI_LINE);
        assert_eq!(group.render(), "(?im:hello)");
    }

    #[test]
    fn named_capture_with_flags() {
        let group = hello().capture_as("test").set_flags(Flags::CASE_INSENSITIVE);
        assert_eq!(group.render(), "(?P<test>(?i)hello)");
    }

    #[test]
    fn set_flags_replaces_previous_flags() {
        let group = hello()
            .set_flags(Flags::CASE_INSENSITIVE)
            .set_flags(Flags::UNGREEDY);
        assert_eq!(group.render(), "((?U)hello)");
    }

    #[test]
    fn grouping_twice_does_not_nest() {
        assert_eq!(hello().group().group().render(), "(hello)");
    }
}
