use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Behaviour toggles scoped to a group.
    ///
    /// Combine several with `|`, e.g. `Flags::CASE_INSENSITIVE | Flags::MULTI_LINE`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Flags: u8 {
        /// `i`: letters match both upper and lower case.
        const CASE_INSENSITIVE = 0b0001;
        /// `m`: `^` and `$` match at line boundaries as well as text boundaries.
        const MULTI_LINE = 0b0010;
        /// `s`: `.` also matches `\n`.
        const MATCH_NEW_LINE = 0b0100;
        /// `U`: swap the meaning of `x*` and `x*?`, `x+` and `x+?`, and so on.
        const UNGREEDY = 0b1000;
    }
}

impl fmt::Display for Flags {
    /// Writes the letters of every set flag in canonical `imsU` order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LETTERS: [(Flags, char); 4] = [
            (Flags::CASE_INSENSITIVE, 'i'),
            (Flags::MULTI_LINE, 'm'),
            (Flags::MATCH_NEW_LINE, 's'),
            (Flags::UNGREEDY, 'U'),
        ];
        for (flag, letter) in LETTERS {
            if self.contains(flag) {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Flags;

    #[test]
    fn all_flags_render_in_canonical_order() {
        let flags = Flags::UNGREEDY | Flags::MATCH_NEW_LINE | Flags::MULTI_LINE | Flags::CASE_INSENSITIVE;
        assert_eq!(flags.to_string(), "imsU");
    }

    #[test]
    fn subset_of_flags() {
        let flags = Flags::CASE_INSENSITIVE | Flags::MATCH_NEW_LINE;
        assert_eq!(flags.to_string(), "is");
    }

    #[test]
    fn empty_set_renders_nothing() {
        assert_eq!(Flags::empty().to_string(), "");
    }
}
