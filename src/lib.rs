//! Compose regular expressions from typed nodes instead of hand-written
//! strings.
//!
//! Nodes are built bottom-up and rendered on demand; parentheses, escaping
//! and quantifier shorthand are chosen during rendering.
//!
//! ```
//! use regen::{literal, one_of, sequence, Pattern, Regexp, LINE_END, LINE_START, WORD_CHARACTER};
//!
//! let re = sequence([
//!     Regexp::from(LINE_START),
//!     one_of([literal("hi"), literal("hello")]).capture_as("greeting").into(),
//!     WORD_CHARACTER.repeat().min(1).optional().into(),
//!     LINE_END.into(),
//! ]);
//! assert_eq!(re.render(), r"^(?P<greeting>hi|hello)(\w+)?$");
//! ```

pub mod ast;
pub mod class;
mod compile;
pub mod constants;
pub mod error;
pub mod flags;
pub mod group;
pub mod repeat;

pub use ast::{literal, one_of, raw, sequence, Literal, Pattern, Regexp, Separator, Sequence};
pub use class::{
    ascii_class, char_range, char_set, perl_class, unicode_class, union, CharClass, PerlClass,
};
pub use compile::compile;
pub use constants::*;
pub use error::{Error, Result};
pub use flags::Flags;
pub use group::{Capture, Group};
pub use repeat::Repeat;
