//! Shared building blocks.

use crate::ast::Literal;
use crate::class::{perl_class, CharClass, PerlClass};

pub const LINE_START: Literal = Literal::from_static("^");
pub const LINE_END: Literal = Literal::from_static("$");
pub const TEXT_START: Literal = Literal::from_static(r"\A");
pub const TEXT_END: Literal = Literal::from_static(r"\z");
pub const ASCII_BOUNDARY: Literal = Literal::from_static(r"\b");
pub const NOT_ASCII_BOUNDARY: Literal = Literal::from_static(r"\B");

/// Any character; add `Flags::MATCH_NEW_LINE` to include `\n`.
pub const ANY: Literal = Literal::from_static(".");

pub const DIGIT: CharClass = perl_class(PerlClass::Digit);
pub const WHITESPACE: CharClass = perl_class(PerlClass::Whitespace);
pub const WORD_CHARACTER: CharClass = perl_class(PerlClass::Word);
