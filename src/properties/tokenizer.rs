//! logos-based tokenizer for declarative properties files.
//!
//! Only the structural tokens matter to the parser: names, `=`, braces and
//! line ends. Value text after `=` is taken verbatim from the source by span,
//! so characters that do not form a token (path separators and the like)
//! simply lex as errors and are skipped.

use logos::Logos;

/// Properties token produced by the lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\f]+")]
#[logos(skip r"//[^\n]*")]
pub enum Token {
    /// Line end. Entries are newline-terminated.
    #[token("\n")]
    Newline,

    /// Double-quoted string literal.
    #[regex(r#""[^"\n]*""#)]
    StringLiteral,

    /// Number: integer or float, possibly negative.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// Identifier: block names, ids, keys and bare enum values.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_.\-]*")]
    Ident,

    /// `=`
    #[token("=")]
    Equals,

    /// `,`
    #[token(",")]
    Comma,

    /// `{`
    #[token("{")]
    BraceOpen,

    /// `}`
    #[token("}")]
    BraceClose,
}
