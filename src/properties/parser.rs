//! Recursive descent parser for properties files.
//!
//! Grammar:
//!
//! ```text
//! document := NL* block NL*
//! block    := Ident Ident? NL* '{' (NL | entry | block)* '}'
//! entry    := Ident '=' <raw text up to end of line or '}'>
//! ```

use logos::Logos;

use super::tokenizer::Token;
use super::Properties;

/// Deepest block nesting accepted before parsing gives up.
pub const MAX_NESTING: usize = 64;

/// Errors from properties parsing and typed value conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected token on line {line}: {message}")]
    UnexpectedToken { line: usize, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
    #[error("invalid value '{value}' for '{key}': expected {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },
}

/// A positioned token.
#[derive(Debug, Clone)]
struct PToken {
    token: Token,
    text: String,
    line: usize,
    byte_start: usize,
    byte_end: usize,
}

/// Replace `/* ... */` comments with spaces, keeping line breaks so that line
/// numbers in errors stay accurate.
fn strip_block_comments(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("/*") {
        result.push_str(&rest[..start]);
        let body = &rest[start + 2..];
        let (comment, tail) = match body.find("*/") {
            Some(end) => (&body[..end], &body[end + 2..]),
            None => (body, ""),
        };
        result.push(' ');
        result.extend(comment.chars().filter(|c| *c == '\n'));
        rest = tail;
    }
    result.push_str(rest);
    result
}

/// Cut `text` at the first `//` that is not inside a double-quoted string.
fn strip_line_comment(text: &str) -> &str {
    let mut quoted = false;
    let mut prev_slash = false;
    for (i, c) in text.char_indices() {
        match c {
            '"' => quoted = !quoted,
            '/' if !quoted && prev_slash => return &text[..i - 1],
            _ => {}
        }
        prev_slash = c == '/' && !quoted;
    }
    text
}

fn tokenize_with_spans(input: &str) -> Vec<PToken> {
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut counted = 0;
    for (result, span) in Token::lexer(input).spanned() {
        line += input[counted..span.start].matches('\n').count();
        counted = span.start;
        if let Ok(token) = result {
            tokens.push(PToken {
                text: input[span.clone()].to_string(),
                token,
                line,
                byte_start: span.start,
                byte_end: span.end,
            });
        }
    }
    tokens
}

/// Parse a properties document into its root block.
pub fn parse_properties(input: &str) -> Result<Properties, ParseError> {
    let cleaned = strip_block_comments(input);
    let tokens = tokenize_with_spans(&cleaned);
    let mut parser = Parser {
        source: &cleaned,
        tokens,
        cursor: 0,
    };

    parser.skip_newlines();
    let root = parser.parse_block(0)?;
    parser.skip_newlines();
    if let Some(tok) = parser.peek() {
        return Err(ParseError::UnexpectedToken {
            line: tok.line,
            message: format!("trailing content '{}' after root block", tok.text),
        });
    }
    Ok(root)
}

/// Recursive descent parser state.
struct Parser<'s> {
    source: &'s str,
    tokens: Vec<PToken>,
    cursor: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&PToken> {
        self.tokens.get(self.cursor)
    }

    fn peek_at(&self, offset: usize) -> Option<&PToken> {
        self.tokens.get(self.cursor + offset)
    }

    fn advance(&mut self) -> Option<PToken> {
        let tok = self.tokens.get(self.cursor).cloned();
        if tok.is_some() {
            self.cursor += 1;
        }
        tok
    }

    fn expect(&mut self, expected: Token, context: &str) -> Result<PToken, ParseError> {
        match self.advance() {
            Some(tok) if tok.token == expected => Ok(tok),
            Some(tok) => Err(ParseError::UnexpectedToken {
                line: tok.line,
                message: format!("expected {:?} {}, got '{}'", expected, context, tok.text),
            }),
            None => Err(ParseError::UnexpectedEof(format!("expected {:?} {}", expected, context))),
        }
    }

    fn skip_newlines(&mut self) {
        while self.peek().is_some_and(|t| t.token == Token::Newline) {
            self.cursor += 1;
        }
    }

    fn parse_block(&mut self, depth: usize) -> Result<Properties, ParseError> {
        let namespace = self.expect(Token::Ident, "as block name")?;
        if depth >= MAX_NESTING {
            return Err(ParseError::UnexpectedToken {
                line: namespace.line,
                message: format!("block '{}' nested deeper than {MAX_NESTING} levels", namespace.text),
            });
        }
        let mut block = Properties::new(&namespace.text);
        block.line = namespace.line;
        if self.peek().is_some_and(|t| t.token == Token::Ident) {
            if let Some(id) = self.advance() {
                block.id = Some(id.text);
            }
        }
        self.skip_newlines();
        self.expect(Token::BraceOpen, "to open block")?;

        loop {
            let Some(tok) = self.peek() else {
                return Err(ParseError::UnexpectedEof(format!(
                    "block '{}' opened on line {} is never closed",
                    block.namespace, block.line
                )));
            };
            let (token, line, text) = (tok.token.clone(), tok.line, tok.text.clone());
            match token {
                Token::Newline => self.cursor += 1,
                Token::BraceClose => {
                    self.cursor += 1;
                    return Ok(block);
                }
                Token::Ident => {
                    if self.peek_at(1).is_some_and(|t| t.token == Token::Equals) {
                        let (key, value) = self.parse_entry()?;
                        block.entries.push((key, value));
                    } else {
                        let child = self.parse_block(depth + 1)?;
                        block.children.push(child);
                    }
                }
                _ => {
                    return Err(ParseError::UnexpectedToken {
                        line,
                        message: format!("expected a key or a nested block, got '{text}'"),
                    })
                }
            }
        }
    }

    /// `key = value`. The value is the raw source text up to the end of the
    /// line (or a closing brace on the same line), with any trailing `//`
    /// comment removed, trimmed and unquoted.
    fn parse_entry(&mut self) -> Result<(String, String), ParseError> {
        let key = self.expect(Token::Ident, "as key")?;
        let equals = self.expect(Token::Equals, "after key")?;
        let mut end = self.source.len();
        while let Some(tok) = self.peek() {
            if matches!(tok.token, Token::Newline | Token::BraceClose) {
                end = tok.byte_start;
                break;
            }
            self.cursor += 1;
        }
        let raw = strip_line_comment(&self.source[equals.byte_end..end]).trim();
        let value = raw
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(raw);
        Ok((key.text, value.to_string()))
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_nested_blocks_and_entries() {
        let input = r#"
form main
{
    layout = LAYOUT_VERTICAL
    size = 300, 200
    theme = res/common/default.theme

    label title
    {
        text = "Hello, world"
    }

    container
    {
        scroll = SCROLL_BOTH
    }
}
"#;
        let root = parse_properties(input).unwrap();
        assert_eq!(root.namespace(), "form");
        assert_eq!(root.id(), Some("main"));
        assert_eq!(root.get("layout"), Some("LAYOUT_VERTICAL"));
        assert_eq!(root.get("size"), Some("300, 200"));
        assert_eq!(root.get("theme"), Some("res/common/default.theme"));
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.children()[0].namespace(), "label");
        assert_eq!(root.children()[0].get("text"), Some("Hello, world"));
        assert_eq!(root.children()[1].id(), None);
        assert_eq!(root.children()[1].get("scroll"), Some("SCROLL_BOTH"));
    }

    #[test]
    fn brace_on_header_line_and_inline_close() {
        let root = parse_properties("container c {\n  button b { text = Go }\n}").unwrap();
        assert_eq!(root.children()[0].get("text"), Some("Go"));
    }

    #[test]
    fn comments_are_ignored() {
        let input = "container c\n{\n  // width = 1\n  /* height = 2\n  */ zIndex = 3\n}";
        let root = parse_properties(input).unwrap();
        assert_eq!(root.get("width"), None);
        assert_eq!(root.get("height"), None);
        assert_eq!(root.get("zIndex"), Some("3"));
    }

    #[test]
    fn unclosed_block_is_eof_error() {
        let err = parse_properties("container c\n{\n  width = 3\n").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof(_)));
    }

    #[test]
    fn stray_token_reports_line() {
        let err = parse_properties("container c\n{\n  width = 3\n  = 4\n}").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                line: 4,
                message: "expected a key or a nested block, got '='".to_string(),
            }
        );
    }

    #[test]
    fn trailing_content_is_rejected() {
        let err = parse_properties("container a\n{\n}\ncontainer b\n{\n}").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { line: 4, .. }));
    }

    #[test]
    fn trailing_comment_after_value_is_dropped() {
        let input = "container c\n{\n  scroll = vertical // enable scrolling\n  text = \"a // b\" // note\n  theme = res/default.theme\n}";
        let root = parse_properties(input).unwrap();
        assert_eq!(root.get("scroll"), Some("vertical"));
        assert_eq!(root.get("text"), Some("a // b"));
        assert_eq!(root.get("theme"), Some("res/default.theme"));
    }

    #[test]
    fn line_comment_outside_quotes() {
        assert_eq!(strip_line_comment(" 10, 20 // px"), " 10, 20 ");
        assert_eq!(strip_line_comment(" \"http://x\""), " \"http://x\"");
        assert_eq!(strip_line_comment(" a/b"), " a/b");
    }

    #[test]
    fn nesting_is_capped() {
        let depth = MAX_NESTING + 10;
        let input = format!("{}{}", "c {\n".repeat(depth), "}\n".repeat(depth));
        let err = parse_properties(&input).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedToken { line, ref message }
                if line == MAX_NESTING + 1 && message.contains("nested deeper")
        ));

        let ok = format!("{}{}", "c {\n".repeat(MAX_NESTING), "}\n".repeat(MAX_NESTING));
        assert!(parse_properties(&ok).is_ok());
    }

    #[test]
    fn block_comment_keeps_line_numbers() {
        assert_eq!(strip_block_comments("a/*\n\n*/b"), "a \n\nb");
    }
}
