//! logos-based selector tokenizer.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins
//! 2. For equal length matches, earlier-defined variants win
//!
//! Whitespace is skipped; the parser recovers descendant combinators from the
//! byte gaps between spans.

use logos::Logos;

/// Selector token produced by the lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// Double-quoted string literal.
    #[regex(r#""[^"]*""#)]
    StringLiteral,

    /// Single-quoted string literal.
    #[regex(r"'[^']*'")]
    StringLiteralSingle,

    /// Unsigned integer, only meaningful as an unquoted attribute value.
    #[regex(r"[0-9]+")]
    Number,

    /// Identifier: tag names, class/id names, attribute names.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    /// `[`
    #[token("[")]
    BracketOpen,

    /// `]`
    #[token("]")]
    BracketClose,

    /// `=`
    #[token("=")]
    Equals,

    /// `,`
    #[token(",")]
    Comma,

    /// `.`
    #[token(".")]
    Dot,

    /// `#`
    #[token("#")]
    Hash,

    /// `*`
    #[token("*")]
    Star,

    /// `>`
    #[token(">")]
    GreaterThan,
}

/// A lexed token with its source text and byte span.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub text: String,
    /// Index in the token stream (for error reporting).
    pub pos: usize,
    pub byte_start: usize,
    pub byte_end: usize,
}

/// Tokenize a selector string.
///
/// Returns the byte offset of the first character that does not lex.
pub fn tokenize(input: &str) -> Result<Vec<Spanned>, usize> {
    let mut tokens = Vec::new();
    for (idx, (result, span)) in Token::lexer(input).spanned().enumerate() {
        let token = result.map_err(|()| span.start)?;
        tokens.push(Spanned {
            text: input[span.clone()].to_string(),
            token,
            pos: idx,
            byte_start: span.start,
            byte_end: span.end,
        });
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input)
            .unwrap_or_else(|at| panic!("lex failed at {at}"))
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            tokens("[ ] = , . # * >"),
            vec![
                Token::BracketOpen,
                Token::BracketClose,
                Token::Equals,
                Token::Comma,
                Token::Dot,
                Token::Hash,
                Token::Star,
                Token::GreaterThan,
            ]
        );
    }

    #[test]
    fn test_marker_attribute_is_one_ident() {
        let toks = tokenize("[data-js-select-original-controls]").unwrap();
        assert_eq!(toks.len(), 3);
        assert_eq!(toks[1].token, Token::Ident);
        assert_eq!(toks[1].text, "data-js-select-original-controls");
    }

    #[test]
    fn test_string_literals() {
        assert_eq!(
            tokens(r#"[a="x y"][b='z']"#),
            vec![
                Token::BracketOpen,
                Token::Ident,
                Token::Equals,
                Token::StringLiteral,
                Token::BracketClose,
                Token::BracketOpen,
                Token::Ident,
                Token::Equals,
                Token::StringLiteralSingle,
                Token::BracketClose,
            ]
        );
    }

    #[test]
    fn test_spans_expose_whitespace_gaps() {
        let toks = tokenize("ul li").unwrap();
        assert_eq!(toks[0].byte_end, 2);
        assert_eq!(toks[1].byte_start, 3);
        let toks = tokenize("li.is-current").unwrap();
        assert_eq!(toks[0].byte_end, toks[1].byte_start);
    }

    #[test]
    fn test_number() {
        assert_eq!(
            tokens("[data-index=12]"),
            vec![
                Token::BracketOpen,
                Token::Ident,
                Token::Equals,
                Token::Number,
                Token::BracketClose,
            ]
        );
    }

    #[test]
    fn test_invalid_character_offset() {
        assert_eq!(tokenize("div:hover"), Err(3));
    }
}
