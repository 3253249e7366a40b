//! Recursive descent selector parser.
//!
//! Parses selector text into a [`SelectorList`]. Uses the logos-based
//! tokenizer from [`crate::selector::tokenizer`].

use crate::selector::model::*;
use crate::selector::tokenizer::{tokenize, Spanned, Token};

/// Errors from selector parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty selector")]
    Empty,
    #[error("invalid character at byte {0}")]
    InvalidCharacter(usize),
    #[error("unexpected token at position {position}: {message}")]
    UnexpectedToken { position: usize, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
}

/// Parse a selector group such as `[data-js-select] button, .fallback`.
pub fn parse_selector_list(input: &str) -> Result<SelectorList, ParseError> {
    let tokens = tokenize(input).map_err(ParseError::InvalidCharacter)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser { tokens, cursor: 0 };
    let mut selectors = vec![parser.parse_selector()?];
    while parser.peek().is_some_and(|t| t.token == Token::Comma) {
        parser.advance();
        selectors.push(parser.parse_selector()?);
    }

    if let Some(tok) = parser.peek() {
        return Err(ParseError::UnexpectedToken {
            position: tok.pos,
            message: format!("trailing {:?} '{}'", tok.token, tok.text),
        });
    }

    Ok(SelectorList { selectors })
}

/// Recursive descent parser state.
struct Parser {
    tokens: Vec<Spanned>,
    cursor: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) -> Option<&Spanned> {
        let tok = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(tok)
    }

    fn current_pos(&self) -> usize {
        self.peek().map(|t| t.pos).unwrap_or(self.tokens.len())
    }

    /// Returns `true` if the current token is immediately adjacent (no whitespace)
    /// to the previous token.
    fn is_adjacent(&self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = &self.tokens[self.cursor - 1];
        self.peek().is_some_and(|curr| curr.byte_start == prev.byte_end)
    }

    /// Parse compound selectors joined by combinators.
    fn parse_selector(&mut self) -> Result<Selector, ParseError> {
        let mut parts = vec![SelectorPart::Compound(self.parse_compound_selector()?)];

        loop {
            match self.peek().map(|t| &t.token) {
                Some(Token::GreaterThan) => {
                    self.advance();
                    parts.push(SelectorPart::Combinator(Combinator::Child));
                    parts.push(SelectorPart::Compound(self.parse_compound_selector()?));
                }
                // A selector start that the compound parser did not consume was
                // separated by whitespace.
                Some(
                    Token::Ident | Token::Hash | Token::Dot | Token::Star | Token::BracketOpen,
                ) => {
                    parts.push(SelectorPart::Combinator(Combinator::Descendant));
                    parts.push(SelectorPart::Compound(self.parse_compound_selector()?));
                }
                _ => break,
            }
        }

        Ok(Selector { parts })
    }

    /// Parse a compound selector. The first component may be a type or `*`;
    /// following components must be adjacent to the previous token.
    fn parse_compound_selector(&mut self) -> Result<CompoundSelector, ParseError> {
        let mut compound = CompoundSelector::new();

        match self.peek().map(|t| t.token.clone()) {
            Some(Token::Ident) => {
                let name = self.advance().map(|t| t.text.clone()).unwrap_or_default();
                compound.push(SelectorComponent::Type(name));
            }
            Some(Token::Star) => {
                self.advance();
                compound.push(SelectorComponent::Universal);
            }
            Some(Token::Dot | Token::Hash | Token::BracketOpen) => {
                compound.push(self.parse_simple()?);
            }
            Some(_) => {
                return Err(ParseError::UnexpectedToken {
                    position: self.current_pos(),
                    message: "expected selector".into(),
                });
            }
            None => return Err(ParseError::UnexpectedEof("expected selector".into())),
        }

        while self.is_adjacent()
            && matches!(
                self.peek().map(|t| &t.token),
                Some(Token::Dot | Token::Hash | Token::BracketOpen)
            )
        {
            compound.push(self.parse_simple()?);
        }

        Ok(compound)
    }

    /// Parse `.class`, `#id` or `[attr]` / `[attr=value]`.
    fn parse_simple(&mut self) -> Result<SelectorComponent, ParseError> {
        let lead = self
            .advance()
            .map(|t| t.token.clone())
            .ok_or_else(|| ParseError::UnexpectedEof("expected selector".into()))?;

        match lead {
            Token::Dot => Ok(SelectorComponent::Class(self.expect_ident("class name")?)),
            Token::Hash => Ok(SelectorComponent::Id(self.expect_ident("id name")?)),
            Token::BracketOpen => {
                let name = self.expect_ident("attribute name")?;
                let value = if self.peek().is_some_and(|t| t.token == Token::Equals) {
                    self.advance();
                    Some(self.expect_value()?)
                } else {
                    None
                };
                self.expect(&Token::BracketClose)?;
                Ok(SelectorComponent::Attribute { name, value })
            }
            other => Err(ParseError::UnexpectedToken {
                position: self.cursor.saturating_sub(1),
                message: format!("expected '.', '#' or '[', got {other:?}"),
            }),
        }
    }

    fn expect(&mut self, expected: &Token) -> Result<(), ParseError> {
        match self.advance() {
            Some(tok) if &tok.token == expected => Ok(()),
            Some(tok) => Err(ParseError::UnexpectedToken {
                position: tok.pos,
                message: format!("expected {:?}, got {:?} '{}'", expected, tok.token, tok.text),
            }),
            None => Err(ParseError::UnexpectedEof(format!("expected {expected:?}"))),
        }
    }

    fn expect_ident(&mut self, what: &str) -> Result<String, ParseError> {
        match self.advance() {
            Some(tok) if tok.token == Token::Ident => Ok(tok.text.clone()),
            Some(tok) => Err(ParseError::UnexpectedToken {
                position: tok.pos,
                message: format!("expected {what}, got {:?} '{}'", tok.token, tok.text),
            }),
            None => Err(ParseError::UnexpectedEof(format!("expected {what}"))),
        }
    }

    /// Attribute value: quoted string, identifier or number.
    fn expect_value(&mut self) -> Result<String, ParseError> {
        match self.advance() {
            Some(tok) => match tok.token {
                Token::StringLiteral | Token::StringLiteralSingle => {
                    Ok(tok.text[1..tok.text.len() - 1].to_string())
                }
                Token::Ident | Token::Number => Ok(tok.text.clone()),
                _ => Err(ParseError::UnexpectedToken {
                    position: tok.pos,
                    message: format!("expected attribute value, got {:?} '{}'", tok.token, tok.text),
                }),
            },
            None => Err(ParseError::UnexpectedEof("expected attribute value".into())),
        }
    }
}
