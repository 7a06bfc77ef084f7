use std::ops::Range;

use logos::Logos;

use crate::util::num::strip_whitespace;

/// Lexeme patterns recognized by the tokenizer.
///
/// Whitespace is removed before lexing, so there is no skip rule. Anything
/// that matches none of these patterns becomes a [`TokenKind::Unknown`] token.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme {
    /// A run of digits and dots starting with a digit, such as `3`, `87.23`
    /// or the malformed `1.2.3`. Validation happens when the value is parsed.
    #[regex(r"[0-9][0-9.]*")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Lexeme {
    const fn kind(self) -> TokenKind {
        match self {
            Self::Number => TokenKind::Number,
            Self::Plus | Self::Minus | Self::Star | Self::Slash | Self::LParen | Self::RParen => {
                TokenKind::Operator
            },
        }
    }
}

/// Classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A number literal.
    Number,
    /// One of `+ - * / ( )`.
    Operator,
    /// Sentinel produced once the input is exhausted.
    EndOfInput,
    /// A character outside the language. Callers must check for it.
    Unknown,
}

/// A classified lexeme.
///
/// `text` is the lexeme exactly as written; it is empty for
/// [`TokenKind::EndOfInput`] and [`TokenKind::Unknown`]. `span` is the byte
/// range of the lexeme in the whitespace-stripped expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Range<usize>,
}

impl Token {
    /// Creates a token of the given kind.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Range<usize>) -> Self {
        Self { kind,
               text: text.into(),
               span }
    }

    const fn end_of_input(position: usize) -> Self {
        Self { kind: TokenKind::EndOfInput,
               text: String::new(),
               span: position..position, }
    }

    /// Returns `true` for the end-of-input sentinel.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

/// A cursor over the tokens of an expression.
///
/// The tokenizer always has a current token. Advancing never fails: once the
/// input is exhausted every further advance yields
/// [`TokenKind::EndOfInput`].
///
/// # Example
/// ```
/// use flatcalc::interpreter::lexer::{TokenKind, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new("6345.1234 + 87.23");
/// assert_eq!(tokenizer.current().text, "6345.1234");
/// assert_eq!(tokenizer.advance().text, "+");
/// assert_eq!(tokenizer.advance().text, "87.23");
/// assert_eq!(tokenizer.advance().kind, TokenKind::EndOfInput);
/// assert_eq!(tokenizer.advance().kind, TokenKind::EndOfInput);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer {
    source:  String,
    pos:     usize,
    current: Token,
}

impl Tokenizer {
    /// Creates a tokenizer positioned on the first token of `expression`.
    ///
    /// All whitespace is stripped first; token spans refer to the stripped
    /// text, available through [`Tokenizer::source`].
    #[must_use]
    pub fn new(expression: &str) -> Self {
        let mut tokenizer = Self { source:  strip_whitespace(expression),
                                   pos:     0,
                                   current: Token::end_of_input(0), };
        tokenizer.advance();
        tokenizer
    }

    /// The token the cursor is on.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// The whitespace-stripped expression being tokenized.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Moves to the next token and returns it.
    pub fn advance(&mut self) -> &Token {
        self.current = self.scan();
        &self.current
    }

    fn scan(&mut self) -> Token {
        let rest = &self.source[self.pos..];
        let mut lexer = Lexeme::lexer(rest);

        let Some(result) = lexer.next() else {
            return Token::end_of_input(self.pos);
        };
        let start = self.pos + lexer.span().start;

        match result {
            Ok(lexeme) => {
                let end = self.pos + lexer.span().end;
                let token = Token::new(lexeme.kind(), lexer.slice(), start..end);
                self.pos = end;
                token
            },
            Err(()) => {
                // Step over the whole character so the cursor stays on a
                // char boundary.
                let width = self.source[start..].chars().next().map_or(1, char::len_utf8);
                self.pos = start + width;
                Token::new(TokenKind::Unknown, "", start..start + width)
            },
        }
    }
}

/// Collects every token of `expression`, excluding the end-of-input sentinel.
///
/// `Unknown` tokens are kept in the output; this function never fails.
///
/// # Example
/// ```
/// use flatcalc::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("1*(-3)");
/// let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, ["1", "*", "(", "-", "3", ")"]);
/// assert!(tokens[1..].iter().all(|t| t.kind == TokenKind::Operator || t.text == "3"));
/// ```
#[must_use]
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(expression);
    let mut tokens = Vec::new();

    while !tokenizer.current().is_end() {
        tokens.push(tokenizer.current().clone());
        tokenizer.advance();
    }

    tokens
}
