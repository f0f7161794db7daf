use std::{fmt, rc::Rc};

use logos::Logos;

use crate::{
    error::CharError,
    interpreter::position::{Position, Source, Span},
};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, CharError>;

/// The kind of a lexical token.
///
/// The lexer skips spaces and tabs. Any character not matched by one of the
/// patterns below is rejected with a [`CharError`].
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t]+")]
pub enum TokenKind {
    /// Numeric literal with a fractional point, such as `3.14` or `2.`.
    ///
    /// Only one `.` belongs to a literal: in `1.2.3` the literal stops at
    /// `1.2` and the second `.` is left for the next token.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Int(i64),
    /// Reserved words.
    #[token("def", |_| Keyword::Def)]
    Keyword(Keyword),
    /// Variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `%`
    #[token("%")]
    Mod,
    /// `^`
    #[token("^")]
    Pow,
    /// `:`, separating the name and the value of a definition.
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of input. Never produced by the pattern table; appended by
    /// [`tokenize`].
    Eof,
}

/// Reserved words of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// `def`, which introduces a variable definition.
    Def,
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Def => write!(f, "def"),
        }
    }
}

/// Why the pattern table rejected a piece of input.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// No pattern matches the character.
    #[default]
    UnexpectedChar,
    /// An integer literal does not fit in 64 bits.
    IntegerTooLarge,
}

/// A positioned token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Walks a live [`Position`] along the source text in step with the byte
/// offsets reported by logos.
struct Cursor<'s> {
    text:     &'s str,
    offset:   usize,
    position: Position,
}

impl<'s> Cursor<'s> {
    fn new(source: &'s Rc<Source>) -> Self {
        Self { text:     &source.text,
               offset:   0,
               position: Position::start(Rc::clone(source)), }
    }

    /// Advances the position over every character up to byte `target`.
    fn walk_to(&mut self, target: usize) -> &Position {
        if let Some(consumed) = self.text.get(self.offset..target) {
            for ch in consumed.chars() {
                self.position.advance(ch);
            }
            self.offset = target;
        }

        &self.position
    }
}

/// Converts source text into a token list terminated by [`TokenKind::Eof`].
///
/// Lexing stops at the first character that does not start a token; in that
/// case no tokens are returned, only the error.
///
/// # Errors
/// Returns a [`CharError`] spanning the offending character, or the whole
/// literal when an integer is too large for 64 bits.
///
/// # Example
/// ```
/// use quartz::interpreter::{
///     lexer::{TokenKind, tokenize},
///     position::Source,
/// };
///
/// let tokens = tokenize(&Source::new("<stdin>", "def x : 2.5")).unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds.len(), 5);
/// assert_eq!(kinds[3], TokenKind::Float(2.5));
/// assert_eq!(kinds[4], TokenKind::Eof);
/// ```
pub fn tokenize(source: &Rc<Source>) -> LexResult<Vec<Token>> {
    let mut lexer = TokenKind::lexer(&source.text);
    let mut cursor = Cursor::new(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let start = cursor.walk_to(range.start).clone();

        match result {
            Ok(kind) => {
                let end = cursor.walk_to(range.end).clone();
                tokens.push(Token::new(kind, Span::new(start, end)));
            },
            Err(LexErrorKind::IntegerTooLarge) => {
                let end = cursor.walk_to(range.end).clone();
                return Err(CharError::new(Span::new(start, end),
                                          format!("Integer literal '{}' is too large",
                                                  lexer.slice())));
            },
            Err(LexErrorKind::UnexpectedChar) => {
                let ch = source.text[range.start..].chars().next().unwrap_or_default();
                let end = start.next(ch);
                return Err(CharError::new(Span::new(start, end), format!("Unexpected '{ch}'")));
            },
        }
    }

    let start = cursor.walk_to(source.text.len()).clone();
    let end = start.next(' ');
    tokens.push(Token::new(TokenKind::Eof, Span::new(start, end)));

    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float.
fn parse_float(lex: &logos::Lexer<TokenKind>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// # Errors
/// [`LexErrorKind::IntegerTooLarge`] when the digits overflow an `i64`.
fn parse_integer(lex: &logos::Lexer<TokenKind>) -> Result<i64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::IntegerTooLarge)
}
