use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
        position::{Position, Source, Span},
    },
};

/// How deeply expressions may nest before parsing gives up.
///
/// Groups, prefix operators, definitions and every folded binary operator
/// each count as one level. The evaluator recurses once per tree level, so
/// this also bounds evaluation depth.
pub const MAX_DEPTH: usize = 256;

/// Reported when an input nests past [`MAX_DEPTH`].
pub const NESTED_TOO_DEEPLY: &str = "Expression is nested too deeply";

/// The tokens of one input, consumed front to back by the grammar rules.
///
/// The stream never moves past its final token, which is always
/// [`TokenKind::Eof`]; reading the current token is therefore always
/// possible.
#[derive(Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    index:  usize,
    depth:  usize,
}

impl TokenStream {
    /// Wraps the output of [`tokenize`](crate::interpreter::lexer::tokenize).
    ///
    /// A list that does not end in `Eof` gets one, placed where its last
    /// token ends. An empty list stands for an empty, unnamed input.
    #[must_use]
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let eof_at = match tokens.last() {
            Some(Token { kind: TokenKind::Eof,
                         .. }) => None,
            Some(last) => Some(last.span.end.clone()),
            None => Some(Position::start(Source::new("", ""))),
        };
        if let Some(end) = eof_at {
            tokens.push(Token::new(TokenKind::Eof, Span::new(end.clone(), end)));
        }

        Self { tokens,
               index: 0,
               depth: 0 }
    }

    /// The token under the cursor.
    #[must_use]
    pub fn current(&self) -> &Token {
        &self.tokens[self.index]
    }

    /// Consumes the current token and returns it.
    ///
    /// At `Eof` the cursor stays put.
    pub fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.index + 1 < self.tokens.len() {
            self.index += 1;
        }
        token
    }

    /// Descends one nesting level.
    ///
    /// A failed parse is never resumed, so rules only [`leave`](Self::leave)
    /// on success.
    ///
    /// # Errors
    /// [`NESTED_TOO_DEEPLY`] at the current token once [`MAX_DEPTH`] levels
    /// are open.
    pub fn enter(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error_here(NESTED_TOO_DEEPLY));
        }
        self.depth += 1;
        Ok(())
    }

    /// Closes `levels` nesting levels opened with [`enter`](Self::enter).
    pub const fn leave(&mut self, levels: usize) {
        self.depth = self.depth.saturating_sub(levels);
    }

    /// Number of tokens consumed so far.
    ///
    /// Rules compare this against a checkpoint taken before trying an
    /// alternative to tell whether the alternative made any progress.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.index
    }

    /// Builds a [`SyntaxError`] pointing at the current token.
    #[must_use]
    pub fn error_here(&self, details: &str) -> SyntaxError {
        SyntaxError::new(self.current().span.clone(), details)
    }
}

/// Consumes the current token if `accept` recognizes it, returning what
/// `accept` extracted together with the token.
///
/// # Errors
/// A [`SyntaxError`] at the current token carrying `expected` when `accept`
/// returns `None`.
pub(in crate::interpreter::parser) fn expect<T>(tokens: &mut TokenStream,
                                                expected: &str,
                                                accept: impl FnOnce(&TokenKind) -> Option<T>)
                                                -> ParseResult<(T, Token)> {
    match accept(&tokens.current().kind) {
        Some(value) => Ok((value, tokens.advance())),
        None => Err(tokens.error_here(expected)),
    }
}
