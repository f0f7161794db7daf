use crate::{
    ast::Node,
    error::SyntaxError,
    interpreter::{
        lexer::{Keyword, TokenKind},
        parser::{
            binary::parse_additive,
            utils::{NESTED_TOO_DEEPLY, TokenStream, expect},
        },
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Reported when an expression is missing entirely.
pub const EXPECTED_EXPRESSION: &str =
    "Expected 'def', int, float, identifier, '+', '-', '%' or '('";
/// Reported when tokens follow a complete expression.
pub const EXPECTED_OPERATOR: &str = "Expected '+', '-', '*', '/', '%' or '^'";

/// Parses a whole input: exactly one expression followed by the end of
/// input.
///
/// Grammar: `program := expression EOF`
///
/// # Errors
/// Propagates any error from [`parse_expression`]. If tokens remain after
/// the expression, the error points at the first of them and lists the
/// operators that could have continued it.
///
/// # Example
/// ```
/// use quartz::interpreter::{
///     lexer::tokenize,
///     parser::{core::parse_program, utils::TokenStream},
///     position::Source,
/// };
///
/// let tokens = tokenize(&Source::new("<stdin>", "1 + 2 * 3")).unwrap();
/// let mut stream = TokenStream::new(tokens);
/// let ast = parse_program(&mut stream).unwrap();
///
/// assert_eq!(ast.to_string(), "(1 + (2 * 3))");
/// ```
pub fn parse_program(tokens: &mut TokenStream) -> ParseResult<Node> {
    let node = parse_expression(tokens)?;

    if tokens.current().kind != TokenKind::Eof {
        return Err(tokens.error_here(EXPECTED_OPERATOR));
    }

    Ok(node)
}

/// Parses a full expression.
///
/// Grammar: `expression := "def" IDENTIFIER ":" expression | additive`
///
/// When the additive rule fails without consuming a single token, the error
/// is replaced by [`EXPECTED_EXPRESSION`], which names everything that may
/// start an expression. Once tokens have been consumed the deeper error is
/// more precise and is kept as-is, as is a nesting error.
///
/// # Errors
/// A [`SyntaxError`] for a malformed definition or a missing operand.
pub fn parse_expression(tokens: &mut TokenStream) -> ParseResult<Node> {
    if tokens.current().kind == TokenKind::Keyword(Keyword::Def) {
        return parse_definition(tokens);
    }

    let checkpoint = tokens.consumed();
    parse_additive(tokens).map_err(|error| {
                              if tokens.consumed() == checkpoint
                                 && error.details != NESTED_TOO_DEEPLY
                              {
                                  tokens.error_here(EXPECTED_EXPRESSION)
                              } else {
                                  error
                              }
                          })
}

/// Parses `def <name> : <expression>`, starting at the `def` keyword.
///
/// # Errors
/// - `Expected identifier` if no name follows `def`.
/// - `Expected ':'` if the name is not followed by a colon.
/// - Any error from the value expression.
fn parse_definition(tokens: &mut TokenStream) -> ParseResult<Node> {
    tokens.enter()?;
    tokens.advance();

    let (name, name_token) = expect(tokens, "Expected identifier", |kind| match kind {
                                 TokenKind::Identifier(name) => Some(name.clone()),
                                 _ => None,
                             })?;

    expect(tokens, "Expected ':'", |kind| (*kind == TokenKind::Colon).then_some(()))?;

    let value = parse_expression(tokens)?;
    tokens.leave(1);

    tracing::trace!(name = %name, "parsed definition");

    Ok(Node::VarAssign { name,
                         name_span: name_token.span,
                         value: Box::new(value) })
}
