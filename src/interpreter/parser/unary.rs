use crate::{
    ast::{Node, UnaryOperator},
    interpreter::{
        lexer::TokenKind,
        parser::{
            binary::parse_power,
            core::{ParseResult, parse_expression},
            utils::TokenStream,
        },
        value::core::NumberValue,
    },
};

/// Reported when no operand starts at the current token.
pub const EXPECTED_OPERAND: &str = "Expected int, float, identifier, '+', '-', '%' or '('";

/// Parses a unary expression.
///
/// Supports the prefix operators `+`, `-` and `%`. They bind tighter than
/// `*` but looser than `^`, so `-2 ^ 2` is `-(2 ^ 2)`.
///
/// Grammar:
/// ```text
///     factor := ("+" | "-" | "%") factor
///             | power
/// ```
pub fn parse_factor(tokens: &mut TokenStream) -> ParseResult<Node> {
    let op = match tokens.current().kind {
        TokenKind::Plus => UnaryOperator::Plus,
        TokenKind::Minus => UnaryOperator::Negate,
        TokenKind::Mod => UnaryOperator::Percent,
        _ => return parse_power(tokens),
    };

    tokens.enter()?;
    let op_token = tokens.advance();
    let operand = parse_factor(tokens)?;
    tokens.leave(1);

    Ok(Node::UnaryOp { op,
                       op_span: op_token.span,
                       operand: Box::new(operand) })
}

/// Parses an atom: the operands every operator is built from.
///
/// Grammar:
/// ```text
///     atom := INT | FLOAT | IDENTIFIER | "(" expression ")"
/// ```
///
/// # Errors
/// - `Expected ')'` at the token where a group should have closed.
/// - [`NESTED_TOO_DEEPLY`](super::utils::NESTED_TOO_DEEPLY) for groups nested
///   past [`MAX_DEPTH`](super::utils::MAX_DEPTH).
/// - [`EXPECTED_OPERAND`] when the current token cannot start an atom.
pub fn parse_atom(tokens: &mut TokenStream) -> ParseResult<Node> {
    match &tokens.current().kind {
        TokenKind::Int(n) => {
            let value = NumberValue::Int(*n);
            let token = tokens.advance();
            Ok(Node::Number { value,
                              span: token.span })
        },
        TokenKind::Float(x) => {
            let value = NumberValue::Float(*x);
            let token = tokens.advance();
            Ok(Node::Number { value,
                              span: token.span })
        },
        TokenKind::Identifier(name) => {
            let name = name.clone();
            let token = tokens.advance();
            Ok(Node::VarAccess { name,
                                 span: token.span })
        },
        TokenKind::LParen => parse_grouping(tokens),
        _ => Err(tokens.error_here(EXPECTED_OPERAND)),
    }
}

/// Parses `"(" expression ")"`, starting at the opening parenthesis.
///
/// The group does not become a node of its own; the inner expression is
/// returned directly.
fn parse_grouping(tokens: &mut TokenStream) -> ParseResult<Node> {
    tokens.enter()?;
    tokens.advance();
    let inner = parse_expression(tokens)?;

    if tokens.current().kind != TokenKind::RParen {
        return Err(tokens.error_here("Expected ')'"));
    }
    tokens.advance();
    tokens.leave(1);

    Ok(inner)
}
