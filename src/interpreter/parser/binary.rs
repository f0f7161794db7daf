use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::ParseResult,
            unary::{parse_atom, parse_factor},
            utils::TokenStream,
        },
    },
};

/// A grammar rule: consumes tokens and produces a node.
pub type Rule = fn(&mut TokenStream) -> ParseResult<Node>;

/// Parses `operand (op right_operand)*` and folds the result to the left.
///
/// `a - b - c` becomes `(a - b) - c`. Passing a `right_operand` that
/// re-enters a higher tier than `operand` lets a tier recurse on its right
/// side instead, which is how exponentiation becomes right-associative.
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `operand`: Rule for the left-most operand.
/// - `operators`: Operators handled at this tier.
/// - `right_operand`: Rule for every operand after an operator.
///
/// # Returns
/// A left-deepening `Node::BinaryOp` tree, or the single operand if no
/// operator followed it.
///
/// # Errors
/// Any error from the operand rules, or
/// [`NESTED_TOO_DEEPLY`](super::utils::NESTED_TOO_DEEPLY) once the folded
/// operators push the tree past [`MAX_DEPTH`](super::utils::MAX_DEPTH).
pub fn fold_binary(tokens: &mut TokenStream,
                   operand: Rule,
                   operators: &[BinaryOperator],
                   right_operand: Rule)
                   -> ParseResult<Node> {
    let mut left = operand(tokens)?;
    let mut folded = 0;

    while let Some(op) = token_to_binary_operator(&tokens.current().kind)
          && operators.contains(&op)
    {
        // Each fold deepens the left spine the evaluator walks down.
        tokens.enter()?;
        folded += 1;

        let op_token = tokens.advance();
        let right = right_operand(tokens)?;
        left = Node::BinaryOp { left: Box::new(left),
                                op,
                                op_span: op_token.span,
                                right: Box::new(right) };
    }

    tokens.leave(folded);
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := term (("+" | "-") term)*`
pub fn parse_additive(tokens: &mut TokenStream) -> ParseResult<Node> {
    fold_binary(tokens,
                parse_term,
                &[BinaryOperator::Add, BinaryOperator::Sub],
                parse_term)
}

/// Parses multiplication-level expressions.
///
/// The rule is: `term := factor (("*" | "/" | "%") factor)*`
pub fn parse_term(tokens: &mut TokenStream) -> ParseResult<Node> {
    fold_binary(tokens,
                parse_factor,
                &[BinaryOperator::Mul, BinaryOperator::Div, BinaryOperator::Mod],
                parse_factor)
}

/// Parses exponentiation expressions.
///
/// The right operand is a full factor, so `a ^ b ^ c` parses as
/// `a ^ (b ^ c)` and `2 ^ -1` is accepted.
///
/// The rule is: `power := atom ("^" factor)*`
pub fn parse_power(tokens: &mut TokenStream) -> ParseResult<Node> {
    fold_binary(tokens, parse_atom, &[BinaryOperator::Pow], parse_factor)
}

/// Maps a token to its corresponding binary operator.
///
/// # Example
/// ```
/// use quartz::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Pow), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&TokenKind::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &TokenKind) -> Option<BinaryOperator> {
    match token {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Mul => Some(BinaryOperator::Mul),
        TokenKind::Div => Some(BinaryOperator::Div),
        TokenKind::Mod => Some(BinaryOperator::Mod),
        TokenKind::Pow => Some(BinaryOperator::Pow),
        _ => None,
    }
}
