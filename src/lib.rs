//! # quartz
//!
//! quartz is a tiny arithmetic expression language written in Rust.
//! It lexes, parses and evaluates one expression at a time, with variables
//! that persist across inputs and diagnostics that point at the exact
//! offending source text.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::rc::Rc;

use crate::interpreter::{
    evaluator::core::Interpreter,
    lexer::{Token, tokenize as lex},
    parser::{core::parse_program, utils::TokenStream},
    position::Source,
};
pub use crate::{
    ast::Node,
    error::Error,
    interpreter::{
        session::{Session, SessionConfig},
        value::core::{Number, NumberValue},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and the operator types that
/// represent an expression as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one node kind per language construct.
/// - Attaches source spans to nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines the three error kinds the pipeline can raise and the
/// crate-level [`Error`] that wraps them. Every error renders as a complete
/// diagnostic: kind, message, location and a marked source excerpt.
///
/// # Responsibilities
/// - Defines `CharError`, `SyntaxError` and `RuntimeError`.
/// - Renders runtime tracebacks.
/// - Integrates with the standard error traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together positions, lexing, parsing, scopes, sessions
/// and evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the variable scopes that persist between inputs.
pub mod interpreter;
/// General utilities for numeric conversion and diagnostics rendering.
pub mod util;

/// Splits `text` into tokens.
///
/// # Errors
/// Returns [`Error::Char`] for input the lexer cannot tokenize.
///
/// # Examples
/// ```
/// let tokens = quartz::tokenize("<stdin>", "1 + 2").unwrap();
/// assert_eq!(tokens.len(), 4); // `1`, `+`, `2` and the end of input
///
/// let error = quartz::tokenize("<stdin>", "1 @ 2").unwrap_err();
/// assert_eq!(error.details(), "Unexpected '@'");
/// ```
pub fn tokenize(source_name: &str, text: &str) -> Result<Vec<Token>, Error> {
    let source = Source::new(source_name, text);
    let tokens = lex(&source)?;
    tracing::debug!(source = source_name, tokens = tokens.len(), "tokenized input");
    Ok(tokens)
}

/// Parses `text` into a syntax tree.
///
/// # Errors
/// Returns [`Error::Char`] or [`Error::Syntax`] for input that is not one
/// complete expression.
///
/// # Examples
/// ```
/// let ast = quartz::parse("<stdin>", "-2 ^ 2").unwrap();
/// assert_eq!(ast.to_string(), "(-(2 ^ 2))");
/// ```
pub fn parse(source_name: &str, text: &str) -> Result<Node, Error> {
    parse_source(&Source::new(source_name, text))
}

fn parse_source(source: &Rc<Source>) -> Result<Node, Error> {
    let tokens = lex(source)?;
    tracing::debug!(source = %source.name, tokens = tokens.len(), "tokenized input");

    let mut stream = TokenStream::new(tokens);
    let ast = parse_program(&mut stream)?;
    tracing::debug!(source = %source.name, "parsed input");

    Ok(ast)
}

/// Evaluates one input in `session`.
///
/// The text is lexed, parsed and evaluated; the first error at any stage
/// ends the run. A successful `def` binds its variable in the session, which
/// is the only effect a run leaves behind.
///
/// # Errors
/// Returns the [`Error`] of the first stage that failed.
///
/// # Examples
/// ```
/// use quartz::{Session, run};
///
/// let mut session = Session::new();
///
/// let value = run(&mut session, "<stdin>", "(1 + 2) * 3").unwrap();
/// assert_eq!(value.to_string(), "9");
///
/// let error = run(&mut session, "<stdin>", "5 / 0").unwrap_err();
/// assert_eq!(error.details(), "Cannot divide by zero");
/// ```
pub fn run(session: &mut Session, source_name: &str, text: &str) -> Result<Number, Error> {
    let ast = parse(source_name, text)?;
    let context = session.root_context();

    let value = Interpreter::new(session.scopes_mut()).visit(&ast, context)?;
    tracing::debug!(source = source_name, value = %value, "evaluated input");

    Ok(value)
}
