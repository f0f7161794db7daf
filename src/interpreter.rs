/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, applies the arithmetic operators,
/// reads and defines variables, and turns arithmetic faults such as
/// division by zero into positioned runtime errors with a traceback.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a list of positioned
/// tokens: numbers, identifiers, the `def` keyword, operators and
/// parentheses, terminated by an end-of-input token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per precedence tier. It
/// reports the first syntax error it meets, pointing at the offending token.
pub mod parser;
/// Source positions and spans.
///
/// Tracks the index, line and column of a cursor in a named source buffer.
/// Every token, node, value and error carries spans built from these.
pub mod position;
/// Symbol tables and contexts.
///
/// An arena of variable tables and execution contexts linked to their
/// parents by index. Lookups walk the chain; tracebacks are read from it.
pub mod scope;
/// Interpreter state shared by successive runs.
///
/// A session owns the scope arena and the global context, so variables
/// defined by one input remain visible to the next.
pub mod session;
/// The value module defines the runtime data types for evaluation.
///
/// The only runtime type is the number: an integer or a float, together
/// with the span and context it was produced in.
pub mod value;
