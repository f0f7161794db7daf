/// Entry points of the grammar.
///
/// Holds the top-level rule, which demands that exactly one expression spans
/// the whole input, and the `expr` rule with the `def` definition form.
pub mod core;

/// Prefix operators and atoms.
///
/// Parses unary `+`, `-` and `%`, numeric literals, variable names and
/// parenthesized groups.
pub mod unary;

/// Binary operators.
///
/// Implements the shared left-folding combinator and the additive,
/// multiplicative and power tiers built on it.
pub mod binary;

/// Token stream and parsing helpers.
///
/// Provides the cursor the grammar rules consume tokens through, including
/// the consumption counter used to decide which of two errors to report.
pub mod utils;
