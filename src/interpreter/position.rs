use std::{fmt, rc::Rc};

/// A named source buffer.
///
/// Every [`Position`] produced while lexing the buffer shares the same
/// `Source`, so copying a position never copies the text itself.
#[derive(Debug, PartialEq, Eq)]
pub struct Source {
    /// The name shown in diagnostics, such as `<stdin>`.
    pub name: String,
    /// The full source text.
    pub text: String,
}

impl Source {
    /// Creates a shared source buffer.
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Rc<Self> {
        Rc::new(Self { name: name.into(),
                       text: text.into(), })
    }
}

/// A cursor inside a [`Source`].
///
/// `index` counts characters from the start of the text. `line` and `column`
/// are zero-based and are rendered one-based by the [`Display`](fmt::Display)
/// implementation (`<name>:<line>:<column>`).
///
/// Cloning a position yields an independent copy: advancing the copy never
/// moves the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Character offset from the start of the source.
    pub index:  usize,
    /// Zero-based line number.
    pub line:   usize,
    /// Zero-based column within the line.
    pub column: usize,
    source:     Rc<Source>,
}

impl Position {
    /// Returns the position of the first character of `source`.
    #[must_use]
    pub const fn start(source: Rc<Source>) -> Self {
        Self { index: 0,
               line: 0,
               column: 0,
               source }
    }

    /// Moves the cursor past `current`.
    ///
    /// The index and column always grow by one. Passing a newline moves the
    /// cursor to column zero of the next line.
    ///
    /// # Example
    /// ```
    /// use quartz::interpreter::position::{Position, Source};
    ///
    /// let mut pos = Position::start(Source::new("<stdin>", "1\n2"));
    /// pos.advance('1').advance('\n');
    /// assert_eq!((pos.index, pos.line, pos.column), (2, 1, 0));
    /// ```
    pub const fn advance(&mut self, current: char) -> &mut Self {
        self.index += 1;
        self.column += 1;

        if current == '\n' {
            self.line += 1;
            self.column = 0;
        }

        self
    }

    /// Returns a copy of this position moved one character forward.
    #[must_use]
    pub fn next(&self, current: char) -> Self {
        let mut next = self.clone();
        next.advance(current);
        next
    }

    /// The name of the source buffer.
    #[must_use]
    pub fn source_name(&self) -> &str {
        &self.source.name
    }

    /// The full text of the source buffer.
    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source.text
    }

    /// The shared source buffer.
    #[must_use]
    pub const fn source(&self) -> &Rc<Source> {
        &self.source
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source.name, self.line + 1, self.column + 1)
    }
}

/// A half-open range of source text, from `start` up to (not including)
/// `end`.
///
/// Spans exist purely for diagnostics; evaluation never looks at them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// First character of the span.
    pub start: Position,
    /// Position just past the last character of the span.
    pub end:   Position,
}

impl Span {
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Joins two spans into one running from the start of `self` to the end
    /// of `other`.
    #[must_use]
    pub fn to(&self, other: &Self) -> Self {
        Self { start: self.start.clone(),
               end:   other.end.clone(), }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_a_copy_leaves_the_original_untouched() {
        let source = Source::new("t", "abc");
        let start = Position::start(source);
        let moved = start.next('a');

        assert_eq!(start.index, 0);
        assert_eq!(moved.index, 1);
        assert_eq!(moved.column, 1);
    }

    #[test]
    fn newline_resets_column() {
        let mut pos = Position::start(Source::new("t", "ab\ncd"));
        for ch in "ab\nc".chars() {
            pos.advance(ch);
        }

        assert_eq!(pos.index, 4);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
        assert_eq!(pos.to_string(), "t:2:2");
    }
}
