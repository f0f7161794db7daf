use std::collections::HashMap;

use crate::{
    error::Frame,
    interpreter::{position::Position, value::core::Number},
};

/// Index of a [`SymbolTable`] inside a [`Scopes`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

/// Index of a [`Context`] inside a [`Scopes`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(usize);

/// Variable bindings of one scope.
///
/// Lookups that miss continue in the parent table; writes always stay local.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Number>,
    parent:  Option<TableId>,
}

impl SymbolTable {
    #[must_use]
    pub fn new(parent: Option<TableId>) -> Self {
        Self { symbols: HashMap::new(),
               parent }
    }

    /// Looks `name` up in this table only.
    #[must_use]
    pub fn get_local(&self, name: &str) -> Option<&Number> {
        self.symbols.get(name)
    }

    /// Binds `name` in this table, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: Number) {
        self.symbols.insert(name.to_string(), value);
    }

    /// Removes the local binding of `name`, returning it.
    pub fn remove(&mut self, name: &str) -> Option<Number> {
        self.symbols.remove(name)
    }

    /// The table lookups fall back to.
    #[must_use]
    pub const fn parent(&self) -> Option<TableId> {
        self.parent
    }

    /// Iterates over the local bindings in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Number)> {
        self.symbols.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// A frame of execution: what tracebacks print and where variable lookups
/// start.
#[derive(Debug)]
pub struct Context {
    /// Name shown in tracebacks, such as `<program>`.
    pub display_name:     String,
    /// The context this one was entered from.
    pub parent:           Option<ContextId>,
    /// Where in the parent this context was entered. Set exactly when
    /// `parent` is.
    pub parent_entry_pos: Option<Position>,
    /// The variables of this context.
    pub symbol_table:     TableId,
}

/// Arena holding every symbol table and context of a session.
///
/// Parents are referred to by index, so chains of any length can be built
/// without shared ownership. Ids are only handed out by the arena that owns
/// the entries, and entries are never removed.
#[derive(Debug, Default)]
pub struct Scopes {
    tables:   Vec<SymbolTable>,
    contexts: Vec<Context>,
}

impl Scopes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a symbol table chained to `parent`.
    pub fn push_table(&mut self, parent: Option<TableId>) -> TableId {
        self.tables.push(SymbolTable::new(parent));
        TableId(self.tables.len() - 1)
    }

    /// Adds a context named `display_name`.
    ///
    /// A root context (`entered_from == None`) gets a fresh table with no
    /// parent. A child context records the parent and the position it was
    /// entered at, and gets a table whose lookups fall back to the parent's
    /// table.
    ///
    /// # Example
    /// ```
    /// use quartz::interpreter::{
    ///     position::{Position, Source},
    ///     scope::Scopes,
    ///     value::core::Number,
    /// };
    ///
    /// let mut scopes = Scopes::new();
    /// let root = scopes.push_context("<program>", None);
    /// let root_table = scopes.context(root).symbol_table;
    /// scopes.table_mut(root_table).set("x", Number::new(1_i64));
    ///
    /// let entry = Position::start(Source::new("<stdin>", "x"));
    /// let child = scopes.push_context("<inner>", Some((root, entry)));
    /// let child_table = scopes.context(child).symbol_table;
    ///
    /// assert!(scopes.lookup(child_table, "x").is_some());
    /// assert!(scopes.table(child_table).get_local("x").is_none());
    /// ```
    pub fn push_context(&mut self,
                        display_name: impl Into<String>,
                        entered_from: Option<(ContextId, Position)>)
                        -> ContextId {
        let (parent, parent_entry_pos) = match entered_from {
            Some((id, pos)) => (Some(id), Some(pos)),
            None => (None, None),
        };
        let parent_table = parent.map(|id| self.context(id).symbol_table);
        let symbol_table = self.push_table(parent_table);

        self.contexts.push(Context { display_name: display_name.into(),
                                     parent,
                                     parent_entry_pos,
                                     symbol_table });
        ContextId(self.contexts.len() - 1)
    }

    #[must_use]
    pub fn context(&self, id: ContextId) -> &Context {
        &self.contexts[id.0]
    }

    #[must_use]
    pub fn table(&self, id: TableId) -> &SymbolTable {
        &self.tables[id.0]
    }

    pub fn table_mut(&mut self, id: TableId) -> &mut SymbolTable {
        &mut self.tables[id.0]
    }

    /// Looks `name` up in `table`, then in each ancestor table.
    #[must_use]
    pub fn lookup(&self, table: TableId, name: &str) -> Option<&Number> {
        let mut current = Some(table);
        while let Some(id) = current {
            let table = self.table(id);
            if let Some(value) = table.get_local(name) {
                return Some(value);
            }
            current = table.parent();
        }
        None
    }

    /// Collects the traceback for a failure at `position` inside `context`.
    ///
    /// Walks from the failure site outward through each context's entry
    /// position and returns the frames oldest first.
    #[must_use]
    pub fn traceback(&self, context: ContextId, position: &Position) -> Vec<Frame> {
        let mut frames = Vec::new();
        let mut position = position.clone();
        let mut current = Some(context);

        while let Some(id) = current {
            let context = self.context(id);
            frames.push(Frame { position,
                                display_name: context.display_name.clone() });

            match &context.parent_entry_pos {
                Some(entry) => position = entry.clone(),
                None => break,
            }
            current = context.parent;
        }

        frames.reverse();
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::RuntimeError,
        interpreter::{
            position::{Source, Span},
            value::core::NumberValue,
        },
    };

    #[test]
    fn writes_stay_in_the_child_table() {
        let mut scopes = Scopes::new();
        let root = scopes.push_context("<program>", None);
        let entry = Position::start(Source::new("t", "x"));
        let child = scopes.push_context("<call>", Some((root, entry)));

        let child_table = scopes.context(child).symbol_table;
        scopes.table_mut(child_table).set("x", Number::new(2_i64));

        let root_table = scopes.context(root).symbol_table;
        assert!(scopes.lookup(root_table, "x").is_none());
        assert!(scopes.lookup(child_table, "x").is_some());
    }

    #[test]
    fn removed_bindings_are_gone() {
        let mut table = SymbolTable::new(None);
        table.set("x", Number::new(3_i64));

        let removed = table.remove("x").map(|n| n.value());
        assert_eq!(removed, Some(NumberValue::Int(3)));
        assert!(table.get_local("x").is_none());
        assert!(table.remove("x").is_none());
    }

    #[test]
    fn traceback_lists_oldest_frame_first() {
        let source = Source::new("t", "abc");
        let outer_entry = Position::start(source.clone());
        let failure = outer_entry.next('a').next('b');

        let mut scopes = Scopes::new();
        let root = scopes.push_context("<program>", None);
        let inner = scopes.push_context("<inner>", Some((root, outer_entry)));

        let frames = scopes.traceback(inner, &failure);
        let names: Vec<_> = frames.iter().map(|f| f.display_name.as_str()).collect();

        assert_eq!(names, ["<program>", "<inner>"]);
        assert_eq!(frames[0].position.column, 0);
        assert_eq!(frames[1].position.column, 2);
    }

    #[test]
    fn runtime_error_prints_every_frame() {
        let source = Source::new("t", "abc");
        let outer_entry = Position::start(source.clone());
        let failure = outer_entry.next('a').next('b');

        let mut scopes = Scopes::new();
        let root = scopes.push_context("<program>", None);
        let inner = scopes.push_context("<inner>", Some((root, outer_entry)));

        let span = Span::new(failure.clone(), failure.next('c'));
        let error = RuntimeError::new(span, "boom", scopes.traceback(inner, &failure));

        assert_eq!(error.to_string(),
                   "Traceback (most recent call last):\n  at t:1:1 in <program>\n  at t:1:3 in \
                    <inner>\nRuntimeError: boom\nabc\n  ^");
    }
}
