use crate::interpreter::{
    scope::{ContextId, Scopes},
    value::core::{Number, NumberValue},
};

/// Settings for a new [`Session`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Name of the root context, shown in tracebacks.
    pub display_name: String,
    /// Variables defined before the first input is evaluated.
    pub bindings:     Vec<(String, NumberValue)>,
}

impl Default for SessionConfig {
    /// A `<program>` context with `null` bound to `0`.
    fn default() -> Self {
        Self { display_name: String::from("<program>"),
               bindings:     vec![(String::from("null"), NumberValue::Int(0))], }
    }
}

/// Interpreter state that outlives a single [`run`](crate::run) call.
///
/// A session owns the scope arena and the root context whose symbol table
/// holds the global variables. Definitions made by one call are visible to
/// every later call on the same session; nothing else carries over.
///
/// ## Usage
/// ```
/// use quartz::{Session, run};
///
/// let mut session = Session::new();
/// run(&mut session, "<stdin>", "def x : 5").unwrap();
///
/// let x = run(&mut session, "<stdin>", "x * 2").unwrap();
/// assert_eq!(x.to_string(), "10");
/// ```
#[derive(Debug)]
pub struct Session {
    scopes: Scopes,
    root:   ContextId,
}

impl Session {
    /// Creates a session with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Creates a session whose root context and initial variables come from
    /// `config`.
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        let mut scopes = Scopes::new();
        let root = scopes.push_context(config.display_name, None);

        let mut session = Self { scopes, root };
        for (name, value) in config.bindings {
            session.define(&name, value);
        }
        session
    }

    /// Binds `name` in the global table.
    pub fn define(&mut self, name: &str, value: impl Into<NumberValue>) {
        let table = self.scopes.context(self.root).symbol_table;
        self.scopes
            .table_mut(table)
            .set(name, Number::new(value).with_context(self.root));
    }

    /// Looks up a global variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<NumberValue> {
        let table = self.scopes.context(self.root).symbol_table;
        self.scopes.lookup(table, name).map(Number::value)
    }

    /// Lists the global variables, sorted by name.
    #[must_use]
    pub fn variables(&self) -> Vec<(String, NumberValue)> {
        let table = self.scopes.context(self.root).symbol_table;
        let mut variables: Vec<_> = self.scopes
                                        .table(table)
                                        .iter()
                                        .map(|(name, value)| (name.to_string(), value.value()))
                                        .collect();
        variables.sort_by(|a, b| a.0.cmp(&b.0));
        variables
    }

    /// The context every top-level evaluation runs in.
    #[must_use]
    pub const fn root_context(&self) -> ContextId {
        self.root
    }

    #[must_use]
    pub const fn scopes(&self) -> &Scopes {
        &self.scopes
    }

    pub const fn scopes_mut(&mut self) -> &mut Scopes {
        &mut self.scopes
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
