use std::{
    fmt,
    sync::{Mutex, MutexGuard, PoisonError},
};

use tracing::debug;

use crate::{
    error::CalcError,
    interpreter::{
        assignment::{Assignment, parse_assignment},
        evaluator::core::{Evaluator, MAX_NESTING_DEPTH},
        store::VariableStore,
        tokenizer::tokenize,
    },
};

/// Tunable limits of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// How many levels of parentheses an expression may nest.
    pub max_depth: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { max_depth: MAX_NESTING_DEPTH }
    }
}

/// What a successfully processed line produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The value of an expression line.
    Value(f64),
    /// An assignment line stored `value` under `name`.
    Assigned {
        /// The assigned variable.
        name:  char,
        /// Its new value.
        value: f64,
    },
}

impl Outcome {
    /// Returns the computed value, whether it was printed or stored.
    #[must_use]
    pub const fn value(&self) -> f64 {
        match self {
            Self::Value(value) | Self::Assigned { value, .. } => *value,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "={value}"),
            Self::Assigned { name, value } => write!(f, "{name} = {value}"),
        }
    }
}

/// A calculator session: one variable table shared by every line.
///
/// Lines containing `=` are assignments and update the table; all other lines
/// are evaluated against it. A failed line leaves the table exactly as it
/// was, so a session can always continue with the next line.
///
/// # Example
/// ```
/// use linecalc::interpreter::session::{Outcome, Session};
///
/// let mut session = Session::new();
///
/// let stored = session.evaluate_line("x = 3+4").unwrap();
/// assert_eq!(stored, Some(Outcome::Assigned { name: 'x', value: 7.0 }));
///
/// let value = session.evaluate_line("x*2").unwrap();
/// assert_eq!(value, Some(Outcome::Value(14.0)));
///
/// assert!(session.evaluate_line("x/0").is_err());
/// assert_eq!(session.store().get('x'), Some(7.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    store:  VariableStore,
    config: SessionConfig,
}

impl Session {
    /// Creates a session with an empty variable table and default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with an empty variable table and the given limits.
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        Self { store: VariableStore::new(),
               config }
    }

    /// Returns the variable table.
    #[must_use]
    pub const fn store(&self) -> &VariableStore {
        &self.store
    }

    /// Returns the session limits.
    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        self.config
    }

    /// Processes one line of input.
    ///
    /// Blank lines produce `Ok(None)`. A line containing `=` is parsed as an
    /// assignment and the variable is stored only once its value has been
    /// computed. Any other line is tokenized and evaluated.
    ///
    /// # Errors
    /// Returns a [`CalcError`] describing why the line was rejected. The
    /// variable table is not modified in that case.
    pub fn evaluate_line(&mut self, line: &str) -> Result<Option<Outcome>, CalcError> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        let outcome = if line.contains('=') {
            self.assign(line)?
        } else {
            Outcome::Value(self.evaluate(line)?)
        };
        Ok(Some(outcome))
    }

    /// Tokenizes and evaluates an expression line without touching the
    /// variable table.
    ///
    /// # Errors
    /// Returns [`CalcError::InvalidExpression`] if the line does not tokenize
    /// and [`CalcError::Runtime`] if it cannot be computed.
    pub fn evaluate(&self, line: &str) -> Result<f64, CalcError> {
        let expression = tokenize(line, &self.store)?;
        Ok(self.evaluator().evaluate(&expression)?)
    }

    /// Parses and evaluates an assignment line, then stores the result.
    ///
    /// # Errors
    /// Returns [`CalcError::InvalidAssignment`] if the line is not a valid
    /// assignment and [`CalcError::Runtime`] if the right-hand side cannot be
    /// computed. Nothing is stored on error.
    pub fn assign(&mut self, line: &str) -> Result<Outcome, CalcError> {
        let Assignment { name, expression } = parse_assignment(line, &self.store)?;
        let value = self.evaluator().evaluate(&expression)?;

        self.store.set(name, value);
        debug!(%name, value, "committed assignment");
        Ok(Outcome::Assigned { name, value })
    }

    fn evaluator(&self) -> Evaluator<'_> {
        Evaluator::new(&self.store).with_max_depth(self.config.max_depth)
    }
}

/// A [`Session`] that can be shared between threads.
///
/// Each line is processed under a single lock, so tokenizing a line that reads
/// a variable never interleaves with an assignment to it.
///
/// # Example
/// ```
/// use std::{sync::Arc, thread};
///
/// use linecalc::interpreter::session::SharedSession;
///
/// let session = Arc::new(SharedSession::default());
/// session.evaluate_line("n = 1").unwrap();
///
/// let handles: Vec<_> = (0..4).map(|_| {
///                                 let session = Arc::clone(&session);
///                                 thread::spawn(move || session.evaluate_line("n = n+1").unwrap())
///                             })
///                             .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(session.get('n'), Some(5.0));
/// ```
#[derive(Debug, Default)]
pub struct SharedSession {
    inner: Mutex<Session>,
}

impl SharedSession {
    /// Wraps an existing session.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { inner: Mutex::new(session) }
    }

    /// Processes one line of input while holding the session lock.
    ///
    /// # Errors
    /// See [`Session::evaluate_line`].
    pub fn evaluate_line(&self, line: &str) -> Result<Option<Outcome>, CalcError> {
        self.lock().evaluate_line(line)
    }

    /// Returns the current value of a variable.
    #[must_use]
    pub fn get(&self, name: char) -> Option<f64> {
        self.lock().store().get(name)
    }

    /// Consumes the wrapper and returns the session.
    #[must_use]
    pub fn into_inner(self) -> Session {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // The table is only written after a line fully succeeds, so a poisoned
    // lock still guards a consistent session.
    fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
