use log::debug;

use crate::{
    error::Error,
    interpreter::{context::ExecutionContext, parser::grammar::Grammar},
};

/// A sequence of statements evaluated against one shared context.
///
/// A session starts with an empty [`ExecutionContext`]; variables and maps
/// persist from one statement to the next and are dropped with the session.
///
/// # Example
/// ```
/// use gramcalc::{Grammar, Session};
///
/// let mut session = Session::new(Grammar::full());
/// assert_eq!(session.execute("@defmap yx").unwrap(), None);
/// assert_eq!(session.execute("yx[2] = yx[3] = 4").unwrap(), Some(4.0));
/// assert_eq!(session.execute("yx[2] / yx[3]").unwrap(), Some(1.0));
/// assert_eq!(session.last_value(), Some(1.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    grammar:    Grammar,
    context:    ExecutionContext,
    last_value: Option<f64>,
}

impl Session {
    /// Creates a session with an empty context.
    #[must_use]
    pub fn new(grammar: Grammar) -> Self {
        Self { grammar,
               context: ExecutionContext::new(),
               last_value: None }
    }

    /// Parses and evaluates one statement.
    ///
    /// # Returns
    /// The value of an expression statement, or `None` for a map declaration.
    ///
    /// # Errors
    /// Returns the parse or runtime error of the statement. The context keeps
    /// any writes made before the error.
    pub fn execute(&mut self, source: &str) -> Result<Option<f64>, Error> {
        let statement = crate::parse_statement(source, &self.grammar)?;
        debug!("executing `{statement}`");

        let value = match crate::evaluate(&statement, &mut self.context)? {
            Some(value) => Some(value.read(&self.context)?),
            None => None,
        };

        if value.is_some() {
            self.last_value = value;
        }
        Ok(value)
    }

    /// The value of the most recent statement that produced one.
    #[must_use]
    pub const fn last_value(&self) -> Option<f64> {
        self.last_value
    }

    /// The grammar statements are parsed with.
    #[must_use]
    pub const fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// The session's execution context.
    #[must_use]
    pub const fn context(&self) -> &ExecutionContext {
        &self.context
    }
}
