//! NaturalScript interpreter.
//!
//! The [`Interpreter`] owns the variable store, splits source text into
//! statements, and applies the first matching [`Command`] for each one.
//! Printed lines and per-statement diagnostics go straight to the caller's
//! [`Sink`] as they happen.

use tracing::{debug, trace, warn};

use super::{
    matcher::{match_statement, strip_quotes, Command, Literal},
    sink::Sink,
    split::split_statements,
    value::Value,
};
use crate::config::{Config, PrintFallback};
use crate::error::{RuntimeErrorKind, ScriptError};
use crate::var::VarStore;

/// The NaturalScript interpreter.
#[derive(Debug, Default)]
pub struct Interpreter {
    vars: VarStore,
    config: Config,
    /// Set once the sink refuses a line; later prints are dropped.
    output_closed: bool,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Interpreter {
            config,
            ..Self::default()
        }
    }

    /// Read-only view of the variable store.
    pub fn vars(&self) -> &VarStore {
        &self.vars
    }

    /// Get a variable's current value.
    pub fn get_var(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    // ── Execution ─────────────────────────────────────────────────────────────

    /// Run every statement in `src`, in order.
    ///
    /// Never fails: a statement that does not match or does not execute is
    /// reported to `sink` and the run continues with the next one.
    pub fn execute(&mut self, src: &str, sink: &mut dyn Sink) {
        self.output_closed = false;
        let stmts = split_statements(src, self.config.strip_comments);
        debug!(count = stmts.len(), "split source into statements");
        for stmt in &stmts {
            trace!(statement = %stmt, "next statement");
            if let Err(e) = self.exec_statement(stmt, sink) {
                warn!("{e}");
                sink.report(&e);
            }
        }
    }

    /// Match and run a single normalized statement.
    pub fn exec_statement(&mut self, stmt: &str, sink: &mut dyn Sink) -> Result<(), ScriptError> {
        let Some((matcher, cmd)) = match_statement(stmt) else {
            return Err(ScriptError::syntax(stmt));
        };
        debug!(matcher, statement = %stmt, "dispatch");
        self.apply(cmd, sink)
            .map_err(|kind| ScriptError::runtime(kind, stmt))
    }

    fn apply(&mut self, cmd: Command<'_>, sink: &mut dyn Sink) -> Result<(), RuntimeErrorKind> {
        match cmd {
            Command::Arith { op, lhs, rhs, target } => {
                let a = Value::parse_int(lhs)?;
                let b = Value::parse_int(rhs)?;
                let result = op.apply(a, b)?;
                debug!(var = target, kind = result.type_name(), "store arithmetic result");
                self.vars.set(target, result);
            }

            Command::Assign { literal, target } => {
                let value = match literal {
                    Literal::Int(digits) => Value::from(Value::parse_int(digits)?),
                    Literal::Text(text) => Value::from(text),
                };
                self.vars.set(target, value);
            }

            Command::Print { arg } => {
                let line = match self.vars.get(arg) {
                    Some(v) => v.to_string(),
                    None if arg.starts_with('"') => strip_quotes(arg).to_owned(),
                    None => match self.config.print_fallback {
                        PrintFallback::Literal => strip_quotes(arg).to_owned(),
                        PrintFallback::NotFound => not_found(arg),
                    },
                };
                self.emit(sink, &line)?;
            }

            Command::IfPrint { var, expected, target } => {
                let expected = Value::parse_int(expected)?;
                if self.vars.get_int(var) == Some(expected) {
                    let line = self
                        .vars
                        .get(target)
                        .map_or_else(|| not_found(target), Value::to_string);
                    self.emit(sink, &line)?;
                }
            }

            Command::Repeat { count, payload } => {
                let times = self.resolve_count(count)?;
                let line = if payload.starts_with('"') {
                    strip_quotes(payload).to_owned()
                } else {
                    self.vars
                        .get(payload)
                        .map_or_else(|| payload.to_owned(), Value::to_string)
                };
                // Negative counts give an empty range.
                for _ in 0..times {
                    if !self.emit(sink, &line)? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Send one line to the sink.
    ///
    /// Returns `Ok(false)` when output is already closed.  The first refusal
    /// closes output and fails the current statement.
    fn emit(&mut self, sink: &mut dyn Sink, line: &str) -> Result<bool, RuntimeErrorKind> {
        if self.output_closed {
            return Ok(false);
        }
        match sink.print(line) {
            Ok(()) => Ok(true),
            Err(e) => {
                self.output_closed = true;
                Err(RuntimeErrorKind::Output(e.to_string()))
            }
        }
    }

    /// Resolve a repeat count: a digit literal or a variable holding an integer.
    fn resolve_count(&self, token: &str) -> Result<i64, RuntimeErrorKind> {
        if token.bytes().all(|b| b.is_ascii_digit()) {
            return Value::parse_int(token);
        }
        self.vars
            .get_int(token)
            .ok_or_else(|| RuntimeErrorKind::InvalidRepeatCount(token.to_owned()))
    }
}

fn not_found(name: &str) -> String {
    format!("Error: '{name}' not found")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
