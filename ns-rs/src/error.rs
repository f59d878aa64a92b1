//! Error types.
//!
//! Statement-level failures ([`ScriptError`]) are never fatal: the
//! interpreter reports them as diagnostics and moves on to the next
//! statement.  [`LoadError`] is raised before any statement runs and ends
//! the whole run.

use std::path::PathBuf;

use thiserror::Error;

/// What went wrong while executing a statement that did match a shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow")]
    Overflow,
    #[error("invalid integer literal '{0}'")]
    InvalidInteger(String),
    #[error("invalid repeat count '{0}'")]
    InvalidRepeatCount(String),
    /// The output sink refused a line.
    #[error("output failed: {0}")]
    Output(String),
}

/// A per-statement diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// The statement matched none of the recognised shapes.
    #[error("SyntaxError: Unknown command - '{statement}'")]
    Syntax { statement: String },
    /// The statement matched, but its effect failed.
    #[error("RuntimeError: {kind} in line '{statement}'")]
    Runtime {
        kind: RuntimeErrorKind,
        statement: String,
    },
}

impl ScriptError {
    pub fn syntax(statement: &str) -> Self {
        ScriptError::Syntax {
            statement: statement.to_owned(),
        }
    }

    pub fn runtime(kind: RuntimeErrorKind, statement: &str) -> Self {
        ScriptError::Runtime {
            kind,
            statement: statement.to_owned(),
        }
    }

    /// The normalized statement text this diagnostic refers to.
    pub fn statement(&self) -> &str {
        match self {
            ScriptError::Syntax { statement } | ScriptError::Runtime { statement, .. } => {
                statement
            }
        }
    }
}

/// The script source could not be obtained.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Error: File '{}' not found.", .0.display())]
    NotFound(PathBuf),
    #[error("Error: {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ── Tests ─────────────────────────────────────────────────────────────────────
