//! Where printed lines and diagnostics go.
//!
//! The interpreter hands every line to a [`Sink`] the moment it is produced,
//! so a long `repeat` never accumulates in memory and a diagnostic lands next
//! to the output of the statements around it.

use std::io::{self, Write};

use crate::error::ScriptError;

/// Receiver for the interpreter's two output channels.
pub trait Sink {
    /// Emit one printed line.  An error means the output channel is closed
    /// and nothing further should be printed.
    fn print(&mut self, line: &str) -> io::Result<()>;

    /// Emit one diagnostic.
    fn report(&mut self, diag: &ScriptError);
}

// ── In-memory buffer ──────────────────────────────────────────────────────────

/// Collects output and diagnostics in memory, up to a line limit.
#[derive(Debug)]
pub struct Buffer {
    pub lines: Vec<String>,
    pub diagnostics: Vec<ScriptError>,
    limit: usize,
}

impl Buffer {
    /// Line limit used by [`Buffer::new`].
    pub const DEFAULT_LIMIT: usize = 1 << 20;

    pub fn new() -> Self {
        Self::with_limit(Self::DEFAULT_LIMIT)
    }

    /// A buffer that refuses lines once it holds `limit` of them.
    pub fn with_limit(limit: usize) -> Self {
        Buffer {
            lines: Vec::new(),
            diagnostics: Vec::new(),
            limit,
        }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for Buffer {
    fn print(&mut self, line: &str) -> io::Result<()> {
        if self.lines.len() >= self.limit {
            return Err(io::Error::other(format!(
                "output buffer full ({} lines)",
                self.limit
            )));
        }
        self.lines.push(line.to_owned());
        Ok(())
    }

    fn report(&mut self, diag: &ScriptError) {
        self.diagnostics.push(diag.clone());
    }
}

// ── Writer pair ───────────────────────────────────────────────────────────────

/// Writes lines to `out` and diagnostics to `err`, one line per call.
pub struct Streams<O, E> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> Streams<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Streams { out, err }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> Sink for Streams<O, E> {
    fn print(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }

    fn report(&mut self, diag: &ScriptError) {
        // Nowhere left to complain if stderr itself is gone.
        let _ = writeln!(self.err, "{diag}");
        let _ = self.err.flush();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
