//! NaturalScript: sentence-shaped commands terminated by periods.
//!
//! Source text goes through two stages:
//!
//! - [`split`] turns it into lowercase statements
//! - [`interp`] matches each statement against the shapes in [`matcher`]
//!   and applies the effect to the variable store
//!
//! Printed lines and diagnostics leave through a [`sink::Sink`].
//!
//! # Quick start
//!
//! ```rust
//! use ns::script::{Buffer, Interpreter};
//!
//! let mut interp = Interpreter::new();
//! let mut out = Buffer::new();
//! interp.execute("add 2 and 3 and assign to sum. print sum.", &mut out);
//! assert_eq!(out.lines, vec!["5"]);
//! ```

pub mod interp;
pub mod matcher;
pub mod sink;
pub mod split;
pub mod value;

// Re-exports for convenience.
pub use interp::Interpreter;
pub use sink::{Buffer, Sink, Streams};
pub use value::Value;
