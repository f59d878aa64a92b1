//! `ns`: an interpreter for NaturalScript, a notation of English-like
//! sentences such as `assign 5 to x.` and `repeat 3 times print "hi".`

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod script;
pub mod var;
