//! Statement shapes.
//!
//! Each [`Matcher`] pairs a regex anchored at the start of a statement with
//! an extractor that turns the captures into a [`Command`].  Matching is
//! pure: it never touches the variable store.  The table order is the
//! priority order, and the first matcher that fits wins.
//!
//! | Priority | Shape |
//! |----------|-------|
//! | 1 | `<add\|subtract\|multiply\|divide> <int> and <int> and assign to <var>` |
//! | 2 | `assign <int\|"text"> to <var>` |
//! | 3 | `print <var\|"text">` |
//! | 4 | `if <var> is <int> then print <var>` |
//! | 5 | `repeat <int\|var> times print <payload>` |
//!
//! Text after a complete shape is ignored.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::value::ArithOp;

// ── Public types ──────────────────────────────────────────────────────────────

/// A literal on the right-hand side of `assign`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal<'a> {
    /// An all-digit token, not yet range-checked.
    Int(&'a str),
    /// Quoted text with the quotes already stripped.
    Text(&'a str),
}

/// A recognised statement, borrowing its operands from the statement text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Arith {
        op: ArithOp,
        lhs: &'a str,
        rhs: &'a str,
        target: &'a str,
    },
    Assign {
        literal: Literal<'a>,
        target: &'a str,
    },
    /// `arg` is either a bare word or a token still wrapped in quotes.
    Print { arg: &'a str },
    IfPrint {
        var: &'a str,
        expected: &'a str,
        target: &'a str,
    },
    Repeat { count: &'a str, payload: &'a str },
}

type Extract = for<'a> fn(&Captures<'a>) -> Option<Command<'a>>;

/// One recognised statement shape.
pub struct Matcher {
    name: &'static str,
    regex: Regex,
    extract: Extract,
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("name", &self.name)
            .field("regex", &self.regex.as_str())
            .finish()
    }
}

impl Matcher {
    fn new(name: &'static str, src: &str, extract: Extract) -> Self {
        let regex = Regex::new(src)
            .unwrap_or_else(|e| panic!("matcher '{name}' has an invalid pattern: {e}"));
        Self { name, regex, extract }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Try this shape against a normalized statement.
    pub fn try_match<'a>(&self, stmt: &'a str) -> Option<Command<'a>> {
        let caps = self.regex.captures(stmt)?;
        (self.extract)(&caps)
    }
}

// ── Matcher table ─────────────────────────────────────────────────────────────

static MATCHERS: LazyLock<[Matcher; 5]> = LazyLock::new(|| {
    [
        Matcher::new(
            "arith",
            r"^(add|subtract|multiply|divide)\s+([0-9]+)\s+and\s+([0-9]+)\s+and\s+assign\s+to\s+([a-z]+)",
            extract_arith,
        ),
        Matcher::new(
            "assign",
            r#"^assign\s+([0-9]+|"[^"]+")\s+to\s+([a-z]+)"#,
            extract_assign,
        ),
        Matcher::new("print", r#"^print\s+([a-z]+|"[^"]+")"#, extract_print),
        Matcher::new(
            "if",
            r"^if\s+([a-z]+)\s+is\s+([0-9]+)\s+then\s+print\s+([a-z]+)",
            extract_if,
        ),
        Matcher::new(
            "repeat",
            r"^repeat\s+([a-z0-9]+)\s+times\s+print\s+(.+)$",
            extract_repeat,
        ),
    ]
});

/// The matchers in priority order.
pub fn matchers() -> &'static [Matcher] {
    MATCHERS.as_slice()
}

/// Find the first shape that fits `stmt`.
///
/// Returns the matcher's name alongside the extracted command, or `None` when
/// the statement is not a recognised sentence.
pub fn match_statement(stmt: &str) -> Option<(&'static str, Command<'_>)> {
    matchers()
        .iter()
        .find_map(|m| m.try_match(stmt).map(|cmd| (m.name, cmd)))
}

/// Remove every leading and trailing double quote.
pub fn strip_quotes(token: &str) -> &str {
    token.trim_matches('"')
}

// ── Extractors ────────────────────────────────────────────────────────────────

fn extract_arith<'a>(caps: &Captures<'a>) -> Option<Command<'a>> {
    Some(Command::Arith {
        op: ArithOp::from_verb(caps.get(1)?.as_str())?,
        lhs: caps.get(2)?.as_str(),
        rhs: caps.get(3)?.as_str(),
        target: caps.get(4)?.as_str(),
    })
}

fn extract_assign<'a>(caps: &Captures<'a>) -> Option<Command<'a>> {
    let token = caps.get(1)?.as_str();
    let literal = if token.bytes().all(|b| b.is_ascii_digit()) {
        Literal::Int(token)
    } else {
        Literal::Text(strip_quotes(token))
    };
    Some(Command::Assign {
        literal,
        target: caps.get(2)?.as_str(),
    })
}

fn extract_print<'a>(caps: &Captures<'a>) -> Option<Command<'a>> {
    Some(Command::Print {
        arg: caps.get(1)?.as_str(),
    })
}

fn extract_if<'a>(caps: &Captures<'a>) -> Option<Command<'a>> {
    Some(Command::IfPrint {
        var: caps.get(1)?.as_str(),
        expected: caps.get(2)?.as_str(),
        target: caps.get(3)?.as_str(),
    })
}

fn extract_repeat<'a>(caps: &Captures<'a>) -> Option<Command<'a>> {
    Some(Command::Repeat {
        count: caps.get(1)?.as_str(),
        payload: caps.get(2)?.as_str(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
