//! Statement splitter.
//!
//! Turns raw source text into the ordered list of statements the interpreter
//! executes.  A statement is whatever lies between two periods, trimmed and
//! lowercased.  With comment stripping enabled, `//` comments are removed line
//! by line first and the surviving lines are joined with single spaces.
//!
//! Lowercasing covers the whole statement, quoted text included.

/// Marker that starts a comment running to the end of the physical line.
pub const COMMENT_MARKER: &str = "//";

/// Character that terminates a statement.
pub const TERMINATOR: char = '.';

/// Whether `c` ends a physical line.  A lone `\r` counts, as do the ASCII
/// file/group/record separators and the Unicode line and paragraph breaks.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split `src` into normalized statements.
///
/// Every returned statement is non-empty, trimmed, and lowercase, and the
/// order matches the source.
pub fn split_statements(src: &str, strip_comments: bool) -> Vec<String> {
    if strip_comments {
        split_blob(&strip_comment_lines(src))
    } else {
        split_blob(src)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Drop blank and full-line comment lines, truncate inline comments, and join
/// what is left with a single space.
fn strip_comment_lines(src: &str) -> String {
    // `\r\n` leaves an empty piece between the two breaks; the filter drops it.
    src.split(is_line_break)
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with(COMMENT_MARKER))
        .map(|l| match l.split_once(COMMENT_MARKER) {
            Some((code, _)) => code.trim(),
            None => l,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn split_blob(blob: &str) -> Vec<String> {
    blob.split(TERMINATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
