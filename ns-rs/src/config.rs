//! Interpreter settings and the `.nsrc` config file parser.
//!
//! | Directive | Action |
//! |-----------|--------|
//! | `set <name>=<value>` or `set <name> <value>` | set an option |
//! | Lines starting with `;` | comment, ignored |
//!
//! Options:
//!
//! | Name | Values | Default |
//! |------|--------|---------|
//! | `comments` | `on`/`off`, `true`/`false`, `1`/`0` | `on` |
//! | `print_fallback` | `literal`/`notfound` | `literal` |

use std::path::Path;

// ── Public API ────────────────────────────────────────────────────────────────

/// What `print <word>` shows when `<word>` is neither a variable nor quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintFallback {
    /// Print the word itself.
    #[default]
    Literal,
    /// Print `Error: '<word>' not found`.
    NotFound,
}

/// A non-fatal error encountered while loading a config file.
#[derive(Debug)]
pub struct ConfigError {
    pub line: usize,
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Interpreter behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Remove `//` comments before splitting into statements.
    pub strip_comments: bool,
    pub print_fallback: PrintFallback,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strip_comments: true,
            print_fallback: PrintFallback::Literal,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config string on top of the defaults.
    ///
    /// Bad lines are reported and skipped; everything else still applies.
    pub fn load_str(s: &str) -> (Self, Vec<ConfigError>) {
        let mut config = Config::new();
        let errors = config.apply_str(s);
        (config, errors)
    }

    /// Read and parse a config file from disk.
    pub fn load_file(path: &Path) -> std::io::Result<(Self, Vec<ConfigError>)> {
        let s = std::fs::read_to_string(path)?;
        Ok(Self::load_str(&s))
    }

    /// Apply every directive in `s` to `self`, returning per-line errors.
    pub fn apply_str(&mut self, s: &str) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        for (i, raw) in s.lines().enumerate() {
            let lineno = i + 1;
            let line = raw.trim();

            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            let (cmd, args_str) = line
                .split_once(|c: char| c.is_ascii_whitespace())
                .unwrap_or((line, ""));

            let result = match cmd {
                "set" => self.parse_set(args_str.trim()),
                other => Err(format!("unknown directive '{other}'")),
            };
            if let Err(message) = result {
                errors.push(ConfigError { line: lineno, message });
            }
        }

        errors
    }

    /// Set a single option by name.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        match name {
            "comments" => {
                self.strip_comments = parse_switch(value)
                    .ok_or_else(|| format!("comments: expected on or off, got '{value}'"))?;
            }
            "print_fallback" => {
                self.print_fallback = match value.to_ascii_lowercase().as_str() {
                    "literal" => PrintFallback::Literal,
                    "notfound" | "not_found" => PrintFallback::NotFound,
                    _ => {
                        return Err(format!(
                            "print_fallback: expected literal or notfound, got '{value}'"
                        ))
                    }
                };
            }
            _ => return Err(format!("unknown option '{name}'")),
        }
        Ok(())
    }

    fn parse_set(&mut self, args: &str) -> Result<(), String> {
        if args.is_empty() {
            return Err("set: requires an argument".into());
        }

        let (name, value) = if let Some((n, v)) = args.split_once('=') {
            (n.trim(), v.trim())
        } else if let Some((n, v)) = args.split_once(|c: char| c.is_ascii_whitespace()) {
            (n, v.trim())
        } else {
            return Err(format!("set: missing value for '{args}'"));
        };

        if name.is_empty() {
            return Err("set: option name cannot be empty".into());
        }

        self.set_option(name, value)
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Some(true),
        "off" | "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert!(cfg.strip_comments);
        assert_eq!(cfg.print_fallback, PrintFallback::Literal);
    }

    #[test]
    fn set_with_equals() {
        let (cfg, errs) = Config::load_str("set comments=off\nset print_fallback=notfound");
        assert!(errs.is_empty(), "{errs:?}");
        assert!(!cfg.strip_comments);
        assert_eq!(cfg.print_fallback, PrintFallback::NotFound);
    }

    #[test]
    fn set_with_space() {
        let (cfg, errs) = Config::load_str("set comments 0");
        assert!(errs.is_empty(), "{errs:?}");
        assert!(!cfg.strip_comments);
    }

    #[test]
    fn comments_and_blank_lines_skipped() {
        let (cfg, errs) = Config::load_str("; settings\n\n   ;; more\nset print_fallback = notfound\n");
        assert!(errs.is_empty(), "{errs:?}");
        assert_eq!(cfg.print_fallback, PrintFallback::NotFound);
    }

    #[test]
    fn bad_lines_reported_with_line_numbers() {
        let src = "set comments=maybe\nset volume=11\nfrobnicate\nset\nset print_fallback=notfound";
        let (cfg, errs) = Config::load_str(src);
        let lines: Vec<usize> = errs.iter().map(|e| e.line).collect();
        assert_eq!(lines, [1, 2, 3, 4]);
        assert!(cfg.strip_comments);
        assert_eq!(cfg.print_fallback, PrintFallback::NotFound);
    }

    #[test]
    fn missing_value() {
        let (_, errs) = Config::load_str("set comments");
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].to_string(), "line 1: set: missing value for 'comments'");
    }

    #[test]
    fn load_file_reads_disk() {
        use std::io::Write;
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "set comments=off").unwrap();
        let (cfg, errs) = Config::load_file(f.path()).unwrap();
        assert!(errs.is_empty());
        assert!(!cfg.strip_comments);
    }
}
