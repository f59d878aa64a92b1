//! Command-line argument parsing.
//!
//! Usage:
//!   ns [-n] [-s] [-d] [-f[<file>]] <script>

use std::path::PathBuf;

use directories::BaseDirs;

use crate::config::{Config, PrintFallback};

/// One-line usage summary.
pub const USAGE: &str = "Usage: ns [-n] [-s] [-d] [-f[<file>]] <script>";

/// Name of the per-user / per-directory config file.
pub const CONFIG_FILE_NAME: &str = ".nsrc";

// ── Public types ──────────────────────────────────────────────────────────────

/// Parsed command-line arguments.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Script to run.
    pub script: PathBuf,
    /// Config-file specification.
    pub config: ConfigFile,
    /// Keep `//` comments in the source (`-n`).
    pub no_comments: bool,
    /// Print a not-found message for unknown bare words (`-s`).
    pub strict_print: bool,
    /// Debug logging (`-d`).
    pub debug: bool,
}

/// How to choose the config file.
#[derive(Debug, Default)]
pub enum ConfigFile {
    /// Search `<home>/.nsrc`, then `./.nsrc` (default).
    #[default]
    Search,
    /// `-f` with no file argument: skip the config file.
    Skip,
    /// `-f<file>`: load this specific file.
    Explicit(PathBuf),
}

impl CliArgs {
    /// Override `config` with whatever the flags asked for.
    pub fn apply_overrides(&self, config: &mut Config) {
        if self.no_comments {
            config.strip_comments = false;
        }
        if self.strict_print {
            config.print_fallback = PrintFallback::NotFound;
        }
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse `std::env::args()` and return [`CliArgs`] or an error message.
pub fn parse_args() -> Result<CliArgs, String> {
    let raw: Vec<String> = std::env::args().collect();
    parse_argv(raw.get(1..).unwrap_or_default())
}

/// Parse a slice of argument strings (exposed for testing).
///
/// `-f` takes its file only when attached (`-fmy.rc`); a bare `-f` skips the
/// config file.
pub fn parse_argv(argv: &[String]) -> Result<CliArgs, String> {
    let mut args = CliArgs::default();
    let mut positional: Vec<&str> = Vec::new();
    let mut iter = argv.iter();

    while let Some(arg) = iter.next() {
        // `--` ends flag processing.
        if arg == "--" {
            positional.extend(iter.by_ref().map(String::as_str));
            break;
        }

        let Some(flags) = arg.strip_prefix('-').filter(|f| !f.is_empty()) else {
            positional.push(arg);
            continue;
        };

        for (j, ch) in flags.char_indices() {
            match ch {
                'n' => args.no_comments = true,
                's' => args.strict_print = true,
                'd' => args.debug = true,
                'f' => {
                    let file = &flags[j + 1..];
                    args.config = if file.is_empty() {
                        ConfigFile::Skip
                    } else {
                        ConfigFile::Explicit(PathBuf::from(file))
                    };
                    break;
                }
                other => return Err(format!("unknown option -{other}")),
            }
        }
    }

    match positional.as_slice() {
        [script] => {
            args.script = PathBuf::from(*script);
            Ok(args)
        }
        [] => Err("missing script file".to_owned()),
        many => Err(format!("expected one script file, got {}", many.len())),
    }
}

/// Return the first config file that exists: `<home>/.nsrc`, then `./.nsrc`.
pub fn find_user_config() -> Option<PathBuf> {
    let home = BaseDirs::new().map(|d| d.home_dir().join(CONFIG_FILE_NAME));
    home.into_iter()
        .chain(std::iter::once(PathBuf::from(".").join(CONFIG_FILE_NAME)))
        .find(|p| p.exists())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn script_only() {
        let a = parse_argv(&argv(&["hello.bd"])).unwrap();
        assert_eq!(a.script, PathBuf::from("hello.bd"));
        assert!(matches!(a.config, ConfigFile::Search));
        assert!(!a.no_comments && !a.strict_print && !a.debug);
    }

    #[test]
    fn missing_script() {
        assert!(parse_argv(&argv(&[])).is_err());
        assert!(parse_argv(&argv(&["-d"])).is_err());
    }

    #[test]
    fn too_many_scripts() {
        let e = parse_argv(&argv(&["a.bd", "b.bd"])).unwrap_err();
        assert_eq!(e, "expected one script file, got 2");
    }

    #[test]
    fn bool_flags() {
        let a = parse_argv(&argv(&["-n", "-s", "-d", "x.bd"])).unwrap();
        assert!(a.no_comments && a.strict_print && a.debug);
    }

    #[test]
    fn combined_bool_flags() {
        let a = parse_argv(&argv(&["-nsd", "x.bd"])).unwrap();
        assert!(a.no_comments && a.strict_print && a.debug);
    }

    #[test]
    fn unknown_flag() {
        assert_eq!(
            parse_argv(&argv(&["-z", "x.bd"])).unwrap_err(),
            "unknown option -z"
        );
    }

    #[test]
    fn config_embedded() {
        let a = parse_argv(&argv(&["-f/etc/ns.rc", "x.bd"])).unwrap();
        assert!(matches!(&a.config, ConfigFile::Explicit(p) if p == &PathBuf::from("/etc/ns.rc")));
    }

    #[test]
    fn config_flag_ends_the_bundle() {
        let a = parse_argv(&argv(&["-dfns.rc", "x.bd"])).unwrap();
        assert!(a.debug && !a.no_comments && !a.strict_print);
        assert!(matches!(&a.config, ConfigFile::Explicit(p) if p == &PathBuf::from("ns.rc")));
    }

    #[test]
    fn detached_config_name_is_a_script() {
        let e = parse_argv(&argv(&["-f", "my.rc", "x.bd"])).unwrap_err();
        assert_eq!(e, "expected one script file, got 2");
    }

    #[test]
    fn config_skip_before_script() {
        let a = parse_argv(&argv(&["-f", "x.bd"])).unwrap();
        assert!(matches!(a.config, ConfigFile::Skip));
        assert_eq!(a.script, PathBuf::from("x.bd"));
    }

    #[test]
    fn double_dash_ends_flags() {
        let a = parse_argv(&argv(&["--", "-weird.bd"])).unwrap();
        assert_eq!(a.script, PathBuf::from("-weird.bd"));
    }

    #[test]
    fn overrides_apply_on_top_of_config() {
        let a = parse_argv(&argv(&["-ns", "x.bd"])).unwrap();
        let mut cfg = Config::default();
        a.apply_overrides(&mut cfg);
        assert!(!cfg.strip_comments);
        assert_eq!(cfg.print_fallback, PrintFallback::NotFound);
    }
}
