use std::io;
use std::process::ExitCode;

use ns::cli::{self, ConfigFile};
use ns::config::Config;
use ns::loader::load_script;
use ns::logging;
use ns::script::{Interpreter, Streams};

fn main() -> ExitCode {
    let args = match cli::parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("ns: {e}");
            eprintln!("{}", cli::USAGE);
            return ExitCode::from(2);
        }
    };

    logging::init(args.debug);

    // ── Config: file first, then command-line overrides ──────────────────────
    let config_path = match &args.config {
        ConfigFile::Skip => None,
        ConfigFile::Explicit(path) => Some(path.clone()),
        ConfigFile::Search => cli::find_user_config(),
    };
    let mut config = Config::default();
    if let Some(path) = config_path {
        match Config::load_file(&path) {
            Ok((loaded, errors)) => {
                for e in errors {
                    eprintln!("ns: warning: {}: {e}", path.display());
                }
                config = loaded;
            }
            Err(e) => eprintln!("ns: warning: {}: {e}", path.display()),
        }
    }
    args.apply_overrides(&mut config);
    tracing::debug!(?config, "effective configuration");

    // ── Load and run ─────────────────────────────────────────────────────────
    let source = match load_script(&args.script) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Each line and diagnostic is written as its statement finishes.  Once
    // stdout goes away, printing stops but diagnostics still reach stderr.
    let mut sink = Streams::new(io::stdout().lock(), io::stderr().lock());
    let mut interp = Interpreter::with_config(config);
    interp.execute(&source, &mut sink);

    ExitCode::SUCCESS
}
