mod config;

use std::{
    env, fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use delimcheck_core::{CheckError, Checker, CommentError, CommentMarkers, Config, ConfigError, Mode};
use owo_colors::OwoColorize;
use rayon::prelude::*;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Check that brackets and markup tags are properly nested
#[derive(Parser, Debug)]
#[command(name = "delimcheck", version, about)]
struct Args {
    /// Files or glob patterns to check (reads from stdin if none provided)
    #[arg()]
    files: Vec<String>,

    /// Read from stdin
    #[arg(long)]
    stdin: bool,

    /// Configuration file (defaults to delimcheck.toml in the working directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// What kind of delimiters to check
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Tag names to check in tags mode
    #[arg(long, value_delimiter = ',')]
    tags: Vec<String>,

    /// Comment start marker
    #[arg(long, requires = "comment_end")]
    comment_start: Option<String>,

    /// Comment end marker
    #[arg(long, requires = "comment_start")]
    comment_end: Option<String>,

    /// Print the delimiters recognized in each input
    #[arg(long)]
    debug_scan: bool,

    /// Only report through the exit code
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let checker = match build_checker(&args) {
        Ok(checker) => checker,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    if args.stdin || args.files.is_empty() {
        return match check_stdin(&checker, &args) {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::from(1),
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::from(2)
            }
        };
    }

    let paths = match expand_inputs(&args.files) {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let results: Vec<_> = paths
        .par_iter()
        .map(|path| check_file(path, &checker, &args))
        .collect();

    let mut any_invalid = false;
    let mut any_error = false;

    for (path, result) in paths.iter().zip(results) {
        match result {
            Ok(checked) => {
                if !report(&path.display().to_string(), &checked, &args) {
                    any_invalid = true;
                }
            }
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                any_error = true;
            }
        }
    }

    if any_error {
        return ExitCode::from(2);
    }
    if any_invalid {
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn build_checker(args: &Args) -> Result<Checker, Error> {
    let dir = env::current_dir()?;
    let mut config = config::load_config(args.config.as_deref(), &dir)?;
    apply_overrides(&mut config, args)?;
    tracing::debug!(mode = ?config.mode, "checking");
    Ok(Checker::from_config(&config)?)
}

/// Apply command line flags on top of the loaded configuration. The
/// result is validated when the checker is built.
fn apply_overrides(config: &mut Config, args: &Args) -> Result<(), Error> {
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if !args.tags.is_empty() {
        config.tags.clone_from(&args.tags);
    }
    if let (Some(start), Some(end)) = (&args.comment_start, &args.comment_end) {
        config.comment = Some(CommentMarkers::new(start.as_str(), end.as_str())?);
    }
    Ok(())
}

/// Expand glob patterns; plain paths are kept as given.
fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>, Error> {
    let mut paths = Vec::new();

    for input in inputs {
        if !input.contains(['*', '?', '[']) {
            paths.push(PathBuf::from(input));
            continue;
        }

        let before = paths.len();
        for entry in glob::glob(input)? {
            let path = entry?;
            if path.is_file() {
                paths.push(path);
            }
        }
        if paths.len() == before {
            return Err(Error::NoMatch(input.clone()));
        }
    }

    Ok(paths)
}

fn check_stdin(checker: &Checker, args: &Args) -> Result<bool, Error> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;

    let checked = check_text(&text, checker, args);
    Ok(report("stdin", &checked, args))
}

/// Result of checking one input.
#[derive(Debug)]
struct Checked {
    result: Result<(), CheckError>,
    /// Delimiter listing when `--debug-scan` is set and comments balance.
    dump: Option<String>,
}

fn check_file(path: &Path, checker: &Checker, args: &Args) -> Result<Checked, Error> {
    tracing::debug!(path = %path.display(), "checking file");
    let text = fs::read_to_string(path)?;
    Ok(check_text(&text, checker, args))
}

fn check_text(text: &str, checker: &Checker, args: &Args) -> Checked {
    let dump = if args.debug_scan {
        checker.debug(text).ok()
    } else {
        None
    };
    Checked {
        result: checker.check(text),
        dump,
    }
}

/// Print the outcome for one input and return whether it was valid.
fn report(name: &str, checked: &Checked, args: &Args) -> bool {
    if let Some(dump) = &checked.dump {
        print!("{dump}");
    }
    if !args.quiet {
        match &checked.result {
            Ok(()) => println!("{name}: {}", "ok".green()),
            Err(error) => println!("{name}: {} ({error})", "invalid".red()),
        }
    }
    checked.result.is_ok()
}

#[derive(Debug, Error)]
enum Error {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid comment markers: {0}")]
    Comment(#[from] CommentError),
    #[error("invalid pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("{0}")]
    Glob(#[from] glob::GlobError),
    #[error("{0}: no files match")]
    NoMatch(String),
}
