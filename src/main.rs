use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use frontend::{errors::errors::Error, format_error, parser::parser::parse_source};
use owo_colors::OwoColorize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Parses a script and prints its canonical form, or every syntax error found.
#[derive(Parser, Debug)]
#[command(name = "frontend")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Script to parse
    #[arg(required_unless_present = "eval", conflicts_with = "eval")]
    script: Option<PathBuf>,

    /// Parse the given source text instead of a file
    #[arg(short, long)]
    eval: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("frontend=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("frontend=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let (content, file_name) = match (&cli.eval, &cli.script) {
        (Some(source), _) => (source.clone(), String::from("eval")),
        (None, Some(path)) => match read_to_string(path) {
            Ok(content) => {
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                (content, file_name)
            }
            Err(err) => {
                eprintln!(
                    "{}: could not read '{}': {}",
                    "Error".red().bold(),
                    path.display().cyan(),
                    err
                );
                return ExitCode::FAILURE;
            }
        },
        (None, None) => return ExitCode::FAILURE,
    };

    let start = Instant::now();
    let (program, errors) = parse_source(&content, Some(file_name));
    debug!(elapsed = ?start.elapsed(), statements = program.statements.len(), "parsed");

    if !errors.is_empty() {
        warn!(count = errors.len(), "parse failed");
        for error in &errors {
            display_error(error, &content);
        }
        return ExitCode::FAILURE;
    }

    println!("{}", program);
    ExitCode::SUCCESS
}

fn display_error(error: &Error, content: &str) {
    let formatted = format_error(error, content);

    match formatted.strip_prefix("Error") {
        Some(rest) => eprintln!("{}{}", "Error".red().bold(), rest),
        None => eprintln!("{}", formatted),
    }
    eprintln!("  {}", error.dimmed());
}
