//! Terminal front end - reads one password from stdin and prints its report.
//!
//! With `--json` only the JSON report goes to stdout; the prompt goes to
//! stderr.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use secrecy::zeroize::Zeroize;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use pwd_criteria::{Evaluator, Report};

const RULE: &str = "------------------------------------------------------";
const NAME_WIDTH: usize = 30;

#[derive(Parser, Debug)]
#[command(name = "pwd-criteria")]
#[command(version, about = "Score a password against length, complexity, repetition and dictionary rules")]
struct Cli {
    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log evaluation details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}

/// Prompts on `prompt` and reads one line. `None` on an empty line or EOF.
fn read_password(
    input: &mut impl BufRead,
    prompt: &mut impl Write,
) -> io::Result<Option<SecretString>> {
    write!(prompt, "Enter your password: ")?;
    prompt.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let password = SecretString::new(line.trim_end_matches(['\r', '\n']).to_string().into());
    line.zeroize();

    if password.expose_secret().is_empty() {
        return Ok(None);
    }
    Ok(Some(password))
}

fn render_text(report: &Report, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Strength Score: {}/100 ({})", report.score(), report.strength())?;
    writeln!(out, "Evaluation Criteria:")?;
    writeln!(out, "{RULE}")?;
    for finding in report.findings() {
        let status = if finding.verdict.met { "[PASS]" } else { "[FAIL]" };
        writeln!(
            out,
            "  {status} {:<width$} | {}",
            finding.name,
            finding.verdict.message,
            width = NAME_WIDTH
        )?;
    }
    writeln!(out, "{RULE}")
}

fn render_json(report: &Report, out: &mut impl Write) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// In JSON mode an empty input still yields a report (score 0, "N/A").
fn run(
    cli: &Cli,
    input: &mut impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), CliError> {
    let evaluator = Evaluator::new();

    if cli.json {
        let password = read_password(input, err)?;
        writeln!(err)?;
        let report = match password {
            Some(password) => evaluator.evaluate(&password),
            None => evaluator.evaluate(&SecretString::new(String::new().into())),
        };
        tracing::info!("report ready, score {}", report.score());
        return render_json(&report, out);
    }

    writeln!(out, "--- Password Strength Analyzer ---")?;
    let Some(password) = read_password(input, out)? else {
        writeln!(out)?;
        writeln!(out, "No password entered.")?;
        return Ok(());
    };

    let report = evaluator.evaluate(&password);
    tracing::info!("report ready, score {}", report.score());
    render_text(&report, out)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let result = run(
        &cli,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}
