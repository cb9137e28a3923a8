//! entmark - named-entity extraction and highlighting CLI.
//!
//! ```bash
//! entmark "Kunming is the capital of Yunnan"
//! entmark --format text --example 4
//! echo "Beijing is the capital of China" | entmark --format json
//! ```

use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use is_terminal::IsTerminal;

use entmark::cli::output::{format_error, log_info, render_json, strip_markup, write_output};
use entmark::cli::parser::{Cli, OutputFormat};
use entmark::cli::utils::resolve_input;
use entmark::{auto, available_backends, Formatter, EXAMPLE_PROMPTS};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.list_examples {
        for (i, prompt) in EXAMPLE_PROMPTS.iter().enumerate() {
            println!("{}. {prompt}", i + 1);
        }
        return ExitCode::SUCCESS;
    }

    if cli.list_backends {
        for (name, available) in available_backends() {
            println!("{name}: {}", if available { "✓" } else { "✗" });
        }
        return ExitCode::SUCCESS;
    }

    let piped = match piped_stdin(&cli) {
        Ok(piped) => piped,
        Err(msg) => {
            eprintln!("{}", format_error("input", &msg));
            return ExitCode::from(2);
        }
    };
    let text = match resolve_input(cli.example, &cli.text, piped) {
        Ok(text) => text,
        Err(msg) => {
            eprintln!("{}", format_error("input", &msg));
            return ExitCode::from(2);
        }
    };

    let formatter = Formatter::new(auto());
    log_info(
        &format!("backend: {}", formatter.backend_name()),
        cli.quiet,
    );

    let rendered = match cli.format {
        OutputFormat::Html => formatter.process(&text),
        OutputFormat::Text => strip_markup(&formatter.process(&text)),
        OutputFormat::Json => render_json(&formatter, &text),
    };

    if let Err(e) = write_output(&rendered, cli.output.as_deref()) {
        eprintln!("{}", format_error("output", &e.to_string()));
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Read stdin when it will be needed and is piped rather than a terminal.
fn piped_stdin(cli: &Cli) -> Result<Option<String>, String> {
    if cli.example.is_some() || !cli.text.is_empty() || io::stdin().is_terminal() {
        return Ok(None);
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {e}"))?;
    Ok(Some(buf))
}
