//! CLI argument parsing and structure definitions.

use clap::{Parser, ValueEnum};

/// Named-entity extraction with grouped listings and inline highlighting.
#[derive(Parser)]
#[command(name = "entmark")]
#[command(
    author,
    version,
    about = "Extract named entities and highlight them in the source text",
    long_about = r#"
entmark - named-entity extraction and highlighting

Identifies persons, organizations, locations and miscellaneous entities in
free text and prints HTML markup: a grouped, deduplicated entity listing
followed by the original text with matched spans highlighted.

EXAMPLES:
  entmark "Kunming is the capital of Yunnan"
  entmark --format text "Mao Zedong founded the People's Republic of China"
  entmark --example 2
  echo "Beijing is the capital of China" | entmark
"#
)]
pub struct Cli {
    /// Text to analyze (reads stdin when omitted and piped)
    #[arg(trailing_var_arg = true)]
    pub text: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    pub format: OutputFormat,

    /// Run one of the built-in example prompts (1-4)
    #[arg(short, long, value_name = "N", conflicts_with = "text")]
    pub example: Option<usize>,

    /// List the built-in example prompts and exit
    #[arg(long)]
    pub list_examples: bool,

    /// List extractor backends and their availability, then exit
    #[arg(long)]
    pub list_backends: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Suppress informational messages on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// HTML markup (headings, bullets, colored spans)
    #[default]
    Html,
    /// Plain text with markup stripped
    Text,
    /// Entity catalog as JSON
    Json,
}
