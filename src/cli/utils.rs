//! Utility functions for the CLI.

use crate::EXAMPLE_PROMPTS;

/// Resolve the input text from the possible sources, in precedence order:
/// example prompt, positional arguments, piped stdin.
///
/// `piped` is the stdin content when stdin was not a terminal, `None`
/// otherwise; the caller does the reading so this stays testable.
pub fn resolve_input(
    example: Option<usize>,
    text: &[String],
    piped: Option<String>,
) -> Result<String, String> {
    if let Some(n) = example {
        return EXAMPLE_PROMPTS
            .get(n.wrapping_sub(1))
            .map(|s| (*s).to_string())
            .ok_or_else(|| format!("example must be 1-{}", EXAMPLE_PROMPTS.len()));
    }

    if !text.is_empty() {
        return Ok(text.join(" "));
    }

    if let Some(piped) = piped {
        return Ok(piped);
    }

    Err("no text given; pass text as an argument, pipe it in, or use --example".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_in_range() {
        let text = resolve_input(Some(2), &[], None).unwrap();
        assert_eq!(text, EXAMPLE_PROMPTS[1]);
    }

    #[test]
    fn test_example_zero_rejected() {
        let err = resolve_input(Some(0), &[], None).unwrap_err();
        assert_eq!(err, "example must be 1-4");
    }

    #[test]
    fn test_example_out_of_range_rejected() {
        let err = resolve_input(Some(9), &[], None).unwrap_err();
        assert_eq!(err, "example must be 1-4");
    }

    #[test]
    fn test_positional_args_joined() {
        let args = vec!["Kunming".to_string(), "at".to_string(), "dawn".to_string()];
        assert_eq!(resolve_input(None, &args, None).unwrap(), "Kunming at dawn");
    }

    #[test]
    fn test_example_takes_precedence_over_piped() {
        let text = resolve_input(Some(1), &[], Some("ignored".to_string())).unwrap();
        assert_eq!(text, EXAMPLE_PROMPTS[0]);
    }

    #[test]
    fn test_piped_stdin_used_when_no_args() {
        let text = resolve_input(None, &[], Some("piped text".to_string())).unwrap();
        assert_eq!(text, "piped text");
    }

    #[test]
    fn test_no_input_is_usage_error() {
        let err = resolve_input(None, &[], None).unwrap_err();
        assert!(err.contains("no text given"), "got: {err}");
    }
}
