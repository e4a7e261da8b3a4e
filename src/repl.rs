use crate::errors::MatchResult;
use crate::matcher::Matcher;
use std::io::{self, BufRead, Write};

pub const EXIT_KEYWORD: &str = "exit";

const TEXT_PROMPT: &str = "Enter text (or 'exit' to quit): ";
const PATTERN_PROMPT: &str = "Enter pattern (or 'exit' to quit): ";
const CASE_PROMPT: &str = "Case sensitive? (y/n): ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplSummary {
    pub evaluated: usize,
    pub rejected: usize,
}

pub fn run<R: BufRead, W: Write>(input: R, output: W) -> io::Result<ReplSummary> {
    run_with(&Matcher::default(), input, output)
}

/// Reads text, pattern and case flag triples until `exit` or end of input.
pub fn run_with<R: BufRead, W: Write>(
    matcher: &Matcher,
    mut input: R,
    mut output: W,
) -> io::Result<ReplSummary> {
    let mut summary = ReplSummary::default();

    loop {
        let Some(text) = prompt(&mut input, &mut output, TEXT_PROMPT)? else {
            break;
        };
        if text == EXIT_KEYWORD {
            break;
        }

        let Some(pattern) = prompt(&mut input, &mut output, PATTERN_PROMPT)? else {
            break;
        };
        if pattern == EXIT_KEYWORD {
            break;
        }

        let case_sensitive = loop {
            let Some(answer) = prompt(&mut input, &mut output, CASE_PROMPT)? else {
                return Ok(summary);
            };
            match parse_yes_no(&answer) {
                Some(value) => break value,
                None => writeln!(output, "Please answer 'y' or 'n'.")?,
            }
        };

        match evaluate(matcher, &text, &pattern, case_sensitive) {
            Ok((count, whole)) => {
                writeln!(output, "Matches: {count}")?;
                writeln!(output, "Whole match: {whole}")?;
                summary.evaluated += 1;
            }
            Err(err) => {
                tracing::warn!(error = %err, pattern = %pattern, "pattern rejected");
                writeln!(output, "Invalid pattern: {err}")?;
                summary.rejected += 1;
            }
        }
    }

    Ok(summary)
}

fn evaluate(
    matcher: &Matcher,
    text: &str,
    pattern: &str,
    case_sensitive: bool,
) -> MatchResult<(usize, bool)> {
    let count = matcher.count_matches(text, pattern, case_sensitive)?;
    let whole = matcher.whole_matches(text, pattern, case_sensitive)?;
    Ok((count, whole))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
