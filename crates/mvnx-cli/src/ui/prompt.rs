//! Interactive selection when a query matches several artifacts.

use mvnx_schema::ArtifactCandidate;
use std::io::{BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("no selection made (input closed)")]
    Closed,

    #[error("invalid selection: {0}")]
    Invalid(String),
}

/// Parse a 1-based selection out of `count` choices.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, PromptError> {
    let input = input.trim();
    match input.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(n),
        _ => Err(PromptError::Invalid(input.to_string())),
    }
}

/// List `candidates` on `output`, read one line from `input` and return the
/// chosen candidate.
pub fn select_candidate<'a, R: BufRead, W: Write>(
    candidates: &'a [ArtifactCandidate],
    mut input: R,
    mut output: W,
) -> Result<&'a ArtifactCandidate, PromptError> {
    writeln!(output)?;
    writeln!(output, "Multiple artifacts found:")?;
    writeln!(output)?;
    for (i, candidate) in candidates.iter().enumerate() {
        writeln!(output, "[{}] {}", i + 1, candidate.coordinates())?;
        writeln!(output, "    Version: {}", candidate.latest_version())?;
        writeln!(output)?;
    }
    write!(output, "Select artifact (1-{}): ", candidates.len())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::Closed);
    }

    let choice = parse_selection(&line, candidates.len())?;
    Ok(&candidates[choice - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn candidates() -> Vec<ArtifactCandidate> {
        vec![
            ArtifactCandidate::new("org.projectlombok", "lombok", "1.18.30", 100.0),
            ArtifactCandidate::new("org.projectlombok", "lombok-maven", "1.18.20.0", 90.0),
            ArtifactCandidate::new("io.github.x", "lombok-ext", "2.0.0", 80.0),
        ]
    }

    #[test]
    fn selects_second_candidate() {
        let candidates = candidates();
        let mut out = Vec::new();

        let chosen = select_candidate(&candidates, Cursor::new("2\n"), &mut out).unwrap();
        assert_eq!(chosen.artifact_id(), "lombok-maven");

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("[1] org.projectlombok:lombok\n    Version: 1.18.30\n"));
        assert!(shown.contains("[3] io.github.x:lombok-ext\n"));
        assert!(shown.ends_with("Select artifact (1-3): "));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let candidates = candidates();
        let chosen = select_candidate(&candidates, Cursor::new("  3 \r\n"), std::io::sink()).unwrap();
        assert_eq!(chosen.artifact_id(), "lombok-ext");
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        let candidates = candidates();
        for input in ["0\n", "4\n", "abc\n", "\n", "-1\n"] {
            let err = select_candidate(&candidates, Cursor::new(input), std::io::sink()).unwrap_err();
            assert!(
                matches!(err, PromptError::Invalid(_)),
                "expected invalid selection for {input:?}"
            );
        }
    }

    #[test]
    fn closed_input_is_reported() {
        let candidates = candidates();
        let err = select_candidate(&candidates, Cursor::new(""), std::io::sink()).unwrap_err();
        assert!(matches!(err, PromptError::Closed));
    }

    #[test]
    fn parse_selection_bounds() {
        assert_eq!(parse_selection("1", 1).unwrap(), 1);
        assert!(parse_selection("2", 1).is_err());
        assert!(parse_selection("1", 0).is_err());
    }
}
