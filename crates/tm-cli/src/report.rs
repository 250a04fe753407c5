use clap::ValueEnum;
use serde::Serialize;

use tm_core::PrefixMatcher;

/// Shown in place of an empty input.
pub const EMPTY_INPUT: &str = "(empty)";
/// Shown when no registered prefix matches.
pub const NOT_FOUND: &str = "Matching prefix not found";

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MatchRow<'a> {
    pub input: &'a str,
    pub prefix: Option<&'a str>,
}

pub fn match_rows<'a>(matcher: &PrefixMatcher, inputs: &'a [String]) -> Vec<MatchRow<'a>> {
    inputs
        .iter()
        .map(|input| {
            let prefix = matcher.find_longest_prefix(input);
            log::debug!("input={:?} -> prefix={:?}", input, prefix);
            MatchRow { input, prefix }
        })
        .collect()
}

pub fn render(rows: &[MatchRow<'_>], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(render_text(rows)),
        OutputFormat::Json => serde_json::to_string_pretty(rows)
            .map_err(|e| format!("Failed to serialize JSON: {}", e)),
    }
}

fn render_text(rows: &[MatchRow<'_>]) -> String {
    const HEADER: &str = "INPUT";

    let labels: Vec<&str> = rows
        .iter()
        .map(|row| if row.input.is_empty() { EMPTY_INPUT } else { row.input })
        .collect();
    let width = labels
        .iter()
        .map(|label| label.chars().count())
        .chain(std::iter::once(HEADER.len()))
        .max()
        .unwrap_or(0);

    let mut out = format!("{:<width$}  LONGEST PREFIX\n", HEADER);
    for (label, row) in labels.iter().zip(rows) {
        out.push_str(&format!("{:<width$}  {}\n", label, row.prefix.unwrap_or(NOT_FOUND)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_for(inputs: &[String]) -> String {
        let matcher = PrefixMatcher::new(["foo", "tru", "true"]);
        render(&match_rows(&matcher, inputs), OutputFormat::Text).unwrap()
    }

    #[test]
    fn prints_empty_and_not_found_rows() {
        let output = rows_for(&["foo".to_string(), String::new(), "bar".to_string()]);
        assert!(output.contains(EMPTY_INPUT));
        assert!(output.contains(NOT_FOUND));
        assert!(output.contains("foo"));
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn aligns_columns() {
        let output = rows_for(&["truecaller".to_string(), "t".to_string()]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "truecaller  true");
        assert_eq!(lines[2], format!("{:<10}  {}", "t", NOT_FOUND));
    }

    #[test]
    fn json_uses_null_for_no_match() {
        let matcher = PrefixMatcher::new(["foo"]);
        let inputs = vec!["food".to_string(), "bar".to_string()];
        let json = render(&match_rows(&matcher, &inputs), OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["input"], "food");
        assert_eq!(value[0]["prefix"], "foo");
        assert!(value[1]["prefix"].is_null());
    }
}
