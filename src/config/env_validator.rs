//! Environment variable validation with helpful warnings
//!
//! Invalid values are reported (with a typo suggestion when one is close)
//! and the configured value is kept.

use std::io::Write;

/// Validator for environment variable values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse a value, returning `fallback` if invalid (with a warning on `writer`)
    pub fn parse_with_writer<T, F, W>(&self, value: &str, parser: F, fallback: T, writer: &mut W) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        match parser(value) {
            Some(parsed) => parsed,
            None => {
                let suggestion = self.suggest(value);
                let _ = writeln!(
                    writer,
                    "Warning: Invalid {} value '{}'{}",
                    self.var_name, value, suggestion
                );
                let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
                fallback
            }
        }
    }

    /// Suggest a valid value based on Levenshtein distance
    fn suggest(&self, value: &str) -> String {
        match closest(&value.to_lowercase(), self.valid_values) {
            Some(suggested) if suggested != value => format!(". Did you mean '{}'?", suggested),
            _ => String::new(),
        }
    }
}

/// Closest candidate within two edits
pub fn closest<'c>(input: &str, candidates: &[&'c str]) -> Option<&'c str> {
    let mut best: Option<(&str, usize)> = None;
    for &candidate in candidates {
        let dist = levenshtein(input, candidate);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((candidate, dist)),
        }
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate),
        _ => None,
    }
}

/// Simple Levenshtein distance for typo detection
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    if a_bytes.is_empty() {
        return b_bytes.len();
    }
    if b_bytes.is_empty() {
        return a_bytes.len();
    }

    let mut prev_row: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b_bytes.len() + 1];

    for (i, a_char) in a_bytes.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_bytes.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_bytes.len()]
}
