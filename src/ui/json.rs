//! NDJSON output for `--json` mode
//!
//! One JSON object per line on stdout; every object carries `"event"` and
//! `"command"` keys.

use std::io::{self, Write};

/// Write a single NDJSON event.
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")
}

/// Write an event to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_event_is_one_line_of_json() {
        let mut buffer = Vec::new();
        write_event(
            &mut buffer,
            &serde_json::json!({ "event": "start", "command": "check" }),
        )
        .unwrap();
        write_event(
            &mut buffer,
            &serde_json::json!({ "event": "complete", "command": "check" }),
        )
        .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed["event"], "start");
        assert_eq!(parsed["command"], "check");
    }
}
