// Output writer: one JSON document per line

use crate::protocol::ToolResult;
use serde::Serialize;
use std::io::{self, Write};

/// Serialize `value` and write it as a single line.
pub fn write_json<W, T>(sink: &mut W, value: &T, pretty: bool) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
{
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(io::Error::other)?;

    write_line(sink, &json)
}

pub fn write_line<W: Write + ?Sized>(sink: &mut W, text: &str) -> io::Result<()> {
    writeln!(sink, "{}", text)?;
    sink.flush()
}

/// Canonical error-shaped payload for a message.
pub fn error_payload(message: impl Into<String>) -> ToolResult {
    ToolResult::error(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_output() {
        let mut out = Vec::new();
        write_json(&mut out, &error_payload("Unknown tool: x"), false).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"content\":[{\"type\":\"text\",\"text\":\"Unknown tool: x\"}],\"isError\":true}\n"
        );
    }

    #[test]
    fn test_pretty_output() {
        let mut out = Vec::new();
        write_json(&mut out, &ToolResult::text("ok"), true).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("{\n  \"content\": ["));
        assert!(text.ends_with("}\n"));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&text).unwrap()["content"][0]["text"],
            "ok"
        );
    }
}
