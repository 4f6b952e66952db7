//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs word/stem pairs as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    entries: Vec<StemData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StemData {
    /// The word as read
    pub word: String,
    /// Its stem
    pub stem: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter with pretty printing on
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            entries: Vec::new(),
        }
    }

    /// Choose between indented and compact output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_stem(&mut self, word: &str, stem: &str) -> Result<()> {
        self.entries.push(StemData {
            word: word.to_string(),
            stem: stem.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_parse_back() {
        let mut formatter = JsonFormatter::new(Vec::new()).pretty(false);
        formatter.format_stem("caresses", "caress").unwrap();
        formatter.format_stem("книги", "книг").unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(output.lines().count(), 1);
        let entries: Vec<StemData> = serde_json::from_str(&output).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].word, "книги");
        assert_eq!(entries[1].stem, "книг");
    }

    #[test]
    fn test_empty_input_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.writer).unwrap().trim(), "[]");
    }
}
