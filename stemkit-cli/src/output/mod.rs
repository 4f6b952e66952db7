//! Output formatting module

use anyhow::Result;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one word with its stem
    fn format_stem(&mut self, word: &str, stem: &str) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one stem per line
    Text,
    /// JSON array of word/stem pairs
    Json,
    /// Markdown table of words and stems
    Markdown,
}

/// Build the formatter for `format` writing into `writer`
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;
    use std::sync::{Arc, Mutex};

    /// Writer that keeps its bytes reachable after the formatter takes it
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_format_names_parse_case_insensitively() {
        assert_eq!(OutputFormat::from_str("json", true), Ok(OutputFormat::Json));
        assert_eq!(
            OutputFormat::from_str("Markdown", true),
            Ok(OutputFormat::Markdown)
        );
        assert!(OutputFormat::from_str("yaml", true).is_err());
    }

    #[test]
    fn test_boxed_formatters_write_through() {
        for (format, needle) in [
            (OutputFormat::Text, "run\n"),
            (OutputFormat::Json, "\"stem\": \"run\""),
            (OutputFormat::Markdown, "| running | run |"),
        ] {
            let buffer = SharedBuffer::default();
            let mut formatter = create_formatter(format, buffer.clone(), true);
            formatter.format_stem("running", "run").unwrap();
            formatter.finish().unwrap();
            assert!(buffer.contents().contains(needle), "{format:?}");
        }
    }
}
