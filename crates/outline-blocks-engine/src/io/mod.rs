use std::io::{BufRead, Read};

use crate::models::{Block, OutlineOptions};
use crate::parsing::OutlineBuilder;

#[derive(Debug, thiserror::Error)]
pub enum OutlineError {
    #[error("IO error reading line {line}: {source}")]
    Io {
        line: usize,
        source: std::io::Error,
    },
    #[error("Invalid block JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse lines from a reader as they arrive.
///
/// Stops at the first read error; lines consumed before it are not returned.
pub fn parse_reader<R: BufRead>(
    reader: R,
    options: OutlineOptions,
) -> Result<Vec<Block>, OutlineError> {
    let mut builder = OutlineBuilder::with_options(options);
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| OutlineError::Io { line: i + 1, source })?;
        builder.push(&line);
    }
    Ok(builder.finish())
}

/// Read a JSON array of blocks.
pub fn read_forest_json<R: Read>(reader: R) -> Result<Vec<Block>, OutlineError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Render a forest as JSON with two-space indentation.
pub fn forest_to_json(forest: &[Block]) -> Result<String, OutlineError> {
    Ok(serde_json::to_string_pretty(forest)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{self, BufReader, Cursor};

    #[test]
    fn test_parse_reader_streams_lines() {
        let input = Cursor::new("- a\n  - b\n- c\n");
        let forest = parse_reader(input, OutlineOptions::default()).unwrap();
        assert_eq!(
            forest,
            vec![
                Block::with_children("- a", vec![Block::new("  - b")]),
                Block::new("- c"),
            ]
        );
    }

    #[test]
    fn test_parse_reader_empty_input() {
        let forest = parse_reader(Cursor::new(""), OutlineOptions::default()).unwrap();
        assert!(forest.is_empty());
    }

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::other("disk on fire"));
            }
            self.served = true;
            let data = b"- a\n";
            buf[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }
    }

    #[test]
    fn test_parse_reader_reports_failing_line() {
        let reader = BufReader::new(FailingReader { served: false });
        let err = parse_reader(reader, OutlineOptions::default()).unwrap_err();
        assert!(matches!(err, OutlineError::Io { line: 2, .. }));
        assert!(err.to_string().contains("disk on fire"));
    }

    #[test]
    fn test_parse_reader_rejects_invalid_utf8() {
        let input = Cursor::new(vec![b'-', b' ', 0xff, b'\n']);
        let err = parse_reader(input, OutlineOptions::default()).unwrap_err();
        assert!(matches!(err, OutlineError::Io { line: 1, .. }));
    }

    #[test]
    fn test_read_forest_json() {
        let json = r#"[{"content": "a", "children": [{"content": "b"}]}, {"content": "c", "children": []}]"#;
        let forest = read_forest_json(json.as_bytes()).unwrap();
        assert_eq!(
            forest,
            vec![
                Block::with_children("a", vec![Block::new("b")]),
                Block::new("c"),
            ]
        );
    }

    #[test]
    fn test_read_forest_json_rejects_non_array() {
        let err = read_forest_json(r#"{"content": "a"}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, OutlineError::Json(_)));
    }

    #[test]
    fn test_forest_to_json_uses_two_space_indent() {
        let json = forest_to_json(&[Block::with_children("- a", vec![Block::new("  - b")])]).unwrap();
        assert_eq!(
            json,
            "[\n  {\n    \"content\": \"- a\",\n    \"children\": [\n      {\n        \"content\": \"  - b\"\n      }\n    ]\n  }\n]"
        );
    }
}
