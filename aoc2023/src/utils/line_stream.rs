//! Line-by-line reading over puzzle input.

use std::iter::Peekable;
use std::str::Lines;

use aoc_solver::ParseError;

/// Cursor over the lines of an input string.
///
/// Inputs made of sections (a header line, a blank separator, then records)
/// read more naturally with an explicit cursor than with one long iterator
/// chain. The stream tracks the 1-based number of the last line handed out,
/// so parse errors can point at the offending line.
///
/// ```
/// use aoc2023::utils::line_stream::LineStream;
///
/// let mut stream = LineStream::new("seeds: 79 14\n\nseed-to-soil map:\n50 98 2");
/// assert_eq!(stream.next_line().unwrap(), "seeds: 79 14");
/// stream.skip_lines(2);
/// assert_eq!(stream.line_number(), 3);
/// assert_eq!(stream.collect::<Vec<_>>(), vec!["50 98 2"]);
/// ```
#[derive(Debug, Clone)]
pub struct LineStream<'a> {
    lines: Peekable<Lines<'a>>,
    line_number: usize,
}

impl<'a> LineStream<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().peekable(),
            line_number: 0,
        }
    }

    /// Whether at least one more line can be read
    pub fn is_active(&mut self) -> bool {
        self.lines.peek().is_some()
    }

    pub fn peek(&mut self) -> Option<&'a str> {
        self.lines.peek().copied()
    }

    /// Read the next line, failing with `MissingData` at end of input
    pub fn next_line(&mut self) -> Result<&'a str, ParseError> {
        self.next().ok_or_else(|| {
            ParseError::MissingData(format!(
                "expected a line at line {}, found end of input",
                self.line_number + 1
            ))
        })
    }

    /// Discard up to `count` lines
    pub fn skip_lines(&mut self, count: usize) {
        for _ in 0..count {
            if self.next().is_none() {
                break;
            }
        }
    }

    /// Discard blank lines up to the next line with content
    pub fn skip_empty(&mut self) {
        while self.peek().is_some_and(|line| line.trim().is_empty()) {
            self.next();
        }
    }

    /// 1-based number of the last line read, 0 before the first read
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<'a> Iterator for LineStream<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line_number += 1;
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_line_counts_lines() {
        let mut stream = LineStream::new("a\nb");

        assert_eq!(stream.line_number(), 0);
        assert_eq!(stream.next_line().unwrap(), "a");
        assert_eq!(stream.line_number(), 1);
        assert_eq!(stream.next_line().unwrap(), "b");
        assert_eq!(stream.line_number(), 2);
        assert!(!stream.is_active());
    }

    #[test]
    fn test_next_line_at_end_is_missing_data() {
        let mut stream = LineStream::new("only");
        stream.skip_lines(1);

        match stream.next_line() {
            Err(ParseError::MissingData(msg)) => assert!(msg.contains("line 2"), "{msg}"),
            other => panic!("expected MissingData, got {other:?}"),
        }
    }

    #[test]
    fn test_peek_does_not_advance() {
        let mut stream = LineStream::new("x\ny");

        assert_eq!(stream.peek(), Some("x"));
        assert_eq!(stream.peek(), Some("x"));
        assert_eq!(stream.line_number(), 0);
        assert_eq!(stream.next(), Some("x"));
        assert_eq!(stream.peek(), Some("y"));
    }

    #[test]
    fn test_skip_lines_keeps_stream_usable() {
        let mut stream = LineStream::new("Time: 7\nDistance: 9\n\nextra");
        stream.skip_lines(2);

        assert_eq!(stream.line_number(), 2);
        assert_eq!(stream.peek(), Some(""));
        stream.skip_empty();
        assert_eq!(stream.next_line().unwrap(), "extra");
        assert_eq!(stream.line_number(), 4);
    }

    #[test]
    fn test_skip_past_end_is_harmless() {
        let mut stream = LineStream::new("1\n2");
        stream.skip_lines(10);

        assert!(!stream.is_active());
        assert_eq!(stream.line_number(), 2);
    }

    #[test]
    fn test_skip_empty_stops_at_content() {
        let mut stream = LineStream::new("head\n\n  \nbody\n");
        stream.skip_lines(1);
        stream.skip_empty();

        assert_eq!(stream.next_line().unwrap(), "body");
        assert_eq!(stream.line_number(), 4);
        stream.skip_empty();
        assert!(!stream.is_active());
    }
}
