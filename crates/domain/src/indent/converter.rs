// crates/domain/src/indent/converter.rs
use serde::Serialize;
use textfix_shared_kernel::{SpaceCount, TabCount, TabWidth};

use super::literal::{closes_literal, opens_literal};
use super::request::{ConversionRequest, Direction};

/// Leading-run occurrence tallies for the summary report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndentationCounts {
    pub tabs: TabCount,
    pub spaces: SpaceCount,
}

/// Iterator over physical lines, each slice keeping its own terminator.
///
/// A line ends at CR, LF or CRLF; the final line may have no terminator.
struct PhysicalLines<'a> {
    rest: &'a str,
}

impl<'a> PhysicalLines<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for PhysicalLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let bytes = self.rest.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => {
                    i += 1;
                    break;
                }
                b'\r' => {
                    i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                    break;
                }
                _ => i += 1,
            }
        }

        let (line, rest) = self.rest.split_at(i);
        self.rest = rest;
        Some(line)
    }
}

/// Split a physical line into its body and its terminator.
fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else if let Some(body) = line.strip_suffix('\r') {
        (body, "\r")
    } else {
        (line, "")
    }
}

/// One conversion pass over a file. The only state carried across lines is
/// the inside-literal flag, reset for every new pass.
pub struct IndentationPass {
    direction: Option<Direction>,
    width: TabWidth,
    inside_literal: bool,
    before: IndentationCounts,
    after: IndentationCounts,
}

impl IndentationPass {
    pub fn new(request: &ConversionRequest) -> Self {
        Self {
            direction: request.direction,
            width: request.tab_width,
            inside_literal: false,
            before: IndentationCounts::default(),
            after: IndentationCounts::default(),
        }
    }

    pub const fn before(&self) -> IndentationCounts {
        self.before
    }

    pub const fn after(&self) -> IndentationCounts {
        self.after
    }

    /// Process one physical line. In converting mode the rewritten line is
    /// appended to `out`; in report-only mode `out` is left untouched.
    pub fn process_line(&mut self, line: &str, out: &mut String) {
        if self.inside_literal {
            // Literal content passes through untouched and untallied.
            if self.direction.is_some() {
                out.push_str(line);
            }
            if closes_literal(line) {
                self.inside_literal = false;
            }
            return;
        }

        let (body, terminator) = split_terminator(line);

        let width = self.width.get();
        let mut columns = 0usize;
        let mut lead = 0usize;
        for byte in body.bytes() {
            match byte {
                b'\t' => {
                    columns += width;
                    self.before.tabs += 1;
                }
                b' ' => {
                    columns += 1;
                    self.before.spaces += 1;
                }
                _ => break,
            }
            lead += 1;
        }

        match self.direction {
            None => {}
            Some(Direction::SpacesToTabs) => {
                let tabs = columns / width;
                let spaces = columns % width;
                for _ in 0..tabs {
                    out.push('\t');
                }
                for _ in 0..spaces {
                    out.push(' ');
                }
                self.after.tabs += tabs;
                self.after.spaces += spaces;
                out.push_str(&body[lead..]);
                out.push_str(terminator);
            }
            Some(Direction::TabsToSpaces) => {
                for _ in 0..columns {
                    out.push(' ');
                }
                self.after.spaces += columns;
                out.push_str(&body[lead..]);
                out.push_str(terminator);
            }
        }

        if opens_literal(body) {
            self.inside_literal = true;
        }
    }
}

/// Result of one pass: tallies always, rewritten text only when a
/// direction was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    pub output: Option<String>,
    pub before: IndentationCounts,
    pub after: Option<IndentationCounts>,
}

/// Run a full conversion (or report-only survey) over `text`.
pub fn convert(text: &str, request: &ConversionRequest) -> ConversionOutcome {
    let mut pass = IndentationPass::new(request);
    let mut out = String::with_capacity(text.len() + text.len() / 4);

    for line in PhysicalLines::new(text) {
        pass.process_line(line, &mut out);
    }

    ConversionOutcome {
        output: request.direction.is_some().then_some(out),
        before: pass.before(),
        after: request.direction.map(|_| pass.after()),
    }
}
