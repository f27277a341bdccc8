// crates/domain/src/endings/normalizer.rs
use textfix_shared_kernel::LineCount;

use super::counts::LineEndingCounts;
use super::style::LineEndingStyle;

/// Classify every terminator in `buf` in a single left-to-right pass.
///
/// A `\r` is inspected with one byte of lookahead: `\r\n` is one CRLF
/// terminator, a `\r` on its own is a lone CR. A `\n` that was not consumed
/// as part of a CRLF is a lone LF. All other bytes are ignored.
pub fn scan(buf: &[u8]) -> LineEndingCounts {
    let mut counts = LineEndingCounts::default();
    let mut i = 0;

    while i < buf.len() {
        match buf[i] {
            b'\r' => {
                if buf.get(i + 1) == Some(&b'\n') {
                    counts.crlf += 1;
                    i += 2;
                } else {
                    counts.cr += 1;
                    i += 1;
                }
            }
            b'\n' => {
                counts.lf += 1;
                i += 1;
            }
            _ => i += 1,
        }
    }

    counts
}

/// Result of rewriting a buffer to a single line-ending style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub output: Vec<u8>,
    /// Terminators written; the output has `written + 1` lines.
    pub written: usize,
}

impl Normalized {
    pub const fn lines(&self) -> LineCount {
        LineCount::new(self.written + 1)
    }
}

/// Re-emit `buf` substituting every detected terminator with `style`'s
/// sequence. Non-terminator bytes pass through untouched, so the output
/// always has the same line count as the input.
pub fn normalize(buf: &[u8], style: LineEndingStyle) -> Normalized {
    let terminator = style.terminator();
    let mut output = Vec::with_capacity(buf.len() + buf.len() / 8);
    let mut written = 0;
    let mut i = 0;

    while i < buf.len() {
        match buf[i] {
            b'\r' => {
                i += if buf.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                output.extend_from_slice(terminator);
                written += 1;
            }
            b'\n' => {
                i += 1;
                output.extend_from_slice(terminator);
                written += 1;
            }
            other => {
                output.push(other);
                i += 1;
            }
        }
    }

    Normalized { output, written }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endings::StyleChoice;

    #[test]
    fn scan_counts_each_terminator_kind() {
        let counts = scan(b"a\rb\nc\r\nd");
        assert_eq!(counts, LineEndingCounts { cr: 1, lf: 1, crlf: 1 });
        assert_eq!(counts.lines(), 4usize);
    }

    #[test]
    fn scan_mixed_adjacent_terminators() {
        // "\n\r\n\r": one LF, one CRLF, one trailing CR.
        let counts = scan(b"\n\r\n\r");
        assert_eq!(counts, LineEndingCounts { cr: 1, lf: 1, crlf: 1 });
        assert_eq!(counts.lines(), 4usize);
        assert_eq!(StyleChoice::Auto.resolve(&counts), LineEndingStyle::Lf);
    }

    #[test]
    fn scan_cr_then_lf_with_text_between() {
        // crCount=1, lfCount=1, crlfCount=0: the tie resolves to LF.
        let counts = scan(b"\rX\n");
        assert_eq!(counts, LineEndingCounts { cr: 1, lf: 1, crlf: 0 });
        assert_eq!(counts.dominant(), LineEndingStyle::Lf);
    }

    #[test]
    fn scan_single_terminator_buffers_resolve_to_their_own_style() {
        assert_eq!(scan(b"\r\n").dominant(), LineEndingStyle::CrLf);
        assert_eq!(scan(b"\r").dominant(), LineEndingStyle::Cr);
        assert_eq!(scan(b"\n").dominant(), LineEndingStyle::Lf);
    }

    #[test]
    fn scan_trailing_cr_uses_safe_lookahead() {
        let counts = scan(b"last\r");
        assert_eq!(counts, LineEndingCounts { cr: 1, lf: 0, crlf: 0 });
    }

    #[test]
    fn normalize_rewrites_every_terminator() {
        let result = normalize(b"a\rb\nc\r\nd", LineEndingStyle::CrLf);
        assert_eq!(result.output, b"a\r\nb\r\nc\r\nd");
        assert_eq!(result.written, 3);
        assert_eq!(result.lines(), 4usize);
    }

    #[test]
    fn normalize_is_idempotent_for_matching_style() {
        let input = b"one\ntwo\nthree\n";
        let once = normalize(input, LineEndingStyle::Lf);
        assert_eq!(once.output, input);
        let twice = normalize(&once.output, LineEndingStyle::Lf);
        assert_eq!(twice.output, once.output);
    }

    #[test]
    fn normalize_preserves_line_count_across_styles() {
        let input = b"a\rb\r\nc\nd\r";
        let before = scan(input).lines();
        for style in [LineEndingStyle::Cr, LineEndingStyle::Lf, LineEndingStyle::CrLf] {
            let result = normalize(input, style);
            assert_eq!(scan(&result.output).lines(), before);
        }
    }

    #[test]
    fn normalize_empty_buffer_writes_nothing() {
        let result = normalize(b"", LineEndingStyle::CrLf);
        assert!(result.output.is_empty());
        assert_eq!(result.written, 0);
        assert_eq!(result.lines(), 1usize);
    }
}
