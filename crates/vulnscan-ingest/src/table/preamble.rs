//! Preamble skipping.

use std::io::{self, BufRead};

/// Discard up to `lines` lines from `reader`.
///
/// Returns how many lines were actually consumed; running out of input early
/// is not an error. Lines are consumed as raw bytes so the preamble may hold
/// any encoding or unbalanced quotes without disturbing the table parser.
pub fn skip_preamble<R: BufRead>(reader: &mut R, lines: usize) -> io::Result<usize> {
    let mut buffer = Vec::new();
    for skipped in 0..lines {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            return Ok(skipped);
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    #[test]
    fn skips_exact_count() {
        let mut input = Cursor::new("a\nb\nc\nIP;QID\n");
        assert_eq!(skip_preamble(&mut input, 3).unwrap(), 3);
        let mut rest = String::new();
        input.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "IP;QID\n");
    }

    #[test]
    fn tolerates_short_input() {
        let mut input = Cursor::new("only\ntwo");
        assert_eq!(skip_preamble(&mut input, 8).unwrap(), 2);
        assert_eq!(skip_preamble(&mut input, 8).unwrap(), 0);
    }

    #[test]
    fn zero_lines_consumes_nothing() {
        let mut input = Cursor::new("IP;QID\n");
        assert_eq!(skip_preamble(&mut input, 0).unwrap(), 0);
        let mut rest = String::new();
        input.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "IP;QID\n");
    }

    #[test]
    fn preamble_with_quotes_and_crlf() {
        let mut input = Cursor::new("\"Scan Results\r\n\"unterminated\r\nIP\r\n");
        assert_eq!(skip_preamble(&mut input, 2).unwrap(), 2);
        let mut rest = String::new();
        input.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "IP\r\n");
    }
}
