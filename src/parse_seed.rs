use thiserror::Error;
use tracing::warn;

use crate::parse_util;

/// The token denoting a dead cell. Any other token denotes a live cell, the
/// empty token from consecutive separators included.
pub const DEAD_MARKER: &[u8] = b"-";

/// A parsed seed: one row of tokens per input line. Tokens borrow from the
/// input bytes.
#[derive(Debug)]
pub struct Seed<'a> {
    pub rows: Vec<Vec<&'a [u8]>>,
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Row {row} has {got} tokens, expected {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },
}

/// Parse the plain-text seed format: one row per line, tokens within a row
/// separated by a single space. Every row must have as many tokens as the
/// first.
///
/// An empty input is not an error; it parses to zero rows.
pub fn read_seed(mut bytes: &[u8]) -> Result<Seed<'_>, SeedError> {
    let mut rows: Vec<Vec<&[u8]>> = Vec::new();

    while !bytes.is_empty() {
        let (line, rest) = parse_util::take_line(bytes);

        let row = split_tokens(line);

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(SeedError::RaggedRow {
                    row: rows.len(),
                    got: row.len(),
                    expected: first.len(),
                });
            }
        }

        rows.push(row);
        bytes = rest;
    }

    if rows.is_empty() {
        warn!("Seed contains no rows");
    }

    Ok(Seed { rows })
}

/// Split a line into tokens on single spaces. Consecutive separators yield
/// empty tokens, and an empty line yields a single empty token.
fn split_tokens(mut line: &[u8]) -> Vec<&[u8]> {
    let mut tokens = Vec::new();

    loop {
        match parse_util::take_with(b' ', line) {
            (Some(token), rest) => {
                tokens.push(token);
                line = rest;
            }
            (None, rest) => {
                tokens.push(rest);
                break;
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::SeedError;
    use super::read_seed;

    #[test]
    fn test_tokens_split_on_single_space() {
        let seed = read_seed(b"0 - 0\n- 0 -").unwrap();

        assert_eq!(seed.rows.len(), 2);
        assert_eq!(seed.rows[0], [b"0".as_slice(), b"-", b"0"]);
        assert_eq!(seed.rows[1], [b"-".as_slice(), b"0", b"-"]);
    }

    #[test]
    fn test_consecutive_separators_yield_empty_tokens() {
        let seed = read_seed(b"0  -").unwrap();

        assert_eq!(seed.rows[0], [b"0".as_slice(), b"", b"-"]);
    }

    #[test]
    fn test_line_breaks() {
        // A trailing break doesn't produce a phantom row
        let seed = read_seed(b"0 -\r\n- 0\n").unwrap();

        assert_eq!(seed.rows.len(), 2);
        assert_eq!(seed.rows[1], [b"-".as_slice(), b"0"]);
    }

    #[test]
    fn test_empty_input() {
        let seed = read_seed(b"").unwrap();

        assert!(seed.rows.is_empty());
    }

    #[test]
    fn test_ragged_row_rejected() {
        let err = read_seed(b"0 -\n0").unwrap_err();

        assert!(matches!(
            err,
            SeedError::RaggedRow {
                row: 1,
                got: 1,
                expected: 2,
            }
        ));
        insta::assert_snapshot!(err, @"Row 1 has 1 tokens, expected 2");
    }
}
