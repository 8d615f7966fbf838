//! Text input parsing.
//!
//! The input is whitespace separated: `n k` followed by `n` records of
//! `x y weight`. Line breaks carry no meaning beyond error reporting.

use crate::error::Error;
use crate::geometry::Building;
use crate::Result;
use std::io::Read;
use std::str::FromStr;

/// A parsed problem instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneInput {
    /// Minimum number of buildings to enclose (`k`).
    pub min_required: usize,
    /// Buildings in input order.
    pub buildings: Vec<Building>,
}

/// Whitespace tokenizer that remembers line numbers.
struct Tokens<'a> {
    iter: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let iter = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |tok| (i + 1, tok)));
        Self {
            iter: Box::new(iter),
        }
    }

    fn next<T: FromStr>(&mut self, what: &str) -> Result<(usize, T)> {
        let (line, tok) = self
            .iter
            .next()
            .ok_or_else(|| Error::parse(0, format!("unexpected end of input, expected {}", what)))?;
        let value = tok
            .parse::<T>()
            .map_err(|_| Error::parse(line, format!("expected {}, found `{}`", what, tok)))?;
        Ok((line, value))
    }

    fn next_finite(&mut self, what: &str) -> Result<f64> {
        let (line, value) = self.next::<f64>(what)?;
        if !value.is_finite() {
            return Err(Error::parse(line, format!("{} must be finite", what)));
        }
        Ok(value)
    }

    fn remaining(&mut self) -> Option<(usize, &'a str)> {
        self.iter.next()
    }
}

/// Parses an instance from text.
///
/// # Errors
/// Returns [`Error::Parse`] for malformed or truncated input and
/// [`Error::InvalidConfig`] when `k` is not positive.
pub fn parse_str(text: &str) -> Result<ZoneInput> {
    let mut tokens = Tokens::new(text);

    let (_, n) = tokens.next::<usize>("building count n")?;
    let (_, k) = tokens.next::<i64>("minimum count k")?;
    if k <= 0 {
        return Err(Error::InvalidConfig(format!("k must be positive, got {}", k)));
    }

    // `n` is untrusted until the records are actually read.
    let mut buildings = Vec::new();
    for id in 0..n {
        let x = tokens.next_finite("x coordinate")?;
        let y = tokens.next_finite("y coordinate")?;
        let weight = tokens.next_finite("weight")?;
        buildings.push(Building::new(id, x, y, weight));
    }

    if let Some((line, tok)) = tokens.remaining() {
        return Err(Error::parse(
            line,
            format!("unexpected trailing token `{}` after {} buildings", tok, n),
        ));
    }

    Ok(ZoneInput {
        min_required: k as usize,
        buildings,
    })
}

/// Reads and parses an instance from any reader.
///
/// # Errors
/// Returns [`Error::Io`] if the reader fails, otherwise as [`parse_str`].
pub fn parse_reader<R: Read>(mut reader: R) -> Result<ZoneInput> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let input = parse_str("4 2\n0 0 1\n10 0 1\n0 10 -5\n10 10 1\n").unwrap();
        assert_eq!(input.min_required, 2);
        assert_eq!(input.buildings.len(), 4);
        assert_eq!(input.buildings[2], Building::new(2, 0.0, 10.0, -5.0));
    }

    #[test]
    fn test_parse_free_layout() {
        let input = parse_str("  2 1 1.5 -2.25\n 3e2\n\n-1 0 0").unwrap();
        assert_eq!(input.buildings[0], Building::new(0, 1.5, -2.25, 300.0));
        assert_eq!(input.buildings[1], Building::new(1, -1.0, 0.0, 0.0));
    }

    #[test]
    fn test_truncated_input() {
        let err = parse_str("3 1\n0 0 1\n1 1").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 0, .. }));
    }

    #[test]
    fn test_inflated_count_is_parse_error() {
        let err = parse_str("18446744073709551615 1\n0 0 1\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 0, .. }));

        let err = parse_str("10000000000 1\n0 0 1\n5 5 5\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 0, .. }));
    }

    #[test]
    fn test_bad_token_reports_line() {
        let err = parse_str("2 1\n0 0 1\n1 abc 2\n").unwrap_err();
        match err {
            Error::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("abc"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_trailing_tokens() {
        let err = parse_str("1 1\n0 0 1\n7\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }));
    }

    #[test]
    fn test_non_positive_k() {
        assert!(matches!(
            parse_str("1 0\n0 0 1"),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            parse_str("1 -3\n0 0 1"),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_negative_n() {
        assert!(matches!(parse_str("-1 1"), Err(Error::Parse { line: 1, .. })));
    }

    #[test]
    fn test_non_finite() {
        assert!(parse_str("1 1\nNaN 0 1").is_err());
        assert!(parse_str("1 1\n0 inf 1").is_err());
    }

    #[test]
    fn test_parse_reader() {
        let data: &[u8] = b"1 1\n2 3 4\n";
        let input = parse_reader(data).unwrap();
        assert_eq!(input.buildings, vec![Building::new(0, 2.0, 3.0, 4.0)]);
    }

    #[test]
    fn test_k_larger_than_n_is_left_to_the_solver() {
        let input = parse_str("1 5\n0 0 1").unwrap();
        assert_eq!(input.min_required, 5);
    }
}
