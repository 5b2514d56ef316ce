//! Parsing of numeric console input.
use std::num::ParseIntError;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ParseError {
    #[error("not a number")]
    InvalidId,
    #[error("empty input")]
    Empty,
}

impl From<ParseIntError> for ParseError {
    fn from(_: ParseIntError) -> Self {
        ParseError::InvalidId
    }
}

/// Parses a single numeric id.
pub(crate) fn parse_id(input: &str) -> Result<i32, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(trimmed.parse::<i32>()?)
}

/// Parses a comma-separated id list (e.g. `1, 2,3`).
///
/// Duplicates are kept as typed; the engine collapses them into a single
/// association per id. An empty list is rejected.
pub(crate) fn parse_id_list(input: &str) -> Result<Vec<i32>, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    trimmed.split(',').map(parse_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_ids() {
        assert_eq!(parse_id("3"), Ok(3));
        assert_eq!(parse_id("  12 "), Ok(12));
        assert_eq!(parse_id(""), Err(ParseError::Empty));
        assert_eq!(parse_id("abc"), Err(ParseError::InvalidId));
        assert_eq!(parse_id("1.5"), Err(ParseError::InvalidId));
    }

    #[test]
    fn parses_comma_separated_lists() {
        assert_eq!(parse_id_list("1,2,3"), Ok(vec![1, 2, 3]));
        assert_eq!(parse_id_list("1, 2, 3"), Ok(vec![1, 2, 3]));
        assert_eq!(parse_id_list("7"), Ok(vec![7]));
    }

    #[test]
    fn keeps_duplicates_for_the_engine_to_collapse() {
        assert_eq!(parse_id_list("1,1,2"), Ok(vec![1, 1, 2]));
    }

    #[test]
    fn rejects_empty_and_malformed_lists() {
        assert_eq!(parse_id_list(""), Err(ParseError::Empty));
        assert_eq!(parse_id_list("   "), Err(ParseError::Empty));
        assert_eq!(parse_id_list("1,,2"), Err(ParseError::Empty));
        assert_eq!(parse_id_list("1,x"), Err(ParseError::InvalidId));
    }
}
