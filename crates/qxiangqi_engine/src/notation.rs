//! Move notation parser
//!
//! Three shapes are accepted, built from two-character square tokens:
//!
//! | Input     | Meaning                         |
//! |-----------|---------------------------------|
//! | `a1b1`    | simple move `a1 -> b1`          |
//! | `a1b1^c2` | merge `a1` and `b1` into `c2`   |
//! | `a1^b1c2` | split `a1` into `b1` and `c2`   |
//!
//! The `^` marks the side holding two squares. Shape problems are reported
//! before duplicate squares, and duplicates before off-board tokens.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{XiangqiError, XiangqiResult};
use crate::types::Location;

/// Parsed source and target squares of one move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub sources: Vec<Location>,
    pub targets: Vec<Location>,
}

impl MoveRequest {
    pub fn is_merge(&self) -> bool {
        self.sources.len() == 2
    }

    pub fn is_split(&self) -> bool {
        self.targets.len() == 2
    }
}

/// Split a move string into its raw source and target tokens
///
/// Only the shape and duplicate rules are checked here; the tokens are not
/// yet known to be on the board.
pub fn split_tokens(input: &str) -> XiangqiResult<(Vec<&str>, Vec<&str>)> {
    let invalid = || XiangqiError::InvalidFormat {
        input: input.to_string(),
    };
    if !input.is_ascii() {
        return Err(invalid());
    }

    let (sources, targets) = match input.split_once(QUANTUM_SEPARATOR) {
        Some((sources, targets)) => {
            if input.matches(QUANTUM_SEPARATOR).count() > 1
                || input.len() != QUANTUM_MOVE_LEN
                || ![LOCATION_TOKEN_LEN, 2 * LOCATION_TOKEN_LEN].contains(&sources.len())
            {
                return Err(invalid());
            }
            let sources = chunk(sources);
            let targets = chunk(targets);
            if sources.len() == 2 {
                if sources[0] == sources[1] {
                    return Err(XiangqiError::DuplicateSources);
                }
            } else if targets[0] == targets[1] {
                return Err(XiangqiError::DuplicateTargets);
            }
            (sources, targets)
        }
        None => {
            if input.len() != SIMPLE_MOVE_LEN {
                return Err(invalid());
            }
            let (source, target) = input.split_at(LOCATION_TOKEN_LEN);
            if source == target {
                return Err(XiangqiError::SourceEqualsTarget);
            }
            (vec![source], vec![target])
        }
    };
    Ok((sources, targets))
}

fn chunk(side: &str) -> Vec<&str> {
    (0..side.len())
        .step_by(LOCATION_TOKEN_LEN)
        .map(|i| &side[i..i + LOCATION_TOKEN_LEN])
        .collect()
}

/// Parse a move string into source and target locations
pub fn parse_move(input: &str) -> XiangqiResult<MoveRequest> {
    let (sources, targets) = split_tokens(input)?;
    let to_locations = |tokens: Vec<&str>| {
        tokens
            .into_iter()
            .map(str::parse::<Location>)
            .collect::<XiangqiResult<Vec<_>>>()
    };
    Ok(MoveRequest {
        sources: to_locations(sources)?,
        targets: to_locations(targets)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locs(tokens: &[&str]) -> Vec<Location> {
        tokens.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn test_parse_simple_move() {
        let request = parse_move("a1b1").unwrap();
        assert_eq!(request.sources, locs(&["a1"]));
        assert_eq!(request.targets, locs(&["b1"]));
        assert!(!request.is_merge() && !request.is_split());
    }

    #[test]
    fn test_parse_merge_and_split() {
        let merge = parse_move("a1b1^c2").unwrap();
        assert_eq!(merge.sources, locs(&["a1", "b1"]));
        assert_eq!(merge.targets, locs(&["c2"]));
        assert!(merge.is_merge());

        let split = parse_move("a1^b1c2").unwrap();
        assert_eq!(split.sources, locs(&["a1"]));
        assert_eq!(split.targets, locs(&["b1", "c2"]));
        assert!(split.is_split());
    }

    #[test]
    fn test_invalid_shapes() {
        let inputs = [
            "a1^b1", "a^1b1c2", "a1b", "", "a1b1c2", "a1^^b1c", "^a1b1c2", "a1b1c^2", "a1b1^c",
            "é1b1",
        ];
        for input in inputs {
            assert!(
                matches!(parse_move(input), Err(XiangqiError::InvalidFormat { .. })),
                "{input:?} should be rejected as malformed"
            );
        }
    }

    #[test]
    fn test_duplicates() {
        assert_eq!(parse_move("a1a1^c2"), Err(XiangqiError::DuplicateSources));
        assert_eq!(parse_move("a1^c2c2"), Err(XiangqiError::DuplicateTargets));
        assert_eq!(parse_move("a1a1"), Err(XiangqiError::SourceEqualsTarget));
    }

    #[test]
    fn test_bad_locations() {
        for input in ["a1n1", "j0a0", "a1b1^z2", "a1^b1cx"] {
            assert!(
                matches!(parse_move(input), Err(XiangqiError::InvalidLocation { .. })),
                "{input:?} should be rejected as off-board"
            );
        }
        assert_eq!(
            parse_move("a1n1").unwrap_err().to_string(),
            "Invalid location string. Make sure they are from a0 to i9."
        );
    }

    #[test]
    fn test_duplicates_reported_before_bad_locations() {
        assert_eq!(parse_move("z1z1^c2"), Err(XiangqiError::DuplicateSources));
    }
}
