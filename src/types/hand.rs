//! Hand chirality

use serde::{Deserialize, Serialize};

/// Which hand a piece of state belongs to. The two sides never interact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandSide {
    Left,
    Right,
}

impl HandSide {
    /// Processing order within a tick
    pub const BOTH: [HandSide; 2] = [HandSide::Left, HandSide::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            HandSide::Left => "left",
            HandSide::Right => "right",
        }
    }

    /// Slot in per-hand arrays
    pub fn index(&self) -> usize {
        match self {
            HandSide::Left => 0,
            HandSide::Right => 1,
        }
    }
}

impl std::fmt::Display for HandSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HandSide::Left => "LEFT",
            HandSide::Right => "RIGHT",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for HandSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(HandSide::Left),
            "right" | "r" => Ok(HandSide::Right),
            other => Err(format!("unknown hand side '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_side() {
        assert_eq!("left".parse::<HandSide>(), Ok(HandSide::Left));
        assert_eq!("RIGHT".parse::<HandSide>(), Ok(HandSide::Right));
        assert!("both".parse::<HandSide>().is_err());
    }

    #[test]
    fn test_indices_distinct() {
        assert_ne!(HandSide::Left.index(), HandSide::Right.index());
    }
}
