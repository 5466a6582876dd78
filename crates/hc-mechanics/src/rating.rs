//! Difficulty ratings for Roll to Do totals.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How hard a task the to-hit total would accomplish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    /// 5 or less.
    Pathetic,
    /// 6 to 10.
    Easy,
    /// 11 to 15.
    Normal,
    /// 16 to 20.
    Hard,
    /// 21 to 25.
    VeryHard,
    /// 26 to 30.
    Extreme,
    /// 31 or more.
    Unrankable,
}

impl Rating {
    /// Rate a to-hit total.
    pub fn for_to_hit(total: i32) -> Self {
        if total <= 5 {
            Self::Pathetic
        } else if total <= 10 {
            Self::Easy
        } else if total <= 15 {
            Self::Normal
        } else if total <= 20 {
            Self::Hard
        } else if total <= 25 {
            Self::VeryHard
        } else if total <= 30 {
            Self::Extreme
        } else {
            Self::Unrankable
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pathetic => write!(f, "Pathetic"),
            Self::Easy => write!(f, "Easy"),
            Self::Normal => write!(f, "Normal"),
            Self::Hard => write!(f, "Hard"),
            Self::VeryHard => write!(f, "Very Hard"),
            Self::Extreme => write!(f, "Extreme"),
            Self::Unrankable => write!(f, "Unrankable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(Rating::for_to_hit(-3), Rating::Pathetic);
        assert_eq!(Rating::for_to_hit(5), Rating::Pathetic);
        assert_eq!(Rating::for_to_hit(6), Rating::Easy);
        assert_eq!(Rating::for_to_hit(10), Rating::Easy);
        assert_eq!(Rating::for_to_hit(11), Rating::Normal);
        assert_eq!(Rating::for_to_hit(15), Rating::Normal);
        assert_eq!(Rating::for_to_hit(16), Rating::Hard);
        assert_eq!(Rating::for_to_hit(20), Rating::Hard);
        assert_eq!(Rating::for_to_hit(21), Rating::VeryHard);
        assert_eq!(Rating::for_to_hit(25), Rating::VeryHard);
        assert_eq!(Rating::for_to_hit(26), Rating::Extreme);
        assert_eq!(Rating::for_to_hit(30), Rating::Extreme);
        assert_eq!(Rating::for_to_hit(31), Rating::Unrankable);
    }

    #[test]
    fn display() {
        assert_eq!(Rating::VeryHard.to_string(), "Very Hard");
        assert_eq!(Rating::Unrankable.to_string(), "Unrankable");
    }
}
