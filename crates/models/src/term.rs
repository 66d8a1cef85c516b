use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum::EnumIter;

/// The four registration periods in an academic year, in calendar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Season {
    Spring,
    SummerI,
    SummerII,
    Fall,
}

impl Season {
    /// Position within the academic year, for ordering terms
    fn index(self) -> u8 {
        match self {
            Self::Spring => 0,
            Self::SummerI => 1,
            Self::SummerII => 2,
            Self::Fall => 3,
        }
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spring" => Ok(Self::Spring),
            "summer1" | "summer_i" | "summeri" => Ok(Self::SummerI),
            "summer2" | "summer_ii" | "summerii" => Ok(Self::SummerII),
            "fall" => Ok(Self::Fall),
            _ => Err(format!("Unknown season: {s}")),
        }
    }
}

impl Display for Season {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Spring => write!(f, "spring"),
            Self::SummerI => write!(f, "summer1"),
            Self::SummerII => write!(f, "summer2"),
            Self::Fall => write!(f, "fall"),
        }
    }
}

/// A registration period: season plus year. Totally ordered so "prior
/// term" comparisons are well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    pub season: Season,
    pub year: i16,
}

impl Term {
    pub fn new(season: Season, year: i16) -> Self {
        Self { season, year }
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then(self.season.index().cmp(&other.season.index()))
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.season, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_ordering() {
        let spring = Term::new(Season::Spring, 2026);
        let summer = Term::new(Season::SummerI, 2026);
        let fall = Term::new(Season::Fall, 2025);

        assert!(fall < spring);
        assert!(spring < summer);
    }

    #[test]
    fn test_season_parsing() {
        assert_eq!("Fall".parse::<Season>().unwrap(), Season::Fall);
        assert_eq!("summer_i".parse::<Season>().unwrap(), Season::SummerI);
        assert!("autumn".parse::<Season>().is_err());
    }
}
