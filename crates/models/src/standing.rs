use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Undergraduate class standing, derived from cumulative completed
/// credit hours. Gates when registration opens for a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassStanding {
    U1,
    U2,
    U3,
    U4,
}

impl ClassStanding {
    /// Standing tiers: U1 below 24 credits, U2 below 57, U3 below 85,
    /// U4 at 85 and above
    pub fn from_credits(credits: i32) -> Self {
        if credits < 24 {
            Self::U1
        } else if credits < 57 {
            Self::U2
        } else if credits < 85 {
            Self::U3
        } else {
            Self::U4
        }
    }
}

impl FromStr for ClassStanding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "U1" => Ok(Self::U1),
            "U2" => Ok(Self::U2),
            "U3" => Ok(Self::U3),
            "U4" => Ok(Self::U4),
            _ => Err(format!("Unknown class standing: {s}")),
        }
    }
}

impl Display for ClassStanding {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::U1 => write!(f, "U1"),
            Self::U2 => write!(f, "U2"),
            Self::U3 => write!(f, "U3"),
            Self::U4 => write!(f, "U4"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standing_tiers() {
        assert_eq!(ClassStanding::from_credits(0), ClassStanding::U1);
        assert_eq!(ClassStanding::from_credits(23), ClassStanding::U1);
        assert_eq!(ClassStanding::from_credits(24), ClassStanding::U2);
        assert_eq!(ClassStanding::from_credits(56), ClassStanding::U2);
        assert_eq!(ClassStanding::from_credits(57), ClassStanding::U3);
        assert_eq!(ClassStanding::from_credits(84), ClassStanding::U3);
        assert_eq!(ClassStanding::from_credits(85), ClassStanding::U4);
    }

    #[test]
    fn test_seniority_ordering() {
        assert!(ClassStanding::U4 > ClassStanding::U1);
    }
}
