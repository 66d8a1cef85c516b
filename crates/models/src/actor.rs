use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// How far an entry in the advisor registry can reach when acting on
/// students: a department, a whole college, the whole university, or
/// registrar (unrestricted, plus registrar-only powers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScopeLevel {
    Department,
    College,
    University,
    Registrar,
}

impl ScopeLevel {
    pub fn is_registrar(self) -> bool {
        matches!(self, Self::Registrar)
    }
}

impl FromStr for ScopeLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "department" => Ok(Self::Department),
            "college" => Ok(Self::College),
            "university" => Ok(Self::University),
            "registrar" => Ok(Self::Registrar),
            _ => Err(format!("Unknown scope level: {s}")),
        }
    }
}

impl Display for ScopeLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Department => write!(f, "department"),
            Self::College => write!(f, "college"),
            Self::University => write!(f, "university"),
            Self::Registrar => write!(f, "registrar"),
        }
    }
}
