use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum::EnumIter;

/// The kinds of registration hold an office can place on a student.
/// Any active hold blocks enrollment actions; the type only governs
/// who may place or resolve it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
pub enum HoldType {
    /// Unpaid balance; registrar-only
    Financial,
    /// Placed by an advisor within scope
    AcademicAdvising,
    Disciplinary,
    Health,
}

impl FromStr for HoldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "financial" => Ok(Self::Financial),
            "academic-advising" | "academic_advising" => Ok(Self::AcademicAdvising),
            "disciplinary" => Ok(Self::Disciplinary),
            "health" => Ok(Self::Health),
            _ => Err(format!("Unknown hold type: {s}")),
        }
    }
}

impl Display for HoldType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Financial => write!(f, "financial"),
            Self::AcademicAdvising => write!(f, "academic-advising"),
            Self::Disciplinary => write!(f, "disciplinary"),
            Self::Health => write!(f, "health"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_round_trip() {
        for hold_type in HoldType::iter() {
            let parsed: HoldType = hold_type.to_string().parse().unwrap();
            assert_eq!(parsed, hold_type);
        }
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!("parking".parse::<HoldType>().is_err());
    }
}
