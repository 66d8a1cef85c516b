use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum::EnumIter;

#[cfg(feature = "database")]
use sea_orm::Value;

/// A letter grade on a student's record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
pub enum Grade {
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    DPlus,
    D,
    F,
    /// Incomplete; never carries credit
    Incomplete,
    /// Pass in a pass/fail section; always carries credit
    Pass,
    /// Withdrawn before grading
    Withdrawn,
}

impl Grade {
    /// Numeric rank for comparing letter grades. Non-letter grades
    /// (P/I/W) have no rank and are handled explicitly by callers.
    fn rank(self) -> Option<u8> {
        match self {
            Self::A => Some(10),
            Self::AMinus => Some(9),
            Self::BPlus => Some(8),
            Self::B => Some(7),
            Self::BMinus => Some(6),
            Self::CPlus => Some(5),
            Self::C => Some(4),
            Self::CMinus => Some(3),
            Self::DPlus => Some(2),
            Self::D => Some(1),
            Self::F => Some(0),
            _ => None,
        }
    }

    /// Whether this grade earns credit toward completed hours.
    /// F, Incomplete, and Withdrawn never do; Pass always does.
    pub fn earns_credit(self) -> bool {
        match self {
            Self::F | Self::Incomplete | Self::Withdrawn => false,
            Self::Pass => true,
            letter => letter.rank().is_some_and(|r| r > 0),
        }
    }

    /// Whether this grade satisfies a prerequisite with the given minimum.
    /// Pass always satisfies; F/Incomplete/Withdrawn never do. With no
    /// minimum, any credit-earning grade satisfies.
    pub fn satisfies_minimum(self, minimum: Option<Grade>) -> bool {
        match self {
            Self::F | Self::Incomplete | Self::Withdrawn => false,
            Self::Pass => true,
            letter => match minimum.and_then(Grade::rank) {
                Some(min_rank) => letter.rank().is_some_and(|r| r >= min_rank),
                None => letter.earns_credit(),
            },
        }
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "A-" => Ok(Self::AMinus),
            "B+" => Ok(Self::BPlus),
            "B" => Ok(Self::B),
            "B-" => Ok(Self::BMinus),
            "C+" => Ok(Self::CPlus),
            "C" => Ok(Self::C),
            "C-" => Ok(Self::CMinus),
            "D+" => Ok(Self::DPlus),
            "D" => Ok(Self::D),
            "F" => Ok(Self::F),
            "I" => Ok(Self::Incomplete),
            "P" => Ok(Self::Pass),
            "W" => Ok(Self::Withdrawn),
            _ => Err(format!("Unknown grade: {s}")),
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let s = match self {
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::F => "F",
            Self::Incomplete => "I",
            Self::Pass => "P",
            Self::Withdrawn => "W",
        };
        write!(f, "{s}")
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::ValueType for Grade {
    fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
        match v {
            Value::String(Some(s)) => s.parse().map_err(|_| sea_orm::sea_query::ValueTypeErr),
            _ => Err(sea_orm::sea_query::ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "Grade".to_string()
    }

    fn array_type() -> sea_orm::sea_query::ArrayType {
        sea_orm::sea_query::ArrayType::String
    }

    fn column_type() -> sea_orm::sea_query::ColumnType {
        sea_orm::sea_query::ColumnType::Text
    }
}

#[cfg(feature = "database")]
impl From<Grade> for Value {
    fn from(grade: Grade) -> Self {
        Value::String(Some(Box::new(grade.to_string())))
    }
}

#[cfg(feature = "database")]
impl sea_orm::TryGetable for Grade {
    fn try_get_by<I: sea_orm::ColIdx>(
        res: &sea_orm::QueryResult,
        index: I,
    ) -> Result<Self, sea_orm::TryGetError> {
        let val: String = res.try_get_by(index)?;

        val.parse().map_err(|e| {
            sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(format!(
                "Failed to parse Grade: {e}"
            )))
        })
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::Nullable for Grade {
    fn null() -> Value {
        Value::String(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_round_trip() {
        for grade in Grade::iter() {
            let parsed: Grade = grade.to_string().parse().unwrap();
            assert_eq!(parsed, grade);
        }
    }

    #[test]
    fn test_minimum_grade() {
        let b_plus: Grade = "B+".parse().unwrap();
        assert!(b_plus.satisfies_minimum(Some(Grade::C)));
        assert!(b_plus.satisfies_minimum(Some(Grade::BPlus)));
        assert!(!b_plus.satisfies_minimum(Some(Grade::A)));

        // Pass satisfies any minimum; F/I/W satisfy none
        assert!(Grade::Pass.satisfies_minimum(Some(Grade::A)));
        assert!(!Grade::F.satisfies_minimum(None));
        assert!(!Grade::Incomplete.satisfies_minimum(None));
        assert!(!Grade::Withdrawn.satisfies_minimum(Some(Grade::D)));
    }

    #[test]
    fn test_earns_credit() {
        assert!(Grade::D.earns_credit());
        assert!(Grade::Pass.earns_credit());
        assert!(!Grade::F.earns_credit());
        assert!(!Grade::Incomplete.earns_credit());
    }
}
