use serde::Serialize;
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{BitAnd, BitOr, BitOrAssign},
    str::FromStr,
};

/// The days of the week a section meets, as a bitset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[repr(transparent)]
pub struct DaySet(u8);

impl DaySet {
    pub const MONDAY: Self = DaySet(1 << 0);
    pub const TUESDAY: Self = DaySet(1 << 1);
    pub const WEDNESDAY: Self = DaySet(1 << 2);
    pub const THURSDAY: Self = DaySet(1 << 3);
    pub const FRIDAY: Self = DaySet(1 << 4);
    pub const SATURDAY: Self = DaySet(1 << 5);
    pub const SUNDAY: Self = DaySet(1 << 6);

    pub const NONE: Self = DaySet(0);

    /// Day-to-char mapping for parsing and display
    const DAY_CHARS: [(Self, char); 7] = [
        (Self::MONDAY, 'M'),
        (Self::TUESDAY, 'T'),
        (Self::WEDNESDAY, 'W'),
        (Self::THURSDAY, 'R'),
        (Self::FRIDAY, 'F'),
        (Self::SATURDAY, 'S'),
        (Self::SUNDAY, 'U'),
    ];

    pub fn contains(self, day: Self) -> bool {
        (self & day) == day
    }

    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }

    /// Whether any meeting day is shared with `other`. Day overlap is
    /// what the time-conflict check treats as a conflict.
    pub fn intersects(self, other: Self) -> bool {
        (self & other) != Self::NONE
    }
}

impl FromStr for DaySet {
    type Err = ();

    fn from_str(days: &str) -> Result<Self, Self::Err> {
        let mut result = Self::NONE;

        for c in days.chars() {
            for &(day, day_char) in &Self::DAY_CHARS {
                if c == day_char {
                    result |= day;
                    break;
                }
            }
        }

        Ok(result)
    }
}

impl Display for DaySet {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut result = String::new();

        for &(day, day_char) in &Self::DAY_CHARS {
            if self.contains(day) {
                result.push(day_char);
            }
        }

        write!(f, "{result}")
    }
}

impl BitOr for DaySet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        DaySet(self.0 | rhs.0)
    }
}

impl BitAnd for DaySet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        DaySet(self.0 & rhs.0)
    }
}

impl BitOrAssign for DaySet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// A section's meeting-day pattern, which may still be unannounced
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub enum MeetingDays {
    Days(DaySet),
    #[default]
    Tba,
}

impl MeetingDays {
    /// TBA patterns never overlap anything
    pub fn day_set(self) -> DaySet {
        match self {
            Self::Days(days) => days,
            Self::Tba => DaySet::NONE,
        }
    }
}

impl FromStr for MeetingDays {
    type Err = ();

    fn from_str(days: &str) -> Result<Self, Self::Err> {
        if days.contains("TBA") {
            Ok(Self::Tba)
        } else {
            DaySet::from_str(days).map(Self::Days)
        }
    }
}

impl From<String> for MeetingDays {
    fn from(days: String) -> Self {
        Self::from_str(&days).unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use super::{DaySet, MeetingDays};
    use std::str::FromStr;

    #[test]
    fn test_day_set_from_str() {
        let days = DaySet::from_str("MWF").unwrap();
        assert!(days.contains(DaySet::MONDAY));
        assert!(!days.contains(DaySet::TUESDAY));
        assert!(days.contains(DaySet::WEDNESDAY));
        assert!(days.contains(DaySet::FRIDAY));
        assert_eq!(days.to_string(), "MWF");
    }

    #[test]
    fn test_intersects() {
        let mwf = DaySet::from_str("MWF").unwrap();
        let tr = DaySet::from_str("TR").unwrap();
        let wf = DaySet::from_str("WF").unwrap();

        assert!(!mwf.intersects(tr));
        assert!(mwf.intersects(wf));
        assert!(!DaySet::NONE.intersects(mwf));
    }

    #[test]
    fn test_tba_has_no_days() {
        let tba = MeetingDays::from_str("TBA").unwrap();
        assert!(tba.day_set().is_empty());

        let days = MeetingDays::from_str("TR").unwrap();
        assert!(days.day_set().intersects(DaySet::TUESDAY));
    }
}
