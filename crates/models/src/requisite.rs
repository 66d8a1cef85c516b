use crate::grade::Grade;
use serde::Serialize;

/// One requirement group: satisfied when the student holds any one of
/// `codes` at `min_grade` or better (no minimum means any passing grade).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementGroup {
    pub min_grade: Option<Grade>,
    pub codes: Vec<String>,
}

/// The result of parsing a requisite string: the student must satisfy
/// every group. Clauses that yielded no course codes are collected in
/// `unparsed` so callers can surface them instead of dropping them
/// silently; they are treated as satisfied.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedRequisites {
    pub groups: Vec<RequirementGroup>,
    pub unparsed: Vec<String>,
}

impl ParsedRequisites {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.unparsed.is_empty()
    }
}

/// Parse free-text requisites into AND-of-OR requirement groups.
///
/// Clauses are separated by `;`. Within a clause, a leading
/// `<grade> or higher:` / `<grade> or better:` sets the group minimum.
/// Course codes match 2-4 uppercase letters followed by exactly 3 digits.
/// An `or` between two codes makes the clause one OR-group; otherwise
/// each code becomes its own singleton group.
pub fn parse_requirement_groups(text: &str) -> ParsedRequisites {
    let mut parsed = ParsedRequisites::default();

    for clause in text.split(';') {
        let clause = clause.trim();
        if clause.is_empty() {
            continue;
        }

        let (min_grade, remainder) = strip_grade_clause(clause);
        let codes = extract_course_codes(remainder);

        if codes.is_empty() {
            parsed.unparsed.push(clause.to_string());
            continue;
        }

        if codes.len() > 1 && has_or_between_codes(remainder) {
            parsed.groups.push(RequirementGroup { min_grade, codes });
        } else {
            for code in codes {
                parsed.groups.push(RequirementGroup {
                    min_grade,
                    codes: vec![code],
                });
            }
        }
    }

    parsed
}

/// Scan for course-code tokens: 2-4 uppercase letters immediately
/// followed by exactly 3 digits, on word boundaries.
pub fn extract_course_codes(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut codes = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        // Require a word boundary before the subject letters
        if i > 0 && bytes[i - 1].is_ascii_alphanumeric() {
            i += 1;
            continue;
        }

        let letters_start = i;
        while i < bytes.len() && bytes[i].is_ascii_uppercase() {
            i += 1;
        }
        let letters = i - letters_start;

        if !(2..=4).contains(&letters) {
            i = letters_start + 1;
            continue;
        }

        let digits_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }

        if i - digits_start == 3 {
            codes.push(text[letters_start..i].to_string());
        }
    }

    codes
}

/// Whether the requisite text refers students to departmental consent,
/// which is validated against granted permissions rather than
/// coursework. "Permission of instructor" and similar phrasings are
/// not departmental consent and must not match.
pub fn mentions_department_permission(text: &str) -> bool {
    let text = text.to_lowercase();
    text.contains("permission of department") || text.contains("permission of the department")
}

/// Strip a leading `<grade> or higher:` / `<grade> or better:` clause,
/// returning the minimum grade and the rest of the clause.
fn strip_grade_clause(clause: &str) -> (Option<Grade>, &str) {
    let Some((head, rest)) = clause.split_once(':') else {
        return (None, clause);
    };

    let mut words = head.split_whitespace();
    let grade = match words.next().and_then(|w| w.parse::<Grade>().ok()) {
        Some(g) => g,
        None => return (None, clause),
    };

    let qualifier: Vec<&str> = words.collect();
    match qualifier.as_slice() {
        ["or", "higher"] | ["or", "better"] => (Some(grade), rest),
        _ => (None, clause),
    }
}

/// Detect an `or` token sitting between two course codes that is not
/// part of an `or higher` / `or better` qualifier.
fn has_or_between_codes(text: &str) -> bool {
    let tokens: Vec<&str> = text
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    let is_code = |t: &str| !extract_course_codes(t).is_empty();

    for (idx, token) in tokens.iter().enumerate() {
        if !token.eq_ignore_ascii_case("or") {
            continue;
        }
        if matches!(tokens.get(idx + 1), Some(next) if next.eq_ignore_ascii_case("higher") || next.eq_ignore_ascii_case("better"))
        {
            continue;
        }
        let code_before = tokens[..idx].iter().any(|t| is_code(t));
        let code_after = tokens[idx + 1..].iter().any(|t| is_code(t));
        if code_before && code_after {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_group_with_grade() {
        let parsed = parse_requirement_groups("C or higher: CSE214 or CSE215");

        assert_eq!(parsed.groups.len(), 1);
        assert_eq!(parsed.groups[0].min_grade, Some(Grade::C));
        assert_eq!(parsed.groups[0].codes, vec!["CSE214", "CSE215"]);
        assert!(parsed.unparsed.is_empty());
    }

    #[test]
    fn test_singleton_groups() {
        let parsed = parse_requirement_groups("CSE114; CSE214");

        assert_eq!(parsed.groups.len(), 2);
        assert_eq!(parsed.groups[0].codes, vec!["CSE114"]);
        assert_eq!(parsed.groups[1].codes, vec!["CSE214"]);
        assert_eq!(parsed.groups[0].min_grade, None);
    }

    #[test]
    fn test_mixed_clauses() {
        let parsed = parse_requirement_groups("C or higher: CSE214; MAT125 or MAT131");

        assert_eq!(parsed.groups.len(), 2);
        assert_eq!(parsed.groups[0].min_grade, Some(Grade::C));
        assert_eq!(parsed.groups[0].codes, vec!["CSE214"]);
        assert_eq!(parsed.groups[1].min_grade, None);
        assert_eq!(parsed.groups[1].codes, vec!["MAT125", "MAT131"]);
    }

    #[test]
    fn test_and_of_codes_without_or() {
        // Two codes in one clause with no "or" become singleton groups
        let parsed = parse_requirement_groups("AMS210 and MAT211");

        assert_eq!(parsed.groups.len(), 2);
        assert!(parsed.groups.iter().all(|g| g.codes.len() == 1));
    }

    #[test]
    fn test_unparsed_clause_surfaced() {
        let parsed = parse_requirement_groups("CSE114; permission of department");

        assert_eq!(parsed.groups.len(), 1);
        assert_eq!(parsed.unparsed, vec!["permission of department"]);
        assert!(mentions_department_permission(&parsed.unparsed[0]));
    }

    #[test]
    fn test_instructor_permission_is_not_departmental() {
        assert!(!mentions_department_permission(
            "Permission of instructor required"
        ));
        assert!(mentions_department_permission("Permission of Department"));
        assert!(mentions_department_permission(
            "permission of the department"
        ));
    }

    #[test]
    fn test_code_extraction_boundaries() {
        // Exactly 3 digits and 2-4 letters; longer runs are rejected
        assert_eq!(extract_course_codes("CSE214"), vec!["CSE214"]);
        assert_eq!(extract_course_codes("see CSE2140"), Vec::<String>::new());
        assert_eq!(extract_course_codes("ABCDE123"), Vec::<String>::new());
        assert_eq!(
            extract_course_codes("MAT125, MAT131, or AMS151"),
            vec!["MAT125", "MAT131", "AMS151"]
        );
    }

    #[test]
    fn test_grade_clause_not_stripped_without_qualifier() {
        // A colon with no grade qualifier is left alone
        let parsed = parse_requirement_groups("Prerequisite: CSE114");
        assert_eq!(parsed.groups.len(), 1);
        assert_eq!(parsed.groups[0].min_grade, None);
    }

    #[test]
    fn test_or_higher_not_treated_as_or_group() {
        // The "or" in "or higher" must not turn singletons into an OR-group
        let parsed = parse_requirement_groups("B or higher: CSE114 and CSE214");
        assert_eq!(parsed.groups.len(), 2);
        assert!(parsed.groups.iter().all(|g| g.min_grade == Some(Grade::B)));
    }
}
