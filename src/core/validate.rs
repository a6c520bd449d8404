use lazy_static::lazy_static;
use regex::Regex;

use crate::core::decompose::normalize;
use crate::domain::model::Postcode;

// BS7666 character classes. Which district endings are allowed depends on
// whether the area is one or two letters.
const AREA_FIRST_EXCLUDED: &[char] = &['Q', 'V', 'X'];
const AREA_SECOND_EXCLUDED: &[char] = &['I', 'J', 'Z'];
const DISTRICT_ENDINGS_SINGLE_AREA: &str = "ABCDEFGHJKSTUW";
const DISTRICT_ENDINGS_DOUBLE_AREA: &str = "ABEHMNPRVWXY";
const UNIT_EXCLUDED: &[char] = &['C', 'I', 'K', 'M', 'O', 'V'];

lazy_static! {
    // Known-valid codes that do not conform to the structural rules.
    static ref SPECIAL_CASES: Vec<String> = vec!["G1R 0AA".to_string()];

    // Progressive-input grammar: area, optional district, optional sector,
    // and up to two unit letters. Used by `valid_fragment` only; full
    // validation goes through the decomposed fragments.
    static ref FRAGMENT: Regex =
        Regex::new(r"^([A-Z]{1,2})(\d[A-Z\d]?)?\s*(\d?)([A-Z]{0,2})$").unwrap();
}

fn area_ok(area: &str) -> bool {
    if area.is_empty() || area.len() > 2 {
        return false;
    }
    if !area.chars().all(|c| c.is_ascii_uppercase()) {
        return false;
    }
    let mut chars = area.chars();
    if AREA_FIRST_EXCLUDED.contains(&chars.next().unwrap()) {
        return false;
    }
    if let Some(second) = chars.next() {
        if AREA_SECOND_EXCLUDED.contains(&second) {
            return false;
        }
    }
    true
}

fn district_ending_ok(ending: char, area_len: usize) -> bool {
    if ending.is_ascii_digit() {
        return true;
    }
    let allowed = if area_len == 1 {
        DISTRICT_ENDINGS_SINGLE_AREA
    } else {
        DISTRICT_ENDINGS_DOUBLE_AREA
    };
    allowed.contains(ending)
}

fn sector_ok(sector: &str) -> bool {
    sector.len() == 1 && sector.chars().all(|c| c.is_ascii_digit())
}

fn unit_letters_ok(unit: &str) -> bool {
    unit.chars()
        .all(|c| c.is_ascii_uppercase() && !UNIT_EXCLUDED.contains(&c))
}

impl Postcode {
    fn is_special_case(&self, normalized: &str) -> bool {
        match self.special_case_override() {
            Some(cases) => cases.iter().any(|c| normalize(c) == normalized),
            None => SPECIAL_CASES.iter().any(|c| normalize(c) == normalized),
        }
    }

    /// Full structural validation.
    ///
    /// Returns the canonical `"<area><district> <sector><unit>"` form when the
    /// code is well-formed, `None` otherwise. Absence is the failure signal;
    /// a malformed postcode is not an error.
    pub fn valid(&self) -> Option<String> {
        let code = self.normalized();
        if self.is_special_case(&code) {
            return Some(code);
        }

        let fragments = self.fragments();
        let area = fragments.area.as_deref()?;
        let district = fragments.district.as_deref()?;
        let sector = fragments.sector.as_deref()?;
        let unit = fragments.unit.as_deref()?;

        if !area_ok(area) {
            return None;
        }
        if !district_ending_ok(district.chars().last()?, area.len()) {
            return None;
        }
        if !sector_ok(sector) {
            return None;
        }
        if unit.len() != 2 || !unit_letters_ok(unit) {
            return None;
        }

        Some(format!("{area}{district} {sector}{unit}"))
    }

    /// Looser validation for partial input, e.g. while a user is still typing.
    ///
    /// Each present stage is checked and the input may stop at any stage
    /// boundary: a bare area is a legitimate fragment, as is a district-less
    /// sector-less one, or a one-letter in-progress unit.
    pub fn valid_fragment(&self) -> bool {
        let code = self.normalized();
        if self.is_special_case(&code) {
            return true;
        }

        let Some(caps) = FRAGMENT.captures(&code) else {
            return false;
        };

        let area = &caps[1];
        if !area_ok(area) {
            return false;
        }

        let district = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        if district.len() == 2 && !district_ending_ok(district.chars().nth(1).unwrap(), area.len())
        {
            return false;
        }

        let sector = &caps[3];
        let unit = &caps[4];
        if !unit.is_empty() && sector.is_empty() {
            return false;
        }
        if !sector.is_empty() && !sector_ok(sector) {
            return false;
        }
        unit_letters_ok(unit)
    }
}

/// Validates a raw string, building a transient value for the one-off query.
pub fn valid(code: &str) -> Option<String> {
    Postcode::new(code).valid()
}

/// Fragment-validates a raw string via a transient value.
pub fn valid_fragment(code: &str) -> bool {
    Postcode::new(code).valid_fragment()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_returns_canonical_form() {
        assert_eq!(valid("ec1y8pq").as_deref(), Some("EC1Y 8PQ"));
        assert_eq!(valid("SW1A 1AA").as_deref(), Some("SW1A 1AA"));
        assert_eq!(valid("N1 9GU").as_deref(), Some("N1 9GU"));
    }

    #[test]
    fn test_valid_is_idempotent_over_canonical_form() {
        let canonical = valid("ec1y 8pq").unwrap();
        assert_eq!(valid(&canonical), Some(canonical));
    }

    #[test]
    fn test_missing_fragments_fail() {
        assert_eq!(valid("EC1Y"), None);
        assert_eq!(valid("EC1Y 8"), None);
        assert_eq!(valid(""), None);
    }

    #[test]
    fn test_area_first_letter_exclusions() {
        assert_eq!(valid("QA1A 1AA"), None);
        assert_eq!(valid("VA1A 1AA"), None);
        assert_eq!(valid("XA1A 1AA"), None);
        assert!(valid("EA1A 1AA").is_some());
    }

    #[test]
    fn test_area_second_letter_exclusions() {
        assert_eq!(valid("AI1A 1AA"), None);
        assert_eq!(valid("AJ1A 1AA"), None);
        assert_eq!(valid("AZ1A 1AA"), None);
    }

    #[test]
    fn test_district_ending_depends_on_area_length() {
        // Single-letter area: W allowed, Z not.
        assert!(valid("E1W 5AB").is_some());
        assert_eq!(valid("E1Z 5AB"), None);
        // Two-letter area: Y allowed, S not.
        assert!(valid("EC1Y 8PQ").is_some());
        assert_eq!(valid("EC1S 8PQ"), None);
    }

    #[test]
    fn test_malformed_sector_segment_fails() {
        assert_eq!(valid("EC1Y A8PQ"), None);
    }

    #[test]
    fn test_unit_letter_exclusions() {
        assert_eq!(valid("EC1Y 8PO"), None);
        assert_eq!(valid("EC1Y 8CP"), None);
        assert!(valid("EC1Y 8PL").is_some());
    }

    #[test]
    fn test_special_case_short_circuits() {
        // G1R fails the district-ending rule, so only the special-case list
        // lets it through.
        assert_eq!(valid("g1r 0aa").as_deref(), Some("G1R 0AA"));
        assert_eq!(valid("G1R 0AB"), None);
    }

    #[test]
    fn test_special_case_override() {
        let postcode = Postcode::with_special_cases("SAN TA1", vec!["SAN TA1".to_string()]);
        assert_eq!(postcode.valid().as_deref(), Some("SAN TA1"));
        assert!(postcode.valid_fragment());

        // The override replaces the default list entirely.
        let postcode = Postcode::with_special_cases("G1R 0AA", vec!["SAN TA1".to_string()]);
        assert_eq!(postcode.valid(), None);
    }

    #[test]
    fn test_valid_fragment_stages() {
        assert!(valid_fragment("EC"));
        assert!(valid_fragment("E"));
        assert!(valid_fragment("EC1"));
        assert!(valid_fragment("EC1Y"));
        assert!(valid_fragment("EC1Y 8"));
        assert!(valid_fragment("EC1Y 8P"));
        assert!(valid_fragment("EC1Y 8PQ"));
    }

    #[test]
    fn test_valid_fragment_rejections() {
        assert!(!valid_fragment("Q1"));
        assert!(!valid_fragment("EC1Y 8PQX"));
        assert!(!valid_fragment("ECAB"));
        assert!(!valid_fragment("1EC"));
        assert!(!valid_fragment(""));
        // District endings apply to the partial form too.
        assert!(!valid_fragment("E1Z"));
        assert!(valid_fragment("E1W"));
        // Unit exclusions apply to an in-progress unit.
        assert!(!valid_fragment("EC1Y 8O"));
    }
}
