use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::model::{Fragments, Postcode};

lazy_static! {
    // Trailing "<digit><two letters>" is the sector + unit pair; a lone
    // " <digit>" is a sector-only tail. Whatever remains is matched
    // independently for area + district.
    static ref TRAILING_UNIT: Regex = Regex::new(r"\s*(\d)([A-Z]{2})$").unwrap();
    static ref TRAILING_SECTOR: Regex = Regex::new(r"\s+(\d)$").unwrap();
    static ref LEADING: Regex = Regex::new(r"^([A-Z]{1,2})(\d[A-Z\d]?)?$").unwrap();
}

/// Uppercases and collapses all whitespace runs to a single space.
pub(crate) fn normalize(raw: &str) -> String {
    raw.to_uppercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

// The tail is consumed before the head on purpose: a malformed leading
// segment can still yield a readable sector/unit, and vice versa. Downstream
// validation rejects the combinations that matter.
fn decompose(code: &str) -> Fragments {
    let mut rest = code.to_string();
    let mut sector = None;
    let mut unit = None;

    if let Some(caps) = TRAILING_UNIT.captures(&rest) {
        sector = Some(caps[1].to_string());
        unit = Some(caps[2].to_string());
        let matched_from = caps.get(0).unwrap().start();
        rest.truncate(matched_from);
    } else if let Some(caps) = TRAILING_SECTOR.captures(&rest) {
        sector = Some(caps[1].to_string());
        let matched_from = caps.get(0).unwrap().start();
        rest.truncate(matched_from);
    }

    let head = rest.trim_end();
    let (area, district) = match LEADING.captures(head) {
        Some(caps) => (
            Some(caps[1].to_string()),
            caps.get(2).map(|m| m.as_str().to_string()),
        ),
        None => (None, None),
    };

    Fragments {
        area,
        district,
        sector,
        unit,
    }
}

impl Postcode {
    pub(crate) fn normalized(&self) -> String {
        normalize(self.raw())
    }

    /// Splits the postcode into (area, district, sector, unit).
    ///
    /// Computed once per value; repeated calls return the cached tuple.
    pub fn fragments(&self) -> &Fragments {
        self.fragments.get_or_init(|| decompose(&self.normalized()))
    }
}
