use std::fmt;

use crate::domain::model::{Fragments, Postcode};

fn render(fragments: &Fragments) -> String {
    let mut out = String::new();
    if let Some(area) = &fragments.area {
        out.push_str(area);
    }
    if let Some(district) = &fragments.district {
        out.push_str(district);
    }
    if let Some(sector) = &fragments.sector {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(sector);
        if let Some(unit) = &fragments.unit {
            out.push_str(unit);
        }
    }
    out
}

impl Postcode {
    /// The area alone, e.g. `"EC"`.
    pub fn area(&self) -> Option<String> {
        self.fragments().area.clone()
    }

    /// Area + district, e.g. `"EC1Y"`.
    pub fn district(&self) -> Option<String> {
        let f = self.fragments();
        match (&f.area, &f.district) {
            (Some(area), Some(district)) => Some(format!("{area}{district}")),
            _ => None,
        }
    }

    /// Area + district + sector, e.g. `"EC1Y 8"`.
    pub fn sector(&self) -> Option<String> {
        let f = self.fragments();
        match (&f.area, &f.district, &f.sector) {
            (Some(area), Some(district), Some(sector)) => {
                Some(format!("{area}{district} {sector}"))
            }
            _ => None,
        }
    }

    /// The full canonical form, e.g. `"EC1Y 8PQ"`. Requires all four parts.
    pub fn unit(&self) -> Option<String> {
        let f = self.fragments();
        match (&f.area, &f.district, &f.sector, &f.unit) {
            (Some(area), Some(district), Some(sector), Some(unit)) => {
                Some(format!("{area}{district} {sector}{unit}"))
            }
            _ => None,
        }
    }

    /// Every resolution of the postcode, most specific first.
    pub fn analyse(&self) -> [Option<String>; 4] {
        [self.unit(), self.sector(), self.district(), self.area()]
    }

    /// Renders whatever fragments are present, valid or not, omitting absent
    /// trailing parts. Unlike [`Postcode::unit`] this never requires
    /// well-formedness. Cached on first use.
    pub fn to_canonical_string(&self) -> &str {
        self.canonical.get_or_init(|| render(self.fragments()))
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_canonical_string())
    }
}

/// Postcodes compare by canonical form, so case and spacing differences in
/// the raw input do not matter.
impl PartialEq for Postcode {
    fn eq(&self, other: &Self) -> bool {
        self.to_canonical_string() == other.to_canonical_string()
    }
}

impl Eq for Postcode {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyse_orders_most_to_least_specific() {
        let postcode = Postcode::new("EC1Y8PQ");
        assert_eq!(
            postcode.analyse(),
            [
                Some("EC1Y 8PQ".to_string()),
                Some("EC1Y 8".to_string()),
                Some("EC1Y".to_string()),
                Some("EC".to_string()),
            ]
        );
    }

    #[test]
    fn test_resolutions_require_their_prefixes() {
        let postcode = Postcode::new("EC1Y 8");
        assert_eq!(postcode.unit(), None);
        assert_eq!(postcode.sector().as_deref(), Some("EC1Y 8"));
        assert_eq!(postcode.district().as_deref(), Some("EC1Y"));
        assert_eq!(postcode.area().as_deref(), Some("EC"));

        let postcode = Postcode::new("EC");
        assert_eq!(postcode.analyse(), [None, None, None, Some("EC".to_string())]);
    }

    #[test]
    fn test_display_renders_present_fragments() {
        assert_eq!(Postcode::new("ec1y8pq").to_string(), "EC1Y 8PQ");
        assert_eq!(Postcode::new("EC1Y 8").to_string(), "EC1Y 8");
        assert_eq!(Postcode::new("EC1Y").to_string(), "EC1Y");
        assert_eq!(Postcode::new("EC").to_string(), "EC");
        assert_eq!(Postcode::new("not a postcode").to_string(), "");
    }

    #[test]
    fn test_display_survives_a_malformed_head() {
        // The tail stays readable even though the head is not.
        assert_eq!(Postcode::new("B0GUS1 8PQ").to_string(), "8PQ");
    }

    #[test]
    fn test_equality_compares_canonical_forms() {
        assert_eq!(Postcode::new("ec1y 8pq"), Postcode::new("EC1Y8PQ"));
        assert_ne!(Postcode::new("EC1Y 8PQ"), Postcode::new("EC1Y 8PL"));
    }
}
