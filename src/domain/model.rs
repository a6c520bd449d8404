use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// The four structural parts of a UK postcode, outermost first.
///
/// Derived from a single normalized input string. For well-formed codes the
/// parts form a strict prefix chain (no unit without sector, and so on), but
/// decomposition is deliberately permissive: a readable trailing segment is
/// kept even when the leading segment is malformed, and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragments {
    pub area: Option<String>,
    pub district: Option<String>,
    pub sector: Option<String>,
    pub unit: Option<String>,
}

/// A postcode value: the verbatim input plus lazily derived structure.
///
/// Fragments and the canonical rendering are computed at most once, on first
/// access, and never change afterwards. Safe to share across threads.
#[derive(Debug, Clone)]
pub struct Postcode {
    raw: String,
    special_cases: Option<Vec<String>>,
    pub(crate) fragments: OnceLock<Fragments>,
    pub(crate) canonical: OnceLock<String>,
}

impl Postcode {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            raw: code.into(),
            special_cases: None,
            fragments: OnceLock::new(),
            canonical: OnceLock::new(),
        }
    }

    /// Replaces the default special-case list ("G1R 0AA") for this value.
    pub fn with_special_cases(code: impl Into<String>, special_cases: Vec<String>) -> Self {
        Self {
            raw: code.into(),
            special_cases: Some(special_cases),
            fragments: OnceLock::new(),
            canonical: OnceLock::new(),
        }
    }

    /// The input string exactly as supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub(crate) fn special_case_override(&self) -> Option<&[String]> {
        self.special_cases.as_deref()
    }
}

/// A planar national-grid position, in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub easting: f64,
    pub northing: f64,
}

impl Coordinates {
    pub fn new(easting: f64, northing: f64) -> Self {
        Self { easting, northing }
    }
}

/// One lookup-table row: a coordinate pair plus whatever extra string columns
/// the table carries (ward, town, and so on).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub coordinates: Coordinates,
    pub fields: HashMap<String, String>,
}

impl LocationRecord {
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            fields: HashMap::new(),
        }
    }
}
