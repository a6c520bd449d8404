// Adapters layer: concrete location providers and the bulk-import backend.

pub mod csv_table;
pub mod import;
pub mod memory;

pub use csv_table::CsvTable;
pub use memory::MemoryTable;

use crate::core::decompose::normalize;
use crate::domain::model::Postcode;

/// Canonical form of a lookup key, shared by every table backend.
///
/// Decomposable keys go through the postcode renderer so `"ec1y8pq"` and
/// `"EC1Y 8PQ"` address the same row; anything else is kept as an opaque
/// uppercased key.
pub(crate) fn table_key(raw: &str) -> String {
    let postcode = Postcode::new(raw);
    let canonical = postcode.to_canonical_string();
    if canonical.is_empty() {
        normalize(raw)
    } else {
        canonical.to_string()
    }
}
