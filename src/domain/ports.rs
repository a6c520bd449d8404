use crate::domain::model::Coordinates;

/// Point lookup from a postcode-derived key to a coordinate pair.
///
/// Implementations are loaded once and read-only thereafter; `None` means the
/// key is unmapped, not that the backing data is unavailable. Unavailable data
/// is a construction-time failure of the concrete provider.
pub trait LocationProvider: Send + Sync {
    fn coordinates(&self, key: &str) -> Option<Coordinates>;
}
