use crate::domain::model::{Coordinates, Postcode};
use crate::domain::ports::LocationProvider;
use crate::utils::error::{PostcodeError, Result};

impl Postcode {
    /// Resolves the postcode to a coordinate pair.
    ///
    /// Tries the table keyed by the full unit first, then falls back to the
    /// sector, district and area keys. `None` only when every resolution is
    /// unmapped; never a default coordinate.
    pub fn coordinates<P: LocationProvider>(&self, provider: &P) -> Option<Coordinates> {
        self.analyse()
            .into_iter()
            .flatten()
            .find_map(|key| provider.coordinates(&key))
    }
}

/// Resolves a raw postcode string through a transient value.
///
/// A postcode the table cannot place at any resolution is a hard failure
/// here, unlike [`Postcode::coordinates`]: the caller explicitly asked for a
/// geolocation.
pub fn resolve<P: LocationProvider>(provider: &P, code: &str) -> Result<Coordinates> {
    let postcode = Postcode::new(code);
    postcode
        .coordinates(provider)
        .ok_or_else(|| PostcodeError::LookupError {
            postcode: postcode.to_canonical_string().to_string(),
        })
}
