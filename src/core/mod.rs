pub mod decompose;
pub mod format;
pub mod geo;
pub mod locate;
pub mod validate;

pub use crate::domain::model::{Coordinates, Fragments, LocationRecord, Postcode};
pub use crate::domain::ports::LocationProvider;
pub use crate::utils::error::Result;
