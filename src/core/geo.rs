use std::fmt;

use crate::core::locate::resolve;
use crate::domain::model::Coordinates;
use crate::domain::ports::LocationProvider;
use crate::utils::error::Result;

const METRES_PER_MILE: f64 = 1609.344;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceUnit {
    Metres,
    #[default]
    Kilometres,
    Miles,
}

/// The sixteen compass winds, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassPoint {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

const COMPASS_POINTS: [CompassPoint; 16] = [
    CompassPoint::N,
    CompassPoint::NNE,
    CompassPoint::NE,
    CompassPoint::ENE,
    CompassPoint::E,
    CompassPoint::ESE,
    CompassPoint::SE,
    CompassPoint::SSE,
    CompassPoint::S,
    CompassPoint::SSW,
    CompassPoint::SW,
    CompassPoint::WSW,
    CompassPoint::W,
    CompassPoint::WNW,
    CompassPoint::NW,
    CompassPoint::NNW,
];

impl CompassPoint {
    /// Buckets a bearing into 22.5° sectors centered on each wind, so N
    /// covers [348.75°, 11.25°).
    pub fn from_degrees(degrees: f64) -> Self {
        let sector = (normalize_angle(degrees) + 11.25) / 22.5;
        COMPASS_POINTS[(sector as usize) % 16]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::NNE => "NNE",
            CompassPoint::NE => "NE",
            CompassPoint::ENE => "ENE",
            CompassPoint::E => "E",
            CompassPoint::ESE => "ESE",
            CompassPoint::SE => "SE",
            CompassPoint::SSE => "SSE",
            CompassPoint::S => "S",
            CompassPoint::SSW => "SSW",
            CompassPoint::SW => "SW",
            CompassPoint::WSW => "WSW",
            CompassPoint::W => "W",
            CompassPoint::WNW => "WNW",
            CompassPoint::NW => "NW",
            CompassPoint::NNW => "NNW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wraps an angle into [0, 360).
pub fn normalize_angle(degrees: f64) -> f64 {
    let wrapped = degrees % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Planar distance between two grid positions, in the requested unit.
pub fn distance(from: Coordinates, to: Coordinates, unit: DistanceUnit) -> f64 {
    let de = to.easting - from.easting;
    let dn = to.northing - from.northing;
    let metres = (de * de + dn * dn).sqrt();
    match unit {
        DistanceUnit::Metres => metres,
        DistanceUnit::Kilometres => metres / 1000.0,
        DistanceUnit::Miles => metres / METRES_PER_MILE,
    }
}

/// Clockwise bearing from grid north, in [0, 360).
pub fn bearing(from: Coordinates, to: Coordinates) -> f64 {
    let de = to.easting - from.easting;
    let dn = to.northing - from.northing;
    normalize_angle(de.atan2(dn).to_degrees())
}

pub fn friendly_bearing(from: Coordinates, to: Coordinates) -> CompassPoint {
    CompassPoint::from_degrees(bearing(from, to))
}

/// Distance between two raw postcode strings, resolved through `provider`.
pub fn distance_between<P: LocationProvider>(
    provider: &P,
    from: &str,
    to: &str,
    unit: DistanceUnit,
) -> Result<f64> {
    Ok(distance(resolve(provider, from)?, resolve(provider, to)?, unit))
}

/// Bearing between two raw postcode strings, resolved through `provider`.
pub fn bearing_between<P: LocationProvider>(provider: &P, from: &str, to: &str) -> Result<f64> {
    Ok(bearing(resolve(provider, from)?, resolve(provider, to)?))
}

/// Compass label between two raw postcode strings, resolved through `provider`.
pub fn friendly_bearing_between<P: LocationProvider>(
    provider: &P,
    from: &str,
    to: &str,
) -> Result<CompassPoint> {
    Ok(CompassPoint::from_degrees(bearing_between(
        provider, from, to,
    )?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryTable;

    #[test]
    fn test_distance_units() {
        let origin = Coordinates::new(0.0, 0.0);
        let target = Coordinates::new(3000.0, 4000.0);
        assert_eq!(distance(origin, target, DistanceUnit::Metres), 5000.0);
        assert_eq!(distance(origin, target, DistanceUnit::Kilometres), 5.0);
        let miles = distance(origin, target, DistanceUnit::Miles);
        assert!((miles - 3.106856).abs() < 1e-6);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = Coordinates::new(0.0, 0.0);
        assert_eq!(bearing(origin, Coordinates::new(0.0, 100.0)), 0.0);
        assert!((bearing(origin, Coordinates::new(100.0, 0.0)) - 90.0).abs() < 1e-9);
        assert!((bearing(origin, Coordinates::new(0.0, -100.0)) - 180.0).abs() < 1e-9);
        assert!((bearing(origin, Coordinates::new(-100.0, 0.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_compass_buckets_wrap_at_north() {
        assert_eq!(CompassPoint::from_degrees(358.0), CompassPoint::N);
        assert_eq!(CompassPoint::from_degrees(2.0), CompassPoint::N);
        assert_eq!(CompassPoint::from_degrees(348.75), CompassPoint::N);
        assert_eq!(CompassPoint::from_degrees(11.25), CompassPoint::NNE);
        assert_eq!(CompassPoint::from_degrees(-2.0), CompassPoint::N);
    }

    #[test]
    fn test_compass_bucket_centres() {
        assert_eq!(CompassPoint::from_degrees(45.0), CompassPoint::NE);
        assert_eq!(CompassPoint::from_degrees(90.0), CompassPoint::E);
        assert_eq!(CompassPoint::from_degrees(180.0), CompassPoint::S);
        assert_eq!(CompassPoint::from_degrees(270.0), CompassPoint::W);
        assert_eq!(CompassPoint::from_degrees(292.5), CompassPoint::WNW);
    }

    #[test]
    fn test_string_convenience_functions() {
        let mut table = MemoryTable::new();
        table.insert("AB1", Coordinates::new(0.0, 0.0));
        table.insert("CD1", Coordinates::new(0.0, 10000.0));

        let km = distance_between(&table, "AB1 2CD", "CD1 2AB", DistanceUnit::Kilometres).unwrap();
        assert_eq!(km, 10.0);
        assert_eq!(bearing_between(&table, "AB1 2CD", "CD1 2AB").unwrap(), 0.0);
        assert_eq!(
            friendly_bearing_between(&table, "AB1 2CD", "CD1 2AB").unwrap(),
            CompassPoint::N
        );
        assert!(distance_between(&table, "AB1 2CD", "ZZ9 9ZZ", DistanceUnit::Kilometres).is_err());
    }
}
