//! Registry of ARPANSA monitoring sites.

use serde::Serialize;

use crate::error::UvError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

const fn at(latitude: f64, longitude: f64) -> Coordinates {
    Coordinates { latitude, longitude }
}

/// Supported sites, keyed by lowercase name. Order is the order reported
/// back to users when a lookup fails.
pub const CITIES: &[(&str, Coordinates)] = &[
    // ACT
    ("canberra", at(-35.31, 149.2)),
    // NSW
    ("newcastle", at(-32.9, 151.72)),
    ("sydney", at(-34.04, 151.1)),
    // NT
    ("alice springs", at(-23.8, 133.89)),
    ("darwin", at(-12.43, 130.89)),
    // QLD
    ("brisbane", at(-27.45, 153.03)),
    ("emerald", at(-23.5251, 148.161346)),
    ("gold coast", at(-28.0, 153.37)),
    ("townsville", at(-19.33, 146.76)),
    // SA
    ("adelaide", at(-34.95, 138.52)),
    // TAS
    ("kingston", at(-42.99, 147.29)),
    // VIC
    ("melbourne", at(-37.73, 145.1)),
    // WA
    ("perth", at(-31.93, 115.98)),
    // Antarctica
    ("casey", at(-66.28, 110.53)),
    ("davis", at(-68.58, 77.97)),
    ("macquarie island", at(-54.5, 158.94)),
    ("mawson", at(-67.6, 62.87)),
];

/// Names of all supported sites in registry order.
pub fn names() -> impl Iterator<Item = &'static str> {
    CITIES.iter().map(|(name, _)| *name)
}

/// Look up a site by name, ignoring case and surrounding whitespace.
pub fn resolve_coordinates(location: &str) -> Result<Coordinates, UvError> {
    let city = location.trim().to_lowercase();

    CITIES
        .iter()
        .find(|(name, _)| *name == city)
        .map(|(_, coords)| *coords)
        .ok_or_else(|| UvError::UnsupportedCity {
            input: location.to_string(),
            available: names().collect::<Vec<_>>().join(", "),
        })
}
