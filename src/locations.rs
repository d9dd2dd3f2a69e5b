//! Fixed registry of supported cities.
//!
//! Coordinates point at the city's main airport weather station, which
//! is where the most complete daily series tend to be measured.

/// Supported city names with their (latitude, longitude).
pub static CITIES: &[(&str, f64, f64)] = &[
    ("London (Heathrow)", 51.4700, -0.4543),
    ("Paris (CDG)", 49.0097, 2.5479),
    ("New York (JFK)", 40.6413, -73.7781),
    ("Sydney (Kingsford Smith)", -33.9399, 151.1753),
    ("Lagos (Murtala Muhammed)", 6.5770, 3.3212),
    ("Tokyo (Haneda)", 35.5494, 139.7798),
    ("São Paulo (GRU)", -23.4356, -46.4731),
    ("Cape Town (CPT)", -33.9696, 18.5972),
    ("Toronto (YYZ)", 43.6777, -79.6248),
    ("Dubai (DXB)", 25.2532, 55.3657),
];

/// Resolves a registered city name to its coordinates.
pub fn coords_for(city: &str) -> Option<(f64, f64)> {
    CITIES
        .iter()
        .find(|(name, _, _)| *name == city)
        .map(|&(_, lat, lon)| (lat, lon))
}

/// All registered city names, in registry order.
pub fn city_names() -> impl Iterator<Item = &'static str> {
    CITIES.iter().map(|(name, _, _)| *name)
}
