//! Singapore locations for realistic test fixtures.
//!
//! Jobsite coordinates are spread across the north-east and east of the
//! island; the depot sits in the west.

use fleet_router::GeoPoint;
use fleet_router::network::RoadNetwork;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon).expect("fixture coordinates are valid")
    }

    pub fn label(&self) -> String {
        self.point().key().to_string()
    }
}

// ============================================================================
// Jobsites
// ============================================================================

pub const JOBSITES: &[Location] = &[
    Location::new("Seletar", 1.417542, 103.87702),
    Location::new("Hougang", 1.354711, 103.891611),
    Location::new("Upper Serangoon", 1.347418, 103.898563),
    Location::new("Punggol Road", 1.366595, 103.909464),
    Location::new("Pasir Ris West", 1.381268, 103.93237),
    Location::new("Simei", 1.338043, 103.964117),
    Location::new("Bedok North", 1.331125, 103.953216),
    Location::new("Bedok", 1.316436, 103.933218),
    Location::new("Paya Lebar", 1.337507, 103.885152),
    Location::new("Jurong West", 1.347525, 103.637354),
];

/// Certificate required at each entry of [`JOBSITES`]; blank means none.
pub const JOBSITE_CERTIFICATES: &[&str] = &["A", "F", "B", "", "C", "", "D", "", "E", ""];

/// Driver certificate rows as `(driver, certificate)`.
pub const DRIVER_CERTIFICATES: &[(&str, &str)] = &[
    ("D1", "A"),
    ("D1", "D"),
    ("D2", "B"),
    ("D2", "E"),
    ("D3", "C"),
    ("D3", "F"),
];

pub const PAYA_LEBAR: Location = Location::new("Paya Lebar", 1.337507, 103.885152);
pub const UPPER_SERANGOON: Location = Location::new("Upper Serangoon", 1.347418, 103.898563);
pub const HOUGANG: Location = Location::new("Hougang", 1.354711, 103.891611);
pub const PUNGGOL_ROAD: Location = Location::new("Punggol Road", 1.366595, 103.909464);
pub const PASIR_RIS_WEST: Location = Location::new("Pasir Ris West", 1.381268, 103.93237);
pub const JURONG_WEST: Location = Location::new("Jurong West", 1.347525, 103.637354);
pub const BOON_LAY: Location = Location::new("Boon Lay", 1.340781, 103.689575);

// ============================================================================
// Road network
// ============================================================================

/// East corridor (Paya Lebar → Pasir Ris West, with a Hougang spur) plus a
/// western stub that shares no point with it.
pub const EAST_NETWORK_JSON: &str = r#"{
    "points": [
        {
            "1.337507, 103.885152": 0,
            "1.347418, 103.898563": 1,
            "1.354711, 103.891611": 2
        },
        {
            "1.347418, 103.898563": 0,
            "1.366595, 103.909464": 1,
            "1.381268, 103.93237": 2
        },
        {
            "1.347525, 103.637354": 0,
            "1.340781, 103.689575": 1
        }
    ]
}"#;

pub fn east_network() -> RoadNetwork {
    RoadNetwork::from_json_str(EAST_NETWORK_JSON).expect("fixture network parses")
}
