//! Fundamental geographic and roster types.

use serde::{Deserialize, Serialize};

use crate::constants::FULL_TURN_DEG;

/// Geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoCoord {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lng: f64,
}

impl GeoCoord {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `[lat, lng]` pair, the order Leaflet expects.
    pub fn to_lat_lng(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }

    /// `[lng, lat]` position, the order GeoJSON expects.
    pub fn to_lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Axis-aligned geographic box given by its south-west and north-east corners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub south_west: GeoCoord,
    pub north_east: GeoCoord,
}

impl GeoBounds {
    pub fn new(south_west: GeoCoord, north_east: GeoCoord) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Whether `coord` lies inside the box (edges included).
    pub fn contains(&self, coord: &GeoCoord) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&coord.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&coord.lng)
    }

    /// Midpoint of the box.
    pub fn center(&self) -> GeoCoord {
        GeoCoord::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// `[[south, west], [north, east]]`, the shape of a Leaflet `LatLngBounds`.
    pub fn to_leaflet(&self) -> [[f64; 2]; 2] {
        [self.south_west.to_lat_lng(), self.north_east.to_lat_lng()]
    }
}

/// A robot placed on the reference floor plan.
///
/// Position is in image pixels (origin top-left, y down); heading is in
/// degrees clockwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Robot {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

impl Robot {
    pub fn new(id: impl Into<String>, x: f64, y: f64, heading: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            heading,
        }
    }
}

/// Fold an angle in degrees into `[0, 360)`. 360 and 0 both map to 0.
pub fn normalize_heading(degrees: f64) -> f64 {
    // Tiny negative inputs round up to a full turn.
    let folded = degrees.rem_euclid(FULL_TURN_DEG);
    if folded >= FULL_TURN_DEG {
        return 0.0;
    }
    // `+ 0.0` turns a -0.0 remainder into 0.0.
    folded + 0.0
}
