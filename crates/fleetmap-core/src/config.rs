//! Map configuration: reference frame, base layer, overlay and marker styling.
//!
//! Every section falls back to the campus defaults, so a config file only
//! needs to name the values that differ.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::types::{GeoBounds, GeoCoord};

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for `MapConfig`
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} = {value} - {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// Pixel frame of the floor-plan image and where it sits on the globe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceFrame {
    /// Image width in pixels.
    pub image_width: u32,
    /// Image height in pixels.
    pub image_height: u32,
    /// Geographic coordinate of the image center.
    pub anchor: GeoCoord,
    /// Degrees per pixel, shared by both axes.
    pub scale: f64,
}

impl Default for ReferenceFrame {
    fn default() -> Self {
        Self {
            image_width: DEFAULT_IMAGE_WIDTH,
            image_height: DEFAULT_IMAGE_HEIGHT,
            anchor: GeoCoord::new(DEFAULT_ANCHOR_LAT, DEFAULT_ANCHOR_LNG),
            scale: DEFAULT_SCALE,
        }
    }
}

impl ReferenceFrame {
    /// Whether a local pixel position lies on the image (edges included).
    pub fn contains_local(&self, x: f64, y: f64) -> bool {
        (0.0..=self.image_width as f64).contains(&x) && (0.0..=self.image_height as f64).contains(&y)
    }
}

/// Initial map viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapView {
    /// Map center. `None` centers on the frame anchor.
    pub center: Option<GeoCoord>,
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: None,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Base raster tile layer, handed to the map library untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileLayerConfig {
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
}

impl Default for TileLayerConfig {
    fn default() -> Self {
        Self {
            url_template: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            max_zoom: OSM_MAX_ZOOM,
        }
    }
}

/// Floor-plan image overlay, handed to the map library untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageOverlayConfig {
    pub image_url: String,
    pub bounds: GeoBounds,
    pub opacity: f64,
}

impl Default for ImageOverlayConfig {
    fn default() -> Self {
        let (sw_lat, sw_lng) = DEFAULT_OVERLAY_SOUTH_WEST;
        let (ne_lat, ne_lng) = DEFAULT_OVERLAY_NORTH_EAST;
        Self {
            image_url: DEFAULT_OVERLAY_URL.to_string(),
            bounds: GeoBounds::new(GeoCoord::new(sw_lat, sw_lng), GeoCoord::new(ne_lat, ne_lng)),
            opacity: DEFAULT_OVERLAY_OPACITY,
        }
    }
}

/// Appearance of the per-robot marker and radius indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    pub icon_url: String,
    /// Leaflet `iconSize`, square.
    pub icon_size: u32,
    /// Box the rotated image is drawn in.
    pub icon_box_px: u32,
    pub radius_m: f64,
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            icon_url: DEFAULT_ROBOT_ICON_URL.to_string(),
            icon_size: ICON_SIZE_PX,
            icon_box_px: ICON_BOX_PX,
            radius_m: RADIUS_INDICATOR_M,
            color: RADIUS_INDICATOR_COLOR.to_string(),
            fill_color: RADIUS_INDICATOR_COLOR.to_string(),
            fill_opacity: RADIUS_INDICATOR_FILL_OPACITY,
        }
    }
}

/// Complete configuration for one map deployment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub frame: ReferenceFrame,
    pub view: MapView,
    pub base_layer: TileLayerConfig,
    pub overlay: ImageOverlayConfig,
    pub marker: MarkerStyle,
}

impl MapConfig {
    /// Load and validate a JSON config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), "loaded map config");
        Ok(config)
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: MapConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Initial map center: the configured one, or the frame anchor.
    pub fn center(&self) -> GeoCoord {
        self.view.center.unwrap_or(self.frame.anchor)
    }

    /// Check every value the transform and the renderer rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let frame = &self.frame;
        if !(frame.scale.is_finite() && frame.scale > 0.0) {
            return Err(invalid("frame.scale", frame.scale, "must be finite and positive"));
        }
        if frame.image_width == 0 {
            return Err(invalid("frame.image_width", frame.image_width, "must be non-zero"));
        }
        if frame.image_height == 0 {
            return Err(invalid("frame.image_height", frame.image_height, "must be non-zero"));
        }
        check_coord("frame.anchor", &frame.anchor)?;
        if let Some(center) = &self.view.center {
            check_coord("view.center", center)?;
        }
        if self.view.zoom > MAX_ZOOM {
            return Err(invalid(
                "view.zoom",
                self.view.zoom,
                format!("must be at most {MAX_ZOOM}"),
            ));
        }
        if self.base_layer.url_template.trim().is_empty() {
            return Err(invalid("base_layer.url_template", "\"\"", "must not be empty"));
        }
        check_coord("overlay.bounds.south_west", &self.overlay.bounds.south_west)?;
        check_coord("overlay.bounds.north_east", &self.overlay.bounds.north_east)?;
        check_corners("overlay.bounds", &self.overlay.bounds)?;
        check_unit("overlay.opacity", self.overlay.opacity)?;
        if !(self.marker.radius_m.is_finite() && self.marker.radius_m > 0.0) {
            return Err(invalid("marker.radius_m", self.marker.radius_m, "must be finite and positive"));
        }
        check_unit("marker.fill_opacity", self.marker.fill_opacity)?;
        Ok(())
    }
}

fn invalid(field: &'static str, value: impl ToString, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn check_coord(field: &'static str, coord: &GeoCoord) -> Result<(), ConfigError> {
    if !coord.is_finite() {
        return Err(invalid(field, format!("{coord:?}"), "must be finite"));
    }
    if !(-90.0..=90.0).contains(&coord.lat) {
        return Err(invalid(field, coord.lat, "latitude must be within [-90, 90]"));
    }
    if !(-180.0..=180.0).contains(&coord.lng) {
        return Err(invalid(field, coord.lng, "longitude must be within [-180, 180]"));
    }
    Ok(())
}

/// South-west must lie strictly south and west of north-east.
fn check_corners(field: &'static str, bounds: &GeoBounds) -> Result<(), ConfigError> {
    let (sw, ne) = (bounds.south_west, bounds.north_east);
    if sw.lat >= ne.lat || sw.lng >= ne.lng {
        return Err(invalid(
            field,
            format!("{:?}", bounds.to_leaflet()),
            "south_west must be south-west of north_east",
        ));
    }
    Ok(())
}

fn check_unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(invalid(field, value, "must be within [0, 1]"));
    }
    Ok(())
}
