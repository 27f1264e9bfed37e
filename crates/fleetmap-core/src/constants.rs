//! Deployment constants for the campus map.
//!
//! These are the defaults behind [`crate::config::MapConfig`]; nothing reads
//! them directly except the config defaults and tests.

// --- Reference frame ---

/// Anchor latitude: the map's visual center (SIT@Dover Academic Plaza).
pub const DEFAULT_ANCHOR_LAT: f64 = 1.3004538;

/// Anchor longitude.
pub const DEFAULT_ANCHOR_LNG: f64 = 103.780125;

/// Floor-plan image width in pixels.
pub const DEFAULT_IMAGE_WIDTH: u32 = 1000;

/// Floor-plan image height in pixels.
pub const DEFAULT_IMAGE_HEIGHT: u32 = 1820;

/// Geographic degrees per image pixel, applied to both axes.
pub const DEFAULT_SCALE: f64 = 0.000001;

// --- Map view ---

/// Initial zoom level.
pub const DEFAULT_ZOOM: u8 = 18;

/// Highest zoom level accepted in configuration.
pub const MAX_ZOOM: u8 = 22;

// --- Base layer ---

/// OpenStreetMap tile URL template.
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// OpenStreetMap attribution (HTML).
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Deepest zoom served by the OSM tile servers.
pub const OSM_MAX_ZOOM: u8 = 19;

// --- Image overlay ---

/// Floor-plan image reference.
pub const DEFAULT_OVERLAY_URL: &str = "assets/images/campus_sim.png";

/// Overlay south-west corner (lat, lng).
pub const DEFAULT_OVERLAY_SOUTH_WEST: (f64, f64) = (1.299, 103.778);

/// Overlay north-east corner (lat, lng).
pub const DEFAULT_OVERLAY_NORTH_EAST: (f64, f64) = (1.302, 103.782);

/// Overlay opacity.
pub const DEFAULT_OVERLAY_OPACITY: f64 = 0.9;

// --- Robot markers ---

/// Robot icon image reference.
pub const DEFAULT_ROBOT_ICON_URL: &str = "assets/images/robot.png";

/// Leaflet `iconSize` (square, pixels).
pub const ICON_SIZE_PX: u32 = 25;

/// Side of the square box the rotated image is drawn in (pixels).
pub const ICON_BOX_PX: u32 = 30;

/// Radius of the indicator circle around each robot (meters).
pub const RADIUS_INDICATOR_M: f64 = 25.0;

/// Stroke and fill color of the indicator circle.
pub const RADIUS_INDICATOR_COLOR: &str = "red";

/// Fill opacity of the indicator circle.
pub const RADIUS_INDICATOR_FILL_OPACITY: f64 = 0.2;

// --- Angles ---

/// Degrees in a full turn.
pub const FULL_TURN_DEG: f64 = 360.0;
