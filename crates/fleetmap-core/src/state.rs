//! Scene snapshot: everything the map adapter needs to draw one frame.

use serde::{Deserialize, Serialize};

use crate::config::{ImageOverlayConfig, TileLayerConfig};
use crate::types::GeoCoord;

/// Complete renderable scene, produced once per composition pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub center: GeoCoord,
    pub zoom: u8,
    pub base_layer: TileLayerConfig,
    pub overlay: ImageOverlayConfig,
    /// One bundle per robot, in roster order.
    pub robots: Vec<RobotAnnotation>,
}

/// Marker plus radius indicator for a single robot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotAnnotation {
    pub id: String,
    pub marker: MarkerView,
    pub radius: CircleView,
}

/// Icon marker placed at the robot's geographic position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerView {
    pub position: GeoCoord,
    pub icon: IconView,
    pub popup: PopupView,
}

/// Heading-rotated icon. The page adapter turns it into a Leaflet `DivIcon`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconView {
    pub image_url: String,
    /// Square box the rotated image is drawn in, pixels.
    pub box_px: u32,
    /// `[width, height]` in pixels.
    pub icon_size: [u32; 2],
    /// Clockwise rotation in `[0, 360)` degrees.
    pub rotation_deg: f64,
}

/// Popup text, one entry per line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopupView {
    pub lines: Vec<String>,
}

/// Fixed-radius circle centred on the robot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleView {
    pub center: GeoCoord,
    /// Radius in meters.
    pub radius_m: f64,
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
}
