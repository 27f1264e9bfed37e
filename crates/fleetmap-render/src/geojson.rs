//! GeoJSON export of robot annotations.

use serde_json::{json, Value};

use fleetmap_core::state::{RobotAnnotation, SceneSnapshot};

/// One `Point` feature per robot, in roster order.
///
/// Coordinates use GeoJSON's `[lng, lat]` order. Heading and indicator
/// styling travel as properties.
pub fn to_geojson(scene: &SceneSnapshot) -> Value {
    let features: Vec<Value> = scene.robots.iter().map(robot_feature).collect();
    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

fn robot_feature(robot: &RobotAnnotation) -> Value {
    json!({
        "type": "Feature",
        "id": robot.id,
        "geometry": {
            "type": "Point",
            "coordinates": robot.marker.position.to_lng_lat(),
        },
        "properties": {
            "id": robot.id,
            "heading": robot.marker.icon.rotation_deg,
            "radius_m": robot.radius.radius_m,
            "color": robot.radius.color,
            "fill_color": robot.radius.fill_color,
            "fill_opacity": robot.radius.fill_opacity,
        },
    })
}
