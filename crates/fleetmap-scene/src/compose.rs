//! Scene composition: turns a roster into map annotations.
//!
//! Read-only over its inputs. Every call recomputes positions from the
//! roster, so the output depends only on the arguments.

use fleetmap_core::config::{MapConfig, MarkerStyle};
use fleetmap_core::state::{CircleView, MarkerView, PopupView, RobotAnnotation, SceneSnapshot};
use fleetmap_core::types::{GeoCoord, Robot};
use fleetmap_geo::PixelProjection;

use crate::icon::rotated_icon;

/// Build a complete SceneSnapshot for `robots` under `config`.
///
/// Annotations come out in roster order. Base layer and overlay settings are
/// copied through unchanged.
pub fn compose_scene(robots: &[Robot], config: &MapConfig) -> SceneSnapshot {
    let projection = PixelProjection::new(&config.frame);

    let robots: Vec<RobotAnnotation> = robots
        .iter()
        .map(|robot| annotate(robot, &projection, &config.marker))
        .collect();
    tracing::debug!(count = robots.len(), "composed scene");

    SceneSnapshot {
        center: config.center(),
        zoom: config.view.zoom,
        base_layer: config.base_layer.clone(),
        overlay: config.overlay.clone(),
        robots,
    }
}

/// Marker and radius indicator for one robot.
pub fn annotate(robot: &Robot, projection: &PixelProjection, style: &MarkerStyle) -> RobotAnnotation {
    let position = projection.to_geo(robot.x, robot.y);
    tracing::debug!(
        id = %robot.id,
        x = robot.x,
        y = robot.y,
        lat = position.lat,
        lng = position.lng,
        "placed robot"
    );

    RobotAnnotation {
        id: robot.id.clone(),
        marker: MarkerView {
            position,
            icon: rotated_icon(robot.heading, style),
            popup: build_popup(robot),
        },
        radius: build_radius(position, style),
    }
}

/// Popup lines: robot id, then heading in degrees as recorded in the roster.
fn build_popup(robot: &Robot) -> PopupView {
    PopupView {
        lines: vec![
            format!("Robot {}", robot.id),
            format!("Heading: {}°", robot.heading),
        ],
    }
}

/// Fixed-radius circle centred on the marker.
fn build_radius(center: GeoCoord, style: &MarkerStyle) -> CircleView {
    CircleView {
        center,
        radius_m: style.radius_m,
        color: style.color.clone(),
        fill_color: style.fill_color.clone(),
        fill_opacity: style.fill_opacity,
    }
}
