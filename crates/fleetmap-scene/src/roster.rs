//! Robot roster: the built-in campus fleet, JSON loading, and validation.
//!
//! A roster is a plain `Vec<Robot>`. Nothing here mutates robots once they
//! are loaded; validation only reports.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use fleetmap_core::config::ReferenceFrame;
use fleetmap_core::types::Robot;

/// Roster loading and validation errors.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read roster file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse roster: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Robot at index {index} has an empty id")]
    EmptyId { index: usize },

    #[error("Duplicate robot id '{0}'")]
    DuplicateId(String),

    #[error("Robot '{id}' has a non-finite {field}: {value}")]
    NonFinite {
        id: String,
        field: &'static str,
        value: f64,
    },

    #[error("Robot '{id}' at ({x}, {y}) lies outside the {width}x{height} image frame")]
    OutOfFrame {
        id: String,
        x: f64,
        y: f64,
        width: u32,
        height: u32,
    },
}

/// How to treat robots placed outside the image frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FramePolicy {
    /// Report and keep them; the transform extrapolates.
    #[default]
    Warn,
    /// Reject the roster.
    Reject,
}

/// A robot whose local position lies off the floor-plan image.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameWarning {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

/// The four robots deployed on the campus floor plan.
pub fn campus_roster() -> Vec<Robot> {
    vec![
        Robot::new("001", 406.0, 334.0, 0.0),
        Robot::new("002", 1101.0, 613.0, 60.0),
        Robot::new("003", 922.0, 946.0, 240.0),
        Robot::new("004", 863.0, 324.0, 330.0),
    ]
}

/// Parse a roster from a JSON array of `{ "id", "x", "y", "heading" }`.
pub fn parse_roster(json: &str) -> Result<Vec<Robot>, RosterError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a roster file.
pub fn load_roster(path: &Path) -> Result<Vec<Robot>, RosterError> {
    let json = std::fs::read_to_string(path).map_err(|source| RosterError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let robots = parse_roster(&json)?;
    tracing::info!(path = %path.display(), count = robots.len(), "loaded roster");
    Ok(robots)
}

/// Check a roster against the frame it will be drawn on.
///
/// Empty or duplicate ids and non-finite numbers are always errors.
/// Off-frame positions are returned as warnings under [`FramePolicy::Warn`]
/// and fail under [`FramePolicy::Reject`].
pub fn validate_roster(
    robots: &[Robot],
    frame: &ReferenceFrame,
    policy: FramePolicy,
) -> Result<Vec<FrameWarning>, RosterError> {
    let mut seen = HashSet::with_capacity(robots.len());
    let mut warnings = Vec::new();

    for (index, robot) in robots.iter().enumerate() {
        if robot.id.trim().is_empty() {
            return Err(RosterError::EmptyId { index });
        }
        if !seen.insert(robot.id.as_str()) {
            return Err(RosterError::DuplicateId(robot.id.clone()));
        }
        for (field, value) in [("x", robot.x), ("y", robot.y), ("heading", robot.heading)] {
            if !value.is_finite() {
                return Err(RosterError::NonFinite {
                    id: robot.id.clone(),
                    field,
                    value,
                });
            }
        }

        if !frame.contains_local(robot.x, robot.y) {
            match policy {
                FramePolicy::Reject => {
                    return Err(RosterError::OutOfFrame {
                        id: robot.id.clone(),
                        x: robot.x,
                        y: robot.y,
                        width: frame.image_width,
                        height: frame.image_height,
                    });
                }
                FramePolicy::Warn => {
                    tracing::warn!(
                        id = %robot.id,
                        x = robot.x,
                        y = robot.y,
                        "robot lies outside the image frame; placement is extrapolated"
                    );
                    warnings.push(FrameWarning {
                        id: robot.id.clone(),
                        x: robot.x,
                        y: robot.y,
                    });
                }
            }
        }
    }

    Ok(warnings)
}
