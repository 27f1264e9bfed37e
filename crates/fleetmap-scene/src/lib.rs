//! Scene composition for fleetmap.
//!
//! Combines a robot roster with the map configuration and produces the
//! `SceneSnapshot` handed to a rendering adapter. Pure and headless,
//! so every output can be checked in tests.

pub mod compose;
pub mod icon;
pub mod roster;

pub use compose::compose_scene;
pub use roster::{campus_roster, RosterError};
