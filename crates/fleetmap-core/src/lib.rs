//! Core types and definitions for the fleetmap campus viewer.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geographic and roster types, map configuration, scene snapshot views,
//! and deployment constants. It has no dependency on any rendering backend.

pub mod config;
pub mod constants;
pub mod state;
pub mod types;

pub use config::{ConfigError, MapConfig, ReferenceFrame};
pub use state::SceneSnapshot;
pub use types::{GeoBounds, GeoCoord, Robot};
