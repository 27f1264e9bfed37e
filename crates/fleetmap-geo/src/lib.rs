//! Geographic placement for fleetmap.
//!
//! Maps floor-plan pixel positions onto latitude/longitude so markers line
//! up with the image overlay on a web map.

pub mod projection;

pub use projection::{local_to_geo, PixelProjection};
