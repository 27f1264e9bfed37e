//! Floor-plan projection: converts between image pixels and lat/lng.
//!
//! The image is pinned to the globe by its center (the anchor) and a single
//! degrees-per-pixel scale shared by both axes. Longitude degrees are not
//! corrected for latitude.

use glam::DVec2;

use fleetmap_core::config::ReferenceFrame;
use fleetmap_core::types::{GeoBounds, GeoCoord};

/// Affine projection from the image pixel frame to geographic coordinates.
///
/// Local frame: origin at the image top-left, x right, y down, pixels.
/// Any real input is accepted; positions off the image extrapolate linearly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelProjection {
    anchor: GeoCoord,
    /// Image size in pixels.
    size: DVec2,
    /// Half the image size; the pixel position of the anchor.
    half_extent: DVec2,
    /// Degrees per pixel.
    scale: f64,
}

impl PixelProjection {
    pub fn new(frame: &ReferenceFrame) -> Self {
        let size = DVec2::new(frame.image_width as f64, frame.image_height as f64);
        Self {
            anchor: frame.anchor,
            size,
            half_extent: size / 2.0,
            scale: frame.scale,
        }
    }

    /// Convert a local pixel position to lat/lng.
    pub fn to_geo(&self, x: f64, y: f64) -> GeoCoord {
        self.project(DVec2::new(x, y))
    }

    /// Convert a local pixel position to lat/lng.
    ///
    /// With `imageY = h - y` and the corner at `(anchor.lat + h/2·s, anchor.lng - w/2·s)`,
    /// `lat = corner.lat - imageY·s` reduces to `anchor.lat + (y - h/2)·s`, and
    /// `lng = corner.lng + x·s` to `anchor.lng + (x - w/2)·s`. Evaluating the
    /// reduced form keeps the image center exactly on the anchor.
    pub fn project(&self, local: DVec2) -> GeoCoord {
        let offset = (local - self.half_extent) * self.scale;
        GeoCoord::new(self.anchor.lat + offset.y, self.anchor.lng + offset.x)
    }

    /// Inverse of [`Self::project`]: lat/lng back to a local pixel position.
    pub fn to_local(&self, geo: &GeoCoord) -> DVec2 {
        let offset = DVec2::new(geo.lng - self.anchor.lng, geo.lat - self.anchor.lat);
        offset / self.scale + self.half_extent
    }

    /// Geographic box covered by the full image frame.
    pub fn frame_bounds(&self) -> GeoBounds {
        let a = self.project(DVec2::ZERO);
        let b = self.project(self.size);
        GeoBounds::new(
            GeoCoord::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            GeoCoord::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        )
    }

    /// Anchor coordinate (image center).
    pub fn anchor(&self) -> GeoCoord {
        self.anchor
    }
}

/// One-shot conversion of a local pixel position for `frame`.
pub fn local_to_geo(frame: &ReferenceFrame, x: f64, y: f64) -> GeoCoord {
    PixelProjection::new(frame).to_geo(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campus() -> PixelProjection {
        PixelProjection::new(&ReferenceFrame::default())
    }

    #[test]
    fn test_projection_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PixelProjection>();
    }

    #[test]
    fn test_campus_scenario() {
        let geo = campus().to_geo(406.0, 334.0);
        assert!((geo.lat - 1.2998778).abs() < 1e-12, "lat: {}", geo.lat);
        assert!((geo.lng - 103.780031).abs() < 1e-12, "lng: {}", geo.lng);
    }

    #[test]
    fn test_center_maps_to_anchor_exactly() {
        let proj = campus();
        assert_eq!(proj.to_geo(500.0, 910.0), GeoCoord::new(1.3004538, 103.780125));

        // Odd dimensions put the center on a half pixel.
        let frame = ReferenceFrame {
            image_width: 333,
            image_height: 777,
            anchor: GeoCoord::new(-33.8688, 151.2093),
            scale: 0.0000037,
        };
        let proj = PixelProjection::new(&frame);
        assert_eq!(proj.to_geo(166.5, 388.5), frame.anchor);
    }

    #[test]
    fn test_deterministic() {
        let proj = campus();
        for (x, y) in [(406.0, 334.0), (1101.0, 613.0), (-5.25, 4000.125)] {
            let a = proj.to_geo(x, y);
            let b = proj.to_geo(x, y);
            assert_eq!(a.lat.to_bits(), b.lat.to_bits());
            assert_eq!(a.lng.to_bits(), b.lng.to_bits());
        }
        assert_eq!(
            local_to_geo(&ReferenceFrame::default(), 922.0, 946.0),
            proj.to_geo(922.0, 946.0)
        );
    }

    #[test]
    fn test_affine_per_axis() {
        let proj = campus();
        let delta = 37.0;

        let step_x = |x: f64| {
            let a = proj.to_geo(x, 120.0);
            let b = proj.to_geo(x + delta, 120.0);
            (b.lat - a.lat, b.lng - a.lng)
        };
        let (dlat0, dlng0) = step_x(0.0);
        for x in [-300.0, 250.0, 999.0, 2500.0] {
            let (dlat, dlng) = step_x(x);
            assert!(dlat.abs() < 1e-12, "x step moved latitude");
            assert!((dlng - dlng0).abs() < 1e-12, "x step not constant at {x}");
        }
        assert!(dlat0.abs() < 1e-12);
        assert!((dlng0 - delta * 0.000001).abs() < 1e-12);

        let step_y = |y: f64| {
            let a = proj.to_geo(80.0, y);
            let b = proj.to_geo(80.0, y + delta);
            (b.lat - a.lat, b.lng - a.lng)
        };
        let (dlat0, _) = step_y(0.0);
        for y in [-100.0, 910.0, 1820.0, 5000.0] {
            let (dlat, dlng) = step_y(y);
            assert!(dlng.abs() < 1e-12, "y step moved longitude");
            assert!((dlat - dlat0).abs() < 1e-12, "y step not constant at {y}");
        }
    }

    /// Latitude is strictly monotonic in y; the top image row lands south.
    #[test]
    fn test_latitude_monotonic_in_y() {
        let proj = campus();
        let top = proj.to_geo(250.0, 0.0);
        let bottom = proj.to_geo(250.0, 1820.0);
        assert!(top.lat < bottom.lat);
        assert!((bottom.lat - top.lat - 1820.0 * 0.000001).abs() < 1e-12);
        assert_eq!(top.lng, bottom.lng);
    }

    #[test]
    fn test_extrapolates_outside_frame() {
        let proj = campus();
        let geo = proj.to_geo(1101.0, 613.0);
        assert!(!proj.frame_bounds().contains(&geo));
        assert!((geo.lng - (103.780125 + 601.0 * 0.000001)).abs() < 1e-12);
    }

    #[test]
    fn test_to_local_inverts_project() {
        let proj = campus();
        for (x, y) in [(406.0, 334.0), (863.0, 324.0), (-12.5, 2000.0)] {
            let local = proj.to_local(&proj.to_geo(x, y));
            assert!((local.x - x).abs() < 1e-6, "x: {} vs {x}", local.x);
            assert!((local.y - y).abs() < 1e-6, "y: {} vs {y}", local.y);
        }
        assert_eq!(proj.to_local(&proj.anchor()), DVec2::new(500.0, 910.0));
    }

    #[test]
    fn test_frame_bounds() {
        let bounds = campus().frame_bounds();
        assert!((bounds.south_west.lat - (1.3004538 - 0.00091)).abs() < 1e-12);
        assert!((bounds.north_east.lat - (1.3004538 + 0.00091)).abs() < 1e-12);
        assert!((bounds.south_west.lng - 103.779625).abs() < 1e-12);
        assert!((bounds.north_east.lng - 103.780625).abs() < 1e-12);
        let center = bounds.center();
        assert!((center.lat - 1.3004538).abs() < 1e-12);
        assert!((center.lng - 103.780125).abs() < 1e-12);
    }
}
