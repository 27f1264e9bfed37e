//! Heading-rotated robot icon.

use fleetmap_core::config::MarkerStyle;
use fleetmap_core::state::IconView;
use fleetmap_core::types::normalize_heading;

/// Build the marker icon for a robot facing `heading_deg` (clockwise).
///
/// The rotation only touches the image inside the icon; the marker anchor,
/// and so the geographic position, is unaffected. Headings are taken modulo
/// 360, so 0 and 360 give identical icons.
pub fn rotated_icon(heading_deg: f64, style: &MarkerStyle) -> IconView {
    IconView {
        image_url: style.icon_url.clone(),
        box_px: style.icon_box_px,
        icon_size: [style.icon_size, style.icon_size],
        rotation_deg: normalize_heading(heading_deg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_from_style() {
        let icon = rotated_icon(60.0, &MarkerStyle::default());
        assert_eq!(icon.image_url, "assets/images/robot.png");
        assert_eq!(icon.box_px, 30);
        assert_eq!(icon.icon_size, [25, 25]);
        assert_eq!(icon.rotation_deg, 60.0);
    }

    #[test]
    fn test_full_turn_matches_zero() {
        let style = MarkerStyle::default();
        assert_eq!(rotated_icon(0.0, &style), rotated_icon(360.0, &style));
        assert_eq!(rotated_icon(-90.0, &style), rotated_icon(270.0, &style));
    }

    #[test]
    fn test_fractional_heading() {
        let icon = rotated_icon(372.5, &MarkerStyle::default());
        assert_eq!(icon.rotation_deg, 12.5);
    }
}
