//! Self-contained Leaflet page.
//!
//! The scene is embedded as JSON and the page script hands each view to the
//! matching Leaflet primitive: `tileLayer`, `imageOverlay`, `marker` with a
//! `divIcon`, and `circle`. Tile fetching and drawing belong to Leaflet.

use minijinja::{context, Environment};

use fleetmap_core::state::{IconView, SceneSnapshot};

use crate::RenderError;

/// Leaflet release loaded by the page.
pub const LEAFLET_VERSION: &str = "1.9.4";

// `.html` names turn on HTML auto-escaping.
const PAGE_TEMPLATE_NAME: &str = "page.html";
const ICON_TEMPLATE_NAME: &str = "icon.html";

const ICON_TEMPLATE: &str = r#"<div style="position: relative; height: {{ box_px }}px; width: {{ box_px }}px;"><img src="{{ image_url }}" style="transform: rotate({{ rotation }}deg); height: 100%; width: 100%; position: absolute;" /></div>"#;

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{ title }}</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@{{ leaflet_version }}/dist/leaflet.css" crossorigin="" />
  <script src="https://unpkg.com/leaflet@{{ leaflet_version }}/dist/leaflet.js" crossorigin=""></script>
  <style>
    html, body { height: 100%; width: 100%; margin: 0; background: #f3f4f6; }
    #map { height: 100%; width: 100%; }
  </style>
</head>
<body>
  <div id="map"></div>
  <script id="fleetmap-scene" type="application/json">{{ scene|tojson }}</script>
  <script>
    (function () {
      const scene = JSON.parse(document.getElementById('fleetmap-scene').textContent);
      const icons = {{ icons|tojson }};
      const latLng = (c) => [c.lat, c.lng];

      const map = L.map('map').setView(latLng(scene.center), scene.zoom);

      L.tileLayer(scene.base_layer.url_template, {
        attribution: scene.base_layer.attribution,
        maxZoom: scene.base_layer.max_zoom,
      }).addTo(map);

      const bounds = scene.overlay.bounds;
      L.imageOverlay(scene.overlay.image_url, [latLng(bounds.south_west), latLng(bounds.north_east)], {
        opacity: scene.overlay.opacity,
      }).addTo(map);

      scene.robots.forEach((robot, i) => {
        const marker = robot.marker;
        const popup = document.createElement('div');
        marker.popup.lines.forEach((line, n) => {
          if (n > 0) popup.appendChild(document.createElement('br'));
          popup.appendChild(document.createTextNode(line));
        });

        L.marker(latLng(marker.position), {
          icon: L.divIcon({ html: icons[i], iconSize: marker.icon.icon_size }),
        }).bindPopup(popup).addTo(map);

        const circle = robot.radius;
        L.circle(latLng(circle.center), {
          radius: circle.radius_m,
          color: circle.color,
          fillColor: circle.fill_color,
          fillOpacity: circle.fill_opacity,
        }).addTo(map);
      });
    })();
  </script>
</body>
</html>
"#;

fn environment() -> Result<Environment<'static>, RenderError> {
    let mut env = Environment::new();
    env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
    env.add_template(ICON_TEMPLATE_NAME, ICON_TEMPLATE)?;
    Ok(env)
}

/// Render `scene` as a complete HTML document titled `title`.
///
/// The scene goes through `tojson`, which escapes `<`, so no roster text can
/// close the script element it is embedded in.
pub fn render_page(scene: &SceneSnapshot, title: &str) -> Result<String, RenderError> {
    let env = environment()?;
    let icons = scene
        .robots
        .iter()
        .map(|robot| icon_markup(&env, &robot.marker.icon))
        .collect::<Result<Vec<_>, _>>()?;

    let page = env.get_template(PAGE_TEMPLATE_NAME)?.render(context! {
        title,
        leaflet_version => LEAFLET_VERSION,
        scene,
        icons,
    })?;
    tracing::debug!(robots = scene.robots.len(), bytes = page.len(), "rendered page");
    Ok(page)
}

/// `DivIcon` markup for one robot: the image rotated inside a square box.
pub fn render_icon(icon: &IconView) -> Result<String, RenderError> {
    icon_markup(&environment()?, icon)
}

fn icon_markup(env: &Environment<'_>, icon: &IconView) -> Result<String, RenderError> {
    let markup = env.get_template(ICON_TEMPLATE_NAME)?.render(context! {
        image_url => &icon.image_url,
        box_px => icon.box_px,
        rotation => icon.rotation_deg.to_string(),
    })?;
    Ok(markup)
}
