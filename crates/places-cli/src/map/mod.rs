//! The `map` command: a standalone Leaflet page with a drawing toolbar.
//!
//! Nothing here talks to the places API. The page loads Leaflet and
//! Leaflet.draw from public CDNs when opened; rendering itself is offline.

use std::path::Path;

use anyhow::Context;
use askama::Template;

use places_core::MapSettings;

/// Corner of the map holding the draw toolbar.
const CONTROL_POSITION: &str = "topleft";

#[derive(Template)]
#[template(path = "map.html")]
struct MapTemplate {
    center_lat: f64,
    center_lng: f64,
    zoom: u8,
    position_json: String,
    draw_options_json: String,
    edit_options_json: String,
    export_filename_json: String,
}

/// Shapes offered by the draw toolbar. Polyline and circle-marker are off.
fn draw_options() -> serde_json::Value {
    serde_json::json!({
        "polyline": false,
        "polygon": true,
        "circle": true,
        "rectangle": true,
        "marker": true,
        "circlemarker": false,
    })
}

fn edit_options() -> serde_json::Value {
    serde_json::json!({ "edit": true })
}

/// Encode `value` as a JS string literal safe to embed in an inline
/// `<script>`: `<` is escaped so the value cannot close the element.
fn script_string(value: &str) -> serde_json::Result<String> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}

/// Render the map page for `settings` into an HTML string.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub(crate) fn render_map(settings: &MapSettings) -> anyhow::Result<String> {
    let template = MapTemplate {
        center_lat: settings.center.lat,
        center_lng: settings.center.lng,
        zoom: settings.zoom,
        position_json: script_string(CONTROL_POSITION)?,
        draw_options_json: draw_options().to_string(),
        edit_options_json: edit_options().to_string(),
        export_filename_json: script_string(&settings.export_filename)?,
    };
    template.render().context("failed to render map template")
}

/// Render the page and write it to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub(crate) fn write_map(settings: &MapSettings, path: &Path) -> anyhow::Result<()> {
    let html = render_map(settings)?;
    std::fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))
}

/// Write the map to its configured path and optionally open it in the
/// default browser.
///
/// # Errors
///
/// Returns an error if the file cannot be written. A failure to launch the
/// browser is logged, not returned, since the file is already in place.
pub(crate) fn run_map(settings: &MapSettings, open_in_browser: bool) -> anyhow::Result<()> {
    write_map(settings, &settings.output_path)?;
    tracing::info!(
        path = %settings.output_path.display(),
        center = %settings.center,
        zoom = settings.zoom,
        "map written"
    );

    if open_in_browser {
        if let Err(e) = open::that(&settings.output_path) {
            tracing::warn!(
                path = %settings.output_path.display(),
                error = %e,
                "failed to open map in browser"
            );
        }
    }
    Ok(())
}
