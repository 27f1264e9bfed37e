//! Rendering adapters for fleetmap.
//!
//! Translate a `SceneSnapshot` into something a browser or GIS tool can
//! show: a self-contained Leaflet page or a GeoJSON feature collection.
//! No map logic lives here; positions are used exactly as composed.

pub mod geojson;
pub mod html;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use geojson::to_geojson;
pub use html::{render_icon, render_page};

/// Rendering and output errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to render template: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write rendered output to `path`, creating parent directories.
pub fn write_output(path: &Path, contents: &str) -> Result<(), RenderError> {
    let write_err = |source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, contents).map_err(write_err)?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_output_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site").join("index.html");
        write_output(&path, "<html></html>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_write_output_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten by a file.
        let err = write_output(dir.path(), "x").unwrap_err();
        assert!(matches!(err, RenderError::Write { .. }));
        assert!(err.to_string().contains(&dir.path().display().to_string()));
    }
}
