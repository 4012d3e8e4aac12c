//! Render-value payload
//!
//! The host hands the widget one payload per `render_value` call. It arrives
//! either as JSON (`{vertices, indices, data, color_map, curvature}`) or is
//! assembled from an OBJ mesh plus a separate per-vertex data array.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::error::Result;
use crate::surface::view::Hemisphere;

fn default_color_map() -> String {
    "jet".to_string()
}

/// Mesh geometry, per-vertex data and display hints for one surface.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SurfacePayload {
    /// Flat xyz positions.
    #[serde(default)]
    pub vertices: Vec<f32>,
    /// Flat triangle list.
    #[serde(default)]
    pub indices: Vec<u32>,
    /// One scalar per vertex, or empty.
    #[serde(default)]
    pub data: Vec<f32>,
    #[serde(default = "default_color_map")]
    pub color_map: String,
    /// One curvature value per vertex, or empty.
    #[serde(default)]
    pub curvature: Vec<f32>,
    #[serde(default)]
    pub hemisphere: Hemisphere,
}

impl SurfacePayload {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Builds a payload from an OBJ file. Multiple models are concatenated
    /// into one mesh with re-based indices; materials are ignored.
    pub fn from_obj(path: impl AsRef<Path>, data: Vec<f32>, color_map: &str) -> Result<Self> {
        let (models, _materials) = tobj::load_obj(
            path.as_ref(),
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )?;

        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        for model in &models {
            let base = (vertices.len() / 3) as u32;
            vertices.extend_from_slice(&model.mesh.positions);
            indices.extend(model.mesh.indices.iter().map(|i| i + base));
        }

        log::info!(
            "Loaded {} model(s) from {}: {} vertices, {} triangles",
            models.len(),
            path.as_ref().display(),
            vertices.len() / 3,
            indices.len() / 3
        );

        Ok(Self {
            vertices,
            indices,
            data,
            color_map: color_map.to_string(),
            curvature: Vec::new(),
            hemisphere: Hemisphere::default(),
        })
    }
}

/// Reads a JSON array of per-vertex values.
pub fn read_data_file(path: impl AsRef<Path>) -> Result<Vec<f32>> {
    let text = fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_full_payload() {
        let payload = SurfacePayload::from_json_str(
            r#"{
                "vertices": [0, 0, 0, 1, 0, 0, 0, 1, 0],
                "indices": [0, 1, 2],
                "data": [-1.5, 0.0, 2.0],
                "color_map": "hot",
                "curvature": [0.1, -0.2, 0.3],
                "hemisphere": "right"
            }"#,
        )
        .unwrap();

        assert_eq!(payload.vertices.len(), 9);
        assert_eq!(payload.indices, vec![0, 1, 2]);
        assert_eq!(payload.data, vec![-1.5, 0.0, 2.0]);
        assert_eq!(payload.color_map, "hot");
        assert_eq!(payload.hemisphere, Hemisphere::Right);
    }

    #[test]
    fn test_missing_fields_default() {
        let payload = SurfacePayload::from_json_str("{}").unwrap();
        assert!(payload.vertices.is_empty());
        assert!(payload.curvature.is_empty());
        assert_eq!(payload.color_map, "jet");
        assert_eq!(payload.hemisphere, Hemisphere::Left);
    }

    #[test]
    fn test_malformed_json() {
        let err = SurfacePayload::from_json_str(r#"{"vertices": "nope"}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SurfacePayload::from_json_file("/nonexistent/surface.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
