use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PostpassError;

/// A WGS84 bounding box in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Corners must be ordered: `min_lon < max_lon` and `min_lat < max_lat`.
    pub fn new(
        min_lon: f64,
        min_lat: f64,
        max_lon: f64,
        max_lat: f64,
    ) -> Result<Self, PostpassError> {
        if min_lon >= max_lon || min_lat >= max_lat {
            return Err(PostpassError::InvalidRequest(format!(
                "bounding box corners are not ordered: ({min_lon}, {min_lat}, {max_lon}, {max_lat})"
            )));
        }
        Ok(BoundingBox {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        })
    }
}

/// A filter over the `tags` jsonb column.
///
/// No values means the key only has to be present. One value means equality,
/// several mean set membership. A single `"*"` value is presence-only too.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TagFilter {
    pub key: String,
    pub values: Vec<String>,
}

impl TagFilter {
    pub fn presence(key: &str) -> Self {
        TagFilter {
            key: key.to_string(),
            values: Vec::new(),
        }
    }

    pub fn equals(key: &str, value: &str) -> Self {
        TagFilter {
            key: key.to_string(),
            values: vec![value.to_string()],
        }
    }

    pub fn any_of(key: &str, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        TagFilter {
            key: key.to_string(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// One extraction call against a Postpass table or view.
///
/// `columns` lists tag keys to additionally project as top-level result
/// columns; the raw `tags` column is always returned regardless.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtractionRequest {
    pub table: String,
    pub bbox: BoundingBox,
    pub columns: Vec<String>,
    pub tag_filter: Option<TagFilter>,
    pub use_centroid: bool,
}

impl ExtractionRequest {
    pub fn new(table: &str, bbox: BoundingBox) -> Self {
        ExtractionRequest {
            table: table.to_string(),
            bbox,
            columns: Vec::new(),
            tag_filter: None,
            use_centroid: false,
        }
    }
}

/// Tables and combined geometry views of the osm2pgsql flex schema that
/// Postpass exposes. Requests may also name arbitrary tables directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureTable {
    Point,
    Line,
    Polygon,
    PointLine,
    PointPolygon,
    LinePolygon,
    PointLinePolygon,
}

impl FeatureTable {
    pub fn name(self) -> &'static str {
        match self {
            FeatureTable::Point => "postpass_point",
            FeatureTable::Line => "postpass_line",
            FeatureTable::Polygon => "postpass_polygon",
            FeatureTable::PointLine => "postpass_pointline",
            FeatureTable::PointPolygon => "postpass_pointpolygon",
            FeatureTable::LinePolygon => "postpass_linepolygon",
            FeatureTable::PointLinePolygon => "postpass_pointlinepolygon",
        }
    }
}

impl fmt::Display for FeatureTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bbox_requires_ordered_corners() {
        assert!(BoundingBox::new(-1.0, -1.0, 1.0, 1.0).is_ok());
        assert!(matches!(
            BoundingBox::new(1.0, -1.0, -1.0, 1.0),
            Err(PostpassError::InvalidRequest(_))
        ));
        assert!(matches!(
            BoundingBox::new(-1.0, 1.0, 1.0, -1.0),
            Err(PostpassError::InvalidRequest(_))
        ));
        // degenerate boxes are rejected too
        assert!(BoundingBox::new(0.0, 0.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn feature_table_names_follow_flex_schema() {
        assert_eq!(FeatureTable::Point.name(), "postpass_point");
        assert_eq!(
            FeatureTable::PointLinePolygon.to_string(),
            "postpass_pointlinepolygon"
        );
    }
}
