use geojson::FeatureCollection;
use serde_json::Value;

use crate::error::PostpassError;

/// A parsed Postpass response, guaranteed to be a JSON object.
///
/// Postpass answers extraction queries with GeoJSON (a `FeatureCollection`
/// when a geometry column is selected); beyond checking for an object shape
/// the payload is passed through untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractionResult(Value);

impl ExtractionResult {
    pub(crate) fn from_value(value: Value) -> Result<Self, PostpassError> {
        if !value.is_object() {
            return Err(PostpassError::MalformedResponse(
                "response must be a GeoJSON object".to_string(),
            ));
        }
        Ok(ExtractionResult(value))
    }

    pub fn as_json(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Decodes the payload into a typed `FeatureCollection`.
    pub fn to_feature_collection(&self) -> Result<FeatureCollection, PostpassError> {
        serde_json::from_value(self.0.clone())
            .map_err(|e| PostpassError::MalformedResponse(format!("not a FeatureCollection: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn rejects_non_object_payloads() {
        assert!(matches!(
            ExtractionResult::from_value(json!([1, 2, 3])),
            Err(PostpassError::MalformedResponse(_))
        ));
        assert!(ExtractionResult::from_value(json!({"type": "FeatureCollection"})).is_ok());
    }

    #[test]
    fn decodes_empty_feature_collection() {
        let result =
            ExtractionResult::from_value(json!({"type": "FeatureCollection", "features": []}))
                .unwrap();
        let collection = result.to_feature_collection().unwrap();
        assert!(collection.features.is_empty());
    }

    #[test]
    fn arbitrary_objects_are_not_feature_collections() {
        let result = ExtractionResult::from_value(json!({"rows": 4})).unwrap();
        assert!(result.to_feature_collection().is_err());
        assert_eq!(result.as_json()["rows"], 4);
    }
}
