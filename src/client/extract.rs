use log::debug;

use super::PostpassClient;
use crate::error::PostpassError;
use crate::query::build_query;
use crate::types::{BoundingBox, ExtractionRequest, ExtractionResult, FeatureTable, TagFilter};

impl PostpassClient {
    /// Executes raw SQL against the endpoint and returns the parsed GeoJSON.
    ///
    /// Blocks the calling thread for at most the configured timeout. The SQL
    /// travels as the single form field `data`, matching the Postpass wire
    /// protocol.
    pub fn run_sql(&self, sql: &str) -> Result<ExtractionResult, PostpassError> {
        if self.endpoint().trim().is_empty() {
            return Err(PostpassError::Configuration(
                "Postpass endpoint is required".to_string(),
            ));
        }
        if sql.trim().is_empty() {
            return Err(PostpassError::InvalidRequest(
                "SQL query is required".to_string(),
            ));
        }

        debug!("Running Postpass query: {sql}");
        let raw = self.transport.post_form(self.endpoint(), &[("data", sql)])?;
        debug!("Got {} byte Postpass response", raw.len());

        let text = String::from_utf8(raw).map_err(|_| {
            PostpassError::MalformedResponse("response body was not valid UTF-8".to_string())
        })?;
        let payload: serde_json::Value = serde_json::from_str(&text).map_err(|_| {
            PostpassError::MalformedResponse("response was not valid JSON".to_string())
        })?;
        ExtractionResult::from_value(payload)
    }

    /// Builds the SQL for a request and runs it.
    pub fn run_query(&self, request: &ExtractionRequest) -> Result<ExtractionResult, PostpassError> {
        let sql = build_query(request)?;
        self.run_sql(&sql)
    }

    /// Extracts OSM buildings in a bbox from the combined point/polygon view.
    pub fn extract_buildings(&self, bbox: BoundingBox) -> Result<ExtractionResult, PostpassError> {
        let mut request = ExtractionRequest::new(FeatureTable::PointPolygon.name(), bbox);
        request.tag_filter = Some(TagFilter::equals("building", "yes"));
        self.run_query(&request)
    }
}
