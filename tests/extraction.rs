use std::sync::{Arc, Mutex};

use postpass_extract::{
    BoundingBox, ExtractionRequest, HttpTransport, PostpassClient, PostpassError, TagFilter,
};

/// Transport that answers every POST with a fixed FeatureCollection and keeps
/// the SQL it was handed.
struct RecordingTransport {
    sent: Arc<Mutex<Vec<String>>>,
}

impl RecordingTransport {
    fn boxed() -> (Box<Self>, Arc<Mutex<Vec<String>>>) {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let transport = Box::new(RecordingTransport { sent: sent.clone() });
        (transport, sent)
    }
}

impl HttpTransport for RecordingTransport {
    fn post_form(&self, _url: &str, fields: &[(&str, &str)]) -> Result<Vec<u8>, PostpassError> {
        let data = fields
            .iter()
            .find(|(name, _)| *name == "data")
            .map(|(_, value)| value.to_string())
            .unwrap_or_default();
        self.sent.lock().unwrap().push(data);
        Ok(br#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {"type": "Point", "coordinates": [0.1313, 52.1951]},
                    "properties": {"osm_id": 42, "tags": {"amenity": "fast_food"}}
                }
            ]
        }"#
        .to_vec())
    }
}

#[test]
fn request_round_trips_to_a_feature_collection() {
    let bbox = BoundingBox::new(0.0, 52.0, 0.2, 52.3).unwrap();
    let mut request = ExtractionRequest::new("postpass_point", bbox);
    request.tag_filter = Some(TagFilter::equals("amenity", "fast_food"));
    request.columns = vec!["amenity".to_string()];

    let (transport, _sent) = RecordingTransport::boxed();
    let client =
        PostpassClient::with_transport("https://postpass.geofabrik.de/api/0.2/interpreter", transport);

    let result = client.run_query(&request).unwrap();
    let collection = result.to_feature_collection().unwrap();
    assert_eq!(collection.features.len(), 1);

    let geometry = collection.features[0].geometry.as_ref().unwrap();
    assert!(matches!(geometry.value, geojson::Value::Point(_)));
}

#[test]
fn sent_sql_is_the_built_query() {
    let bbox = BoundingBox::new(-1.0, -1.0, 1.0, 1.0).unwrap();
    let mut request = ExtractionRequest::new("postpass_point", bbox);
    request.tag_filter = Some(TagFilter::any_of("amenity", ["cafe", "restaurant"]));

    let (transport, sent) = RecordingTransport::boxed();
    let client = PostpassClient::with_transport("https://example.com", transport);
    client.run_query(&request).unwrap();

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0],
        "SELECT osm_id, tags, geom FROM postpass_point WHERE geom && \
         ST_SetSRID(ST_MakeBox2D(ST_MakePoint(-1.0, -1.0),ST_MakePoint(1.0, 1.0)), 4326) \
         AND tags->>'amenity' IN ('cafe', 'restaurant')"
    );
}

#[test]
fn buildings_extraction_targets_the_combined_view() {
    let bbox = BoundingBox::new(0.0, 52.0, 0.2, 52.3).unwrap();
    let (transport, sent) = RecordingTransport::boxed();
    let client = PostpassClient::with_transport("https://example.com", transport);

    client.extract_buildings(bbox).unwrap();

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].contains("FROM postpass_pointpolygon"));
    assert!(sent[0].contains("tags->>'building' = 'yes'"));
}
