//! SQL fragment builder for Postpass extraction queries.
//!
//! The grammar here is a small fixed shape over the flex schema tables (an
//! `osm_id` column, a jsonb `tags` column, a geometry column named `geom`),
//! which is what makes plain string templating workable instead of a SQL AST.
//!
//! Keys and values are interpolated as literals without escaping; callers
//! are trusted to supply safe input.

use crate::error::PostpassError;
use crate::types::{BoundingBox, ExtractionRequest};

/// Generates the SELECT column list.
///
/// Always includes `osm_id` and `tags`, one projection per requested tag key
/// (`*` and empty entries are already covered by `tags` and get skipped), and
/// a geometry column aliased `geom`.
pub fn build_column_list(columns: &[String], use_centroid: bool) -> String {
    let mut select_cols = vec!["osm_id".to_string(), "tags".to_string()];

    for col in columns {
        let col = col.trim();
        if col.is_empty() || col == "*" {
            continue;
        }
        select_cols.push(format!("tags->>'{col}' as \"{col}\""));
    }

    if use_centroid {
        select_cols.push("ST_Centroid(geom) as geom".to_string());
    } else {
        select_cols.push("geom".to_string());
    }

    select_cols.join(", ")
}

/// Restricts a geometry column to a WGS84 bounding box, Postpass style:
/// `geom && ST_SetSRID(ST_MakeBox2D(...), 4326)`.
pub fn build_bbox_filter(bbox: &BoundingBox, geom_column: &str) -> String {
    // {:?} keeps the decimal point on whole-number coordinates.
    format!(
        "{geom_column} && ST_SetSRID(ST_MakeBox2D(ST_MakePoint({:?}, {:?}),ST_MakePoint({:?}, {:?})), 4326)",
        bbox.min_lon, bbox.min_lat, bbox.max_lon, bbox.max_lat
    )
}

/// Filters on the `tags` jsonb column.
///
/// No usable values means presence-only (`tags ? 'key'`), one value means
/// equality, several mean `IN (...)`. A single `"*"` counts as no value.
pub fn build_tag_filter(key: &str, values: &[String]) -> String {
    let key = key.trim();
    let mut cleaned: Vec<&str> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect();
    if cleaned == ["*"] {
        cleaned.clear();
    }

    match cleaned.as_slice() {
        [] => format!("tags ? '{key}'"),
        [value] => format!("tags->>'{key}' = '{value}'"),
        many => {
            let in_list = many
                .iter()
                .map(|v| format!("'{v}'"))
                .collect::<Vec<_>>()
                .join(", ");
            format!("tags->>'{key}' IN ({in_list})")
        }
    }
}

/// Builds the full extraction SELECT for a request.
///
/// The result never ends in a semicolon; Postpass rejects one when the query
/// is embedded in a urlencoded request body.
pub fn build_query(request: &ExtractionRequest) -> Result<String, PostpassError> {
    let table = request.table.trim();
    if table.is_empty() {
        return Err(PostpassError::InvalidRequest(
            "table is required for a Postpass query".to_string(),
        ));
    }

    let select_sql = build_column_list(&request.columns, request.use_centroid);
    let mut where_sql = build_bbox_filter(&request.bbox, "geom");
    if let Some(filter) = &request.tag_filter {
        where_sql.push_str(" AND ");
        where_sql.push_str(&build_tag_filter(&filter.key, &filter.values));
    }

    Ok(format!("SELECT {select_sql} FROM {table} WHERE {where_sql}"))
}
