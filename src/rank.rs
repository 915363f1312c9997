//! Top-N ranking: truncate the pre-sorted count table and left-join sensor
//! locations onto it.

use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

use crate::error::ReportError;
use crate::table::{Table, cell_text};

/// One output row of a ranked-locations report. Field order is the artifact
/// column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedLocation {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub sensor_id: String,
    pub sum_hourly_counts: String,
}

/// Keeps the first `top_n` count rows in their incoming order and joins each
/// against its sensor location.
///
/// The remote source sorts descending by `sum_hourly_counts` at query time;
/// no re-sort happens here, so the output inherits that ordering. Every count
/// row appears exactly once regardless of location matches; rows without a
/// matching location carry empty coordinates. Duplicate sensor ids on the
/// location side keep their first row.
pub fn rank(
    counts: &Table,
    locations: &Table,
    top_n: usize,
) -> Result<Vec<RankedLocation>, ReportError> {
    if counts.is_empty() {
        return Err(ReportError::EmptyInput);
    }

    let mut coordinates: HashMap<String, (Option<String>, Option<String>)> = HashMap::new();
    for row in locations.rows() {
        let Some(sensor_id) = row.get("sensor_id").map(cell_text) else {
            continue;
        };
        if coordinates.contains_key(&sensor_id) {
            warn!(%sensor_id, "duplicate sensor location, keeping first");
            continue;
        }
        coordinates.insert(
            sensor_id,
            (
                row.get("latitude").map(cell_text),
                row.get("longitude").map(cell_text),
            ),
        );
    }

    let ranked = counts
        .rows()
        .iter()
        .take(top_n)
        .map(|row| {
            let sensor_id = row.get("sensor_id").map(cell_text).unwrap_or_default();
            let (latitude, longitude) = coordinates
                .get(&sensor_id)
                .cloned()
                .unwrap_or((None, None));
            RankedLocation {
                latitude,
                longitude,
                sensor_id,
                sum_hourly_counts: row
                    .get("sum_hourly_counts")
                    .map(cell_text)
                    .unwrap_or_default(),
            }
        })
        .collect();

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value, json};

    fn table(rows: Vec<Value>) -> Table {
        Table::new(
            rows.into_iter()
                .map(|v| v.as_object().unwrap().clone())
                .collect::<Vec<Map<String, Value>>>(),
        )
    }

    fn sample_locations() -> Table {
        table(vec![
            json!({"sensor_id": "7", "sensor_description": "Birrarung Marr",
                   "latitude": "-37.81862929", "longitude": "144.97169395"}),
            json!({"sensor_id": "35", "sensor_description": "Southbank",
                   "latitude": "-37.82017828", "longitude": "144.96508877"}),
            json!({"sensor_id": "38", "sensor_description": "Flinders St-Swanston St (West)",
                   "latitude": "-37.81723437", "longitude": "144.96715033"}),
        ])
    }

    #[test]
    fn test_empty_counts_is_a_hard_failure() {
        let result = rank(&table(vec![]), &sample_locations(), 10);
        assert!(matches!(result, Err(ReportError::EmptyInput)));
    }

    #[test]
    fn test_output_rows_are_min_of_top_n_and_input() {
        let counts = table(vec![
            json!({"sensor_id": "38", "sum_hourly_counts": "115443"}),
            json!({"sensor_id": "35", "sum_hourly_counts": "93100"}),
            json!({"sensor_id": "7", "sum_hourly_counts": "55437"}),
        ]);

        let ranked = rank(&counts, &sample_locations(), 10).unwrap();
        assert_eq!(ranked.len(), 3);

        let ranked = rank(&counts, &sample_locations(), 2).unwrap();
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_truncation_keeps_incoming_order() {
        let counts = table(vec![
            json!({"sensor_id": "38", "sum_hourly_counts": "115443"}),
            json!({"sensor_id": "35", "sum_hourly_counts": "93100"}),
            json!({"sensor_id": "7", "sum_hourly_counts": "55437"}),
        ]);

        let ranked = rank(&counts, &sample_locations(), 2).unwrap();
        assert_eq!(ranked[0].sensor_id, "38");
        assert_eq!(ranked[1].sensor_id, "35");
    }

    #[test]
    fn test_matched_sensor_gets_exact_coordinates() {
        let counts = table(vec![
            json!({"sensor_id": "38", "sum_hourly_counts": "115443"}),
        ]);

        let ranked = rank(&counts, &sample_locations(), 10).unwrap();
        assert_eq!(ranked[0].latitude.as_deref(), Some("-37.81723437"));
        assert_eq!(ranked[0].longitude.as_deref(), Some("144.96715033"));
        assert_eq!(ranked[0].sum_hourly_counts, "115443");
    }

    #[test]
    fn test_unmatched_sensor_keeps_its_row_without_coordinates() {
        let counts = table(vec![
            json!({"sensor_id": "999", "sum_hourly_counts": "42"}),
        ]);

        let ranked = rank(&counts, &sample_locations(), 10).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].latitude, None);
        assert_eq!(ranked[0].longitude, None);
        assert_eq!(ranked[0].sensor_id, "999");
    }

    #[test]
    fn test_duplicate_locations_keep_first_and_never_fan_out() {
        let locations = table(vec![
            json!({"sensor_id": "38", "latitude": "-37.81723437", "longitude": "144.96715033"}),
            json!({"sensor_id": "38", "latitude": "0.0", "longitude": "0.0"}),
        ]);
        let counts = table(vec![
            json!({"sensor_id": "38", "sum_hourly_counts": "115443"}),
        ]);

        let ranked = rank(&counts, &locations, 10).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].latitude.as_deref(), Some("-37.81723437"));
    }

    #[test]
    fn test_extra_columns_on_either_side_are_ignored() {
        let counts = table(vec![
            json!({"sensor_id": "7", "year": "2019", "month": "November",
                   "mdate": "15", "sum_hourly_counts": "55437"}),
        ]);

        let ranked = rank(&counts, &sample_locations(), 10).unwrap();
        assert_eq!(
            ranked[0],
            RankedLocation {
                latitude: Some("-37.81862929".to_string()),
                longitude: Some("144.97169395".to_string()),
                sensor_id: "7".to_string(),
                sum_hourly_counts: "55437".to_string(),
            }
        );
    }

    #[test]
    fn test_numeric_sensor_id_matches_textual_one() {
        let counts = table(vec![
            json!({"sensor_id": 38, "sum_hourly_counts": 115443}),
        ]);

        let ranked = rank(&counts, &sample_locations(), 10).unwrap();
        assert_eq!(ranked[0].latitude.as_deref(), Some("-37.81723437"));
        assert_eq!(ranked[0].sum_hourly_counts, "115443");
    }

    #[test]
    fn test_location_missing_coordinate_columns_renders_empty() {
        let locations = table(vec![json!({"sensor_id": "7"})]);
        let counts = table(vec![
            json!({"sensor_id": "7", "sum_hourly_counts": "55437"}),
        ]);

        let ranked = rank(&counts, &locations, 10).unwrap();
        assert_eq!(ranked[0].latitude, None);
        assert_eq!(ranked[0].longitude, None);
    }
}
