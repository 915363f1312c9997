//! Trait and query types for the pedestrian open-data source.

use std::fmt;

use crate::error::FetchError;
use crate::table::Table;

/// Time-bucket size for count aggregation.
///
/// The grouping key set is the only difference between the two report
/// variants: by-month buckets on (sensor_id, year, month); by-day adds the
/// day-of-month column `mdate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Day,
    Month,
}

impl Granularity {
    /// Columns the remote aggregation groups by.
    pub fn group_columns(&self) -> &'static str {
        match self {
            Granularity::Day => "sensor_id,year,month,mdate",
            Granularity::Month => "sensor_id,year,month",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Day => write!(f, "day"),
            Granularity::Month => write!(f, "month"),
        }
    }
}

/// SODA query parameters for the count aggregation: distinct grouping keys
/// plus summed hourly counts, grouped by the same keys, ordered by the sum
/// descending. The remote sort is what the ranking step trusts.
pub fn count_query(granularity: Granularity) -> Vec<(&'static str, String)> {
    let keys = granularity.group_columns();
    vec![
        ("$select", format!("distinct {keys}, sum(hourly_counts)")),
        ("$group", keys.to_string()),
        ("$order", "sum_hourly_counts desc".to_string()),
    ]
}

/// Abstraction over the pedestrian open-data provider.
#[async_trait::async_trait]
pub trait PedestrianDataApi: Send + Sync {
    /// Returns every known sensor location, fetched fresh.
    async fn sensor_locations(&self) -> Result<Table, FetchError>;

    /// Returns pre-aggregated counts for `granularity`, sorted descending by
    /// summed hourly counts at the source.
    async fn pedestrian_counts(&self, granularity: Granularity) -> Result<Table, FetchError>;
}
