//! City of Melbourne open-data client.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::fetch::{BasicClient, fetch_table};
use crate::services::open_data::{Granularity, PedestrianDataApi, count_query};
use crate::table::Table;

const PEDESTRIAN_COUNT_URL: &str = "https://data.melbourne.vic.gov.au/resource/b2ak-trbp.json";
const SENSOR_LOCATION_URL: &str = "https://data.melbourne.vic.gov.au/resource/h57g-5234.json";

/// [`PedestrianDataApi`] backed by the Melbourne data portal's SODA
/// endpoints.
pub struct MelbourneOpenData {
    client: BasicClient,
    count_url: String,
    location_url: String,
}

impl MelbourneOpenData {
    pub fn new() -> Self {
        Self::with_endpoints(PEDESTRIAN_COUNT_URL, SENSOR_LOCATION_URL)
    }

    /// Points the client at alternative endpoints.
    pub fn with_endpoints(count_url: &str, location_url: &str) -> Self {
        Self {
            client: BasicClient::new(),
            count_url: count_url.to_string(),
            location_url: location_url.to_string(),
        }
    }
}

impl Default for MelbourneOpenData {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PedestrianDataApi for MelbourneOpenData {
    async fn sensor_locations(&self) -> Result<Table, FetchError> {
        fetch_table(&self.client, &self.location_url, &[]).await
    }

    async fn pedestrian_counts(&self, granularity: Granularity) -> Result<Table, FetchError> {
        fetch_table(&self.client, &self.count_url, &count_query(granularity)).await
    }
}
