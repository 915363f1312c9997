//! Report orchestration: fetch both tables, rank, publish the artifact.

use tracing::info;

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::output::write_report;
use crate::rank::rank;
use crate::services::object_store::ObjectSink;
use crate::services::open_data::{Granularity, PedestrianDataApi};

/// Builds and publishes the top-N report for one granularity.
///
/// The write only happens once both fetches and the ranking have succeeded;
/// a failure leaves any prior artifact at the target key untouched.
#[tracing::instrument(skip(api, sink, config), fields(granularity = %granularity, top_n = config.top_n))]
pub async fn run_report<A, S>(
    api: &A,
    sink: &S,
    config: &ReportConfig,
    granularity: Granularity,
) -> Result<(), ReportError>
where
    A: PedestrianDataApi,
    S: ObjectSink,
{
    let locations = api
        .sensor_locations()
        .await
        .map_err(|source| ReportError::BadRequest {
            context: "sensor location fetch failed",
            source,
        })?;

    let counts = api
        .pedestrian_counts(granularity)
        .await
        .map_err(|source| ReportError::BadRequest {
            context: "pedestrian count fetch failed",
            source,
        })?;

    info!(
        locations = locations.len(),
        counts = counts.len(),
        "source tables fetched"
    );

    let ranked = rank(&counts, &locations, config.top_n)?;

    let key = format!(
        "{}top-{}-locations-by-{}.csv",
        config.output_prefix, config.top_n, granularity
    );
    write_report(sink, &config.bucket, &key, &ranked).await?;

    info!(bucket = %config.bucket, key = %key, rows = ranked.len(), "report written");
    Ok(())
}
