//! Artifact serialization and the write path to the object sink.

use tracing::debug;

use crate::error::ReportError;
use crate::rank::RankedLocation;
use crate::services::object_store::ObjectSink;

/// Serializes ranked rows to `|`-delimited UTF-8 text with a header row.
/// Absent coordinates become empty fields.
pub fn to_pipe_delimited(rows: &[RankedLocation]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'|')
        .from_writer(Vec::new());

    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

/// Serializes `rows` and writes the bytes as the full content of
/// `bucket`/`key`, overwriting any prior object.
pub async fn write_report<S: ObjectSink>(
    sink: &S,
    bucket: &str,
    key: &str,
    rows: &[RankedLocation],
) -> Result<(), ReportError> {
    let body = to_pipe_delimited(rows)?;
    debug!(bucket, key, bytes = body.len(), "uploading report");
    sink.put(bucket, key, body).await?;
    Ok(())
}
