use crate::extract::PageRecord;
use crate::HarvestError;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

/// Writes the structured URL-to-record mapping as pretty-printed JSON
///
/// This is the programmatic companion to the markdown document: the same
/// records, keyed by source URL, for downstream consumers that want the
/// raw extraction rather than the rendered text.
pub fn write_json(path: &Path, records: &[PageRecord]) -> Result<(), HarvestError> {
    let by_url: BTreeMap<&str, &PageRecord> =
        records.iter().map(|r| (r.url.as_str(), r)).collect();

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &by_url)?;

    Ok(())
}
