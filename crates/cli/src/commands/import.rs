use anyhow::{Context as _, Result};
use laureates_service::ImportService;
use std::path::Path;

use crate::open_storage;

pub(crate) async fn run(db_path: &Path, file: &Path) -> Result<()> {
    let storage = open_storage(db_path)?;
    let report = ImportService::new(storage)
        .import_file(file)
        .await
        .with_context(|| format!("importing {}", file.display()))?;

    for row in &report.quarantined {
        tracing::warn!(
            index = row.index,
            source_id = ?row.source_id,
            reason = %row.reason,
            "row skipped"
        );
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
