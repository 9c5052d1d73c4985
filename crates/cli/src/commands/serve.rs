use anyhow::Result;
use laureates_http::{AppState, create_router};
use laureates_service::{ImportService, QueryService};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::open_storage;

pub(crate) async fn run(
    db_path: &Path,
    port: u16,
    host: String,
    import: Option<PathBuf>,
) -> Result<()> {
    let storage = open_storage(db_path)?;

    if let Some(file) = import {
        let report = ImportService::new(Arc::clone(&storage)).import_file(&file).await?;
        tracing::info!(
            imported = report.records_imported,
            quarantined = report.quarantined.len(),
            "dataset imported before serving"
        );
    }

    let state = Arc::new(AppState::new(Arc::new(QueryService::new(storage)))?);

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
