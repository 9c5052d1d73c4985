//! Dataset import: file → validate → normalize → persist.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use laureates_core::{CountryResolver, QuarantinedRow, load_dataset, normalize};
use laureates_storage::{ImportedIds, Linked, Storage};
use serde::Serialize;

use crate::ServiceError;
use crate::blocking::run_blocking;

/// Outcome of one import run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub records_imported: usize,
    pub quarantined: Vec<QuarantinedRow>,
    pub organizations_created: usize,
    pub organizations_reused: usize,
    pub addresses_created: usize,
    pub addresses_reused: usize,
    /// Distinct alpha-2 codes seen on resolved addresses.
    pub country_codes: BTreeSet<String>,
    /// Distinct organization names among the well-formed rows.
    pub distinct_organizations: usize,
    /// Distinct non-empty cities among the well-formed rows.
    pub distinct_cities: usize,
}

impl ImportReport {
    fn record(&mut self, ids: &ImportedIds) {
        self.records_imported += 1;
        if let Some(org) = ids.organization {
            if org.reused {
                self.organizations_reused += 1;
            } else {
                self.organizations_created += 1;
            }
        }
        for address in [ids.organization_address, ids.birth_address, ids.death_address]
            .into_iter()
            .flatten()
        {
            self.count_address(address);
        }
    }

    fn count_address(&mut self, address: Linked) {
        if address.reused {
            self.addresses_reused += 1;
        } else {
            self.addresses_created += 1;
        }
    }
}

pub struct ImportService {
    storage: Arc<Storage>,
}

impl ImportService {
    #[must_use]
    pub const fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    /// Read a dataset file and import every well-formed row.
    ///
    /// Malformed rows are reported, not fatal. The first store failure aborts
    /// the run; records imported before it stay committed.
    pub async fn import_file(&self, path: &Path) -> Result<ImportReport, ServiceError> {
        let path: PathBuf = path.to_path_buf();
        let storage = Arc::clone(&self.storage);
        run_blocking(move || {
            tracing::info!(path = %path.display(), "loading dataset");
            let rows = load_dataset(&path)?;
            import_rows_blocking(&storage, rows)
        })
        .await
    }

    /// Import already-loaded rows.
    pub async fn import_rows(
        &self,
        rows: Vec<serde_json::Value>,
    ) -> Result<ImportReport, ServiceError> {
        let storage = Arc::clone(&self.storage);
        run_blocking(move || import_rows_blocking(&storage, rows)).await
    }
}

fn import_rows_blocking(
    storage: &Storage,
    rows: Vec<serde_json::Value>,
) -> Result<ImportReport, ServiceError> {
    let total = rows.len();
    let dataset = normalize(rows, CountryResolver::global());
    let mut report = ImportReport {
        country_codes: dataset.country_codes(),
        distinct_organizations: dataset.distinct_organization_names().len(),
        distinct_cities: dataset.distinct_cities().len(),
        ..ImportReport::default()
    };

    for record in &dataset.records {
        let ids = storage.import_record(record).inspect_err(|e| {
            tracing::error!(
                index = record.index,
                source_id = ?record.source_id,
                error = %e,
                "import aborted"
            );
        })?;
        report.record(&ids);
    }
    report.quarantined = dataset.quarantined;

    tracing::info!(
        total,
        imported = report.records_imported,
        quarantined = report.quarantined.len(),
        organizations_created = report.organizations_created,
        addresses_created = report.addresses_created,
        "import finished"
    );
    Ok(report)
}
