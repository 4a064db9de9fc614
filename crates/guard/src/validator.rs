//! Size validation of every content record against the content store

use crate::mapper::map_to_path;
use crate::probe::{probe_file, FileProbe};
use cstore_errors::Error;
use cstore_state::{ContentCatalog, IdentifierResolver};
use cstore_types::{
    ContentRecord, Orphan, SizeMismatch, ValidationOutcome, ValidationReport,
};
use std::path::PathBuf;
use std::time::Instant;

/// Checks content records against the files of a content store
pub struct ContentValidator<'a, C: ContentCatalog + ?Sized> {
    catalog: &'a C,
    resolver: IdentifierResolver<'a, C>,
    root: PathBuf,
}

impl<'a, C: ContentCatalog + ?Sized> ContentValidator<'a, C> {
    /// Create a validator for the content store rooted at `root`
    pub fn new(catalog: &'a C, root: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            resolver: IdentifierResolver::new(catalog),
            root: root.into(),
        }
    }

    /// Load every content record from the catalog and validate it
    ///
    /// # Errors
    /// Returns an error if a database query fails
    pub async fn run(&self) -> Result<ValidationReport, Error> {
        let records = self.catalog.content_records().await?;
        self.validate_all(&records).await
    }

    /// Validate `records` in order
    ///
    /// Every record ends up in exactly one of the matched count, the
    /// mismatches or the orphans.
    ///
    /// # Errors
    /// Returns an error if resolving the owner of an orphan fails
    pub async fn validate_all(&self, records: &[ContentRecord]) -> Result<ValidationReport, Error> {
        let start = Instant::now();
        let mut report = ValidationReport::default();

        tracing::info!(
            records = records.len(),
            root = %self.root.display(),
            "validating content store"
        );

        for record in records {
            let outcome = self.validate_record(record).await?;
            report.record(outcome);
        }

        tracing::info!(
            total = report.total,
            validated = report.validated,
            mismatches = report.mismatches.len(),
            orphans = report.orphans.len(),
            duration_ms = start.elapsed().as_millis(),
            "content store validation finished"
        );
        Ok(report)
    }

    /// Classify a single record
    ///
    /// # Errors
    /// Returns an error if resolving the owner of an orphan fails
    pub async fn validate_record(&self, record: &ContentRecord) -> Result<ValidationOutcome, Error> {
        let path = map_to_path(&record.content_url, &self.root);

        match probe_file(&path).await {
            FileProbe::Regular { size } => {
                if u64::try_from(record.content_size).is_ok_and(|expected| expected == size) {
                    tracing::trace!(path = %path.display(), size, "content file matches");
                    Ok(ValidationOutcome::Matched)
                } else {
                    tracing::debug!(
                        path = %path.display(),
                        expected = record.content_size,
                        actual = size,
                        "content file size mismatch"
                    );
                    Ok(ValidationOutcome::SizeMismatch(SizeMismatch {
                        path,
                        expected: record.content_size,
                        actual: size,
                    }))
                }
            }
            FileProbe::Absent(reason) => {
                if !reason.is_not_found() {
                    tracing::warn!(
                        path = %path.display(),
                        error = %reason,
                        "content file not accessible, reporting as orphan"
                    );
                }
                let reference = self.resolver.node_reference(&record.content_url).await?;
                tracing::debug!(
                    path = %path.display(),
                    content_url = %record.content_url,
                    reference = %reference,
                    "orphaned content record"
                );
                Ok(ValidationOutcome::Orphan(Orphan { path, reference }))
            }
        }
    }
}
