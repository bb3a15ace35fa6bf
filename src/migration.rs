//! Copies every item of a source table into a destination table.
//!
//! The source is scanned page by page and each item is written to the destination with an
//! individual put, in scan order, one request at a time. Items are never transformed and the
//! source is never modified, so a "move" is a copy: running it twice leaves the destination in
//! the same state, since puts overwrite by primary key.

use anyhow::{Context, Result};
use tokio::time::Duration;
use tracing::{debug, error, info, warn};

use crate::dynamodb::{Item, Table, TableStore};
use crate::utils::retry_with_backoff;

pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Counters collected while moving a table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MigrationReport {
    pub pages_scanned: usize,
    pub items_scanned: usize,
    pub items_written: usize,
}

/// A configured move from one table to another.
#[derive(Debug, Clone)]
pub struct Migration {
    source: String,
    destination: String,
    page_size: Option<i32>,
    max_retries: usize,
    retry_delay: Duration,
    dry_run: bool,
}

impl Migration {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            page_size: None,
            max_retries: 0,
            retry_delay: DEFAULT_RETRY_DELAY,
            dry_run: false,
        }
    }

    /// Caps the number of items requested per scan page. `None` lets the store decide.
    pub fn page_size(mut self, page_size: Option<i32>) -> Self {
        self.page_size = page_size;
        self
    }

    /// Number of times a failed put is retried before the move aborts.
    pub fn max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// First delay of the retry backoff.
    pub fn retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Scans the source without writing anything to the destination.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Runs the move against `store`.
    ///
    /// Both tables are resolved before the first scan, so a missing table aborts with nothing
    /// copied. A table whose description is not readable is still moved; its items are then
    /// identified by all their attributes instead of their key in logs and errors. A put that
    /// still fails after the configured retries stops the move: every item before it stays
    /// written, nothing after it is attempted.
    pub async fn run<S: TableStore + ?Sized>(&self, store: &S) -> Result<MigrationReport> {
        let source_keys = resolve(store, &self.source).await?;
        resolve(store, &self.destination).await?;

        info!(
            "Moving items from '{}' to '{}'{}",
            self.source,
            self.destination,
            if self.dry_run { " (dry run)" } else { "" }
        );

        let mut report = MigrationReport::default();
        let mut exclusive_start_key = None;

        loop {
            let page = store
                .scan_page(&self.source, self.page_size, exclusive_start_key)
                .await
                .with_context(|| {
                    format!(
                        "Failed to scan '{}' (page {})",
                        self.source,
                        report.pages_scanned + 1
                    )
                })?;
            report.pages_scanned += 1;
            report.items_scanned += page.items.len();

            info!(
                "Scanned page {} of '{}': {} items",
                report.pages_scanned,
                self.source,
                page.items.len()
            );

            for item in page.items {
                if self.dry_run {
                    continue;
                }

                let position = report.items_written + 1;
                debug!("Writing item #{position} {}", identify(&item, source_keys.as_ref()));

                retry_with_backoff(
                    || store.put_item(&self.destination, item.clone()),
                    self.retry_delay,
                    self.max_retries,
                )
                .await
                .map_err(|e| {
                    error!(
                        "Write of item #{position} to '{}' failed: {e:#}",
                        self.destination
                    );
                    e
                })
                .with_context(|| {
                    format!(
                        "Failed to write item #{position} {} to '{}' after {} attempts; {} items copied",
                        identify(&item, source_keys.as_ref()),
                        self.destination,
                        self.max_retries + 1,
                        report.items_written
                    )
                })?;
                report.items_written += 1;
            }

            exclusive_start_key = page.last_evaluated_key;
            if exclusive_start_key.is_none() {
                break;
            }
        }

        info!(
            "Scanned {} items in {} pages, wrote {} items to '{}'",
            report.items_scanned,
            report.pages_scanned,
            report.items_written,
            self.destination
        );
        Ok(report)
    }
}

async fn resolve<S: TableStore + ?Sized>(
    store: &S,
    table_name: &str,
) -> Result<Option<Table>> {
    let table = store
        .describe_table(table_name)
        .await
        .with_context(|| format!("Failed to resolve table '{table_name}'"))?;
    match &table {
        Some(table) => debug!(
            "Resolved '{}' with key {:?}",
            table.name(),
            table.key_attributes().collect::<Vec<_>>()
        ),
        None => warn!("Key schema of '{table_name}' is unknown"),
    }
    Ok(table)
}

/// Renders an item's primary key, or the whole item when the key schema is unknown.
fn identify(item: &Item, table: Option<&Table>) -> Item {
    match table {
        Some(table) => item.key_of(table),
        None => item.clone(),
    }
}
