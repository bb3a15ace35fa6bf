use anyhow::Result;
use async_trait::async_trait;

use crate::dynamodb::{Item, Table};

/// One response of a scan request.
#[derive(Debug, Default, Clone)]
pub struct ScanPage {
    /// Items in the order the store returned them.
    pub items: Vec<Item>,
    /// Continuation marker; `None` once the scan is exhausted.
    pub last_evaluated_key: Option<Item>,
}

/// The storage operations a table move needs.
///
/// [`DynamoDb`](crate::dynamodb::DynamoDb) implements this against the AWS SDK; tests use an
/// in-memory implementation. There is no delete: the source of a move is never modified.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Resolves a table by name, reading its key schema.
    ///
    /// Returns `Ok(None)` when the caller is not allowed to describe the table; the key schema
    /// is then unknown, but scans and puts may still be permitted.
    async fn describe_table(&self, table_name: &str) -> Result<Option<Table>>;

    /// Reads one page of a scan, starting after `exclusive_start_key` when given.
    async fn scan_page(
        &self,
        table_name: &str,
        limit: Option<i32>,
        exclusive_start_key: Option<Item>,
    ) -> Result<ScanPage>;

    /// Inserts or overwrites a single item by primary key.
    async fn put_item(&self, table_name: &str, item: Item) -> Result<()>;
}
