use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use aws_sdk_dynamodb::{
    error::ProvideErrorMetadata, operation::scan::ScanOutput, types::KeyType, Client,
};
use tracing::{debug, warn};

use crate::dynamodb::{Item, ScanPage, Table, TableStore};

/// DynamoDB client wrapper for high-level operations.
///
/// This struct provides the handful of calls a table move needs, abstracting away
/// the low-level details of the AWS SDK.
///
/// # DynamoDB Concepts
///
/// ## Tables
/// In DynamoDB, a table is a collection of items (rows), and each item consists of attributes (columns).
/// Tables are schema-less, allowing each item to have a different structure.
///
/// ## Operations
/// - **Describe**: Read a table's key schema and status
/// - **Scan**: Read every item in a table, one page at a time
/// - **Put**: Add an item to a table, replacing any item with the same primary key
///
/// # Error Handling
///
/// Methods return `Result<T, anyhow::Error>`, with the failing table named in the context.
#[derive(Debug, Clone)]
pub struct DynamoDb {
    client: Client,
}

impl DynamoDb {
    /// Creates a new `DynamoDb` instance.
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self::from_client(Client::new(sdk_config))
    }

    /// Wraps an already configured SDK client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TableStore for DynamoDb {
    async fn describe_table(&self, table_name: &str) -> Result<Option<Table>> {
        let output = match self.client.describe_table().table_name(table_name).send().await {
            Ok(output) => output,
            Err(e) if e.code() == Some("AccessDeniedException") => {
                warn!(
                    "Not allowed to describe '{table_name}': {}",
                    e.message().unwrap_or("access denied")
                );
                return Ok(None);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to describe table '{table_name}'"))
            }
        };

        let description = output
            .table()
            .ok_or_else(|| anyhow!("No description returned for table '{table_name}'"))?;

        let mut partition_key = None;
        let mut sort_key = None;
        for element in description.key_schema() {
            match element.key_type() {
                KeyType::Hash => partition_key = Some(element.attribute_name()),
                KeyType::Range => sort_key = Some(element.attribute_name()),
                other => debug!("Ignoring key schema element of type {other:?}"),
            }
        }
        let partition_key = partition_key
            .ok_or_else(|| anyhow!("Table '{table_name}' has no partition key"))?;

        debug!(
            "Table '{table_name}' status {:?}, partition key '{partition_key}', sort key {sort_key:?}",
            description.table_status()
        );
        Ok(Some(Table::new(table_name, partition_key, sort_key)))
    }

    async fn scan_page(
        &self,
        table_name: &str,
        limit: Option<i32>,
        exclusive_start_key: Option<Item>,
    ) -> Result<ScanPage> {
        let response: ScanOutput = self
            .client
            .scan()
            .table_name(table_name)
            .set_limit(limit)
            .set_exclusive_start_key(exclusive_start_key.map(Item::into_attributes))
            .send()
            .await?;

        Ok(ScanPage {
            items: response
                .items
                .unwrap_or_default()
                .into_iter()
                .map(Item::from_attributes)
                .collect(),
            last_evaluated_key: response.last_evaluated_key.map(Item::from_attributes),
        })
    }

    async fn put_item(&self, table_name: &str, item: Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(item.attributes))
            .send()
            .await?;

        debug!("Item added to '{table_name}'");
        Ok(())
    }
}
