use anyhow::{bail, Result};
use clap::Parser;
use tokio::time::Duration;

use crate::migration::Migration;

pub const DEFAULT_SOURCE_TABLE: &str = "DataScribeBackendStack-ReportTable270236C0-IXUO3HMP50Z0";
pub const DEFAULT_DESTINATION_TABLE: &str = "DynamoDBStack-ReportTable270236C0-1FGP28WTJ6YO";

/// Command-line options. Every option has a default, so running with no arguments moves
/// the report table between the two stacks.
#[derive(Parser, Debug)]
#[command(name = "move-table-items")]
#[command(about = "Copy every item of one DynamoDB table into another", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Table to read items from
    #[arg(long, env = "SOURCE_TABLE", default_value = DEFAULT_SOURCE_TABLE)]
    pub source: String,

    /// Table to write items to
    #[arg(long, env = "DESTINATION_TABLE", default_value = DEFAULT_DESTINATION_TABLE)]
    pub destination: String,

    /// Maximum number of items per scan request (default: as many as fit in one response)
    #[arg(long, env = "SCAN_PAGE_SIZE", value_parser = clap::value_parser!(i32).range(1..))]
    pub page_size: Option<i32>,

    /// Retries for a failed write before giving up
    #[arg(long, env = "MAX_RETRIES", default_value_t = 0)]
    pub max_retries: usize,

    /// Delay before the first retry, in milliseconds
    #[arg(long, env = "RETRY_DELAY_MS", default_value_t = 500)]
    pub retry_delay_ms: u64,

    /// AWS region (default: from the AWS environment)
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Custom DynamoDB endpoint, e.g. http://localhost:8000 for DynamoDB Local
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Scan the source and report what would be copied without writing
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Turns the parsed options into a [`Migration`].
    pub fn migration(&self) -> Result<Migration> {
        if self.source == self.destination {
            bail!(
                "Source and destination are the same table '{}'",
                self.source
            );
        }

        Ok(Migration::new(&self.source, &self.destination)
            .page_size(self.page_size)
            .max_retries(self.max_retries)
            .retry_delay(Duration::from_millis(self.retry_delay_ms))
            .dry_run(self.dry_run))
    }

    /// Loads the AWS SDK configuration, applying `--region` and `--endpoint-url` overrides.
    pub async fn sdk_config(&self) -> aws_config::SdkConfig {
        let mut loader = aws_config::from_env();
        if let Some(region) = &self.region {
            loader = loader.region(aws_sdk_dynamodb::config::Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        loader.load().await
    }
}
