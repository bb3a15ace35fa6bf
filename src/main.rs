mod command_line;
mod dynamodb;
mod logging;
mod migration;
mod utils;


use anyhow::Result;
use clap::Parser;
use std::io::Write;

use crate::command_line::Cli;
use crate::dynamodb::{DynamoDb, TableStore};
use crate::migration::{Migration, MigrationReport};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging()?;

    let cli = Cli::parse();
    let migration = cli.migration()?;

    let sdk_config = cli.sdk_config().await;
    let ddb = DynamoDb::new(&sdk_config);

    move_items(&migration, &ddb, &mut std::io::stdout()).await?;
    Ok(())
}

/// Runs the move and, only once it has fully succeeded, writes the completion line to `out`.
async fn move_items<S, W>(
    migration: &Migration,
    store: &S,
    out: &mut W,
) -> Result<MigrationReport>
where
    S: TableStore + ?Sized,
    W: Write,
{
    let report = migration.run(store).await?;
    writeln!(out, "Move Complete")?;
    Ok(report)
}
