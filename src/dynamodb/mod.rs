//! # DynamoDB Module
//!
//! This module provides the storage side of a table move.
//!
//! ## Components
//!
//! - `TableStore`: The describe/scan/put operations a move is written against.
//! - `DynamoDb`: A client wrapper implementing `TableStore` with the AWS SDK.
//! - `Item`: An opaque DynamoDB item.
//! - `Table`: A table name and its key schema.
//!
//! ## Usage
//!
//! Credentials and region come from the standard AWS environment:
//!
//! - `AWS_ACCESS_KEY_ID`: Your AWS access key ID.
//! - `AWS_SECRET_ACCESS_KEY`: Your AWS secret access key.
//! - `AWS_REGION`: The AWS region where your DynamoDB tables are located.
//!
//! Optionally, you can also set:
//! - `AWS_SESSION_TOKEN`: If you're using temporary credentials.
//! - `AWS_ENDPOINT_URL`: For using a custom endpoint (e.g., DynamoDB Local).

mod client;
mod item;
mod store;
mod table;

pub use client::DynamoDb;
pub use item::Item;
pub use store::{ScanPage, TableStore};
pub use table::Table;
