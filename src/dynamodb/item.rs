use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;
use std::fmt;

use crate::dynamodb::Table;

/// Represents a DynamoDB item with various attribute types.
///
/// In DynamoDB, an item is a collection of attributes, each with a name and a value.
/// Items moved between tables are treated as opaque: the attribute map read from the
/// source is written to the destination as-is.
///
/// # Primary Key
///
/// - Every item in a table is uniquely identified by its primary key.
/// - The primary key can be simple (partition key only) or composite (partition key and sort key).
///
/// # Example
///
/// ```ignore
/// let item = Item::new()
///     .set_string("report_id", "r-1")
///     .set_number("pages", 12.0);
/// ```
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Item {
    pub(crate) attributes: HashMap<String, AttributeValue>,
}

impl Item {
    /// Creates a new empty `Item`.
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a raw attribute map as returned by the SDK.
    pub fn from_attributes(attributes: HashMap<String, AttributeValue>) -> Self {
        Self { attributes }
    }

    /// Consumes the item, returning the raw attribute map.
    pub fn into_attributes(self) -> HashMap<String, AttributeValue> {
        self.attributes
    }

    /// Sets a string attribute.
    #[allow(dead_code)]
    pub fn set_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(key.into(), AttributeValue::S(value.into()));
        self
    }

    /// Sets a number attribute.
    ///
    /// In DynamoDB, number attributes are used for numeric data and are stored with high precision.
    #[allow(dead_code)]
    pub fn set_number(mut self, key: impl Into<String>, value: impl Into<f64>) -> Self {
        self.attributes
            .insert(key.into(), AttributeValue::N(value.into().to_string()));
        self
    }

    /// Gets the value of an attribute as a string.
    ///
    /// Returns `None` if the attribute doesn't exist or is not a string.
    #[allow(dead_code)]
    pub fn get_string(&self, key: &str) -> Option<&String> {
        self.attributes.get(key).and_then(|av| av.as_s().ok())
    }

    /// Gets the value of an attribute as a number (f64).
    ///
    /// Returns `None` if the attribute doesn't exist, is not a number, or can't be parsed as f64.
    #[allow(dead_code)]
    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.attributes
            .get(key)
            .and_then(|av| av.as_n().ok())
            .and_then(|n| n.parse().ok())
    }

    /// Extracts the primary key attributes of this item for `table`.
    ///
    /// Key attributes missing from the item are left out, so the result may be empty.
    pub fn key_of(&self, table: &Table) -> Item {
        let attributes = table
            .key_attributes()
            .filter_map(|name| {
                self.attributes
                    .get(name)
                    .map(|value| (name.to_string(), value.clone()))
            })
            .collect();
        Item { attributes }
    }
}

/// Renders the item as `{name: value, ...}` with names sorted, used in logs and errors.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.attributes.keys().collect();
        names.sort();

        write!(f, "{{")?;
        for (i, name) in names.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: ")?;
            match &self.attributes[name] {
                AttributeValue::S(s) => write!(f, "{s:?}")?,
                AttributeValue::N(n) => write!(f, "{n}")?,
                AttributeValue::Bool(b) => write!(f, "{b}")?,
                other => write!(f, "{other:?}")?,
            }
        }
        write!(f, "}}")
    }
}
