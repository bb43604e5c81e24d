use crate::{mutation::Mutation, stmt::Value, Result};

use async_trait::async_trait;
use std::fmt::Debug;

/// Executes mutations against a storage engine.
///
/// Adapters translate engine errors into the generic kinds, in particular
/// unique constraint violations into [`Error::duplicate_key`].
///
/// [`Error::duplicate_key`]: crate::Error::duplicate_key
#[async_trait]
pub trait Adapter: Debug + Send + Sync + 'static {
    /// Inserts one row and returns its primary key.
    ///
    /// Returns `Value::Null` when the table assigns no key.
    async fn insert(&self, table: &str, mutation: &Mutation) -> Result<Value>;

    /// Updates the row identified by `key` and returns the number of
    /// affected rows.
    async fn update(
        &self,
        table: &str,
        key_column: &str,
        key: &Value,
        mutation: &Mutation,
    ) -> Result<u64>;
}
