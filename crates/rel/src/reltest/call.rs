use rel_core::{mutation::Mutation, stmt::Value};

use std::fmt;

/// An adapter call, as received or as expected.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Call {
    Insert {
        table: String,
        mutation: Mutation,
    },
    Update {
        table: String,
        key_column: String,
        key: Value,
        mutation: Mutation,
    },
}

impl Call {
    /// The `MockAdapter` method that would register this call.
    pub(super) fn expect_string(&self) -> String {
        format!("expect_{self}")
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Call::Insert { table, mutation } => write!(f, "insert({table:?}, {mutation})"),
            Call::Update {
                table,
                key_column,
                key,
                mutation,
            } => write!(f, "update({table:?}, {key_column:?}, {key}, {mutation})"),
        }
    }
}
