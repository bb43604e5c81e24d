use crate::stmt::Value;

use std::fmt;

/// A single field-level change.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutate {
    /// Assign `value` to `field`
    Set { field: String, value: Value },

    /// Add `by` to an integer field, in storage
    Inc { field: String, by: i64 },

    /// Subtract `by` from an integer field, in storage
    Dec { field: String, by: i64 },

    /// A raw assignment fragment passed through to the adapter, keyed by its text
    SetFragment { raw: String, args: Vec<Value> },
}

impl Mutate {
    /// The key the mutate is stored under in a `Mutation`.
    pub fn field(&self) -> &str {
        match self {
            Self::Set { field, .. } | Self::Inc { field, .. } | Self::Dec { field, .. } => field,
            Self::SetFragment { raw, .. } => raw,
        }
    }

    /// The assigned value of a `Set`.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Set { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set { .. })
    }
}

impl fmt::Display for Mutate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set { field, value } => write!(f, "set({field:?}, {value})"),
            Self::Inc { field, by } => write!(f, "inc({field:?}, {by})"),
            Self::Dec { field, by } => write!(f, "dec({field:?}, {by})"),
            Self::SetFragment { raw, args } => {
                write!(f, "set_fragment({raw:?}")?;
                for arg in args {
                    write!(f, ", {arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}
