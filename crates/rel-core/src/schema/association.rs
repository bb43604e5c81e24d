use super::RecordSchema;

use std::fmt;

/// Whether an association links to one related record or to an ordered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    One,
    Many,
}

/// Declaration of an association field.
#[derive(Clone)]
pub struct Association {
    /// One or many related records
    pub cardinality: Cardinality,

    /// Declaration table of the related record type.
    ///
    /// Resolved lazily so records may reference themselves.
    pub target: fn() -> &'static RecordSchema,

    /// Column on the related record holding the owner's key
    pub foreign_key: String,

    /// Column on the owner referenced by the foreign key. `None` means the
    /// owner's primary key.
    pub references: Option<String>,
}

impl Association {
    pub fn new(
        cardinality: Cardinality,
        target: fn() -> &'static RecordSchema,
        foreign_key: impl Into<String>,
        references: Option<&str>,
    ) -> Association {
        Association {
            cardinality,
            target,
            foreign_key: foreign_key.into(),
            references: references.map(String::from),
        }
    }

    pub fn target(&self) -> &'static RecordSchema {
        (self.target)()
    }

    pub fn is_many(&self) -> bool {
        self.cardinality == Cardinality::Many
    }
}

impl fmt::Debug for Association {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Association")
            .field("cardinality", &self.cardinality)
            .field("target", &self.target().name)
            .field("foreign_key", &self.foreign_key)
            .field("references", &self.references)
            .finish()
    }
}
