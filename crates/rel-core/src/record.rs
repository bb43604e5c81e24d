mod relation;
pub use relation::{Relation, RelationField};

use crate::{schema::RecordSchema, stmt::Value, Result};

/// A struct that can be mapped to mutations.
///
/// Implemented by `#[derive(Record)]`. The declaration table is built once
/// per type and cached for the life of the process.
pub trait Record: Reflect + 'static {
    fn schema() -> &'static RecordSchema;
}

/// Field access by declaration index, used by `Document` to work over
/// records without knowing their concrete type.
///
/// Indexes refer to `RecordSchema::fields`. Records are `Send` so that
/// repository futures holding a borrow of one can move between threads.
pub trait Reflect: Send {
    fn record_schema(&self) -> &'static RecordSchema;

    /// Current value of a primitive field. `None` for associations and
    /// unknown indexes.
    fn get(&self, field: usize) -> Option<Value>;

    /// Whether the field holds its zero value. Associations are zero when
    /// not loaded.
    fn is_zero(&self, field: usize) -> bool;

    /// Replaces the value of a primitive field.
    fn set(&mut self, field: usize, value: Value) -> Result<()>;

    fn relation(&self, field: usize) -> Option<&dyn Relation>;

    fn relation_mut(&mut self, field: usize) -> Option<&mut dyn Relation>;
}

/// Returns `true` when every field of the record is zero and no association
/// holds a loaded record. An empty collection is the zero value of a has-many.
pub fn is_blank(record: &dyn Reflect) -> bool {
    let schema = record.record_schema();
    (0..schema.fields.len()).all(|index| match record.relation(index) {
        Some(relation) => relation.is_empty() || !relation.is_loaded(),
        None => record.is_zero(index),
    })
}
