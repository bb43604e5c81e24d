mod builder;
pub use builder::Builder;

use rel_core::{
    adapter::Adapter,
    mutation::Mutation,
    record::{Record, Reflect},
    schema::{Association, Field},
    set,
    stmt::Value,
    Clock, Document, Error, Result, Structset,
};

use async_recursion::async_recursion;
use std::sync::Arc;
use tracing::{debug, trace};

/// Persists records through an [`Adapter`].
///
/// Each call maps the record with [`Structset`], executes the resulting
/// mutation, then walks the loaded associations.
#[derive(Debug)]
pub struct Repository<A> {
    adapter: Arc<A>,
    clock: Arc<dyn Clock>,
    skip_zero: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Insert,
    Update,
}

impl<A: Adapter> Repository<A> {
    pub fn builder() -> Builder<A> {
        Builder::default()
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Inserts `record` and its loaded associations.
    ///
    /// The primary key returned by the adapter is written back into the
    /// record, and the foreign keys of inserted children are filled in.
    pub async fn insert<R: Record>(&self, record: &mut R) -> Result<()> {
        let mut mutation = self.mutation(record)?;
        self.save(record, &mut mutation, Op::Insert).await
    }

    /// Updates `record` by primary key and saves its loaded associations.
    pub async fn update<R: Record>(&self, record: &mut R) -> Result<()> {
        let mut mutation = self.mutation(record)?;
        self.save(record, &mut mutation, Op::Update).await
    }

    fn mutation(&self, record: &mut dyn Reflect) -> Result<Mutation> {
        let mut doc = Document::new(record)?;

        Structset::new(self.skip_zero)
            .clock(self.clock.clone())
            .build(&mut doc)
    }

    #[async_recursion]
    async fn save(&self, record: &mut dyn Reflect, mutation: &mut Mutation, op: Op) -> Result<()> {
        let schema = record.record_schema();

        match op {
            Op::Insert => {
                let key = self.adapter.insert(schema.table, mutation).await?;
                debug!(target: "rel::repo", table = schema.table, %key, "inserted");

                if !key.is_null() {
                    if let Some(field) = schema.primary_key_field() {
                        Document::new(&mut *record)?.set_field(field.column(), key)?;
                    }
                }
            }
            Op::Update => {
                let Some((column, key)) = Document::new(&mut *record)?.primary_key() else {
                    return Err(Error::invalid_record(format!(
                        "{} cannot be updated without a primary key",
                        schema.name
                    )));
                };

                if mutation.len() > 0 {
                    let rows = self.adapter.update(schema.table, column, &key, mutation).await?;
                    debug!(target: "rel::repo", table = schema.table, %key, rows, "updated");
                }
            }
        }

        if !mutation.cascade() {
            trace!(target: "rel::repo", record = schema.name, "cascade disabled");
            return Ok(());
        }

        for (field, association) in schema.associations() {
            let Some(assoc) = mutation.assoc_mut(field.column()) else {
                continue;
            };

            let reference = reference(&mut *record, association)?;

            for (index, child_mutation) in assoc.mutations_mut().iter_mut().enumerate() {
                let child = related(&mut *record, field, index)?;
                let op = link(child, child_mutation, &association.foreign_key, &reference)?;
                self.save(child, child_mutation, op).await?;
            }
        }

        Ok(())
    }
}

/// Value of the parent column referenced by the association's foreign key.
fn reference(record: &mut dyn Reflect, association: &Association) -> Result<Value> {
    let doc = Document::new(record)?;

    let value = match &association.references {
        Some(column) => doc.field(column),
        None => doc.primary_key().map(|(_, key)| key),
    };

    value.ok_or_else(|| {
        rel_core::err!(
            "{} has no column `{}` to reference",
            doc.name(),
            association.references.as_deref().unwrap_or("primary key")
        )
    })
}

fn related<'r>(record: &'r mut dyn Reflect, field: &Field, index: usize) -> Result<&'r mut dyn Reflect> {
    let name = record.record_schema().name;

    record
        .relation_mut(field.index)
        .and_then(|relation| relation.get_mut(index))
        .ok_or_else(|| {
            rel_core::err!(
                "{}.{} no longer holds a record at index {}",
                name,
                field.name.app_name,
                index
            )
        })
}

/// Points a child at its parent and decides how the child is saved.
fn link(
    child: &mut dyn Reflect,
    mutation: &mut Mutation,
    foreign_key: &str,
    reference: &Value,
) -> Result<Op> {
    let mut doc = Document::new(child)?;

    doc.set_field(foreign_key, reference.clone())?;
    let column = doc.column(foreign_key).unwrap_or(foreign_key);
    mutation.add(set(column, reference.clone()));

    if doc.is_primary_zero() {
        Ok(Op::Insert)
    } else {
        Ok(Op::Update)
    }
}
