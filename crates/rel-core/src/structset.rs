use crate::{
    clock::{Clock, SystemClock},
    document::Document,
    mutation::Mutation,
    mutator::set,
    record::Reflect,
    schema::{Cardinality, Field, RecordSchema},
    stmt::{Type, Value},
    Error, Result,
};

use chrono::{DateTime, SubsecRound, Utc};
use std::sync::Arc;
use tracing::{debug, trace};

/// Deepest association nesting mapped before giving up.
pub const MAX_ASSOC_DEPTH: usize = 32;

/// Maps a whole record, and its loaded associations, into a mutation.
///
/// Fields are visited in declaration order:
///
/// * a zero primary key is never emitted;
/// * `created_at` / `inserted_at` are set to the current time when zero;
/// * `updated_at` is always set to the current time;
/// * other plain fields are emitted unless `skip_zero` is set and the
///   value is zero.
///
/// Timestamps only get this treatment when the target field is declared
/// with a time type. Otherwise they are mapped like any other field.
#[derive(Debug)]
pub struct Structset<'a> {
    /// Record copied into the target, when it is not the target itself
    source: Option<Document<'a>>,

    skip_zero: bool,

    clock: Arc<dyn Clock>,
}

impl Structset<'static> {
    pub fn new(skip_zero: bool) -> Structset<'static> {
        Structset {
            source: None,
            skip_zero,
            clock: Arc::new(SystemClock),
        }
    }
}

impl<'a> Structset<'a> {
    /// Copies the fields of `source` into the target document.
    ///
    /// The target must declare every field `source` would emit, and every
    /// association `source` has loaded with the same cardinality. The check
    /// runs before anything is written.
    pub fn copy_from(source: &'a mut dyn Reflect, skip_zero: bool) -> Result<Structset<'a>> {
        Ok(Structset {
            source: Some(Document::new(source)?),
            skip_zero,
            clock: Arc::new(SystemClock),
        })
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Maps into `target`, writing populated values (timestamps, copied
    /// fields) into the record behind it.
    pub fn build(&mut self, target: &mut Document<'_>) -> Result<Mutation> {
        let mapper = Mapper {
            skip_zero: self.skip_zero,
            now: self.clock.now().trunc_subsecs(0),
        };

        let mutation = match &mut self.source {
            Some(source) => mapper.copy(source, target)?,
            None => mapper.map(target, 0)?,
        };

        debug!(
            target: "rel::structset",
            record = target.name(),
            fields = mutation.len(),
            skip_zero = self.skip_zero,
            "mapped record"
        );

        Ok(mutation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timestamp {
    Created,
    Updated,
}

impl Timestamp {
    fn from_column(column: &str) -> Option<Timestamp> {
        match column {
            "created_at" | "inserted_at" => Some(Timestamp::Created),
            "updated_at" => Some(Timestamp::Updated),
            _ => None,
        }
    }
}

/// A value planned for a target field.
struct Assign {
    field: &'static Field,
    value: Value,
}

struct Mapper {
    skip_zero: bool,
    now: DateTime<Utc>,
}

impl Mapper {
    fn map(&self, doc: &mut Document<'_>, depth: usize) -> Result<Mutation> {
        check_depth(doc.schema(), depth)?;

        let assigns = self.plan(doc.record(), doc.schema())?;
        let mut mutation = self.assign(doc, assigns)?;
        let schema = doc.schema();
        self.map_associations(doc, schema, depth, &mut mutation)?;

        Ok(mutation)
    }

    fn copy(&self, source: &mut Document<'_>, target: &mut Document<'_>) -> Result<Mutation> {
        let assigns = self.plan(source.record(), target.schema())?;
        check_associations(source, target.schema())?;

        let mut mutation = self.assign(target, assigns)?;

        // Related records are mapped in place on the source side.
        self.map_associations(source, target.schema(), 0, &mut mutation)?;

        Ok(mutation)
    }

    /// Decides the value of every plain field of `source` that lands in
    /// `target`, without writing anything.
    fn plan(&self, source: &dyn Reflect, target: &'static RecordSchema) -> Result<Vec<Assign>> {
        let schema = source.record_schema();
        let mut assigns = Vec::with_capacity(schema.fields.len());

        for field in schema.primitives() {
            let column = field.column();
            let declared = target
                .field_by_name(column)
                .filter(|declared| declared.is_primitive());

            let Some(value) = self.value(source, field, declared)? else {
                trace!(target: "rel::structset", record = schema.name, column, "skipped zero value");
                continue;
            };

            let Some(declared) = declared else {
                return Err(Error::shape_mismatch(schema.name, target.name, column));
            };

            // Range is checked here too so a failing copy writes nothing.
            if let Some(ty) = declared.primitive_ty() {
                if !value.fits(ty) {
                    return Err(Error::type_mismatch(
                        target.name,
                        declared.column(),
                        value.infer_ty(),
                        ty.clone(),
                    ));
                }
            }

            assigns.push(Assign {
                field: declared,
                value,
            });
        }

        Ok(assigns)
    }

    /// The value emitted for one field, or `None` when it is left out.
    fn value(
        &self,
        source: &dyn Reflect,
        field: &Field,
        declared: Option<&Field>,
    ) -> Result<Option<Value>> {
        let zero = source.is_zero(field.index);

        if field.primary_key && zero {
            return Ok(None);
        }

        let value = source.get(field.index).unwrap_or_default();

        // Timestamps follow the target's declaration.
        let ty = declared
            .and_then(Field::primitive_ty)
            .filter(|ty| ty.is_time());

        match (ty, Timestamp::from_column(field.column())) {
            (Some(ty), Some(Timestamp::Created)) if zero => Ok(Some(self.now_as(ty))),
            (Some(_), Some(Timestamp::Created)) => Ok(Some(value)),
            (Some(ty), Some(Timestamp::Updated)) => Ok(Some(self.now_as(ty))),
            _ if self.skip_zero && zero => Ok(None),
            _ => Ok(Some(value)),
        }
    }

    fn now_as(&self, ty: &Type) -> Value {
        match ty.non_null() {
            Type::NaiveDateTime => Value::NaiveDateTime(self.now.naive_utc()),
            _ => Value::DateTime(self.now),
        }
    }

    fn assign(&self, doc: &mut Document<'_>, assigns: Vec<Assign>) -> Result<Mutation> {
        let mut mutation = Mutation::new();

        for Assign { field, value } in assigns {
            doc.write(field, value.clone())?;
            mutation.add(set(field.column(), value));
        }

        Ok(mutation)
    }

    /// Maps the loaded associations of `doc` that `declared` also has.
    fn map_associations(
        &self,
        doc: &mut Document<'_>,
        declared: &RecordSchema,
        depth: usize,
        mutation: &mut Mutation,
    ) -> Result<()> {
        let schema = doc.schema();

        for (field, association) in schema.associations() {
            let (loaded, len) = match doc.record().relation(field.index) {
                Some(relation) => (relation.is_loaded(), relation.len()),
                None => (false, 0),
            };

            let is_declared = declared
                .field_by_name(field.column())
                .is_some_and(|declared| !declared.is_primitive());

            if !loaded || !is_declared {
                trace!(
                    target: "rel::structset",
                    record = schema.name,
                    association = field.column(),
                    "association not loaded"
                );
                continue;
            }

            match association.cardinality {
                Cardinality::One => {
                    let mut related = doc.related(field, 0, false)?;
                    let child = self.map(&mut related, depth + 1)?;
                    mutation.set_assoc(field.column(), child);
                }
                Cardinality::Many => {
                    let mut children = Vec::with_capacity(len);
                    for index in 0..len {
                        let mut related = doc.related(field, index, false)?;
                        children.push(self.map(&mut related, depth + 1)?);
                    }
                    mutation.set_assoc(field.column(), children);
                }
            }
        }

        Ok(())
    }
}

fn check_depth(schema: &RecordSchema, depth: usize) -> Result<()> {
    if depth > MAX_ASSOC_DEPTH {
        return Err(Error::invalid_record(format!(
            "{} nests associations deeper than {} levels",
            schema.name, MAX_ASSOC_DEPTH
        )));
    }

    Ok(())
}

/// Every association holding records on the source must be declared on
/// the target with the same cardinality. Empty ones are dropped.
fn check_associations(source: &Document<'_>, target: &RecordSchema) -> Result<()> {
    for (field, association) in source.associations() {
        let declared = target
            .field_by_name(field.column())
            .and_then(Field::association_ty);

        if !source.is_loaded(field.column()) {
            continue;
        }

        if declared.is_none() && source.assoc_len(field.column()) == 0 {
            continue;
        }

        if !declared.is_some_and(|declared| declared.cardinality == association.cardinality) {
            return Err(Error::shape_mismatch(
                source.name(),
                target.name,
                field.column(),
            ));
        }
    }

    Ok(())
}
