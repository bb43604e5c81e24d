use crate::{
    err,
    record::{self, Reflect},
    schema::{Association, Cardinality, Field, RecordSchema},
    stmt::{Type, Value},
    Error, Result,
};

use std::fmt;

/// A view over one record, giving access to its fields by name.
///
/// The document borrows the record mutably; writes through `set_field` and
/// `apply` change the record in place.
pub struct Document<'a> {
    record: &'a mut dyn Reflect,
    schema: &'static RecordSchema,
}

impl<'a> Document<'a> {
    /// Wraps a record, checking its declaration table first.
    pub fn new(record: &'a mut dyn Reflect) -> Result<Document<'a>> {
        let schema = record.record_schema();
        schema.verify()?;

        for (field, _) in schema.associations() {
            if record.relation(field.index).is_none() {
                return Err(Error::invalid_record(format!(
                    "{}.{} is declared as an association but the record does not expose it",
                    schema.name, field.name.app_name
                )));
            }
        }

        Ok(Document { record, schema })
    }

    pub fn schema(&self) -> &'static RecordSchema {
        self.schema
    }

    /// Rust type name of the record.
    pub fn name(&self) -> &'static str {
        self.schema.name
    }

    pub fn table(&self) -> &'static str {
        self.schema.table
    }

    /// Column names of the plain fields, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> {
        self.schema.primitives().map(Field::column)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.primitive(name).is_some()
    }

    /// Column name of a plain field, resolving Rust field names too.
    pub fn column(&self, name: &str) -> Option<&'static str> {
        Some(self.primitive(name)?.column())
    }

    pub fn field_type(&self, name: &str) -> Option<&'static Type> {
        self.primitive(name)?.primitive_ty()
    }

    /// Current value of a plain field. `None` when the record has no such
    /// field.
    pub fn field(&self, name: &str) -> Option<Value> {
        let field = self.primitive(name)?;
        self.record.get(field.index)
    }

    /// Assigns a plain field.
    ///
    /// The record is left unchanged when the value does not fit the
    /// field's declared type.
    pub fn set_field(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let Some(field) = self.primitive(name) else {
            return Err(Error::unknown_field(self.schema.name, name));
        };

        self.write(field, value.into())
    }

    /// Column and current value of the primary key.
    pub fn primary_key(&self) -> Option<(&'static str, Value)> {
        let field = self.schema.primary_key_field()?;
        Some((field.column(), self.record.get(field.index)?))
    }

    /// Returns `true` if the primary key holds its zero value, or if the
    /// record declares none.
    pub fn is_primary_zero(&self) -> bool {
        match self.schema.primary_key {
            Some(index) => self.record.is_zero(index),
            None => true,
        }
    }

    /// Association fields in declaration order.
    pub fn associations(&self) -> impl Iterator<Item = (&'static Field, &'static Association)> {
        self.schema.associations()
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.association(name)
            .ok()
            .and_then(|(field, _)| self.record.relation(field.index))
            .is_some_and(|relation| relation.is_loaded())
    }

    /// Number of related records currently held by an association.
    pub fn assoc_len(&self, name: &str) -> usize {
        self.association(name)
            .ok()
            .and_then(|(field, _)| self.record.relation(field.index))
            .map_or(0, |relation| relation.len())
    }

    /// Opens a document over a related record.
    ///
    /// `index` is required for has-many associations. Passing the current
    /// length appends a default related record; an empty `Option`
    /// association is filled with a default record.
    pub fn assoc_document(&mut self, name: &str, index: Option<usize>) -> Result<Document<'_>> {
        let (field, association) = self.association(name)?;

        let index = match (association.cardinality, index) {
            (Cardinality::Many, Some(index)) => index,
            (Cardinality::Many, None) => {
                return Err(err!(
                    "{}.{} holds many records; an index is required",
                    self.schema.name,
                    field.name.app_name
                ))
            }
            (Cardinality::One, None | Some(0)) => 0,
            (Cardinality::One, Some(index)) => {
                return Err(err!(
                    "index {} is out of bounds for {}.{} which holds one record",
                    index,
                    self.schema.name,
                    field.name.app_name
                ))
            }
        };

        self.related(field, index, true)
    }

    /// Returns `true` when every plain field is zero and no association
    /// holds a loaded record.
    pub fn is_zero(&self) -> bool {
        record::is_blank(&*self.record)
    }

    pub(crate) fn record(&self) -> &dyn Reflect {
        &*self.record
    }

    /// Opens the related record at `index` of an association field,
    /// growing the association when `grow` is set.
    pub(crate) fn related(&mut self, field: &Field, index: usize, grow: bool) -> Result<Document<'_>> {
        let schema = self.schema;

        let Some(relation) = self.record.relation_mut(field.index) else {
            return Err(Error::invalid_record(format!(
                "{}.{} is declared as an association but the record does not expose it",
                schema.name, field.name.app_name
            )));
        };

        let len = relation.len();
        let related = if grow {
            relation.get_or_insert(index)
        } else {
            relation.get_mut(index)
        };

        match related {
            Some(record) => Document::new(record),
            None => Err(err!(
                "index {} is out of bounds for {}.{} which holds {} records",
                index,
                schema.name,
                field.name.app_name,
                len
            )),
        }
    }

    /// Writes a value into a plain field after checking its declared type.
    pub(crate) fn write(&mut self, field: &Field, value: Value) -> Result<()> {
        let Some(ty) = field.primitive_ty() else {
            return Err(Error::unknown_field(self.schema.name, field.column()));
        };

        if !value.is_a(ty) {
            return Err(Error::type_mismatch(
                self.schema.name,
                field.column(),
                value.infer_ty(),
                ty.clone(),
            ));
        }

        let value_ty = value.infer_ty();
        self.record.set(field.index, value).map_err(|err| {
            err.context(Error::type_mismatch(
                self.schema.name,
                field.column(),
                value_ty,
                ty.clone(),
            ))
        })
    }

    fn primitive(&self, name: &str) -> Option<&'static Field> {
        self.schema
            .field_by_name(name)
            .filter(|field| field.is_primitive())
    }

    fn association(&self, name: &str) -> Result<(&'static Field, &'static Association)> {
        self.schema
            .field_by_name(name)
            .and_then(|field| Some((field, field.association_ty()?)))
            .ok_or_else(|| Error::unknown_field(self.schema.name, name))
    }
}

impl fmt::Debug for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = f.debug_map();
        for field in self.schema.primitives() {
            fields.entry(&field.column(), &self.record.get(field.index));
        }
        fields.finish()
    }
}
